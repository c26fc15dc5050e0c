//! Payment methods offered on the optional payment step.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Payment method shown when the client has not picked one.
pub const DEFAULT_PAYMENT_METHOD: PaymentMethod = PaymentMethod::BankTransfer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[serde(rename = "bank")]
    BankTransfer,
    Qris,
    Dana,
    Gopay,
}

impl PaymentMethod {
    /// Parse the `data-method` value of a payment option.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "bank" => Ok(Self::BankTransfer),
            "qris" => Ok(Self::Qris),
            "dana" => Ok(Self::Dana),
            "gopay" => Ok(Self::Gopay),
            _ => Err(CoreError::UnknownPaymentMethod(name.to_string())),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::BankTransfer => "Bank Transfer",
            Self::Qris => "QRIS",
            Self::Dana => "DANA",
            Self::Gopay => "GoPay",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_valid() {
        assert_eq!(PaymentMethod::from_name("bank").unwrap(), PaymentMethod::BankTransfer);
        assert_eq!(PaymentMethod::from_name("QRIS").unwrap(), PaymentMethod::Qris);
        assert_eq!(PaymentMethod::from_name("gopay").unwrap(), PaymentMethod::Gopay);
    }

    #[test]
    fn from_name_invalid() {
        assert!(PaymentMethod::from_name("paypal").is_err());
    }

    #[test]
    fn labels_match_payment_cards() {
        assert_eq!(PaymentMethod::BankTransfer.label(), "Bank Transfer");
        assert_eq!(PaymentMethod::Dana.label(), "DANA");
        assert_eq!(DEFAULT_PAYMENT_METHOD.label(), "Bank Transfer");
    }

    #[test]
    fn serde_uses_data_method_names() {
        let json = serde_json::to_string(&PaymentMethod::BankTransfer).unwrap();
        assert_eq!(json, "\"bank\"");
        let parsed: PaymentMethod = serde_json::from_str("\"qris\"").unwrap();
        assert_eq!(parsed, PaymentMethod::Qris);
    }
}
