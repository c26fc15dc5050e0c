//! Studio packages and the static price table.
//!
//! Prices are display strings, not computed amounts. The same text is shown
//! on the pricing cards, in the summaries and in persisted booking records.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Package preselected when the wizard starts or is reset.
pub const DEFAULT_PACKAGE: Package = Package::Professional;

/// A bookable studio package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Package {
    Basic,
    Professional,
    Cinematic,
}

impl Package {
    pub const ALL: [Package; 3] = [Self::Basic, Self::Professional, Self::Cinematic];

    /// Parse a package name. Matching ignores case and surrounding whitespace,
    /// so pricing-button values like `"Basic"` resolve too.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "professional" => Ok(Self::Professional),
            "cinematic" => Ok(Self::Cinematic),
            _ => Err(CoreError::UnknownPackage(name.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Professional => "professional",
            Self::Cinematic => "cinematic",
        }
    }

    /// Human-readable package name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Professional => "Professional",
            Self::Cinematic => "Cinematic",
        }
    }

    /// Display price, e.g. `"$1,499"`.
    pub fn price(self) -> &'static str {
        match self {
            Self::Basic => "$499",
            Self::Professional => "$899",
            Self::Cinematic => "$1,499",
        }
    }

    /// Summary line, e.g. `"Basic - $499"`.
    pub fn display_line(self) -> String {
        format!("{} - {}", self.label(), self.price())
    }
}

impl Default for Package {
    fn default() -> Self {
        DEFAULT_PACKAGE
    }
}
