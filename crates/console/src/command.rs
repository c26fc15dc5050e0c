//! Line commands accepted by the console.

use lumiere_core::types::StepNumber;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Select a package by name, or clear the selection with `none`.
    Package(Option<String>),
    /// Set a named form field.
    Set { field: String, value: String },
    /// Pick a payment method.
    Method(String),
    /// Tick or untick the payment confirmation.
    Confirm(bool),
    Next,
    Back,
    Goto(StepNumber),
    Submit,
    Status,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for a list of commands.")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),
}

pub const HELP: &str = "\
Commands:
  package <basic|professional|cinematic|none>   choose a package
  set <field> <value>                           fill a form field (client-name, client-email,
                                                client-phone, event-type, event-date,
                                                event-time, event-location, event-notes)
  method <bank|qris|dana|gopay>                 choose a payment method
  confirm | unconfirm                           tick the payment confirmation
  next | back | goto <step>                     move through the wizard
  submit                                        submit the booking
  status                                        show the current draft
  help | quit";

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "package" if rest.is_empty() => return Err(CommandError::Usage("package <name>")),
            "package" if rest.eq_ignore_ascii_case("none") => Self::Package(None),
            "package" => Self::Package(Some(rest.to_string())),
            "set" => match rest.split_once(char::is_whitespace) {
                Some((field, value)) => Self::Set {
                    field: field.to_string(),
                    value: value.trim().to_string(),
                },
                None if !rest.is_empty() => Self::Set {
                    field: rest.to_string(),
                    value: String::new(),
                },
                None => return Err(CommandError::Usage("set <field> <value>")),
            },
            "method" if rest.is_empty() => return Err(CommandError::Usage("method <name>")),
            "method" => Self::Method(rest.to_string()),
            "confirm" => Self::Confirm(true),
            "unconfirm" => Self::Confirm(false),
            "next" => Self::Next,
            "back" => Self::Back,
            "goto" => rest
                .parse()
                .map(Self::Goto)
                .map_err(|_| CommandError::Usage("goto <step number>"))?,
            "submit" => Self::Submit,
            "status" => Self::Status,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_is_no_command() {
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn set_keeps_spaces_in_value() {
        assert_eq!(
            Command::parse("set event-location  Grand Hall A ").unwrap(),
            Some(Command::Set {
                field: "event-location".to_string(),
                value: "Grand Hall A".to_string(),
            })
        );
    }

    #[test]
    fn set_without_value_clears_field() {
        assert_eq!(
            Command::parse("set client-name").unwrap(),
            Some(Command::Set {
                field: "client-name".to_string(),
                value: String::new(),
            })
        );
    }

    #[test]
    fn package_none_deselects() {
        assert_eq!(Command::parse("package NONE").unwrap(), Some(Command::Package(None)));
        assert_eq!(
            Command::parse("package basic").unwrap(),
            Some(Command::Package(Some("basic".to_string())))
        );
    }

    #[test]
    fn goto_requires_number() {
        assert_eq!(Command::parse("goto 3").unwrap(), Some(Command::Goto(3)));
        assert!(matches!(Command::parse("goto x"), Err(CommandError::Usage(_))));
    }

    #[test]
    fn unknown_command_is_reported() {
        assert_eq!(
            Command::parse("dance"),
            Err(CommandError::Unknown("dance".to_string()))
        );
    }
}
