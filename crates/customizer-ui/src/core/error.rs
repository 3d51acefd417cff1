//! Error types for the style settings layer.

use crate::core::options::StyleField;
use thiserror::Error;

/// Failures raised while mapping DOM control values onto style settings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// A control reported a value that is not in the field's catalog.
    #[error("unknown option `{value}` for {field}")]
    UnknownOption {
        /// Field whose catalog was searched.
        field: StyleField,
        /// Raw value reported by the control.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::StyleError;
    use crate::core::options::StyleField;

    #[test]
    fn unknown_option_message_names_field_and_value() {
        let err = StyleError::UnknownOption {
            field: StyleField::FontColor,
            value: "#123456".to_string(),
        };
        assert_eq!(err.to_string(), "unknown option `#123456` for fontColor");
    }
}
