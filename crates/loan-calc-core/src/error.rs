use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoanCalcError {
    #[error("Invalid parameter: {field} — {reason}")]
    InvalidParameter { field: String, reason: String },

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Arithmetic overflow in {context}")]
    ArithmeticOverflow { context: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for LoanCalcError {
    fn from(e: serde_json::Error) -> Self {
        LoanCalcError::SerializationError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message_carries_reason() {
        let err = LoanCalcError::InvalidParameter {
            field: "principal".into(),
            reason: "Principal must be between $1,000 and $999,999.99".into(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Invalid parameter: principal"));
        assert!(msg.contains("Principal must be between $1,000 and $999,999.99"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: LoanCalcError = parse_err.into();
        assert!(matches!(err, LoanCalcError::SerializationError(_)));
    }
}
