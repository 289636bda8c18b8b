use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    SenderLengthOutOfRange { min: usize, max: usize, actual: usize },
    SenderNotAlphanumeric { input: String },
    CountryPrefixNotAllowed { input: String },
    InvalidMobileNumber { input: String },
    InvalidScheduleTime { input: String },
    InvalidPhoneNumber { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::SenderLengthOutOfRange { min, max, actual } => {
                write!(
                    f,
                    "sender name length out of range: {actual} (expected {min}..={max})"
                )
            }
            Self::SenderNotAlphanumeric { input } => {
                write!(f, "sender name must be alphanumeric: {input}")
            }
            Self::CountryPrefixNotAllowed { input } => {
                write!(
                    f,
                    "mobile number must not carry a country prefix: {input}"
                )
            }
            Self::InvalidMobileNumber { input } => {
                write!(f, "invalid UK mobile number: {input}")
            }
            Self::InvalidScheduleTime { input } => {
                write!(
                    f,
                    "invalid schedule time: {input} (expected YYYY-MM-DD HH:MM)"
                )
            }
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "message" };
        assert_eq!(err.to_string(), "message must not be empty");

        let err = ValidationError::SenderLengthOutOfRange {
            min: 3,
            max: 11,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "sender name length out of range: 2 (expected 3..=11)"
        );

        let err = ValidationError::SenderNotAlphanumeric {
            input: "@random{}".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "sender name must be alphanumeric: @random{}"
        );

        let err = ValidationError::CountryPrefixNotAllowed {
            input: "+447123456789".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "mobile number must not carry a country prefix: +447123456789"
        );

        let err = ValidationError::InvalidMobileNumber {
            input: "0712345678".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid UK mobile number: 0712345678");

        let err = ValidationError::InvalidScheduleTime {
            input: "2023/05/01 12:00".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "invalid schedule time: 2023/05/01 12:00 (expected YYYY-MM-DD HH:MM)"
        );
    }
}
