//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::SendSms;
pub use response::SendSmsResponse;
pub use validation::ValidationError;
pub use value::{
    ApiKey, KnownStatusCode, MessageText, MobileNumber, Password, PhoneNumber, ScheduleTime,
    SenderName, StatusCode, Username,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_rejects_empty() {
        assert!(matches!(
            ApiKey::new("   "),
            Err(ValidationError::Empty {
                field: ApiKey::FIELD
            })
        ));
    }

    #[test]
    fn password_rejects_empty() {
        assert!(matches!(
            Password::new(""),
            Err(ValidationError::Empty {
                field: Password::FIELD
            })
        ));
    }

    #[test]
    fn sender_name_accepts_boundary_lengths() {
        assert!(SenderName::new("abc").is_ok());
        assert!(SenderName::new("abcdefghijk").is_ok());
        assert!(SenderName::new("ab").is_err());
        assert!(SenderName::new("abcdefghijkl").is_err());
    }

    #[test]
    fn mobile_number_rejects_country_prefixes() {
        assert!(MobileNumber::new("07123456789").is_ok());
        assert!(matches!(
            MobileNumber::new("+447123456789"),
            Err(ValidationError::CountryPrefixNotAllowed { .. })
        ));
        assert!(matches!(
            MobileNumber::new("44712345678"),
            Err(ValidationError::CountryPrefixNotAllowed { .. })
        ));
    }

    #[test]
    fn phone_number_converts_into_mobile_number() {
        let parsed = PhoneNumber::parse("+44 7123 456789").unwrap();
        let mobile = MobileNumber::try_from(parsed).unwrap();
        assert_eq!(mobile.as_str(), "07123456789");
    }

    #[test]
    fn schedule_time_format_is_strict() {
        assert!(ScheduleTime::new("2023-05-01 00:00").is_ok());
        assert!(ScheduleTime::new("2023/05/01 12:00").is_err());
    }

    #[test]
    fn status_code_known_mapping() {
        let code = StatusCode::new(0);
        assert_eq!(code.known_kind(), Some(KnownStatusCode::Queued));

        let unknown = StatusCode::new(999_999);
        assert_eq!(unknown.known_kind(), None);
    }
}
