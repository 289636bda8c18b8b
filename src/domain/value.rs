use chrono::NaiveDateTime;
use phonenumber::country;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// FireText `apiKey` token.
///
/// Invariant: non-empty after trimming.
pub struct ApiKey(String);

impl ApiKey {
    /// Form field name used by FireText (`apiKey`).
    pub const FIELD: &'static str = "apiKey";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// FireText account username.
///
/// Invariant: non-empty after trimming.
pub struct Username(String);

impl Username {
    /// Form field name used by FireText (`username`).
    pub const FIELD: &'static str = "username";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated username.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// FireText account password.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct Password(String);

impl Password {
    /// Form field name used by FireText (`password`).
    pub const FIELD: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender name shown on the handset (`from`).
///
/// Invariant: 3 to 11 ASCII alphanumeric characters after trimming. FireText
/// rejects sender names with special characters, so the check happens here
/// before any request is built.
pub struct SenderName(String);

impl SenderName {
    /// Form field name used by FireText (`from`).
    pub const FIELD: &'static str = "from";

    /// Minimum allowed sender name length.
    pub const MIN_LEN: usize = 3;
    /// Maximum allowed sender name length.
    pub const MAX_LEN: usize = 11;

    /// Create a validated [`SenderName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&trimmed.chars().count()) {
            return Err(ValidationError::SenderLengthOutOfRange {
                min: Self::MIN_LEN,
                max: Self::MAX_LEN,
                actual: trimmed.chars().count(),
            });
        }
        if !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::SenderNotAlphanumeric {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// UK mobile number in national format as sent to FireText (`to`).
///
/// Invariant: exactly 11 ASCII digits starting with `0`. Country-code forms
/// (`+44…` or `44…`) are rejected with a dedicated error; FireText expects
/// the national form. If you hold an international number, parse it into
/// [`PhoneNumber`] and convert with `TryFrom`.
pub struct MobileNumber(String);

impl MobileNumber {
    /// Form field name used by FireText (`to`).
    pub const FIELD: &'static str = "to";

    /// Required number of digits.
    pub const DIGITS: usize = 11;

    /// Create a validated [`MobileNumber`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if trimmed.starts_with("+44") || trimmed.starts_with("44") {
            return Err(ValidationError::CountryPrefixNotAllowed {
                input: trimmed.to_owned(),
            });
        }
        let valid = trimmed.len() == Self::DIGITS
            && trimmed.chars().all(|c| c.is_ascii_digit())
            && trimmed.starts_with('0');
        if !valid {
            return Err(ValidationError::InvalidMobileNumber {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated number.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<PhoneNumber> for MobileNumber {
    type Error = ValidationError;

    /// Convert a parsed phone number to the national form FireText expects.
    fn try_from(value: PhoneNumber) -> Result<Self, Self::Error> {
        Self::new(value.national)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with a national-format representation.
///
/// Parsing uses a GB default region, so both `07123456789` and
/// `+447123456789` resolve to the same number. Equality, ordering, and
/// hashing are based on the national digits.
pub struct PhoneNumber {
    raw: String,
    national: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Form field name used by FireText (`to`).
    pub const FIELD: &'static str = "to";

    /// Parse a phone number, assuming GB when no country prefix is present.
    pub fn parse(input: impl Into<String>) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(Some(country::Id::GB), &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let national = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::National)
            .to_string()
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect::<String>();

        Ok(Self {
            raw,
            national,
            parsed,
        })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// National-format digits (leading `0`, no separators).
    pub fn national(&self) -> &str {
        &self.national
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.national == other.national
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.national.hash(state);
    }
}

impl std::cmp::PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.national.cmp(&other.national)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`message`).
///
/// Invariant: non-empty after trimming. The original value (including
/// whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Form field name used by FireText (`message`).
    pub const FIELD: &'static str = "message";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Scheduled dispatch time (`schedule`).
///
/// Invariant: parses as `YYYY-MM-DD HH:MM`. The value is stored in canonical
/// form, so `as_str` is always safe to put on the wire.
pub struct ScheduleTime {
    value: String,
    naive: NaiveDateTime,
}

impl ScheduleTime {
    /// Form field name used by FireText (`schedule`).
    pub const FIELD: &'static str = "schedule";

    /// Wire format accepted by FireText.
    pub const FORMAT: &'static str = "%Y-%m-%d %H:%M";

    /// Parse and validate a schedule time string.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let naive = NaiveDateTime::parse_from_str(trimmed, Self::FORMAT).map_err(|_| {
            ValidationError::InvalidScheduleTime {
                input: trimmed.to_owned(),
            }
        })?;
        Ok(Self::from_naive(naive))
    }

    /// Build a schedule time from an already-parsed timestamp.
    pub fn from_naive(naive: NaiveDateTime) -> Self {
        Self {
            value: naive.format(Self::FORMAT).to_string(),
            naive,
        }
    }

    /// Canonical `YYYY-MM-DD HH:MM` representation.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The parsed timestamp.
    pub fn naive(&self) -> NaiveDateTime {
        self.naive
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// FireText response code.
///
/// This value is preserved as-is even when the code is unknown to this crate.
pub struct StatusCode(i32);

impl StatusCode {
    /// Construct a status code from its integer representation.
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    /// Get the integer code as provided by FireText.
    pub fn as_i32(self) -> i32 {
        self.0
    }

    /// Returns `true` when the gateway accepted/queued the message (code 0).
    pub fn is_success(self) -> bool {
        self.0 == 0
    }

    /// Map this code to a known status code variant, if one exists.
    pub fn known_kind(self) -> Option<KnownStatusCode> {
        KnownStatusCode::from_code(self.0)
    }

    /// Returns `true` if this status code represents an authentication error.
    pub fn is_auth_error(self) -> bool {
        matches!(self.known_kind(), Some(kind) if kind.is_auth_error())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Known FireText response codes supported by this crate.
///
/// Unknown codes are preserved as [`StatusCode`] and return `None` from
/// [`KnownStatusCode::from_code`].
pub enum KnownStatusCode {
    Queued,
    AuthenticationError,
    InsufficientCredit,
    InvalidRecipient,
    InvalidSender,
    InvalidMessage,
    InvalidScheduleTime,
}

impl KnownStatusCode {
    /// Convert a raw FireText integer code into a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            0 => Self::Queued,
            1 => Self::AuthenticationError,
            2 => Self::InsufficientCredit,
            3 => Self::InvalidRecipient,
            4 => Self::InvalidSender,
            5 => Self::InvalidMessage,
            6 => Self::InvalidScheduleTime,
            _ => return None,
        })
    }

    /// Whether this status indicates invalid credentials.
    pub fn is_auth_error(self) -> bool {
        matches!(self, Self::AuthenticationError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_newtypes_trim_or_validate() {
        let api_key = ApiKey::new("  key ").unwrap();
        assert_eq!(api_key.as_str(), "key");
        assert!(ApiKey::new("  ").is_err());

        let username = Username::new(" user ").unwrap();
        assert_eq!(username.as_str(), "user");
        assert!(Username::new("").is_err());

        let password = Password::new(" secret ").unwrap();
        assert_eq!(password.as_str(), " secret ");
        assert!(Password::new("").is_err());

        let msg = MessageText::new(" hi ").unwrap();
        assert_eq!(msg.as_str(), " hi ");
        assert!(MessageText::new("  ").is_err());
    }

    #[test]
    fn sender_name_enforces_length_and_alphabet() {
        let sender = SenderName::new(" uMedTeam ").unwrap();
        assert_eq!(sender.as_str(), "uMedTeam");

        assert!(matches!(
            SenderName::new(""),
            Err(ValidationError::Empty {
                field: SenderName::FIELD
            })
        ));
        assert!(matches!(
            SenderName::new("ra"),
            Err(ValidationError::SenderLengthOutOfRange { actual: 2, .. })
        ));
        assert!(matches!(
            SenderName::new("randomlongtext"),
            Err(ValidationError::SenderLengthOutOfRange { actual: 14, .. })
        ));
        assert!(matches!(
            SenderName::new("@random{}"),
            Err(ValidationError::SenderNotAlphanumeric { .. })
        ));

        assert!(SenderName::new("abc").is_ok());
        assert!(SenderName::new("abcdefgh123").is_ok());
    }

    #[test]
    fn mobile_number_requires_national_form() {
        let number = MobileNumber::new(" 07123456789 ").unwrap();
        assert_eq!(number.as_str(), "07123456789");

        assert!(matches!(
            MobileNumber::new(""),
            Err(ValidationError::Empty {
                field: MobileNumber::FIELD
            })
        ));
        assert!(matches!(
            MobileNumber::new("+447123456789"),
            Err(ValidationError::CountryPrefixNotAllowed { .. })
        ));
        assert!(matches!(
            MobileNumber::new("44712345678"),
            Err(ValidationError::CountryPrefixNotAllowed { .. })
        ));
        assert!(matches!(
            MobileNumber::new("4471234567890"),
            Err(ValidationError::CountryPrefixNotAllowed { .. })
        ));
        assert!(matches!(
            MobileNumber::new("0712345678"),
            Err(ValidationError::InvalidMobileNumber { .. })
        ));
        assert!(matches!(
            MobileNumber::new("071234567890"),
            Err(ValidationError::InvalidMobileNumber { .. })
        ));
        assert!(matches!(
            MobileNumber::new("07123a56789"),
            Err(ValidationError::InvalidMobileNumber { .. })
        ));
    }

    #[test]
    fn phone_number_parses_and_converts_to_national() {
        let p1 = PhoneNumber::parse("+447123456789").unwrap();
        let p2 = PhoneNumber::parse("07123 456789").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1.national(), "07123456789");

        let mobile = MobileNumber::try_from(p1).unwrap();
        assert_eq!(mobile.as_str(), "07123456789");

        assert!(PhoneNumber::parse("not-a-number").is_err());
    }

    #[test]
    fn schedule_time_parses_canonical_format() {
        let schedule = ScheduleTime::new("2023-05-01 00:00").unwrap();
        assert_eq!(schedule.as_str(), "2023-05-01 00:00");

        assert!(matches!(
            ScheduleTime::new("2023/05/01 12:00"),
            Err(ValidationError::InvalidScheduleTime { .. })
        ));
        assert!(matches!(
            ScheduleTime::new("2023-05-01"),
            Err(ValidationError::InvalidScheduleTime { .. })
        ));
        assert!(matches!(
            ScheduleTime::new("   "),
            Err(ValidationError::Empty {
                field: ScheduleTime::FIELD
            })
        ));
    }

    #[test]
    fn schedule_time_from_naive_round_trips() {
        let naive = chrono::NaiveDate::from_ymd_opt(2023, 5, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        let schedule = ScheduleTime::from_naive(naive);
        assert_eq!(schedule.as_str(), "2023-05-01 12:30");
        assert_eq!(schedule.naive(), naive);
    }

    #[test]
    fn status_code_knows_success_and_auth_errors() {
        let queued = StatusCode::new(0);
        assert!(queued.is_success());
        assert_eq!(queued.known_kind(), Some(KnownStatusCode::Queued));

        let auth = StatusCode::new(1);
        assert!(auth.is_auth_error());
        assert!(!auth.is_success());

        let unknown = StatusCode::new(9999);
        assert!(unknown.known_kind().is_none());
        assert!(!unknown.is_auth_error());
    }
}
