use crate::domain::validation::ValidationError;
use crate::domain::value::{MessageText, MobileNumber, ScheduleTime, SenderName};

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single SMS send request.
///
/// All fields are validated value types, so a constructed request is always
/// safe to encode. The schedule is optional; without one the gateway
/// dispatches immediately.
pub struct SendSms {
    sender: SenderName,
    to: MobileNumber,
    message: MessageText,
    schedule: Option<ScheduleTime>,
}

impl SendSms {
    /// Build a request for immediate dispatch.
    pub fn new(sender: SenderName, to: MobileNumber, message: MessageText) -> Self {
        Self {
            sender,
            to,
            message,
            schedule: None,
        }
    }

    /// Attach a scheduled dispatch time.
    pub fn with_schedule(mut self, schedule: ScheduleTime) -> Self {
        self.schedule = Some(schedule);
        self
    }

    /// Validate raw field values and build a request in one step.
    pub fn from_parts(
        sender: impl Into<String>,
        to: impl Into<String>,
        message: impl Into<String>,
        schedule: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let mut request = Self::new(
            SenderName::new(sender)?,
            MobileNumber::new(to)?,
            MessageText::new(message)?,
        );
        if let Some(schedule) = schedule {
            request = request.with_schedule(ScheduleTime::new(schedule)?);
        }
        Ok(request)
    }

    pub fn sender(&self) -> &SenderName {
        &self.sender
    }

    pub fn to(&self) -> &MobileNumber {
        &self.to
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn schedule(&self) -> Option<&ScheduleTime> {
        self.schedule.as_ref()
    }
}
