use serde::Deserialize;

use crate::domain::{
    MessageText, MobileNumber, ScheduleTime, SendSms, SendSmsResponse, SenderName, StatusCode,
};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
struct SendSmsJsonResponse {
    code: i32,
    #[serde(default)]
    description: Option<String>,
}

pub fn encode_send_sms_form(request: &SendSms) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();

    params.push((
        MobileNumber::FIELD.to_owned(),
        request.to().as_str().to_owned(),
    ));
    params.push((
        SenderName::FIELD.to_owned(),
        request.sender().as_str().to_owned(),
    ));
    params.push((
        MessageText::FIELD.to_owned(),
        request.message().as_str().to_owned(),
    ));
    if let Some(schedule) = request.schedule() {
        params.push((ScheduleTime::FIELD.to_owned(), schedule.as_str().to_owned()));
    }

    params
}

pub fn decode_send_sms_json_response(json: &str) -> Result<SendSmsResponse, TransportError> {
    let parsed: SendSmsJsonResponse = serde_json::from_str(json)?;
    Ok(SendSmsResponse {
        code: StatusCode::new(parsed.code),
        description: parsed.description,
    })
}
