use crate::domain::value::StatusCode;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Decoded FireText response for a send request.
///
/// `code == 0` means the message was accepted and queued; any other code is
/// surfaced by the client as an error carrying the description.
pub struct SendSmsResponse {
    pub code: StatusCode,
    pub description: Option<String>,
}
