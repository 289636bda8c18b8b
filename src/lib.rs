//! Typed Rust client for the FireText SMS HTTP API.
//!
//! The design is split into a domain layer of strong types, a transport layer
//! for wire-format details, and a small client layer orchestrating requests.
//! Field validation (sender name, UK mobile number, message text, schedule
//! time) happens in the domain constructors, so an invalid request cannot be
//! built and no network call is made for bad input.
//!
//! ```rust,no_run
//! use firetext::{Auth, FireTextClient, MessageText, MobileNumber, SendSms, SenderName};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), firetext::FireTextError> {
//!     let client = FireTextClient::new(Auth::api_key("...")?);
//!     let request = SendSms::new(
//!         SenderName::new("uMedTeam")?,
//!         MobileNumber::new("07123456789")?,
//!         MessageText::new("Your appointment is confirmed.")?,
//!     );
//!     let response = client.send_sms(request).await?;
//!     println!("queued: {:?}", response.description);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Auth, FireTextClient, FireTextClientBuilder, FireTextError};
pub use domain::{
    ApiKey, KnownStatusCode, MessageText, MobileNumber, Password, PhoneNumber, ScheduleTime,
    SendSms, SendSmsResponse, SenderName, StatusCode, Username, ValidationError,
};
