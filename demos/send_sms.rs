use std::io;

use firetext::{Auth, FireTextClient, MessageText, MobileNumber, SendSms, SenderName};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("FIRETEXT_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "FIRETEXT_API_KEY environment variable is required",
        )
    })?;
    let to = std::env::var("FIRETEXT_TO").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "FIRETEXT_TO environment variable is required",
        )
    })?;
    let from = std::env::var("FIRETEXT_FROM").unwrap_or_else(|_| "FireText".to_owned());
    let message = std::env::var("FIRETEXT_MESSAGE")
        .unwrap_or_else(|_| "Hello from the firetext demo.".to_owned());

    let client = FireTextClient::new(Auth::api_key(api_key)?);
    let request = SendSms::new(
        SenderName::new(from)?,
        MobileNumber::new(to)?,
        MessageText::new(message)?,
    );

    let response = client.send_sms(request).await?;
    println!(
        "code: {:?}, description: {:?}",
        response.code, response.description
    );

    Ok(())
}
