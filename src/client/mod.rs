//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{ApiKey, Password, SendSms, SendSmsResponse, Username, ValidationError};

const DEFAULT_BASE_URL: &str = "https://www.firetext.co.uk/api";
const SEND_SMS_PATH: &str = "/sendsms";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

#[derive(Debug)]
enum TransportFailure {
    Timeout(Box<dyn StdError + Send + Sync>),
    Other(Box<dyn StdError + Send + Sync>),
}

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .form(&params)
                .send()
                .await
                .map_err(classify_reqwest_error)?;
            let status = response.status().as_u16();
            let body = response.text().await.map_err(classify_reqwest_error)?;
            Ok(HttpResponse { status, body })
        })
    }
}

fn classify_reqwest_error(err: reqwest::Error) -> TransportFailure {
    if err.is_timeout() {
        TransportFailure::Timeout(Box::new(err))
    } else {
        TransportFailure::Other(Box::new(err))
    }
}

#[derive(Debug, Clone)]
/// Authentication credentials for FireText API calls.
///
/// Use [`Auth::api_key`] when you have an `apiKey` token, or
/// [`Auth::username_password`] if you authenticate with account credentials.
/// [`Auth::from_parts`] applies the same selection rule as the FireText
/// dashboard examples: a non-empty api key wins over a username/password pair.
pub enum Auth {
    /// Authenticate via FireText `apiKey`.
    ApiKey(ApiKey),
    /// Authenticate via FireText `username` + `password`.
    UsernamePassword {
        username: Username,
        password: Password,
    },
}

impl Auth {
    /// Create [`Auth::ApiKey`] and validate that the value is non-empty after trimming.
    pub fn api_key(value: impl Into<String>) -> Result<Self, FireTextError> {
        Ok(Self::ApiKey(ApiKey::new(value).map_err(invalid_credentials)?))
    }

    /// Create [`Auth::UsernamePassword`] and validate that both parts are non-empty.
    pub fn username_password(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, FireTextError> {
        Ok(Self::UsernamePassword {
            username: Username::new(username).map_err(invalid_credentials)?,
            password: Password::new(password).map_err(invalid_credentials)?,
        })
    }

    /// Select an auth mode from optional raw credentials.
    ///
    /// A non-empty `api_key` takes precedence; otherwise both `username` and
    /// `password` must be present and non-empty.
    pub fn from_parts(
        api_key: Option<String>,
        username: Option<String>,
        password: Option<String>,
    ) -> Result<Self, FireTextError> {
        if let Some(api_key) = api_key.filter(|it| !it.trim().is_empty()) {
            return Self::api_key(api_key);
        }

        let username = username.filter(|it| !it.trim().is_empty());
        let password = password.filter(|it| !it.is_empty());
        match (username, password) {
            (Some(username), Some(password)) => Self::username_password(username, password),
            _ => Err(FireTextError::InvalidCredentials {
                reason: "either apiKey, or both username and password, must be provided"
                    .to_owned(),
            }),
        }
    }

    fn push_form_params(&self, params: &mut Vec<(String, String)>) {
        match self {
            Self::ApiKey(api_key) => {
                params.push((ApiKey::FIELD.to_owned(), api_key.as_str().to_owned()));
            }
            Self::UsernamePassword { username, password } => {
                params.push((Username::FIELD.to_owned(), username.as_str().to_owned()));
                params.push((Password::FIELD.to_owned(), password.as_str().to_owned()));
            }
        }
    }
}

fn invalid_credentials(err: ValidationError) -> FireTextError {
    FireTextError::InvalidCredentials {
        reason: err.to_string(),
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`FireTextClient`].
///
/// This error preserves:
/// - configuration failures (credentials, base URL),
/// - field validation failures (no network call is made),
/// - transport failures (timeouts, non-2xx statuses, connection errors),
/// - application failures (non-zero gateway code).
pub enum FireTextError {
    /// No valid credential combination was supplied at construction.
    #[error("invalid credentials: {reason}")]
    InvalidCredentials { reason: String },

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The transport timed out before the gateway responded.
    #[error("Time out exception from Fire Text API")]
    Timeout {
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// HTTP client / transport failure (DNS, TLS, connection errors).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// The gateway accepted the HTTP call but reported a non-zero code.
    ///
    /// Carries the rejected request for diagnostics; the display string is
    /// fixed and independent of the reason text.
    #[error("Failed to send the sms.")]
    SmsFailed {
        reason: Option<String>,
        request: SendSms,
    },

    /// The builder was given a base URL that does not parse.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[source] url::ParseError),
}

#[derive(Debug, Clone)]
/// Builder for [`FireTextClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct FireTextClientBuilder {
    auth: Auth,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl FireTextClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(auth: Auth) -> Self {
        Self {
            auth,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the FireText API base URL (the `/sendsms` path is appended).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`FireTextClient`].
    pub fn build(self) -> Result<FireTextClient, FireTextError> {
        url::Url::parse(&self.base_url).map_err(FireTextError::InvalidBaseUrl)?;
        let send_endpoint = format!("{}{}", self.base_url.trim_end_matches('/'), SEND_SMS_PATH);

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| FireTextError::Transport(Box::new(err)))?;

        Ok(FireTextClient {
            auth: self.auth,
            send_endpoint,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level FireText client.
///
/// This type orchestrates form encoding, the HTTP call, and response
/// classification. By default it posts to
/// `https://www.firetext.co.uk/api/sendsms`.
///
/// The client holds no mutable state, so one instance can be reused across
/// calls and cloned freely between tasks.
pub struct FireTextClient {
    auth: Auth,
    send_endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for FireTextClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FireTextClient")
            .field("auth", &self.auth)
            .field("send_endpoint", &self.send_endpoint)
            .finish_non_exhaustive()
    }
}

impl FireTextClient {
    /// Create a client using the default base URL.
    ///
    /// For more customization, use [`FireTextClient::builder`].
    pub fn new(auth: Auth) -> Self {
        Self {
            auth,
            send_endpoint: format!("{DEFAULT_BASE_URL}{SEND_SMS_PATH}"),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(auth: Auth) -> FireTextClientBuilder {
        FireTextClientBuilder::new(auth)
    }

    /// Send an SMS message through FireText.
    ///
    /// Errors:
    /// - [`FireTextError::Timeout`] when the transport times out,
    /// - [`FireTextError::Transport`] for other transport failures,
    /// - [`FireTextError::HttpStatus`] for non-2xx HTTP responses,
    /// - [`FireTextError::SmsFailed`] when the gateway reports a non-zero code.
    pub async fn send_sms(&self, request: SendSms) -> Result<SendSmsResponse, FireTextError> {
        let mut params = Vec::<(String, String)>::new();
        self.auth.push_form_params(&mut params);
        params.extend(crate::transport::encode_send_sms_form(&request));

        tracing::debug!(
            endpoint = %self.send_endpoint,
            to = request.to().as_str(),
            scheduled = request.schedule().is_some(),
            "sending sms"
        );

        let response = match self.http.post_form(&self.send_endpoint, params).await {
            Ok(response) => response,
            Err(TransportFailure::Timeout(source)) => {
                return Err(FireTextError::Timeout { source });
            }
            Err(TransportFailure::Other(source)) => {
                return Err(FireTextError::Transport(source));
            }
        };

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(FireTextError::HttpStatus {
                status: response.status,
                body,
            });
        }

        let parsed = crate::transport::decode_send_sms_json_response(&response.body)
            .map_err(|err| FireTextError::Parse(Box::new(err)))?;

        if !parsed.code.is_success() {
            tracing::warn!(code = parsed.code.as_i32(), "gateway rejected sms");
            return Err(FireTextError::SmsFailed {
                reason: parsed.description,
                request,
            });
        }

        Ok(parsed)
    }
}
