//! Booking-inquiry notification email via SMTP.
//!
//! [`EmailConfig::from_env`] returns `None` when `SMTP_HOST` is not
//! set, signalling that notifications are disabled; the inquiry write
//! itself never depends on dispatch succeeding.

use haze_core::content::model::Inquiry;
use lettre::{
    message::header::ContentType, transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when `SMTP_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "bookings@djmisshaze.com";

/// Operator inbox that receives new-inquiry notifications.
const DEFAULT_NOTIFY_ADDRESS: &str = "info@djmisshaze.com";

/// Configuration for the SMTP notification sender.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// RFC 5322 "From" address.
    pub from_address: String,
    /// Address new-inquiry notifications are sent to.
    pub notify_address: String,
    /// Optional SMTP username.
    pub smtp_user: Option<String>,
    /// Optional SMTP password.
    pub smtp_password: Option<String>,
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` is not set, signalling that email
    /// delivery is not configured and should be skipped.
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok()?;
        Some(Self {
            smtp_host,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: std::env::var("SMTP_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            notify_address: std::env::var("BOOKING_NOTIFY_TO")
                .unwrap_or_else(|_| DEFAULT_NOTIFY_ADDRESS.to_string()),
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

/// Sends new-inquiry notification emails to the operator inbox.
#[derive(Debug, Clone)]
pub struct Mailer {
    config: EmailConfig,
}

impl Mailer {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Send the notification for a freshly persisted inquiry.
    pub async fn send_inquiry_notification(&self, inquiry: &Inquiry) -> Result<(), EmailError> {
        let subject = format!(
            "New Booking Inquiry: {} in {}",
            inquiry.event_type, inquiry.location
        );
        let body = format!(
            "New Booking Inquiry\n\n\
             Name: {}\n\
             Location: {}\n\
             Event Type: {}\n\
             Event Date: {}\n\
             Email: {}\n\
             Phone: {}\n\n\
             Submitted on {}",
            inquiry.name,
            inquiry.location,
            inquiry.event_type,
            inquiry.date,
            inquiry.email.as_deref().unwrap_or("Not provided"),
            inquiry.phone.as_deref().unwrap_or("Not provided"),
            inquiry.created_at,
        );

        let email = Message::builder()
            .from(self.config.from_address.parse()?)
            .to(self.config.notify_address.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| EmailError::Build(e.to_string()))?;

        let mut builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)?
                .port(self.config.smtp_port);

        if let (Some(user), Some(password)) = (&self.config.smtp_user, &self.config.smtp_password)
        {
            builder = builder.credentials(Credentials::new(user.clone(), password.clone()));
        }

        let transport = builder.build();
        transport.send(email).await?;

        tracing::info!(
            inquiry_id = inquiry.id,
            to = %self.config.notify_address,
            "Booking inquiry notification sent"
        );
        Ok(())
    }
}
