//! Email service for delivering guest passes

use std::{str::FromStr, time::Duration};

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Attachment, Mailbox, Message, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    SmtpTransport, Transport,
};

use crate::{
    config::EmailConfig,
    error::{AppError, AppResult},
};

/// File attached to an outgoing email
#[derive(Debug, Clone)]
pub struct MailAttachment {
    pub filename: String,
    pub content_type: String,
    pub body: Vec<u8>,
}

/// Fully composed email, ready for the transport
#[derive(Debug, Clone)]
pub struct OutgoingMail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
    pub attachment: Option<MailAttachment>,
}

/// Outbound mail transport
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Single attempt, no retry
    async fn send(&self, mail: OutgoingMail) -> AppResult<()>;
}

/// Parse a recipient address
pub fn parse_recipient(to: &str) -> AppResult<Mailbox> {
    Mailbox::from_str(to.trim())
        .map_err(|e| AppError::Validation(format!("Invalid email address {:?}: {}", to, e)))
}

#[derive(Clone)]
pub struct EmailService {
    config: EmailConfig,
}

impl EmailService {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    fn build_message(&self, mail: &OutgoingMail) -> AppResult<Message> {
        let from_name = self
            .config
            .smtp_from_name
            .as_deref()
            .unwrap_or("Visitors Registration system");
        let from_mailbox = Mailbox::from_str(&format!("{} <{}>", from_name, self.config.smtp_from))
            .map_err(|e| AppError::Internal(format!("Invalid from address: {}", e)))?;

        let to_mailbox = parse_recipient(&mail.to)?;

        let mut body = MultiPart::mixed().singlepart(
            SinglePart::builder()
                .header(ContentType::TEXT_HTML)
                .body(mail.html_body.clone()),
        );

        if let Some(attachment) = &mail.attachment {
            let content_type = ContentType::parse(&attachment.content_type)
                .map_err(|e| AppError::Internal(format!("Invalid attachment type: {}", e)))?;
            body = body.singlepart(
                Attachment::new(attachment.filename.clone())
                    .body(attachment.body.clone(), content_type),
            );
        }

        Message::builder()
            .from(from_mailbox)
            .to(to_mailbox)
            .subject(mail.subject.clone())
            .multipart(body)
            .map_err(|e| AppError::Internal(format!("Failed to build email: {}", e)))
    }

    fn build_transport(&self) -> AppResult<SmtpTransport> {
        let mailer_builder = if self.config.smtp_use_tls {
            // Use STARTTLS for secure connection
            SmtpTransport::starttls_relay(&self.config.smtp_host)
                .map_err(|e| AppError::Transport(format!("Failed to create SMTP transport: {}", e)))?
        } else {
            SmtpTransport::builder_dangerous(&self.config.smtp_host)
        }
        .port(self.config.smtp_port)
        .timeout(Some(self.timeout()));

        let mailer_builder = if let (Some(username), Some(password)) =
            (&self.config.smtp_username, &self.config.smtp_password)
        {
            mailer_builder.credentials(Credentials::new(username.clone(), password.clone()))
        } else {
            mailer_builder
        };

        Ok(mailer_builder.build())
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.config.timeout_secs)
    }
}

#[async_trait]
impl Mailer for EmailService {
    async fn send(&self, mail: OutgoingMail) -> AppResult<()> {
        let email = self.build_message(&mail)?;
        let mailer = self.build_transport()?;

        // lettre's SMTP transport is blocking
        let handle = tokio::task::spawn_blocking(move || mailer.send(&email));

        // The per-command timeout does not bound the whole exchange
        let outcome = tokio::time::timeout(self.timeout() * 2, handle)
            .await
            .map_err(|_| AppError::Unreachable(format!("SMTP server {}", self.config.smtp_host)))?
            .map_err(|e| AppError::Internal(format!("Mail task failed: {}", e)))?;

        match outcome {
            Ok(_) => {
                tracing::info!(to = %mail.to, subject = %mail.subject, "Email sent");
                Ok(())
            }
            Err(e) if e.is_timeout() => Err(AppError::Unreachable(format!(
                "SMTP server {}: {}",
                self.config.smtp_host, e
            ))),
            Err(e) => Err(AppError::Transport(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mail() -> OutgoingMail {
        OutgoingMail {
            to: "guest@example.com".to_string(),
            subject: "Guest pass for Ana Doe".to_string(),
            html_body: "<html><body><p>Hello,</p></body></html>".to_string(),
            attachment: Some(MailAttachment {
                filename: "pass_Doe.pdf".to_string(),
                content_type: "application/pdf".to_string(),
                body: b"%PDF-1.3".to_vec(),
            }),
        }
    }

    #[test]
    fn test_build_message_with_attachment() {
        let service = EmailService::new(EmailConfig::default());
        let message = service.build_message(&mail()).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("Subject: Guest pass for Ana Doe"));
        assert!(raw.contains("filename=\"pass_Doe.pdf\""));
        assert!(raw.contains("application/pdf"));
    }

    #[test]
    fn test_invalid_recipient_is_validation_error() {
        let service = EmailService::new(EmailConfig::default());
        let mut bad = mail();
        bad.to = "not an address@".to_string();
        assert!(matches!(service.build_message(&bad), Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        let service = EmailService::new(EmailConfig {
            smtp_host: "127.0.0.1".to_string(),
            smtp_port: 1,
            smtp_use_tls: false,
            timeout_secs: 2,
            ..EmailConfig::default()
        });
        let result = service.send(mail()).await;
        assert!(matches!(
            result,
            Err(AppError::Transport(_)) | Err(AppError::Unreachable(_))
        ));
    }
}
