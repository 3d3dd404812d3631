use lettre::message::header::ContentType;
use lettre::message::{Attachment, Message, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{SmtpTransport, Transport};

use crate::MailerConfig;

/// A fully composed submission email, transport-agnostic.
#[derive(Debug, Clone)]
pub struct OutgoingEmail {
    pub subject: String,
    pub body: String,
    pub attachments: Vec<EmailAttachment>,
}

#[derive(Debug, Clone)]
pub struct EmailAttachment {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl EmailAttachment {
    pub fn pdf(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content_type: "application/pdf",
            bytes,
        }
    }

    pub fn csv(filename: impl Into<String>, text: String) -> Self {
        Self {
            filename: filename.into(),
            content_type: "text/csv; charset=utf-8",
            bytes: text.into_bytes(),
        }
    }
}

/// Why a dispatch attempt failed. Never fatal to the session; the exports
/// stay available and the user can retry.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("could not compose message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("invalid attachment content type: {0}")]
    ContentType(#[from] lettre::message::header::ContentTypeErr),

    #[error("SMTP failure: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// The email dispatcher seam.
///
/// The production implementation talks SMTP; tests substitute a recording
/// or failing transport to exercise the pipeline without a network.
pub trait MailTransport {
    fn dispatch(&self, config: &MailerConfig, email: &OutgoingEmail) -> Result<(), DispatchError>;
}

/// SMTP dispatch over implicit TLS (port 465), authenticating with the
/// configured address and app password.
pub struct SmtpMailer;

impl MailTransport for SmtpMailer {
    fn dispatch(&self, config: &MailerConfig, email: &OutgoingEmail) -> Result<(), DispatchError> {
        let mut multipart = MultiPart::mixed().singlepart(SinglePart::plain(email.body.clone()));
        for attachment in &email.attachments {
            multipart = multipart.singlepart(
                Attachment::new(attachment.filename.clone())
                    .body(attachment.bytes.clone(), ContentType::parse(attachment.content_type)?),
            );
        }

        let message = Message::builder()
            .from(config.email_address.parse()?)
            .to(config.recipient().parse()?)
            .subject(email.subject.clone())
            .multipart(multipart)?;

        let transport = SmtpTransport::relay(config.smtp_host())?
            .credentials(Credentials::new(
                config.email_address.clone(),
                config.app_password.clone(),
            ))
            .build();

        tracing::info!(recipient = config.recipient(), subject = %email.subject, "dispatching submission email");
        transport.send(&message)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attachment_constructors() {
        let pdf = EmailAttachment::pdf("report.pdf", vec![0x25, 0x50]);
        assert_eq!(pdf.content_type, "application/pdf");

        let csv = EmailAttachment::csv("data.csv", "Section,Record #,Field,Value\n".to_string());
        assert_eq!(csv.filename, "data.csv");
        assert!(csv.bytes.starts_with(b"Section,"));
    }
}
