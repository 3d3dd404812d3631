use std::path::Path;

use serde::Deserialize;

use crate::SubmitError;

/// Fallback recipient for submissions when the secrets file does not name
/// one.
pub const DEFAULT_RECIPIENT: &str = "don.kruger123@gmail.com";

/// Email credentials and routing, read from a TOML secrets file:
///
/// ```toml
/// [email_credentials]
/// email_address = "sender@gmail.com"
/// app_password = "app-specific-password"
/// recipient_address = "research@example.org"  # optional
/// smtp_server = "smtp.gmail.com"              # optional, inferred otherwise
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct MailerConfig {
    pub email_address: String,
    pub app_password: String,
    #[serde(default)]
    pub recipient_address: Option<String>,
    #[serde(default)]
    pub smtp_server: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SecretsFile {
    email_credentials: MailerConfig,
}

impl MailerConfig {
    /// Load credentials from a secrets file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SubmitError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| SubmitError::SecretsRead {
            path: path.display().to_string(),
            source,
        })?;
        let secrets: SecretsFile = toml::from_str(&raw)?;
        Ok(secrets.email_credentials)
    }

    /// The recipient address, falling back to the research default.
    pub fn recipient(&self) -> &str {
        self.recipient_address
            .as_deref()
            .filter(|addr| !addr.trim().is_empty())
            .unwrap_or(DEFAULT_RECIPIENT)
    }

    /// The SMTP host: configured explicitly, or inferred from the sender's
    /// domain, defaulting to Gmail.
    pub fn smtp_host(&self) -> &str {
        if let Some(server) = self.smtp_server.as_deref().filter(|s| !s.trim().is_empty()) {
            return server;
        }
        let sender = self.email_address.to_lowercase();
        if sender.contains("outlook") || sender.contains("hotmail") {
            "smtp-mail.outlook.com"
        } else if sender.contains("yahoo") {
            "smtp.mail.yahoo.com"
        } else {
            "smtp.gmail.com"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(sender: &str) -> MailerConfig {
        MailerConfig {
            email_address: sender.to_string(),
            app_password: "secret".to_string(),
            recipient_address: None,
            smtp_server: None,
        }
    }

    #[test]
    fn recipient_defaults_when_unset() {
        let mut cfg = config("sender@gmail.com");
        assert_eq!(cfg.recipient(), DEFAULT_RECIPIENT);

        cfg.recipient_address = Some("  ".to_string());
        assert_eq!(cfg.recipient(), DEFAULT_RECIPIENT);

        cfg.recipient_address = Some("research@example.org".to_string());
        assert_eq!(cfg.recipient(), "research@example.org");
    }

    #[test]
    fn smtp_host_inference() {
        assert_eq!(config("a@gmail.com").smtp_host(), "smtp.gmail.com");
        assert_eq!(config("a@hotmail.com").smtp_host(), "smtp-mail.outlook.com");
        assert_eq!(config("a@yahoo.co.uk").smtp_host(), "smtp.mail.yahoo.com");
        assert_eq!(config("a@university.ac.za").smtp_host(), "smtp.gmail.com");

        let mut cfg = config("a@gmail.com");
        cfg.smtp_server = Some("mail.internal".to_string());
        assert_eq!(cfg.smtp_host(), "mail.internal");
    }

    #[test]
    fn parses_secrets_toml() {
        let raw = r#"
            [email_credentials]
            email_address = "sender@gmail.com"
            app_password = "abcd efgh"
        "#;
        let secrets: SecretsFile = toml::from_str(raw).unwrap();
        assert_eq!(secrets.email_credentials.email_address, "sender@gmail.com");
        assert!(secrets.email_credentials.recipient_address.is_none());
    }
}
