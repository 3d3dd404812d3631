use survey_export::{ExportBundle, ExportError};
use survey_spec::SerializedRecord;

use crate::{DispatchError, EmailAttachment, MailTransport, MailerConfig, OutgoingEmail};

/// Failure before dispatch was even attempted.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("could not read secrets file '{path}': {source}")]
    SecretsRead {
        path: String,
        source: std::io::Error,
    },

    #[error("could not parse secrets file: {0}")]
    SecretsParse(#[from] toml::de::Error),

    #[error("export generation failed: {0}")]
    Export(#[from] ExportError),
}

/// The result of one submission attempt.
///
/// The bundle is always present once exports built successfully; a failed
/// dispatch is carried alongside it instead of replacing it, so the UI can
/// offer the files for manual download and a retry.
#[derive(Debug)]
pub struct SubmissionOutcome {
    pub bundle: ExportBundle,
    pub dispatch: Result<(), DispatchError>,
}

impl SubmissionOutcome {
    pub fn delivered(&self) -> bool {
        self.dispatch.is_ok()
    }
}

/// Consumes serialized records: builds exports, then emails them.
pub struct SubmissionPipeline<T: MailTransport> {
    config: MailerConfig,
    transport: T,
}

impl<T: MailTransport> SubmissionPipeline<T> {
    pub fn new(config: MailerConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &MailerConfig {
        &self.config
    }

    /// Build the export bundle for `record` and dispatch it by email.
    ///
    /// `consent_signer` is the name entered on the declaration page and is
    /// quoted in the email body. Returns `Err` only when export generation
    /// itself fails; dispatch failure is part of the `Ok` outcome.
    pub fn submit(
        &self,
        record: &SerializedRecord,
        consent_signer: &str,
    ) -> Result<SubmissionOutcome, SubmitError> {
        let bundle = ExportBundle::build(record)?;
        let email = compose_email(record, &bundle, consent_signer);

        let dispatch = self.transport.dispatch(&self.config, &email);
        match &dispatch {
            Ok(()) => tracing::info!(reference = %bundle.stamp.reference, "submission dispatched"),
            Err(err) => tracing::error!(
                reference = %bundle.stamp.reference,
                error = %err,
                "submission dispatch failed, exports retained"
            ),
        }

        Ok(SubmissionOutcome { bundle, dispatch })
    }
}

fn compose_email(record: &SerializedRecord, bundle: &ExportBundle, consent_signer: &str) -> OutgoingEmail {
    let signer = if consent_signer.trim().is_empty() {
        "Anonymous"
    } else {
        consent_signer.trim()
    };

    let mut body = String::from("A new survey has been submitted for review.\n\n");
    body.push_str("Survey Details:\n");
    body.push_str(&format!("- Survey Type: {}\n", record.form_title()));
    body.push_str(&format!("- Informed Consent Signed By: {signer}\n"));
    body.push_str(&format!("- Reference: {}\n", bundle.stamp.reference));
    body.push_str(&format!(
        "- Submission Date: {}\n\n",
        bundle.stamp.generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    body.push_str("Please find the complete survey response attached as a PDF.\n");
    body.push_str("A CSV data file is also attached for data processing.\n\n");
    body.push_str("Regards,\nResearch Survey System\n");

    OutgoingEmail {
        subject: format!("New Survey Submission: {}", record.form_title()),
        body,
        attachments: vec![
            EmailAttachment::pdf(bundle.pdf_filename(), bundle.pdf.clone()),
            EmailAttachment::csv(bundle.csv_filename(), bundle.csv.clone()),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use survey_spec::RecordRow;

    fn record() -> SerializedRecord {
        SerializedRecord::new(
            "demo",
            "Demo Survey",
            vec![RecordRow::new("Trust", 1, "trust", "4 - Agree")],
        )
    }

    fn config() -> MailerConfig {
        MailerConfig {
            email_address: "sender@gmail.com".to_string(),
            app_password: "secret".to_string(),
            recipient_address: None,
            smtp_server: None,
        }
    }

    /// Records dispatched emails instead of sending them.
    #[derive(Default)]
    struct RecordingTransport {
        sent: Mutex<Vec<OutgoingEmail>>,
    }

    impl MailTransport for RecordingTransport {
        fn dispatch(&self, _config: &MailerConfig, email: &OutgoingEmail) -> Result<(), DispatchError> {
            self.sent.lock().unwrap().push(email.clone());
            Ok(())
        }
    }

    /// Always fails, simulating credential or network problems.
    struct FailingTransport;

    impl MailTransport for FailingTransport {
        fn dispatch(&self, _config: &MailerConfig, _email: &OutgoingEmail) -> Result<(), DispatchError> {
            Err(DispatchError::Address(
                "not-an-address".parse::<lettre::Address>().unwrap_err(),
            ))
        }
    }

    #[test]
    fn successful_submission_attaches_both_exports() {
        let pipeline = SubmissionPipeline::new(config(), RecordingTransport::default());
        let outcome = pipeline.submit(&record(), "A. Participant").unwrap();
        assert!(outcome.delivered());

        let sent = pipeline.transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        let email = &sent[0];
        assert_eq!(email.subject, "New Survey Submission: Demo Survey");
        assert!(email.body.contains("Informed Consent Signed By: A. Participant"));
        assert_eq!(email.attachments.len(), 2);
        assert!(email.attachments[0].filename.ends_with(".pdf"));
        assert!(email.attachments[1].filename.ends_with(".csv"));
    }

    #[test]
    fn failed_dispatch_keeps_the_exports() {
        let pipeline = SubmissionPipeline::new(config(), FailingTransport);
        let outcome = pipeline.submit(&record(), "").unwrap();

        assert!(!outcome.delivered());
        assert!(outcome.bundle.pdf.starts_with(b"%PDF"));
        assert!(outcome.bundle.csv.contains("4 - Agree"));
    }

    #[test]
    fn blank_signer_becomes_anonymous() {
        let bundle = ExportBundle::build(&record()).unwrap();
        let email = compose_email(&record(), &bundle, "   ");
        assert!(email.body.contains("Informed Consent Signed By: Anonymous"));
    }
}
