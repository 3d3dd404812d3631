//! # survey-submit
//!
//! The submission pipeline: consumes a serialized survey record, builds
//! the PDF and CSV exports, and dispatches them by email to the research
//! recipient.
//!
//! Dispatch is deliberately simple - one synchronous SMTP send, no retry
//! or timeout policy. A failed dispatch is surfaced to the caller with the
//! already-generated exports intact, so they stay available for manual
//! download and the participant can retry.
//!
//! ```rust,no_run
//! use survey_submit::{MailerConfig, SmtpMailer, SubmissionPipeline};
//! # fn run(record: survey_spec::SerializedRecord) -> anyhow::Result<()> {
//! let config = MailerConfig::load("secrets.toml")?;
//! let pipeline = SubmissionPipeline::new(config, SmtpMailer);
//! let outcome = pipeline.submit(&record, "A. Participant")?;
//! if let Err(err) = &outcome.dispatch {
//!     eprintln!("email failed ({err}); exports kept: {}", outcome.bundle.base_name());
//! }
//! # Ok(())
//! # }
//! ```

mod config;
pub use config::{DEFAULT_RECIPIENT, MailerConfig};

mod mailer;
pub use mailer::{DispatchError, EmailAttachment, MailTransport, OutgoingEmail, SmtpMailer};

mod pipeline;
pub use pipeline::{SubmissionOutcome, SubmissionPipeline, SubmitError};
