use chrono::{DateTime, Local};
use survey_spec::SerializedRecord;
use uuid::Uuid;

use crate::{ExportError, make_csv, make_pdf, sanitize_filename};

/// Generation time and reference identifier for one submission.
///
/// Generated once per submission so the PDF, the filenames, and the email
/// body all agree on the same stamp.
#[derive(Debug, Clone)]
pub struct SubmissionStamp {
    pub reference: String,
    pub generated_at: DateTime<Local>,
}

impl SubmissionStamp {
    pub fn generate() -> Self {
        Self {
            reference: Uuid::new_v4().to_string(),
            generated_at: Local::now(),
        }
    }

    /// Fixed at a given time, for deterministic output.
    pub fn at(reference: impl Into<String>, generated_at: DateTime<Local>) -> Self {
        Self {
            reference: reference.into(),
            generated_at,
        }
    }
}

/// Both exports for one submission, built once and handed to the mailer.
///
/// The bundle outlives a failed dispatch: whatever happens to the email,
/// these bytes stay available for manual download and retry.
#[derive(Debug, Clone)]
pub struct ExportBundle {
    pub stamp: SubmissionStamp,
    base_name: String,
    pub csv: String,
    pub pdf: Vec<u8>,
}

impl ExportBundle {
    /// Build CSV and PDF exports with a fresh stamp.
    pub fn build(record: &SerializedRecord) -> Result<Self, ExportError> {
        Self::build_with(record, SubmissionStamp::generate())
    }

    /// Build with a caller-provided stamp.
    pub fn build_with(record: &SerializedRecord, stamp: SubmissionStamp) -> Result<Self, ExportError> {
        let base_name = format!(
            "Survey_{}_{}",
            sanitize_filename(record.form_title()),
            stamp.generated_at.format("%Y%m%d_%H%M%S"),
        );
        let csv = make_csv(record)?;
        let pdf = make_pdf(record, &stamp)?;
        Ok(Self {
            stamp,
            base_name,
            csv,
            pdf,
        })
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn csv_filename(&self) -> String {
        format!("{}.csv", self.base_name)
    }

    pub fn pdf_filename(&self) -> String {
        format!("{}.pdf", self.base_name)
    }
}
