//! # survey-export
//!
//! Exporters for submitted surveys. A [`SerializedRecord`] produced by the
//! engine is turned into:
//!
//! - a CSV data file in the fixed `Section,Record #,Field,Value` schema
//! - a PDF summary report grouped by section, stamped with the generation
//!   time and a reference identifier
//!
//! [`ExportBundle::build`] produces both at once under a standardized
//! filename; the submission pipeline attaches them to the outgoing email
//! and keeps them available for manual download if dispatch fails.
//!
//! [`SerializedRecord`]: survey_spec::SerializedRecord

mod error;
pub use error::ExportError;

mod csv;
pub use self::csv::{make_csv, parse_csv, sanitize_filename};

mod pdf;
pub use pdf::make_pdf;

mod bundle;
pub use bundle::{ExportBundle, SubmissionStamp};
