/// Failure while building or parsing an export.
///
/// Export failures are never fatal to the session: the pipeline reports
/// them and the participant can retry submission.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("CSV write error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("PDF error: {0}")]
    Pdf(#[from] printpdf::Error),

    #[error("malformed record number '{0}' in CSV")]
    RecordNumber(String),
}
