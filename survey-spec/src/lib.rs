//! Declarative form model for the research survey tool.
//!
//! This crate provides the foundational types for defining surveys:
//! - `FormSpec`, `Section`, and `Field` - The declarative survey structure
//! - `LikertScale` - 1-5 ordinal scales with anchor-point labels
//! - `Namespace`, `AnswerKey`, and `AnswerStore` - Session-scoped answers
//! - `SerializedRecord` - The flattened, export-ready submission
//! - `ErrorKind` and `ValidationFailure` - Validation outcomes
//!
//! All types here are plain data. Rendering, validation, and serialization
//! behavior live in the `survey-engine` crate.

mod scale;
pub use scale::LikertScale;

mod field;
pub use field::{Field, FieldKind};

mod section;
pub use section::{ComponentConfig, Section, SectionBody};

mod form_spec;
pub use form_spec::FormSpec;

mod namespace;
pub use namespace::{AnswerKey, Namespace};

mod value;
pub use value::AnswerValue;

mod store;
pub use store::AnswerStore;

mod record;
pub use record::{RecordRow, SerializedRecord};

mod error;
pub use error::{ErrorKind, ValidationFailure};
