//! # survey-engine
//!
//! The form engine for the research survey tool. Surface-agnostic.
//!
//! The engine takes a declarative [`FormSpec`], resolves its component
//! mounts against a [`ComponentRegistry`] at load time, and then drives
//! three operations over an explicit [`AnswerStore`]:
//!
//! - [`Engine::render_form`] - walk sections in order and draw widgets on a
//!   [`RenderSurface`] (display only, no validation)
//! - [`Engine::validate`] - collect every failure at once, so participants
//!   see all missing or invalid answers in a single pass
//! - [`Engine::serialize_answers`] - flatten the store into an ordered
//!   [`SerializedRecord`](survey_spec::SerializedRecord) for the exporters
//!
//! ## Usage
//!
//! ```rust
//! use survey_engine::{ComponentRegistry, Engine, TestSurface};
//! use survey_spec::{AnswerStore, Field, FormSpec, LikertScale, Namespace, Section};
//!
//! let spec = FormSpec::new("demo", "Demo Survey").with_section(Section::fields(
//!     "Trust",
//!     vec![Field::likert("trust", "Would you trust it?", LikertScale::trust()).required()],
//! ));
//!
//! let engine = Engine::load(spec, &ComponentRegistry::builtin()).unwrap();
//! let ns = Namespace::new("demo");
//! let mut store = AnswerStore::new();
//!
//! let mut surface = TestSurface::new().with_text("demo__trust", "5 - Completely Trustworthy");
//! engine.render_form(&mut surface, &mut store, &ns);
//!
//! assert!(engine.validate(&store, &ns).is_ok());
//! let record = engine.serialize_answers(&store, &ns);
//! assert_eq!(record.rows()[0].value, "5 - Completely Trustworthy");
//! ```

// Re-export the spec types; engine users need both.
pub use survey_spec::*;

mod surface;
pub use surface::RenderSurface;

mod component;
pub use component::{ComponentContext, InstanceRecord, SectionComponent};

mod registry;
pub use registry::ComponentRegistry;

pub mod components;

mod engine;
pub use engine::{Engine, LoadError};

mod test_surface;
pub use test_surface::TestSurface;
