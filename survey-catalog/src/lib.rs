//! Static form definitions, created once at process start.
//!
//! Each function returns a fresh [`FormSpec`](survey_spec::FormSpec); specs
//! are read-only after construction, so callers load them into an engine
//! and never touch them again.

mod investment_research;
pub use investment_research::investment_research;

mod panel_registration;
pub use panel_registration::panel_registration;

#[cfg(test)]
mod tests {
    use survey_engine::{ComponentRegistry, Engine};

    #[test]
    fn all_catalog_specs_load() {
        let registry = ComponentRegistry::builtin();
        Engine::load(super::investment_research(), &registry).unwrap();
        Engine::load(super::panel_registration(), &registry).unwrap();
    }
}
