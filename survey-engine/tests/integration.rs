//! Integration tests for the form engine.

use survey_engine::{ComponentRegistry, Engine, TestSurface};
use survey_spec::{
    AnswerStore, ComponentConfig, ErrorKind, Field, FormSpec, LikertScale, Namespace, RecordRow,
    Section,
};

fn trust_spec() -> FormSpec {
    FormSpec::new("demo", "Demo Survey").with_section(Section::fields(
        "Trust",
        vec![
            Field::likert(
                "trust",
                "Would you trust insights provided to inform your investment decisions?",
                LikertScale::agreement(),
            )
            .required(),
            Field::comment("trust_comments", "Anything that would improve your experience?"),
        ],
    ))
}

fn load(spec: FormSpec) -> Engine {
    Engine::load(spec, &ComponentRegistry::builtin()).unwrap()
}

#[test]
fn filled_required_fields_validate_ok() {
    let engine = load(trust_spec());
    let ns = Namespace::new("demo");
    let mut store = AnswerStore::new();

    let mut surface = TestSurface::new().with_text("demo__trust", "3 - Neutral");
    engine.render_form(&mut surface, &mut store, &ns);

    assert!(engine.validate(&store, &ns).is_ok());
}

#[test]
fn omitted_required_likert_reports_exactly_that_field() {
    let spec = trust_spec().with_section(Section::fields(
        "Prescriptive Knowledge",
        vec![
            Field::likert("prescriptive_structured", "Structured recommendations?", LikertScale::agreement())
                .required(),
            Field::comment("prescriptive_missing", "Missing elements?"),
        ],
    ));
    let engine = load(spec);
    let ns = Namespace::new("demo");
    let mut store = AnswerStore::new();

    // Fill everything except the second section's likert.
    let mut surface = TestSurface::new().with_text("demo__trust", "4 - Agree");
    engine.render_form(&mut surface, &mut store, &ns);

    let failures = engine.validate(&store, &ns).unwrap_err();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].field_key, "demo__prescriptive_structured");
    assert_eq!(failures[0].kind, ErrorKind::MissingRequired);
}

#[test]
fn likert_out_of_range_and_malformed() {
    let engine = load(trust_spec());
    let ns = Namespace::new("demo");
    let mut store = AnswerStore::new();

    let mut surface = TestSurface::new().with_text("demo__trust", "7 - Beyond the scale");
    engine.render_form(&mut surface, &mut store, &ns);
    let failures = engine.validate(&store, &ns).unwrap_err();
    assert_eq!(failures[0].kind, ErrorKind::OutOfRange);

    let mut surface = TestSurface::new().with_text("demo__trust", "definitely");
    engine.render_form(&mut surface, &mut store, &ns);
    let failures = engine.validate(&store, &ns).unwrap_err();
    assert_eq!(failures[0].kind, ErrorKind::MalformedText);
}

#[test]
fn text_fields_are_never_validated() {
    // A required comment is still accepted blank - prose answers are
    // optional regardless of configuration.
    let spec = FormSpec::new("demo", "Demo").with_section(Section::fields(
        "Comments",
        vec![Field::comment("overall", "Overall experience?").required()],
    ));
    let engine = load(spec);
    let ns = Namespace::new("demo");
    let store = AnswerStore::new();

    assert!(engine.validate(&store, &ns).is_ok());
}

#[test]
fn development_mode_bypasses_all_failures() {
    let mut engine = load(trust_spec());
    let ns = Namespace::new("demo");
    let store = AnswerStore::new();

    assert!(engine.validate(&store, &ns).is_err());
    assert!(!engine.development_mode());

    engine.set_development_mode(true);
    assert!(engine.validate(&store, &ns).is_ok());

    engine.set_development_mode(false);
    assert!(engine.validate(&store, &ns).is_err());
}

#[test]
fn serialization_is_deterministic() {
    let engine = load(trust_spec());
    let ns = Namespace::new("demo");
    let mut store = AnswerStore::new();

    let mut surface = TestSurface::new()
        .with_text("demo__trust", "4 - Agree")
        .with_text("demo__trust_comments", "Clearer disclaimers.");
    engine.render_form(&mut surface, &mut store, &ns);

    let first = engine.serialize_answers(&store, &ns);
    let second = engine.serialize_answers(&store, &ns);
    assert_eq!(first, second);
}

#[test]
fn trust_scenario_serializes_expected_rows() {
    let engine = load(trust_spec());
    let ns = Namespace::new("demo");
    let mut store = AnswerStore::new();

    let mut surface = TestSurface::new().with_text("demo__trust", "5 - Strongly Agree");
    engine.render_form(&mut surface, &mut store, &ns);

    assert!(engine.validate(&store, &ns).is_ok());
    let record = engine.serialize_answers(&store, &ns);
    assert_eq!(
        record.rows(),
        &[
            RecordRow::new("Trust", 1, "trust", "5 - Strongly Agree"),
            RecordRow::new("Trust", 1, "trust_comments", ""),
        ]
    );
}

fn two_address_spec() -> FormSpec {
    FormSpec::new("registration", "Panel Registration")
        .with_section(Section::component(
            "Residential Address",
            "address",
            "residential_address",
            ComponentConfig::new().with("title", "Residential Address"),
        ))
        .with_section(Section::component(
            "Postal Address",
            "address",
            "postal_address",
            ComponentConfig::new().with("title", "Postal Address"),
        ))
}

#[test]
fn component_instances_are_isolated() {
    let engine = load(two_address_spec());
    let ns = Namespace::new("registration");
    let mut store = AnswerStore::new();

    let mut surface = TestSurface::new()
        .with_text("registration__residential_address__city", "Cape Town")
        .with_text("registration__postal_address__city", "Johannesburg");
    engine.render_form(&mut surface, &mut store, &ns);

    let record = engine.serialize_answers(&store, &ns);
    let city = |section: &str| {
        record
            .rows()
            .iter()
            .find(|row| row.section == section && row.field == "city")
            .map(|row| row.value.clone())
            .unwrap()
    };
    assert_eq!(city("Residential Address"), "Cape Town");
    assert_eq!(city("Postal Address"), "Johannesburg");
}

#[test]
fn duplicate_instance_id_is_a_load_error() {
    let spec = FormSpec::new("registration", "Panel Registration")
        .with_section(Section::component(
            "Residential Address",
            "address",
            "home",
            ComponentConfig::new(),
        ))
        .with_section(Section::component(
            "Postal Address",
            "address",
            "home",
            ComponentConfig::new(),
        ));

    let err = Engine::load(spec, &ComponentRegistry::builtin()).unwrap_err();
    assert!(err.to_string().contains("mounted twice"));
}

#[test]
fn unknown_component_is_a_load_error() {
    let spec = FormSpec::new("demo", "Demo").with_section(Section::component(
        "Directors",
        "natural_persons",
        "directors",
        ComponentConfig::new(),
    ));

    let err = Engine::load(spec, &ComponentRegistry::builtin()).unwrap_err();
    assert!(err.to_string().contains("unknown component"));
}

#[test]
fn phone_component_validates_dialing_rules() {
    let spec = FormSpec::new("demo", "Demo").with_section(Section::component(
        "Contact Information",
        "phone",
        "contact_phone",
        ComponentConfig::new(),
    ));
    let engine = load(spec);
    let ns = Namespace::new("demo");
    let mut store = AnswerStore::new();

    // A +27 number with a leading zero is rejected.
    let mut surface = TestSurface::new()
        .with_text("demo__contact_phone__code", "+27")
        .with_text("demo__contact_phone__number", "0821234567");
    engine.render_form(&mut surface, &mut store, &ns);
    let failures = engine.validate(&store, &ns).unwrap_err();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].kind, ErrorKind::MalformedText);

    // Dropping the leading zero makes it valid.
    let mut surface = TestSurface::new().with_text("demo__contact_phone__number", "821234567");
    engine.render_form(&mut surface, &mut store, &ns);
    assert!(engine.validate(&store, &ns).is_ok());
}

#[test]
fn rerendering_preserves_prior_answers() {
    let engine = load(trust_spec());
    let ns = Namespace::new("demo");
    let mut store = AnswerStore::new();

    let mut surface = TestSurface::new().with_text("demo__trust", "2 - Disagree");
    engine.render_form(&mut surface, &mut store, &ns);

    // Navigating back to the page renders again with no new input; the
    // stored answer must survive.
    let mut surface = TestSurface::new();
    engine.render_form(&mut surface, &mut store, &ns);

    let record = engine.serialize_answers(&store, &ns);
    assert_eq!(record.rows()[0].value, "2 - Disagree");
}

#[test]
fn render_walks_sections_in_order() {
    let engine = load(trust_spec().with_section(Section::component(
        "Contact Information",
        "phone",
        "contact_phone",
        ComponentConfig::new(),
    )));
    let ns = Namespace::new("demo");
    let mut store = AnswerStore::new();

    let mut surface = TestSurface::new();
    engine.render_form(&mut surface, &mut store, &ns);

    assert_eq!(
        surface.rendered_keys(),
        &[
            "demo__trust",
            "demo__trust_comments",
            "demo__contact_phone__code",
            "demo__contact_phone__number",
        ]
    );
    assert_eq!(surface.headings(), &["Trust", "Contact Number"]);
}
