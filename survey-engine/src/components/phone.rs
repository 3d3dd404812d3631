use survey_spec::{AnswerStore, ErrorKind, ValidationFailure};

use crate::components::digits_only;
use crate::{ComponentContext, InstanceRecord, RenderSurface, SectionComponent};

/// Reusable phone section: dialing code plus number.
///
/// South African numbers (`+27`) must be nine digits with no leading zero;
/// any other dialing code accepts 6-15 digits.
pub struct PhoneComponent;

fn phone_ok(dial: &str, number: &str) -> bool {
    let digits = digits_only(number);
    if dial.trim() == "+27" {
        digits.len() == 9 && !digits.starts_with('0')
    } else {
        (6..=15).contains(&digits.len())
    }
}

impl SectionComponent for PhoneComponent {
    fn render(&self, surface: &mut dyn RenderSurface, store: &mut AnswerStore, cx: &ComponentContext) {
        surface.heading(cx.title("Contact Number"));

        surface.text_input(store, &cx.key("code"), "Dialing Code", Some("e.g., +27"));

        let number_label = if store.text(&cx.key("code")).trim() == "+27" {
            "Phone Number (must be 9 digits, no leading 0)"
        } else {
            "Phone Number (digits only)"
        };
        surface.text_input(store, &cx.key("number"), number_label, None);
    }

    fn validate(&self, store: &AnswerStore, cx: &ComponentContext) -> Vec<ValidationFailure> {
        let mut failures = Vec::new();
        let dial = store.text(&cx.key("code"));
        let number = store.text(&cx.key("number"));

        if dial.trim().is_empty() {
            failures.push(ValidationFailure::new(
                "Phone",
                cx.key("code").as_str(),
                "Dialing Code",
                ErrorKind::MissingRequired,
            ));
        }
        if number.trim().is_empty() {
            failures.push(ValidationFailure::new(
                "Phone",
                cx.key("number").as_str(),
                "Phone Number",
                ErrorKind::MissingRequired,
            ));
        }
        if !dial.trim().is_empty() && !number.trim().is_empty() && !phone_ok(dial, number) {
            failures.push(ValidationFailure::new(
                "Phone",
                cx.key("number").as_str(),
                "Phone Number",
                ErrorKind::MalformedText,
            ));
        }

        failures
    }

    fn serialize(&self, store: &AnswerStore, cx: &ComponentContext) -> Vec<InstanceRecord> {
        vec![vec![
            ("code".to_string(), store.text(&cx.key("code")).to_string()),
            ("number".to_string(), store.text(&cx.key("number")).to_string()),
        ]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn south_african_numbers() {
        assert!(phone_ok("+27", "821234567"));
        assert!(phone_ok("+27", "82 123 4567"));
        assert!(!phone_ok("+27", "0821234567"));
        assert!(!phone_ok("+27", "8212345"));
    }

    #[test]
    fn international_numbers() {
        assert!(phone_ok("+44", "7911123456"));
        assert!(phone_ok("+1", "555123"));
        assert!(!phone_ok("+1", "55512"));
        assert!(!phone_ok("+1", "5551234567890123"));
    }
}
