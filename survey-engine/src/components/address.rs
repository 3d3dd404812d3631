use survey_spec::{AnswerStore, ErrorKind, ValidationFailure};

use crate::components::digits_only;
use crate::{ComponentContext, InstanceRecord, RenderSurface, SectionComponent};

/// Reusable address section.
///
/// South African addresses get a province pick-list and a strict
/// four-digit postal code; other countries get a free-form region field
/// and a permissive postal code (non-empty, at most ten characters).
pub struct AddressComponent;

const SA_PROVINCES: [&str; 10] = [
    "",
    "Eastern Cape",
    "Free State",
    "Gauteng",
    "KwaZulu-Natal",
    "Limpopo",
    "Mpumalanga",
    "North West",
    "Northern Cape",
    "Western Cape",
];

const COUNTRIES: [&str; 34] = [
    "",
    "Angola",
    "Australia",
    "Botswana",
    "Brazil",
    "Canada",
    "China",
    "Eswatini",
    "France",
    "Germany",
    "Ghana",
    "India",
    "Ireland",
    "Italy",
    "Japan",
    "Kenya",
    "Lesotho",
    "Malawi",
    "Mauritius",
    "Mozambique",
    "Namibia",
    "Netherlands",
    "New Zealand",
    "Nigeria",
    "Portugal",
    "South Africa",
    "Spain",
    "Tanzania",
    "Uganda",
    "United Arab Emirates",
    "United Kingdom",
    "United States",
    "Zambia",
    "Zimbabwe",
];

/// Sub-fields in render and serialization order, with their prompts.
const REQUIRED_FIELDS: [(&str, &str); 4] = [
    ("street_no", "Street Number"),
    ("street_name", "Street Name"),
    ("suburb", "Suburb"),
    ("city", "City"),
];

fn postal_ok(code: &str, country: &str) -> bool {
    if country.trim() == "South Africa" {
        code.len() == 4 && digits_only(code).len() == 4
    } else {
        !code.is_empty() && code.len() <= 10
    }
}

fn string_options(options: &[&str]) -> Vec<String> {
    options.iter().map(ToString::to_string).collect()
}

impl SectionComponent for AddressComponent {
    fn render(&self, surface: &mut dyn RenderSurface, store: &mut AnswerStore, cx: &ComponentContext) {
        surface.heading(cx.title("Physical Address"));

        surface.text_input(store, &cx.key("unit_no"), "Unit Number (optional)", None);
        surface.text_input(store, &cx.key("complex"), "Complex Name (optional)", None);
        surface.text_input(store, &cx.key("street_no"), "Street Number", None);
        surface.text_input(store, &cx.key("street_name"), "Street Name", None);
        surface.text_input(store, &cx.key("suburb"), "Suburb", None);
        surface.text_input(store, &cx.key("city"), "City", None);
        surface.choice(store, &cx.key("country"), "Country", &string_options(&COUNTRIES), None);

        // Province is a pick-list for South Africa, free text elsewhere.
        if store.text(&cx.key("country")) == "South Africa" {
            surface.choice(
                store,
                &cx.key("province"),
                "Province",
                &string_options(&SA_PROVINCES),
                None,
            );
            surface.text_input(store, &cx.key("code"), "Postal Code (must be 4 digits)", None);
        } else {
            surface.text_input(store, &cx.key("province"), "Province/State/Region", None);
            surface.text_input(store, &cx.key("code"), "Postal Code", None);
        }
    }

    fn validate(&self, store: &AnswerStore, cx: &ComponentContext) -> Vec<ValidationFailure> {
        let mut failures = Vec::new();

        for (sub_field, label) in REQUIRED_FIELDS {
            if store.text(&cx.key(sub_field)).trim().is_empty() {
                failures.push(ValidationFailure::new(
                    "Address",
                    cx.key(sub_field).as_str(),
                    label,
                    ErrorKind::MissingRequired,
                ));
            }
        }

        let country = store.text(&cx.key("country")).trim().to_string();
        if country == "South Africa" && store.text(&cx.key("province")).trim().is_empty() {
            failures.push(ValidationFailure::new(
                "Address",
                cx.key("province").as_str(),
                "Province",
                ErrorKind::MissingRequired,
            ));
        }

        let code = store.text(&cx.key("code"));
        if !postal_ok(code, &country) {
            let kind = if code.is_empty() {
                ErrorKind::MissingRequired
            } else {
                ErrorKind::MalformedText
            };
            failures.push(ValidationFailure::new(
                "Address",
                cx.key("code").as_str(),
                "Postal Code",
                kind,
            ));
        }

        failures
    }

    fn serialize(&self, store: &AnswerStore, cx: &ComponentContext) -> Vec<InstanceRecord> {
        let sub_fields = [
            "unit_no",
            "complex",
            "street_no",
            "street_name",
            "suburb",
            "city",
            "province",
            "country",
            "code",
        ];
        vec![
            sub_fields
                .into_iter()
                .map(|sub| (sub.to_string(), store.text(&cx.key(sub)).to_string()))
                .collect(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn postal_codes() {
        assert!(postal_ok("7700", "South Africa"));
        assert!(!postal_ok("770", "South Africa"));
        assert!(!postal_ok("77001", "South Africa"));
        assert!(!postal_ok("77a0", "South Africa"));
        assert!(postal_ok("SW1A 1AA", "United Kingdom"));
        assert!(!postal_ok("", "United Kingdom"));
        assert!(!postal_ok("01234567890", "United Kingdom"));
    }
}
