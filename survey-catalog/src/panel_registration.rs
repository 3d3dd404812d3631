//! Research panel registration form.
//!
//! A small form exercising the reusable components: one phone mount and
//! two address mounts (residential and postal) under the same namespace.

use survey_spec::{ComponentConfig, Field, FormSpec, Section};

pub fn panel_registration() -> FormSpec {
    FormSpec::new("panel_registration", "Research Panel Registration")
        .with_section(Section::fields(
            "Participant Details",
            vec![
                Field::text("full_name", "Full Name"),
                Field::text("email_address", "Email Address")
                    .with_help("Used only to share study results"),
            ],
        ))
        .with_section(Section::component(
            "Contact Information",
            "phone",
            "contact_phone",
            ComponentConfig::new().with("title", "Contact Number"),
        ))
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

#[cfg(test)]
mod tests {
    use super::*;
    use survey_spec::SectionBody;

    #[test]
    fn mounts_are_distinct_instances() {
        let spec = panel_registration();
        let mut mounts = Vec::new();
        for section in spec.sections() {
            if let SectionBody::Component {
                component_id,
                instance_id,
                ..
            } = section.body()
            {
                mounts.push((component_id.clone(), instance_id.clone()));
            }
        }
        assert_eq!(mounts.len(), 3);
        let unique: std::collections::HashSet<_> = mounts.iter().collect();
        assert_eq!(unique.len(), mounts.len());
    }
}
