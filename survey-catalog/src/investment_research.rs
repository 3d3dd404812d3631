//! The investment decision-making research survey.
//!
//! Evaluates user experience with investment recommendation systems,
//! focusing on transparency, trust, and explainability of AI-driven
//! financial advice.

use survey_spec::{Field, FormSpec, LikertScale, Section};

fn research_section(
    title: &str,
    likert_key: &str,
    likert_label: &str,
    likert_help: &str,
    comment_key: &str,
    comment_label: &str,
) -> Section {
    Section::fields(
        title,
        vec![
            Field::likert(likert_key, likert_label, LikertScale::agreement())
                .required()
                .with_help(likert_help),
            Field::comment(comment_key, comment_label),
        ],
    )
}

pub fn investment_research() -> FormSpec {
    FormSpec::new(
        "investment_research",
        "Investment Decision-Making Research Survey",
    )
    .with_section(Section::fields(
        "Participant Characterization (referring to you, not EasyAI)",
        vec![
            Field::choice(
                "investment_experience_years",
                "How many years of investment experience do you have?",
                [
                    "Less than 1 year",
                    "1-3 years",
                    "3-5 years",
                    "5-10 years",
                    "10-15 years",
                    "More than 15 years",
                ],
            )
            .required()
            .with_help("Please indicate your total duration of active investment participation"),
            Field::choice(
                "investment_proficiency",
                "Investment Proficiency Self-Assessment",
                [
                    "Nascent (Limited knowledge, learning fundamentals)",
                    "Developing (Growing competence, understanding core concepts)",
                    "Competent (Solid understanding, independent decision-making)",
                    "Proficient (Advanced knowledge, sophisticated strategies)",
                    "Expert (Comprehensive mastery, professional-level expertise)",
                ],
            )
            .required()
            .with_help("Please assess your current investment knowledge and decision-making capability"),
            Field::choice(
                "investment_frequency",
                "What is your investment decision frequency?",
                ["Daily", "Weekly", "Monthly", "Quarterly", "Annually", "Rarely"],
            )
            .required()
            .with_help("How often do you typically make investment decisions or portfolio adjustments?"),
            Field::choice(
                "portfolio_complexity",
                "Portfolio Complexity",
                [
                    "Single asset class (e.g., stocks only)",
                    "Limited diversification (2-3 asset classes)",
                    "Moderate diversification (4-5 asset classes)",
                    "Extensive diversification (6+ asset classes)",
                    "Complex strategies (derivatives, alternatives, etc.)",
                ],
            )
            .required()
            .with_help("Please characterize the complexity of your investment portfolio"),
        ],
    ))
    .with_section(research_section(
        "Prescriptive Knowledge",
        "prescriptive_structured",
        "Did you see structured recommendations (including timely data, risk indicators, etc.) that guided your decision-making?",
        "1 = Completely unstructured recommendations; 5 = Extremely clear, well-structured recommendations with disclaimers",
        "prescriptive_missing",
        "Describe any missing or unclear elements in the recommendations.",
    ))
    .with_section(research_section(
        "Human vs. Non-Human Actors",
        "human_explanations",
        "Did the system provide meaningful explanations for its recommendations and clearly indicate when human intervention might be required?",
        "1 = Explanations absent or confusing; 5 = Very clear, transparent reasoning and role delineation",
        "human_difficulties",
        "Mention any difficulties in understanding or trusting the system's explanations.",
    ))
    .with_section(research_section(
        "Complexity and Decomposition",
        "complexity_components",
        "Were you aware of the different components (risk profiling, data retrieval, disclaimers) used to generate advice?",
        "1 = No clear breakdown of how decisions were made; 5 = Very transparent breakdown of multiple system components",
        "complexity_improvements",
        "Suggest improvements for additional clarity or decomposition.",
    ))
    .with_section(research_section(
        "Types of Causality",
        "causality_differentiation",
        "Did the system differentiate between deterministic data (e.g., Piotroski scores) and probabilistic/subjective factors (e.g., sentiment)?",
        "1 = No clear distinction; 5 = Very clear, helpful distinction between certain and uncertain data",
        "causality_confusion",
        "Note any confusion about which factors were \"fixed\" vs. \"variable.\"",
    ))
    .with_section(research_section(
        "Mechanisms for Goal Achievement",
        "mechanisms_verification",
        "Could you verify the advice (e.g., underlying data sources, or rationales)?",
        "1 = System gave no verification channels; 5 = System provided extensive verification tools and disclaimers",
        "mechanisms_improvements",
        "Propose improvements to disclaimers, data presentation, or verification.",
    ))
    .with_section(research_section(
        "Justificatory Knowledge",
        "justification_metrics",
        "Did the system justify the financial metrics it used (e.g., Piotroski F-score) and explain and substantiate why they matter for investment decisions?",
        "1 = No justification of metrics; 5 = Clear, robust rationale behind each metric's significance",
        "justification_clarifications",
        "Suggest any clarifications or additional theoretical context needed.",
    ))
    .with_section(Section::fields(
        "Boundary Conditions",
        vec![
            Field::likert(
                "boundary_understanding",
                "Did you understand when and where AVA's recommendations were appropriate (e.g., single-stock buy & hold investment philosophy, vs. high frequency trading)?",
                LikertScale::agreement(),
            )
            .required()
            .with_help("1 = Boundaries not explained; 5 = Extremely clear explanations and investment philosophies"),
            Field::comment(
                "boundary_features",
                "Indicate any features or capabilities that would improve your investment research experience.",
            ),
            Field::comment(
                "boundary_misunderstanding",
                "Indicate any ways in which the scope was misunderstood or might be misapplied.",
            ),
        ],
    ))
    .with_section(Section::fields(
        "Trust",
        vec![
            Field::likert(
                "trust_insights",
                "Would you trust insights provided to inform your investment decisions?",
                LikertScale::trust(),
            )
            .required()
            .with_help("1 = Untrustworthy and uninformed; 5 = Trustworthy and informed"),
            Field::comment(
                "trust_improvements",
                "Indicate any features or capabilities that would improve your investment research experience.",
            ),
        ],
    ))
    .with_section(Section::fields(
        "Additional Comments (Optional)",
        vec![
            Field::comment(
                "overall_experience",
                "Please share any additional thoughts about your overall experience with the investment recommendation system.",
            ),
            Field::choice(
                "future_participation",
                "Would you be interested in participating in future research studies?",
                ["Yes", "No", "Maybe"],
            ),
        ],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_spec::{FieldKind, SectionBody};

    #[test]
    fn has_all_research_sections() {
        let spec = investment_research();
        assert_eq!(spec.len(), 10);
        assert_eq!(spec.sections()[8].title(), "Trust");
    }

    #[test]
    fn every_research_likert_is_required() {
        let spec = investment_research();
        for section in spec.sections() {
            let SectionBody::Fields(fields) = section.body() else {
                panic!("catalog survey has no component sections");
            };
            for field in fields {
                if matches!(field.kind(), FieldKind::Likert(_)) {
                    assert!(field.is_required(), "likert '{}' must be required", field.key());
                }
            }
        }
    }
}
