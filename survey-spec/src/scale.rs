/// A 1-5 ordinal scale with anchor-point labels.
///
/// Stored answers keep the full option string (e.g. `"5 - Strongly Agree"`)
/// so that serialized records read the same way the participant saw them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikertScale {
    anchors: [&'static str; 5],
}

impl LikertScale {
    /// Create a scale from five anchor labels, points 1 through 5.
    pub const fn new(anchors: [&'static str; 5]) -> Self {
        Self { anchors }
    }

    /// The standard agreement scale used by the research questions.
    pub const fn agreement() -> Self {
        Self::new([
            "Strongly Disagree",
            "Disagree",
            "Neutral",
            "Agree",
            "Strongly Agree",
        ])
    }

    /// The trust scale.
    pub const fn trust() -> Self {
        Self::new([
            "Completely Untrustworthy",
            "Somewhat Untrustworthy",
            "Neutral",
            "Somewhat Trustworthy",
            "Completely Trustworthy",
        ])
    }

    /// The full option string for a point, e.g. `label(5)` is
    /// `"5 - Strongly Agree"` on the agreement scale.
    ///
    /// # Panics
    /// Panics if `point` is outside 1-5.
    pub fn label(&self, point: u8) -> String {
        assert!((1..=5).contains(&point), "likert point out of range");
        format!("{point} - {}", self.anchors[usize::from(point) - 1])
    }

    /// Widget options: a blank "unanswered" entry followed by the five
    /// labelled points, in order.
    pub fn options(&self) -> Vec<String> {
        let mut options = Vec::with_capacity(6);
        options.push(String::new());
        for point in 1..=5 {
            options.push(self.label(point));
        }
        options
    }

    /// Extract the numeric point from a stored option string.
    ///
    /// Accepts both the full `"4 - Agree"` form and a bare integer. Returns
    /// `None` for text that does not start with an integer; the returned
    /// value is *not* range-checked, so callers can distinguish a malformed
    /// answer from an out-of-range one.
    pub fn parse_point(text: &str) -> Option<i64> {
        let text = text.trim();
        let lead = match text.split_once(" -") {
            Some((lead, _)) => lead,
            None => text,
        };
        lead.trim().parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        let scale = LikertScale::agreement();
        assert_eq!(scale.label(1), "1 - Strongly Disagree");
        assert_eq!(scale.label(5), "5 - Strongly Agree");
    }

    #[test]
    fn options_start_blank() {
        let options = LikertScale::trust().options();
        assert_eq!(options.len(), 6);
        assert_eq!(options[0], "");
        assert_eq!(options[3], "3 - Neutral");
    }

    #[test]
    fn parse_point_forms() {
        assert_eq!(LikertScale::parse_point("4 - Agree"), Some(4));
        assert_eq!(LikertScale::parse_point("5"), Some(5));
        assert_eq!(LikertScale::parse_point("7 - Off the chart"), Some(7));
        assert_eq!(LikertScale::parse_point("Agree"), None);
        assert_eq!(LikertScale::parse_point(""), None);
    }
}
