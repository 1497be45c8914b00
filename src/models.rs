use serde::{Deserialize, Serialize};

/// Optional inputs to [`crate::BarGraphGeneric::draw`].
///
/// Every field defaults to absent:
/// - `error_primary`: no error indicators are drawn
/// - `error_secondary`: accepted for a second series that is never rendered
/// - `axis_label`: the horizontal axis gets no description
/// - `tick_labels`: ticks show their numeric positions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_primary: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_secondary: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_labels: Option<Vec<String>>,
}

impl DrawOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error_primary(mut self, err: Vec<f64>) -> Self {
        self.error_primary = Some(err);
        self
    }

    pub fn error_secondary(mut self, err: Vec<f64>) -> Self {
        self.error_secondary = Some(err);
        self
    }

    pub fn axis_label(mut self, label: impl Into<String>) -> Self {
        self.axis_label = Some(label.into());
        self
    }

    pub fn tick_labels<S: Into<String>>(mut self, labels: impl IntoIterator<Item = S>) -> Self {
        self.tick_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }
}

/// A complete chart request as read from a JSON or CSV file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartInput {
    /// One entry per bar group; only the count matters for placement.
    pub categories: Vec<String>,
    pub values: Vec<f64>,
    #[serde(flatten)]
    pub options: DrawOptions,
}

impl ChartInput {
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Split a user-typed list on commas or semicolons, trimming entries and dropping
/// empty ones.
pub fn parse_list(s: &str) -> Vec<String> {
    s.split([',', ';'])
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_list_splits_and_trims() {
        assert_eq!(parse_list("A, B;C,,"), vec!["A", "B", "C"]);
        assert!(parse_list(" , ;").is_empty());
    }

    #[test]
    fn options_default_to_absent() {
        let o = DrawOptions::default();
        assert!(o.error_primary.is_none());
        assert!(o.error_secondary.is_none());
        assert!(o.axis_label.is_none());
        assert!(o.tick_labels.is_none());
    }

    #[test]
    fn chart_input_json_flattens_options() {
        let txt = r#"{
            "categories": ["a", "b"],
            "values": [0.2, 0.4],
            "axis_label": "Distance (m)",
            "tick_labels": ["A", "B"]
        }"#;
        let input: ChartInput = serde_json::from_str(txt).unwrap();
        assert_eq!(input.len(), 2);
        assert_eq!(input.options.axis_label.as_deref(), Some("Distance (m)"));
        assert_eq!(input.options.tick_labels, Some(vec!["A".into(), "B".into()]));
        assert!(input.options.error_primary.is_none());
    }
}
