use super::types::PreviewField;
use crate::data::{Creative, FieldValue};
use crate::table::format;
use heck::ToTitleCase;

/// Placeholder for blank cells
pub const MISSING: &str = "-";

/// Detail view of a single report row
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub row: Creative,
    pub expanded: bool,
}

impl Preview {
    /// Collapsed preview of `row`
    #[must_use]
    pub const fn new(row: Creative) -> Self {
        Self {
            row,
            expanded: false,
        }
    }

    #[must_use]
    pub const fn expanded(row: Creative) -> Self {
        Self {
            row,
            expanded: true,
        }
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Labelled, formatted fields to display
    ///
    /// Collapsed previews show the truncated id and name. Expanded previews
    /// append every other report field in report order.
    #[must_use]
    pub fn fields(&self) -> Vec<PreviewField> {
        let mut fields = vec![
            PreviewField::new("Creative ID", format::truncate_id(&self.row.creative_id)),
            PreviewField::new(
                "Name",
                self.row.creative_name.as_deref().unwrap_or(MISSING),
            ),
        ];

        if self.expanded {
            fields.extend(
                self.row
                    .fields()
                    .filter(|(name, _)| !matches!(*name, "creative_id" | "creative_name"))
                    .map(|(name, value)| PreviewField::new(label_for(name), format_value(name, value))),
            );
        }
        fields
    }
}

/// Display label for a report field name
fn label_for(name: &str) -> String {
    match name {
        "os" => "OS".to_string(),
        "ipm" => "IPM".to_string(),
        "ctr" => "CTR".to_string(),
        "cpm" => "CPM".to_string(),
        _ => name.to_title_case(),
    }
}

fn is_currency(name: &str) -> bool {
    name == "spend" || name.contains("cost")
}

fn format_value(name: &str, value: FieldValue<'_>) -> String {
    match value {
        FieldValue::Text(Some(s)) if !s.is_empty() => s.to_string(),
        FieldValue::Number(Some(v)) if name == "ctr" => format::percent(v),
        FieldValue::Number(Some(v)) if is_currency(name) => format::currency(v),
        FieldValue::Number(Some(v)) => format::grouped_decimal(v),
        FieldValue::Count(Some(v)) => format::grouped(v),
        _ => MISSING.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Creative {
        let mut row = Creative::new("creative-0001234");
        row.creative_name = Some("Bubble Blast".to_string());
        row.ctr = Some(0.0523);
        row.cost_per_click = Some(0.4);
        row.impressions = Some(12_000);
        row.ipm = Some(1234.5);
        row.cpm = Some(12.5);
        row
    }

    fn value_of<'a>(fields: &'a [PreviewField], label: &str) -> Option<&'a str> {
        fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }

    #[test]
    fn test_collapsed_shows_id_and_name() {
        let fields = Preview::new(sample()).fields();
        assert_eq!(
            fields,
            vec![
                PreviewField::new("Creative ID", "..1234"),
                PreviewField::new("Name", "Bubble Blast"),
            ]
        );
    }

    #[test]
    fn test_expanded_formats_every_field() {
        let fields = Preview::expanded(sample()).fields();
        assert_eq!(fields.len(), Creative::FIELD_NAMES.len());
        assert_eq!(value_of(&fields, "CTR"), Some("5.23%"));
        assert_eq!(value_of(&fields, "Cost Per Click"), Some("$0.40"));
        assert_eq!(value_of(&fields, "Impressions"), Some("12,000"));
        assert_eq!(value_of(&fields, "IPM"), Some("1,234.5"));
        assert_eq!(value_of(&fields, "CPM"), Some("12.5"));
        assert_eq!(value_of(&fields, "Ad Network"), Some("-"));
        assert_eq!(value_of(&fields, "Clicks"), Some("-"));
    }

    #[test]
    fn test_toggle_expanded() {
        let mut preview = Preview::new(sample());
        preview.toggle_expanded();
        assert!(preview.expanded);
        preview.toggle_expanded();
        assert_eq!(preview.fields().len(), 2);
    }

    #[test]
    fn test_missing_name() {
        let fields = Preview::new(Creative::new("x")).fields();
        assert_eq!(value_of(&fields, "Name"), Some("-"));
    }
}
