//! Typed report row

use serde::{Deserialize, Serialize};

/// One row of the creative performance report
///
/// Every column except `creative_id` may be blank in the source CSV; blank
/// cells deserialize to `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Creative {
    pub creative_id: String,
    #[serde(default)]
    pub creative_name: Option<String>,
    /// `;`-separated `category:value` tokens
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub ad_network: Option<String>,
    #[serde(default)]
    pub os: Option<String>,
    #[serde(default)]
    pub campaign: Option<String>,
    #[serde(default)]
    pub ad_group: Option<String>,
    /// Installs per mille
    #[serde(default)]
    pub ipm: Option<f64>,
    /// Click-through rate as a ratio (0.05 = 5%)
    #[serde(default)]
    pub ctr: Option<f64>,
    #[serde(default)]
    pub spend: Option<f64>,
    #[serde(default)]
    pub impressions: Option<u64>,
    #[serde(default)]
    pub clicks: Option<u64>,
    #[serde(default)]
    pub cpm: Option<f64>,
    #[serde(default)]
    pub cost_per_click: Option<f64>,
    #[serde(default)]
    pub cost_per_install: Option<f64>,
}

/// A field value borrowed from a [`Creative`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(Option<&'a str>),
    Number(Option<f64>),
    Count(Option<u64>),
}

impl FieldValue<'_> {
    /// Raw string form used for free-text search, `None` when absent
    #[must_use]
    pub fn to_search_string(&self) -> Option<String> {
        match self {
            Self::Text(v) => v.map(str::to_string),
            Self::Number(v) => v.map(|n| n.to_string()),
            Self::Count(v) => v.map(|n| n.to_string()),
        }
    }
}

impl Creative {
    /// Field names in report (CSV header) order
    pub const FIELD_NAMES: [&'static str; 16] = [
        "creative_id",
        "creative_name",
        "tags",
        "country",
        "ad_network",
        "os",
        "campaign",
        "ad_group",
        "ipm",
        "ctr",
        "spend",
        "impressions",
        "clicks",
        "cpm",
        "cost_per_click",
        "cost_per_install",
    ];

    /// Create a row with only an id set
    #[must_use]
    pub fn new(creative_id: impl Into<String>) -> Self {
        Self {
            creative_id: creative_id.into(),
            ..Self::default()
        }
    }

    /// Look up a field by its report column name
    #[must_use]
    pub fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "creative_id" => FieldValue::Text(Some(self.creative_id.as_str())),
            "creative_name" => FieldValue::Text(self.creative_name.as_deref()),
            "tags" => FieldValue::Text(self.tags.as_deref()),
            "country" => FieldValue::Text(self.country.as_deref()),
            "ad_network" => FieldValue::Text(self.ad_network.as_deref()),
            "os" => FieldValue::Text(self.os.as_deref()),
            "campaign" => FieldValue::Text(self.campaign.as_deref()),
            "ad_group" => FieldValue::Text(self.ad_group.as_deref()),
            "ipm" => FieldValue::Number(self.ipm),
            "ctr" => FieldValue::Number(self.ctr),
            "spend" => FieldValue::Number(self.spend),
            "impressions" => FieldValue::Count(self.impressions),
            "clicks" => FieldValue::Count(self.clicks),
            "cpm" => FieldValue::Number(self.cpm),
            "cost_per_click" => FieldValue::Number(self.cost_per_click),
            "cost_per_install" => FieldValue::Number(self.cost_per_install),
            _ => return None,
        };
        Some(value)
    }

    /// All fields in report order
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, FieldValue<'_>)> {
        Self::FIELD_NAMES
            .iter()
            .filter_map(move |name| self.field(name).map(|v| (*name, v)))
    }
}

#[cfg(test)]
impl Creative {
    /// Row with every searchable column filled with neutral placeholders
    pub(crate) fn complete(creative_id: impl Into<String>) -> Self {
        let text = || Some("n/a".to_string());
        Self {
            creative_name: text(),
            country: text(),
            ad_network: text(),
            os: text(),
            campaign: text(),
            ipm: Some(0.0),
            ctr: Some(0.0),
            spend: Some(0.0),
            impressions: Some(0),
            clicks: Some(0),
            ..Self::new(creative_id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_lookup() {
        let mut row = Creative::new("abc123");
        row.country = Some("US".to_string());
        row.clicks = Some(42);

        assert_eq!(row.field("creative_id"), Some(FieldValue::Text(Some("abc123"))));
        assert_eq!(row.field("country"), Some(FieldValue::Text(Some("US"))));
        assert_eq!(row.field("clicks"), Some(FieldValue::Count(Some(42))));
        assert_eq!(row.field("ipm"), Some(FieldValue::Number(None)));
        assert_eq!(row.field("nope"), None);
    }

    #[test]
    fn test_fields_cover_every_name() {
        let row = Creative::new("x");
        assert_eq!(row.fields().count(), Creative::FIELD_NAMES.len());
    }

    #[test]
    fn test_search_string() {
        assert_eq!(FieldValue::Text(None).to_search_string(), None);
        assert_eq!(FieldValue::Count(Some(7)).to_search_string().as_deref(), Some("7"));
        assert_eq!(FieldValue::Number(Some(0.5)).to_search_string().as_deref(), Some("0.5"));
        assert_eq!(FieldValue::Number(None).to_search_string(), None);
    }
}
