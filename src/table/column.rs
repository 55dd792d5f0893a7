//! Table column definitions

use super::format;
use crate::data::{Creative, FieldValue};
use heck::ToSnakeCase;
use std::fmt;
use std::str::FromStr;

/// A column of the creatives table, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    CreativeId,
    CreativeName,
    Tags,
    Country,
    AdNetwork,
    Os,
    Campaign,
    Ipm,
    Ctr,
    Spend,
    Impressions,
    Clicks,
}

impl Column {
    /// Every displayed column, left to right
    pub const ALL: [Self; 12] = [
        Self::CreativeId,
        Self::CreativeName,
        Self::Tags,
        Self::Country,
        Self::AdNetwork,
        Self::Os,
        Self::Campaign,
        Self::Ipm,
        Self::Ctr,
        Self::Spend,
        Self::Impressions,
        Self::Clicks,
    ];

    /// Report field backing this column
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::CreativeId => "creative_id",
            Self::CreativeName => "creative_name",
            Self::Tags => "tags",
            Self::Country => "country",
            Self::AdNetwork => "ad_network",
            Self::Os => "os",
            Self::Campaign => "campaign",
            Self::Ipm => "ipm",
            Self::Ctr => "ctr",
            Self::Spend => "spend",
            Self::Impressions => "impressions",
            Self::Clicks => "clicks",
        }
    }

    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::CreativeId => "Creative ID",
            Self::CreativeName => "Creative Name",
            Self::Tags => "Tags",
            Self::Country => "Country",
            Self::AdNetwork => "Ad Network",
            Self::Os => "OS",
            Self::Campaign => "Campaign",
            Self::Ipm => "IPM",
            Self::Ctr => "CTR",
            Self::Spend => "Spend",
            Self::Impressions => "Impressions",
            Self::Clicks => "Clicks",
        }
    }

    /// Raw value of this column for `row`
    #[must_use]
    pub fn value(self, row: &Creative) -> FieldValue<'_> {
        match self {
            Self::CreativeId => FieldValue::Text(Some(row.creative_id.as_str())),
            Self::CreativeName => FieldValue::Text(row.creative_name.as_deref()),
            Self::Tags => FieldValue::Text(row.tags.as_deref()),
            Self::Country => FieldValue::Text(row.country.as_deref()),
            Self::AdNetwork => FieldValue::Text(row.ad_network.as_deref()),
            Self::Os => FieldValue::Text(row.os.as_deref()),
            Self::Campaign => FieldValue::Text(row.campaign.as_deref()),
            Self::Ipm => FieldValue::Number(row.ipm),
            Self::Ctr => FieldValue::Number(row.ctr),
            Self::Spend => FieldValue::Number(row.spend),
            Self::Impressions => FieldValue::Count(row.impressions),
            Self::Clicks => FieldValue::Count(row.clicks),
        }
    }

    /// Whether the global text search looks at this column
    ///
    /// Tags have their own structured filter and are left out.
    #[must_use]
    pub const fn is_searchable(self) -> bool {
        !matches!(self, Self::Tags)
    }

    /// Whether values compare numerically
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Ipm | Self::Ctr | Self::Spend | Self::Impressions | Self::Clicks
        )
    }

    /// Columns covered by the global text search
    pub fn searchable() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(|c| c.is_searchable())
    }

    /// Display text for this column's cell in `row` (empty when absent)
    #[must_use]
    pub fn format(self, row: &Creative) -> String {
        match (self, self.value(row)) {
            (Self::CreativeId, _) => format::truncate_id(&row.creative_id),
            (Self::Tags, FieldValue::Text(Some(tags))) => format::tag_summary(tags),
            (Self::Ctr, FieldValue::Number(Some(v))) => format::percent(v),
            (Self::Spend, FieldValue::Number(Some(v))) => format::currency(v),
            (_, FieldValue::Number(Some(v))) => format::fixed2(v),
            (_, FieldValue::Count(Some(v))) => format::grouped(v),
            (_, FieldValue::Text(Some(s))) => s.to_string(),
            _ => String::new(),
        }
    }

    /// Next column to the right, wrapping around
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// Error for an unrecognized column name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown column '{0}' (expected one of: {names})", names = column_names())]
pub struct UnknownColumn(pub String);

fn column_names() -> String {
    Column::ALL
        .iter()
        .map(|c| c.field_name())
        .collect::<Vec<_>>()
        .join(", ")
}

impl FromStr for Column {
    type Err = UnknownColumn;

    /// Accepts field names or headers in any case or separator style
    /// (`ad_network`, `Ad Network`, `ad-network`, `AdNetwork`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_snake_case();
        Self::ALL
            .into_iter()
            .find(|c| c.field_name() == wanted || c.header().to_snake_case() == wanted)
            .ok_or_else(|| UnknownColumn(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Creative {
        let mut row = Creative::new("creative-00009876");
        row.creative_name = Some("Bubble Blast".to_string());
        row.tags = Some("Concept:UGC;Audio - Type:voiceover;Audio - Language:English".to_string());
        row.ipm = Some(12.5);
        row.ctr = Some(0.0523);
        row.spend = Some(150.25);
        row.impressions = Some(1_234_567);
        row
    }

    #[test]
    fn test_format_cells() {
        let row = sample();
        assert_eq!(Column::CreativeId.format(&row), "..9876");
        assert_eq!(Column::CreativeName.format(&row), "Bubble Blast");
        assert_eq!(Column::Tags.format(&row), "Concept, Audio - Type +1");
        assert_eq!(Column::Ipm.format(&row), "12.50");
        assert_eq!(Column::Ctr.format(&row), "5.23%");
        assert_eq!(Column::Spend.format(&row), "$150.25");
        assert_eq!(Column::Impressions.format(&row), "1,234,567");
        assert_eq!(Column::Clicks.format(&row), "");
        assert_eq!(Column::Country.format(&row), "");
    }

    #[test]
    fn test_from_str_accepts_variants() {
        assert_eq!("ad_network".parse::<Column>(), Ok(Column::AdNetwork));
        assert_eq!("Ad Network".parse::<Column>(), Ok(Column::AdNetwork));
        assert_eq!("ad-network".parse::<Column>(), Ok(Column::AdNetwork));
        assert_eq!("CTR".parse::<Column>(), Ok(Column::Ctr));
        assert_eq!("Creative ID".parse::<Column>(), Ok(Column::CreativeId));
        assert!("nonsense".parse::<Column>().is_err());
    }

    #[test]
    fn test_searchable_excludes_tags() {
        assert!(Column::searchable().all(|c| c != Column::Tags));
        assert_eq!(Column::searchable().count(), Column::ALL.len() - 1);
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(Column::CreativeId.next(), Column::CreativeName);
        assert_eq!(Column::Clicks.next(), Column::CreativeId);
    }
}
