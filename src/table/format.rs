//! Cell formatting
//!
//! Display rules for report values: truncated ids, fixed decimals, percent,
//! currency and grouped integers.

use crate::tags::{category_of, segments};

/// Number of tag categories shown before collapsing the rest into `+N`
pub const TAG_PREVIEW_COUNT: usize = 2;

/// `..` followed by the last four characters of the id
///
/// # Examples
///
/// ```
/// use adlens::table::format::truncate_id;
///
/// assert_eq!(truncate_id("abcdef123456"), "..3456");
/// assert_eq!(truncate_id("ab"), "..ab");
/// ```
#[must_use]
pub fn truncate_id(id: &str) -> String {
    let count = id.chars().count();
    let tail: String = id.chars().skip(count.saturating_sub(4)).collect();
    format!("..{tail}")
}

/// Two fixed decimals
#[must_use]
pub fn fixed2(value: f64) -> String {
    format!("{value:.2}")
}

/// Ratio shown as a percentage with two decimals (`0.0523` → `5.23%`)
#[must_use]
pub fn percent(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.0)
}

/// Dollar amount with two decimals
#[must_use]
pub fn currency(value: f64) -> String {
    format!("${value:.2}")
}

/// Insert `,` every three digits of an unsigned integer string
fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Integer with thousands separators (`1234567` → `1,234,567`)
#[must_use]
pub fn grouped(value: u64) -> String {
    group_digits(&value.to_string())
}

/// Decimal with thousands separators and at most three fraction digits,
/// trailing zeros dropped (`12345.5` → `12,345.5`)
#[must_use]
pub fn grouped_decimal(value: f64) -> String {
    let rendered = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');
    let sign = if value < 0.0 && rendered.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };

    let mut out = format!("{sign}{}", group_digits(int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Compact summary of a row tag field: the first categories, then `+N`
///
/// # Examples
///
/// ```
/// use adlens::table::format::tag_summary;
///
/// assert_eq!(tag_summary("A:1;B:2;C:3;D:4"), "A, B +2");
/// assert_eq!(tag_summary("Concept:UGC"), "Concept");
/// ```
#[must_use]
pub fn tag_summary(field: &str) -> String {
    let all: Vec<&str> = segments(field).collect();
    let shown: Vec<&str> = all
        .iter()
        .take(TAG_PREVIEW_COUNT)
        .map(|t| category_of(t))
        .collect();

    let mut out = shown.join(", ");
    if all.len() > TAG_PREVIEW_COUNT {
        out.push_str(&format!(" +{}", all.len() - TAG_PREVIEW_COUNT));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_id() {
        assert_eq!(truncate_id("abcdef123456"), "..3456");
        assert_eq!(truncate_id("1234"), "..1234");
        assert_eq!(truncate_id(""), "..");
        assert_eq!(truncate_id("ééééé"), "..éééé");
    }

    #[test]
    fn test_fixed_percent_currency() {
        assert_eq!(fixed2(12.5), "12.50");
        assert_eq!(percent(0.0523), "5.23%");
        assert_eq!(percent(1.0), "100.00%");
        assert_eq!(currency(150.256), "$150.26");
        assert_eq!(currency(0.0), "$0.00");
    }

    #[test]
    fn test_grouped() {
        assert_eq!(grouped(0), "0");
        assert_eq!(grouped(999), "999");
        assert_eq!(grouped(1000), "1,000");
        assert_eq!(grouped(1_234_567), "1,234,567");
    }

    #[test]
    fn test_grouped_decimal() {
        assert_eq!(grouped_decimal(12345.5), "12,345.5");
        assert_eq!(grouped_decimal(1.25), "1.25");
        assert_eq!(grouped_decimal(3.0), "3");
        assert_eq!(grouped_decimal(0.12345), "0.123");
        assert_eq!(grouped_decimal(-1500.0), "-1,500");
    }

    #[test]
    fn test_tag_summary() {
        assert_eq!(tag_summary(""), "");
        assert_eq!(tag_summary("A:1;B:2"), "A, B");
        assert_eq!(tag_summary("A:1;B:2;C:3"), "A, B +1");
    }
}
