//! Number format grammars
//!
//! Each supported display format owns one anchored regex, compiled once.
//! Values are also parsed leniently for range checks: only the leading
//! numeric prefix counts, so "1,234.50" compares as 1.0. Group separators
//! are display formatting, not parse input.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static COMMA_GROUPING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\d{1,3}(?:,\d{3})*|\d+)(?:\.\d{1,2})?$").expect("comma grouping pattern")
});

static DOT_GROUPING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\d{1,3}(?:\.\d{3})*|\d+)(?:,\d{1,2})?$").expect("dot grouping pattern")
});

static UNGROUPED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\d+)(?:,\d{1,3}(?:\.\d{1,2})?)?$").expect("ungrouped pattern")
});

static NUMBER_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9,.]+$").expect("number charset pattern"));

static LEADING_FLOAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)").expect("leading float pattern"));

/// Display format an author can require for a number field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumberFormat {
    /// 123,456,789.00
    #[serde(rename = "123,456,789.00")]
    CommaGrouping,
    /// 123.456.789,00
    #[serde(rename = "123.456.789,00")]
    DotGrouping,
    /// 123456,789.00
    #[serde(rename = "123456,789.00")]
    Ungrouped,
}

impl NumberFormat {
    /// The example pattern shown to authors, also the stored label.
    pub fn pattern(&self) -> &'static str {
        match self {
            NumberFormat::CommaGrouping => "123,456,789.00",
            NumberFormat::DotGrouping => "123.456.789,00",
            NumberFormat::Ungrouped => "123456,789.00",
        }
    }

    fn regex(&self) -> &'static Regex {
        match self {
            NumberFormat::CommaGrouping => &COMMA_GROUPING,
            NumberFormat::DotGrouping => &DOT_GROUPING,
            NumberFormat::Ungrouped => &UNGROUPED,
        }
    }

    /// Whether a value conforms to this format's grammar.
    pub fn matches(&self, value: &str) -> bool {
        self.regex().is_match(value)
    }
}

impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern())
    }
}

/// Whether the trimmed value consists solely of digits, commas and dots.
pub(crate) fn is_number_like(value: &str) -> bool {
    NUMBER_CHARS.is_match(value.trim())
}

/// Lenient parse of the leading numeric prefix: optional sign, then digits
/// with at most one decimal point. `None` when no digit is present, and
/// range comparisons against `None` never fire.
pub(crate) fn leading_number(value: &str) -> Option<f64> {
    let trimmed = value.trim_start();
    let matched = LEADING_FLOAT.find(trimmed)?;
    matched.as_str().parse().ok()
}
