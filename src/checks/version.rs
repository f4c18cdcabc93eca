//! Version extraction and comparison.
//!
//! Two schemes are supported:
//!
//! - [`VersionScheme::Float`] keeps every digit and `.` in the command
//!   output, concatenated, and reads the leading decimal number of that
//!   string. `git version 2.39.1` yields `2.39`. Because the comparison is
//!   on floating-point values, `2.10` (2.1) ranks below `2.9`.
//! - [`VersionScheme::Dotted`] takes the first dotted-numeric token in the
//!   output and compares it component by component.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

static LEADING_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\d+(?:\.\d*)?|\.\d+)").unwrap());

static DOTTED_VERSION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)*").unwrap());

/// How version strings are extracted and compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionScheme {
    /// Concatenated digits parsed as one floating-point number.
    #[default]
    Float,
    /// Component-wise comparison of the first `N.N.N` token.
    Dotted,
}

impl fmt::Display for VersionScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float => write!(f, "float"),
            Self::Dotted => write!(f, "dotted"),
        }
    }
}

/// A version read from command output or configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum Version {
    Float(f64),
    Dotted(Vec<u64>),
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(value) => write!(f, "{}", value),
            Self::Dotted(parts) => {
                let parts: Vec<String> = parts.iter().map(|p| p.to_string()).collect();
                write!(f, "{}", parts.join("."))
            }
        }
    }
}

impl Version {
    /// Compare two versions of the same scheme.
    ///
    /// Returns `None` for mixed schemes or NaN.
    pub fn compare(&self, other: &Version) -> Option<Ordering> {
        match (self, other) {
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(b),
            (Self::Dotted(a), Self::Dotted(b)) => Some(compare_dotted(a, b)),
            _ => None,
        }
    }

    /// Whether this version is at least `minimum`.
    pub fn satisfies(&self, minimum: &Version) -> bool {
        matches!(
            self.compare(minimum),
            Some(Ordering::Greater | Ordering::Equal)
        )
    }
}

impl VersionScheme {
    /// Extract a version from free-form command output.
    pub fn extract(self, output: &str) -> Option<Version> {
        match self {
            Self::Float => leading_decimal(&numeric_characters(output)).map(Version::Float),
            Self::Dotted => {
                let token = DOTTED_VERSION.find(output)?;
                parse_dotted(token.as_str()).map(Version::Dotted)
            }
        }
    }

    /// Parse a configured minimum version.
    ///
    /// Unlike [`VersionScheme::extract`], the whole string must be a version.
    pub fn parse_minimum(self, minimum: &str) -> Option<Version> {
        let minimum = minimum.trim();
        match self {
            Self::Float => minimum
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(Version::Float),
            Self::Dotted => parse_dotted(minimum).map(Version::Dotted),
        }
    }
}

/// Keep only ASCII digits and `.` characters, in order.
pub fn numeric_characters(output: &str) -> String {
    output
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

fn leading_decimal(filtered: &str) -> Option<f64> {
    let number = LEADING_DECIMAL.find(filtered)?;
    number.as_str().parse().ok()
}

fn parse_dotted(token: &str) -> Option<Vec<u64>> {
    if token.is_empty() {
        return None;
    }
    token.split('.').map(|part| part.parse().ok()).collect()
}

/// Missing trailing components count as zero, so `2.0` equals `2`.
fn compare_dotted(a: &[u64], b: &[u64]) -> Ordering {
    let len = a.len().max(b.len());
    for i in 0..len {
        let left = a.get(i).copied().unwrap_or(0);
        let right = b.get(i).copied().unwrap_or(0);
        match left.cmp(&right) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}
