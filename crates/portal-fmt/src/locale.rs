//! Locale rules for date and currency rendering.
//!
//! A [`Locale`] holds the tables the formatters need: month names for dates
//! and a [`CurrencyFormat`] for amounts. The built-in default renders US
//! English month names and Indian rupees, which is what the portal views use.
//!
//! Locales can be loaded from YAML, with every field optional:
//!
//! ```yaml
//! currency:
//!   symbol: "$"
//!   grouping: western
//! ```
//!
//! The free formatting functions read a process-wide default which can be
//! replaced once at startup with [`set_default_locale`].

use std::path::Path;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::LocaleError;

const EN_US_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// How the integer part of a number is split into groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    /// Last three digits, then pairs: `12,34,567`.
    #[default]
    Indian,
    /// Groups of three: `1,234,567`.
    Western,
    /// No separators.
    None,
}

impl Grouping {
    /// Inserts `separator` into a string of ASCII digits.
    ///
    /// ```rust
    /// use portal_fmt::Grouping;
    ///
    /// assert_eq!(Grouping::Indian.apply("1234567", ','), "12,34,567");
    /// assert_eq!(Grouping::Western.apply("1234567", ','), "1,234,567");
    /// ```
    pub fn apply(&self, digits: &str, separator: char) -> String {
        if *self == Grouping::None || digits.len() <= 3 {
            return digits.to_string();
        }
        let (head, tail) = digits.split_at(digits.len() - 3);

        let head_group = match self {
            Grouping::Indian => 2,
            _ => 3,
        };

        // Leading partial group, then full groups, then the trailing three.
        let mut out = String::with_capacity(digits.len() + digits.len() / 2);
        let lead = head.len() % head_group;
        if lead > 0 {
            out.push_str(&head[..lead]);
        }
        for chunk in head.as_bytes()[lead..].chunks(head_group) {
            if !out.is_empty() {
                out.push(separator);
            }
            out.extend(chunk.iter().map(|&b| b as char));
        }
        out.push(separator);
        out.push_str(tail);
        out
    }
}

/// Currency rendering rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub fraction_digits: u8,
    pub grouping: Grouping,
    pub decimal_separator: char,
    pub group_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "₹".to_string(),
            fraction_digits: 2,
            grouping: Grouping::Indian,
            decimal_separator: '.',
            group_separator: ',',
        }
    }
}

/// Formatting tables used by the date and currency formatters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Locale {
    pub month_names: [String; 12],
    pub currency: CurrencyFormat,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            month_names: EN_US_MONTHS.map(String::from),
            currency: CurrencyFormat::default(),
        }
    }
}

impl Locale {
    /// Parses a locale from YAML. Missing fields fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed YAML or a blank month name.
    pub fn from_yaml(source: &str) -> Result<Self, LocaleError> {
        let locale: Locale = serde_yaml::from_str(source)?;
        locale.validate()?;
        Ok(locale)
    }

    /// Reads and parses a YAML locale file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, LocaleError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| LocaleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&source)
    }

    /// Returns the name of a 1-based month, or `None` outside 1..=12.
    pub fn month_name(&self, month: u32) -> Option<&str> {
        let index = usize::try_from(month).ok()?.checked_sub(1)?;
        self.month_names.get(index).map(String::as_str)
    }

    fn validate(&self) -> Result<(), LocaleError> {
        match self.month_names.iter().position(|m| m.trim().is_empty()) {
            Some(index) => Err(LocaleError::EmptyMonthName { month: index + 1 }),
            None => Ok(()),
        }
    }
}

static DEFAULT_LOCALE: Lazy<RwLock<Arc<Locale>>> =
    Lazy::new(|| RwLock::new(Arc::new(Locale::default())));

/// Returns the process-wide locale used by the free formatting functions.
pub fn default_locale() -> Arc<Locale> {
    let guard = DEFAULT_LOCALE
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    Arc::clone(&guard)
}

/// Replaces the process-wide locale.
///
/// Intended to be called once during startup, before formatting begins.
pub fn set_default_locale(locale: Locale) {
    let mut guard = DEFAULT_LOCALE
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    log::debug!(
        "default locale replaced (currency symbol {:?})",
        locale.currency.symbol
    );
    *guard = Arc::new(locale);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indian_grouping() {
        let g = Grouping::Indian;
        assert_eq!(g.apply("0", ','), "0");
        assert_eq!(g.apply("500", ','), "500");
        assert_eq!(g.apply("1000", ','), "1,000");
        assert_eq!(g.apply("100000", ','), "1,00,000");
        assert_eq!(g.apply("1234567", ','), "12,34,567");
        assert_eq!(g.apply("123456789", ','), "12,34,56,789");
    }

    #[test]
    fn test_western_grouping() {
        let g = Grouping::Western;
        assert_eq!(g.apply("1000", ','), "1,000");
        assert_eq!(g.apply("123456", ','), "123,456");
        assert_eq!(g.apply("1234567", '.'), "1.234.567");
    }

    #[test]
    fn test_no_grouping() {
        assert_eq!(Grouping::None.apply("1234567", ','), "1234567");
    }

    #[test]
    fn test_default_locale_tables() {
        let locale = Locale::default();
        assert_eq!(locale.month_name(1), Some("January"));
        assert_eq!(locale.month_name(12), Some("December"));
        assert_eq!(locale.month_name(0), None);
        assert_eq!(locale.month_name(13), None);
        assert_eq!(locale.currency.symbol, "₹");
    }

    #[test]
    fn test_from_yaml_partial() {
        let yaml = "currency:\n  symbol: \"$\"\n  grouping: western\n";
        let locale = Locale::from_yaml(yaml).unwrap();
        assert_eq!(locale.currency.symbol, "$");
        assert_eq!(locale.currency.grouping, Grouping::Western);
        assert_eq!(locale.currency.fraction_digits, 2);
        assert_eq!(locale.month_name(3), Some("March"));
    }

    #[test]
    fn test_from_yaml_rejects_blank_month() {
        let yaml = "month_names: [Jan, Feb, ' ', Apr, May, Jun, Jul, Aug, Sep, Oct, Nov, Dec]\n";
        let err = Locale::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, LocaleError::EmptyMonthName { month: 3 }));
    }

    #[test]
    fn test_from_yaml_rejects_wrong_month_count() {
        assert!(Locale::from_yaml("month_names: [Jan, Feb]\n").is_err());
    }

    #[test]
    fn test_from_yaml_malformed() {
        assert!(matches!(
            Locale::from_yaml("currency: [unclosed"),
            Err(LocaleError::Yaml(_))
        ));
    }
}
