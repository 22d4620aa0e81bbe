//! Currency formatting collaborator.
//!
//! The screen never formats amounts itself. It hands the raw sum to a
//! [`CurrencyFormatter`], which is either a locale preset ([`CurrencyFormat`])
//! or any closure with the right signature.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Turns a numeric amount into display text.
///
/// Closures and function items implement this trait through the blanket
/// implementation, which keeps test stubs to a single line:
///
/// ```rust
/// use sumador_mvu::CurrencyFormatter;
///
/// let formatter = |amount: f64| format!("<{amount}>");
/// assert_eq!(formatter.format(2.5), "<2.5>");
/// ```
pub trait CurrencyFormatter {
    /// Format `amount` as currency.
    fn format(&self, amount: f64) -> String;
}

impl<F> CurrencyFormatter for F
where
    F: Fn(f64) -> String,
{
    fn format(&self, amount: f64) -> String {
        self(amount)
    }
}

/// Where the currency symbol sits relative to the digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolPosition {
    /// `$15.00`
    Prefix,
    /// `15,00 €`
    Suffix,
}

/// Most fraction digits a format renders; larger settings are clamped.
pub const MAX_FRACTION_DIGITS: usize = 20;

/// Description of a locale's currency conventions.
///
/// Built from a [`Locale`] preset or deserialized from configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub position: SymbolPosition,
    /// Put a (non-breaking) space between the symbol and the digits.
    pub spaced: bool,
    pub grouping_separator: char,
    /// Integer parts shorter than `3 + min_grouping_digits - 1` stay ungrouped.
    pub min_grouping_digits: usize,
    pub decimal_separator: char,
    /// Clamped to [`MAX_FRACTION_DIGITS`].
    pub fraction_digits: usize,
}

impl CurrencyFormat {
    fn prefixed(symbol: &str, grouping: char, decimal: char, fraction_digits: usize) -> Self {
        Self {
            symbol: symbol.to_string(),
            position: SymbolPosition::Prefix,
            spaced: false,
            grouping_separator: grouping,
            min_grouping_digits: 1,
            decimal_separator: decimal,
            fraction_digits,
        }
    }

    fn suffixed(symbol: &str, grouping: char, decimal: char, min_grouping_digits: usize) -> Self {
        Self {
            symbol: symbol.to_string(),
            position: SymbolPosition::Suffix,
            spaced: true,
            grouping_separator: grouping,
            min_grouping_digits,
            decimal_separator: decimal,
            fraction_digits: 2,
        }
    }

    /// Format the digits of `amount` without sign or symbol.
    fn digits(&self, amount: f64) -> String {
        // Rust rounds the exact binary value half-to-even here.
        let precision = self.fraction_digits.min(MAX_FRACTION_DIGITS);
        let fixed = format!("{:.*}", precision, amount.abs());
        let (integer, fraction) = match fixed.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (fixed.as_str(), None),
        };

        let mut out = String::with_capacity(fixed.len() + integer.len() / 3);
        let grouped = integer.len() >= self.min_grouping_digits.max(1).saturating_add(3);
        for (i, c) in integer.chars().enumerate() {
            if grouped && i > 0 && (integer.len() - i) % 3 == 0 {
                out.push(self.grouping_separator);
            }
            out.push(c);
        }
        if let Some(fraction) = fraction {
            out.push(self.decimal_separator);
            out.push_str(fraction);
        }
        out
    }
}

impl CurrencyFormatter for CurrencyFormat {
    fn format(&self, amount: f64) -> String {
        if amount.is_nan() {
            return "NaN".to_string();
        }
        let digits = if amount.is_infinite() {
            "∞".to_string()
        } else {
            self.digits(amount)
        };
        // Amounts that round to zero never show a sign.
        let visible = amount.is_infinite() || digits.chars().any(|c| matches!(c, '1'..='9'));
        let sign = if amount.is_sign_negative() && visible { "-" } else { "" };
        let gap = if self.spaced { "\u{a0}" } else { "" };

        match self.position {
            SymbolPosition::Prefix => format!("{sign}{}{gap}{digits}", self.symbol),
            SymbolPosition::Suffix => format!("{sign}{digits}{gap}{}", self.symbol),
        }
    }
}

/// Built-in locales with known currency conventions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Locale {
    #[default]
    EnUs,
    EnGb,
    EsEs,
    EsMx,
    DeDe,
    JaJp,
}

impl Locale {
    pub const ALL: [Locale; 6] = [
        Locale::EnUs,
        Locale::EnGb,
        Locale::EsEs,
        Locale::EsMx,
        Locale::DeDe,
        Locale::JaJp,
    ];

    /// Canonical `language-REGION` tag.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
            Locale::EsEs => "es-ES",
            Locale::EsMx => "es-MX",
            Locale::DeDe => "de-DE",
            Locale::JaJp => "ja-JP",
        }
    }

    /// The currency conventions of this locale.
    pub fn currency_format(self) -> CurrencyFormat {
        match self {
            Locale::EnUs | Locale::EsMx => CurrencyFormat::prefixed("$", ',', '.', 2),
            Locale::EnGb => CurrencyFormat::prefixed("£", ',', '.', 2),
            Locale::JaJp => CurrencyFormat::prefixed("￥", ',', '.', 0),
            Locale::EsEs => CurrencyFormat::suffixed("€", '.', ',', 2),
            Locale::DeDe => CurrencyFormat::suffixed("€", '.', ',', 1),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('_', "-");
        Locale::ALL
            .into_iter()
            .find(|locale| locale.tag().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| ConfigError::UnknownLocale(s.to_string()))
    }
}

impl TryFrom<String> for Locale {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.tag().to_string()
    }
}
