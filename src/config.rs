//! Screen configuration.

use serde::{Deserialize, Serialize};

use crate::{ConfigError, CurrencyFormat, LabelOverrides, Labels, Locale};

/// Locale, currency and label settings for a sumador screen.
///
/// The crate never inspects the host environment. Hosts pass their active
/// locale tag here; without one the screen formats `en-US` dollars.
///
/// Every field is optional in serialized form:
///
/// ```rust
/// use sumador_mvu::{Locale, SumadorConfig};
///
/// let config = SumadorConfig::from_json(r#"{ "locale": "es-ES" }"#).unwrap();
/// assert_eq!(config.locale, Locale::EsEs);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SumadorConfig {
    /// Locale whose currency conventions format the result.
    pub locale: Locale,
    /// Custom conventions replacing the locale's preset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<CurrencyFormat>,
    pub labels: LabelOverrides,
}

impl SumadorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_currency(mut self, currency: CurrencyFormat) -> Self {
        self.currency = Some(currency);
        self
    }

    /// The custom currency format if one is set, the locale's preset otherwise.
    pub fn currency_format(&self) -> CurrencyFormat {
        self.currency
            .clone()
            .unwrap_or_else(|| self.locale.currency_format())
    }

    /// The default labels with this configuration's overrides applied.
    pub fn labels(&self) -> Labels {
        Labels::default().with_overrides(&self.labels)
    }
}
