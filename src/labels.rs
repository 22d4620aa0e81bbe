//! Static screen text.

use serde::{Deserialize, Serialize};

/// Identifier of a static piece of screen text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelId {
    Title,
    FirstOperand,
    SecondOperand,
    Compute,
    /// Template for the result line; `{}` is replaced by the formatted sum.
    Result,
    HistoryHeading,
    ClearHistory,
}

/// Fixed mapping from [`LabelId`] to display text.
///
/// Defaults to the Spanish strings the screen ships with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Labels {
    title: String,
    first_operand: String,
    second_operand: String,
    compute: String,
    result: String,
    history_heading: String,
    clear_history: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            title: "Sumador".to_string(),
            first_operand: "Número 1".to_string(),
            second_operand: "Número 2".to_string(),
            compute: "Calcular y Mostrar Resultado".to_string(),
            result: "Resultado: {}".to_string(),
            history_heading: "Historial:".to_string(),
            clear_history: "Limpiar Historial".to_string(),
        }
    }
}

impl Labels {
    pub fn get(&self, id: LabelId) -> &str {
        match id {
            LabelId::Title => &self.title,
            LabelId::FirstOperand => &self.first_operand,
            LabelId::SecondOperand => &self.second_operand,
            LabelId::Compute => &self.compute,
            LabelId::Result => &self.result,
            LabelId::HistoryHeading => &self.history_heading,
            LabelId::ClearHistory => &self.clear_history,
        }
    }

    /// Replace the text for `id`.
    pub fn set(&mut self, id: LabelId, text: impl Into<String>) {
        let slot = match id {
            LabelId::Title => &mut self.title,
            LabelId::FirstOperand => &mut self.first_operand,
            LabelId::SecondOperand => &mut self.second_operand,
            LabelId::Compute => &mut self.compute,
            LabelId::Result => &mut self.result,
            LabelId::HistoryHeading => &mut self.history_heading,
            LabelId::ClearHistory => &mut self.clear_history,
        };
        *slot = text.into();
    }

    /// Apply every override that is present.
    pub fn with_overrides(mut self, overrides: &LabelOverrides) -> Self {
        for (id, text) in overrides.entries() {
            if let Some(text) = text {
                self.set(id, text.clone());
            }
        }
        self
    }

    /// Render the result line for an already formatted amount.
    ///
    /// Templates without a `{}` placeholder get the amount appended.
    pub fn result_line(&self, formatted: &str) -> String {
        if self.result.contains("{}") {
            self.result.replacen("{}", formatted, 1)
        } else {
            format!("{}{formatted}", self.result)
        }
    }
}

/// Optional replacements for the default labels, as read from configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelOverrides {
    pub title: Option<String>,
    pub first_operand: Option<String>,
    pub second_operand: Option<String>,
    pub compute: Option<String>,
    pub result: Option<String>,
    pub history_heading: Option<String>,
    pub clear_history: Option<String>,
}

impl LabelOverrides {
    fn entries(&self) -> [(LabelId, &Option<String>); 7] {
        [
            (LabelId::Title, &self.title),
            (LabelId::FirstOperand, &self.first_operand),
            (LabelId::SecondOperand, &self.second_operand),
            (LabelId::Compute, &self.compute),
            (LabelId::Result, &self.result),
            (LabelId::HistoryHeading, &self.history_heading),
            (LabelId::ClearHistory, &self.clear_history),
        ]
    }
}
