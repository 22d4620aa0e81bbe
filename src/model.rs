//! Screen state: the two raw inputs, the last result and the history log.

use core::fmt;

use crate::{ConfigError, CurrencyFormatter};

/// One of the two operand inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    First,
    Second,
}

impl TryFrom<u8> for Slot {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Slot::First),
            2 => Ok(Slot::Second),
            other => Err(ConfigError::InvalidSlot(other)),
        }
    }
}

/// Whether a computation has happened yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenState {
    Idle,
    HasResult,
}

/// Read an operand the way the screen does: any text that is not a
/// decimal number counts as zero.
///
/// Control characters and spaces around the number are ignored. The only
/// spellings of non-finite values are `Infinity` and `NaN`, optionally signed.
pub fn parse_operand(text: &str) -> f64 {
    let trimmed = text.trim_matches(|c: char| c <= '\u{20}');
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    let named = unsigned.starts_with(|c: char| c.is_ascii_alphabetic());
    if named && unsigned != "Infinity" && unsigned != "NaN" {
        return 0.0;
    }
    trimmed.parse().unwrap_or(0.0)
}

/// An immutable record of one computation, `"<n1> + <n2> = <result>"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry(String);

impl HistoryEntry {
    fn new(first: f64, second: f64, result: &str) -> Self {
        Self(format!("{first:?} + {second:?} = {result}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Computations since the last clear, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoryLog(Vec<HistoryEntry>);

impl HistoryLog {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, HistoryEntry> {
        self.0.iter()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.0.last()
    }

    fn push(&mut self, entry: HistoryEntry) -> &HistoryEntry {
        let index = self.0.len();
        self.0.push(entry);
        &self.0[index]
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

impl<'a> IntoIterator for &'a HistoryLog {
    type Item = &'a HistoryEntry;
    type IntoIter = core::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Everything the screen knows.
///
/// The result is a snapshot of the inputs at the last [`compute`](Self::compute),
/// editing an input afterwards does not change it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SumadorModel {
    first: String,
    second: String,
    result: String,
    history: HistoryLog,
}

impl SumadorModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the raw text of `slot`. Nothing is recomputed.
    pub fn set_input(&mut self, slot: Slot, text: impl Into<String>) {
        match slot {
            Slot::First => self.first = text.into(),
            Slot::Second => self.second = text.into(),
        }
    }

    /// Sum both inputs, store the formatted result and log the computation.
    pub fn compute(&mut self, formatter: &dyn CurrencyFormatter) -> &HistoryEntry {
        let first = parse_operand(&self.first);
        let second = parse_operand(&self.second);
        self.result = formatter.format(first + second);
        self.history.push(HistoryEntry::new(first, second, &self.result))
    }

    /// Drop every history entry. Inputs and result stay as they are.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn input(&self, slot: Slot) -> &str {
        match slot {
            Slot::First => &self.first,
            Slot::Second => &self.second,
        }
    }

    /// The last formatted result, empty before the first computation.
    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn has_result(&self) -> bool {
        !self.result.is_empty()
    }

    pub fn state(&self) -> ScreenState {
        if self.has_result() {
            ScreenState::HasResult
        } else {
            ScreenState::Idle
        }
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }
}
