//! Renderable description of the screen.
//!
//! Props are rebuilt from the model after every event. Plain data tells the
//! renderer what to draw; the boxed callbacks feed user interaction back
//! into the session.

use core::fmt;

/// Keyboard behaviour hint for a number field. Has no effect on the model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyboardHint {
    /// Numeric keyboard whose action key moves to the next field.
    Next,
    /// Numeric keyboard whose action key closes it.
    Done,
}

/// Identifier of the leading icon drawn inside number fields.
pub const MONEY_ICON: &str = "money";

/// A labeled numeric text field.
pub struct NumberFieldProps {
    pub label: String,
    pub icon: &'static str,
    pub value: String,
    pub keyboard: KeyboardHint,
    /// Called with the field's full text after every keystroke.
    pub on_value_changed: Box<dyn Fn(String) + Send>,
}

/// A labeled button.
pub struct ButtonProps {
    pub label: String,
    pub on_click: Box<dyn Fn() + Send>,
}

/// The history panel, only present while the log has entries.
pub struct HistoryPanelProps {
    pub heading: String,
    /// One line per entry, oldest first.
    pub entries: Vec<String>,
    pub clear: ButtonProps,
}

/// Everything a renderer needs to draw the screen.
pub struct SumadorProps {
    pub title: String,
    pub first: NumberFieldProps,
    pub second: NumberFieldProps,
    pub compute: ButtonProps,
    /// The result line, `None` until the first computation.
    pub result: Option<String>,
    pub history: Option<HistoryPanelProps>,
}

impl fmt::Debug for NumberFieldProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberFieldProps")
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("value", &self.value)
            .field("keyboard", &self.keyboard)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for ButtonProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonProps")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for HistoryPanelProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryPanelProps")
            .field("heading", &self.heading)
            .field("entries", &self.entries)
            .field("clear", &self.clear)
            .finish()
    }
}

impl fmt::Debug for SumadorProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SumadorProps")
            .field("title", &self.title)
            .field("first", &self.first)
            .field("second", &self.second)
            .field("compute", &self.compute)
            .field("result", &self.result)
            .field("history", &self.history)
            .finish()
    }
}
