//! Screen logic: the update and view functions.

use tracing::debug;

use crate::props::{ButtonProps, HistoryPanelProps, KeyboardHint, NumberFieldProps, MONEY_ICON};
use crate::{
    CurrencyFormatter, Emitter, LabelId, Labels, Slot, SumadorConfig, SumadorEvent, SumadorModel,
    SumadorProps,
};

/// Application logic of the sumador screen.
///
/// Two pure functions drive the screen:
/// - [`update`](Self::update): (Event, Model) → Model
/// - [`view`](Self::view): Model → Props, with callbacks wired to an [`Emitter`]
///
/// The currency formatter is injected, so the logic stays independent of
/// any locale machinery and tests can supply a deterministic stub.
pub struct SumadorLogic {
    formatter: Box<dyn CurrencyFormatter + Send>,
    labels: Labels,
}

impl SumadorLogic {
    pub fn new(formatter: impl CurrencyFormatter + Send + 'static, labels: Labels) -> Self {
        Self {
            formatter: Box::new(formatter),
            labels,
        }
    }

    /// Logic using the configured currency format and labels.
    pub fn from_config(config: &SumadorConfig) -> Self {
        Self::new(config.currency_format(), config.labels())
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Reduce an event to the next model.
    ///
    /// Every event succeeds; unparseable operands are read as zero.
    pub fn update(&self, event: SumadorEvent, model: &SumadorModel) -> SumadorModel {
        let mut next = model.clone();
        match event {
            SumadorEvent::InputChanged(slot, text) => next.set_input(slot, text),
            SumadorEvent::ComputeRequested => {
                let entry = next.compute(&*self.formatter);
                debug!(%entry, "computed sum");
            }
            SumadorEvent::ClearHistoryRequested => {
                debug!(cleared = next.history().len(), "clearing history");
                next.clear_history();
            }
        }
        next
    }

    /// Derive props from the model.
    pub fn view(&self, model: &SumadorModel, emitter: &Emitter) -> SumadorProps {
        let result = model
            .has_result()
            .then(|| self.labels.result_line(model.result()));

        let history = (!model.history().is_empty()).then(|| HistoryPanelProps {
            heading: self.labels.get(LabelId::HistoryHeading).to_string(),
            entries: model.history().iter().map(ToString::to_string).collect(),
            clear: self.button(LabelId::ClearHistory, emitter, Emitter::clear_history),
        });

        SumadorProps {
            title: self.labels.get(LabelId::Title).to_string(),
            first: self.number_field(model, Slot::First, emitter),
            second: self.number_field(model, Slot::Second, emitter),
            compute: self.button(LabelId::Compute, emitter, Emitter::compute),
            result,
            history,
        }
    }

    fn number_field(&self, model: &SumadorModel, slot: Slot, emitter: &Emitter) -> NumberFieldProps {
        let (label, keyboard) = match slot {
            Slot::First => (LabelId::FirstOperand, KeyboardHint::Next),
            Slot::Second => (LabelId::SecondOperand, KeyboardHint::Done),
        };
        let emitter = emitter.clone();
        NumberFieldProps {
            label: self.labels.get(label).to_string(),
            icon: MONEY_ICON,
            value: model.input(slot).to_string(),
            keyboard,
            on_value_changed: Box::new(move |text: String| emitter.set_input(slot, text)),
        }
    }

    fn button(&self, label: LabelId, emitter: &Emitter, action: fn(&Emitter)) -> ButtonProps {
        let emitter = emitter.clone();
        ButtonProps {
            label: self.labels.get(label).to_string(),
            on_click: Box::new(move || action(&emitter)),
        }
    }
}

impl Default for SumadorLogic {
    fn default() -> Self {
        Self::from_config(&SumadorConfig::default())
    }
}
