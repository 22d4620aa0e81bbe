use sumador_mvu::{
    CurrencyFormatter, Labels, Locale, Slot, SumadorLogic, TestDriver, TestRenderer, TestSession,
};

mockall::mock! {
    pub Formatter {}

    impl CurrencyFormatter for Formatter {
        fn format(&self, amount: f64) -> String;
    }
}

pub(crate) struct ScreenTest {
    pub(crate) driver: TestDriver,
    pub(crate) renders: TestRenderer,
}

pub(crate) fn given_a_us_dollar_screen() -> ScreenTest {
    given_a_formatter(Locale::EnUs.currency_format())
}

pub(crate) fn given_a_formatter(
    formatter: impl CurrencyFormatter + Send + 'static,
) -> ScreenTest {
    let renders = TestRenderer::new();
    let logic = SumadorLogic::new(formatter, Labels::default());
    let driver = TestSession::new(logic, renders.clone()).run();

    ScreenTest { driver, renders }
}

impl ScreenTest {
    /// Type into a field through the last rendered props, as a user would.
    pub(crate) fn when_typed(&mut self, slot: Slot, text: &str) -> &mut Self {
        self.renders.with_last(|props| {
            let field = match slot {
                Slot::First => &props.first,
                Slot::Second => &props.second,
            };
            (field.on_value_changed)(text.to_string());
        });
        self.driver.process_events();
        self
    }

    pub(crate) fn when_compute_pressed(&mut self) -> &mut Self {
        self.renders.with_last(|props| (props.compute.on_click)());
        self.driver.process_events();
        self
    }

    /// Press the history panel's clear button.
    ///
    /// Panics when the panel is not shown, which tests rely on.
    pub(crate) fn when_clear_pressed(&mut self) -> &mut Self {
        self.renders.with_last(|props| {
            let panel = props.history.as_ref().expect("history panel is hidden");
            (panel.clear.on_click)();
        });
        self.driver.process_events();
        self
    }

    pub(crate) fn last_result(&self) -> Option<String> {
        self.renders.with_last(|props| props.result.clone())
    }

    pub(crate) fn last_history(&self) -> Option<Vec<String>> {
        self.renders
            .with_last(|props| props.history.as_ref().map(|panel| panel.entries.clone()))
    }
}
