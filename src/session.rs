//! The screen session that owns the state and runs the event loop.

use flume::Receiver;
use tracing::{debug, trace};

use crate::{Emitter, Renderer, SumadorEvent, SumadorLogic, SumadorModel};

/// One mounted sumador screen.
///
/// The session is the single owner of the [`SumadorModel`]. It:
/// 1. Renders the initial model through [`SumadorLogic::view`]
/// 2. Takes queued events one at a time and reduces them with [`SumadorLogic::update`]
/// 3. Renders fresh props after every event
///
/// Events are queued through [`Emitter`] handles, which the view embeds in
/// prop callbacks. They are always applied on the thread that drives the
/// session, never while a render is in progress.
///
/// Hosts with their own UI loop call [`start`](Self::start) once and then
/// [`process_events`](Self::process_events) whenever input arrives; hosts
/// without one hand the thread over to [`run`](Self::run).
///
/// ```rust
/// use sumador_mvu::{Renderer, Slot, SumadorLogic, SumadorProps, SumadorSession};
///
/// struct Quiet;
/// impl Renderer for Quiet {
///     fn render(&mut self, _props: SumadorProps) {}
/// }
///
/// let mut session = SumadorSession::new(SumadorLogic::default(), Quiet);
/// session.start();
///
/// let emitter = session.emitter();
/// emitter.set_input(Slot::First, "10");
/// emitter.set_input(Slot::Second, "5");
/// emitter.compute();
/// session.process_events();
///
/// assert_eq!(session.model().result(), "$15.00");
/// assert_eq!(session.model().history().len(), 1);
/// ```
pub struct SumadorSession<Render: Renderer> {
    logic: SumadorLogic,
    renderer: Render,
    event_receiver: Receiver<SumadorEvent>,
    model: SumadorModel,
    emitter: Emitter,
}

impl<Render: Renderer> SumadorSession<Render> {
    /// Create a session with empty inputs, no result and an empty history.
    ///
    /// Nothing is rendered until [`start`](Self::start) or [`run`](Self::run).
    pub fn new(logic: SumadorLogic, renderer: Render) -> Self {
        Self::with_model(SumadorModel::new(), logic, renderer)
    }

    /// Create a session starting from an existing model.
    pub fn with_model(model: SumadorModel, logic: SumadorLogic, renderer: Render) -> Self {
        let (event_sender, event_receiver) = flume::unbounded();

        SumadorSession {
            logic,
            renderer,
            event_receiver,
            model,
            emitter: Emitter::new(event_sender),
        }
    }

    /// A handle for queueing events from outside the rendered props.
    pub fn emitter(&self) -> Emitter {
        self.emitter.clone()
    }

    pub fn model(&self) -> &SumadorModel {
        &self.model
    }

    pub fn renderer(&self) -> &Render {
        &self.renderer
    }

    /// Render the current model.
    pub fn start(&mut self) {
        debug!(history = self.model.history().len(), "starting sumador session");
        let props = self.logic.view(&self.model, &self.emitter);
        self.renderer.render(props);
    }

    /// Start the session and process events until the queue is closed.
    ///
    /// The session holds an emitter of its own, so this blocks for as long as
    /// the screen lives.
    pub fn run(&mut self) {
        self.start();

        while let Ok(event) = self.event_receiver.recv() {
            self.step(event);
        }
        debug!("sumador session stopped");
    }

    /// Apply every queued event without blocking.
    ///
    /// Returns how many events were applied.
    pub fn process_events(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.event_receiver.try_recv() {
            self.step(event);
            processed += 1;
        }
        processed
    }

    fn step(&mut self, event: SumadorEvent) {
        trace!(?event, "processing event");

        self.model = self.logic.update(event, &self.model);

        let props = self.logic.view(&self.model, &self.emitter);
        self.renderer.render(props);
    }
}

#[cfg(any(test, feature = "testing"))]
/// Driver returned by [`TestSession::run`] for manual event processing.
///
/// Only available with the `testing` feature or during tests.
pub struct TestDriver {
    session: SumadorSession<crate::TestRenderer>,
}

#[cfg(any(test, feature = "testing"))]
impl TestDriver {
    /// Apply all queued events.
    ///
    /// Call this after invoking prop callbacks to drive the screen in tests.
    pub fn process_events(&mut self) -> usize {
        self.session.process_events()
    }

    pub fn emitter(&self) -> Emitter {
        self.session.emitter()
    }

    pub fn model(&self) -> &SumadorModel {
        self.session.model()
    }
}

#[cfg(any(test, feature = "testing"))]
/// Session wired to a [`TestRenderer`](crate::TestRenderer) for tests.
///
/// Only available with the `testing` feature or during tests.
///
/// Events are never applied on their own. Tests invoke prop callbacks (or
/// use the driver's emitter) and then call
/// [`process_events`](TestDriver::process_events) to apply them.
///
/// ```rust
/// use sumador_mvu::{Labels, SumadorLogic, TestRenderer, TestSession};
///
/// let renderer = TestRenderer::new();
/// let logic = SumadorLogic::new(|n: f64| format!("{n}"), Labels::default());
/// let mut driver = TestSession::new(logic, renderer.clone()).run();
///
/// assert_eq!(renderer.count(), 1);
/// assert_eq!(driver.process_events(), 0);
/// ```
pub struct TestSession {
    session: SumadorSession<crate::TestRenderer>,
}

#[cfg(any(test, feature = "testing"))]
impl TestSession {
    pub fn new(logic: SumadorLogic, renderer: crate::TestRenderer) -> Self {
        TestSession {
            session: SumadorSession::new(logic, renderer),
        }
    }

    /// Session with the default labels and the given currency formatter.
    pub fn with_formatter(
        formatter: impl crate::CurrencyFormatter + Send + 'static,
        renderer: crate::TestRenderer,
    ) -> Self {
        Self::new(SumadorLogic::new(formatter, crate::Labels::default()), renderer)
    }

    /// Render the initial props and hand back a driver.
    pub fn run(mut self) -> TestDriver {
        self.session.start();
        TestDriver {
            session: self.session,
        }
    }
}
