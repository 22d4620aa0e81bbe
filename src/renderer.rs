//! Renderer abstraction for drawing the screen.

#[cfg(any(test, feature = "testing"))]
use portable_atomic_util::Arc;
#[cfg(any(test, feature = "testing"))]
use spin::Mutex;

use crate::SumadorProps;

/// Bridge to the UI toolkit that actually draws the screen.
///
/// [`render`](Self::render) is called once when the session starts and again
/// after every processed event, each time with fresh props derived from the
/// current model via [`SumadorLogic::view`](crate::SumadorLogic::view).
///
/// # Example
///
/// ```rust
/// use sumador_mvu::{Renderer, SumadorProps};
///
/// struct ConsoleRenderer;
///
/// impl Renderer for ConsoleRenderer {
///     fn render(&mut self, props: SumadorProps) {
///         if let Some(result) = &props.result {
///             println!("{result}");
///         }
///     }
/// }
/// ```
pub trait Renderer {
    /// Draw the given props.
    ///
    /// Invoking a prop callback here only queues an event; it is applied
    /// after this render returns.
    fn render(&mut self, props: SumadorProps);
}

#[cfg(any(test, feature = "testing"))]
/// Renderer that captures every rendered [`SumadorProps`] for assertions.
///
/// Only available with the `testing` feature. Clones share the same
/// capture buffer, so keep one clone and hand the other to the session.
///
/// # Example
///
/// ```rust
/// use sumador_mvu::{TestRenderer, TestSession};
///
/// let renderer = TestRenderer::new();
/// let mut driver = TestSession::with_formatter(|n: f64| format!("{n:.2}"), renderer.clone()).run();
///
/// // Type into the first field and press compute through the rendered props
/// renderer.with_renders(|renders| (renders[0].first.on_value_changed)("4".to_string()));
/// driver.process_events();
/// renderer.with_last(|props| (props.compute.on_click)());
/// driver.process_events();
///
/// renderer.with_last(|props| {
///     assert_eq!(props.result.as_deref(), Some("Resultado: 4.00"));
/// });
/// ```
pub struct TestRenderer {
    renders: Arc<Mutex<Vec<SumadorProps>>>,
}

#[cfg(any(test, feature = "testing"))]
impl Clone for TestRenderer {
    fn clone(&self) -> Self {
        Self {
            renders: self.renders.clone(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl Renderer for TestRenderer {
    fn render(&mut self, props: SumadorProps) {
        self.renders.lock().push(props);
    }
}

#[cfg(any(test, feature = "testing"))]
impl Default for TestRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
impl TestRenderer {
    pub fn new() -> Self {
        Self {
            renders: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of renders so far.
    pub fn count(&self) -> usize {
        self.renders.lock().len()
    }

    /// Access every captured render, oldest first.
    ///
    /// Callbacks invoked from inside the closure only queue events, so it is
    /// safe to press buttons here and process events afterwards.
    pub fn with_renders<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Vec<SumadorProps>) -> R,
    {
        let renders = self.renders.lock();
        f(&renders)
    }

    /// Access the most recent render.
    ///
    /// # Panics
    ///
    /// Panics if nothing has been rendered yet.
    pub fn with_last<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&SumadorProps) -> R,
    {
        self.with_renders(|renders| f(renders.last().expect("nothing rendered yet")))
    }
}
