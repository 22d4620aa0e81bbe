//! Model-View-Update core for a two-operand currency sum screen.
//!
//! The screen has two numeric text inputs, a compute button that sums them
//! and formats the sum as currency, and a history of past computations that
//! can be cleared. Drawing is left to a [`Renderer`]; everything else lives
//! here with unidirectional data flow:
//!
//! 1. A [`SumadorSession`] owns the [`SumadorModel`]
//! 2. User interaction queues [`SumadorEvent`]s through an [`Emitter`]
//! 3. [`SumadorLogic::update`] reduces each event to the next model
//! 4. [`SumadorLogic::view`] derives [`SumadorProps`] for the renderer
//!
//! Operands that are not decimal numbers count as zero. No operation on the
//! screen can fail.
//!
//! ## Example
//!
//! ```rust
//! use sumador_mvu::{Renderer, SumadorConfig, SumadorLogic, SumadorProps, SumadorSession};
//!
//! struct PrintRenderer;
//!
//! impl Renderer for PrintRenderer {
//!     fn render(&mut self, props: SumadorProps) {
//!         println!("{}", props.title);
//!         if let Some(result) = &props.result {
//!             println!("{result}");
//!         }
//!         if let Some(history) = &props.history {
//!             for line in &history.entries {
//!                 println!("  {line}");
//!             }
//!         }
//!     }
//! }
//!
//! let config = SumadorConfig::from_json(r#"{ "locale": "en-US" }"#).unwrap();
//! let mut session = SumadorSession::new(SumadorLogic::from_config(&config), PrintRenderer);
//! session.start();
//!
//! let emitter = session.emitter();
//! emitter.set_input(sumador_mvu::Slot::First, "10");
//! emitter.set_input(sumador_mvu::Slot::Second, "abc");
//! emitter.compute();
//! session.process_events();
//!
//! assert_eq!(session.model().result(), "$10.00");
//! assert_eq!(session.model().history().last().unwrap().as_str(), "10.0 + 0.0 = $10.00");
//! ```

// Module declarations
mod config;
mod currency;
mod emitter;
mod error;
mod event;
mod labels;
mod logic;
mod model;
pub mod props;
mod renderer;
mod session;

// Public re-exports
pub use config::SumadorConfig;
pub use currency::{CurrencyFormat, CurrencyFormatter, Locale, SymbolPosition, MAX_FRACTION_DIGITS};
pub use emitter::Emitter;
pub use error::ConfigError;
pub use event::SumadorEvent;
pub use labels::{LabelId, LabelOverrides, Labels};
pub use logic::SumadorLogic;
pub use model::{parse_operand, HistoryEntry, HistoryLog, ScreenState, Slot, SumadorModel};
pub use props::SumadorProps;
pub use renderer::Renderer;
pub use session::SumadorSession;

// Test utilities (only available with 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use renderer::TestRenderer;
#[cfg(any(test, feature = "testing"))]
pub use session::{TestDriver, TestSession};
