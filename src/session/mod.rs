//! Session module: state, event handling and the event loop.
//!
//! # Architecture
//!
//! ```text
//! platform callbacks / user input
//!        │  SessionEvent (mpsc)
//!        ▼
//! Session::run()  ← single consumer, one event at a time
//!        │
//!        ├─ update(&mut AppState, event) → Vec<Effect>
//!        │     └─ final recognition text → command::execute
//!        │           ├─ handled     → state change / speak / cancel
//!        │           └─ not handled → append to transcript
//!        │
//!        └─ apply effects → Synthesizer / Recognizer / status channel
//! ```

pub mod runner;
pub mod state;
pub mod update;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use runner::Session;
pub use state::{AppState, RecognitionState};
pub use update::{speak_effects, update, Effect, SessionEvent, UNSUPPORTED_RECOGNITION};
