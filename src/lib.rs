//! Voice Characterizer: character-styled speech synthesis driven by voice
//! commands.
//!
//! * [`character`]: the built-in character presets.
//! * [`voice`]: voice descriptors, inventory, voice selection and rate/pitch
//!   composition.
//! * [`command`]: the spoken command grammar and interpreter.
//! * [`session`]: session state, the event update function and the event
//!   loop.
//! * [`speech`]: traits and types at the boundary to the speech platform.
//! * [`config`]: TOML settings and application paths.

pub mod character;
pub mod command;
pub mod config;
pub mod session;
pub mod speech;
pub mod voice;
