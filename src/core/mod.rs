//! Shared plumbing: constants, dice, errors, events, and the session.

pub mod constants;
pub mod dice;
pub mod errors;
pub mod events;
pub mod session;

pub use dice::Dice;
pub use errors::EngineError;
pub use events::{Event, EventCategory, EventLog};
pub use session::GameSession;
