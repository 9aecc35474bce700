//! A library for tracking live progress of timer items
//!
//! This library turns an item snapshot plus an evaluation instant into
//! a status, a progress percentage and human-readable duration text.
//! The engine is pure and stateless: consumers feed it a fresh "now"
//! on every tick (see [`Ticker`]) and render whatever comes back. It
//! never touches storage, rendering or input handling.
pub(crate) mod duration;
pub(crate) mod error;
pub(crate) mod format;
pub(crate) mod item;
pub(crate) mod progress;
pub(crate) mod ticker;

pub use duration::*;
pub use error::*;
pub use format::*;
pub use item::*;
pub use progress::*;
pub use ticker::*;
