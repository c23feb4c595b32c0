//! ESP Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert nur Traits und Pure Functions.

#![no_std]

pub mod controller;
pub mod logic;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use controller::{LedController, dispatch};
pub use logic::LineReader;
pub use traits::LedPin;
pub use types::{Command, LedState, PinLevel, Reply};
