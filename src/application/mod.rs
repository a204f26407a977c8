//! Application layer managing state and screen transitions.
//!
//! This module coordinates between the domain layer and presentation layer,
//! managing form state, focus movement, and navigation to the details screen.

pub mod state;

pub use state::*;
