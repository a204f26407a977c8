//! TPROF - Terminal Profile Setup Library
//!
//! A terminal-based profile setup form with a read-only details screen, built in Rust.

pub mod domain;
pub mod application;
pub mod presentation;

pub use domain::*;
pub use application::*;
