//! # Prism Rules
//!
//! The static side of the Prism lab: the seven value foundations, the
//! keyword vocabulary that triggers them, and the catalog of topic domains.
//! This crate holds data only and does not contain any scoring logic.

pub mod config;
pub mod domains;
mod error;
pub mod foundations;
pub mod keywords;

pub use config::*;
pub use domains::*;
pub use error::*;
pub use foundations::*;
pub use keywords::*;
