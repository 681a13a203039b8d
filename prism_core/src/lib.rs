//! # Prism Core
//!
//! Scores how an argument is framed in terms of moral foundations, imagines
//! how a counterpart weighs the same foundations, and suggests bridges
//! between the two. Static vocabulary and topic data come from
//! `prism_rules`.
//!
//! ## Core Components
//!
//! - **scorer**: Pure pipeline from text to normalized profiles
//! - **bridges**: Reframing suggestions per domain
//! - **events**: UI events the lab reacts to
//! - **lab**: Stateful adapter with debounced recomputation and a renderer seam
//! - **config**: Lab settings loaded from TOML
//!
//! ## Design Philosophy
//!
//! - **Pure scoring**: The same text and domain always produce the same result
//! - **Infallible analysis**: Blank text and unknown topics fall back to defaults
//! - **Data out**: The crate produces views; drawing them is someone else's job

pub mod bridges;
pub mod config;
pub mod events;
pub mod lab;
pub mod scorer;

pub use bridges::*;
pub use config::*;
pub use events::*;
pub use lab::*;
pub use scorer::*;
