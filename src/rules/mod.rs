//! Move validation and application.
//!
//! The rules live as methods on [`crate::core::GameState`]
//! (`validate`, `apply`, `legal_actions`); this module holds their
//! implementation and the [`RuleError`] vocabulary.

pub mod engine;
pub mod error;

pub use error::RuleError;
