//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate lifecycle and formatting concerns from page and
//! component logic to improve reuse and testability.

pub mod alive;
pub mod money;
