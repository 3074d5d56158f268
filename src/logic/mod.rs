//! Logic modules — turn inspected facts into build options.
//!
//! # Modules
//!
//! - `rules` — The ordered predicate → field table
//! - `selector` — Rule evaluation, overrides and the analyze-then-recommend flow

pub mod rules;
pub mod selector;
