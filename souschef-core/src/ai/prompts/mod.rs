//! Prompt templates.

pub mod suggest;
