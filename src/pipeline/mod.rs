//! Summarization pipeline
//!
//! - [`runner`]: stage execution with observer hooks and tracing spans
//! - [`observer`]: stage boundary callbacks and timing
//! - [`spec`]: JSON summarizer specifications
//! - [`validation`]: rule-based spec validation
//! - [`errors`]: structured spec diagnostics

pub mod errors;
pub mod observer;
pub mod runner;
pub mod spec;
pub mod validation;
