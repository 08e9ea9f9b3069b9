//! High-level operations.
//!
//! This module contains the amalgamation pipeline and its stages.

pub mod amalgamate;
pub mod discover;
pub mod emit;
pub mod rewrite;

pub use amalgamate::{check, generate, plan, render, AmalgamPlan, Amalgamation, CheckOutcome};
pub use discover::discover_headers;
pub use emit::{emit, EmitStats, Emitter};
pub use rewrite::IncludeRewriter;
