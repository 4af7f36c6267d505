//! Boundary to the external text-generation service
//!
//! Everything network-related lives behind [`AdvisorClient`]. Failures never
//! escape as errors: every public call resolves to text, falling back to a
//! fixed offline/error string so the layout and render paths stay untouched.

mod client;
mod context;
mod prompts;

pub use client::{
    AdvisorClient, ChatRole, ChatTurn, OFFLINE_FALLBACK, SCRIPT_ERROR_FALLBACK, strip_code_fences,
};
pub use context::build_context;
