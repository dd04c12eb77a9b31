//! State shared between wizards and across invocations: the step-keyed
//! hand-off store and the authentication gate.

mod auth;
mod handoff;

pub use auth::{Access, AccessGate, MemoryTokenStore, Route, TokenStore};
pub use handoff::{QUICK_ESTIMATE_STEP, SessionStore, StepData, StepPayload};
