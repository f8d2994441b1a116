//! Multi-step signup wizard.
//!
//! The wizard is a reducer over `SignupState`: every user input is a
//! `SignupAction`, and `reduce` returns the next state without side effects.
//! `SignupFlow` wraps the reducer for one traversal and owns the terminal
//! `submit`, which hands the finished draft to an `AccountService`.
//!
//! - `step`: the ordered step enumeration and its transitions
//! - `draft`: the collected form data and code sanitization
//! - `validation`: per-step readiness predicates and hints
//! - `flow`: reducer, controller and submission
//! - `metrics`: funnel counters

mod draft;
mod flow;
mod metrics;
mod step;
mod validation;

pub use draft::{sanitize_verification_code, SignupDraft, VERIFICATION_CODE_LEN};
pub use flow::{reduce, SignupAction, SignupError, SignupFlow, SignupState};
pub use metrics::{FunnelMetrics, FunnelReport, StepCount};
pub use step::Step;
pub use validation::{
    blocking_reason, can_proceed, inline_hint, is_educational_email, password_mismatch, StepHint,
    EDUCATIONAL_SUFFIXES, MIN_PASSWORD_LEN,
};
