//! Diagnostics for the L3 translators.
//!
//! Both translators report failures through one type, [`TranslateError`]:
//! - Error codes for searchability ([`ErrorCode`])
//! - A human-readable message (the `Display` impl)
//!
//! There is no accumulation. A translation either succeeds or carries the
//! first failure found in its fixed traversal order.

mod error;
mod error_code;

pub use error::{Phase, Result, TranslateError};
pub use error_code::ErrorCode;
