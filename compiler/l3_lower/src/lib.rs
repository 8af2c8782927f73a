//! Class-to-closure lowering for the L31 dialect.
//!
//! Transforms an L31 tree into an L3 tree. L31 is L3 plus `class`; lowering
//! rewrites every class expression into a closure that dispatches on a
//! message symbol and leaves every other construct structurally unchanged.
//!
//! # Pipeline Position
//!
//! ```text
//! external parser → **Lower (L31 → L3)** → L3 interpreter / compiler
//! ```
//!
//! # Modules
//!
//! - `class`: the message-dispatch encoding of a single class expression
//! - `lower`: the dispatcher over the whole tree, with nesting limits

mod class;
mod lower;

pub use class::{build_dispatch, class_to_proc, DISPATCH_EQ, MSG_PARAM};
pub use lower::{
    lower, lower_binding, lower_cexp, lower_exp, lower_program, lower_with, LowerOptions,
};
