//! L3 IR - AST Types for the L3 Dialect Family
//!
//! This crate holds the tree shared by every translator in the workspace:
//! - AST nodes (`Node`, `Program`, `Exp`, `CExp`, `Binding`, ...)
//! - Quoted literal values (`SExpValue`)
//! - A fallible rebuilding traversal (`fold::Folder`)
//! - Scheme concrete syntax via `Display` (`unparse`)
//! - Stack growth for deep recursion (`stack`)
//!
//! # Dialects
//!
//! ```text
//! L2  ⊂  L3  ⊂  L31
//! ```
//!
//! L31 adds class expressions on top of L3; L2 drops quoted literals and
//! `let`. The tree type is shared, and each translator rejects or rewrites
//! the variants its target dialect does not have.
//!
//! # Serde
//!
//! With the `serde` feature every node derives `Serialize` and
//! `Deserialize`. External parsers hand trees to the driver in that encoding.

pub mod ast;
pub mod fold;
pub mod stack;
mod unparse;
mod value;

pub use ast::{
    var_decls, AppExp, Binding, CExp, ClassExp, DefineExp, Exp, IfExp, LetExp, Node, PrimOp,
    ProcExp, Program, VarDecl, VarRef,
};
pub use fold::Folder;
pub use stack::ensure_sufficient_stack;
pub use value::SExpValue;

/// Default bound on expression nesting for the translators.
///
/// Translation recurses once per nesting level on a stack grown on demand
/// ([`ensure_sufficient_stack`]). Trees deeper than this are rejected.
pub const DEFAULT_MAX_DEPTH: usize = 1000;
