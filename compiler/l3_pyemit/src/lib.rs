//! L2 to Python-like source rendering.
//!
//! Translates an L2 tree straight into target-language text, rewriting
//! syntax (`if` becomes a conditional expression, `lambda` an anonymous
//! function literal, primitive applications infix operators) and primitive
//! names (`eq?` becomes `==`, `and` becomes `&&`, ...).
//!
//! # Modules
//!
//! - `prim_op`: the operator rewrite table and application shapes
//! - `render`: the recursive renderer
//!
//! # Limitations
//!
//! Output is not guaranteed to be valid target source. Strings are emitted
//! without quoting, and type predicates render as a lambda whose parameter is
//! the rendered operand text.

mod prim_op;
mod render;

pub use prim_op::{python_op, PrimShape};
pub use render::{render, render_cexp, render_exp, render_program, render_with, RenderOptions};
