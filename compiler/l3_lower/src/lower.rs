//! L31 → L3 lowering.
//!
//! Every node is rebuilt structurally by the default [`Folder`] walks; the
//! lowerer only intercepts class expressions, lowers their method bodies
//! first, and then swaps the class for its closure encoding
//! ([`class_to_proc`]). Literals, primitives and variable references come
//! through unchanged, and parameter lists are never touched.

use l3_diagnostic::{Phase, Result, TranslateError};
use l3_ir::fold::{walk_cexp, walk_class};
use l3_ir::{
    ensure_sufficient_stack, Binding, CExp, ClassExp, Exp, Folder, Node, Program,
    DEFAULT_MAX_DEPTH,
};

use crate::class::class_to_proc;

/// Lowering configuration.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct LowerOptions {
    /// Maximum expression nesting before lowering fails with E1001.
    pub max_depth: usize,
}

impl Default for LowerOptions {
    fn default() -> Self {
        LowerOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Lower a program or a single top-level expression with default options.
pub fn lower(node: &Node) -> Result<Node> {
    lower_with(node, &LowerOptions::default())
}

/// Lower a program or a single top-level expression.
///
/// A program lowers every top-level expression in order and stops at the
/// first failure. The result contains no class expressions.
#[tracing::instrument(level = "debug", skip_all, fields(max_depth = options.max_depth))]
pub fn lower_with(node: &Node, options: &LowerOptions) -> Result<Node> {
    let result = Lowerer::new(options).fold_node(node);
    if let Err(err) = &result {
        tracing::debug!(code = %err.code(), %err, "lowering failed");
    }
    result
}

pub fn lower_program(program: &Program) -> Result<Program> {
    Lowerer::new(&LowerOptions::default()).fold_program(program)
}

/// Lower a top-level expression. Definitions keep their name.
pub fn lower_exp(exp: &Exp) -> Result<Exp> {
    Lowerer::new(&LowerOptions::default()).fold_exp(exp)
}

pub fn lower_cexp(cexp: &CExp) -> Result<CExp> {
    Lowerer::new(&LowerOptions::default()).fold_cexp(cexp)
}

/// Lower a binding's value. The bound name is kept.
pub fn lower_binding(binding: &Binding) -> Result<Binding> {
    Lowerer::new(&LowerOptions::default()).fold_binding(binding)
}

struct Lowerer {
    depth: usize,
    max_depth: usize,
}

impl Lowerer {
    fn new(options: &LowerOptions) -> Self {
        Lowerer {
            depth: 0,
            max_depth: options.max_depth,
        }
    }
}

impl Folder for Lowerer {
    type Error = TranslateError;

    fn fold_cexp(&mut self, cexp: &CExp) -> Result<CExp> {
        if self.depth >= self.max_depth {
            return Err(TranslateError::NestingTooDeep {
                phase: Phase::Lower,
                limit: self.max_depth,
            });
        }
        self.depth += 1;
        let result = ensure_sufficient_stack(|| walk_cexp(self, cexp));
        self.depth -= 1;
        result
    }

    fn fold_class(&mut self, class: &ClassExp) -> Result<CExp> {
        let lowered = walk_class(self, class)?;
        tracing::trace!(
            fields = lowered.fields.len(),
            methods = lowered.methods.len(),
            "class lowered to closure"
        );
        Ok(CExp::Proc(class_to_proc(lowered)))
    }
}
