//! L2 → Python-like source text.
//!
//! Each node renders to a single-line fragment built from its children's
//! fragments:
//!
//! | L2                   | Output                          |
//! |----------------------|---------------------------------|
//! | `(define x 5)`       | `x = 5`                         |
//! | `(if t c a)`         | `(c if t else a)`               |
//! | `(lambda (x y) b)`   | `(lambda x,y : b)`              |
//! | `(+ 1 2)`            | `(1 + 2)`                       |
//! | `(not #t)`           | `(not true)`                    |
//! | `(number? x)`        | `(lambda x : (type(x) == number))` |
//! | `(f a b)`            | `f(a,b)`                        |
//!
//! Numbers print the way JavaScript's `Number.prototype.toString` does
//! (`1e+21`, `Infinity`, `0` for negative zero). Strings are emitted raw,
//! without quotes or escaping. Quoted literals, `let` and `class` have no
//! rendering and fail.

use l3_diagnostic::{Phase, Result, TranslateError};
use l3_ir::{ensure_sufficient_stack, AppExp, CExp, Exp, Node, DEFAULT_MAX_DEPTH};

use crate::prim_op::{python_op, PrimShape};

/// Rendering configuration.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct RenderOptions {
    /// Maximum expression nesting before rendering fails with E2003.
    pub max_depth: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Render a program or a single top-level expression with default options.
pub fn render(node: &Node) -> Result<String> {
    render_with(node, &RenderOptions::default())
}

/// Render a program or a single top-level expression.
///
/// Programs render one fragment per top-level expression, joined by
/// newlines. The first failing expression fails the whole render.
#[tracing::instrument(level = "debug", skip_all, fields(max_depth = options.max_depth))]
pub fn render_with(node: &Node, options: &RenderOptions) -> Result<String> {
    let mut renderer = Renderer::new(options);
    let result = match node {
        Node::Program(program) => renderer.program(&program.exps),
        Node::Exp(exp) => renderer.exp(exp),
    };
    if let Err(err) = &result {
        tracing::debug!(code = %err.code(), %err, "rendering failed");
    }
    result
}

pub fn render_program(exps: &[Exp]) -> Result<String> {
    Renderer::new(&RenderOptions::default()).program(exps)
}

pub fn render_exp(exp: &Exp) -> Result<String> {
    Renderer::new(&RenderOptions::default()).exp(exp)
}

pub fn render_cexp(cexp: &CExp) -> Result<String> {
    Renderer::new(&RenderOptions::default()).cexp(cexp)
}

struct Renderer {
    depth: usize,
    max_depth: usize,
}

impl Renderer {
    fn new(options: &RenderOptions) -> Self {
        Renderer {
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    fn program(&mut self, exps: &[Exp]) -> Result<String> {
        let rendered = exps
            .iter()
            .map(|exp| self.exp(exp))
            .collect::<Result<Vec<_>>>()?;
        Ok(rendered.join("\n"))
    }

    fn exp(&mut self, exp: &Exp) -> Result<String> {
        match exp {
            Exp::Define(define) => {
                let val = self.cexp(&define.val)?;
                Ok(format!("{} = {val}", define.var.var))
            }
            Exp::CExp(cexp) => self.cexp(cexp),
        }
    }

    fn cexp(&mut self, cexp: &CExp) -> Result<String> {
        if self.depth >= self.max_depth {
            return Err(TranslateError::NestingTooDeep {
                phase: Phase::Render,
                limit: self.max_depth,
            });
        }
        self.depth += 1;
        let result = ensure_sufficient_stack(|| self.cexp_inner(cexp));
        self.depth -= 1;
        result
    }

    fn cexp_inner(&mut self, cexp: &CExp) -> Result<String> {
        match cexp {
            CExp::Bool(b) => Ok(if *b { "true" } else { "false" }.to_string()),
            CExp::Num(n) => Ok(format_number(*n)),
            CExp::PrimOp(prim) => Ok(python_op(&prim.op).to_string()),
            CExp::VarRef(var) => Ok(var.var.clone()),
            CExp::Str(s) => Ok(s.clone()),
            CExp::If(if_exp) => {
                let test = self.cexp(&if_exp.test)?;
                let then = self.cexp(&if_exp.then)?;
                let alt = self.cexp(&if_exp.alt)?;
                Ok(format!("({then} if {test} else {alt})"))
            }
            CExp::Proc(proc_exp) => {
                let body = self.all(&proc_exp.body)?;
                let params = proc_exp
                    .args
                    .iter()
                    .map(|arg| arg.var.as_str())
                    .collect::<Vec<_>>()
                    .join(",");
                Ok(format!("(lambda {params} : {})", body.join(" ")))
            }
            CExp::App(app) => self.app(app),
            CExp::Lit(_) | CExp::Let(_) | CExp::Class(_) => {
                tracing::trace!(construct = cexp.kind_name(), "no L2 rendering");
                Err(TranslateError::unsupported(cexp.kind_name(), cexp))
            }
        }
    }

    fn app(&mut self, app: &AppExp) -> Result<String> {
        let CExp::PrimOp(prim) = app.rator.as_ref() else {
            let rator = self.cexp(&app.rator)?;
            let rands = self.all(&app.rands)?;
            return Ok(format!("{rator}({})", rands.join(",")));
        };

        let rands = self.all(&app.rands)?;
        let op = python_op(&prim.op);
        match PrimShape::of(&prim.op) {
            PrimShape::Negation => {
                let arg = first_operand(&rands, &prim.op)?;
                Ok(format!("(not {arg})"))
            }
            // The rendered operand doubles as the lambda's parameter.
            PrimShape::TypePredicate => {
                let arg = first_operand(&rands, &prim.op)?;
                Ok(format!("(lambda {arg} : (type({arg}) {op}))"))
            }
            PrimShape::Infix => Ok(format!("({})", rands.join(&format!(" {op} ")))),
        }
    }

    fn all(&mut self, exps: &[CExp]) -> Result<Vec<String>> {
        exps.iter().map(|exp| self.cexp(exp)).collect()
    }
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    if (1e-6..1e21).contains(&n.abs()) {
        return n.to_string();
    }
    // Shortest round-trip digits in exponent form; positive exponents are signed.
    let text = format!("{n:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

fn first_operand<'a>(rands: &'a [String], op: &str) -> Result<&'a str> {
    rands
        .first()
        .map(String::as_str)
        .ok_or_else(|| TranslateError::MissingOperand { op: op.to_string() })
}

#[cfg(test)]
mod tests;
