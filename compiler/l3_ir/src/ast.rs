//! AST node types.
//!
//! One tree shape serves the whole dialect family:
//! - **L2**: literals, variables, primitives, `if`, `lambda`, application, `define`
//! - **L3**: L2 plus quoted literals and `let`
//! - **L31**: L3 plus `class`
//!
//! Nodes are plain owned values. Translators take them by reference and build
//! new trees; nothing is mutated in place.

use crate::value::SExpValue;

/// A program or a single top-level expression.
///
/// This is what the translators accept at their outermost entry point.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    Program(Program),
    Exp(Exp),
}

/// An ordered sequence of top-level expressions.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Program {
    pub exps: Vec<Exp>,
}

impl Program {
    pub fn new(exps: Vec<Exp>) -> Self {
        Program { exps }
    }
}

/// A top-level expression: a definition or a computable expression.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Exp {
    Define(DefineExp),
    CExp(CExp),
}

impl Exp {
    /// `(define var val)`
    pub fn define(var: impl Into<String>, val: CExp) -> Self {
        Exp::Define(DefineExp {
            var: VarDecl::new(var),
            val,
        })
    }
}

impl From<CExp> for Exp {
    fn from(cexp: CExp) -> Self {
        Exp::CExp(cexp)
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefineExp {
    pub var: VarDecl,
    pub val: CExp,
}

/// A computable expression.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CExp {
    Num(f64),
    Bool(bool),
    Str(String),
    /// Quoted literal: `'sym`, `'(1 2)`.
    Lit(SExpValue),
    PrimOp(PrimOp),
    VarRef(VarRef),
    If(Box<IfExp>),
    Proc(ProcExp),
    App(AppExp),
    Let(LetExp),
    /// L31 only. Never present after lowering.
    Class(ClassExp),
}

impl CExp {
    pub fn string(val: impl Into<String>) -> Self {
        CExp::Str(val.into())
    }

    pub fn prim_op(op: impl Into<String>) -> Self {
        CExp::PrimOp(PrimOp::new(op))
    }

    pub fn var_ref(var: impl Into<String>) -> Self {
        CExp::VarRef(VarRef::new(var))
    }

    /// `'sym`
    pub fn symbol(name: impl Into<String>) -> Self {
        CExp::Lit(SExpValue::Symbol(name.into()))
    }

    pub fn if_exp(test: CExp, then: CExp, alt: CExp) -> Self {
        CExp::If(Box::new(IfExp { test, then, alt }))
    }

    pub fn proc_exp(args: Vec<VarDecl>, body: Vec<CExp>) -> Self {
        CExp::Proc(ProcExp { args, body })
    }

    pub fn app(rator: CExp, rands: Vec<CExp>) -> Self {
        CExp::App(AppExp {
            rator: Box::new(rator),
            rands,
        })
    }

    pub fn let_exp(bindings: Vec<Binding>, body: Vec<CExp>) -> Self {
        CExp::Let(LetExp { bindings, body })
    }

    pub fn class_exp(fields: Vec<VarDecl>, methods: Vec<Binding>) -> Self {
        CExp::Class(ClassExp { fields, methods })
    }

    /// Short construct name used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            CExp::Num(_) => "number",
            CExp::Bool(_) => "boolean",
            CExp::Str(_) => "string",
            CExp::Lit(_) => "quoted literal",
            CExp::PrimOp(_) => "primitive operator",
            CExp::VarRef(_) => "variable reference",
            CExp::If(_) => "if expression",
            CExp::Proc(_) => "lambda expression",
            CExp::App(_) => "application",
            CExp::Let(_) => "let expression",
            CExp::Class(_) => "class expression",
        }
    }
}

/// A built-in operator, referenced by name (`+`, `eq?`, `not`, ...).
///
/// Names are not validated against any registry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrimOp {
    pub op: String,
}

impl PrimOp {
    pub fn new(op: impl Into<String>) -> Self {
        PrimOp { op: op.into() }
    }
}

/// Declaration of a parameter or bound name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VarDecl {
    pub var: String,
}

impl VarDecl {
    pub fn new(var: impl Into<String>) -> Self {
        VarDecl { var: var.into() }
    }
}

/// Reference to a declared name. Resolution is not checked here.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VarRef {
    pub var: String,
}

impl VarRef {
    pub fn new(var: impl Into<String>) -> Self {
        VarRef { var: var.into() }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IfExp {
    pub test: CExp,
    pub then: CExp,
    pub alt: CExp,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProcExp {
    pub args: Vec<VarDecl>,
    pub body: Vec<CExp>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AppExp {
    pub rator: Box<CExp>,
    pub rands: Vec<CExp>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LetExp {
    pub bindings: Vec<Binding>,
    pub body: Vec<CExp>,
}

/// `(class (field ...) ((method body) ...))`
///
/// Each method body is expected to evaluate to a zero-argument procedure.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassExp {
    pub fields: Vec<VarDecl>,
    pub methods: Vec<Binding>,
}

/// A `(name value)` pair, used by `let` and by class methods.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Binding {
    pub var: VarDecl,
    pub val: CExp,
}

impl Binding {
    pub fn new(var: impl Into<String>, val: CExp) -> Self {
        Binding {
            var: VarDecl::new(var),
            val,
        }
    }
}

/// Build a parameter list from names.
pub fn var_decls<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Vec<VarDecl> {
    names.into_iter().map(VarDecl::new).collect()
}
