//! Scheme concrete syntax for AST nodes.
//!
//! `Display` on any node prints it the way a reader would write it:
//! `(define x 5)`, `(lambda (x) (+ x 1))`, `'sym`. Programs print one
//! top-level form per line.

use std::fmt;

use crate::ast::{Binding, CExp, Exp, Node, Program, VarDecl};
use crate::stack::ensure_sufficient_stack;

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Program(program) => program.fmt(f),
            Node::Exp(exp) => exp.fmt(f),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, exp) in self.exps.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            exp.fmt(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Exp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exp::Define(define) => write!(f, "(define {} {})", define.var.var, define.val),
            Exp::CExp(cexp) => cexp.fmt(f),
        }
    }
}

impl fmt::Display for CExp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| write_cexp(f, self))
    }
}

fn write_cexp(f: &mut fmt::Formatter<'_>, cexp: &CExp) -> fmt::Result {
    match cexp {
        CExp::Num(n) => write!(f, "{n}"),
        CExp::Bool(true) => f.write_str("#t"),
        CExp::Bool(false) => f.write_str("#f"),
        CExp::Str(s) => write!(f, "\"{s}\""),
        CExp::Lit(value) => write!(f, "'{value}"),
        CExp::PrimOp(prim) => f.write_str(&prim.op),
        CExp::VarRef(var) => f.write_str(&var.var),
        CExp::If(if_exp) => write!(f, "(if {} {} {})", if_exp.test, if_exp.then, if_exp.alt),
        CExp::Proc(proc_exp) => {
            f.write_str("(lambda ")?;
            write_params(f, &proc_exp.args)?;
            write_seq(f, &proc_exp.body)?;
            f.write_str(")")
        }
        CExp::App(app) => {
            write!(f, "({}", app.rator)?;
            write_seq(f, &app.rands)?;
            f.write_str(")")
        }
        CExp::Let(let_exp) => {
            f.write_str("(let ")?;
            write_bindings(f, &let_exp.bindings)?;
            write_seq(f, &let_exp.body)?;
            f.write_str(")")
        }
        CExp::Class(class) => {
            f.write_str("(class ")?;
            write_params(f, &class.fields)?;
            f.write_str(" ")?;
            write_bindings(f, &class.methods)?;
            f.write_str(")")
        }
    }
}

fn write_params(f: &mut fmt::Formatter<'_>, params: &[VarDecl]) -> fmt::Result {
    f.write_str("(")?;
    for (i, param) in params.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        f.write_str(&param.var)?;
    }
    f.write_str(")")
}

fn write_bindings(f: &mut fmt::Formatter<'_>, bindings: &[Binding]) -> fmt::Result {
    f.write_str("(")?;
    for (i, binding) in bindings.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "({} {})", binding.var.var, binding.val)?;
    }
    f.write_str(")")
}

/// Each expression preceded by a space.
fn write_seq(f: &mut fmt::Formatter<'_>, exps: &[CExp]) -> fmt::Result {
    for exp in exps {
        write!(f, " {exp}")?;
    }
    Ok(())
}
