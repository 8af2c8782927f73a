//! Fallible AST folding.
//!
//! A `Folder` rebuilds a tree node by node. Default methods call the
//! `walk_*` functions, which fold every child in source order and rebuild
//! the parent from the results. Override a `fold_*` method to rewrite a
//! particular node kind; call the matching `walk_*` from the override to keep
//! descending.
//!
//! Failure is first-wins: the first child whose fold returns `Err` stops the
//! walk, and siblings after it are never visited.
//!
//! # Example
//!
//! ```text
//! struct RenameVars;
//!
//! impl Folder for RenameVars {
//!     type Error = Infallible;
//!
//!     fn fold_cexp(&mut self, cexp: &CExp) -> Result<CExp, Infallible> {
//!         match cexp {
//!             CExp::VarRef(v) => Ok(CExp::var_ref(format!("{}_", v.var))),
//!             _ => walk_cexp(self, cexp),
//!         }
//!     }
//! }
//! ```

use crate::ast::{
    AppExp, Binding, CExp, ClassExp, DefineExp, Exp, IfExp, LetExp, Node, ProcExp, Program,
};

/// Fallible tree-to-tree rewriter.
pub trait Folder {
    type Error;

    fn fold_node(&mut self, node: &Node) -> Result<Node, Self::Error> {
        walk_node(self, node)
    }

    fn fold_program(&mut self, program: &Program) -> Result<Program, Self::Error> {
        walk_program(self, program)
    }

    fn fold_exp(&mut self, exp: &Exp) -> Result<Exp, Self::Error> {
        walk_exp(self, exp)
    }

    fn fold_cexp(&mut self, cexp: &CExp) -> Result<CExp, Self::Error> {
        walk_cexp(self, cexp)
    }

    fn fold_binding(&mut self, binding: &Binding) -> Result<Binding, Self::Error> {
        walk_binding(self, binding)
    }

    /// Fold a class expression.
    ///
    /// Returns a `CExp` rather than a `ClassExp` so that implementors can
    /// replace the class with a different construct.
    fn fold_class(&mut self, class: &ClassExp) -> Result<CExp, Self::Error> {
        walk_class(self, class).map(CExp::Class)
    }
}

pub fn walk_node<F: Folder + ?Sized>(folder: &mut F, node: &Node) -> Result<Node, F::Error> {
    match node {
        Node::Program(program) => folder.fold_program(program).map(Node::Program),
        Node::Exp(exp) => folder.fold_exp(exp).map(Node::Exp),
    }
}

pub fn walk_program<F: Folder + ?Sized>(
    folder: &mut F,
    program: &Program,
) -> Result<Program, F::Error> {
    let exps = program
        .exps
        .iter()
        .map(|exp| folder.fold_exp(exp))
        .collect::<Result<_, _>>()?;
    Ok(Program { exps })
}

pub fn walk_exp<F: Folder + ?Sized>(folder: &mut F, exp: &Exp) -> Result<Exp, F::Error> {
    match exp {
        Exp::Define(define) => {
            let val = folder.fold_cexp(&define.val)?;
            Ok(Exp::Define(DefineExp {
                var: define.var.clone(),
                val,
            }))
        }
        Exp::CExp(cexp) => folder.fold_cexp(cexp).map(Exp::CExp),
    }
}

pub fn walk_cexp<F: Folder + ?Sized>(folder: &mut F, cexp: &CExp) -> Result<CExp, F::Error> {
    match cexp {
        CExp::Num(_)
        | CExp::Bool(_)
        | CExp::Str(_)
        | CExp::Lit(_)
        | CExp::PrimOp(_)
        | CExp::VarRef(_) => Ok(cexp.clone()),
        CExp::If(if_exp) => {
            let test = folder.fold_cexp(&if_exp.test)?;
            let then = folder.fold_cexp(&if_exp.then)?;
            let alt = folder.fold_cexp(&if_exp.alt)?;
            Ok(CExp::If(Box::new(IfExp { test, then, alt })))
        }
        CExp::Proc(proc_exp) => {
            let body = fold_all(folder, &proc_exp.body)?;
            Ok(CExp::Proc(ProcExp {
                args: proc_exp.args.clone(),
                body,
            }))
        }
        CExp::App(app) => {
            let rator = folder.fold_cexp(&app.rator)?;
            let rands = fold_all(folder, &app.rands)?;
            Ok(CExp::App(AppExp {
                rator: Box::new(rator),
                rands,
            }))
        }
        CExp::Let(let_exp) => {
            let bindings = walk_bindings(folder, &let_exp.bindings)?;
            let body = fold_all(folder, &let_exp.body)?;
            Ok(CExp::Let(LetExp { bindings, body }))
        }
        CExp::Class(class) => folder.fold_class(class),
    }
}

pub fn walk_binding<F: Folder + ?Sized>(
    folder: &mut F,
    binding: &Binding,
) -> Result<Binding, F::Error> {
    let val = folder.fold_cexp(&binding.val)?;
    Ok(Binding {
        var: binding.var.clone(),
        val,
    })
}

/// Fold the method values of a class, keeping fields and method names.
pub fn walk_class<F: Folder + ?Sized>(
    folder: &mut F,
    class: &ClassExp,
) -> Result<ClassExp, F::Error> {
    let methods = walk_bindings(folder, &class.methods)?;
    Ok(ClassExp {
        fields: class.fields.clone(),
        methods,
    })
}

fn walk_bindings<F: Folder + ?Sized>(
    folder: &mut F,
    bindings: &[Binding],
) -> Result<Vec<Binding>, F::Error> {
    bindings
        .iter()
        .map(|binding| folder.fold_binding(binding))
        .collect()
}

/// Fold a sequence of expressions in order, stopping at the first failure.
pub fn fold_all<F: Folder + ?Sized>(folder: &mut F, exps: &[CExp]) -> Result<Vec<CExp>, F::Error> {
    exps.iter().map(|exp| folder.fold_cexp(exp)).collect()
}
