//! Class expressions → closures.
//!
//! ```text
//! (class (f1 .. fn) ((m1 b1) .. (mk bk)))
//!
//! ⇒ (lambda (f1 .. fn)
//!      (lambda (msg)
//!        (if (eq? msg 'm1) (b1)
//!          ..
//!            (if (eq? msg 'mk) (bk) #f))))
//! ```
//!
//! Calling the outer procedure with field values yields an instance; calling
//! the instance with a method symbol runs that method's zero-argument body.
//! Methods are tried in declaration order and an unknown message yields `#f`.

use l3_ir::{Binding, CExp, ClassExp, ProcExp, VarDecl, VarRef};

/// Parameter of the generated instance procedure.
pub const MSG_PARAM: &str = "msg";

/// Primitive used to compare the message against each method name.
pub const DISPATCH_EQ: &str = "eq?";

/// Rewrite a class expression into its closure encoding.
///
/// The result always takes exactly the class's fields as parameters. A class
/// with no methods becomes a procedure with an empty body.
pub fn class_to_proc(class: ClassExp) -> ProcExp {
    let ClassExp { fields, methods } = class;
    if methods.is_empty() {
        return ProcExp {
            args: fields,
            body: Vec::new(),
        };
    }

    let msg = VarRef::new(MSG_PARAM);
    let instance = CExp::proc_exp(
        vec![VarDecl::new(MSG_PARAM)],
        vec![build_dispatch(methods, &msg)],
    );
    ProcExp {
        args: fields,
        body: vec![instance],
    }
}

/// Build the conditional chain that matches `msg` against each method name.
///
/// An empty method list yields the constant `#f`.
pub fn build_dispatch(methods: Vec<Binding>, msg: &VarRef) -> CExp {
    methods
        .into_iter()
        .rev()
        .fold(CExp::Bool(false), |alt, Binding { var, val }| {
            let test = CExp::app(
                CExp::prim_op(DISPATCH_EQ),
                vec![CExp::VarRef(msg.clone()), CExp::symbol(var.var)],
            );
            let then = CExp::app(val, Vec::new());
            CExp::if_exp(test, then, alt)
        })
}
