use super::*;
use l3_diagnostic::ErrorCode;
use l3_ir::{var_decls, Binding, Program, SExpValue};
use pretty_assertions::assert_eq;

fn prim_app(op: &str, rands: Vec<CExp>) -> CExp {
    CExp::app(CExp::prim_op(op), rands)
}

fn render_ok(cexp: &CExp) -> String {
    render_cexp(cexp).unwrap()
}

#[test]
fn atoms() {
    assert_eq!(render_ok(&CExp::Bool(true)), "true");
    assert_eq!(render_ok(&CExp::Bool(false)), "false");
    assert_eq!(render_ok(&CExp::Num(5.0)), "5");
    assert_eq!(render_ok(&CExp::Num(2.5)), "2.5");
    assert_eq!(render_ok(&CExp::Num(-3.0)), "-3");
    assert_eq!(render_ok(&CExp::Num(0.000_001)), "0.000001");
    assert_eq!(render_ok(&CExp::var_ref("x")), "x");
    assert_eq!(render_ok(&CExp::prim_op("eq?")), "==");
    assert_eq!(render_ok(&CExp::prim_op("+")), "+");
}

#[test]
fn strings_are_emitted_raw() {
    assert_eq!(render_ok(&CExp::string("hello")), "hello");
    assert_eq!(render_ok(&CExp::string("say \"hi\"")), "say \"hi\"");
}

#[test]
fn define() {
    let exp = Exp::define("x", CExp::Num(5.0));
    assert_eq!(render_exp(&exp), Ok("x = 5".to_string()));
}

#[test]
fn arithmetic_is_infix() {
    let exp = prim_app("+", vec![CExp::Num(1.0), CExp::Num(2.0)]);
    assert_eq!(render_ok(&exp), "(1 + 2)");

    let exp = prim_app(
        "*",
        vec![CExp::Num(1.0), CExp::var_ref("y"), CExp::Num(3.0)],
    );
    assert_eq!(render_ok(&exp), "(1 * y * 3)");
}

#[test]
fn comparison_and_logic_use_mapped_tokens() {
    let cases = [
        ("eq?", "(x == y)"),
        ("=", "(x == y)"),
        ("and", "(x && y)"),
        ("or", "(x || y)"),
        (">", "(x > y)"),
        ("<", "(x < y)"),
    ];
    for (op, expected) in cases {
        let exp = prim_app(op, vec![CExp::var_ref("x"), CExp::var_ref("y")]);
        assert_eq!(render_ok(&exp), expected, "operator {op}");
    }
}

#[test]
fn negation() {
    let exp = prim_app("not", vec![CExp::Bool(true)]);
    assert_eq!(render_ok(&exp), "(not true)");
}

#[test]
fn negation_without_operand_fails() {
    let exp = prim_app("not", vec![]);
    let err = render_cexp(&exp).unwrap_err();
    assert_eq!(err, TranslateError::MissingOperand { op: "not".into() });
    assert_eq!(err.code(), ErrorCode::E2002);
}

#[test]
fn type_predicates_render_as_lambdas() {
    let exp = prim_app("number?", vec![CExp::var_ref("x")]);
    assert_eq!(render_ok(&exp), "(lambda x : (type(x) == number))");

    let exp = prim_app("boolean?", vec![CExp::var_ref("b")]);
    assert_eq!(render_ok(&exp), "(lambda b : (type(b) == bool))");
}

#[test]
fn type_predicate_reuses_rendered_operand_text() {
    let exp = prim_app(
        "number?",
        vec![prim_app("+", vec![CExp::Num(1.0), CExp::Num(2.0)])],
    );
    assert_eq!(
        render_ok(&exp),
        "(lambda (1 + 2) : (type((1 + 2)) == number))"
    );
}

#[test]
fn non_primitive_operator_uses_call_syntax() {
    let exp = CExp::app(CExp::var_ref("f"), vec![CExp::Num(1.0), CExp::var_ref("y")]);
    assert_eq!(render_ok(&exp), "f(1,y)");

    let exp = CExp::app(CExp::var_ref("thunk"), vec![]);
    assert_eq!(render_ok(&exp), "thunk()");

    let lambda = CExp::proc_exp(var_decls(["x"]), vec![CExp::var_ref("x")]);
    let exp = CExp::app(lambda, vec![CExp::Num(4.0)]);
    assert_eq!(render_ok(&exp), "(lambda x : x)(4)");
}

#[test]
fn conditional_puts_test_in_the_middle() {
    let exp = CExp::if_exp(
        prim_app(">", vec![CExp::var_ref("x"), CExp::Num(0.0)]),
        CExp::var_ref("x"),
        prim_app("-", vec![CExp::Num(0.0), CExp::var_ref("x")]),
    );
    assert_eq!(render_ok(&exp), "(x if (x > 0) else (0 - x))");
}

#[test]
fn lambda_joins_params_with_commas_and_body_with_spaces() {
    let exp = CExp::proc_exp(
        var_decls(["x", "y"]),
        vec![prim_app("+", vec![CExp::var_ref("x"), CExp::var_ref("y")])],
    );
    assert_eq!(render_ok(&exp), "(lambda x,y : (x + y))");

    let exp = CExp::proc_exp(var_decls(["a"]), vec![CExp::var_ref("a"), CExp::Num(1.0)]);
    assert_eq!(render_ok(&exp), "(lambda a : a 1)");
}

#[test]
fn program_joins_with_newlines() {
    let program = Node::Program(Program::new(vec![
        Exp::define(
            "square",
            CExp::proc_exp(
                var_decls(["x"]),
                vec![prim_app("*", vec![CExp::var_ref("x"), CExp::var_ref("x")])],
            ),
        ),
        CExp::app(CExp::var_ref("square"), vec![CExp::Num(3.0)]).into(),
    ]));
    assert_eq!(
        render(&program),
        Ok("square = (lambda x : (x * x))\nsquare(3)".to_string())
    );
}

#[test]
fn empty_program_renders_empty() {
    assert_eq!(render_program(&[]), Ok(String::new()));
}

#[test]
fn let_is_not_valid() {
    let exp = CExp::let_exp(vec![Binding::new("x", CExp::Num(1.0))], vec![CExp::var_ref("x")]);
    let err = render_cexp(&exp).unwrap_err();
    assert_eq!(
        err.to_string(),
        "let expression is not valid in L2: (let ((x 1)) x)"
    );
    assert_eq!(err.code(), ErrorCode::E2001);
}

#[test]
fn class_is_not_valid() {
    let exp = CExp::class_exp(var_decls(["a"]), vec![]);
    assert!(matches!(
        render_cexp(&exp),
        Err(TranslateError::Unsupported {
            construct: "class expression",
            ..
        })
    ));
}

#[test]
fn quoted_literal_is_not_valid() {
    let exp = CExp::Lit(SExpValue::symbol("a"));
    assert!(matches!(
        render_cexp(&exp),
        Err(TranslateError::Unsupported { .. })
    ));
}

#[test]
fn nested_failure_fails_whole_program() {
    let program = Node::Program(Program::new(vec![
        Exp::define("ok", CExp::Num(1.0)),
        Exp::define(
            "f",
            CExp::proc_exp(
                var_decls(["x"]),
                vec![CExp::var_ref("x"), CExp::let_exp(vec![], vec![CExp::Num(2.0)])],
            ),
        ),
        CExp::class_exp(vec![], vec![]).into(),
    ]));
    let err = render(&program).unwrap_err();
    // The `let` comes first in traversal order, so it wins over the class.
    assert_eq!(
        err,
        TranslateError::unsupported("let expression", "(let () 2)")
    );
}

#[test]
fn conditional_reports_test_failure_before_alt() {
    let exp = CExp::if_exp(
        CExp::symbol("t"),
        CExp::Num(1.0),
        CExp::let_exp(vec![], vec![]),
    );
    assert_eq!(
        render_cexp(&exp),
        Err(TranslateError::unsupported("quoted literal", "'t"))
    );
}

#[test]
fn nesting_limit_fails_rendering() {
    let deep = (0..50).fold(CExp::Num(0.0), |inner, _| {
        prim_app("+", vec![inner, CExp::Num(1.0)])
    });
    let options = RenderOptions { max_depth: 20 };
    let err = render_with(&Node::Exp(deep.into()), &options).unwrap_err();
    assert_eq!(
        err,
        TranslateError::NestingTooDeep {
            phase: Phase::Render,
            limit: 20
        }
    );
    assert_eq!(err.code(), ErrorCode::E2003);
}

#[test]
fn numbers_outside_decimal_range_use_exponents() {
    assert_eq!(render_ok(&CExp::Num(1e21)), "1e+21");
    assert_eq!(render_ok(&CExp::Num(1e20)), "100000000000000000000");
    assert_eq!(render_ok(&CExp::Num(1.5e-7)), "1.5e-7");
    assert_eq!(render_ok(&CExp::Num(-2.5e30)), "-2.5e+30");
}

#[test]
fn special_numbers() {
    assert_eq!(render_ok(&CExp::Num(-0.0)), "0");
    assert_eq!(render_ok(&CExp::Num(f64::INFINITY)), "Infinity");
    assert_eq!(render_ok(&CExp::Num(f64::NEG_INFINITY)), "-Infinity");
    assert_eq!(render_ok(&CExp::Num(f64::NAN)), "NaN");
}

#[test]
fn default_limit_fits_a_small_stack() {
    let (within, beyond) = std::thread::Builder::new()
        .stack_size(2 << 20)
        .spawn(|| {
            let nest = |depth: usize| {
                (0..depth).fold(CExp::var_ref("x"), |inner, _| {
                    CExp::app(CExp::var_ref("f"), vec![inner])
                })
            };
            (
                render(&Node::Exp(nest(DEFAULT_MAX_DEPTH - 1).into())),
                render(&Node::Exp(nest(DEFAULT_MAX_DEPTH).into())),
            )
        })
        .unwrap()
        .join()
        .unwrap();

    let text = within.unwrap();
    assert!(text.starts_with("f(f(f("));
    assert_eq!(text.matches('(').count(), DEFAULT_MAX_DEPTH - 1);
    assert_eq!(
        beyond,
        Err(TranslateError::NestingTooDeep {
            phase: Phase::Render,
            limit: DEFAULT_MAX_DEPTH
        })
    );
}
