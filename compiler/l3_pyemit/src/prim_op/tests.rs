use super::*;

#[test]
fn rewrite_table() {
    let table = [
        ("=", "=="),
        ("not", "not"),
        ("or", "||"),
        ("and", "&&"),
        ("eq?", "=="),
        ("boolean?", "== bool"),
        ("number?", "== number"),
    ];
    for (op, expected) in table {
        assert_eq!(python_op(op), expected, "operator {op}");
    }
}

#[test]
fn unmapped_operators_pass_through() {
    for op in ["+", "-", "*", "/", ">", "<", "car", "cons"] {
        assert_eq!(python_op(op), op);
    }
}

#[test]
fn shapes() {
    assert_eq!(PrimShape::of("not"), PrimShape::Negation);
    assert_eq!(PrimShape::of("boolean?"), PrimShape::TypePredicate);
    assert_eq!(PrimShape::of("number?"), PrimShape::TypePredicate);
    for op in ["eq?", "=", "and", "or", ">", "<", "+", "car"] {
        assert_eq!(PrimShape::of(op), PrimShape::Infix, "operator {op}");
    }
}
