//! Primitive operator translation.

/// How an application of a primitive is laid out in the target syntax.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum PrimShape {
    /// `(not x)`
    Negation,
    /// `(lambda x : (type(x) == bool))`
    TypePredicate,
    /// `(a op b ...)`
    Infix,
}

impl PrimShape {
    /// Classify a primitive by name.
    ///
    /// Comparison and logical operators (`eq?`, `=`, `and`, `or`, `>`, `<`)
    /// are infix, and so is every primitive not listed elsewhere.
    pub fn of(op: &str) -> PrimShape {
        match op {
            "not" => PrimShape::Negation,
            "boolean?" | "number?" => PrimShape::TypePredicate,
            _ => PrimShape::Infix,
        }
    }
}

/// Map a primitive's name to its target-syntax token.
///
/// Names without an entry, arithmetic included, are emitted unchanged.
pub fn python_op(op: &str) -> &str {
    match op {
        "=" | "eq?" => "==",
        "not" => "not",
        "or" => "||",
        "and" => "&&",
        "boolean?" => "== bool",
        "number?" => "== number",
        _ => op,
    }
}

#[cfg(test)]
mod tests;
