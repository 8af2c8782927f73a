//! Quoted literal values.

use std::fmt;

/// The payload of a quoted literal (`'sym`, `'(1 2)`, `'()`).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SExpValue {
    Symbol(String),
    Number(f64),
    Bool(bool),
    Str(String),
    EmptyList,
    /// A cons cell. Proper lists end in `EmptyList`.
    Pair(Box<SExpValue>, Box<SExpValue>),
}

impl SExpValue {
    pub fn symbol(name: impl Into<String>) -> Self {
        SExpValue::Symbol(name.into())
    }

    pub fn pair(car: SExpValue, cdr: SExpValue) -> Self {
        SExpValue::Pair(Box::new(car), Box::new(cdr))
    }

    /// Build a proper list from `items`.
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator<Item = SExpValue>,
        I::IntoIter: DoubleEndedIterator,
    {
        items
            .into_iter()
            .rev()
            .fold(SExpValue::EmptyList, |tail, item| SExpValue::pair(item, tail))
    }
}

impl fmt::Display for SExpValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SExpValue::Symbol(name) => f.write_str(name),
            SExpValue::Number(n) => write!(f, "{n}"),
            SExpValue::Bool(true) => f.write_str("#t"),
            SExpValue::Bool(false) => f.write_str("#f"),
            SExpValue::Str(s) => write!(f, "\"{s}\""),
            SExpValue::EmptyList => f.write_str("()"),
            SExpValue::Pair(car, cdr) => {
                write!(f, "({car}")?;
                let mut rest = cdr.as_ref();
                loop {
                    match rest {
                        SExpValue::EmptyList => break,
                        SExpValue::Pair(car, cdr) => {
                            write!(f, " {car}")?;
                            rest = cdr;
                        }
                        tail => {
                            write!(f, " . {tail}")?;
                            break;
                        }
                    }
                }
                f.write_str(")")
            }
        }
    }
}
