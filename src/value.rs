//! The symbolic value domain: real-arithmetic expressions, boolean
//! expressions, and the distinguished `Unknown` element that propagates
//! through every operation and predicate it touches.
//!
//! This module carries the same job the teacher's `value.rs` carries (the
//! one value type every evaluated expression reduces to) but the values
//! here are themselves small symbolic ASTs rather than concrete runtime
//! data, since the evaluator never actually runs the analyzed program —
//! it only reasons about which lines are reachable.

use crate::ast::CompareOp;
use std::fmt;

/// A real-arithmetic symbolic expression.
#[derive(Debug, Clone, PartialEq)]
pub enum RealExpr {
    Const(OrderedFloat),
    /// A fresh symbolic constant, e.g. a function parameter with no
    /// concrete value, named uniquely within one analysis run.
    Sym(String),
    Add(Box<RealExpr>, Box<RealExpr>),
    Sub(Box<RealExpr>, Box<RealExpr>),
    Mul(Box<RealExpr>, Box<RealExpr>),
    Div(Box<RealExpr>, Box<RealExpr>),
    Pow(Box<RealExpr>, Box<RealExpr>),
    Neg(Box<RealExpr>),
}

/// `f64` wrapper with the bitwise `Eq`/`Hash` `simplify`'s structural
/// equality checks (e.g. `x - x => 0`) need; these values are never NaN
/// (arithmetic on `Unknown` never reaches `RealExpr` construction).
#[derive(Debug, Clone, Copy)]
pub struct OrderedFloat(pub f64);

impl PartialEq for OrderedFloat {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl fmt::Display for RealExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RealExpr::Const(v) => write!(f, "{}", v.0),
            RealExpr::Sym(name) => write!(f, "{}", name),
            RealExpr::Add(l, r) => write!(f, "({} + {})", l, r),
            RealExpr::Sub(l, r) => write!(f, "({} - {})", l, r),
            RealExpr::Mul(l, r) => write!(f, "({} * {})", l, r),
            RealExpr::Div(l, r) => write!(f, "({} / {})", l, r),
            RealExpr::Pow(l, r) => write!(f, "({} ^ {})", l, r),
            RealExpr::Neg(e) => write!(f, "(-{})", e),
        }
    }
}

impl RealExpr {
    pub fn const_val(v: f64) -> Self {
        RealExpr::Const(OrderedFloat(v))
    }

    pub fn as_const(&self) -> Option<f64> {
        match self {
            RealExpr::Const(v) => Some(v.0),
            _ => None,
        }
    }

    /// Constant-folds and applies a handful of algebraic identities
    /// (`x - x => 0`, `x * 0 => 0`, `0 + x => x`, ...) needed to decide
    /// loop-range feasibility symbolically, per SPEC_FULL.md's worked
    /// `range(helper1(x), helper2(x))` style scenarios.
    pub fn simplify(&self) -> RealExpr {
        match self {
            RealExpr::Const(_) | RealExpr::Sym(_) => self.clone(),
            RealExpr::Neg(inner) => {
                let inner = inner.simplify();
                match inner.as_const() {
                    Some(v) => RealExpr::const_val(-v),
                    None => RealExpr::Neg(Box::new(inner)),
                }
            }
            RealExpr::Add(l, r) => {
                let l = l.simplify();
                let r = r.simplify();
                match (l.as_const(), r.as_const()) {
                    (Some(a), Some(b)) => RealExpr::const_val(a + b),
                    (Some(a), None) if a == 0.0 => r,
                    (None, Some(b)) if b == 0.0 => l,
                    _ => RealExpr::Add(Box::new(l), Box::new(r)),
                }
            }
            RealExpr::Sub(l, r) => {
                let l = l.simplify();
                let r = r.simplify();
                if l == r {
                    return RealExpr::const_val(0.0);
                }
                match (l.as_const(), r.as_const()) {
                    (Some(a), Some(b)) => RealExpr::const_val(a - b),
                    (None, Some(b)) if b == 0.0 => l,
                    _ => RealExpr::Sub(Box::new(l), Box::new(r)),
                }
            }
            RealExpr::Mul(l, r) => {
                let l = l.simplify();
                let r = r.simplify();
                match (l.as_const(), r.as_const()) {
                    (Some(a), Some(b)) => RealExpr::const_val(a * b),
                    (Some(a), _) if a == 0.0 => RealExpr::const_val(0.0),
                    (_, Some(b)) if b == 0.0 => RealExpr::const_val(0.0),
                    (Some(a), None) if a == 1.0 => r,
                    (None, Some(b)) if b == 1.0 => l,
                    _ => RealExpr::Mul(Box::new(l), Box::new(r)),
                }
            }
            RealExpr::Div(l, r) => {
                let l = l.simplify();
                let r = r.simplify();
                match (l.as_const(), r.as_const()) {
                    (Some(a), Some(b)) if b != 0.0 => RealExpr::const_val(a / b),
                    (Some(a), None) if a == 0.0 => RealExpr::const_val(0.0),
                    _ => RealExpr::Div(Box::new(l), Box::new(r)),
                }
            }
            RealExpr::Pow(l, r) => {
                let l = l.simplify();
                let r = r.simplify();
                match (l.as_const(), r.as_const()) {
                    (Some(a), Some(b)) => RealExpr::const_val(a.powf(b)),
                    _ => RealExpr::Pow(Box::new(l), Box::new(r)),
                }
            }
        }
    }
}

/// A boolean symbolic expression.
#[derive(Debug, Clone, PartialEq)]
pub enum BoolExpr {
    Const(bool),
    Not(Box<BoolExpr>),
    And(Vec<BoolExpr>),
    Or(Vec<BoolExpr>),
    Cmp(CompareOp, RealExpr, RealExpr),
}

impl BoolExpr {
    pub fn as_const(&self) -> Option<bool> {
        match self {
            BoolExpr::Const(b) => Some(*b),
            _ => None,
        }
    }

    pub fn simplify(&self) -> BoolExpr {
        match self {
            BoolExpr::Const(b) => BoolExpr::Const(*b),
            BoolExpr::Not(inner) => {
                let inner = inner.simplify();
                match inner.as_const() {
                    Some(b) => BoolExpr::Const(!b),
                    None => BoolExpr::Not(Box::new(inner)),
                }
            }
            BoolExpr::And(items) => {
                let items: Vec<BoolExpr> = items.iter().map(BoolExpr::simplify).collect();
                if items.iter().any(|i| i.as_const() == Some(false)) {
                    return BoolExpr::Const(false);
                }
                let remaining: Vec<BoolExpr> =
                    items.into_iter().filter(|i| i.as_const() != Some(true)).collect();
                if remaining.is_empty() {
                    BoolExpr::Const(true)
                } else {
                    BoolExpr::And(remaining)
                }
            }
            BoolExpr::Or(items) => {
                let items: Vec<BoolExpr> = items.iter().map(BoolExpr::simplify).collect();
                if items.iter().any(|i| i.as_const() == Some(true)) {
                    return BoolExpr::Const(true);
                }
                let remaining: Vec<BoolExpr> =
                    items.into_iter().filter(|i| i.as_const() != Some(false)).collect();
                if remaining.is_empty() {
                    BoolExpr::Const(false)
                } else {
                    BoolExpr::Or(remaining)
                }
            }
            BoolExpr::Cmp(op, l, r) => {
                let l = l.simplify();
                let r = r.simplify();
                match (l.as_const(), r.as_const()) {
                    (Some(a), Some(b)) => BoolExpr::Const(apply_compare(*op, a, b)),
                    _ => BoolExpr::Cmp(*op, l, r),
                }
            }
        }
    }

    pub fn negate(&self) -> BoolExpr {
        BoolExpr::Not(Box::new(self.clone())).simplify()
    }
}

fn apply_compare(op: CompareOp, a: f64, b: f64) -> bool {
    match op {
        CompareOp::Eq => a == b,
        CompareOp::NotEq => a != b,
        CompareOp::Lt => a < b,
        CompareOp::LtE => a <= b,
        CompareOp::Gt => a > b,
        CompareOp::GtE => a >= b,
    }
}

/// The symbolic value every expression evaluates to: a real-valued
/// expression, a boolean expression, or the top-lattice `Unknown`
/// element, which swallows every operator and predicate it touches.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Real(RealExpr),
    Bool(BoolExpr),
    Unknown,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Real(e) => write!(f, "{}", e),
            Value::Bool(b) => write!(f, "{:?}", b),
            Value::Unknown => write!(f, "<unknown>"),
        }
    }
}

impl Value {
    pub fn real(v: f64) -> Self {
        Value::Real(RealExpr::const_val(v))
    }

    pub fn simplify(&self) -> Value {
        match self {
            Value::Real(e) => Value::Real(e.simplify()),
            Value::Bool(b) => Value::Bool(b.simplify()),
            Value::Unknown => Value::Unknown,
        }
    }

    /// Coerces a test expression's value to a boolean predicate, per
    /// SPEC_FULL.md/spec.md §4.6-§4.7: arithmetic values are coerced via
    /// `t > 0`; `Unknown` coerces to `None`, meaning "cannot prune either
    /// arm of this branch".
    pub fn to_predicate(&self) -> Option<BoolExpr> {
        match self {
            Value::Bool(b) => Some(b.simplify()),
            Value::Real(e) => Some(
                BoolExpr::Cmp(CompareOp::Gt, e.simplify(), RealExpr::const_val(0.0)).simplify(),
            ),
            Value::Unknown => None,
        }
    }
}

pub fn unary_neg(v: &Value) -> Value {
    match v {
        Value::Real(e) => Value::Real(RealExpr::Neg(Box::new(e.clone())).simplify()),
        _ => Value::Unknown,
    }
}

pub fn unary_pos(v: &Value) -> Value {
    match v {
        Value::Real(_) => v.clone(),
        _ => Value::Unknown,
    }
}

pub fn unary_not(v: &Value) -> Value {
    match v {
        Value::Bool(b) => Value::Bool(b.negate()),
        _ => Value::Unknown,
    }
}

/// Binary arithmetic. Division by a statically-known zero divisor
/// evaluates to `Unknown` per spec.md §4.2, rather than being treated as
/// an infeasible/contradictory path.
pub fn binop(op: crate::ast::BinOpKind, l: &Value, r: &Value) -> Value {
    use crate::ast::BinOpKind::*;
    let (le, re) = match (l, r) {
        (Value::Real(le), Value::Real(re)) => (le.clone(), re.clone()),
        _ => return Value::Unknown,
    };
    match op {
        Add => Value::Real(RealExpr::Add(Box::new(le), Box::new(re)).simplify()),
        Sub => Value::Real(RealExpr::Sub(Box::new(le), Box::new(re)).simplify()),
        Mul => Value::Real(RealExpr::Mul(Box::new(le), Box::new(re)).simplify()),
        Div => {
            let re = re.simplify();
            if re.as_const() == Some(0.0) {
                Value::Unknown
            } else {
                Value::Real(RealExpr::Div(Box::new(le), Box::new(re)).simplify())
            }
        }
        Pow => Value::Real(RealExpr::Pow(Box::new(le), Box::new(re)).simplify()),
    }
}

pub fn compare_chain(operands: &[Value], ops: &[CompareOp]) -> Value {
    let mut parts = Vec::with_capacity(ops.len());
    for (window, op) in operands.windows(2).zip(ops.iter()) {
        let (l, r) = (&window[0], &window[1]);
        match (l, r) {
            (Value::Real(le), Value::Real(re)) => {
                parts.push(BoolExpr::Cmp(*op, le.clone(), re.clone()));
            }
            _ => return Value::Unknown,
        }
    }
    match parts.len() {
        0 => Value::Unknown,
        1 => Value::Bool(parts.remove(0).simplify()),
        _ => Value::Bool(BoolExpr::And(parts).simplify()),
    }
}

pub fn bool_op(op: crate::ast::BoolOpKind, operands: &[Value]) -> Value {
    let mut parts = Vec::with_capacity(operands.len());
    for v in operands {
        match v {
            Value::Bool(b) => parts.push(b.clone()),
            _ => return Value::Unknown,
        }
    }
    match op {
        crate::ast::BoolOpKind::And => Value::Bool(BoolExpr::And(parts).simplify()),
        crate::ast::BoolOpKind::Or => Value::Bool(BoolExpr::Or(parts).simplify()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::BinOpKind;

    #[test]
    fn self_subtraction_simplifies_to_zero() {
        let x = RealExpr::Sym("x".into());
        let e = RealExpr::Sub(Box::new(x.clone()), Box::new(x)).simplify();
        assert_eq!(e.as_const(), Some(0.0));
    }

    #[test]
    fn multiply_by_zero_simplifies_to_zero() {
        let x = RealExpr::Sym("x".into());
        let e = RealExpr::Mul(Box::new(x), Box::new(RealExpr::const_val(0.0))).simplify();
        assert_eq!(e.as_const(), Some(0.0));
    }

    #[test]
    fn division_by_static_zero_is_unknown() {
        let l = Value::real(1.0);
        let r = Value::real(0.0);
        assert_eq!(binop(BinOpKind::Div, &l, &r), Value::Unknown);
    }

    #[test]
    fn unknown_propagates_through_binop() {
        let l = Value::Unknown;
        let r = Value::real(1.0);
        assert_eq!(binop(BinOpKind::Add, &l, &r), Value::Unknown);
    }

    #[test]
    fn to_predicate_coerces_nonzero_arithmetic() {
        let v = Value::real(5.0);
        let pred = v.to_predicate().unwrap();
        assert_eq!(pred.as_const(), Some(true));
    }

    #[test]
    fn unknown_has_no_predicate() {
        assert!(Value::Unknown.to_predicate().is_none());
    }
}
