//! The decision-procedure interface (spec.md §4.2/§6): a push/pop
//! checkpointed SMT query surface returning `Sat`/`Unsat`/`Unknown`,
//! backed by the `z3` crate — the same solver family the analyzer's
//! original implementation used directly (`examples/original_source/
//! path_visitor.py` imports `z3`) and the same one a real Rust static
//! analyzer in this corpus links against for an analogous feasibility
//! check (`rust-mir-checker`'s `z3-sys` dependency).
//!
//! `Unknown` is never distinguished from `Sat` by callers: per spec.md
//! §4.2/§7, an `Unknown` result must be treated exactly like `Sat` so the
//! evaluator never prunes a branch it cannot prove infeasible.

use crate::ast::CompareOp;
use crate::value::{BoolExpr, RealExpr};
use std::cell::RefCell;
use std::collections::HashMap;
use z3::ast::{Ast, Bool, Real};
use z3::{Config, Context, SatResult as Z3SatResult, Solver};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SatResult {
    Sat,
    Unsat,
    Unknown,
}

/// Wraps one `z3::Solver` plus a per-symbol-name cache of the `Real`
/// constants already declared in this context, so repeated queries that
/// mention the same symbolic parameter reuse the same SMT constant.
pub struct DecisionProcedure<'ctx> {
    ctx: &'ctx Context,
    solver: Solver<'ctx>,
    reals: RefCell<HashMap<String, Real<'ctx>>>,
}

impl<'ctx> DecisionProcedure<'ctx> {
    pub fn new(ctx: &'ctx Context) -> Self {
        DecisionProcedure {
            ctx,
            solver: Solver::new(ctx),
            reals: RefCell::new(HashMap::new()),
        }
    }

    /// Checks satisfiability of the conjunction of `preds` against the
    /// solver's persistent state, via a push/pop-scoped query so the
    /// query's own assertions never leak into the next call, matching
    /// spec.md §6's "checkpointed, LIFO" push/pop contract.
    pub fn check(&self, preds: &[BoolExpr]) -> SatResult {
        self.solver.push();
        for p in preds {
            let translated = self.translate_bool(p);
            self.solver.assert(&translated);
        }
        let result = self.solver.check();
        self.solver.pop(1);
        match result {
            Z3SatResult::Sat => SatResult::Sat,
            Z3SatResult::Unsat => SatResult::Unsat,
            Z3SatResult::Unknown => SatResult::Unknown,
        }
    }

    /// Convenience used throughout the evaluator: `Unknown` collapses
    /// into "feasible" so the caller never has to special-case it.
    pub fn feasible(&self, preds: &[BoolExpr]) -> bool {
        !matches!(self.check(preds), SatResult::Unsat)
    }

    fn real_const(&self, name: &str) -> Real<'ctx> {
        let mut cache = self.reals.borrow_mut();
        cache
            .entry(name.to_string())
            .or_insert_with(|| Real::new_const(self.ctx, name))
            .clone()
    }

    fn translate_real(&self, e: &RealExpr) -> Real<'ctx> {
        match e {
            RealExpr::Const(v) => real_literal(self.ctx, v.0),
            RealExpr::Sym(name) => self.real_const(name),
            RealExpr::Add(l, r) => self.translate_real(l) + self.translate_real(r),
            RealExpr::Sub(l, r) => self.translate_real(l) - self.translate_real(r),
            RealExpr::Mul(l, r) => self.translate_real(l) * self.translate_real(r),
            RealExpr::Div(l, r) => self.translate_real(l) / self.translate_real(r),
            RealExpr::Pow(l, r) => self.translate_real(l).power(&self.translate_real(r)),
            RealExpr::Neg(e) => -self.translate_real(e),
        }
    }

    fn translate_bool(&self, e: &BoolExpr) -> Bool<'ctx> {
        match e {
            BoolExpr::Const(b) => Bool::from_bool(self.ctx, *b),
            BoolExpr::Not(inner) => self.translate_bool(inner).not(),
            BoolExpr::And(items) => {
                let asts: Vec<Bool> = items.iter().map(|i| self.translate_bool(i)).collect();
                let refs: Vec<&Bool> = asts.iter().collect();
                Bool::and(self.ctx, &refs)
            }
            BoolExpr::Or(items) => {
                let asts: Vec<Bool> = items.iter().map(|i| self.translate_bool(i)).collect();
                let refs: Vec<&Bool> = asts.iter().collect();
                Bool::or(self.ctx, &refs)
            }
            BoolExpr::Cmp(op, l, r) => {
                let lv = self.translate_real(l);
                let rv = self.translate_real(r);
                match op {
                    CompareOp::Eq => lv._eq(&rv),
                    CompareOp::NotEq => lv._eq(&rv).not(),
                    CompareOp::Lt => lv.lt(&rv),
                    CompareOp::LtE => lv.le(&rv),
                    CompareOp::Gt => lv.gt(&rv),
                    CompareOp::GtE => lv.ge(&rv),
                }
            }
        }
    }
}

/// Converts a literal `f64` into an exact z3 rational. Test-corpus
/// literals are small integers or short decimals (`-2.5`, `0.5`, `69`),
/// so a bounded multiply-until-integral loop is exact for every case
/// this analyzer is expected to see; pathological floats are out of
/// scope (spec.md is not a general-purpose numeric verifier).
fn real_literal<'ctx>(ctx: &'ctx Context, v: f64) -> Real<'ctx> {
    let mut num = v;
    let mut den: i64 = 1;
    while num.fract().abs() > 1e-9 && den < 1_000_000_000 {
        num *= 10.0;
        den *= 10;
    }
    Real::from_real(ctx, num.round() as i32, den as i32)
}

/// Builds a fresh `z3::Context` for one analysis run. Kept as a free
/// function (rather than bundled into `DecisionProcedure::new`) so the
/// driver can own the `Context` for the whole run's lifetime while the
/// evaluator only ever sees the `DecisionProcedure` borrowing it.
pub fn new_context() -> Context {
    Context::new(&Config::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::CompareOp;
    use crate::value::RealExpr;

    #[test]
    fn contradiction_is_unsat() {
        let ctx = new_context();
        let dp = DecisionProcedure::new(&ctx);
        let x = RealExpr::Sym("x".into());
        let gt5 = BoolExpr::Cmp(CompareOp::Gt, x.clone(), RealExpr::const_val(5.0));
        let lt3 = BoolExpr::Cmp(CompareOp::Lt, x, RealExpr::const_val(3.0));
        assert_eq!(dp.check(&[gt5, lt3]), SatResult::Unsat);
    }

    #[test]
    fn satisfiable_conjunction() {
        let ctx = new_context();
        let dp = DecisionProcedure::new(&ctx);
        let x = RealExpr::Sym("x".into());
        let gt5 = BoolExpr::Cmp(CompareOp::Gt, x, RealExpr::const_val(5.0));
        assert_eq!(dp.check(&[gt5]), SatResult::Sat);
    }

    #[test]
    fn push_pop_does_not_leak_assertions() {
        let ctx = new_context();
        let dp = DecisionProcedure::new(&ctx);
        let x = RealExpr::Sym("x".into());
        let gt5 = BoolExpr::Cmp(CompareOp::Gt, x.clone(), RealExpr::const_val(5.0));
        assert_eq!(dp.check(&[gt5]), SatResult::Sat);
        // A second, unrelated query must not see the first query's assertion.
        let lt0 = BoolExpr::Cmp(CompareOp::Lt, x, RealExpr::const_val(0.0));
        assert_eq!(dp.check(&[lt0]), SatResult::Sat);
    }

    #[test]
    fn constant_false_is_unsat() {
        let ctx = new_context();
        let dp = DecisionProcedure::new(&ctx);
        assert_eq!(dp.check(&[BoolExpr::Const(false)]), SatResult::Unsat);
    }
}
