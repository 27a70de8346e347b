//! The path evaluator (spec.md §4.4–§4.7): the core of the analyzer. A
//! `PathEvaluator` walks one function body (or the module's top level)
//! statement by statement, accumulating a path predicate, forking into
//! independent evaluators at `If` branch points, inlining calls to
//! locally-defined functions, and recording every line it can prove
//! unreachable.
//!
//! Generalizes the architectural idiom of the teacher's `eval.rs` (a
//! central `match` over node kinds, `Result` propagation via `?`,
//! recursive descent) from a tail-call-optimizing single-continuation
//! evaluator into a forking one: branching here must explore *both* arms
//! rather than loop into one, so the teacher's `loop { ... }` TCO
//! trampoline is replaced by recursive `visit_block` calls with explicit
//! evaluator forks at `If` nodes.

use crate::ast::{
    is_elif_chain, BinOpKind, Callee, CompareOp, ConstantValue, Expr, FunctionDef, LineNo, Module,
    Stmt, UnaryOpKind,
};
use crate::collector::collect_functions;
use crate::env::ScopeStack;
use crate::error::InternalError;
use crate::policy::Policy;
use crate::solver::DecisionProcedure;
use crate::unreachable::UnreachableSet;
use crate::value::{
    binop, bool_op, compare_chain, unary_neg, unary_not, unary_pos, BoolExpr, RealExpr, Value,
};
use std::collections::HashMap;
use std::collections::HashSet;
use std::rc::Rc;

/// The control-flow signal every statement visitor returns, replacing
/// the sentinel-object-identity trick spec.md's original implementation
/// used: `Continue` means execution falls through to the next statement,
/// `Terminated` means a `Return`/`Raise` (or a loop that can be proven to
/// always do so) has ended the enclosing block early.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Continue,
    Terminated(Option<Value>),
}

/// Runs the analyzer over an entire module: the public entry point
/// spec.md §4.4 specifies.
pub fn visit_module(
    module: &Module,
    solver: &DecisionProcedure,
    policy: Policy,
) -> Result<Vec<usize>, InternalError> {
    let mut evaluator = PathEvaluator::new(solver, Rc::new(policy));
    let top_level_funcs = collect_functions(&module.body);
    evaluator.scope.register_funcs(top_level_funcs);
    evaluator.visit_block(&module.body)?;
    Ok(evaluator.unreachable.into_sorted_vec())
}

struct PathEvaluator<'ctx> {
    scope: ScopeStack,
    path_preds: Vec<BoolExpr>,
    counter: usize,
    solver: &'ctx DecisionProcedure<'ctx>,
    policy: Rc<Policy>,
    unreachable: UnreachableSet,
    break_stack: Vec<bool>,
    call_depth: usize,
}

impl<'ctx> PathEvaluator<'ctx> {
    fn new(solver: &'ctx DecisionProcedure<'ctx>, policy: Rc<Policy>) -> Self {
        PathEvaluator {
            scope: ScopeStack::new(),
            path_preds: Vec::new(),
            counter: 0,
            solver,
            policy,
            unreachable: UnreachableSet::new(),
            break_stack: Vec::new(),
            call_depth: 0,
        }
    }

    /// A deep-copied sibling evaluator for exploring one `If` arm: same
    /// environment, path predicate and symbol counter, but a fresh,
    /// empty unreachable set to be unioned back into the parent once
    /// both arms have been explored (spec.md §4.6).
    fn fork(&self) -> Self {
        PathEvaluator {
            scope: self.scope.clone(),
            path_preds: self.path_preds.clone(),
            counter: self.counter,
            solver: self.solver,
            policy: Rc::clone(&self.policy),
            unreachable: UnreachableSet::new(),
            break_stack: self.break_stack.clone(),
            call_depth: self.call_depth,
        }
    }

    fn fresh_symbol(&mut self) -> String {
        let id = self.counter;
        self.counter += 1;
        format!("sym!{id}")
    }

    /// `None` means "cannot prune", i.e. an `Unknown`-valued test: both
    /// arms are always treated as feasible, per spec.md §4.2/§7's
    /// "Unknown is treated like Sat" rule applied at its source.
    fn feasible(&self, extra: Option<&BoolExpr>) -> bool {
        match extra {
            None => true,
            Some(e) => {
                let mut preds = self.path_preds.clone();
                preds.push(e.clone());
                self.solver.feasible(&preds)
            }
        }
    }

    /// Post-If variable merge (spec.md §9's conservative Open Question
    /// resolution): any variable whose value differs between the
    /// pre-branch snapshot and either explored arm becomes `Unknown`.
    fn merge_conservative(&mut self, pre: &ScopeStack, then_scope: &ScopeStack, else_scope: &ScopeStack) {
        let pre_vars = pre.top_vars();
        let mut touched: HashSet<String> = HashSet::new();
        for (k, v) in then_scope.top_vars() {
            if pre_vars.get(k) != Some(v) {
                touched.insert(k.clone());
            }
        }
        for (k, v) in else_scope.top_vars() {
            if pre_vars.get(k) != Some(v) {
                touched.insert(k.clone());
            }
        }
        for name in touched {
            self.scope.assign(&name, Value::Unknown);
        }
    }

    fn visit_block(&mut self, stmts: &[Stmt]) -> Result<Outcome, InternalError> {
        for (i, stmt) in stmts.iter().enumerate() {
            let outcome = self.visit_stmt(stmt)?;
            if let Outcome::Terminated(value) = outcome {
                // Only the first line after a terminator is reported,
                // per spec.md's canonical "first line only" resolution
                // of the Open Question in §9.
                if let Some(next) = stmts.get(i + 1) {
                    self.unreachable.insert(next.line());
                }
                return Ok(Outcome::Terminated(value));
            }
        }
        Ok(Outcome::Continue)
    }

    fn visit_stmt(&mut self, stmt: &Stmt) -> Result<Outcome, InternalError> {
        match stmt {
            Stmt::FunctionDef(fdef) => {
                self.visit_function_def(fdef)?;
                Ok(Outcome::Continue)
            }
            Stmt::Assign { target, value, .. } => {
                let v = self.eval_expr(value)?;
                self.scope.assign(target, v);
                Ok(Outcome::Continue)
            }
            Stmt::AugAssign { target, op, value, .. } => {
                let cur = self.scope.lookup_var(target);
                let rhs = self.eval_expr(value)?;
                let combined = binop(*op, &cur, &rhs);
                self.scope.assign(target, combined);
                Ok(Outcome::Continue)
            }
            Stmt::Return { value, .. } => {
                let v = match value {
                    Some(e) => Some(self.eval_expr(e)?),
                    None => None,
                };
                Ok(Outcome::Terminated(v))
            }
            Stmt::Raise { .. } => Ok(Outcome::Terminated(None)),
            Stmt::Break { .. } => {
                let path_preds = self.path_preds.clone();
                let reachable = self.solver.feasible(&path_preds);
                if let Some(flag) = self.break_stack.last_mut() {
                    if reachable {
                        *flag = true;
                    }
                }
                Ok(Outcome::Continue)
            }
            Stmt::If { test, body, orelse, line, .. } => {
                let _ = line;
                self.visit_if(test, body, orelse)
            }
            Stmt::While { test, body, orelse, end_line, .. } => {
                self.visit_while(test, body, orelse, *end_line)
            }
            Stmt::For { target, iter, body, .. } => self.visit_for(target, iter, body),
            Stmt::ExprStmt { value, .. } => {
                self.eval_expr(value)?;
                Ok(Outcome::Continue)
            }
        }
    }

    /// A `def` at statement position: push a fresh frame, bind each
    /// parameter to a fresh symbolic real constant, collect the body's
    /// own locally-defined functions, and evaluate the body purely for
    /// its own unreachable-line side effects (spec.md §4.4).
    fn visit_function_def(&mut self, fdef: &Rc<FunctionDef>) -> Result<(), InternalError> {
        self.scope.push_frame();
        for param in &fdef.params {
            let sym = self.fresh_symbol();
            self.scope.assign(param, Value::Real(RealExpr::Sym(sym)));
        }
        let nested = collect_functions(&fdef.body);
        self.scope.register_funcs(nested);
        self.visit_block(&fdef.body)?;
        self.scope.pop_frame()?;
        Ok(())
    }

    fn visit_if(&mut self, test: &Expr, body: &[Stmt], orelse: &[Stmt]) -> Result<Outcome, InternalError> {
        let test_val = self.eval_expr(test)?;
        let pred = test_val.to_predicate();
        let neg_pred = pred.as_ref().map(|p| p.negate());

        let then_feasible = self.feasible(pred.as_ref());
        let else_feasible = self.feasible(neg_pred.as_ref());

        match (then_feasible, else_feasible) {
            (true, true) => {
                let pre_scope = self.scope.clone();

                let mut then_eval = self.fork();
                if let Some(p) = &pred {
                    then_eval.path_preds.push(p.clone());
                }
                let then_outcome = then_eval.visit_block(body)?;

                let mut else_eval = self.fork();
                if let Some(p) = &neg_pred {
                    else_eval.path_preds.push(p.clone());
                }
                let else_outcome = else_eval.visit_block(orelse)?;

                self.unreachable.union_with(&then_eval.unreachable);
                self.unreachable.union_with(&else_eval.unreachable);
                self.counter = self.counter.max(then_eval.counter).max(else_eval.counter);
                self.merge_conservative(&pre_scope, &then_eval.scope, &else_eval.scope);

                match (then_outcome, else_outcome) {
                    (Outcome::Terminated(_), Outcome::Terminated(_)) => {
                        Ok(Outcome::Terminated(None))
                    }
                    _ => Ok(Outcome::Continue),
                }
            }
            (true, false) => {
                if let Some(first) = orelse.first() {
                    // §4.6: an elif-chained else-arm reports its nested
                    // `If`'s line+1, not the `elif` header itself.
                    let line = if is_elif_chain(orelse) {
                        first.line() + 1
                    } else {
                        first.line()
                    };
                    self.unreachable.insert(line);
                }
                if let Some(p) = &pred {
                    self.path_preds.push(p.clone());
                }
                let outcome = self.visit_block(body)?;
                if pred.is_some() {
                    self.path_preds.pop();
                }
                Ok(outcome)
            }
            (false, true) => {
                if let Some(first) = body.first() {
                    self.unreachable.insert(first.line());
                }
                if let Some(p) = &neg_pred {
                    self.path_preds.push(p.clone());
                }
                let outcome = self.visit_block(orelse)?;
                if neg_pred.is_some() {
                    self.path_preds.pop();
                }
                Ok(outcome)
            }
            (false, false) => {
                if let Some(first) = body.first() {
                    self.unreachable.insert(first.line());
                }
                if let Some(first) = orelse.first() {
                    self.unreachable.insert(first.line());
                }
                Ok(Outcome::Continue)
            }
        }
    }

    fn visit_while(
        &mut self,
        test: &Expr,
        body: &[Stmt],
        orelse: &[Stmt],
        end_line: LineNo,
    ) -> Result<Outcome, InternalError> {
        let test_val = self.eval_expr(test)?;
        let pred = test_val.to_predicate();
        let neg_pred = pred.as_ref().map(|p| p.negate());

        let entry_feasible = self.feasible(pred.as_ref());
        if !entry_feasible {
            if let Some(first) = body.first() {
                self.unreachable.insert(first.line());
            }
            // The condition can never hold, so the else-clause (Python's
            // while/else runs when the loop exits without a break) runs
            // unconditionally.
            return self.visit_block(orelse);
        }

        let exit_infeasible = !self.feasible(neg_pred.as_ref());
        if exit_infeasible {
            self.break_stack.push(false);
            let body_outcome = self.visit_block(body)?;
            let had_break = self.break_stack.pop().unwrap_or(false);
            if !had_break {
                self.unreachable.insert(end_line + 1);
            }
            if let Some(first) = orelse.first() {
                self.unreachable.insert(first.line());
            }
            if !had_break {
                return Ok(body_outcome);
            }
            Ok(Outcome::Continue)
        } else {
            self.break_stack.push(false);
            self.visit_block(body)?;
            self.break_stack.pop();
            Ok(Outcome::Continue)
        }
    }

    fn visit_for(&mut self, target: &str, iter: &Expr, body: &[Stmt]) -> Result<Outcome, InternalError> {
        if let Some((lo_expr, hi_expr)) = match_range_call(iter) {
            let lo = self.eval_expr(lo_expr)?;
            let hi = self.eval_expr(hi_expr)?;
            let pred = match (&lo, &hi) {
                (Value::Real(l), Value::Real(h)) => {
                    Some(BoolExpr::Cmp(CompareOp::Gt, h.clone(), l.clone()).simplify())
                }
                _ => None,
            };
            if !self.feasible(pred.as_ref()) {
                if let Some(first) = body.first() {
                    self.unreachable.insert(first.line());
                }
                return Ok(Outcome::Continue);
            }
        } else {
            eprintln!(
                "pathfinder: line {}: `for` iterator is not a `range(lo, hi)` call, skipping feasibility analysis",
                iter.line()
            );
        }
        self.scope.assign(target, Value::Unknown);
        self.visit_block(body)
    }

    fn eval_expr(&mut self, expr: &Expr) -> Result<Value, InternalError> {
        match expr {
            Expr::Name { id, .. } => Ok(self.scope.lookup_var(id)),
            Expr::Constant { value, .. } => Ok(match value {
                ConstantValue::Int(n) => Value::real(*n as f64),
                ConstantValue::Float(n) => Value::real(*n),
                ConstantValue::Bool(b) => Value::Bool(BoolExpr::Const(*b)),
                ConstantValue::NoneLiteral | ConstantValue::Unsupported => Value::Unknown,
            }),
            Expr::UnaryOp { op, operand, .. } => {
                let v = self.eval_expr(operand)?;
                Ok(match op {
                    UnaryOpKind::Neg => unary_neg(&v),
                    UnaryOpKind::Pos => unary_pos(&v),
                    UnaryOpKind::Not => unary_not(&v),
                })
            }
            Expr::BinOp { op, left, right, .. } => {
                let l = self.eval_expr(left)?;
                let r = self.eval_expr(right)?;
                Ok(binop(*op, &l, &r))
            }
            Expr::BoolOp { op, values, .. } => {
                let mut vals = Vec::with_capacity(values.len());
                for v in values {
                    vals.push(self.eval_expr(v)?);
                }
                Ok(bool_op(*op, &vals))
            }
            Expr::Compare { left, ops, .. } => {
                let mut operands = vec![self.eval_expr(left)?];
                let mut cmp_ops = Vec::with_capacity(ops.len());
                for (op, rhs) in ops {
                    operands.push(self.eval_expr(rhs)?);
                    cmp_ops.push(*op);
                }
                Ok(compare_chain(&operands, &cmp_ops))
            }
            Expr::Call { callee, args, line } => self.eval_call(callee, args, *line),
        }
    }

    fn eval_call(&mut self, callee: &Callee, args: &[Expr], line: LineNo) -> Result<Value, InternalError> {
        let mut arg_vals = Vec::with_capacity(args.len());
        for a in args {
            arg_vals.push(self.eval_expr(a)?);
        }

        match callee {
            Callee::Name(name) => {
                if let Some(fdef) = self.scope.lookup_func(name) {
                    self.call_user_function(&fdef, args, &arg_vals, line)
                } else if self.policy.known_builtins.contains(name) {
                    Ok(Value::Unknown)
                } else {
                    self.unreachable.insert(line);
                    Ok(Value::Unknown)
                }
            }
            // Attribute-form calls (obj.method(...)) are resolved
            // best-effort against the known-builtins set and otherwise
            // treated as a silent no-op, per spec.md §4.5/§9: we cannot
            // introspect an arbitrary external object's methods, and a
            // false positive here would violate the "no false positives"
            // non-goal constraint more than a missed detection would.
            Callee::Attribute { .. } => Ok(Value::Unknown),
        }
    }

    fn call_user_function(
        &mut self,
        fdef: &Rc<FunctionDef>,
        arg_exprs: &[Expr],
        arg_vals: &[Value],
        line: LineNo,
    ) -> Result<Value, InternalError> {
        if fdef.params.len() != arg_vals.len() {
            self.unreachable.insert(line);
        }
        if self.policy.flag_none_args {
            for (expr, val) in arg_exprs.iter().zip(arg_vals.iter()) {
                if matches!(val, Value::Unknown) && expr.is_unsupported_literal() {
                    self.unreachable.insert(line);
                    break;
                }
            }
        }

        if self.call_depth >= self.policy.max_call_depth {
            return Ok(Value::Unknown);
        }

        self.call_depth += 1;
        self.scope.push_frame();
        for (i, param) in fdef.params.iter().enumerate() {
            let v = arg_vals.get(i).cloned().unwrap_or(Value::Unknown);
            self.scope.assign(param, v);
        }
        let nested: HashMap<_, _> = collect_functions(&fdef.body);
        self.scope.register_funcs(nested);
        let outcome = self.visit_block(&fdef.body)?;
        self.scope.pop_frame()?;
        self.call_depth -= 1;

        Ok(match outcome {
            Outcome::Terminated(Some(v)) => v,
            _ => Value::Unknown,
        })
    }
}

fn match_range_call(expr: &Expr) -> Option<(&Expr, &Expr)> {
    if let Expr::Call { callee: Callee::Name(name), args, .. } = expr {
        if name == "range" {
            if let [lo, hi] = args.as_slice() {
                return Some((lo, hi));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::new_context;

    fn run(module: &Module) -> Vec<usize> {
        let ctx = new_context();
        let dp = DecisionProcedure::new(&ctx);
        visit_module(module, &dp, Policy::default()).unwrap()
    }

    fn func(name: &str, params: &[&str], body: Vec<Stmt>, line: usize, end_line: usize) -> Stmt {
        Stmt::FunctionDef(Rc::new(FunctionDef {
            name: name.to_string(),
            params: params.iter().map(|s| s.to_string()).collect(),
            body,
            line,
            end_line,
        }))
    }

    fn name(id: &str, line: usize) -> Expr {
        Expr::Name { id: id.to_string(), line }
    }

    fn int(n: i64, line: usize) -> Expr {
        Expr::Constant { value: ConstantValue::Int(n), line }
    }

    /// def f(): return 1; print("after")
    #[test]
    fn post_return_line_is_unreachable() {
        let body = vec![
            Stmt::Return { value: Some(int(1, 2)), line: 2 },
            Stmt::ExprStmt {
                value: Expr::Call {
                    callee: Callee::Name("print".into()),
                    args: vec![],
                    line: 3,
                },
                line: 3,
            },
        ];
        let module = Module { body: vec![func("f", &[], body, 1, 3)] };
        assert_eq!(run(&module), vec![3]);
    }

    /// def f(x):
    ///     if x > 5:
    ///         return 1
    ///     return 2
    /// a constantly-true/unsat-negation test is not constructed here
    /// (that needs the solver); this checks ordinary fork-and-union
    /// behavior when both arms are feasible (no line is flagged).
    #[test]
    fn both_arms_feasible_flags_nothing() {
        let body = vec![
            Stmt::If {
                test: Expr::Compare {
                    left: Box::new(name("x", 2)),
                    ops: vec![(CompareOp::Gt, int(5, 2))],
                    line: 2,
                },
                body: vec![Stmt::Return { value: Some(int(1, 3)), line: 3 }],
                orelse: vec![],
                line: 2,
                end_line: 3,
            },
            Stmt::Return { value: Some(int(2, 4)), line: 4 },
        ];
        let module = Module { body: vec![func("f", &["x"], body, 1, 4)] };
        assert_eq!(run(&module), Vec::<usize>::new());
    }

    /// def f(): if True: return 1; else: return 2
    /// followed by return 3 -- both arms terminate, so line after is dead.
    #[test]
    fn both_arms_terminating_propagates_terminated() {
        let body = vec![
            Stmt::If {
                test: Expr::Constant { value: ConstantValue::Bool(true), line: 2 },
                body: vec![Stmt::Return { value: Some(int(1, 3)), line: 3 }],
                orelse: vec![Stmt::Return { value: Some(int(2, 4)), line: 4 }],
                line: 2,
                end_line: 4,
            },
            Stmt::Return { value: Some(int(3, 5)), line: 5 },
        ];
        let module = Module { body: vec![func("f", &[], body, 1, 5)] };
        assert_eq!(run(&module), vec![5]);
    }

    /// def f(): while True: pass (no break) -> end_line + 1 is unreachable.
    #[test]
    fn infinite_loop_without_break_flags_line_after() {
        let body = vec![Stmt::While {
            test: Expr::Constant { value: ConstantValue::Bool(true), line: 2 },
            body: vec![Stmt::ExprStmt {
                value: Expr::Call {
                    callee: Callee::Name("print".into()),
                    args: vec![],
                    line: 3,
                },
                line: 3,
            }],
            orelse: vec![],
            line: 2,
            end_line: 3,
        }];
        let module = Module { body: vec![func("f", &[], body, 1, 3)] };
        assert_eq!(run(&module), vec![4]);
    }

    /// def f(): while True: break -- reachable break means no flag.
    #[test]
    fn infinite_loop_with_reachable_break_flags_nothing() {
        let body = vec![Stmt::While {
            test: Expr::Constant { value: ConstantValue::Bool(true), line: 2 },
            body: vec![Stmt::Break { line: 3 }],
            orelse: vec![],
            line: 2,
            end_line: 3,
        }];
        let module = Module { body: vec![func("f", &[], body, 1, 3)] };
        assert_eq!(run(&module), Vec::<usize>::new());
    }

    /// def f(): another(1, 2, 3) where another takes 2 params -- arity mismatch.
    #[test]
    fn call_arity_mismatch_flags_call_site() {
        let another = func("another", &["a", "b"], vec![Stmt::Return { value: None, line: 2 }], 1, 2);
        let call_site = Stmt::ExprStmt {
            value: Expr::Call {
                callee: Callee::Name("another".into()),
                args: vec![int(1, 4), int(2, 4), int(3, 4)],
                line: 4,
            },
            line: 4,
        };
        let module = Module { body: vec![another, func("main", &[], vec![call_site], 3, 4)] };
        assert_eq!(run(&module), vec![4]);
    }

    /// def f(): another(None) where another takes 1 param -- literal None flags call site.
    #[test]
    fn literal_none_argument_flags_call_site() {
        let another = func("another", &["a"], vec![Stmt::Return { value: None, line: 2 }], 1, 2);
        let call_site = Stmt::ExprStmt {
            value: Expr::Call {
                callee: Callee::Name("another".into()),
                args: vec![Expr::Constant { value: ConstantValue::NoneLiteral, line: 4 }],
                line: 4,
            },
            line: 4,
        };
        let module = Module { body: vec![another, func("main", &[], vec![call_site], 3, 4)] };
        assert_eq!(run(&module), vec![4]);
    }

    /// unresolved identifier argument is NOT flagged (spec.md's literal-only policy).
    #[test]
    fn unresolved_identifier_argument_is_not_flagged() {
        let another = func("another", &["a"], vec![Stmt::Return { value: None, line: 2 }], 1, 2);
        let call_site = Stmt::ExprStmt {
            value: Expr::Call {
                callee: Callee::Name("another".into()),
                args: vec![name("x", 4)],
                line: 4,
            },
            line: 4,
        };
        let module = Module { body: vec![another, func("main", &[], vec![call_site], 3, 4)] };
        assert_eq!(run(&module), Vec::<usize>::new());
    }

    /// for i in range(0, 0): print(...) -- empty range makes body unreachable.
    #[test]
    fn empty_range_flags_for_body() {
        let body = vec![Stmt::For {
            target: "i".into(),
            iter: Expr::Call {
                callee: Callee::Name("range".into()),
                args: vec![int(0, 2), int(0, 2)],
                line: 2,
            },
            body: vec![Stmt::ExprStmt {
                value: Expr::Call {
                    callee: Callee::Name("print".into()),
                    args: vec![],
                    line: 3,
                },
                line: 3,
            }],
            line: 2,
            end_line: 3,
        }];
        let module = Module { body: vec![func("f", &[], body, 1, 3)] };
        assert_eq!(run(&module), vec![3]);
    }

    /// unresolved callee is flagged at the call site.
    #[test]
    fn unresolved_callee_flags_call_site() {
        let call_site = Stmt::ExprStmt {
            value: Expr::Call {
                callee: Callee::Name("totally_unknown_fn".into()),
                args: vec![],
                line: 2,
            },
            line: 2,
        };
        let module = Module { body: vec![func("f", &[], vec![call_site], 1, 2)] };
        assert_eq!(run(&module), vec![2]);
    }

    /// known-builtin calls (print, len, range) are never flagged.
    #[test]
    fn known_builtin_calls_are_not_flagged() {
        let call_site = Stmt::ExprStmt {
            value: Expr::Call {
                callee: Callee::Name("print".into()),
                args: vec![int(1, 2)],
                line: 2,
            },
            line: 2,
        };
        let module = Module { body: vec![func("f", &[], vec![call_site], 1, 2)] };
        assert_eq!(run(&module), Vec::<usize>::new());
    }
}
