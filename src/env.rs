//! The scope stack (spec.md §4.3): a stack of frames, each holding a
//! `vars` map and a `funcs` map, with lexical top-down lookup. Lookups of
//! an undefined name never fail — they return `Unknown` — since this
//! analyzer must never reject a program for looking at a variable it
//! can't resolve, only reason conservatively about it.
//!
//! Generalizes the teacher's `Environment` (a single `Rc`-linked
//! parent-chain object with one bindings map) into an explicit `Vec` of
//! frames with a second `funcs` map per frame, since this language has
//! function-call scoping rather than Lisp's lexical closures, and the
//! function collector (spec.md §4.1) needs somewhere to register the
//! names it finds per block.

use crate::ast::FunctionDef;
use crate::error::InternalError;
use crate::value::Value;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub vars: HashMap<String, Value>,
    pub funcs: HashMap<String, Rc<FunctionDef>>,
}

#[derive(Debug, Clone)]
pub struct ScopeStack {
    frames: Vec<Frame>,
}

impl ScopeStack {
    pub fn new() -> Self {
        ScopeStack {
            frames: vec![Frame::default()],
        }
    }

    pub fn push_frame(&mut self) {
        self.frames.push(Frame::default());
    }

    pub fn pop_frame(&mut self) -> Result<Frame, InternalError> {
        if self.frames.len() <= 1 {
            return Err(InternalError::EmptyScopeStack);
        }
        self.frames.pop().ok_or(InternalError::EmptyScopeStack)
    }

    pub fn assign(&mut self, name: &str, value: Value) {
        let top = self.frames.last_mut().expect("scope stack is never empty");
        top.vars.insert(name.to_string(), value);
    }

    /// Looks a name up top-down through the frame stack. An undefined
    /// name is `Unknown`, never an error (spec.md §4.3).
    pub fn lookup_var(&self, name: &str) -> Value {
        for frame in self.frames.iter().rev() {
            if let Some(v) = frame.vars.get(name) {
                return v.clone();
            }
        }
        Value::Unknown
    }

    pub fn lookup_func(&self, name: &str) -> Option<Rc<FunctionDef>> {
        for frame in self.frames.iter().rev() {
            if let Some(f) = frame.funcs.get(name) {
                return Some(Rc::clone(f));
            }
        }
        None
    }

    pub fn register_funcs(&mut self, funcs: HashMap<String, Rc<FunctionDef>>) {
        let top = self.frames.last_mut().expect("scope stack is never empty");
        top.funcs.extend(funcs);
    }

    pub fn top_vars(&self) -> &HashMap<String, Value> {
        &self.frames.last().expect("scope stack is never empty").vars
    }
}

impl Default for ScopeStack {
    fn default() -> Self {
        ScopeStack::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_name_is_unknown() {
        let scope = ScopeStack::new();
        assert_eq!(scope.lookup_var("missing"), Value::Unknown);
    }

    #[test]
    fn assign_then_lookup() {
        let mut scope = ScopeStack::new();
        scope.assign("x", Value::real(5.0));
        assert_eq!(scope.lookup_var("x"), Value::real(5.0));
    }

    #[test]
    fn lookup_walks_down_the_stack() {
        let mut scope = ScopeStack::new();
        scope.assign("x", Value::real(1.0));
        scope.push_frame();
        assert_eq!(scope.lookup_var("x"), Value::real(1.0));
    }

    #[test]
    fn assign_in_pushed_frame_does_not_leak_up() {
        let mut scope = ScopeStack::new();
        scope.push_frame();
        scope.assign("y", Value::real(2.0));
        scope.pop_frame().unwrap();
        assert_eq!(scope.lookup_var("y"), Value::Unknown);
    }

    #[test]
    fn popping_the_last_frame_is_an_internal_error() {
        let mut scope = ScopeStack::new();
        assert!(scope.pop_frame().is_err());
    }

    #[test]
    fn register_funcs_are_visible_top_down() {
        let mut scope = ScopeStack::new();
        let f = Rc::new(FunctionDef {
            name: "f".into(),
            params: vec![],
            body: vec![],
            line: 1,
            end_line: 1,
        });
        let mut funcs = HashMap::new();
        funcs.insert("f".to_string(), f);
        scope.register_funcs(funcs);
        assert!(scope.lookup_func("f").is_some());
        assert!(scope.lookup_func("nonexistent").is_none());
    }
}
