//! The function collector (spec.md §4.1): a shallow, one-pass scan of a
//! statement list that maps locally-defined function names to their
//! definitions. Later definitions win on a duplicate name, and nested
//! function bodies are not descended into — only the collected block's
//! own immediate statements are scanned.

use crate::ast::{FunctionDef, Stmt};
use std::collections::HashMap;
use std::rc::Rc;

pub fn collect_functions(body: &[Stmt]) -> HashMap<String, Rc<FunctionDef>> {
    let mut funcs = HashMap::new();
    for stmt in body {
        if let Stmt::FunctionDef(f) = stmt {
            funcs.insert(f.name.clone(), Rc::clone(f));
        }
    }
    funcs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Stmt;

    fn make_fn(name: &str, line: usize) -> Stmt {
        Stmt::FunctionDef(Rc::new(FunctionDef {
            name: name.to_string(),
            params: vec![],
            body: vec![],
            line,
            end_line: line,
        }))
    }

    #[test]
    fn collects_top_level_functions_only() {
        let body = vec![
            make_fn("a", 1),
            Stmt::Return { value: None, line: 2 },
            make_fn("b", 3),
        ];
        let funcs = collect_functions(&body);
        assert_eq!(funcs.len(), 2);
        assert!(funcs.contains_key("a"));
        assert!(funcs.contains_key("b"));
    }

    #[test]
    fn later_definition_wins_on_duplicate_name() {
        let body = vec![make_fn("f", 1), make_fn("f", 5)];
        let funcs = collect_functions(&body);
        assert_eq!(funcs.get("f").unwrap().line, 5);
    }

    #[test]
    fn does_not_descend_into_nested_bodies() {
        let nested = make_fn("inner", 2);
        let outer = Stmt::FunctionDef(Rc::new(FunctionDef {
            name: "outer".into(),
            params: vec![],
            body: vec![nested],
            line: 1,
            end_line: 3,
        }));
        let funcs = collect_functions(&[outer]);
        assert_eq!(funcs.len(), 1);
        assert!(funcs.contains_key("outer"));
        assert!(!funcs.contains_key("inner"));
    }
}
