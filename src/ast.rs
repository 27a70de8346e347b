//! AST node types produced by the parser and consumed by the path evaluator.
//!
//! Every statement carries its 1-based source `line`; compound statements
//! additionally carry `end_line`, the line of their last nested statement.
//! `FunctionDef` nodes are `Rc`-shared so many scope frames can reference
//! the same body without cloning it.

use std::rc::Rc;

pub type LineNo = usize;

#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    pub name: String,
    pub params: Vec<String>,
    pub body: Vec<Stmt>,
    pub line: LineNo,
    pub end_line: LineNo,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    FunctionDef(Rc<FunctionDef>),
    Assign {
        target: String,
        value: Expr,
        line: LineNo,
    },
    AugAssign {
        target: String,
        op: BinOpKind,
        value: Expr,
        line: LineNo,
    },
    Return {
        value: Option<Expr>,
        line: LineNo,
    },
    Raise {
        line: LineNo,
    },
    Break {
        line: LineNo,
    },
    If {
        test: Expr,
        body: Vec<Stmt>,
        orelse: Vec<Stmt>,
        line: LineNo,
        end_line: LineNo,
    },
    While {
        test: Expr,
        body: Vec<Stmt>,
        orelse: Vec<Stmt>,
        line: LineNo,
        end_line: LineNo,
    },
    For {
        target: String,
        iter: Expr,
        body: Vec<Stmt>,
        line: LineNo,
        end_line: LineNo,
    },
    /// A bare expression evaluated for effect only, e.g. `print(x)` or
    /// `helper(1, 2)` at statement position. Not in spec.md's table; the
    /// original test corpus contains bare calls as statements, so the
    /// parser needs somewhere to put them (see SPEC_FULL.md §3).
    ExprStmt {
        value: Expr,
        line: LineNo,
    },
}

impl Stmt {
    pub fn line(&self) -> LineNo {
        match self {
            Stmt::FunctionDef(f) => f.line,
            Stmt::Assign { line, .. } => *line,
            Stmt::AugAssign { line, .. } => *line,
            Stmt::Return { line, .. } => *line,
            Stmt::Raise { line, .. } => *line,
            Stmt::Break { line, .. } => *line,
            Stmt::If { line, .. } => *line,
            Stmt::While { line, .. } => *line,
            Stmt::For { line, .. } => *line,
            Stmt::ExprStmt { line, .. } => *line,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConstantValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    /// The literal `None`. Distinguished from other unsupported literals
    /// so the call-argument flagging policy (SPEC_FULL.md §4.5) can tell
    /// "the source expression was `None`" apart from "the source
    /// expression was an unresolved name that merely evaluates to
    /// Unknown".
    NoneLiteral,
    /// Strings and any other literal kind this language subset does not
    /// model arithmetically or logically; evaluates to `Unknown`.
    Unsupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOpKind {
    Neg,
    Pos,
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolOpKind {
    And,
    Or,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    NotEq,
    Lt,
    LtE,
    Gt,
    GtE,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Callee {
    Name(String),
    Attribute { value: Box<Expr>, attr: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Name {
        id: String,
        line: LineNo,
    },
    Constant {
        value: ConstantValue,
        line: LineNo,
    },
    UnaryOp {
        op: UnaryOpKind,
        operand: Box<Expr>,
        line: LineNo,
    },
    BinOp {
        op: BinOpKind,
        left: Box<Expr>,
        right: Box<Expr>,
        line: LineNo,
    },
    BoolOp {
        op: BoolOpKind,
        values: Vec<Expr>,
        line: LineNo,
    },
    Compare {
        left: Box<Expr>,
        ops: Vec<(CompareOp, Expr)>,
        line: LineNo,
    },
    Call {
        callee: Callee,
        args: Vec<Expr>,
        line: LineNo,
    },
}

impl Expr {
    pub fn line(&self) -> LineNo {
        match self {
            Expr::Name { line, .. } => *line,
            Expr::Constant { line, .. } => *line,
            Expr::UnaryOp { line, .. } => *line,
            Expr::BinOp { line, .. } => *line,
            Expr::BoolOp { line, .. } => *line,
            Expr::Compare { line, .. } => *line,
            Expr::Call { line, .. } => *line,
        }
    }

    /// True for the literal `None` or another unsupported literal used
    /// directly as a call argument — the trigger for the literal-`None`
    /// call-argument policy (SPEC_FULL.md §4.5), as opposed to a name
    /// that merely resolves to `Unknown`.
    pub fn is_unsupported_literal(&self) -> bool {
        matches!(
            self,
            Expr::Constant {
                value: ConstantValue::NoneLiteral | ConstantValue::Unsupported,
                ..
            }
        )
    }
}

/// True when `orelse` is Python's `elif` desugared as a single nested
/// `If`. The recursive descent (`visit_block`/`visit_if`) walks such a
/// block uniformly regardless, but §4.6's feasibility table reports the
/// elif's line+1 rather than its header line when the then-arm is
/// feasible and this else-arm is not (see SPEC_FULL.md §4.6).
pub fn is_elif_chain(orelse: &[Stmt]) -> bool {
    matches!(orelse, [Stmt::If { .. }])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stmt_line_matches_each_variant() {
        let assign = Stmt::Assign {
            target: "x".into(),
            value: Expr::Constant {
                value: ConstantValue::Int(1),
                line: 3,
            },
            line: 3,
        };
        assert_eq!(assign.line(), 3);

        let ret = Stmt::Return {
            value: None,
            line: 7,
        };
        assert_eq!(ret.line(), 7);
    }

    #[test]
    fn unsupported_literal_detection() {
        let none_lit = Expr::Constant {
            value: ConstantValue::NoneLiteral,
            line: 1,
        };
        assert!(none_lit.is_unsupported_literal());

        let name = Expr::Name {
            id: "x".into(),
            line: 1,
        };
        assert!(!name.is_unsupported_literal());

        let int_lit = Expr::Constant {
            value: ConstantValue::Int(5),
            line: 1,
        };
        assert!(!int_lit.is_unsupported_literal());
    }

    #[test]
    fn elif_chain_detection() {
        let nested_if = Stmt::If {
            test: Expr::Name {
                id: "x".into(),
                line: 2,
            },
            body: vec![],
            orelse: vec![],
            line: 2,
            end_line: 2,
        };
        assert!(is_elif_chain(&[nested_if.clone()]));
        assert!(!is_elif_chain(&[nested_if.clone(), nested_if]));
        assert!(!is_elif_chain(&[]));
    }
}
