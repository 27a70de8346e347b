//! Analysis tunables spec.md §9 asks implementers to expose rather than
//! hard-code, plus the call-inlining recursion bound this crate adds as
//! a supplement (spec.md is silent on recursive locally-defined
//! functions; see SPEC_FULL.md §4.5 and DESIGN.md).

use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct Policy {
    /// Flag a call site when an argument's *source expression* is the
    /// literal `None` (or another unsupported literal) — not merely when
    /// it evaluates to `Unknown` via an unresolved name. spec.md §9
    /// resolves this Open Question in favor of the literal-only reading.
    pub flag_none_args: bool,

    /// Names resolved against an external, pre-supplied allowlist
    /// instead of the decision procedure's own introspection (spec.md
    /// §9's redesign note): calls to these names are treated as
    /// best-effort no-ops and never flagged as unresolved.
    pub known_builtins: HashSet<String>,

    /// Bounds how many nested call-inlining frames (spec.md §4.5) this
    /// evaluator will push before giving up and treating a call as
    /// `Unknown`, to keep a recursive analyzed program from recursing
    /// the analyzer itself without bound.
    pub max_call_depth: usize,
}

impl Policy {
    pub fn default_known_builtins() -> HashSet<String> {
        ["print", "len", "range"].into_iter().map(String::from).collect()
    }
}

impl Default for Policy {
    fn default() -> Self {
        Policy {
            flag_none_args: true,
            known_builtins: Policy::default_known_builtins(),
            max_call_depth: 64,
        }
    }
}
