//! Proptest strategies for generating header content
//!
//! This module provides strategies for property-based testing of the
//! header writer and the condition language.

use proptest::prelude::*;

// ════════════════════════════════════════════════════════════
// Basic Strategies
// ════════════════════════════════════════════════════════════

/// Generate valid macro names (C-style, upper case)
pub fn symbol() -> impl Strategy<Value = String> {
    "[A-Z_][A-Z0-9_]{0,30}".prop_map(|s| s.to_string())
}

/// Generate include guard names
pub fn guard_name() -> impl Strategy<Value = String> {
    "[A-Z][A-Z0-9_]{0,20}_H".prop_map(|s| s.to_string())
}

/// Generate macro values as they would appear in C
pub fn macro_value() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<i64>().prop_map(|v| v.to_string()),
        (0u32..0xFFFF).prop_map(|v| format!("0x{:X}", v)),
        "[a-z]{1,12}".prop_map(|s| format!("\"{}\"", s)),
    ]
}

// ════════════════════════════════════════════════════════════
// Composite Strategies
// ════════════════════════════════════════════════════════════

/// One writer call
#[derive(Debug, Clone)]
pub enum Op {
    Define(String, String),
    DefineIf(String, bool, String),
    Select(String, bool, String, String),
    NewLine,
}

/// Generate a single writer call
pub fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (symbol(), macro_value()).prop_map(|(s, v)| Op::Define(s, v)),
        (symbol(), any::<bool>(), macro_value()).prop_map(|(s, c, v)| Op::DefineIf(s, c, v)),
        (symbol(), any::<bool>(), macro_value(), macro_value())
            .prop_map(|(s, c, a, b)| Op::Select(s, c, a, b)),
        Just(Op::NewLine),
    ]
}

/// Generate a sequence of writer calls (0-20)
pub fn ops() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(op(), 0..20)
}

/// Generate a condition expression over the given feature names
pub fn condition(names: Vec<&'static str>) -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        prop::sample::select(names.clone()).prop_map(|n| n.to_string()),
        prop::sample::select(names).prop_map(|n| format!("defined({})", n)),
        Just("0".to_string()),
        Just("1".to_string()),
    ];

    leaf.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|e| format!("!({})", e)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("({}) && ({})", a, b)),
            (inner.clone(), inner).prop_map(|(a, b)| format!("({}) || ({})", a, b)),
        ]
    })
}
