pub mod cases;

pub use cases::{EvalCase, demo_cases};

pub fn queries(cases: &[EvalCase]) -> Vec<String> {
    cases.iter().map(|c| c.query.to_string()).collect()
}

pub fn references(cases: &[EvalCase]) -> Vec<String> {
    cases.iter().map(|c| c.reference.to_string()).collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
