#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalCase {
    pub query: &'static str,
    pub reference: &'static str,
}

const DEMO_CASES: &[EvalCase] = &[
    EvalCase {
        query: "Where can I find tutoring support for my courses?",
        reference: "You can find tutoring support at the academic resource center.",
    },
    EvalCase {
        query: "How do I contact the financial aid office?",
        reference: "You can contact the financial aid office via email at finaid@university.edu.",
    },
    EvalCase {
        query: "What resources are available for mental health?",
        reference: "Mental health resources are available at the counseling center.",
    },
];

pub fn demo_cases() -> &'static [EvalCase] {
    DEMO_CASES
}
