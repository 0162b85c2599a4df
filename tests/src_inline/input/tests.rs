use super::*;

#[test]
fn test_demo_cases_are_paired() {
    let cases = demo_cases();
    assert_eq!(cases.len(), 3);
    assert_eq!(queries(cases).len(), references(cases).len());
}

#[test]
fn test_demo_case_order_is_stable() {
    let qs = queries(demo_cases());
    assert_eq!(qs[0], "Where can I find tutoring support for my courses?");
    assert_eq!(qs[1], "How do I contact the financial aid office?");
    assert_eq!(qs[2], "What resources are available for mental health?");

    let refs = references(demo_cases());
    assert!(refs[1].contains("finaid@university.edu"));
}

#[test]
fn test_demo_cases_have_no_blank_text() {
    for case in demo_cases() {
        assert!(!case.query.trim().is_empty());
        assert!(!case.reference.trim().is_empty());
    }
}
