use super::*;

#[test]
fn test_format_metric_four_decimals() {
    assert_eq!(format_metric(0.0), "0.0000");
    assert_eq!(format_metric(0.123456), "0.1235");
    assert_eq!(format_metric(42.0), "42.0000");
}

#[test]
fn test_format_metric_non_finite() {
    assert_eq!(format_metric(f64::NAN), "nan");
    assert_eq!(format_metric(f64::INFINITY), "inf");
    assert_eq!(format_metric(f64::NEG_INFINITY), "-inf");
}

#[test]
fn test_finite_or_none() {
    assert_eq!(finite_or_none(1.5), Some(1.5));
    assert_eq!(finite_or_none(f64::NAN), None);
    assert_eq!(finite_or_none(f64::INFINITY), None);
}
