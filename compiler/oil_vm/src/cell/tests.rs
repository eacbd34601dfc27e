use super::*;
use pretty_assertions::assert_eq;

#[test]
fn grammar_accepts_plain_literals() {
    for text in ["0", "7", "-5", "42", "-1234567890"] {
        assert!(is_strict_integer(text), "{text} should be an integer");
    }
}

#[test]
fn grammar_rejects_padded_and_signed_zero() {
    for text in ["", "-", "00", "-0", "007", "+5", " 5", "5 ", "1.0", "1e3", "0x10", "--1"] {
        assert!(!is_strict_integer(text), "{text:?} should not be an integer");
    }
}

#[test]
fn classify_keeps_non_literals_as_strings() {
    assert_eq!(Cell::classify("0"), Cell::Int(0));
    assert_eq!(Cell::classify("-5"), Cell::Int(-5));
    assert_eq!(Cell::classify("00"), Cell::Str("00".into()));
    assert_eq!(Cell::classify("-0"), Cell::Str("-0".into()));
    assert_eq!(Cell::classify("hello"), Cell::Str("hello".into()));
}

#[test]
fn classify_keeps_overflowing_literals_as_strings() {
    let huge = "99999999999999999999";
    assert_eq!(Cell::classify(huge), Cell::Str(huge.into()));
    assert_eq!(Cell::classify(huge).intify(), 0);
    assert_eq!(Cell::classify("-9223372036854775808"), Cell::Int(i64::MIN));
}

#[test]
fn intify_never_fails() {
    assert_eq!(Cell::Int(-3).intify(), -3);
    assert_eq!(Cell::from("12").intify(), 12);
    assert_eq!(Cell::from("00").intify(), 0);
    assert_eq!(Cell::from("-0").intify(), 0);
    assert_eq!(Cell::from("abc").intify(), 0);
    assert_eq!(Cell::from("").intify(), 0);
}

#[test]
fn normalized_reclassifies_strings_only() {
    assert_eq!(Cell::from("15").normalized(), Cell::Int(15));
    assert_eq!(Cell::from("015").normalized(), Cell::from("015"));
    assert_eq!(Cell::Int(3).normalized(), Cell::Int(3));
}

#[test]
fn display_is_verbatim() {
    assert_eq!(Cell::Int(-72).to_string(), "-72");
    assert_eq!(Cell::from("a # b").to_string(), "a # b");
}

#[test]
fn repr_quotes_strings() {
    assert_eq!(Cell::Int(5).repr(), "5");
    assert_eq!(Cell::from("hi").repr(), "\"hi\"");
}

#[test]
fn int_and_string_never_compare_equal() {
    assert_ne!(Cell::Int(5), Cell::from("5"));
}
