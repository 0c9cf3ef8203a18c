//! Case tables for the field kinds, through the public API.

use rstest::rstest;
use warden_validator::prelude::*;

fn clean(rule: impl Into<FieldRule>, value: impl Into<Value>) -> Result<Value, ValidationError> {
    rule.into().validate(&value.into())
}

// ============================================================================
// BOOLEAN
// ============================================================================

#[rstest]
#[case::native_true(Value::from(true), true)]
#[case::native_false(Value::from(false), false)]
#[case::one(Value::from(1), true)]
#[case::zero(Value::from(0), false)]
#[case::text_one(Value::from("1"), true)]
#[case::text_zero(Value::from("0"), false)]
#[case::lower_true(Value::from("true"), true)]
#[case::lower_false(Value::from("false"), false)]
#[case::title_true(Value::from("True"), true)]
#[case::title_false(Value::from("False"), false)]
fn boolean_coercion(#[case] input: Value, #[case] expected: bool) {
    assert_eq!(clean(BooleanField::new(), input), Ok(Value::Boolean(expected)));
}

#[rstest]
#[case(Value::from(2))]
#[case(Value::from("TRUE"))]
#[case(Value::from("yes"))]
#[case(Value::from(1.0))]
#[case(Value::Array(vec![]))]
fn boolean_rejects(#[case] input: Value) {
    let err = clean(BooleanField::new(), input).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidFormat);
    assert_eq!(err.message, "Value invalid");
}

// ============================================================================
// EMAIL
// ============================================================================

#[rstest]
#[case("virusdefender@qq.com")]
#[case("123@qq.aa.com")]
#[case("user@staff.qq.com.cn")]
#[case("first.last+tag@example.org")]
#[case("root@localhost")]
#[case("ops@[192.168.0.1]")]
#[case("user@例え.jp")]
fn email_accepts(#[case] input: &str) {
    assert_eq!(clean(EmailField::new(), input), Ok(Value::from(input)));
}

#[rstest]
#[case::no_at("123#qq.com", ErrorKind::InvalidFormat)]
#[case::short("123@", ErrorKind::TooShort)]
#[case::no_tld("user@qq", ErrorKind::InvalidFormat)]
#[case::double_dot("a..b@qq.com", ErrorKind::InvalidFormat)]
#[case::leading_hyphen("user@-qq.com", ErrorKind::InvalidFormat)]
#[case::bad_ipv4("user@[300.1.1.1]", ErrorKind::InvalidFormat)]
fn email_rejects(#[case] input: &str, #[case] kind: ErrorKind) {
    assert_eq!(clean(EmailField::new(), input).unwrap_err().kind, kind);
}

#[test]
fn email_type_is_checked_first() {
    let err = clean(EmailField::new(), 12345).unwrap_err();
    assert_eq!(err.kind, ErrorKind::TypeMismatch);
    assert_eq!(err.message, "Must be a string");
}

// ============================================================================
// URL
// ============================================================================

#[rstest]
#[case("http://baidu.com")]
#[case("https://baidu.com")]
#[case("ftp://baidu.com")]
#[case("ftps://baidu.com/")]
#[case("http://8.8.8.8:8080")]
#[case("http://localhost:8000/admin")]
#[case("http://[::1]:8080/x")]
#[case("https://example.com/path?q=1")]
#[case("http://例え.jp/path")]
fn url_accepts(#[case] input: &str) {
    assert_eq!(clean(UrlField::new(), input), Ok(Value::from(input)));
}

#[rstest]
#[case("baidu.com")]
#[case("htt://baidu.com")]
#[case("https//baidu.com")]
#[case("http://-bad.com")]
#[case("http://a..b.com")]
#[case("http://example.com/a b")]
fn url_rejects(#[case] input: &str) {
    let err = clean(UrlField::new(), input).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidFormat);
    assert_eq!(err.message, "URL format invalid");
}

#[test]
fn url_max_length() {
    let err = clean(UrlField::new().max_length(10), "https://baidu.com").unwrap_err();
    assert_eq!(err.kind, ErrorKind::TooLong);
}

// ============================================================================
// NUMBERS
// ============================================================================

#[rstest]
#[case::integral_float(Value::from(30.0))]
#[case::boolean(Value::from(true))]
#[case::text(Value::from("30"))]
fn integer_type_mismatch(#[case] input: Value) {
    let err = clean(IntegerField::new(), input).unwrap_err();
    assert_eq!(err.kind, ErrorKind::TypeMismatch);
    assert_eq!(err.message, "Must be an integer");
}

#[rstest]
#[case(17, Some("Value is too small"))]
#[case(18, None)]
#[case(100, None)]
#[case(101, Some("Value is too large"))]
fn integer_bounds(#[case] input: i64, #[case] message: Option<&str>) {
    let result = clean(IntegerField::new().range(18, 100), input);
    match message {
        None => assert_eq!(result, Ok(Value::Integer(input))),
        Some(message) => assert_eq!(result.unwrap_err().message, message),
    }
}

#[test]
fn float_rejects_integers() {
    assert_eq!(
        clean(FloatField::new(), 1).unwrap_err().kind,
        ErrorKind::TypeMismatch
    );
    assert_eq!(clean(FloatField::new(), 1.5), Ok(Value::Float(1.5)));
}
