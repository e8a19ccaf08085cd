//! Integration tests for the value guards.

use std::collections::{BTreeMap, VecDeque};

use pretty_assertions::assert_eq;
use precond::prelude::*;
use rstest::rstest;

// ============================================================================
// NULL FAMILY
// ============================================================================

#[rstest]
#[case::plain("x")]
#[case::dotted("request.body")]
#[case::empty_label("")]
fn null_family_keeps_supplied_name(#[case] name: &str) {
    let err = not_null(name, None::<u8>).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NullArgument);
    assert_eq!(err.name(), name);

    let err = not_null_or_empty(name, None::<Vec<u8>>).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NullArgument);
    assert_eq!(err.name(), name);

    let err = not_null_and_cast::<u8>(name, None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NullArgument);
    assert_eq!(err.name(), name);
}

#[test]
fn not_null_returns_value_unchanged() {
    let items = vec![1, 2, 3];
    let got = not_null("items", Some(&items)).unwrap();
    assert!(std::ptr::eq(got, &items));
}

// ============================================================================
// EMPTY FAMILY
// ============================================================================

#[test]
fn empty_string_is_rejected_with_fixed_message() {
    let err = not_null_or_empty("x", Some("")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentEmpty);
    assert_eq!(err.name(), "x");
    assert_eq!(err.message(), "Value can not be empty");
}

#[test]
fn empty_collections_are_rejected() {
    assert_eq!(
        not_null_or_empty("v", Some(Vec::<u8>::new())).unwrap_err().kind(),
        ErrorKind::ArgumentEmpty
    );
    assert_eq!(
        not_null_or_empty("q", Some(VecDeque::<u8>::new())).unwrap_err().kind(),
        ErrorKind::ArgumentEmpty
    );
    assert_eq!(
        not_null_or_empty("m", Some(BTreeMap::<u8, u8>::new())).unwrap_err().kind(),
        ErrorKind::ArgumentEmpty
    );
    assert_eq!(
        not_null_or_empty("s", Some(&[] as &[u8])).unwrap_err().kind(),
        ErrorKind::ArgumentEmpty
    );
}

#[test]
fn non_empty_collections_pass_through() {
    let map = not_null_or_empty("m", Some(BTreeMap::from([(1, "a")]))).unwrap();
    assert_eq!(map.len(), 1);
    let slice = not_null_or_empty("s", Some(&[9_u8][..])).unwrap();
    assert_eq!(slice, &[9]);
}

#[test]
fn reiterable_container_is_probed_without_consuming() {
    let words = BTreeMap::from([("a", 1), ("b", 2)]);
    let words = not_empty("words", Reiterable(words)).unwrap().into_inner();
    assert_eq!(words.len(), 2);
    assert!(not_empty("words", Reiterable(BTreeMap::<u8, u8>::new())).is_err());
}

// ============================================================================
// TYPE FAMILY
// ============================================================================

#[test]
fn cast_succeeds_for_exact_type() {
    let value: Box<dyn Object> = Box::new(vec![1_u8]);
    assert_eq!(cast::<Vec<u8>>("v", &*value).unwrap(), &vec![1]);
}

#[test]
fn cast_failure_names_value_and_target() {
    let value: &dyn Object = &42_i32;
    let err = cast::<u64>("answer", value).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentType);
    assert_eq!(err.name(), "answer");
    assert_eq!(err.message(), "The value \"42\" isn't of type \"u64\".");
    assert_eq!(
        err.mismatch(),
        Some(&TypeMismatch::Cast {
            value: "42".into(),
            target: "u64".into(),
        })
    );
}

#[test]
fn not_null_and_cast_checks_presence_first() {
    let value = String::from("abc");
    let got = not_null_and_cast::<String>("s", Some(&value)).unwrap();
    assert_eq!(got, "abc");
    assert_eq!(
        not_null_and_cast::<u8>("s", Some(&value)).unwrap_err().kind(),
        ErrorKind::ArgumentType
    );
}

// ============================================================================
// RANGE FAMILY
// ============================================================================

#[rstest]
#[case::below(-1, false)]
#[case::lower_edge(0, true)]
#[case::inside(5, true)]
#[case::upper_edge(10, true)]
#[case::above(11, false)]
fn not_out_of_range_is_inclusive(#[case] value: i32, #[case] ok: bool) {
    assert_eq!(not_out_of_range("x", value, 0, 10).is_ok(), ok);
}

#[rstest]
#[case::negative(-1, false, false)]
#[case::zero(0, true, false)]
#[case::positive(1, true, true)]
fn sign_guards(#[case] value: i64, #[case] or_zero: bool, #[case] non_zero: bool) {
    assert_eq!(positive_or_zero("x", value).is_ok(), or_zero);
    assert_eq!(positive_non_zero("x", value).is_ok(), non_zero);
}

#[test]
fn range_failures_render_their_templates() {
    let between = not_out_of_range("x", 11, 0, 10).unwrap_err();
    assert_eq!(between.name(), "x");
    assert_eq!(between.message(), "Argument 'x' should be between 0 and 10");
    assert_eq!(
        between.to_string(),
        "Argument 'x' should be between 0 and 10 (Parameter 'x')"
    );

    let at_least = not_less("x", 0_u8, 1).unwrap_err();
    assert_eq!(
        at_least.message(),
        "Argument 'x' should be greater than or equal 1"
    );

    let at_most = not_greater("x", 'z', 'm').unwrap_err();
    assert_eq!(at_most.message(), "Argument 'x' should be less than m");

    let or_zero = positive_or_zero("count", -3).unwrap_err();
    assert_eq!(
        or_zero.message(),
        "Argument count must be positive or zero. Actual value was -3."
    );
}

#[test]
fn comparator_decides_ordering() {
    let case_insensitive = |a: &String, b: &String| a.to_lowercase().cmp(&b.to_lowercase());
    let got = not_out_of_range_by(
        "name",
        "MIDDLE".to_owned(),
        "alpha".to_owned(),
        "omega".to_owned(),
        case_insensitive,
    )
    .unwrap();
    assert_eq!(got, "MIDDLE");
    let (min, max) = ("alpha".to_owned(), "omega".to_owned());
    assert!(not_out_of_range("name", "MIDDLE".to_owned(), min, max).is_err());
}

#[test]
fn chrono_instants_are_ordered() {
    use chrono::{TimeZone, Utc};

    let open = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();
    let close = Utc.with_ymd_and_hms(2025, 1, 1, 17, 0, 0).unwrap();
    let late = Utc.with_ymd_and_hms(2025, 1, 1, 18, 30, 0).unwrap();
    let err = not_out_of_range("at", late, open, close).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentOutOfRange);
    assert_eq!(
        err.bound(),
        Some(&RangeBound::Between {
            min: open.to_string(),
            max: close.to_string(),
        })
    );
}

// ============================================================================
// PATTERN FAMILY
// ============================================================================

#[test]
fn pattern_respects_case_option() {
    let err = matches("x", "A123Z", "^a[0-9].z$", RegexOptions::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentFormat);
    assert_eq!(err.name(), "x");

    let got = matches("x", "A123Z", "^a[0-9]*z$", RegexOptions::IGNORE_CASE).unwrap();
    assert_eq!(got, "A123Z");
    let got = matches("x", "a123z", "a[0-9]*z", RegexOptions::IGNORE_CASE).unwrap();
    assert_eq!(got, "a123z");
}

#[test]
fn pattern_options_combine() {
    let options = RegexOptions::IGNORE_CASE | RegexOptions::MULTILINE;
    assert!(matches("log", "info: ok\nERROR: boom", "^error:", options).is_ok());
    assert!(matches("log", "info: ok\nERROR: boom", "^error:", RegexOptions::IGNORE_CASE).is_err());
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn scenario_null_then_empty_then_range() {
    assert_eq!(
        not_null("x", None::<&str>).unwrap_err().kind(),
        ErrorKind::NullArgument
    );
    assert_eq!(
        not_null_or_empty("x", Some("")).unwrap_err().kind(),
        ErrorKind::ArgumentEmpty
    );
    assert_eq!(
        positive_non_zero("x", 0).unwrap_err().kind(),
        ErrorKind::ArgumentOutOfRange
    );
    assert_eq!(positive_non_zero("x", 1).unwrap(), 1);
    assert_eq!(
        not_out_of_range("x", 11, 0, 10).unwrap_err().kind(),
        ErrorKind::ArgumentOutOfRange
    );
    assert_eq!(not_out_of_range("x", 5, 0, 10).unwrap(), 5);
}

#[test]
fn guards_compose_with_question_mark() {
    fn configure(workers: Option<u32>, label: &str) -> GuardResult<(u32, &str)> {
        let workers = not_null("workers", workers)?;
        let workers = positive_non_zero("workers", workers)?;
        let label = matches("label", label, r"^[a-z][a-z0-9-]*$", RegexOptions::empty())?;
        Ok((workers, label))
    }

    assert_eq!(configure(Some(4), "pool-a").unwrap(), (4, "pool-a"));
    assert_eq!(configure(None, "pool-a").unwrap_err().name(), "workers");
    assert_eq!(configure(Some(4), "Pool A").unwrap_err().name(), "label");
}
