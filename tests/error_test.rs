//! Tests for error types

use trialstat::condition::{condition_index, CONDITION_KEYS};
use trialstat::Error;

#[test]
fn test_parse_error() {
    let error = Error::Parse {
        line: 7,
        message: "expected 6 fields, found 4".to_string(),
    };
    let error_str = format!("{error}");
    assert!(error_str.contains("Trial parse error on line 7"));
    assert!(error_str.contains("found 4"));
}

#[test]
fn test_trial_file_error_keeps_source() {
    let error = Error::Parse {
        line: 2,
        message: "bad".to_string(),
    }
    .in_trial_file("a1/t1.txt");
    let error_str = format!("{error}");
    assert!(error_str.contains("a1/t1.txt"));
    assert!(error_str.contains("line 2"));

    let source = std::error::Error::source(&error).expect("source attached");
    assert!(source.to_string().contains("Trial parse error"));
}

#[test]
fn test_unknown_condition_error() {
    let error = condition_index("c3").unwrap_err();
    let error_str = format!("{error}");
    assert!(error_str.contains("'c3'"));
    assert!(error_str.contains("not found in list"));
    for key in CONDITION_KEYS {
        assert!(error_str.contains(key));
    }
}

#[test]
fn test_invalid_input_error() {
    let error = Error::InvalidInput("RT window inverted".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("Invalid input"));
    assert!(error_str.contains("RT window inverted"));
}

#[test]
fn test_chart_error() {
    let error = Error::Chart("backend closed".to_string());
    assert!(format!("{error}").contains("Chart rendering failed"));
}

#[test]
fn test_io_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error: Error = io_error.into();
    let error_str = format!("{error}");
    assert!(error_str.contains("IO error"));
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let error: Error = json_error.into();
    assert!(matches!(error, Error::Json(_)));
    assert!(format!("{error}").contains("JSON error"));
}

#[test]
fn test_other_error() {
    let error = Error::Other("custom error message".to_string());
    let error_str = format!("{error}");
    assert_eq!(error_str, "custom error message");
}

#[test]
fn test_error_debug() {
    let error = Error::Chart("x".to_string());
    let debug_str = format!("{error:?}");
    assert!(debug_str.contains("Chart"));
}

#[test]
fn test_result_type_alias_error() {
    fn returns_error() -> trialstat::Result<i32> {
        Err(Error::Other("test error".to_string()))
    }

    let result = returns_error();
    assert!(result.is_err());
}
