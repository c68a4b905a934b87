//! Integration tests for quoted-string splitting

use props_map::{TokenizeError, split_quoted_string};

#[test]
fn test_split_quoted_string() {
    let res = split_quoted_string(r#"this is a "test of quoting" another test"#, "\"", true)
        .unwrap();
    assert_eq!(
        res.as_slice(),
        ["this", "is", "a", "test of quoting", "another", "test"]
    );
}

#[test]
fn test_split_quoted_string_mixed_quotes() {
    let res = split_quoted_string(
        r#"this is a "test 'of' quoting" 'another test' "that's it""#,
        "\"'",
        true,
    )
    .unwrap();
    assert_eq!(
        res.as_slice(),
        ["this", "is", "a", "test 'of' quoting", "another test", "that's it"]
    );
}

#[test]
fn test_split_quoted_string_empty_args_allowed() {
    let res = split_quoted_string(r#"this   is  a " test 'of' quoting " "#, "\"'", true).unwrap();
    assert_eq!(
        res.as_slice(),
        ["this", "", "", "is", "", "a", " test 'of' quoting ", ""]
    );

    let res = split_quoted_string(r#"this   is  a " test 'of' quoting " "#, "\"'", false).unwrap();
    assert_eq!(res.as_slice(), ["this", "is", "a", " test 'of' quoting "]);
}

#[test]
fn test_split_quoted_string_with_utf8() {
    let res = split_quoted_string("èthis is a testè of quoting", "è", true).unwrap();
    assert_eq!(res.as_slice(), ["this is a test", "of", "quoting"]);
}

#[test]
fn test_split_quoted_string_invalid() {
    let result = split_quoted_string("'this is' a 'test of quoting", "\"'", true);
    assert!(matches!(
        result,
        Err(TokenizeError::UnterminatedQuote { .. })
    ));

    let result = split_quoted_string(r#"'this is' a "'test" of "quoting"#, "\"'", true);
    assert!(matches!(
        result,
        Err(TokenizeError::UnterminatedQuote { .. })
    ));
}
