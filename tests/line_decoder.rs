use bmfont_reader::bmfont::{decode, LineError, RawValue, RecordTag, ValueError};

fn fields_of(line: &str) -> Vec<(String, String)> {
    decode(line)
        .expect("decodes")
        .expect("not blank")
        .fields()
        .map(|(k, v)| (k.to_string(), v.as_str().to_string()))
        .collect()
}

fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn splits_header_and_fields_in_order() {
    let decoded = decode("char id=65 x=1 y=2 width=3").unwrap().unwrap();
    assert_eq!(decoded.header(), "char");
    assert_eq!(decoded.tag(), RecordTag::Char);
    assert_eq!(decoded.len(), 4);
    assert_eq!(
        fields_of("char id=65 x=1 y=2 width=3"),
        pairs(&[("id", "65"), ("x", "1"), ("y", "2"), ("width", "3")])
    );
}

#[test]
fn blank_lines_decode_to_nothing() {
    assert_eq!(decode(""), Ok(None));
    assert_eq!(decode("   \t  "), Ok(None));
}

#[test]
fn header_without_fields_is_an_error() {
    assert_eq!(
        decode("  info  "),
        Err(LineError::MissingFields {
            header: "info".to_string()
        })
    );
}

#[test]
fn quoted_values_keep_spaces_and_lose_quotes() {
    assert_eq!(
        fields_of(r#"info face="Times New Roman" size=32"#),
        pairs(&[("face", "Times New Roman"), ("size", "32")])
    );
}

#[test]
fn quoted_values_keep_equals_signs() {
    assert_eq!(
        fields_of(r#"page id=0 file="a=b.png""#),
        pairs(&[("id", "0"), ("file", "a=b.png")])
    );
}

#[test]
fn quoted_empty_value_is_recorded() {
    assert_eq!(
        fields_of(r#"info charset="" unicode=1"#),
        pairs(&[("charset", ""), ("unicode", "1")])
    );
}

#[test]
fn unclosed_quote_runs_to_end_of_line() {
    assert_eq!(
        fields_of(r#"page id=0 file="a b.png"#),
        pairs(&[("id", "0"), ("file", "a b.png")])
    );
}

#[test]
fn trailing_key_without_value_is_recorded_empty() {
    assert_eq!(
        fields_of("page id=0 file="),
        pairs(&[("id", "0"), ("file", "")])
    );
    assert_eq!(fields_of("page id=0 file"), pairs(&[("id", "0")]));
}

#[test]
fn repeated_spaces_between_fields_are_ignored() {
    assert_eq!(
        fields_of("char id=32   x=0     y=0\tpage=0"),
        pairs(&[("id", "32"), ("x", "0"), ("y", "0"), ("page", "0")])
    );
}

#[test]
fn stray_space_inside_bare_key_is_not_a_separator() {
    assert_eq!(fields_of("char i d=7"), pairs(&[("id", "7")]));
}

#[test]
fn trailing_pair_is_flushed_at_end_of_line() {
    assert_eq!(
        fields_of("kerning first=65 second=86 amount=-2"),
        pairs(&[("first", "65"), ("second", "86"), ("amount", "-2")])
    );
}

#[test]
fn repeated_key_keeps_position_and_takes_last_value() {
    assert_eq!(
        fields_of("char id=1 x=5 id=2"),
        pairs(&[("id", "2"), ("x", "5")])
    );
}

#[test]
fn unknown_header_is_reported_as_other() {
    let decoded = decode("foobar key=1").unwrap().unwrap();
    assert_eq!(decoded.tag(), RecordTag::Other("foobar"));
    assert_eq!(decoded.tag().to_string(), "foobar");
    assert_eq!(decoded.get("key").map(RawValue::as_str), Some("1"));
}

#[test]
fn raw_values_convert_lazily() {
    assert_eq!(RawValue::new("-32").as_int::<i32>(), Ok(-32));
    assert_eq!(RawValue::new("0").as_flag(), Ok(false));
    assert_eq!(RawValue::new("2").as_flag(), Ok(true));
    assert_eq!(RawValue::new("1,2,3,4").as_int_array::<i32, 4>(','), Ok([1, 2, 3, 4]));
}

#[test]
fn raw_value_rejects_non_numeric_text() {
    let err = RawValue::new("abc").as_int::<i32>().unwrap_err();
    assert!(
        matches!(err, ValueError::InvalidInteger { ref text, .. } if text == "abc"),
        "unexpected error {:?}",
        err
    );
    assert!(RawValue::new("-1").as_int::<u32>().is_err());
}

#[test]
fn raw_value_rejects_wrong_array_length() {
    assert_eq!(
        RawValue::new("1,2,3").as_int_array::<i32, 4>(','),
        Err(ValueError::ElementCount {
            expected: 4,
            found: 3,
            separator: ','
        })
    );
    assert!(RawValue::new("1,,3").as_int_array::<i32, 3>(',').is_err());
}
