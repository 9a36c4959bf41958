use podctl::{ParseError, parse_ram_in_human};

#[test]
fn empty_is_zero() {
    assert_eq!(parse_ram_in_human("").unwrap(), 0);
}

#[test]
fn kilobyte_is_1024() {
    assert_eq!(parse_ram_in_human("1KB").unwrap(), 1024);
    assert_eq!(parse_ram_in_human("100KB").unwrap(), 102_400);
}

#[test]
fn negative_sizes_mirror_positive_ones() {
    assert_eq!(parse_ram_in_human("-1KB").unwrap(), -1024);
    assert_eq!(parse_ram_in_human("-1GB").unwrap(), -1_073_741_824);
    assert_eq!(parse_ram_in_human("-1").unwrap(), -1);
}

#[test]
fn garbage_is_a_size_error() {
    let err = parse_ram_in_human("notanumber").unwrap_err();
    assert!(matches!(err, ParseError::Size { ref input } if input == "notanumber"));
    assert_eq!(err.to_string(), r#"invalid size: "notanumber""#);
}
