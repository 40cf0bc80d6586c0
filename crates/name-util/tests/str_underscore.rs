use name_util::str::underscore;
use pretty_assertions::assert_eq;

// ---------------------------------------------------------------------------
// Case boundaries
// ---------------------------------------------------------------------------

#[test]
fn underscore_empty() {
    assert_eq!(underscore(""), "");
}

#[test]
fn underscore_lower_camel() {
    assert_eq!(underscore("fooBar"), "foo_bar");
}

#[test]
fn underscore_upper_camel() {
    assert_eq!(underscore("FooBarBaz"), "foo_bar_baz");
}

#[test]
fn underscore_digit_before_upper() {
    assert_eq!(underscore("field1Name"), "field1_name");
    assert_eq!(underscore("v2API"), "v2_api");
}

// ---------------------------------------------------------------------------
// Uppercase runs
// ---------------------------------------------------------------------------

#[test]
fn underscore_acronym_not_split() {
    assert_eq!(underscore("HTTPServer"), "httpserver");
}

#[test]
fn underscore_acronym_after_lower() {
    assert_eq!(underscore("myHTTPServer"), "my_httpserver");
}

#[test]
fn underscore_single_letters() {
    assert_eq!(underscore("aBcD"), "a_bc_d");
}

// ---------------------------------------------------------------------------
// No transitions
// ---------------------------------------------------------------------------

#[test]
fn underscore_already_lower() {
    assert_eq!(underscore("already_snake"), "already_snake");
}

#[test]
fn underscore_all_upper() {
    assert_eq!(underscore("ID"), "id");
}

#[test]
fn underscore_existing_separator_kept() {
    assert_eq!(underscore("Foo_Bar"), "foo_bar");
    assert_eq!(underscore("foo bar"), "foo bar");
}
