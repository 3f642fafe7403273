//! Integration tests for lox-common crate.

use lox_common::LineIndex;

#[test]
fn test_line_index_matches_source_lines() {
    let source = "var a = 1;\nprint a;\n";
    let index = LineIndex::new(source);

    assert_eq!(&source[index.line_range(1)], "var a = 1;");
    assert_eq!(&source[index.line_range(2)], "print a;");
    assert_eq!(&source[index.line_range(3)], "");
}

#[test]
fn test_line_index_crlf_keeps_carriage_return() {
    let source = "a\r\nb";
    let index = LineIndex::new(source);
    assert_eq!(&source[index.line_range(1)], "a\r");
    assert_eq!(&source[index.line_range(2)], "b");
}

#[test]
fn test_line_index_multibyte_lines() {
    let source = "ééé\nab @";
    let index = LineIndex::new(source);
    assert_eq!(&source[index.line_range(1)], "ééé");
    assert_eq!(&source[index.line_range(2)], "ab @");
}
