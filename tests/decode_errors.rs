use searchdata::{decode_fragment, SearchDataError};

fn syntax_msg(input: &str) -> (usize, usize, String) {
    match decode_fragment(input).unwrap_err() {
        SearchDataError::Syntax { line, column, msg } => (line, column, msg),
        other => panic!("expected syntax error, got {other}"),
    }
}

#[test]
fn empty_input() {
    let (line, column, msg) = syntax_msg("");
    assert_eq!((line, column), (1, 1));
    assert!(msg.contains("expected 'var'"));
}

#[test]
fn missing_prelude() {
    let (_, _, msg) = syntax_msg("[['a',['A']]];");
    assert!(msg.contains("expected 'var'"));
}

#[test]
fn wrong_variable_name() {
    let (_, _, msg) = syntax_msg("var search_data=[];");
    assert!(msg.contains("expected 'searchData'"));
}

#[test]
fn missing_assignment() {
    let (_, _, msg) = syntax_msg("var searchData [];");
    assert!(msg.contains("expected '='"));
}

#[test]
fn truncated_after_entry() {
    let (_, _, msg) = syntax_msg("var searchData=[['a',['A',['u',1,'Q']]]");
    assert!(msg.contains("end of input"));
}

#[test]
fn missing_semicolon() {
    let (_, _, msg) = syntax_msg("var searchData=[]");
    assert!(msg.contains("expected ';'"));
}

#[test]
fn unterminated_string_at_eof() {
    let (_, _, msg) = syntax_msg("var searchData=[['abc");
    assert!(msg.contains("unterminated string"));
}

#[test]
fn double_quoted_strings_are_rejected() {
    let (_, _, msg) = syntax_msg("var searchData=[[\"a\",['A',['u',1,'Q']]]];");
    assert!(msg.contains("expected string"));
}

#[test]
fn invalid_escape() {
    let (_, _, msg) = syntax_msg("var searchData=[['a\\t',['A',['u',1,'Q']]]];");
    assert!(msg.contains("invalid escape"));
}

#[test]
fn scope_flag_must_be_numeric() {
    let (_, _, msg) = syntax_msg("var searchData=[['a',['A',['u','1','Q']]]];");
    assert!(msg.contains("expected scope flag"));
}

#[test]
fn scope_flag_range() {
    let (_, _, msg) = syntax_msg("var searchData=[['a',['A',['u',300,'Q']]]];");
    assert!(msg.contains("out of range"));
}

#[test]
fn target_with_missing_field() {
    let (_, _, msg) = syntax_msg("var searchData=[['a',['A',['u',1]]]];");
    assert!(msg.contains("expected ','"));
}

#[test]
fn trailing_comma_in_table() {
    assert!(decode_fragment("var searchData=[['a',['A',['u',1,'Q']]],];").is_err());
}

#[test]
fn junk_after_terminator() {
    let (line, _, msg) = syntax_msg("var searchData=\n[\n];\nwindow.reload();\n");
    assert_eq!(line, 4);
    assert!(msg.contains("trailing"));
}

#[test]
fn error_positions_are_one_based() {
    // The stray '?' sits at line 3, column 3.
    let (line, column, msg) = syntax_msg("var searchData=\n[\n  ?['a',['A']]\n];");
    assert_eq!((line, column), (3, 3));
    assert!(msg.contains("expected"));
}
