#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use crate::pack::pack;
use crate::{ToStringFlags, TypeToken};
use pretty_assertions::assert_eq;

fn local() -> ScanOptions {
    ScanOptions::new()
}

fn signature() -> ScanOptions {
    ScanOptions::new().with_function_signature(true)
}

/// Read one type and return it packed, plus the text of the token left
/// in the stream.
fn read_type(source: &str, options: &ScanOptions) -> Option<(String, Option<String>)> {
    let mut recognizer = Recognizer::new(source, options, 1).unwrap();
    let ty = recognizer.read_type()?;
    let text = pack(ty.tokens.iter().map(|t| (t.kind(), t.text())));
    let next = recognizer.stream.next_token().map(|t| t.text.to_owned());
    Some((text, next))
}

fn type_text(source: &str) -> Option<String> {
    read_type(source, &local()).map(|(text, _)| text)
}

#[test]
fn test_type_stops_before_name() {
    assert_eq!(
        read_type("std::string name;", &local()),
        Some(("std::string".to_owned(), Some("name".to_owned())))
    );
    assert_eq!(
        read_type("int* p;", &local()),
        Some(("int".to_owned(), Some("*".to_owned())))
    );
}

#[test]
fn test_type_shapes() {
    assert_eq!(type_text("const Foo name").as_deref(), Some("const Foo"));
    assert_eq!(type_text("Foo name").as_deref(), Some("Foo"));
    assert_eq!(type_text("static Foo x").as_deref(), Some("static Foo"));
    assert_eq!(type_text("struct stat st").as_deref(), Some("struct stat"));
    assert_eq!(
        type_text("unsigned long long x").as_deref(),
        Some("unsigned long long")
    );
    assert_eq!(
        type_text("std::map<int, std::string>::iterator it").as_deref(),
        Some("std::map<int, std::string>::iterator")
    );
    assert_eq!(type_text("int a[4]").as_deref(), Some("int"));
}

#[test]
fn test_type_rejects_non_declarations() {
    assert_eq!(type_text("return x;"), None);
    assert_eq!(type_text("x = 5;"), None);
    assert_eq!(type_text("foo();"), None);
    assert_eq!(type_text("* p"), None);
    // Template never closed
    assert_eq!(type_text("vector<int x;"), None);
    assert_eq!(type_text(""), None);
}

#[test]
fn test_type_auto() {
    let options = local();
    let mut recognizer = Recognizer::new("const auto& x", &options, 1).unwrap();
    let ty = recognizer.read_type().unwrap();
    assert!(ty.is_auto);

    let mut recognizer = Recognizer::new("int x", &options, 1).unwrap();
    assert!(!recognizer.read_type().unwrap().is_auto);
}

#[test]
fn test_type_depth() {
    let options = local();
    let mut recognizer = Recognizer::new("Foo<Bar<int>> x", &options, 1).unwrap();
    let ty = recognizer.read_type().unwrap();
    let depths: Vec<u32> = ty.tokens.iter().map(TypeToken::depth).collect();
    assert_eq!(depths, vec![0, 0, 1, 1, 2, 2, 1]);
}

#[test]
fn test_type_decltype() {
    assert_eq!(
        read_type("decltype(a + b) c;", &local()),
        Some(("decltype(a+b)".to_owned(), Some("c".to_owned())))
    );
    assert_eq!(type_text("decltype x"), None);
}

#[test]
fn test_unnamed_parameter_type() {
    assert_eq!(
        read_type("int, char c", &signature()),
        Some(("int".to_owned(), Some(",".to_owned())))
    );
    assert_eq!(read_type("int, char c", &local()), None);
}

#[test]
fn test_name_with_assignment() {
    let options = local();
    let mut recognizer = Recognizer::new("*p = nullptr;", &options, 1).unwrap();
    let read = recognizer.read_name();
    assert_eq!(read.name, "p");
    assert_eq!(read.decoration, "*");
    assert_eq!(read.initializer, "nullptr");
    assert_eq!(read.line, Some(1));
    assert!(!read.has_more);
}

#[test]
fn test_name_with_more() {
    let options = local();
    let mut recognizer = Recognizer::new("a = f(1, 2), b;", &options, 1).unwrap();
    let read = recognizer.read_name();
    assert_eq!(read.name, "a");
    assert_eq!(read.initializer, "f(1, 2)");
    assert!(read.has_more);
    assert_eq!(recognizer.read_name().name, "b");
}

#[test]
fn test_name_bracketed_initializers() {
    let options = local();
    for (source, initializer) in [
        ("arr[10];", "[10]"),
        ("v{1, 2};", "{1, 2}"),
        ("w(a, b);", "(a, b)"),
        ("m(a < b), n;", "(a<b)"),
    ] {
        let mut recognizer = Recognizer::new(source, &options, 1).unwrap();
        let read = recognizer.read_name();
        assert_eq!(read.initializer, initializer, "{source}");
        assert!(!read.name.is_empty(), "{source}");
    }
}

#[test]
fn test_name_comparison_in_initializer() {
    let options = local();
    let mut recognizer = Recognizer::new("x = a < b; int y;", &options, 1).unwrap();
    let read = recognizer.read_name();
    assert_eq!(read.initializer, "a<b");
    assert_eq!(recognizer.stream.next_token().map(|t| t.text), Some(";"));

    let mut recognizer = Recognizer::new("x = make<int, char>(), y;", &options, 1).unwrap();
    let read = recognizer.read_name();
    assert_eq!(read.initializer, "make<int, char>()");
    assert!(read.has_more);
}

#[test]
fn test_name_before_function_body() {
    let options = local();
    let mut recognizer = Recognizer::new("f(int a, char* b) {", &options, 1).unwrap();
    let read = recognizer.read_name();
    assert_eq!(read.name, "");
    assert_eq!(read.initializer, "(int a, char*b)");
    assert_eq!(
        read.signature_source.map(|s| s.text),
        Some("(int a, char* b)")
    );
    assert_eq!(recognizer.stream.next_token().map(|t| t.text), Some("{"));
}

#[test]
fn test_name_followed_by_expression() {
    let options = local();
    let mut recognizer = Recognizer::new("x + 1;", &options, 1).unwrap();
    assert_eq!(recognizer.read_name().name, "");
}

#[test]
fn test_name_lambda_initializer() {
    let options = local();
    let mut recognizer = Recognizer::new("f = [&](int x) {};", &options, 1).unwrap();
    let read = recognizer.read_name();
    assert_eq!(read.name, "f");
    assert_eq!(read.initializer, "");
}

#[test]
fn test_name_in_signature_mode() {
    let options = signature();
    let mut recognizer = Recognizer::new("&out = 5, int y", &options, 1).unwrap();
    let read = recognizer.read_name();
    assert_eq!(read.name, "out");
    assert_eq!(read.decoration, "&");
    assert_eq!(read.initializer, "");
    assert!(!read.has_more);
    // The default value is skipped, the separator stays
    assert_eq!(recognizer.stream.next_token().map(|t| t.text), Some(","));
}

#[test]
fn test_name_with_qualified_pointer() {
    let options = local();
    let mut recognizer = Recognizer::new("* const name = \"x\";", &options, 1).unwrap();
    let read = recognizer.read_name();
    assert_eq!(read.name, "name");
    assert_eq!(read.decoration, "* const");
    assert_eq!(read.initializer, "\"x\"");

    let mut recognizer = Recognizer::new("* const * volatile pp;", &options, 1).unwrap();
    assert_eq!(recognizer.read_name().decoration, "* const * volatile");

    // A qualifier with no decoration before it is not a declarator
    let mut recognizer = Recognizer::new("const x;", &options, 1).unwrap();
    assert_eq!(recognizer.read_name().name, "");
}

#[test]
fn test_name_at_end_of_input() {
    let options = local();
    let mut recognizer = Recognizer::new("x", &options, 1).unwrap();
    assert_eq!(recognizer.read_name().name, "x");
}

#[test]
fn test_logical_and_call_is_not_a_declaration() {
    let options = local();
    let recognizer = Recognizer::new("x && Foo();", &options, 1).unwrap();
    assert_eq!(recognizer.collect_variables(), Vec::new());
}

#[test]
fn test_ignored_macros() {
    let options = local().with_macros(["WXDLLIMPEXP_CORE"]);
    let recognizer =
        Recognizer::new("class WXDLLIMPEXP_CORE wxString str;", &options, 1).unwrap();
    let variables = recognizer.collect_variables();
    assert_eq!(variables.len(), 1);
    assert_eq!(variables[0].name(), "str");
    assert_eq!(variables[0].type_as_string(), "class wxString");
    assert_eq!(variables[0].type_as_cxx_string(), "wxString");
}

#[test]
fn test_collect_arguments_keeps_unnamed() {
    let options = local();
    let recognizer =
        Recognizer::new("int, const char* name, std::vector<int> v)", &options, 1).unwrap();
    let arguments = recognizer.collect_arguments();
    let summary: Vec<(String, String, String)> = arguments
        .iter()
        .map(|v| {
            (
                v.name().to_owned(),
                v.type_as_string(),
                v.pointer_or_reference().to_owned(),
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            (String::new(), "int".to_owned(), String::new()),
            ("name".to_owned(), "const char".to_owned(), "*".to_owned()),
            ("v".to_owned(), "std::vector<int>".to_owned(), String::new()),
        ]
    );
}

#[test]
fn test_first_line() {
    let options = local();
    let recognizer = Recognizer::new("\nint x;", &options, 10).unwrap();
    let variables = recognizer.collect_variables();
    assert_eq!(variables[0].line(), Some(11));
}

fn argument_names(source: &str) -> Vec<String> {
    let options = local();
    Recognizer::new(source, &options, 1)
        .unwrap()
        .collect_arguments()
        .iter()
        .map(|v| format!("{}|{}", v.name(), v.to_display_string(ToStringFlags::NONE)))
        .collect()
}

#[test]
fn test_collect_arguments_skips_default_values() {
    assert_eq!(
        argument_names("int a = kDefault, int b)"),
        vec!["a|int", "b|int"]
    );
    assert_eq!(
        argument_names("const wxString& name = wxEmptyString, bool flag = true)"),
        vec!["name|const wxString&", "flag|bool"]
    );
    assert_eq!(
        argument_names("int a = f(x, y), char buf[N], Foo*)"),
        vec!["a|int", "buf|char", "|Foo*"]
    );
}

#[test]
fn test_unnamed_arguments_have_lines() {
    let options = local();
    let arguments = Recognizer::new("int,\n    char)", &options, 1)
        .unwrap()
        .collect_arguments();
    let lines: Vec<Option<u32>> = arguments.iter().map(Variable::line).collect();
    assert_eq!(lines, vec![Some(1), Some(2)]);
}
