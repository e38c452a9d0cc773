use super::*;
use pretty_assertions::assert_eq;

fn names(variables: &[Variable]) -> Vec<&str> {
    variables.iter().map(Variable::name).collect()
}

#[test]
fn test_leading_parenthesis_is_dropped() {
    let scanner = VariableScanner::new(
        "(int a, char b)",
        ScanOptions::new().with_function_signature(true),
    );
    assert_eq!(names(&scanner.get_variables(false)), vec!["a", "b"]);
}

#[test]
fn test_optimized_buffer_is_memoized() {
    let scanner = VariableScanner::new("foo(1); int x;", ScanOptions::new());
    let first = scanner.optimized_buffer();
    assert_eq!(first, "foo () ; int x ; ");
    assert!(std::ptr::eq(first, scanner.optimized_buffer()));
}

#[test]
fn test_sorting() {
    let scanner = VariableScanner::new("int c; int a; int b;", ScanOptions::new());
    assert_eq!(names(&scanner.get_variables(false)), vec!["c", "a", "b"]);
    assert_eq!(names(&scanner.get_variables(true)), vec!["a", "b", "c"]);
}

#[test]
fn test_map_keeps_first_declaration() {
    let scanner = VariableScanner::new("int x = 1; { double x = 2; } char y;", ScanOptions::new());
    let map = scanner.get_variables_map();
    assert_eq!(map.keys().map(String::as_str).collect::<Vec<_>>(), vec!["x", "y"]);
    assert_eq!(map["x"].type_as_string(), "int");
    assert_eq!(map["x"].default_value(), "1");
}

#[test]
fn test_parse_function_arguments() {
    let scanner = VariableScanner::new(
        "(int a, const std::string& s = \"x\", bool)",
        ScanOptions::new(),
    );
    let arguments = scanner.parse_function_arguments();
    assert_eq!(names(&arguments), vec!["a", "s", ""]);
    assert_eq!(arguments[1].type_as_string(), "const std::string");
    assert_eq!(arguments[1].pointer_or_reference(), "&");
    assert_eq!(arguments[2].type_as_string(), "bool");
    assert!(!arguments[2].is_ok());
}

#[test]
fn test_parse_function_arguments_skips_default_values() {
    let scanner = VariableScanner::new("(int a = kDefault, int b)", ScanOptions::new());
    let arguments = scanner.parse_function_arguments();
    assert_eq!(names(&arguments), vec!["a", "b"]);
    assert_eq!(arguments[0].default_value(), "");

    let scanner = VariableScanner::new(
        "(const wxString& name = wxEmptyString, bool flag = true)",
        ScanOptions::new(),
    );
    let arguments = scanner.parse_function_arguments();
    assert_eq!(names(&arguments), vec!["name", "flag"]);
    assert_eq!(arguments[1].type_as_string(), "bool");
}

#[test]
fn test_unnamed_parameter_line() {
    let scanner = VariableScanner::new("(int a,\n bool)", ScanOptions::new());
    let lines: Vec<Option<u32>> = scanner
        .parse_function_arguments()
        .iter()
        .map(Variable::line)
        .collect();
    assert_eq!(lines, vec![Some(1), Some(2)]);
}

#[test]
fn test_parse_function_arguments_reads_raw_buffer() {
    // Parentheses survive: they are not optimized away
    let scanner = VariableScanner::new(
        "std::function<void(int)> cb, int n",
        ScanOptions::new(),
    );
    let arguments = scanner.parse_function_arguments();
    assert_eq!(names(&arguments), vec!["cb", "n"]);
    assert_eq!(arguments[0].type_as_string(), "std::function<void(int)>");
}

#[test]
fn test_first_line() {
    let scanner = VariableScanner::new("int a;\n\nint b;", ScanOptions::new()).with_first_line(40);
    let lines: Vec<Option<u32>> = scanner.get_variables(false).iter().map(Variable::line).collect();
    assert_eq!(lines, vec![Some(40), Some(42)]);
}

#[test]
fn test_empty_buffer() {
    let scanner = VariableScanner::new("", ScanOptions::new());
    assert_eq!(scanner.get_variables(true), Vec::new());
    assert!(scanner.get_variables_map().is_empty());
    assert_eq!(scanner.parse_function_arguments(), Vec::new());
}

#[test]
fn test_scanner_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<VariableScanner>();
}
