use indoc::indoc;
use kata_forge::core::ast::Statement;
use kata_forge::transformers::expression::{canonical_number, quote_string};
use kata_forge::{
    extract_signature, parse_program, serialize, stub_from_solution, suite_from_tests,
    transform_tests, TransformError,
};
use pretty_assertions::assert_eq;

fn render_expression(source: &str) -> String {
    let program = parse_program(source).unwrap();
    match program.body.as_slice() {
        [Statement::Expression(expression)] => serialize(expression).unwrap(),
        other => panic!("expected one expression statement, got {other:?}"),
    }
}

#[test]
fn test_stub_ignores_function_body() {
    let expected = "function hello(a, b) {\n  // Your code here.\n}\n\nmodule.exports = hello;\n";

    assert_eq!(
        stub_from_solution("function hello(a, b) { return a + b; }").unwrap(),
        expected
    );
    assert_eq!(
        stub_from_solution(indoc! {"
            function hello(a, b) {
              const seen = new Map();
              for (let i = 0; i < a.length; i++) {
                if (seen.has(a[i])) return seen.get(a[i]);
                seen.set(a[i], b ? a[i] * 2 : a[i]);
              }
              throw new Error('unreachable');
            }
        "})
        .unwrap(),
        expected
    );
}

#[test]
fn test_variable_bound_solutions() {
    assert_eq!(
        extract_signature("const hello = function(a, b) { return a + b; };")
            .unwrap()
            .name,
        "hello"
    );
    assert_eq!(
        stub_from_solution("let square = x => x * x;").unwrap(),
        "function square(x) {\n  // Your code here.\n}\n\nmodule.exports = square;\n"
    );
}

#[test]
fn test_class_solution_is_rejected() {
    let error = stub_from_solution("class Counter { count() { return 1; } }").unwrap_err();
    assert!(matches!(error, TransformError::Parse { .. }));
}

#[test]
fn test_string_escaping() {
    assert_eq!(quote_string("it's"), r"'it\'s'");
    assert_eq!(render_expression(r#""it's";"#), r"'it\'s'");
}

#[test]
fn test_numeric_canonicalization() {
    assert_eq!(canonical_number("5.0"), "5");
    assert_eq!(canonical_number("5.5"), "5.5");
    assert_eq!(render_expression("[5.0, 5.5, 10];"), "[5, 5.5, 10]");
}

#[test]
fn test_double_suite_renders_exactly() {
    assert_eq!(
        suite_from_tests("Test.assertEquals(double(3), 6);").unwrap(),
        "const double = require('./code');\n\ndescribe('Tests', () => {\n    \n    test('the tests', () => {\n        expect(double(3)).toEqual(6);\n    });\n});\n"
    );
}

#[test]
fn test_not_equals_is_inverted() {
    let suite = transform_tests("Test.assertNotEquals(isEven(3), true);").unwrap();
    assert_eq!(
        suite.unnamed_assertions,
        vec!["expect(isEven(3)).not.toEqual(true);".to_string()]
    );
}

#[test]
fn test_var_anywhere_rejects_the_whole_file() {
    let source = indoc! {"
        Test.assertEquals(sum([1, 2]), 3);
        Test.assertEquals(sum([]), 0);
        var big = [1, 2, 3];
        Test.assertEquals(sum(big), 6);
    "};
    let error = transform_tests(source).unwrap_err();
    assert!(matches!(error, TransformError::Parse { .. }));
}

#[test]
fn test_realistic_test_file() {
    let source = indoc! {r#"
        // Basic cases
        Test.assertSimilar(tally([1, -2, 'x']), {total: -1.0, skipped: ['x']});
        Test.assertEquals(tally([]), {total: 0, skipped: []}, "empty input");
        Test.assertEquals(tally([null]), {total: 0, skipped: [null], total: 5});
        Test.assertNotEquals(tally(new Set([1])), undefined)
    "#};

    assert_eq!(
        suite_from_tests(source).unwrap(),
        "const tally = require('./code');\n\
         \n\
         describe('Tests', () => {\n\
         \x20   test('empty input', () => {\n\
         \x20       expect(tally([])).toEqual({total: 0, skipped: []});\n\
         \x20   });\n\
         \x20   \n\
         \x20   test('the tests', () => {\n\
         \x20       expect(tally([1, -2, 'x'])).toEqual({total: -1, skipped: ['x']});\n\
         \x20       expect(tally([undefined])).toEqual({total: 5, skipped: [undefined]});\n\
         \x20       expect(tally(new Set([1]))).not.toEqual(undefined);\n\
         \x20   });\n\
         });\n"
    );
}

#[test]
fn test_unknown_assertion_method_is_a_logic_error() {
    let error = transform_tests("Test.expect(check(1));").unwrap_err();
    assert_eq!(error.to_string(), "Unknown Test method called, Test.expect");
    assert!(error.is_logic_error());
}

#[test]
fn test_divergent_functions_are_rejected() {
    let error = transform_tests("Test.assertEquals(a(1), 1);\nTest.assertEquals(b(1), 1);")
        .unwrap_err();
    assert_eq!(
        error,
        TransformError::InconsistentFunction {
            first: "a".into(),
            second: "b".into()
        }
    );
}

#[test]
fn test_array_with_holes_rejects_the_file() {
    let error = suite_from_tests("Test.assertEquals(f(3), [1,,2]);").unwrap_err();
    assert_eq!(error, TransformError::unknown("array_hole"));
    assert!(!error.is_logic_error());
}
