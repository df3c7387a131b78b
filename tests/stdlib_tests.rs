// ABOUTME: Coverage of the standard library builtins and special forms

use lisp_core_sandbox::Interpreter;

#[test]
fn predicates() {
    let interp = Interpreter::new();
    assert_eq!(interp.evaluate("(number? 42)").unwrap(), "#t");
    assert_eq!(interp.evaluate("(number? 'x)").unwrap(), "#f");
    assert_eq!(interp.evaluate("(symbol? 'x)").unwrap(), "#t");
    assert_eq!(interp.evaluate("(pair? '(1 2))").unwrap(), "#t");
    assert_eq!(interp.evaluate("(pair? '())").unwrap(), "#f");
    assert_eq!(interp.evaluate("(null? '())").unwrap(), "#t");
    assert_eq!(interp.evaluate("(boolean? #t)").unwrap(), "#t");
    assert_eq!(interp.evaluate("(list? '(1 2 3))").unwrap(), "#t");
    assert_eq!(interp.evaluate("(list? '(1 . 2))").unwrap(), "#f");
}

#[test]
fn logic_and_not() {
    let interp = Interpreter::new();
    assert_eq!(interp.evaluate("(not #f)").unwrap(), "#t");
    assert_eq!(interp.evaluate("(not 0)").unwrap(), "#f");
    assert_eq!(interp.evaluate("(and)").unwrap(), "#t");
    assert_eq!(interp.evaluate("(or)").unwrap(), "#f");
    assert_eq!(interp.evaluate("(and 1 2 3)").unwrap(), "3");
    assert_eq!(interp.evaluate("(or #f 5)").unwrap(), "5");
}

#[test]
fn and_or_short_circuit_without_evaluating_later_args() {
    let interp = Interpreter::new();
    // (car 1) would raise a Runtime error if ever evaluated.
    assert_eq!(interp.evaluate("(and #f (car 1))").unwrap(), "#f");
    assert_eq!(interp.evaluate("(or 1 (car 1))").unwrap(), "1");
}

#[test]
fn if_evaluates_only_the_taken_branch() {
    let interp = Interpreter::new();
    assert_eq!(interp.evaluate("(if #t 1 (car 1))").unwrap(), "1");
    assert_eq!(interp.evaluate("(if #f (car 1) 2)").unwrap(), "2");
}

#[test]
fn arithmetic_edge_cases() {
    let interp = Interpreter::new();
    assert_eq!(interp.evaluate("(abs -5)").unwrap(), "5");
    assert_eq!(interp.evaluate("(max 1 9 3)").unwrap(), "9");
    assert_eq!(interp.evaluate("(min 1 9 3)").unwrap(), "1");
    assert!(interp.evaluate("(/ 5)").is_err());
    assert!(interp.evaluate("(/ 1 0)").is_err());
}

#[test]
fn wrong_arity_builtins_are_runtime_errors() {
    let interp = Interpreter::new();
    assert!(interp.evaluate("(car)").is_err());
    assert!(interp.evaluate("(cons 1)").is_err());
    assert!(interp.evaluate("(not 1 2)").is_err());
}

#[test]
fn malformed_special_forms_are_syntax_errors() {
    let interp = Interpreter::new();
    assert!(interp.evaluate("(lambda)").is_err());
    assert!(interp.evaluate("(lambda (1) 1)").is_err());
    assert!(interp.evaluate("(define)").is_err());
    assert!(interp.evaluate("(if)").is_err());
}

#[test]
fn set_bang_on_unbound_name_is_name_error() {
    let interp = Interpreter::new();
    assert!(interp.evaluate("(set! nope 1)").is_err());
}
