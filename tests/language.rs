use hulk::{get_result, interpreter::value::Value, Interpreter};

fn assert_success(src: &str) {
    if let Err(e) = get_result(src, false) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if get_result(src, false).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

fn eval(src: &str) -> Value {
    let mut interpreter = Interpreter::new();
    match interpreter.run_statement(src) {
        Ok(value) => value,
        Err(errors) => panic!("Statement failed: {}", errors[0]),
    }
}

fn eval_error(src: &str) -> String {
    let mut interpreter = Interpreter::new();
    match interpreter.run_statement(src) {
        Ok(value) => panic!("Statement produced {value}, but was expected to fail"),
        Err(errors) => errors[0].to_string(),
    }
}

#[test]
fn basic_arithmetic() {
    assert_eq!(eval("1 + 2;"), Value::Number(3.0));
    assert_eq!(eval("8 - 5;"), Value::Number(3.0));
    assert_eq!(eval("7 * 9;"), Value::Number(63.0));
    assert_eq!(eval("10 / 2;"), Value::Number(5.0));
    assert_eq!(eval("2 ^ 10;"), Value::Number(1024.0));
}

#[test]
fn factor_binds_tighter_than_term() {
    assert_eq!(eval("1 + 2 * 3;"), Value::Number(7.0));
    assert_eq!(eval("(1 + 2) * 3;"), Value::Number(9.0));
    assert_eq!(eval("10 - 4 / 2;"), Value::Number(8.0));
}

#[test]
fn power_is_right_associative() {
    assert_eq!(eval("2 ^ 3 ^ 2;"), Value::Number(512.0));
}

#[test]
fn unary_operators_are_right_recursive() {
    assert_eq!(eval("--5;"), Value::Number(5.0));
    assert_eq!(eval("!!true;"), Value::Bool(true));
    assert_eq!(eval("-2 ^ 2;"), Value::Number(4.0));
}

#[test]
fn comparison_and_logic() {
    assert_eq!(eval("1 < 2;"), Value::Bool(true));
    assert_eq!(eval("2 <= 2;"), Value::Bool(true));
    assert_eq!(eval("1 > 2;"), Value::Bool(false));
    assert_eq!(eval("true & false;"), Value::Bool(false));
    assert_eq!(eval("true | false;"), Value::Bool(true));
    assert_eq!(eval("1 < 2 & 2 < 3;"), Value::Bool(true));
}

#[test]
fn equality_is_structural() {
    assert_eq!(eval("1 == 1;"), Value::Bool(true));
    assert_eq!(eval("\"a\" == \"a\";"), Value::Bool(true));
    assert_eq!(eval("1 == true;"), Value::Bool(false));
    assert_eq!(eval("1 != 2;"), Value::Bool(true));
}

#[test]
fn concatenation_uses_display_forms() {
    assert_eq!(eval("\"a\" @ true;"), Value::Str("atrue".to_string()));
    assert_eq!(eval("1 @ 2;"), Value::Str("12".to_string()));
    assert_eq!(eval("\"x = \" @ 1 + 2;"), Value::Str("x = 3".to_string()));
}

#[test]
fn modulo_truncates_operands() {
    assert_eq!(eval("7 % 3;"), Value::Number(1.0));
    assert_eq!(eval("7.9 % 3;"), Value::Number(1.0));
    assert_eq!(eval("-7 % 3;"), Value::Number(-1.0));
}

#[test]
fn division_and_modulo_by_zero_are_reported() {
    assert_eq!(eval_error("5 / 0;"),
               "Semantic error on line 1: Division by zero.");
    assert_eq!(eval_error("5 % 0;"),
               "Semantic error on line 1: Modulo by zero.");
}

#[test]
fn arithmetic_rejects_non_numbers() {
    assert_eq!(eval_error("1 + true;"),
               "Semantic error on line 1: Operands must be numbers.");
    assert_eq!(eval_error("-\"a\";"),
               "Semantic error on line 1: Operands must be number.");
    assert_eq!(eval_error("!1;"),
               "Semantic error on line 1: Operand must be bool.");
    assert_eq!(eval_error("1 & true;"),
               "Semantic error on line 1: Operands must be boolean.");
}

#[test]
fn let_bindings_accumulate_in_order() {
    assert_eq!(eval("let x = 1, y = x + 1 in x + y;"), Value::Number(3.0));
    assert_eq!(eval("let x = 1, x = x + 1 in x;"), Value::Number(2.0));
}

#[test]
fn let_bindings_do_not_leak() {
    let mut interpreter = Interpreter::new();
    interpreter.run_statement("let x = 1 in x;").unwrap();

    let error = interpreter.run_statement("x;").unwrap_err();
    assert_eq!(error[0].to_string(),
               "Semantic error on line 2: x is not defined.");
}

#[test]
fn undefined_variable_is_reported() {
    assert_eq!(eval_error("x;"), "Semantic error on line 1: x is not defined.");
}

#[test]
fn if_requires_boolean_condition() {
    assert_eq!(eval("if (1 < 2) \"yes\" else \"no\";"),
               Value::Str("yes".to_string()));
    assert_eq!(eval_error("if (1) 2 else 3;"),
               "Semantic error on line 1: Condition must return a boolean.");
}

#[test]
fn untaken_branch_is_never_evaluated() {
    assert_eq!(eval("if (true) 1 else missing;"), Value::Number(1.0));
    assert_eq!(eval("if (false) missing else 2;"), Value::Number(2.0));
}

#[test]
fn if_condition_is_a_primary() {
    assert_failure("if 1 < 2 3 else 4;");
    assert_eq!(eval("if (true) 1 else 2;"), Value::Number(1.0));
}

#[test]
fn function_declaration_and_call() {
    let mut interpreter = Interpreter::new();

    let declared = interpreter.run_statement("function double(x) => x * 2;")
                              .unwrap();
    assert_eq!(declared, Value::Str("Function declared.".to_string()));

    let value = interpreter.run_statement("double(21);").unwrap();
    assert_eq!(value, Value::Number(42.0));
}

#[test]
fn declaration_bodies_may_nest() {
    let mut interpreter = Interpreter::new();
    interpreter.run_statement("function clamp(x) => if (x < 0) 0 else let y = x in y;")
               .unwrap();

    assert_eq!(interpreter.run_statement("clamp(-1);").unwrap(),
               Value::Number(0.0));
    assert_eq!(interpreter.run_statement("clamp(5);").unwrap(),
               Value::Number(5.0));
}

#[test]
fn functions_may_recurse() {
    let mut interpreter = Interpreter::new();
    interpreter.run_statement("function fact(n) => if (n <= 1) 1 else n * fact(n - 1);")
               .unwrap();

    let value = interpreter.run_statement("fact(5);").unwrap();
    assert_eq!(value, Value::Number(120.0));
}

#[test]
fn functions_are_not_closures() {
    let mut interpreter = Interpreter::new();
    interpreter.run_statement("function f(x) => x + y;").unwrap();

    let error = interpreter.run_statement("let y = 1 in f(2);").unwrap_err();
    assert!(error[0].to_string().ends_with("y is not defined."));
}

#[test]
fn redefinition_is_rejected_and_original_survives() {
    let mut interpreter = Interpreter::new();
    interpreter.run_statement("function f(x) => x + 1;").unwrap();

    let error = interpreter.run_statement("function f(x) => x + 2;")
                           .unwrap_err();
    assert_eq!(error[0].to_string(),
               "Syntax error on line 2: Function 'f' cannot be redefined.");

    let value = interpreter.run_statement("f(1);").unwrap();
    assert_eq!(value, Value::Number(2.0));
}

#[test]
fn builtins_cannot_be_redefined() {
    assert_eq!(eval_error("function sqrt(x) => x;"),
               "Syntax error on line 1: Function 'sqrt' cannot be redefined.");
}

#[test]
fn failed_declaration_rolls_back() {
    let mut interpreter = Interpreter::new();

    interpreter.run_statement("function g(x) => ;").unwrap_err();

    // The name must be free again after the failed declaration.
    interpreter.run_statement("function g(x) => x;").unwrap();
    let value = interpreter.run_statement("g(3);").unwrap();
    assert_eq!(value, Value::Number(3.0));
}

#[test]
fn wrong_arity_is_reported() {
    let mut interpreter = Interpreter::new();
    interpreter.run_statement("function f(x, y) => x + y;").unwrap();

    let error = interpreter.run_statement("f(1);").unwrap_err();
    assert_eq!(error[0].to_string(),
               "Semantic error on line 2: Function 'f' receives 2 argument(s), but 1 were given.");
}

#[test]
fn runaway_recursion_overflows_and_recovers() {
    let mut interpreter = Interpreter::new();
    interpreter.run_statement("function forever(x) => forever(x);")
               .unwrap();

    // The error names the calling statement's line, not the declaration's.
    let error = interpreter.run_statement("forever(1);").unwrap_err();
    assert_eq!(error[0].to_string(),
               "Semantic error on line 2: Stack Overflow.");

    // The depth counter resets per statement, so the next one is unaffected.
    let value = interpreter.run_statement("1 + 1;").unwrap();
    assert_eq!(value, Value::Number(2.0));
}

#[test]
fn deep_recursion_stays_within_the_limit() {
    let mut interpreter = Interpreter::new();
    interpreter.run_statement("function count(n) => if (n <= 0) 0 else count(n - 1);")
               .unwrap();

    let value = interpreter.run_statement("count(1000);").unwrap();
    assert_eq!(value, Value::Number(0.0));
}

#[test]
fn builtin_functions_work() {
    assert_eq!(eval("sqrt(9);"), Value::Number(3.0));
    assert_eq!(eval("cos(0);"), Value::Number(1.0));
    assert_eq!(eval("sin(0);"), Value::Number(0.0));
    assert_eq!(eval("exp(0);"), Value::Number(1.0));
    assert_eq!(eval("log(8, 2);"), Value::Number(3.0));
    assert_eq!(eval("print(\"hi\");"), Value::Str("hi".to_string()));
}

#[test]
fn rand_yields_a_number_in_range() {
    match eval("rand();") {
        Value::Number(n) => assert!((0.0..1.0).contains(&n)),
        other => panic!("rand() produced {other:?}"),
    }
}

#[test]
fn builtins_check_their_arguments() {
    assert_eq!(eval_error("sqrt(true);"),
               "Semantic error on line 1: Function 'sqrt' expects a number.");
    assert_eq!(eval_error("log(8);"),
               "Semantic error on line 1: Function 'log' receives 2 argument(s), but 1 were given.");
    assert_eq!(eval_error("rand(1);"),
               "Semantic error on line 1: Function 'rand' receives 0 argument(s), but 1 were given.");
}

#[test]
fn constants_are_resolved_at_scan_time() {
    assert_eq!(eval("PI > 3.14;"), Value::Bool(true));
    assert_eq!(eval("E > 2.71;"), Value::Bool(true));
}

#[test]
fn statements_require_a_terminator() {
    assert_eq!(eval_error("1 + 2"), "Syntax error on line 1: Expect ';'.");
    assert_eq!(eval_error("1; 2;"), "Syntax error on line 1: Invalid syntax.");
}

#[test]
fn declarations_reject_trailing_tokens() {
    assert_eq!(eval_error("function f(x) => x; 1"),
               "Syntax error on line 1: Invalid syntax.");
}

#[test]
fn malformed_let_is_rejected() {
    assert_eq!(eval_error("let = 1 in 2;"),
               "Syntax error on line 1: Expect variable name.");
    assert_eq!(eval_error("let x = 1 2;"),
               "Syntax error on line 1: Expect 'in'.");
}

#[test]
fn missing_else_is_rejected() {
    assert_eq!(eval_error("if (true) 1;"),
               "Syntax error on line 1: Expect 'else'.");
}

#[test]
fn unregistered_names_are_variables() {
    // `foo` is not a known function, so this parses as a variable followed
    // by trailing tokens.
    assert_failure("foo(1);");
}

#[test]
fn null_is_reserved_but_never_an_expression() {
    assert_eq!(eval_error("null;"),
               "Syntax error on line 1: Invalid syntax.");
    assert_eq!(eval_error("1 + null;"),
               "Syntax error on line 1: Invalid syntax.");
}

#[test]
fn lexical_errors_are_reported() {
    assert_eq!(eval_error("\"abc;"),
               "Lexical error on line 1: Unterminated string.");
    assert_eq!(eval_error("$1;"),
               "Lexical error on line 1: Unexpected character.");
}

#[test]
fn all_lexical_errors_are_collected() {
    let mut interpreter = Interpreter::new();
    let errors = interpreter.run_statement("$1 # 2;").unwrap_err();
    assert_eq!(errors.len(), 2);
}

#[test]
fn line_counter_advances_per_statement() {
    let mut interpreter = Interpreter::new();
    interpreter.run_statement("1;").unwrap();
    interpreter.advance_line();

    let error = interpreter.run_statement("y;").unwrap_err();
    assert_eq!(error[0].to_string(),
               "Semantic error on line 3: y is not defined.");
}

#[test]
fn scripts_share_one_registry() {
    assert_success("function double(x) => x + x;\ndouble(4);");
    assert_success("function inc(n) => n + 1;\n\ninc(inc(0));");
    assert_failure("1 +;");
}
