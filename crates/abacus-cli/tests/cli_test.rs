use abacus_cli::cli::{EvalArgs, eval, list_operations};
use abacus_cli::{Cli, Commands};
use abacus_types::Number;
use clap::Parser;

fn eval_to_string(args: &EvalArgs) -> anyhow::Result<String> {
    let mut out = Vec::new();
    eval(args, &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn parses_eval_with_negative_operands() {
    let cli = Cli::try_parse_from(["abacus", "eval", "-", "-5", "3"]).unwrap();
    let Some(Commands::Eval(args)) = cli.command else {
        panic!("expected eval command");
    };
    assert_eq!(args.operation, "-");
    assert_eq!(args.a, Number::Integer(-5));
    assert_eq!(args.b, Number::Integer(3));
    assert_eq!(eval_to_string(&args).unwrap(), "-8\n");
}

#[test]
fn rejects_non_numeric_operand() {
    assert!(Cli::try_parse_from(["abacus", "eval", "add", "1", "x"]).is_err());
}

#[test]
fn defaults_to_shell() {
    let cli = Cli::try_parse_from(["abacus", "--log-level", "debug"]).unwrap();
    assert!(cli.command.is_none());
    assert_eq!(cli.log_level.as_deref(), Some("debug"));
}

#[test]
fn eval_prints_json_record() {
    let args = EvalArgs {
        operation: "Multiply".to_string(),
        a: Number::Float(1.5),
        b: Number::Integer(4),
        json: true,
    };
    let output = eval_to_string(&args).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value, serde_json::json!({ "key": "Multiply", "a": 1.5, "b": 4, "result": 6.0 }));
}

#[test]
fn eval_json_keeps_non_finite_results() {
    let cli = Cli::try_parse_from(["abacus", "eval", "power", "-8", "0.5", "--json"]).unwrap();
    let Some(Commands::Eval(args)) = cli.command else {
        panic!("expected eval command");
    };
    let value: serde_json::Value = serde_json::from_str(&eval_to_string(&args).unwrap()).unwrap();
    assert_eq!(value, serde_json::json!({ "key": "power", "a": -8, "b": 0.5, "result": "NaN" }));
}

#[test]
fn eval_surfaces_calculator_errors() {
    let args =
        EvalArgs { operation: "/".to_string(), a: Number::Integer(1), b: Number::Integer(0), json: false };
    let err = eval_to_string(&args).unwrap_err();
    assert_eq!(err.to_string(), "Cannot divide by zero.");
}

#[test]
fn lists_all_operations() {
    let mut out = Vec::new();
    list_operations(&mut out).unwrap();
    let listing = String::from_utf8(out).unwrap();
    let names: Vec<&str> =
        listing.lines().filter_map(|line| line.split_whitespace().next()).collect();
    assert_eq!(names, ["add", "subtract", "multiply", "divide", "power"]);
    assert!(listing.contains("** ^"));
}
