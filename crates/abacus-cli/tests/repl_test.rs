use std::io::Cursor;

use abacus_cli::Repl;
use abacus_cli::config::ReplConfig;

fn quiet_config() -> ReplConfig {
    ReplConfig { prompt: String::new(), banner: false }
}

/// Feed `input` to a fresh shell and return everything it printed
fn run_session(input: &str) -> String {
    let mut repl = Repl::new(quiet_config(), Cursor::new(input.to_string()), Vec::new());
    repl.run().unwrap();
    String::from_utf8(repl.into_output()).unwrap()
}

#[test]
fn evaluates_and_exits() {
    let output = run_session("add 5 10\nexit\n");
    assert_eq!(output, "Result: 15\nGoodbye!\n");
}

#[test]
fn symbols_and_floats() {
    let output = run_session("/ 10 4\n^ 2 0.5\nexit\n");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "Result: 2.5");
    assert!(lines[1].starts_with("Result: 1.414"));
}

#[test]
fn history_lists_numbered_records() {
    let output = run_session("history\nADD 1 2\n* 3 4\nhistory\nquit\n");
    assert_eq!(
        output,
        "No calculations yet.\nResult: 3\nResult: 12\n1: add 1 2 = 3\n2: * 3 4 = 12\nGoodbye!\n"
    );
}

#[test]
fn errors_do_not_end_the_session() {
    let output = run_session("divide 1 0\nmodulo 7 2\nadd 1\nadd one two\nsubtract 9 4\nexit\n");
    assert_eq!(
        output,
        "Cannot divide by zero.\n\
         Operation 'modulo' not supported.\n\
         Error: You must provide exactly 2 numbers.\n\
         Error: Invalid number format.\n\
         Result: 5\n\
         Goodbye!\n"
    );
}

#[test]
fn failed_commands_are_not_recorded() {
    let mut repl = Repl::new(quiet_config(), Cursor::new("/ 1 0\n+ 2 2\n"), Vec::new());
    repl.run().unwrap();
    let history: Vec<String> = repl.calculator().history().iter().map(ToString::to_string).collect();
    assert_eq!(history, ["+ 2 2 = 4"]);
}

#[test]
fn blank_lines_are_skipped_and_eof_ends_the_loop() {
    let output = run_session("\n   \n- 1 3");
    assert_eq!(output, "Result: -2\n\nGoodbye!\n");
}

#[test]
fn help_lists_every_operation() {
    let output = run_session("help\nexit\n");
    assert!(output.starts_with("Available commands:\n"));
    for keys in ["add, +", "subtract, -", "multiply, *", "divide, /", "power, **, ^"] {
        assert!(output.contains(keys), "help is missing {keys}");
    }
    assert!(output.contains("history"));
    assert!(output.contains("add 5 10"));
}

#[test]
fn banner_and_prompt_come_from_config() {
    let config = ReplConfig { prompt: "> ".to_string(), banner: true };
    let mut repl = Repl::new(config, Cursor::new("exit\n"), Vec::new());
    repl.run().unwrap();
    let output = String::from_utf8(repl.into_output()).unwrap();
    assert_eq!(output, "Welcome to Abacus! Type 'help' for commands.\n> Goodbye!\n");
}
