//! Command handlers - extracted from main.rs for testability

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::Printer;
use keypad_calc::driver::{CalculatorDriver, EngineDriver};
use std::io::{BufRead, Write};
use tracing::{debug, info};

const QUIT_COMMANDS: [&str; 2] = ["q", "quit"];

fn printer_for(config: &CliConfig) -> Printer {
    Printer::new(config.color.should_color(), config.verbosity.is_quiet())
}

/// Press `keys` on a fresh calculator and print the final display
///
/// Every argument is parsed before any key is pressed, so an unbound
/// character anywhere fails the whole command.
pub fn run_keys(
    config: &CliConfig,
    keys: &[String],
    steps: bool,
    out: &mut impl Write,
) -> CliResult<()> {
    let input = keys.concat();
    let printer = printer_for(config);
    let mut driver = EngineDriver::with_config(config.engine);

    debug!(keys = %input, steps, "running key sequence");
    if steps {
        let trace = driver.enter_keys_traced(&input)?;
        printer.write_steps(out, &trace)?;
    } else {
        driver.enter_keys(&input)?;
    }
    printer.write_display(out, &driver.display())?;
    Ok(())
}

/// Read key sequences line by line, printing the display after each
///
/// The calculator persists across lines. Blank lines are ignored and
/// `q` or `quit` ends the session. A line with an unbound key is
/// reported and skipped without pressing any of its keys.
pub fn run_repl<R: BufRead, W: Write>(config: &CliConfig, input: R, out: &mut W) -> CliResult<()> {
    let printer = printer_for(config);
    let mut driver = EngineDriver::with_config(config.engine);
    info!(fraction_digits = config.engine.fraction_digits, "repl started");

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if QUIT_COMMANDS.contains(&line) {
            break;
        }
        match driver.enter_keys(line) {
            Ok(()) => printer.write_display(out, &driver.display())?,
            Err(e) => printer.warning(&e.to_string()),
        }
    }
    out.flush()?;
    Ok(())
}

/// Print the keyboard binding table
pub fn print_keys(config: &CliConfig, out: &mut impl Write) -> CliResult<()> {
    for line in printer_for(config).binding_table() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColorChoice;
    use crate::error::CliError;
    use keypad_calc::config::EngineConfig;

    fn plain() -> CliConfig {
        CliConfig::new().with_color(ColorChoice::Never)
    }

    fn keys(args: &[&str]) -> Vec<String> {
        args.iter().map(ToString::to_string).collect()
    }

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    // ===== run =====

    #[test]
    fn test_run_keys_prints_result() {
        let mut out = Vec::new();
        run_keys(&plain(), &keys(&["1+2="]), false, &mut out).unwrap();
        assert_eq!(output(out), "3\n");
    }

    #[test]
    fn test_run_keys_joins_arguments() {
        let mut out = Vec::new();
        run_keys(&plain(), &keys(&["12", "x", "3", "="]), false, &mut out).unwrap();
        assert_eq!(output(out), "36\n");
    }

    #[test]
    fn test_run_keys_without_equals_shows_expression() {
        let mut out = Vec::new();
        run_keys(&plain(), &keys(&["7*8"]), false, &mut out).unwrap();
        assert_eq!(output(out), "7×8\n");
    }

    #[test]
    fn test_run_keys_division_by_zero_resets() {
        let mut out = Vec::new();
        run_keys(&plain(), &keys(&["5/0="]), false, &mut out).unwrap();
        assert_eq!(output(out), "0\n");
    }

    #[test]
    fn test_run_keys_unknown_key_fails_before_output() {
        let mut out = Vec::new();
        let result = run_keys(&plain(), &keys(&["1+q"]), false, &mut out);
        assert!(matches!(result, Err(CliError::Calc(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_keys_steps() {
        let mut out = Vec::new();
        run_keys(&plain(), &keys(&["2+3="]), true, &mut out).unwrap();
        let text = output(out);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["  2  2", "  +  2+", "  3  2+3", "  =  5", "5"]);
    }

    #[test]
    fn test_run_keys_quiet_hides_steps() {
        let config = plain().with_verbosity(crate::config::Verbosity::Quiet);
        let mut out = Vec::new();
        run_keys(&config, &keys(&["2+3="]), true, &mut out).unwrap();
        assert_eq!(output(out), "5\n");
    }

    #[test]
    fn test_run_keys_respects_fraction_digits() {
        let config = plain().with_engine(EngineConfig::new().with_fraction_digits(2));
        let mut out = Vec::new();
        run_keys(&config, &keys(&["2/3="]), false, &mut out).unwrap();
        assert_eq!(output(out), "0.67\n");
    }

    // ===== repl =====

    #[test]
    fn test_repl_state_persists_across_lines() {
        let input = b"12\n+8\n=\n" as &[u8];
        let mut out = Vec::new();
        run_repl(&plain(), input, &mut out).unwrap();
        assert_eq!(output(out), "12\n12+8\n20\n");
    }

    #[test]
    fn test_repl_skips_blank_lines_and_quits() {
        let input = b"\n  \n9\nquit\n1\n" as &[u8];
        let mut out = Vec::new();
        run_repl(&plain(), input, &mut out).unwrap();
        assert_eq!(output(out), "9\n");
    }

    #[test]
    fn test_repl_continues_after_unknown_key() {
        let input = b"4\n4z\n%\n" as &[u8];
        let mut out = Vec::new();
        run_repl(&plain(), input, &mut out).unwrap();
        assert_eq!(output(out), "4\n0.04\n");
    }

    // ===== keys =====

    #[test]
    fn test_print_keys() {
        let mut out = Vec::new();
        print_keys(&plain(), &mut out).unwrap();
        let text = output(out);
        assert!(text.contains("0-9"));
        assert!(text.contains("clear"));
    }
}
