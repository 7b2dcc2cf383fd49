//! Line-oriented interactive session.
//!
//! Each line is either a command (`show`, `reset`, `types`, `help`, `quit`)
//! or a field edit written `field=value` or `field value`. After every edit
//! the compact report is printed again.

use std::io::{self, BufRead, Write};

use hustle_core::{HustleInput, IncomeCalculator, InputField};
use tracing::{debug, warn};

use crate::report::{Estimate, render_compact, render_full, render_types};

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Show,
    Reset,
    Types,
    Help,
    Quit,
    Edit { field: &'a str, value: &'a str },
    Blank,
}

fn parse_line(line: &str) -> Command<'_> {
    let line = line.trim();
    match line {
        "" => Command::Blank,
        "show" => Command::Show,
        "reset" => Command::Reset,
        "types" => Command::Types,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => {
            let (field, value) = line
                .split_once('=')
                .or_else(|| line.split_once(char::is_whitespace))
                .unwrap_or((line, ""));
            Command::Edit {
                field: field.trim(),
                value: value.trim(),
            }
        }
    }
}

fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Edit a field with `field=value`. Fields:")?;
    for f in InputField::all() {
        writeln!(out, "  {f}")?;
    }
    writeln!(out, "Commands: show, reset, types, help, quit")
}

/// Runs the session until `quit` or end of input.
///
/// `start` is the record `reset` returns to.
pub fn run<R: BufRead, W: Write>(
    calc: &mut IncomeCalculator,
    start: &HustleInput,
    input: R,
    mut out: W,
) -> io::Result<()> {
    writeln!(out, "{}", render_full(&Estimate::from_calculator(calc)))?;
    writeln!(out, "Type `help` for commands.")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        match parse_line(&line) {
            Command::Blank => continue,
            Command::Quit => break,
            Command::Help => write_help(&mut out)?,
            Command::Types => write!(out, "{}", render_types())?,
            Command::Show => writeln!(out, "{}", render_full(&Estimate::from_calculator(calc)))?,
            Command::Reset => {
                calc.reset(start.clone());
                debug!("session reset");
                writeln!(out, "{}", render_compact(&Estimate::from_calculator(calc)))?;
            }
            Command::Edit { field, value } => match field.parse::<InputField>() {
                Ok(field) => {
                    calc.update(field, value);
                    writeln!(out, "{}", render_compact(&Estimate::from_calculator(calc)))?;
                }
                Err(e) => {
                    warn!(field, "rejected edit");
                    writeln!(out, "error: {e}")?;
                }
            },
        }
        out.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn run_script(script: &str) -> (IncomeCalculator, String) {
        let start = HustleInput::default();
        let mut calc = IncomeCalculator::new(start.clone());
        let mut out = Vec::new();
        run(&mut calc, &start, script.as_bytes(), &mut out).unwrap();
        (calc, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parse_line_recognises_both_edit_forms() {
        assert_eq!(
            parse_line("hourlyRate=30"),
            Command::Edit { field: "hourlyRate", value: "30" }
        );
        assert_eq!(
            parse_line("  hourlyRate   30  "),
            Command::Edit { field: "hourlyRate", value: "30" }
        );
        assert_eq!(
            parse_line("hoursPerWeek"),
            Command::Edit { field: "hoursPerWeek", value: "" }
        );
    }

    #[test]
    fn parse_line_commands() {
        assert_eq!(parse_line("show"), Command::Show);
        assert_eq!(parse_line(" quit "), Command::Quit);
        assert_eq!(parse_line(""), Command::Blank);
    }

    #[test]
    fn edits_update_one_field_each() {
        let (calc, _) = run_script("hoursPerWeek=40\nhourly_rate 25\nmonthlyExpenses=0\n");

        assert_eq!(calc.input().hours_per_week, dec!(40));
        assert_eq!(calc.input().hourly_rate, dec!(25));
        assert_eq!(calc.derived().monthly_gross, dec!(4330));
        assert_eq!(calc.input().hustle_type, "rideshare");
    }

    #[test]
    fn edit_reprints_breakdown() {
        let (_, out) = run_script("hoursPerWeek=40\n");

        assert!(out.contains("Estimated Monthly Income: $3,464"));
    }

    #[test]
    fn unknown_field_reports_error_and_continues() {
        let (calc, out) = run_script("taxRate=30\nhourlyRate=30\n");

        assert!(out.contains("error: unknown input field 'taxRate'"));
        assert_eq!(calc.input().hourly_rate, dec!(30));
    }

    #[test]
    fn garbage_value_becomes_zero() {
        let (calc, _) = run_script("hoursPerWeek=many\n");

        assert_eq!(calc.input().hours_per_week, dec!(0));
    }

    #[test]
    fn reset_restores_start() {
        let (calc, _) = run_script("hourlyRate=99\nreset\n");

        assert_eq!(calc.input(), &HustleInput::default());
    }

    #[test]
    fn quit_stops_processing() {
        let (calc, _) = run_script("quit\nhourlyRate=99\n");

        assert_eq!(calc.input().hourly_rate, dec!(20));
    }

    #[test]
    fn types_lists_every_hustle() {
        let (_, out) = run_script("types\n");

        assert!(out.contains("taskbased"));
        assert!(out.contains("$30-80/hr"));
    }
}
