mod args;
mod output;

use anyhow::{Context, Result};
use parseaddr::{ClassificationReport, classify_report};

use std::io::{self, BufRead};

use args::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut rows: Vec<ClassificationReport> = Vec::new();

    if cli.stdin {
        for (idx, line) in io::stdin().lock().lines().enumerate() {
            let line = line.context("read stdin")?;
            let row = if cli.json_input {
                report_json_line(&line, idx + 1)?
            } else {
                classify_report(&line)
            };
            rows.push(row);
        }
    } else {
        match cli.cmd {
            Some(Commands::Validate { ref email }) => rows.push(classify_report(email)),
            Some(Commands::Rules) => {
                output::write_rules();
                return Ok(());
            }
            None => {
                Cli::clap_command().print_help()?;
                println!();
                return Ok(());
            }
        }
    }

    output::write_reports(&rows, &cli)?;

    // codes de sortie : 0 OK, 2 invalids, 1 fatal
    if output::any_invalid(&rows) {
        std::process::exit(2);
    }
    Ok(())
}

#[cfg(feature = "with-serde")]
fn report_json_line(line: &str, lineno: usize) -> Result<ClassificationReport> {
    let value: serde_json::Value =
        serde_json::from_str(line).with_context(|| format!("stdin line {lineno}: invalid JSON"))?;
    parseaddr::report_value(&value).with_context(|| format!("stdin line {lineno}"))
}

#[cfg(not(feature = "with-serde"))]
fn report_json_line(_: &str, _: usize) -> Result<ClassificationReport> {
    anyhow::bail!("--json-input nécessite la feature 'with-serde'")
}
