#[cfg(any(feature = "with-serde", feature = "with-csv"))]
use anyhow::Context;
use anyhow::{Result, bail};

use crate::args::Cli;
use parseaddr::{ClassificationReport, Rule};

pub fn write_reports(rows: &[ClassificationReport], cli: &Cli) -> Result<()> {
    match cli.format.as_str() {
        "human" if cli.out.is_some() => bail!("--out needs --format json|ndjson|csv"),
        "human" => write_human(rows),
        "json" => write_json(rows, cli),
        "ndjson" => write_ndjson(rows, cli),
        "csv" => write_csv(rows, cli),
        other => bail!("unknown --format '{other}', use: human|json|ndjson|csv"),
    }
}

pub fn any_invalid(rows: &[ClassificationReport]) -> bool {
    rows.iter().any(|row| !row.valid)
}

pub fn write_rules() {
    print!("{}", rules_table());
}

pub(crate) fn rules_table() -> String {
    Rule::ALL
        .iter()
        .map(|rule| format!("{}  {}\n", rule.code(), rule.description()))
        .collect()
}

pub(crate) fn human_line(row: &ClassificationReport) -> String {
    match &row.reason {
        None => format!("[OK]    {}", row.original),
        Some(reason) => format!("[INVALID] {} :: rule {}: {}", row.original, row.code, reason),
    }
}

fn write_human(rows: &[ClassificationReport]) -> Result<()> {
    for row in rows {
        println!("{}", human_line(row));
    }
    Ok(())
}

#[cfg(feature = "with-serde")]
fn write_json(rows: &[ClassificationReport], cli: &Cli) -> Result<()> {
    let s = serde_json::to_string_pretty(rows)?;
    if let Some(path) = &cli.out {
        write_all_atomically(path, s.as_bytes())?;
    } else {
        println!("{s}");
    }
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn write_json(_: &[ClassificationReport], _: &Cli) -> Result<()> {
    bail!("format=json nécessite la feature 'with-serde'")
}

#[cfg(feature = "with-serde")]
fn write_ndjson(rows: &[ClassificationReport], cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.out {
        let mut buf = Vec::new();
        for row in rows {
            let line = serde_json::to_string(row)?;
            buf.extend_from_slice(line.as_bytes());
            buf.push(b'\n');
        }
        write_all_atomically(path, &buf)?;
    } else {
        for row in rows {
            println!("{}", serde_json::to_string(row)?);
        }
    }
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn write_ndjson(_: &[ClassificationReport], _: &Cli) -> Result<()> {
    bail!("format=ndjson nécessite la feature 'with-serde'")
}

#[cfg(feature = "with-csv")]
fn write_csv(rows: &[ClassificationReport], cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.out {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        for row in rows {
            wtr.write_record(csv_record(row))?;
        }
        let data = wtr.into_inner()?;
        write_all_atomically(path, &data)?;
    } else {
        let mut wtr = csv::Writer::from_writer(std::io::stdout());
        for row in rows {
            wtr.write_record(csv_record(row))?;
        }
        wtr.flush()?;
    }
    Ok(())
}

#[cfg(not(feature = "with-csv"))]
fn write_csv(_: &[ClassificationReport], _: &Cli) -> Result<()> {
    bail!("format=csv nécessite la feature 'with-csv'")
}

#[cfg(feature = "with-csv")]
fn csv_record(row: &ClassificationReport) -> Vec<String> {
    vec![
        row.original.clone(),
        row.local.clone(),
        row.domain.clone(),
        row.code.to_string(),
        row.valid.to_string(),
        row.reason.clone().unwrap_or_default(),
    ]
}

#[cfg(any(feature = "with-serde", feature = "with-csv"))]
fn write_all_atomically(path: &str, bytes: &[u8]) -> Result<()> {
    use std::io::Write;

    let tmp = format!("{path}.tmp");
    {
        let mut f = std::fs::File::create(&tmp).with_context(|| format!("create {tmp}"))?;
        f.write_all(bytes)?;
        f.sync_all()?;
    }
    std::fs::rename(&tmp, path).with_context(|| format!("rename {tmp} -> {path}"))?;
    Ok(())
}
