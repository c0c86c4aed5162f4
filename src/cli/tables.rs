//! Norms and processes commands - print the built-in tables

use anyhow::Result;
use console::style;
use serde::Serialize;
use starticulation::models::Position;
use starticulation::norms::Sound;
use starticulation::processes::{PhonologicalProcess, PROCESS_RULES};

#[derive(Serialize)]
struct NormRow {
    sound: &'static str,
    mastery_months: u32,
    positions: &'static [Position],
    cluster: bool,
}

#[derive(Serialize)]
struct ProcessRow {
    process: PhonologicalProcess,
    name: &'static str,
    /// `None` for atypical processes
    resolution_months: Option<u32>,
    atypical: bool,
    /// Rule table priority, 1-based; `None` if no substitution rule
    priority: Option<usize>,
    substitutions: Vec<(&'static str, &'static [&'static str])>,
}

pub(super) fn norms(format: &str) -> Result<()> {
    let rows: Vec<NormRow> = Sound::all()
        .map(|s| NormRow {
            sound: s.symbol(),
            mastery_months: s.mastery_age(),
            positions: s.valid_positions(),
            cluster: s.is_cluster(),
        })
        .collect();

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "{}",
        style(format!("{:<6} {:>8}  {}", "SOUND", "MASTERY", "POSITIONS")).dim()
    );
    for row in &rows {
        let positions: Vec<_> = row.positions.iter().map(|p| p.as_str()).collect();
        println!(
            "{:<6} {:>4} ({}y)  {}",
            format!("/{}/", row.sound),
            row.mastery_months,
            row.mastery_months / 12,
            positions.join(", ")
        );
    }
    Ok(())
}

pub(super) fn processes(format: &str) -> Result<()> {
    let rows: Vec<ProcessRow> = PhonologicalProcess::ALL
        .iter()
        .map(|&process| {
            let rule = PROCESS_RULES
                .iter()
                .enumerate()
                .find(|(_, r)| r.process == process);
            ProcessRow {
                process,
                name: process.name(),
                resolution_months: process.age_status().resolution_months(),
                atypical: process.is_atypical(),
                priority: rule.map(|(i, _)| i + 1),
                substitutions: rule
                    .map(|(_, r)| r.substitutions.iter().map(|s| (s.target, s.accepted)).collect())
                    .unwrap_or_default(),
            }
        })
        .collect();

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "{}",
        style(format!("{:<3} {:<30} {:<12} {}", "#", "PROCESS", "RESOLVES", "SUBSTITUTIONS")).dim()
    );
    let mut ordered: Vec<&ProcessRow> = rows.iter().collect();
    ordered.sort_by_key(|r| r.priority.unwrap_or(usize::MAX));
    for row in ordered {
        let resolves = match row.resolution_months {
            Some(m) => format!("{} months", m),
            None => "atypical".to_string(),
        };
        let subs: Vec<String> = row
            .substitutions
            .iter()
            .map(|(target, accepted)| format!("{}→{}", target, accepted.join("|")))
            .collect();
        let priority = row.priority.map(|p| p.to_string()).unwrap_or_else(|| "-".into());
        println!("{:<3} {:<30} {:<12} {}", priority, row.name, resolves, subs.join(" "));
    }
    println!(
        "\n{}",
        style("Rules are checked in priority order; cluster reduction is detected when no rule matches.").dim()
    );
    Ok(())
}
