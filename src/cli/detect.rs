//! Detect command - classify a single substitution

use anyhow::Result;
use console::style;
use starticulation::classifier::classify_production;
use starticulation::models::{ChildAge, Verdict};
use starticulation::norms::Sound;
use std::str::FromStr;

pub(super) fn run(target: &str, produced: &str, age: Option<&str>) -> Result<()> {
    let target = Sound::parse(target)?;
    let produced = produced.trim();

    let Some(age) = age else {
        // Without an age only the process is meaningful
        if produced == target.symbol() {
            println!("/{}/ → /{}/: correct production", target, produced);
            return Ok(());
        }
        match starticulation::processes::detect(target, produced) {
            Some(process) => println!(
                "/{}/ → /{}/: {} ({})",
                target,
                produced,
                style(process).bold(),
                process.age_status()
            ),
            None => println!("/{}/ → /{}/: no known process", target, produced),
        }
        return Ok(());
    };

    let age = ChildAge::from_str(age)?;
    let result = classify_production(target, produced, age.months);

    let verdict = match result.verdict {
        Verdict::AgeAppropriate => style(result.verdict).green(),
        Verdict::IncorrectButAgeAppropriate => style(result.verdict).yellow(),
        Verdict::Delayed => style(result.verdict).red(),
    };
    println!(
        "/{}/ → /{}/ at {}: {} (mastery by {} months)",
        target,
        produced,
        age,
        verdict,
        target.mastery_age()
    );
    match result.finding {
        Some(finding) => println!(
            "  process: {} ({}) - {}",
            style(finding.process).bold(),
            finding.process.age_status(),
            finding.status
        ),
        None if result.verdict != Verdict::AgeAppropriate => {
            println!("  process: none detected")
        }
        None => {}
    }
    Ok(())
}
