//! Assess command - run the engine over one child's productions

use anyhow::{Context, Result};
use console::{style, Term};
use starticulation::assessment::{AssessmentBuilder, ProductionOverride, ProductionsFile, Session};
use starticulation::config::{ProjectConfig, UserConfig};
use starticulation::models::{Child, ChildAge};
use starticulation::report::AssessmentReport;
use starticulation::reporters::{self, OutputFormat};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

pub(super) struct AssessArgs {
    pub age: Option<String>,
    pub name: Option<String>,
    pub productions: Option<PathBuf>,
    pub overrides: Vec<ProductionOverride>,
    pub format: String,
    pub output: Option<PathBuf>,
    pub save: bool,
    pub fail_on_delayed: bool,
    pub no_color: bool,
}

pub(super) fn run(session: &mut Session, config: &ProjectConfig, args: AssessArgs) -> Result<()> {
    let format = OutputFormat::from_str(&args.format)?;

    let file = match &args.productions {
        Some(path) => ProductionsFile::load(path)?,
        None => ProductionsFile::default(),
    };

    // Flags win over the file
    let age_input = args
        .age
        .or(file.child.age.clone().filter(|a| !a.trim().is_empty()))
        .context("Child's age is required: pass --age Y;M or set [child] age in the productions file")?;
    let age = ChildAge::from_str(&age_input)?;
    let child = Child::new(args.name.or(file.child.name.clone()), age);

    debug!(
        "{} productions from file ({} changed), {} from flags",
        file.productions.len(),
        file.changed().count(),
        args.overrides.len()
    );
    let overrides = file.productions.into_iter().chain(args.overrides);
    let records = AssessmentBuilder::with_defaults()
        .apply_overrides(overrides)?
        .build();

    let clinician = UserConfig::load()?.clinician_label();
    let report = AssessmentReport::build(child, &records).with_clinician(clinician);

    if format == OutputFormat::Text && args.output.is_none() && !args.save {
        if let Some(instructions) = session.take_instructions() {
            println!("{}\n", style(instructions).dim());
        }
    }

    let mut output = reporters::report_with_format(&report, format)?;
    let to_terminal = args.output.is_none() && !args.save && Term::stdout().is_term();
    if args.no_color || !to_terminal {
        output = console::strip_ansi_codes(&output).into_owned();
    }

    let out_path = if args.save {
        let dir = config
            .export
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        Some(dir.join(reporters::default_file_name(&report, format)))
    } else {
        args.output
    };

    match out_path {
        Some(path) => write_report(&path, &output)?,
        None => println!("{}", output),
    }

    check_fail_threshold(args.fail_on_delayed, &report);
    Ok(())
}

fn write_report(path: &Path, output: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, output)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    info!("Report written to {}", path.display());
    // stderr keeps stdout clean for piping
    eprintln!(
        "{} Report written to: {}",
        style("✓").green(),
        style(path.display()).cyan()
    );
    Ok(())
}

/// Exit with code 1 when any sound is delayed and the caller asked for it
fn check_fail_threshold(fail_on_delayed: bool, report: &AssessmentReport) {
    if fail_on_delayed && report.has_delayed() {
        eprintln!(
            "Failing due to --fail-on-delayed ({} delayed sounds)",
            report.delayed.len()
        );
        std::process::exit(1);
    }
}
