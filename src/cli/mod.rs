//! CLI command definitions and handlers

mod assess;
mod detect;
mod init;
mod tables;
mod template;

use anyhow::Result;
use clap::{Parser, Subcommand};
use starticulation::assessment::{ProductionOverride, Session};
use starticulation::config::{load_config_file, load_project_config, ProjectConfig};
use std::path::PathBuf;

/// Starticulation - consonant articulation assessment
///
/// Scores a child's productions against developmental norms and flags
/// phonological processes.
#[derive(Parser, Debug)]
#[command(name = "starticulation")]
#[command(
    version,
    about = "Consonant articulation assessment - scores productions against Australian developmental norms and flags phonological processes",
    long_about = "Starticulation compares each sound a child produces against the age by which \
typically-developing children master it, and recognises common phonological processes \
(gliding, fronting, stopping, cluster reduction, ...).\n\n\
Targets default to correct productions: only record what the child got wrong.",
    after_help = "\
Examples:
  starticulation assess --age 4;6 --name Sam --produced r:initial=w
  starticulation template -o sam.toml           Write a productions grid to fill in
  starticulation assess --productions sam.toml --format html -o sam.html
  starticulation detect k t --age 3;0           Classify a single substitution
  starticulation norms                          List mastery ages and positions"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Config file (default: starticulation.toml or .starticulationrc.json in the current directory)
    #[arg(long, global = true, env = "STARTICULATION_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assess a child's productions and print the report
    #[command(after_help = "\
Examples:
  starticulation assess --age 5;0 --produced r:initial=w --produced spl:initial=p
  starticulation assess --productions sam.toml                 Child details and productions from a file
  starticulation assess --productions sam.toml -f csv -o sam.csv
  starticulation assess --productions sam.toml -f html --save  Auto-named file (Sam_articulation_results.html)
  starticulation assess --age 4;6 --fail-on-delayed            Exit code 1 if any sound is delayed")]
    Assess {
        /// Child's age as years;months, e.g. 4;6 (overrides the productions file)
        #[arg(long, short = 'a')]
        age: Option<String>,

        /// Child's first name (overrides the productions file)
        #[arg(long, short = 'n')]
        name: Option<String>,

        /// Productions file (TOML, or JSON with a .json extension)
        #[arg(long, short = 'p')]
        productions: Option<PathBuf>,

        /// Production override SOUND:POSITION=PRODUCED, repeatable (e.g. r:initial=w; empty for omission)
        #[arg(long = "produced", value_name = "SOUND:POSITION=PRODUCED")]
        produced: Vec<ProductionOverride>,

        /// Output format: text, json, markdown (or md), html, csv
        #[arg(long, short = 'f', value_parser = ["text", "json", "markdown", "md", "html", "csv"])]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o', conflicts_with = "save")]
        output: Option<PathBuf>,

        /// Write to an auto-named file, e.g. Sam_articulation_results.csv
        #[arg(long)]
        save: bool,

        /// Exit with code 1 if any sound is delayed
        #[arg(long)]
        fail_on_delayed: bool,

        /// Disable colours in terminal output
        #[arg(long)]
        no_color: bool,

        /// Do not print the welcome instructions
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Write the default productions grid (every target produced correctly)
    Template {
        /// Grid format: toml, json
        #[arg(long, short = 'f', default_value = "toml", value_parser = ["toml", "json"])]
        format: String,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// List sounds with their mastery ages and tested positions
    Norms {
        /// Output format (table, json)
        #[arg(long, default_value = "table", value_parser = ["table", "json"])]
        format: String,
    },

    /// List phonological processes, their substitution rules and resolution ages
    Processes {
        /// Output format (table, json)
        #[arg(long, default_value = "table", value_parser = ["table", "json"])]
        format: String,
    },

    /// Classify a single substitution
    #[command(after_help = "\
Examples:
  starticulation detect k t                 fronting
  starticulation detect spl p --age 4;6     cluster reduction (with /s/), age appropriate
  starticulation detect s θ --age 5;0       frontal lisp, delayed")]
    Detect {
        /// Target sound
        target: String,

        /// Produced sound (use \"\" for an omission)
        produced: String,

        /// Child's age as years;months
        #[arg(long, short = 'a')]
        age: Option<String>,
    },

    /// Write an example starticulation.toml in the current directory
    Init,

    /// Show how to use Starticulation
    Instructions,
}

/// Project config from --config, or discovered in the current directory
fn load_config(path: Option<&PathBuf>) -> Result<ProjectConfig> {
    match path {
        Some(p) => load_config_file(p),
        None => Ok(load_project_config(&std::env::current_dir()?)),
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_ref())?;
    let mut session = Session::new(config.session.show_instructions);

    match cli.command {
        Commands::Assess {
            age,
            name,
            productions,
            produced,
            format,
            output,
            save,
            fail_on_delayed,
            no_color,
            quiet,
        } => {
            if quiet {
                session.take_instructions();
            }
            let format = format.unwrap_or_else(|| config.format().to_string());
            assess::run(
                &mut session,
                &config,
                assess::AssessArgs {
                    age,
                    name,
                    productions,
                    overrides: produced,
                    format,
                    output,
                    save,
                    fail_on_delayed: fail_on_delayed
                        || config.defaults.fail_on_delayed.unwrap_or(false),
                    no_color: no_color || config.defaults.no_color.unwrap_or(false),
                },
            )
        }

        Commands::Template { format, output } => template::run(&format, output.as_deref()),

        Commands::Norms { format } => tables::norms(&format),

        Commands::Processes { format } => tables::processes(&format),

        Commands::Detect {
            target,
            produced,
            age,
        } => detect::run(&target, &produced, age.as_deref()),

        Commands::Init => init::run(&std::env::current_dir()?),

        Commands::Instructions => {
            println!("{}", starticulation::assessment::INSTRUCTIONS);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::try_parse_from([
            "starticulation",
            "assess",
            "--age",
            "4;6",
            "--produced",
            "r:initial=w",
            "--produced",
            "spl:initial=",
        ])
        .unwrap();
        match cli.command {
            Commands::Assess { produced, age, .. } => {
                assert_eq!(age.as_deref(), Some("4;6"));
                assert_eq!(produced.len(), 2);
                assert_eq!(produced[1].produced, "");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_override_position_checked_after_parsing() {
        // Syntactically valid; the builder rejects /r/ in final position
        let result = Cli::try_parse_from([
            "starticulation",
            "assess",
            "--produced",
            "r:final=w=",
        ]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_unknown_sound_rejected_by_parser() {
        let result = Cli::try_parse_from(["starticulation", "assess", "--produced", "q:initial=w"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_output_conflicts_with_save() {
        let result = Cli::try_parse_from([
            "starticulation",
            "assess",
            "-o",
            "out.csv",
            "--save",
        ]);
        assert!(result.is_err());
    }
}
