//! Command-line interface for elr-forge
//!
//! # Usage Examples
//!
//! ```bash
//! # Generate a HepB preliminary ELR with all fields synthesized
//! elr-forge generate
//!
//! # Pin some demographics, synthesize the rest
//! elr-forge generate --report hepb-final \
//!   --first-name Ana --last-name Diaz --city Athens --state GA
//!
//! # Load field values from a file, reproducibly
//! elr-forge generate --input patient.yaml --seed 42 --output report.hl7
//!
//! # Inspect the template bank
//! elr-forge template list
//! elr-forge template show --report hepb-prelim
//! ```

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use elr_forge::{
    resolve_and_render_with, PatientGenerator, PatientInput, ReportKind, TemplateBank,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "elr-forge")]
#[command(about = "A tool for generating synthetic HL7 ELR messages with fake patient demographics")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a filled ELR message
    Generate {
        /// Report template to fill
        #[arg(long, value_enum, default_value_t = ReportArg::HepbPrelim)]
        report: ReportArg,

        /// Patient field overrides (blank fields are synthesized)
        #[command(flatten)]
        fields: FieldArgs,

        /// Read patient fields from a YAML or JSON file (flags take precedence)
        #[arg(long, value_name = "PATH")]
        input: Option<PathBuf>,

        /// Custom template bank file (YAML map of report kind to template text)
        #[arg(long, value_name = "PATH")]
        templates: Option<PathBuf>,

        /// Seed for reproducible generation (default: OS entropy)
        #[arg(long)]
        seed: Option<u64>,

        /// Write the message to a file instead of stdout
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Inspect the template bank
    Template {
        #[command(subcommand)]
        command: TemplateCommands,
    },
}

#[derive(Subcommand)]
enum TemplateCommands {
    /// List available report kinds
    List,

    /// Print the raw template for a report kind
    Show {
        /// Report template to print
        #[arg(long, value_enum)]
        report: ReportArg,

        /// Custom template bank file
        #[arg(long, value_name = "PATH")]
        templates: Option<PathBuf>,
    },
}

/// CLI-facing report kind.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum ReportArg {
    /// Hepatitis B preliminary report
    HepbPrelim,
    /// Hepatitis B final report
    HepbFinal,
}

impl From<ReportArg> for ReportKind {
    fn from(arg: ReportArg) -> Self {
        match arg {
            ReportArg::HepbPrelim => ReportKind::HepbPrelim,
            ReportArg::HepbFinal => ReportKind::HepbFinal,
        }
    }
}

/// Per-field overrides. Unset flags fall back to the input file value,
/// and blank values are synthesized.
#[derive(Args)]
struct FieldArgs {
    /// Patient first name
    #[arg(long)]
    first_name: Option<String>,

    /// Patient middle name
    #[arg(long)]
    middle_name: Option<String>,

    /// Patient last name
    #[arg(long)]
    last_name: Option<String>,

    /// Patient sex (e.g. M or F)
    #[arg(long)]
    sex: Option<String>,

    /// Street address
    #[arg(long)]
    street: Option<String>,

    /// City
    #[arg(long)]
    city: Option<String>,

    /// State abbreviation
    #[arg(long)]
    state: Option<String>,

    /// Zip code
    #[arg(long)]
    zipcode: Option<String>,

    /// Four-digit year of birth
    #[arg(long)]
    dob: Option<String>,
}

impl FieldArgs {
    fn apply(self, input: &mut PatientInput) {
        if let Some(v) = self.first_name {
            input.first_name = v;
        }
        if let Some(v) = self.middle_name {
            input.middle_name = v;
        }
        if let Some(v) = self.last_name {
            input.last_name = v;
        }
        if let Some(v) = self.sex {
            input.sex = v;
        }
        if let Some(v) = self.street {
            input.street = v;
        }
        if let Some(v) = self.city {
            input.city = v;
        }
        if let Some(v) = self.state {
            input.state = v;
        }
        if let Some(v) = self.zipcode {
            input.zipcode = v;
        }
        if let Some(v) = self.dob {
            input.dob = v;
        }
    }
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            report,
            fields,
            input,
            templates,
            seed,
            output,
        } => {
            let mut patient_input = match input {
                Some(path) => PatientInput::from_file(&path)
                    .with_context(|| format!("Failed to load patient input from {path:?}"))?,
                None => PatientInput::default(),
            };
            fields.apply(&mut patient_input);

            let bank = load_bank(templates)?;
            let kind = ReportKind::from(report);

            let mut generator = match seed {
                Some(seed) => PatientGenerator::seeded(seed),
                None => PatientGenerator::new(),
            };

            tracing::info!("Generating {kind} ELR");
            let elr = resolve_and_render_with(&mut generator, &bank, &patient_input, kind)?;

            match output {
                Some(path) => {
                    std::fs::write(&path, &elr)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    tracing::info!("Wrote ELR to {}", path.display());
                }
                None => println!("{elr}"),
            }
        }
        Commands::Template { command } => match command {
            TemplateCommands::List => {
                for kind in ReportKind::ALL {
                    println!("{kind}");
                }
            }
            TemplateCommands::Show { report, templates } => {
                let bank = load_bank(templates)?;
                let template = bank.get(ReportKind::from(report))?;
                println!("{template}");
            }
        },
    }

    Ok(())
}

fn load_bank(templates: Option<PathBuf>) -> anyhow::Result<TemplateBank> {
    match templates {
        Some(path) => TemplateBank::from_file(&path)
            .with_context(|| format!("Failed to load template bank from {path:?}")),
        None => Ok(TemplateBank::builtin()),
    }
}
