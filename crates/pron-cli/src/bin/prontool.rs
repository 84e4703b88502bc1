use std::path::PathBuf;

use clap::{Parser, Subcommand};

use pron_cli::commands::reconcile_ops::StatsFormat;
use pron_cli::commands::{
    align_ops, compound_ops, config_ops, load_mappings, load_settings, reconcile_ops,
};
use pron_cli::die;
use pron_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "prontool", about = "Pronunciation dictionary cleaning tool")]
struct Cli {
    /// Custom settings TOML (default: built-in settings)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Custom special mappings TOML (default: built-in mappings)
    #[arg(long, global = true)]
    mappings: Option<PathBuf>,
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Choose between competing transcripts of the same word
    Reconcile {
        /// Dictionary file (word<TAB>transcript), variants on adjacent lines
        input: PathBuf,
        /// Output directory
        output_dir: PathBuf,
        /// Write diff statistics as JSON instead of TSV
        #[arg(long)]
        json: bool,
    },
    /// Split compounds and collect component transcripts
    Compounds {
        /// Dictionary file (word<TAB>transcript)
        input: PathBuf,
        /// Attested modifier components, one per line
        #[arg(long)]
        modifiers: PathBuf,
        /// Attested head components, one per line
        #[arg(long)]
        heads: PathBuf,
        /// Output directory
        output_dir: PathBuf,
    },
    /// Learn grapheme/phoneme mappings and report suspected errors
    Align {
        /// Dictionary file (word<TAB>transcript)
        input: PathBuf,
        /// Output directory
        output_dir: PathBuf,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export default special mappings as TOML
    MappingsExport,
    /// Validate a custom special mappings TOML file
    MappingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Reconcile {
            input,
            output_dir,
            json,
        } => {
            let format = if json {
                StatsFormat::Json
            } else {
                StatsFormat::Tsv
            };
            let summary = die!(
                reconcile_ops::reconcile(&input, &output_dir, format),
                "Error: {}"
            );
            eprintln!("{summary}");
        }
        Command::Compounds {
            input,
            modifiers,
            heads,
            output_dir,
        } => {
            let settings = die!(load_settings(cli.settings.as_deref()), "Error: {}");
            let mappings = die!(load_mappings(cli.mappings.as_deref()), "Error: {}");
            let summary = die!(
                compound_ops::compounds(
                    &input,
                    &modifiers,
                    &heads,
                    &output_dir,
                    settings,
                    &mappings
                ),
                "Error: {}"
            );
            eprintln!("{summary}");
        }
        Command::Align { input, output_dir } => {
            let settings = die!(load_settings(cli.settings.as_deref()), "Error: {}");
            let mappings = die!(load_mappings(cli.mappings.as_deref()), "Error: {}");
            let summary = die!(
                align_ops::align(&input, &output_dir, settings, &mappings),
                "Error: {}"
            );
            eprintln!("{summary}");
        }
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
        Command::MappingsExport => config_ops::mappings_export(),
        Command::MappingsValidate { file } => config_ops::mappings_validate(&file),
    }
}
