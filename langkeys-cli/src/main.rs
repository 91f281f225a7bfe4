use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use langkeys_cli::{CheckOptions, ReportFormat, run_check_command};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Report translation keys that are missing from each locale.
    Check {
        /// Config file (TOML, JSON, or YAML); defaults to ./langkeys.toml when present
        #[arg(short, long)]
        config: Option<String>,

        /// Directory holding one translation file per locale
        #[arg(short = 'd', long = "dir")]
        source_dir: Option<String>,

        /// Locales to check, in report order (comma-separated or repeated).
        /// Discovered from the directory when omitted.
        #[arg(short, long, value_delimiter = ',')]
        locales: Vec<String>,

        /// Extension of the translation files: json, yaml, yml, or toml
        #[arg(short, long)]
        ext: Option<String>,

        /// Source shape: `plain`, or `module` to unwrap a top-level `default` export
        #[arg(long)]
        shape: Option<String>,

        /// Report format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,

        /// List missing keys only, without reference translations
        #[arg(long)]
        keys_only: bool,

        /// Print reference translations without truncation (even in terminal)
        #[arg(long)]
        full: bool,

        /// Write the report to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Exit with status 1 when any locale is missing keys
        #[arg(long)]
        fail_on_missing: bool,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.commands {
        Commands::Check {
            config,
            source_dir,
            locales,
            ext,
            shape,
            format,
            keys_only,
            full,
            output,
            fail_on_missing,
        } => {
            let opts = CheckOptions {
                config,
                source_dir,
                locales,
                extension: ext,
                shape,
                format,
                keys_only,
                full,
                output,
            };
            match run_check_command(opts) {
                Ok(summary) => {
                    tracing::info!(
                        locales = summary.locales,
                        unique_keys = summary.unique_keys,
                        missing = summary.missing,
                        "check finished"
                    );
                    if fail_on_missing && summary.missing > 0 {
                        std::process::exit(1);
                    }
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Args::command(), "langkeys", &mut std::io::stdout());
        }
    }
}
