//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use icsmith_core::TimeKind;

/// icsmith - Build iCalendar (.ics) files from event descriptions
#[derive(Debug, Parser)]
#[command(name = "icsmith")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "ICSMITH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build an event from a JSON attribute document
    Build {
        /// Path to the JSON document ("-" or omitted reads stdin)
        input: Option<PathBuf>,

        #[command(flatten)]
        output: OutputOptions,
    },

    /// Build an event from command-line flags
    New {
        #[command(flatten)]
        event: EventOptions,

        #[command(flatten)]
        output: OutputOptions,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Where the generated document goes.
#[derive(Debug, Args)]
pub struct OutputOptions {
    /// Destination path (an .ics extension is enforced)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Write the document to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,
}

/// Event fields settable from the command line.
#[derive(Debug, Args)]
pub struct EventOptions {
    /// Event title
    #[arg(long)]
    pub title: Option<String>,

    /// Start date or date-time (e.g. 2024-01-02 or 2024-01-02T09:00:00)
    #[arg(long)]
    pub start: Option<String>,

    /// How to encode start and end values
    #[arg(long, value_enum)]
    pub start_type: Option<StartType>,

    /// End date or date-time
    #[arg(long)]
    pub end: Option<String>,

    /// Event description
    #[arg(long)]
    pub description: Option<String>,

    /// URL associated with the event
    #[arg(long)]
    pub url: Option<String>,

    /// Event location
    #[arg(long)]
    pub location: Option<String>,

    /// Event status (CONFIRMED, CANCELLED, TENTATIVE)
    #[arg(long)]
    pub status: Option<String>,

    /// Category name (can be repeated)
    #[arg(long = "category", action = clap::ArgAction::Append)]
    pub categories: Vec<String>,

    /// Event UID
    #[arg(long)]
    pub uid: Option<String>,

    /// PRODID value identifying the generating product
    #[arg(long)]
    pub product_id: Option<String>,
}

/// Timestamp interpretation for --start and --end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StartType {
    /// Bare calendar date
    Date,
    /// Date with time-of-day
    DateTime,
}

impl StartType {
    /// Converts to the core time kind.
    pub fn to_time_kind(self) -> TimeKind {
        match self {
            Self::Date => TimeKind::Date,
            Self::DateTime => TimeKind::DateTime,
        }
    }
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Dump current configuration
    Dump,

    /// Show configuration file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_build_command() {
        let cli = Cli::parse_from(["icsmith", "build", "event.json", "--stdout"]);
        match cli.command {
            Some(Command::Build { input, output }) => {
                assert_eq!(input, Some(PathBuf::from("event.json")));
                assert!(output.stdout);
                assert_eq!(output.output, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_new_command_flags() {
        let cli = Cli::parse_from([
            "icsmith",
            "new",
            "--title",
            "Standup",
            "--start",
            "2024-01-02",
            "--start-type",
            "date",
            "--category",
            "TEAM",
            "--category",
            "WEEKLY",
        ]);

        match cli.command {
            Some(Command::New { event, .. }) => {
                assert_eq!(event.title, Some("Standup".to_string()));
                assert_eq!(event.start, Some("2024-01-02".to_string()));
                assert_eq!(event.start_type, Some(StartType::Date));
                assert_eq!(event.categories, vec!["TEAM", "WEEKLY"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn start_type_values_are_kebab_case() {
        let cli = Cli::parse_from(["icsmith", "new", "--start-type", "date-time"]);
        match cli.command {
            Some(Command::New { event, .. }) => {
                assert_eq!(event.start_type, Some(StartType::DateTime));
                assert_eq!(
                    event.start_type.map(StartType::to_time_kind),
                    Some(TimeKind::DateTime)
                );
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
