//! ComicInfo CLI - Command-line interface for ComicInfo.xml generation

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use comicinfo_core::{RatingPrecision, Revision};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse a schema revision argument (1, 2, 2.1, ...)
fn parse_revision(s: &str) -> Result<Revision, String> {
    s.parse()
}

/// Parse the number of decimal digits allowed in a 2.1-draft rating
fn parse_rating_digits(s: &str) -> Result<RatingPrecision, String> {
    let n: u8 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    RatingPrecision::try_from(n)
}

#[derive(Parser)]
#[command(name = "comicinfo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate ComicInfo.xml from a JSON description
    Generate {
        /// Input JSON file path
        input: String,

        /// Output file or directory (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Schema revision (1, 2, 2.1)
        #[arg(short, long, default_value = "2", value_parser = parse_revision)]
        revision: Revision,

        /// Decimal digits allowed in a 2.1-draft CommunityRating (1 or 2)
        #[arg(long, value_parser = parse_rating_digits)]
        draft_rating_digits: Option<RatingPrecision>,
    },

    /// Validate a JSON description without writing XML
    Validate {
        /// Input JSON file path
        input: String,

        /// Schema revision (1, 2, 2.1)
        #[arg(short, long, default_value = "2", value_parser = parse_revision)]
        revision: Revision,

        /// Decimal digits allowed in a 2.1-draft CommunityRating (1 or 2)
        #[arg(long, value_parser = parse_rating_digits)]
        draft_rating_digits: Option<RatingPrecision>,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "comicinfo_cli=debug,comicinfo_core=debug"
    } else {
        "comicinfo_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Generate {
            input,
            output,
            revision,
            draft_rating_digits,
        } => commands::generate(&input, output.as_deref(), revision, draft_rating_digits),

        Commands::Validate {
            input,
            revision,
            draft_rating_digits,
            json,
        } => commands::validate(&input, revision, draft_rating_digits, json),
    }
}
