use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::settings::{MEMBER_ID_MAX, MEMBER_ID_MIN};
use crate::roster::{normalize, MemberId};

#[derive(Parser, Debug)]
#[command(author, version, about = "habikino rating toolkit")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Parse pasted results-sheet text into a roster
    Roster {
        /// Text file to read (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Print the parse report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Scan loosely structured text for member ids and names
    Names {
        /// Text file to read (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Compute point changes for a reference member against the roster
    Adjust {
        /// Reference member id
        #[arg(short, long, value_parser = parse_member_id)]
        reference: MemberId,
        /// Members the reference lost to (everyone else counts as a win)
        #[arg(long = "loss", value_parser = parse_member_id)]
        losses: Vec<MemberId>,
        /// Text file to read (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Print the adjustment table as JSON
        #[arg(long)]
        json: bool,
    },
    /// Yearly averages, swings and detail from the rating-history CSV
    History {
        /// Rating-history CSV
        #[arg(long, env = "RATING_DATA_PATH")]
        csv: Option<PathBuf>,
        /// Member ids to compare
        #[arg(
            short,
            long = "member",
            value_parser = clap::value_parser!(u32).range(i64::from(MEMBER_ID_MIN)..=i64::from(MEMBER_ID_MAX))
        )]
        members: Vec<u32>,
        /// Take members from pasted roster text instead
        #[arg(long)]
        roster: Option<PathBuf>,
        /// First year of the averages table
        #[arg(long)]
        from: Option<i32>,
        /// Last year of the averages table
        #[arg(long)]
        to: Option<i32>,
        /// Print the full dashboard report (with chart series) as JSON
        #[arg(long)]
        json: bool,
    },
    /// Start the JSON API server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
        /// Rating-history CSV for the history endpoints
        #[arg(long, env = "RATING_DATA_PATH")]
        csv: Option<PathBuf>,
    },
}

fn parse_member_id(raw: &str) -> Result<MemberId, String> {
    normalize(raw).ok_or_else(|| format!("'{}' is not a valid member id", raw))
}
