use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "rumbo", version, author, about = "A terminal progress tracker for a 150-day study plan")]
pub struct Cli {
    /// Show progress as of this date instead of now (YYYY-MM-DD or YYYY-MM-DDTHH:MM)
    #[arg(long, global = true, value_parser = parse_at)]
    pub at: Option<NaiveDateTime>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show current progress, milestones and weekly tracker
    Status,
    /// Credit extra study days ahead of the calendar
    Add {
        /// Number of days to add
        #[arg(default_value_t = 1, allow_negative_numbers = true)]
        days: i64,
    },
    /// Credit a full extra week
    Week,
    /// Log a rest day (subtracts one day)
    Rest,
    /// Clear manual adjustments and go back to pure calendar progress
    Reset,
    /// Jump straight to 100% (for trying out the celebration)
    #[command(hide = true)]
    Complete,
    /// Toggle a day in this week's tracker
    Track {
        /// Day: mon..sun or 0..6 (Monday = 0)
        day: String,
    },
    /// Export a markdown progress summary to stdout
    Export,
    /// Show the config path, optionally writing the defaults there
    Config {
        /// Write a config file with default values if none exists
        #[arg(long)]
        write: bool,
    },
}

impl Commands {
    /// Whether the command changes saved progress or tracker state.
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Commands::Add { .. }
                | Commands::Week
                | Commands::Rest
                | Commands::Reset
                | Commands::Complete
                | Commands::Track { .. }
        )
    }
}

fn parse_at(s: &str) -> Result<NaiveDateTime, String> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M") {
        return Ok(dt);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN))
        .map_err(|_| format!("'{}' is not a date (expected YYYY-MM-DD or YYYY-MM-DDTHH:MM)", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_at() {
        let d = parse_at("2026-04-25").unwrap();
        assert_eq!(d.to_string(), "2026-04-25 00:00:00");
        let dt = parse_at("2026-04-25T18:30").unwrap();
        assert_eq!(dt.to_string(), "2026-04-25 18:30:00");
        assert!(parse_at("25/04/2026").is_err());
    }

    #[test]
    fn test_cli_parses_commands() {
        let cli = Cli::try_parse_from(["rumbo", "add", "3"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Add { days: 3 })));

        let cli = Cli::try_parse_from(["rumbo", "add"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Add { days: 1 })));

        let cli = Cli::try_parse_from(["rumbo", "add", "-2"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Add { days: -2 })));

        let cli = Cli::try_parse_from(["rumbo", "status", "--at", "2026-03-01"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Status)));
        assert!(cli.at.is_some());

        let cli = Cli::try_parse_from(["rumbo"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_mutating_commands() {
        let parse = |args: &[&str]| Cli::try_parse_from(args).unwrap().command.unwrap();
        assert!(parse(&["rumbo", "add", "2"]).mutates());
        assert!(parse(&["rumbo", "complete"]).mutates());
        assert!(parse(&["rumbo", "track", "mon"]).mutates());
        assert!(!parse(&["rumbo", "status"]).mutates());
        assert!(!parse(&["rumbo", "export"]).mutates());
        assert!(!parse(&["rumbo", "config"]).mutates());
    }
}
