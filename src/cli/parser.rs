use crate::export::ExportFormat;
use crate::models::punch::PunchKind;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rPunchlog
/// Reconciles clock punches into day records and computes overtime
#[derive(Parser)]
#[command(
    name = "rpunchlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Punch-clock ledger: import turnstile/API punches, reconcile them per day and compute overtime",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show or change the overtime policy
    Policy {
        #[arg(long = "threshold", help = "Weekday minutes before overtime (e.g. 528, 8h48)")]
        threshold: Option<String>,

        #[arg(long = "weekend-full-overtime", help = "Count weekend days entirely as overtime")]
        weekend_full_overtime: Option<bool>,

        #[arg(long = "lunch-deduction", help = "Deduct the lunch break from worked time")]
        lunch_deduction: Option<bool>,

        #[arg(long = "daily-cap", help = "Maximum overtime per day (e.g. 2h)")]
        daily_cap: Option<String>,

        #[arg(long = "weekly-cap", help = "Maximum overtime per ISO week (e.g. 10h)")]
        weekly_cap: Option<String>,

        #[arg(long = "no-daily-cap", conflicts_with = "daily_cap")]
        no_daily_cap: bool,

        #[arg(long = "no-weekly-cap", conflicts_with = "weekly_cap")]
        no_weekly_cap: bool,
    },

    /// Record a manual punch for a date
    Add {
        /// Date of the punch (YYYY-MM-DD)
        date: String,

        /// Time of the punch (HH:MM)
        time: String,

        #[arg(
            long = "kind",
            value_enum,
            help = "Field the punch fills; without it the time widens entry/exit"
        )]
        kind: Option<PunchKind>,
    },

    /// Quick punch: fill one field, for today and the current time by default
    Punch {
        #[arg(value_enum)]
        kind: PunchKind,

        #[arg(long = "date", help = "Date (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(long = "time", help = "Time (HH:MM), default now")]
        time: Option<String>,
    },

    /// Import punches from a turnstile CSV export
    Import {
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// Import punches from a saved access-log API response (JSON)
    Sync {
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// List day records with worked time and overtime
    List {
        #[arg(
            long,
            short,
            help = "all, month, last:N, YYYY, YYYY-MM, YYYY-MM-DD or A:B (default: month)"
        )]
        period: Option<String>,
    },

    /// Delete the record of a date, or every record
    Del {
        #[arg(required_unless_present = "all")]
        date: Option<String>,

        #[arg(long = "all", conflicts_with = "date", help = "Delete every record")]
        all: bool,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Period summary, weekly roll-up and weekday distribution
    Dashboard {
        #[arg(long = "last", help = "Last N days")]
        last: Option<u32>,

        #[arg(long = "month", help = "Current month")]
        month: bool,

        #[arg(long = "from", requires = "to", help = "Range start (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long = "to", requires = "from", help = "Range end (YYYY-MM-DD)")]
        to: Option<String>,

        #[arg(long = "all", help = "Every record")]
        all: bool,

        #[arg(long = "save", help = "Remember this filter for the next runs")]
        save: bool,
    },

    /// Export day records
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
