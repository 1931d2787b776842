use crate::core::view::SortMode;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rCheckin
/// CLI application to record and review classroom attendance with SQLite
#[derive(Parser)]
#[command(
    name = "rcheckin",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance CLI: students check in once a day, the professor reviews and exports",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Professor user name (required by gate, list, del and export)
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

    /// Professor password
    #[arg(global = true, long = "password")]
    pub password: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Use this RFC 3339 instant instead of the system clock
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

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

        #[arg(
            long = "set-password",
            value_name = "PASSWORD",
            help = "Store a new professor password (saved as SHA-256 digest)"
        )]
        set_password: Option<String>,
    },

    /// Register today's attendance for a student
    Checkin {
        /// Full name (at least two words)
        #[arg(long = "name")]
        name: String,

        /// Enrollment number
        #[arg(long = "enrollment")]
        enrollment: String,
    },

    /// Show or change whether check-ins are accepted
    Gate {
        #[arg(long = "enable", conflicts_with = "disable", help = "Accept new check-ins")]
        enable: bool,

        #[arg(long = "disable", help = "Refuse new check-ins")]
        disable: bool,
    },

    /// List attendance records
    List {
        #[arg(
            long,
            short,
            help = "Filter by day (YYYY-MM-DD), month (YYYY-MM) or year (YYYY); default: today"
        )]
        period: Option<String>,

        #[arg(long, short, help = "Name or enrollment number")]
        search: Option<String>,

        #[arg(long, value_enum, default_value = "date_desc")]
        sort: SortMode,
    },

    /// Delete an attendance record by ID
    Del {
        #[arg(long = "id", help = "Record id as shown by `list`")]
        id: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Export the filtered list of records
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(
            long,
            value_name = "FILE",
            help = "Output file (default: presencas_export_<mode>_<date>.<ext>)"
        )]
        file: Option<String>,

        #[arg(
            long,
            short,
            help = "Filter by day (YYYY-MM-DD), month (YYYY-MM) or year (YYYY); default: today"
        )]
        period: Option<String>,

        #[arg(long, short, help = "Name or enrollment number")]
        search: Option<String>,

        #[arg(long, value_enum, default_value = "date_desc")]
        sort: SortMode,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the database (integrity checks, etc.)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },
}
