use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for jobdesk
#[derive(Parser)]
#[command(
    name = "jobdesk",
    version = env!("CARGO_PKG_VERSION"),
    about = "Manage the jobs table: add, edit, delete and search jobs stored in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Without a subcommand the interactive window opens
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// The five job fields, as typed (dates in dd-mm-yyyy).
#[derive(Args, Debug, Clone)]
pub struct JobArgs {
    /// Worker ID (integer)
    #[arg(long = "worker", allow_hyphen_values = true)]
    pub worker: String,

    /// Job name
    #[arg(long = "name")]
    pub name: String,

    /// Payment (decimal number)
    #[arg(long = "payment", allow_hyphen_values = true)]
    pub payment: String,

    /// Start date (dd-mm-yyyy)
    #[arg(long = "start")]
    pub start: String,

    /// End date (dd-mm-yyyy), omit for an open job
    #[arg(long = "end")]
    pub end: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Open the interactive window (default)
    Ui,

    /// Add a new job
    Add {
        #[command(flatten)]
        fields: JobArgs,
    },

    /// Overwrite every field of an existing job
    Edit {
        /// Job ID to edit
        id: i64,

        #[command(flatten)]
        fields: JobArgs,
    },

    /// Delete a job by ID
    Del {
        /// Job ID to delete
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// List jobs, optionally only those of one worker
    List {
        /// Only jobs of this worker ID
        #[arg(long = "worker", short = 'w', allow_hyphen_values = true)]
        worker: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Search tasks by (part of) their name; no name lists all tasks
    Tasks {
        name: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
