use crate::export::ExportFormat;
use crate::models::day_record::GridCell;
use crate::models::line_item::LineField;
use crate::models::timesheet::{HeaderField, SignatureRole};
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimesheet
/// CLI application to record weekly crew timesheets
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Weekly crew timesheets: daily in/out grid, breaks, job line items and payable totals",
    long_about = None
)]
pub struct Cli {
    /// Override workbook path (useful for tests or a custom workbook)
    #[arg(global = true, long = "workbook")]
    pub workbook: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the workbook and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

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

    /// Print the internal operations log
    Log {
        #[arg(long = "print", help = "Print entries of the internal log")]
        print: bool,
    },

    /// Create a new draft timesheet
    New {
        #[arg(long = "employee", default_value = "")]
        employee: String,

        #[arg(long = "employee-id", default_value = "")]
        employee_id: String,

        #[arg(long = "foreman", default_value = "")]
        foreman: String,

        /// Week ending date (YYYY-MM-DD); defaults to the next week-ending day
        #[arg(long = "week-ending")]
        week_ending: Option<String>,
    },

    /// List all timesheets
    List,

    /// Show one timesheet with line items, daily grid and totals
    Show { id: u32 },

    /// Edit a header field (names, week ending, notes, signature dates)
    Set {
        id: u32,

        #[arg(value_enum)]
        field: HeaderField,

        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Add, remove or edit job line items
    Item {
        id: u32,

        #[command(subcommand)]
        action: ItemAction,
    },

    /// Set or clear one cell of the daily time grid
    Grid {
        id: u32,

        /// Weekday (mon, tuesday, ...)
        day: String,

        #[arg(value_enum)]
        cell: GridCell,

        /// Time as `h:mm AM|PM`
        #[arg(allow_hyphen_values = true, required_unless_present = "clear")]
        value: Option<String>,

        #[arg(long = "clear", conflicts_with = "value", help = "Blank the cell")]
        clear: bool,
    },

    /// Set the hourly rate of the daily grid
    Rate {
        id: u32,

        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Attach a signature image
    Sign {
        id: u32,

        #[arg(long = "role", value_enum)]
        role: SignatureRole,

        #[arg(long = "file", value_name = "FILE")]
        file: String,

        /// Signature date (YYYY-MM-DD); defaults to today
        #[arg(long = "date")]
        date: Option<String>,
    },

    /// Save the draft (updates "last edited")
    Save { id: u32 },

    /// Submit a timesheet (Draft → Submitted)
    Submit { id: u32 },

    /// Export the timesheet summary
    Export {
        id: u32,

        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Delete a timesheet
    Del { id: u32 },
}

#[derive(Subcommand)]
pub enum ItemAction {
    /// Append a blank line item
    Add,

    /// Remove a line item
    Del { item: u64 },

    /// Edit one field of a line item
    Set {
        item: u64,

        #[arg(value_enum)]
        field: LineField,

        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}
