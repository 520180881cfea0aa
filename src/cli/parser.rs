use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for ClockFlow
/// Time-and-attendance administration over SQLite
#[derive(Parser)]
#[command(
    name = "clockflow",
    version = env!("CARGO_PKG_VERSION"),
    about = "Time-and-attendance administration: companies, employees, shifts, cost centers and punch records",
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

    /// Inspect the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Sign in/out and manage accounts
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },

    /// Manage companies
    Company {
        #[command(subcommand)]
        action: CompanyAction,
    },

    /// Manage cost centers
    #[command(name = "cost-center")]
    CostCenter {
        #[command(subcommand)]
        action: CostCenterAction,
    },

    /// Manage work shifts
    Shift {
        #[command(subcommand)]
        action: ShiftAction,
    },

    /// Manage employees
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Manage punch records
    Punch {
        #[command(subcommand)]
        action: PunchAction,
    },

    /// Import punch records from a report or CSV file
    Import {
        /// Plain-text punch report to import
        #[arg(long = "report", value_name = "FILE", conflicts_with_all = ["csv", "template"])]
        report: Option<String>,

        /// Manual-entry CSV file to import
        #[arg(long = "csv", value_name = "FILE", conflicts_with = "template")]
        csv: Option<String>,

        /// Write the manual-entry CSV template to FILE instead of importing
        #[arg(long = "template", value_name = "FILE")]
        template: Option<String>,
    },

    /// Export punch records
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, start:end, all)"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print or manage notifications
    Notify {
        #[arg(long = "print", help = "Print notifications")]
        print: bool,

        #[arg(long = "unread", help = "Only unread notifications")]
        unread: bool,

        #[arg(long = "mark-read", help = "Mark all notifications as read")]
        mark_read: bool,
    },

    /// Manage application parameters
    Param {
        #[command(subcommand)]
        action: ParamAction,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum AuthAction {
    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Sign out of the active session
    Logout,

    /// Show the active session
    Whoami,

    /// Create an account
    #[command(name = "add-user")]
    AddUser {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        name: String,
    },
}

#[derive(Subcommand)]
pub enum CompanyAction {
    /// Add a company
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        cnpj: Option<String>,
    },

    /// List companies
    List,

    /// Update a company
    Set {
        #[arg(long)]
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        cnpj: Option<String>,
    },

    /// Delete a company by id
    Del {
        #[arg(long)]
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum CostCenterAction {
    /// Add a cost center to a company
    Add {
        #[arg(long = "company-id")]
        company_id: i64,

        #[arg(long)]
        name: String,
    },

    /// List cost centers
    List {
        #[arg(long = "company-id")]
        company_id: Option<i64>,
    },

    /// Delete a cost center by id
    Del {
        #[arg(long)]
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum ShiftAction {
    /// Add a shift
    Add {
        #[arg(long)]
        name: String,

        #[arg(long = "company-id")]
        company_id: Option<i64>,

        #[arg(long = "cost-center-id")]
        cost_center_id: Option<i64>,

        #[arg(long = "in", help = "Shift clock-in time (HH:MM)")]
        clock_in: Option<String>,

        #[arg(long = "out", help = "Shift clock-out time (HH:MM)")]
        clock_out: Option<String>,
    },

    /// List shifts
    List,

    /// Delete a shift by id
    Del {
        #[arg(long)]
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// Add an employee
    Add {
        #[arg(long)]
        matricula: String,

        #[arg(long)]
        name: String,

        #[arg(long = "company-id")]
        company_id: i64,

        #[arg(long = "cost-center-id")]
        cost_center_id: i64,

        #[arg(long = "shift-id")]
        shift_id: Option<i64>,
    },

    /// List employees (cascading filters)
    List {
        #[arg(long = "company")]
        company: Option<i64>,

        #[arg(long = "cost-center")]
        cost_center: Option<i64>,

        #[arg(long = "shift")]
        shift: Option<i64>,
    },

    /// Update an employee
    Set {
        #[arg(long)]
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long = "cost-center-id")]
        cost_center_id: Option<i64>,

        #[arg(long = "shift-id")]
        shift_id: Option<i64>,
    },

    /// Delete an employee by id
    Del {
        #[arg(long)]
        id: i64,
    },

    /// Manage the employee photo (stored as <matricula>.jpg)
    Photo {
        #[arg(long)]
        matricula: String,

        /// Upload this file as the employee photo
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Check whether a photo is stored
        #[arg(long, conflicts_with = "file")]
        check: bool,

        /// Print the stored photo path
        #[arg(long, conflicts_with_all = ["file", "check"])]
        path: bool,
    },
}

#[derive(Subcommand)]
pub enum PunchAction {
    /// Add a punch record manually
    Add {
        #[arg(long)]
        matricula: String,

        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Comma-separated punch times, up to eight ("08:00,12:00,13:00,17:00")
        #[arg(long)]
        times: String,
    },

    /// List punch records (cascading filters)
    List {
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, start:end, all)"
        )]
        period: Option<String>,

        #[arg(long = "company")]
        company: Option<i64>,

        #[arg(long = "cost-center")]
        cost_center: Option<i64>,

        #[arg(long = "shift")]
        shift: Option<i64>,

        #[arg(long = "employee")]
        employee: Option<i64>,
    },

    /// Delete a punch record by id
    Del {
        #[arg(long)]
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum ParamAction {
    /// Set a parameter
    Set {
        key: String,
        value: String,
    },

    /// List parameters
    List,
}
