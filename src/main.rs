use anyhow::Result;
use clap::{Parser, Subcommand};

use tally_cli::cli::{
    handle_export_command, handle_import_command, handle_record_command, handle_report_command,
};
use tally_cli::config::{paths::TallyPaths, settings::Settings};
use tally_cli::models::CategoryCatalog;
use tally_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Terminal-based personal budget tracking and reporting",
    long_about = "TallyCLI tracks income, expenses, savings, and investments, \
                  and turns them into monthly, yearly, category, and comparison \
                  reports from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record management commands
    #[command(subcommand, alias = "rec")]
    Record(tally_cli::cli::RecordCommands),

    /// Report generation commands
    #[command(subcommand, alias = "rpt")]
    Report(tally_cli::cli::ReportCommands),

    /// Export records to CSV or JSON
    #[command(subcommand)]
    Export(tally_cli::cli::ExportCommands),

    /// Import records from a CSV file
    Import {
        /// Path to CSV file (date,type,category,amount,description)
        file: std::path::PathBuf,
    },

    /// Initialize the data directory, settings, and category catalog
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TallyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let catalog = CategoryCatalog::load_or_default(&paths.catalog_file())?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Record(cmd)) => {
            handle_record_command(&storage, &settings, &catalog, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &catalog, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, cmd)?;
        }
        Some(Commands::Import { file }) => {
            handle_import_command(&storage, &catalog, file)?;
        }
        Some(Commands::Init) => {
            println!("Initializing TallyCLI at: {}", paths.data_dir().display());
            tally_cli::storage::init::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("A default category catalog has been written to:");
            println!("  {}", paths.catalog_file().display());
            println!();
            println!("Run 'tally record add income salary 8500' to add your first record.");
        }
        Some(Commands::Config) => {
            println!("TallyCLI Configuration");
            println!("======================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Catalog file:     {}", paths.catalog_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Page size:       {}", settings.page_size);
        }
        None => {
            println!("TallyCLI - Terminal-based budget tracking and reporting");
            println!();
            println!("Run 'tally --help' for usage information.");
            println!("Run 'tally init' to set up a new budget.");
        }
    }

    Ok(())
}
