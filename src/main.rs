use anyhow::Result;
use clap::{Parser, Subcommand};

use tally::cli::{
    handle_categories_command, handle_export_command, handle_report_command, handle_summary,
    handle_transaction_command, ExportArgs, ReportCommands, TransactionCommands,
};
use tally::config::{paths::TallyPaths, settings::Settings};
use tally::storage::{initialize_storage, seed_sample_data, TransactionStore};

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Terminal-based personal income and expense tracker",
    long_about = "tally records income and expense transactions in a local JSON \
                  ledger and derives summary totals, category breakdowns, monthly \
                  reports, and CSV exports from it."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Transaction(TransactionCommands),

    /// Show totals and recent activity
    Summary,

    /// Reporting commands
    #[command(subcommand)]
    Report(ReportCommands),

    /// List the category vocabulary
    Categories {
        /// Limit to one type (income or expense)
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        kind: Option<String>,
    },

    /// Export transactions to CSV
    Export(ExportArgs),

    /// Initialize the data directory
    Init {
        /// Seed demonstration data when the ledger is empty
        #[arg(long)]
        sample: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let paths = TallyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let store = TransactionStore::new(paths.transactions_file());
    store.load()?;

    match cli.command {
        Commands::Transaction(cmd) => handle_transaction_command(&store, cmd)?,
        Commands::Summary => handle_summary(&store, &settings)?,
        Commands::Report(cmd) => handle_report_command(&store, &settings, cmd)?,
        Commands::Categories { kind } => handle_categories_command(kind)?,
        Commands::Export(args) => handle_export_command(&store, args)?,
        Commands::Init { sample } => {
            let first_run = !paths.is_initialized();
            initialize_storage(&paths)?;
            if first_run {
                settings.save(&paths)?;
            }

            if sample {
                let seeded = seed_sample_data(&store, chrono::Local::now().date_naive())?;
                if seeded > 0 {
                    println!("Seeded {} sample transactions", seeded);
                } else {
                    println!("Ledger already has data; sample data not added");
                }
            }

            println!("Initialized tally at {}", paths.base_dir().display());
        }
        Commands::Config => {
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Currency symbol:   {}", settings.currency_symbol);
            println!("Report months:     {}", settings.report_months);
        }
    }

    Ok(())
}
