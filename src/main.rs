use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use expense_cli::backup::BackupManager;
use expense_cli::cli::{
    handle_add, handle_backup_command, handle_export_tax, handle_list, handle_quick_food,
    handle_report, show_config, show_stats, AddArgs, BackupCommands, ExportTaxArgs, ListArgs,
    QuickFoodArgs, ReportArgs,
};
use expense_cli::config::{ExpensePaths, Settings};
use expense_cli::display::format_tips;
use expense_cli::interactive::MenuSession;
use expense_cli::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "expenses",
    author = "Kaylee Beyene",
    version,
    about = "Personal command-line expense logger",
    long_about = "Log expenses to a CSV file, see where the money goes, compare \
                  each month against your budget goals, export business expenses \
                  for taxes, and keep timestamped backups."
)]
struct Cli {
    /// Directory holding expenses.csv, backups/ and config.json
    #[arg(long, global = true, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (the default)
    Menu,

    /// Add an expense
    Add(AddArgs),

    /// Add a food expense dated today
    QuickFood(QuickFoodArgs),

    /// List expenses, newest first
    #[command(alias = "ls")]
    List(ListArgs),

    /// All-time statistics per category
    Stats,

    /// Monthly report against budget goals
    Report(ReportArgs),

    /// Export business expenses for taxes
    ExportTax(ExportTaxArgs),

    /// Show spending tips
    Tips,

    /// Backup management commands
    #[command(subcommand)]
    Backup(BackupCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = ExpensePaths::resolve(cli.data_dir)?;
    debug!(base = %paths.base_dir().display(), "resolved data directory");

    let mut out = io::stdout().lock();

    let init = initialize_storage(&paths)?;
    if init.created_backup_dir {
        writeln!(out, "Created {} directory for backups", paths.backup_dir().display())?;
    }
    if init.created_data_file {
        writeln!(out, "Created new expense file! Ready to start tracking. 💪")?;
        if !init.created_backup_dir && !BackupManager::new(&paths).list_backups()?.is_empty() {
            writeln!(
                out,
                "💡 Found earlier backups. Restore one with: expenses backup restore latest --force"
            )?;
        }
    }

    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone());
    let today = Local::now().date_naive();

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let stdin = io::stdin().lock();
            MenuSession::new(&storage, &settings, stdin, &mut out, today).run()?;
        }
        Commands::Add(args) => handle_add(&storage, &settings, args, today, &mut out)?,
        Commands::QuickFood(args) => {
            handle_quick_food(&storage, &settings, args, today, &mut out)?
        }
        Commands::List(args) => handle_list(&storage, &settings, args, &mut out)?,
        Commands::Stats => show_stats(&storage, &settings, &mut out)?,
        Commands::Report(args) => handle_report(&storage, &settings, args, &mut out)?,
        Commands::ExportTax(args) => {
            handle_export_tax(&storage, &settings, args, today, &mut out)?
        }
        Commands::Tips => write!(out, "{}", format_tips())?,
        Commands::Backup(cmd) => handle_backup_command(&paths, cmd, &mut out)?,
        Commands::Config => show_config(&paths, &settings, &mut out)?,
    }

    out.flush()?;
    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "expense_cli=debug"
    } else {
        "expense_cli=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
