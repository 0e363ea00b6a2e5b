use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use holdings_screen::cli::{
    handle_areas_command, handle_categories_command, handle_dataset_command,
    handle_export_command, handle_show_command, AppContext, DatasetCommands, ExportArgs, ShowArgs,
};
use holdings_screen::config::{HoldingsPaths, Settings};
use holdings_screen::HoldingsResult;

#[derive(Parser)]
#[command(
    name = "holdings",
    version,
    about = "Screen municipal and regional securities holdings",
    long_about = "Loads the encrypted holdings dataset and shows which securities \
                  held by Danish municipalities and regions are flagged by exclusion \
                  lists. Filter by area, search text and reason category, and export \
                  the selection."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Dataset file to load instead of the configured one
    #[arg(long, global = true, env = "HOLDINGS_DATASET")]
    dataset: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show counters, key figures and holdings for a selection
    Show(ShowArgs),

    /// List the selectable areas
    Areas,

    /// List the reason categories in the dataset
    Categories,

    /// Export a selection to xlsx, csv or json
    Export(ExportArgs),

    /// Dataset sealing and verification
    #[command(subcommand)]
    Dataset(DatasetCommands),

    /// Show current configuration and paths
    Config {
        /// Write the settings in effect to config.json for editing
        #[arg(long)]
        init: bool,
    },
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
    if verbose > 0 {
        let level = match verbose {
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };
        builder.filter_level(level);
    }
    builder.format_timestamp(None).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Initialize paths and settings
    let paths = HoldingsPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let ctx = AppContext::new(paths, settings, cli.dataset);

    if let Err(err) = run(&ctx, cli.command) {
        if err.is_fatal() {
            log::error!("Dataset could not be opened: {}", err);
            return Err(anyhow::Error::new(err).context(format!(
                "Cannot open {} (key from {})",
                ctx.dataset_path().display(),
                ctx.settings.key_env_var
            )));
        }
        return Err(err.into());
    }

    Ok(())
}

fn run(ctx: &AppContext, command: Option<Commands>) -> HoldingsResult<()> {
    match command {
        Some(Commands::Show(args)) => handle_show_command(ctx, args)?,
        Some(Commands::Areas) => handle_areas_command(ctx)?,
        Some(Commands::Categories) => handle_categories_command(ctx)?,
        Some(Commands::Export(args)) => handle_export_command(ctx, args)?,
        Some(Commands::Dataset(cmd)) => handle_dataset_command(ctx, cmd)?,
        Some(Commands::Config { init }) => {
            if init {
                ctx.settings.save(&ctx.paths)?;
                println!("Wrote settings to: {}", ctx.paths.settings_file().display());
                println!();
            }
            let settings = &ctx.settings;
            println!("Holdings Screen Configuration");
            println!("=============================");
            println!("Base directory:   {}", ctx.paths.base_dir().display());
            println!("Dataset file:     {}", ctx.dataset_path().display());
            println!("Narratives file:  {}", ctx.paths.narratives_file().display());
            println!("Export directory: {}", ctx.paths.export_dir().display());
            println!();
            println!("Settings:");
            println!("  Key variable:      {}", settings.key_env_var);
            println!(
                "  Encrypted columns: {}",
                settings.encrypted_columns.join(", ")
            );
            println!(
                "  Regions:           {}",
                settings.area_classification.regions.len()
            );
            println!(
                "  Unaffiliated:      {}",
                settings
                    .area_classification
                    .unaffiliated
                    .iter()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            println!(
                "  Organization links: {}",
                settings.organization_links.len()
            );
        }
        None => {
            println!("holdings - Screen municipal and regional securities holdings");
            println!();
            println!("Run 'holdings --help' for usage information.");
            println!("Run 'holdings show' to see the whole country.");
        }
    }

    Ok(())
}
