//! Role-aware item reports from the command line
//!
//! Loads items from a CSV or JSON file and prints (or saves) a CSV/HTML report
//! as seen by a given user.

mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use role_reports::{
    aggregate, constants, items, select_visible, Config, FileConfig, Format, ReportGenerator, User,
};

#[derive(Parser, Debug)]
#[command(name = "role-reports")]
#[command(about = "Generate CSV/HTML item reports filtered by user role")]
struct Args {
    /// Config file (defaults apply when it does not exist)
    #[arg(short, long, default_value = constants::CONFIG_FILENAME, global = true)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a report
    Generate {
        /// Report format: CSV or HTML
        #[arg(long)]
        format: String,

        /// Name of the user the report is for
        #[arg(long)]
        user_name: String,

        /// Role of the user: ADMIN or USER
        #[arg(long)]
        role: String,

        /// Write the report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fail on unknown formats and roles instead of producing empty output
        #[arg(long)]
        strict: bool,

        /// Items file (.csv with id,name,value header, or .json array)
        items: PathBuf,
    },

    /// Show which items a role can see, with the total
    Visible {
        /// Role to preview: ADMIN or USER
        #[arg(long)]
        role: String,

        /// Items file (.csv with id,name,value header, or .json array)
        items: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let file_config = FileConfig::load_or_default(&args.config)?;
    let config = Config::from_file(&file_config)?;
    log::debug!("Using config: {:?}", config);

    match args.command {
        Command::Generate {
            format,
            user_name,
            role,
            output,
            strict,
            items,
        } => {
            let user = User::new(user_name, role.as_str());
            run_generate(
                config,
                &Format::from(format),
                &user,
                &items,
                output.as_deref(),
                strict,
            )
        }
        Command::Visible { role, items } => run_visible(&config, &role, &items),
    }
}

/// Generate one report and deliver it to stdout or a file
fn run_generate(
    config: Config,
    format: &Format,
    user: &User,
    items_path: &Path,
    output: Option<&Path>,
    strict: bool,
) -> Result<()> {
    let items = items::load_items(items_path)?;
    log::debug!("Loaded {} items from {}", items.len(), items_path.display());

    let strict = strict || config.strict;
    let generator = ReportGenerator::with_config((), config);
    let report = if strict {
        generator
            .try_generate_report(format, user, &items)
            .context("Report generation failed")?
    } else {
        generator.generate_report(format, user, &items)
    };

    match output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", report))
                .with_context(|| format!("Failed to write report: {}", path.display()))?;
            println!("  Generated: {}", path.display());
        }
        None => println!("{}", report),
    }

    Ok(())
}

/// Print the visible items for a role as a table
fn run_visible(config: &Config, role: &str, items_path: &Path) -> Result<()> {
    let items = items::load_items(items_path)?;
    let user = User::new(role, role);
    let visible = select_visible(&user, &items, &config.policy);

    if visible.is_empty() {
        println!("No items visible to role {:?}.", role);
        return Ok(());
    }

    println!("{:<12} {:<30} {:>14} {:>9}", "ID", "Name", "Value", "Priority");
    println!("{}", "-".repeat(68));
    for item in &visible {
        println!(
            "{:<12} {:<30} {:>14} {:>9}",
            item.id,
            item.name,
            item.value,
            if item.priority { "yes" } else { "" }
        );
    }
    println!("{}", "-".repeat(68));
    println!("{:<43} {:>14}", "Total", aggregate::total(&visible));
    println!(
        "\n{} of {} item(s) visible to {}",
        visible.len(),
        items.len(),
        role
    );

    Ok(())
}
