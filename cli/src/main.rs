mod render;
mod tui;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use rosterview_core::config::{self, VisibleMonthsConfig};
use rosterview_core::{
    expand_key, expand_month, CachedRosterRepository, FileRosterRepository, Role, RosterRepository,
    RosterView, Section,
};
use tracing::{debug, info, Level};

#[derive(Parser)]
#[command(name = "rosterview")]
#[command(about = "Read dealer and shift manager rosters from spreadsheet CSV exports", long_about = None)]
struct Cli {
    /// Directory holding one folder of CSV exports per country
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Visible months config (defaults to ~/.rosterview/visible_months.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct MonthArgs {
    /// Country folder name, prefixes are accepted
    #[arg(long)]
    country: String,
    /// Month name, prefix or number
    #[arg(long)]
    month: String,
    /// dealer, sm, operation, admin or global_admin
    #[arg(long, default_value = "operation", value_parser = parse_role)]
    role: Role,
    /// Only this person's rows (dealer and sm roles)
    #[arg(long)]
    person: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the color and working times of shift codes
    Classify {
        #[arg(required = true)]
        codes: Vec<String>,
    },
    #[command(flatten)]
    Roster(RosterCommand),
}

/// Commands that read the data directory.
#[derive(Subcommand)]
enum RosterCommand {
    /// List the months with published rosters
    Months {
        #[arg(long)]
        country: String,
        /// schedule, mistake_statistics or daily_mistakes
        #[arg(long, default_value = "schedule", value_parser = parse_section)]
        section: Section,
        /// Save these months (comma separated) as the section's visible list
        #[arg(long, value_delimiter = ',')]
        set: Vec<String>,
    },
    /// Daily mistakes table
    Daily {
        #[command(flatten)]
        args: MonthArgs,
    },
    /// Shift roster table
    Shifts {
        #[command(flatten)]
        args: MonthArgs,
        /// Use the shift managers' roster
        #[arg(long)]
        manager: bool,
    },
    /// Colored week calendar per person
    Calendar {
        #[command(flatten)]
        args: MonthArgs,
        #[arg(long)]
        manager: bool,
        /// Open the interactive calendar
        #[arg(long)]
        tui: bool,
    },
    /// Working hours with day and night rows paired
    Hours {
        #[command(flatten)]
        args: MonthArgs,
        #[arg(long)]
        manager: bool,
    },
    /// Mistake statistics grouped by category
    Mistakes {
        #[command(flatten)]
        args: MonthArgs,
    },
}

fn parse_role(s: &str) -> Result<Role, String> {
    s.parse().map_err(|e: anyhow::Error| e.to_string())
}

fn parse_section(s: &str) -> Result<Section, String> {
    match s.trim().to_lowercase().replace('-', "_").as_str() {
        "schedule" => Ok(Section::Schedule),
        "mistake_statistics" | "mistakes" => Ok(Section::MistakeStatistics),
        "daily_mistakes" | "daily" => Ok(Section::DailyMistakes),
        _ => Err(format!("Unknown section: '{}'", s)),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

/// Accept a country prefix when the data directory lists it unambiguously.
fn resolve_country(repo: &FileRosterRepository, input: &str) -> Result<String> {
    let countries = repo.countries()?;
    let candidates: Vec<&str> = countries.iter().map(String::as_str).collect();
    match expand_key(input, &candidates) {
        Ok(country) => Ok(country.to_string()),
        Err(e) if candidates.is_empty() => Err(anyhow!("No country folders in data directory: {}", e)),
        Err(e) => Err(e),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Classify { codes } => {
            render::print_classified(&codes);
            Ok(())
        }
        Commands::Roster(command) => run(command, cli.data_dir, cli.config),
    }
}

fn run(command: RosterCommand, data_dir: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let files = FileRosterRepository::new(data_dir)?;
    debug!(data_dir = %files.base_dir().display(), "using data directory");
    let repo = CachedRosterRepository::new(files);
    let files = repo.inner();

    match command {
        RosterCommand::Months { country, section, set } => {
            let country = resolve_country(files, &country)?;
            let config_path = match config_path {
                Some(path) => path,
                None => config::default_path()?,
            };
            let mut visible = VisibleMonthsConfig::load(&config_path)?;
            if !set.is_empty() {
                let months = set
                    .iter()
                    .map(|m| expand_month(m).map(str::to_string))
                    .collect::<Result<Vec<_>>>()?;
                let config = visible.get_or_insert_with(VisibleMonthsConfig::default);
                config.set_months(&country, section, months);
                config.save(&config_path)?;
                info!(path = %config_path.display(), "saved visible months");
            }

            let months = config::visible_months(visible.as_ref(), &repo, &country, section)?;
            let listing = months
                .into_iter()
                .map(|month| {
                    let present = repo.available_files(&country, &month)?;
                    Ok((month, present))
                })
                .collect::<Result<Vec<_>>>()?;
            render::print_months(&country, section, &listing);
        }
        RosterCommand::Daily { args } => {
            let (country, month_name) = resolve_month_args(files, &args)?;
            let view = RosterView::new(&repo, args.role, args.person.as_deref());
            match view.daily_stats(&country, month_name)? {
                Some(data) => render::print_daily_stats(&data),
                None => render::print_no_data(&country, month_name),
            }
        }
        RosterCommand::Shifts { args, manager } => {
            let (country, month_name) = resolve_month_args(files, &args)?;
            let view = RosterView::new(&repo, args.role, args.person.as_deref());
            match view.shifts(&country, month_name, manager)? {
                Some(data) => render::print_shifts(&data),
                None => render::print_no_data(&country, month_name),
            }
        }
        RosterCommand::Calendar { args, manager, tui: interactive } => {
            let (country, month_name) = resolve_month_args(files, &args)?;
            let view = RosterView::new(&repo, args.role, args.person.as_deref());
            match view.calendar(&country, month_name, manager)? {
                Some(calendar) if interactive => tui::run(calendar)?,
                Some(calendar) => render::print_calendar(&calendar),
                None => render::print_no_data(&country, month_name),
            }
        }
        RosterCommand::Hours { args, manager } => {
            let (country, month_name) = resolve_month_args(files, &args)?;
            let view = RosterView::new(&repo, args.role, args.person.as_deref());
            match view.working_hours(&country, month_name, manager)? {
                Some(data) => render::print_working_hours(&data),
                None => render::print_no_data(&country, month_name),
            }
        }
        RosterCommand::Mistakes { args } => {
            let (country, month_name) = resolve_month_args(files, &args)?;
            let view = RosterView::new(&repo, args.role, args.person.as_deref());
            match view.mistake_stats(&country, month_name)? {
                Some(data) => render::print_mistake_stats(&data),
                None => render::print_no_data(&country, month_name),
            }
        }
    }
    Ok(())
}

fn resolve_month_args(repo: &FileRosterRepository, args: &MonthArgs) -> Result<(String, &'static str)> {
    let country = resolve_country(repo, &args.country)?;
    let month = expand_month(&args.month)?;
    Ok((country, month))
}
