use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use weeklog::application::{
    CheckConsistencyService, CleanWeeksService, ConfigService, FixSpacesService, WeeklyLogService,
};
use weeklog::cli::{
    format_check_report, format_clean_report, format_fix_report, format_weekly_report,
    parse_year, Cli, Commands,
};
use weeklog::error::WeeklogError;
use weeklog::infrastructure::{FileSystemVault, VaultRepository};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Initialize tracing on stderr so stdout only carries command output
fn init_tracing(verbose: bool) {
    let default = if verbose { "weeklog=debug" } else { "weeklog=warn" };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default.into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Run a command, returning the process exit code
fn run(cli: Cli) -> Result<i32, WeeklogError> {
    let vault = FileSystemVault::discover(cli.vault.as_deref())?;

    match cli.command {
        Commands::Week { year } => {
            let year = parse_year(year.as_deref())?;
            let config = vault.load_config()?;
            let service = WeeklyLogService::new(vault.clone(), config);

            let report = service.execute(year)?;
            print!("{}", format_weekly_report(&report, &vault, cli.verbose));
            Ok(if report.failed.is_empty() { 0 } else { 1 })
        }
        Commands::FixSpaces { files, year } => {
            let year = year.as_deref().map(|y| parse_year(Some(y))).transpose()?;
            let config = vault.load_config()?;
            let service = FixSpacesService::new(vault.clone(), config);

            let report = service.execute(&files, year)?;
            print!("{}", format_fix_report(&report, &vault));
            Ok(if report.failed.is_empty() { 0 } else { 1 })
        }
        Commands::CleanWeeks { year } => {
            let year = year.as_deref().map(|y| parse_year(Some(y))).transpose()?;
            let config = vault.load_config()?;
            let service = CleanWeeksService::new(vault.clone(), config);

            let report = service.execute(year)?;
            print!("{}", format_clean_report(&report, &vault));
            Ok(if report.failed.is_empty() { 0 } else { 1 })
        }
        Commands::Check => {
            let config = vault.load_config()?;
            let service = CheckConsistencyService::new(vault, config);

            let report = service.execute()?;
            print!("{}", format_check_report(&report));
            if report.is_clean() {
                Ok(0)
            } else {
                Err(WeeklogError::Inconsistent(report.problem_count()))
            }
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(vault);

            if list {
                for (key, value) in service.list()? {
                    println!("{} = {}", key, value);
                }
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: weeklog config [--list | <key> [<value>]]");
            }
            Ok(0)
        }
    }
}
