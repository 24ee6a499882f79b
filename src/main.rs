use aggregation::{AggregationEngine, CountryDetails, CountrySummary, MemoryStore, RecordStore};
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use comfy_table::Table;
use configuration::{Settings, StoreKind};
use core_types::{capitalize_fully, GoldMedal};
use database::DbRepository;
use std::fmt::Display;

/// The main entry point for the gold medal query tool.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file, if there is one.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let mut settings = configuration::load_config().context("Failed to load configuration")?;
    if let Some(kind) = cli.store {
        settings.store.kind = kind;
        settings.validate()?;
    }
    let _guard = configuration::init_tracing(&settings.logging)?;
    tracing::debug!(store = ?settings.store.kind, "Opening record store.");

    match settings.store.kind {
        StoreKind::Postgres => {
            let db_pool = database::connect(&settings.database).await?;
            database::run_migrations(&db_pool).await?;
            run(cli.command, AggregationEngine::new(DbRepository::new(db_pool)), &settings).await
        }
        StoreKind::Fixture => {
            let path = settings
                .store
                .fixture_path
                .as_ref()
                .context("store.fixture_path is not set")?;
            let store = MemoryStore::from_json_file(path)?;
            run(cli.command, AggregationEngine::new(store), &settings).await
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Query Olympic gold medal statistics by country.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Overrides `store.kind` from the configuration.
    #[arg(long, global = true, value_enum)]
    store: Option<StoreKind>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API.
    Serve,
    /// List every country with its gold medal count.
    Countries(ListArgs),
    /// Show the statistics for one country.
    Country {
        /// Country name, in any capitalisation.
        name: String,
    },
    /// List one country's gold medals.
    Medals {
        /// Country name, in any capitalisation.
        name: String,
        #[command(flatten)]
        list: ListArgs,
    },
    /// List every gold medal awarded in a given year.
    Year { year: i32 },
}

#[derive(Args)]
struct ListArgs {
    /// Field to order by (countries: name, gdp, population, medals;
    /// medals: year, season, city, name, event).
    #[arg(long)]
    sort_by: String,

    /// Sort ascending instead of descending.
    #[arg(long)]
    ascending: bool,
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// Serves the engine over HTTP, or runs a single query and prints it as a table.
async fn run<S>(command: Commands, engine: AggregationEngine<S>, settings: &Settings) -> anyhow::Result<()>
where
    S: RecordStore + 'static,
{
    match command {
        Commands::Serve => web_server::serve(settings.server.socket_addr(), engine).await?,
        Commands::Countries(args) => {
            let summaries = engine
                .list_country_summaries(&args.sort_by, args.ascending)
                .await?;
            println!("{}", summaries_table(&summaries));
        }
        Commands::Country { name } => {
            let details = engine.get_country_details(&capitalize_fully(&name)).await?;
            println!("{}", details_table(&details));
        }
        Commands::Medals { name, list } => {
            let medals = engine
                .list_country_medals(&capitalize_fully(&name), &list.sort_by, list.ascending)
                .await?;
            println!("{}", medals_table(&medals));
        }
        Commands::Year { year } => {
            let medals = engine.list_medals_in_year(year).await?;
            println!("{}", medals_table(&medals));
        }
    }
    Ok(())
}

fn or_dash<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn summaries_table(summaries: &[CountrySummary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Country", "GDP", "Population", "Gold Medals"]);
    for summary in summaries {
        table.add_row(vec![
            summary.country.name.clone(),
            or_dash(summary.country.gdp),
            or_dash(summary.country.population),
            summary.medal_count.to_string(),
        ]);
    }
    table
}

fn details_table(details: &CountryDetails) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Statistic", "Value"]);
    let rows = [
        ("Country", details.country_name.clone()),
        ("GDP", or_dash(details.gdp)),
        ("Population", or_dash(details.population)),
        ("Gold medals", or_dash(details.total_medal_count)),
        ("Summer wins", or_dash(details.number_summer_wins)),
        ("Share of summer events", or_dash(details.percentage_summer_wins.map(|p| p.round_dp(4)))),
        ("First summer win", or_dash(details.year_first_summer_win)),
        ("Winter wins", or_dash(details.number_winter_wins)),
        ("Share of winter events", or_dash(details.percentage_winter_wins.map(|p| p.round_dp(4)))),
        ("First winter win", or_dash(details.year_first_winter_win)),
        ("Won by female athletes", details.number_won_by_female_athletes.to_string()),
        ("Won by male athletes", details.number_won_by_male_athletes.to_string()),
    ];
    for (label, value) in rows {
        table.add_row(vec![label.to_string(), value]);
    }
    table
}

fn medals_table(medals: &[GoldMedal]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Year", "Season", "City", "Athlete", "Country", "Gender", "Event"]);
    for medal in medals {
        table.add_row(vec![
            medal.year.to_string(),
            medal.season.to_string(),
            medal.city.clone(),
            medal.name.clone(),
            medal.country.clone(),
            medal.gender.to_string(),
            medal.event.clone(),
        ]);
    }
    table
}
