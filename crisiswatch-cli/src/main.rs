//! CrisisWatch CLI — crisis signals and risk scores for symbols and portfolios.
//!
//! Commands:
//! - `analyze` — summary, crisis signals and risk tier for one symbol
//! - `portfolio` — aggregate risk over a symbol list
//! - `dashboard` — quick look at the featured symbols
//!
//! Settings come from an optional TOML file (`--config`); flags override it.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use crisiswatch_core::config::SourceKind;
use crisiswatch_core::indicators::VolatilityMethod;
use crisiswatch_core::pipeline::parse_symbol_list;
use crisiswatch_core::{
    analyze_symbol, build_dashboard, CrisisConfig, DashboardTile, MarketDataFetcher,
    PortfolioAggregator, PortfolioResult, Period, RiskScorer, SymbolAnalysis,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "crisiswatch",
    about = "CrisisWatch CLI — market crisis signals and risk scoring"
)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Market data source (overrides the config file).
    #[arg(long, global = true, value_enum)]
    source: Option<SourceArg>,

    /// Directory of {SYMBOL}.csv files for `--source csv`.
    #[arg(long, global = true)]
    csv_dir: Option<PathBuf>,

    /// Lookback period: 30d, 90d, 1y, 6mo, ytd, max, ...
    #[arg(long, global = true)]
    period: Option<String>,

    /// How daily-return volatility is scaled.
    #[arg(long, global = true, value_enum)]
    volatility_method: Option<MethodArg>,

    /// Add a tenth of the volatility to the risk score.
    #[arg(long, global = true, default_value_t = false)]
    volatility_adjustment: bool,

    /// Debug logging on stderr (RUST_LOG takes precedence).
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single symbol.
    Analyze {
        /// Ticker (e.g., AAPL, ^GSPC, BTC-USD).
        symbol: String,

        /// Print the analysis as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Aggregate risk over a list of symbols.
    Portfolio {
        /// Symbols, space- or comma-separated (e.g., AAPL,SPY MSFT).
        #[arg(required = true)]
        symbols: Vec<String>,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Show the featured symbols.
    Dashboard {
        /// Override the featured symbols.
        #[arg(long, value_delimiter = ',')]
        symbols: Vec<String>,

        /// Print the tiles as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SourceArg {
    Yahoo,
    Demo,
    Csv,
}

impl From<SourceArg> for SourceKind {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Yahoo => SourceKind::Yahoo,
            SourceArg::Demo => SourceKind::Demo,
            SourceArg::Csv => SourceKind::Csv,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum MethodArg {
    Annualized,
    Raw,
}

impl From<MethodArg> for VolatilityMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Annualized => VolatilityMethod::Annualized,
            MethodArg::Raw => VolatilityMethod::Raw,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    let fetcher = config.build_fetcher()?;
    let scorer = config.scorer();
    let period = config.data.period.clone();

    tracing::debug!(
        provider = fetcher.provider_name(),
        %period,
        "configuration loaded"
    );

    match cli.command {
        Commands::Analyze { symbol, json } => {
            run_analyze(&fetcher, &scorer, &period, &symbol, json)
        }
        Commands::Portfolio { symbols, format } => {
            run_portfolio(&fetcher, &scorer, &period, &symbols, format)
        }
        Commands::Dashboard { symbols, json } => {
            let featured = if symbols.is_empty() {
                config.dashboard.featured.clone()
            } else {
                symbols
            };
            run_dashboard(&fetcher, &scorer, &period, &featured, json)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Config file (or defaults) with command-line overrides applied.
fn load_config(cli: &Cli) -> Result<CrisisConfig> {
    let mut config = match &cli.config {
        Some(path) => CrisisConfig::from_file(path)?,
        None => CrisisConfig::default(),
    };

    if let Some(source) = cli.source {
        config.data.source = source.into();
    }
    if let Some(dir) = &cli.csv_dir {
        config.data.csv_dir = dir.clone();
    }
    if let Some(period) = &cli.period {
        config.data.period =
            Period::parse(period).with_context(|| format!("--period {period}"))?;
    }
    if let Some(method) = cli.volatility_method {
        config.analysis.volatility_method = method.into();
    }
    if cli.volatility_adjustment {
        config.analysis.volatility_adjustment = true;
    }

    config.validate()?;
    Ok(config)
}

fn run_analyze(
    fetcher: &MarketDataFetcher,
    scorer: &RiskScorer,
    period: &Period,
    symbol: &str,
    json: bool,
) -> Result<()> {
    let analysis = analyze_symbol(fetcher, scorer, symbol, period)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_analysis(&analysis, period);
    }
    Ok(())
}

fn run_portfolio(
    fetcher: &MarketDataFetcher,
    scorer: &RiskScorer,
    period: &Period,
    args: &[String],
    format: OutputFormat,
) -> Result<()> {
    let symbols: Vec<String> = args.iter().flat_map(|a| parse_symbol_list(a)).collect();

    let result = PortfolioAggregator::new(fetcher)
        .with_scorer(*scorer)
        .with_period(period.clone())
        .analyze(&symbols)?;

    match format {
        OutputFormat::Text => print_portfolio(&result),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Csv => write_portfolio_csv(&result)?,
    }
    Ok(())
}

fn run_dashboard(
    fetcher: &MarketDataFetcher,
    scorer: &RiskScorer,
    period: &Period,
    symbols: &[String],
    json: bool,
) -> Result<()> {
    let tiles = build_dashboard(fetcher, scorer, period, symbols);

    if json {
        println!("{}", serde_json::to_string_pretty(&tiles)?);
    } else {
        print_dashboard(&tiles, period);
    }
    Ok(())
}

// ── Rendering ────────────────────────────────────────────────────────

fn print_analysis(analysis: &SymbolAnalysis, period: &Period) {
    let s = &analysis.summary;
    let r = &analysis.risk;

    println!();
    println!("=== {} ({period}) ===", s.symbol);
    if s.is_demo() {
        println!("  [DEMO DATA]");
    }
    println!();
    println!("  Current Price:    {:>12.2}", s.current_price);
    println!("  Price Change:     {:>11.2}%", s.price_change_percent);
    println!("  Volatility:       {:>11.2}%", s.volatility_percent);
    println!("  Volume:           {:>12}", s.volume);
    println!();
    println!("  Signals ({}):", analysis.signals.signal_count());
    if analysis.signals.is_empty() {
        println!("    No crisis signals detected");
    } else {
        for signal in analysis.signals.signals() {
            println!("    - {}", signal.description());
        }
    }
    println!();
    println!("  Risk Score:       {:>12.2}", r.risk_score);
    println!("  Classification:   {:>12}", r.classification.label());
    println!("  Recommendation:   {}", r.recommendation);
    println!();
}

fn print_portfolio(result: &PortfolioResult) {
    println!();
    println!("=== Portfolio ===");
    println!();
    println!(
        "{:<10} {:>12} {:>12} {:>10} {:<10}",
        "Symbol", "Price", "Volatility", "Risk", "Tier"
    );
    println!("{}", "-".repeat(58));
    for e in &result.entries {
        println!(
            "{:<10} {:>12.2} {:>11.2}% {:>10.2} {:<10}",
            e.symbol, e.price, e.volatility, e.risk_score, e.classification.label()
        );
    }
    println!();
    println!("  Portfolio Risk:   {:>8.2}", result.portfolio_risk);
    println!("  High-Risk Count:  {:>8}", result.high_risk_count);
    println!("  Recommendation:   {:>8}", result.recommendation.label());

    if !result.skipped.is_empty() {
        println!();
        println!("  Skipped:");
        for s in &result.skipped {
            println!("    {}: {}", s.symbol, s.reason);
        }
    }
    println!();
}

fn write_portfolio_csv(result: &PortfolioResult) -> Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    for entry in &result.entries {
        writer.serialize(entry)?;
    }
    writer.flush()?;
    Ok(())
}

fn print_dashboard(tiles: &[DashboardTile], period: &Period) {
    println!();
    println!("=== Dashboard ({period}) ===");
    println!();
    for tile in tiles {
        match &tile.outcome {
            Ok(a) => {
                let demo = if a.summary.is_demo() { " [DEMO]" } else { "" };
                println!(
                    "{:<10} {:>12.2} {:>+8.2}%  {:<9} {} signal(s){demo}",
                    tile.symbol,
                    a.summary.current_price,
                    a.summary.price_change_percent,
                    a.risk.classification.label(),
                    a.signals.signal_count(),
                );
            }
            Err(e) => println!("{:<10} Unable to fetch: {e}", tile.symbol),
        }
    }
    println!();
}
