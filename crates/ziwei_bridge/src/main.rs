use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};
use ziwei_bridge::{BridgeConfig, ChartResult, serve};
use ziwei_calendar::{GregorianDate, stem_branch_of, to_lunar};
use ziwei_chart::{ChartConfig, Gender, build_chart};

#[derive(Parser)]
#[command(name = "ziwei-bridge", about = "Zi Wei Dou Shu chart engine")]
struct Cli {
    /// Swap Ming/Shen counting directions for female charts
    #[arg(long, global = true, env = "ZIWEI_GENDER_REVERSAL")]
    gender_reversal: bool,
    /// Include the 12-palace wheel in chart output
    #[arg(long, global = true, env = "ZIWEI_EMIT_PALACES")]
    palaces: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer JSON requests on stdin, one per line (default)
    Serve,
    /// Print one chart as JSON
    Chart {
        /// Birth date, YYYY-MM-DD
        date: String,
        /// Clock hour 0-23
        #[arg(long, default_value = "0")]
        hour: u32,
        /// male or female
        #[arg(long, default_value = "male")]
        gender: String,
    },
    /// Print the lunisolar date and year pillar
    Lunar {
        /// Gregorian date, YYYY-MM-DD
        date: String,
    },
}

fn main() -> Result<()> {
    // stdout carries the protocol; logs go to stderr.
    fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = BridgeConfig {
        chart: ChartConfig::new(cli.gender_reversal),
        emit_palaces: cli.palaces,
    };

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            serve(stdin.lock(), stdout.lock(), &config)?;
        }
        Commands::Chart { date, hour, gender } => {
            let birth = GregorianDate::parse(&date, hour)?;
            let gender: Gender = gender.parse()?;
            let chart = build_chart(&birth, gender, &config.chart)?;
            let result = ChartResult::from_chart(&chart, config.emit_palaces);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Lunar { date } => {
            let birth = GregorianDate::parse(&date, 0)?;
            let lunar = to_lunar(&birth)?;
            let pillar = stem_branch_of(lunar.year());
            println!("{lunar} {}", pillar.name());
        }
    }
    Ok(())
}
