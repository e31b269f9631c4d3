use chrono::{Duration, NaiveDate};
use clap::Parser;

use mess_data_maker_rs::cli::{Cli, Command};
use mess_data_maker_rs::config::{GenerationConfig, load_config};
use mess_data_maker_rs::error::Result;
use mess_data_maker_rs::generator::DatasetBuilder;
use mess_data_maker_rs::menu::MenuSchedule;
use mess_data_maker_rs::report::{display_records, print_summary, write_records};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GenerationConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(start) = &cli.start_date {
        config.start_date = NaiveDate::parse_from_str(start, "%Y-%m-%d")?;
    }
    if let Some(end) = &cli.end_date {
        config.end_date = NaiveDate::parse_from_str(end, "%Y-%m-%d")?;
    }

    match command {
        Command::Generate { output } => cmd_generate(config, &output),
        Command::Preview { days } => cmd_preview(config, days),
    }
}

/// Generate the full dataset, write it to CSV, and print the summary.
fn cmd_generate(config: GenerationConfig, output: &str) -> Result<()> {
    println!(
        "Generating mess dataset: {} to {} ({} students, seed {})",
        config.start_date, config.end_date, config.total_capacity, config.seed
    );
    println!();

    let mut builder = DatasetBuilder::new(config, MenuSchedule::new())?;
    let records = builder.build()?;

    write_records(output, &records)?;
    println!();
    println!("Dataset saved to: {}", output);

    print_summary(&records);

    Ok(())
}

/// Generate the first few days and show them without writing anything.
fn cmd_preview(config: GenerationConfig, days: u32) -> Result<()> {
    config.validate()?;

    let preview_end = config.start_date + Duration::days(days.saturating_sub(1) as i64);
    let config = GenerationConfig {
        end_date: preview_end.min(config.end_date),
        ..config
    };

    let mut builder = DatasetBuilder::new(config, MenuSchedule::new())?;
    let records = builder.build()?;

    display_records(&records);

    Ok(())
}
