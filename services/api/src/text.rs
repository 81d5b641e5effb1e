use clap::Args;
use happylens::config::AppConfig;
use happylens::dataset;
use happylens::error::AppError;
use happylens::ranking::{self, PromptWeightSource, RankedEntry, WeightSource};
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct RankArgs {
    /// Override the configured happiness dataset path
    #[arg(long)]
    pub(crate) data: Option<PathBuf>,
    /// Override the configured reporting year
    #[arg(long)]
    pub(crate) year: Option<i32>,
}

/// Text mode: load the dataset, collect weights over stdin, print the top 10.
///
/// A missing or unreadable dataset aborts with a visible error and non-zero
/// exit through the binary's error path.
pub(crate) fn run(args: RankArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let path = args.data.unwrap_or(config.data.happiness_path);
    let year = args.year.unwrap_or(config.data.reporting_year);

    let records = dataset::load(&path, year)?;

    let stdin = std::io::stdin();
    let weights = {
        let mut source = PromptWeightSource::new(stdin.lock(), std::io::stdout());
        source.collect_weights()?
    };

    let ranked = ranking::rank(&records, &weights);

    println!("\nYour personalized Top-10 countries based on your weights:");
    print!("{}", render_table(&ranked));
    Ok(())
}

fn render_table(entries: &[RankedEntry]) -> String {
    let width = entries
        .iter()
        .map(|entry| entry.country.len())
        .max()
        .unwrap_or(0)
        .max("Country".len());

    let mut table = String::new();
    let _ = writeln!(
        table,
        "{:<width$} | {:>14} | {:>8}",
        "Country",
        "HappinessScore",
        "Score",
        width = width
    );
    for entry in entries {
        let _ = writeln!(
            table,
            "{:<width$} | {:>14.3} | {:>8.3}",
            entry.country,
            entry.happiness_score,
            entry.score,
            width = width
        );
    }
    table
}
