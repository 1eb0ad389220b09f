//! News desk command-line driver.
//!
//! # Responsibility
//! - Prepare source files, sort merged articles by date and print reports.
//! - Read configuration from arguments and `NEWSDESK_*` environment variables.

use clap::{Parser, Subcommand};
use log::error;
use newsdesk_core::{
    init_logging_with, merge_labeled_sources, remove_empty_rows, render_month_histogram,
    DeskService, KeywordQuery, LogConfig, SortConfig, DEFAULT_RUN_SIZE,
};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

const PREVIEW_ROWS: usize = 5;
const REPORT_YEAR: i32 = 2016;
const TOP_WORDS: usize = 10;

/// Fake news dataset preparation, date sorting and reports.
#[derive(Parser, Debug)]
#[command(name = "newsdesk_cli", version)]
struct Cli {
    /// Articles per insertion-sorted run before merging
    #[arg(
        long,
        global = true,
        env = "NEWSDESK_RUN_SIZE",
        default_value_t = DEFAULT_RUN_SIZE
    )]
    run_size: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Drop rows with missing columns from a raw source file
    Clean { input: PathBuf, output: PathBuf },
    /// Merge the true and fake sources into one labeled file
    Merge {
        true_path: PathBuf,
        fake_path: PathBuf,
        output: PathBuf,
    },
    /// Sort merged articles by date and preview the result
    Sort {
        input: PathBuf,
        /// Write the sorted export here
        output: Option<PathBuf>,
    },
    /// Print label counts and political fake news statistics
    Report {
        input: PathBuf,
        #[arg(default_value_t = REPORT_YEAR)]
        year: i32,
    },
    /// Find articles whose content mentions a keyword
    Search {
        input: PathBuf,
        keyword: String,
        category: Option<String>,
        /// Matched as a substring of the date text
        year: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("event=cli_failed module=cli status=error message={message}");
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    if let Some(config) = LogConfig::from_env()? {
        init_logging_with(config)?;
    }

    let sort_config = SortConfig {
        run_size: cli.run_size,
    };
    match cli.command {
        Command::Clean { input, output } => clean(&input, &output),
        Command::Merge {
            true_path,
            fake_path,
            output,
        } => merge(&true_path, &fake_path, &output),
        Command::Sort { input, output } => sort(sort_config, &input, output.as_deref()),
        Command::Report { input, year } => report(sort_config, &input, year),
        Command::Search {
            input,
            keyword,
            category,
            year,
        } => {
            let mut query = KeywordQuery::keyword(keyword);
            if let Some(category) = category {
                query = query.with_category(category);
            }
            if let Some(year) = year {
                query = query.with_year(year);
            }
            search(sort_config, &input, &query)
        }
    }
}

fn clean(input: &Path, output: &Path) -> Result<(), String> {
    let reader = BufReader::new(open(input)?);
    let writer = BufWriter::new(create(output)?);
    let kept = remove_empty_rows(reader, writer).map_err(|err| err.to_string())?;
    println!("Kept {kept} complete rows in {}", output.display());
    Ok(())
}

fn merge(true_path: &Path, fake_path: &Path, output: &Path) -> Result<(), String> {
    let true_source = BufReader::new(open(true_path)?);
    let fake_source = BufReader::new(open(fake_path)?);
    let writer = BufWriter::new(create(output)?);
    let rows =
        merge_labeled_sources(true_source, fake_source, writer).map_err(|err| err.to_string())?;
    println!("Merged {rows} rows into {}", output.display());
    Ok(())
}

fn sort(config: SortConfig, input: &Path, output: Option<&Path>) -> Result<(), String> {
    let mut desk = load(config, input)?;

    let started = Instant::now();
    let stats = desk.sort_by_date().map_err(|err| err.to_string())?;
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    println!(
        "Sort time: {elapsed_ms:.3} ms ({} articles, {} runs, {} merge rounds)",
        stats.nodes, stats.runs, stats.merge_rounds
    );

    if let Some(output) = output {
        desk.export_sorted(BufWriter::new(create(output)?))
            .map_err(|err| err.to_string())?;
        println!("Sorted data saved to {}", output.display());
    }

    println!("----- Sorted Articles (First {PREVIEW_ROWS}) -----");
    if desk.articles().is_empty() {
        println!("No articles loaded.");
    }
    for article in desk.articles().iter().take(PREVIEW_ROWS) {
        println!("Date: {} | Title: {}", article.date, article.title);
    }
    Ok(())
}

fn report(config: SortConfig, input: &Path, year: i32) -> Result<(), String> {
    let desk = load(config, input)?;

    let counts = desk.label_counts();
    println!("{0} Total News {0}", "-".repeat(15));
    println!("Total true news: {}", counts.true_count);
    println!("Total fake news: {}", counts.fake_count);

    println!(
        "Percentage of fake political news in {year}: {:.2}%",
        desk.political_fake_percentage(year)
    );

    let breakdown = desk.political_fake_by_month(year);
    println!("{0} Fake Political News by Month, {year} {0}", "-".repeat(15));
    print!("{}", render_month_histogram(&breakdown));
    if breakdown.skipped > 0 {
        println!("({} articles skipped: unparseable date)", breakdown.skipped);
    }

    println!("{0} Top {TOP_WORDS} words in fake government news {0}", "-".repeat(15));
    for (rank, word) in desk.top_words("government", "fake", TOP_WORDS).iter().enumerate() {
        println!("Top {}: {} : {} times.", rank + 1, word.word, word.count);
    }
    Ok(())
}

fn search(config: SortConfig, input: &Path, query: &KeywordQuery) -> Result<(), String> {
    let desk = load(config, input)?;
    let hits = desk.search(query);
    println!("Matching articles (showing top {}):", query.limit);
    if hits.is_empty() {
        println!("No matching articles found.");
    }
    for article in hits {
        println!(
            "Title: {}\nCategory: {}\nDate: {}\nLabel: {}\n",
            article.title, article.category, article.date, article.label
        );
    }
    Ok(())
}

fn load(config: SortConfig, input: &Path) -> Result<DeskService, String> {
    let mut desk = DeskService::new(config).map_err(|err| err.to_string())?;
    let stats = desk.import_csv_file(input).map_err(|err| err.to_string())?;
    println!("Imported {} articles from {}", stats.imported, input.display());
    if stats.skipped > 0 {
        println!("({} malformed rows skipped)", stats.skipped);
    }
    Ok(desk)
}

fn open(path: &Path) -> Result<File, String> {
    File::open(path).map_err(|err| format!("failed to open `{}`: {err}", path.display()))
}

fn create(path: &Path) -> Result<File, String> {
    File::create(path).map_err(|err| format!("failed to create `{}`: {err}", path.display()))
}
