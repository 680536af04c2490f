//! moodlog CLI: classify text, keep a mood-tagged journal, print mood stats.
//!
//! Thin wrapper over the `moodlog` library crate.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use moodlog::{
    DEFAULT_WINDOW_DAYS, Journal, MAX_WINDOW_DAYS, MoodEntry, MoodLabel, Summary, classify,
    matched_keyword,
};
use tracing_subscriber::EnvFilter;

type CliResult = Result<(), Box<dyn Error>>;

/// moodlog: a journal that tags every entry with a mood, offline.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Print machine-readable JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify TEXT, or every non-blank stdin line when no TEXT is given.
    Classify {
        text: Vec<String>,

        /// Show the keyword that decided the mood.
        #[arg(long)]
        explain: bool,
    },
    /// Classify TEXT and append it to the journal.
    Add {
        #[command(flatten)]
        journal: JournalPath,

        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Replace the text of an entry and classify it again.
    Edit {
        #[command(flatten)]
        journal: JournalPath,

        id: u64,

        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Delete an entry.
    Remove {
        #[command(flatten)]
        journal: JournalPath,

        id: u64,
    },
    /// List entries, newest first.
    List {
        #[command(flatten)]
        journal: JournalPath,

        /// Only show entries with this mood.
        #[arg(long)]
        mood: Option<MoodLabel>,
    },
    /// Mood counts, scores and the recent trend.
    Stats {
        #[command(flatten)]
        journal: JournalPath,

        /// Last day of the trend window (UTC date). Default: today.
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Trend window length in days.
        #[arg(long, default_value_t = DEFAULT_WINDOW_DAYS, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_WINDOW_DAYS)))]
        days: u32,
    },
}

#[derive(Args, Debug)]
struct JournalPath {
    /// Journal file (JSON Lines).
    #[arg(long = "journal", env = "MOODLOG_JOURNAL")]
    path: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("moodlog: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> CliResult {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let json = cli.json;

    match cli.command {
        Command::Classify { text, explain } => {
            if text.is_empty() {
                for line in io::stdin().lock().lines() {
                    let line = line?;
                    if line.trim().is_empty() {
                        continue;
                    }
                    print_classification(&mut out, &line, explain, json)?;
                    out.flush()?;
                }
            } else {
                print_classification(&mut out, &text.join(" "), explain, json)?;
            }
        }
        Command::Add { journal, text } => {
            let mut book = Journal::load(&journal.path)?;
            let entry = book.add(&text.join(" "), Utc::now())?.clone();
            book.save(&journal.path)?;
            print_entry(&mut out, &entry, json)?;
        }
        Command::Edit { journal, id, text } => {
            let mut book = Journal::load(&journal.path)?;
            let entry = book.edit(id, &text.join(" "), Utc::now())?.clone();
            book.save(&journal.path)?;
            print_entry(&mut out, &entry, json)?;
        }
        Command::Remove { journal, id } => {
            let mut book = Journal::load(&journal.path)?;
            let entry = book.remove(id)?;
            book.save(&journal.path)?;
            if json {
                writeln!(out, "{}", serde_json::to_string(&entry)?)?;
            } else {
                writeln!(out, "removed #{}", entry.id)?;
            }
        }
        Command::List { journal, mood } => {
            let book = Journal::load(&journal.path)?;
            let entries: Vec<&MoodEntry> = book
                .entries()
                .into_iter()
                .filter(|e| mood.is_none_or(|m| e.mood == m))
                .collect();
            if json {
                writeln!(out, "{}", serde_json::to_string(&entries)?)?;
            } else {
                for entry in entries {
                    print_entry(&mut out, entry, false)?;
                }
            }
        }
        Command::Stats {
            journal,
            today,
            days,
        } => {
            let book = Journal::load(&journal.path)?;
            let today = today.unwrap_or_else(|| Utc::now().date_naive());
            let summary = book.summary(today, days);
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
            } else {
                print_summary(&mut out, &summary)?;
            }
        }
    }

    Ok(())
}

fn print_classification(out: &mut impl Write, text: &str, explain: bool, json: bool) -> CliResult {
    let mood = classify(text);
    let hit = if explain { matched_keyword(text) } else { None };

    if json {
        let mut value = serde_json::to_value(mood)?;
        if let Some(hit) = hit {
            value["keyword"] = hit.keyword.into();
            value["table_mood"] = hit.table_mood.name().into();
            value["negated"] = hit.negated.into();
        }
        writeln!(out, "{value}")?;
        return Ok(());
    }

    match hit {
        Some(hit) => writeln!(
            out,
            "{mood}  (keyword \"{}\" from {} list{})",
            hit.keyword,
            hit.table_mood,
            if hit.negated { ", negated" } else { "" }
        )?,
        None if explain => writeln!(out, "{mood}  (no keyword)")?,
        None => writeln!(out, "{mood}")?,
    }
    Ok(())
}

fn print_entry(out: &mut impl Write, entry: &MoodEntry, json: bool) -> CliResult {
    if json {
        writeln!(out, "{}", serde_json::to_string(entry)?)?;
        return Ok(());
    }
    let when = entry
        .created_at
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string());
    writeln!(
        out,
        "#{}  {}  {} {}  {}",
        entry.id, when, entry.mood, entry.emoji, entry.text
    )?;
    Ok(())
}

fn print_summary(out: &mut impl Write, summary: &Summary) -> CliResult {
    let score = |s: Option<f64>| s.map_or_else(|| "-".to_string(), |v| format!("{v:.1}"));

    writeln!(out, "Total entries: {}", summary.total_entries)?;
    writeln!(
        out,
        "Dominant mood: {} {}",
        summary.dominant,
        summary.dominant.emoji()
    )?;
    writeln!(out, "Average mood score: {}", score(summary.average_score))?;
    writeln!(out, "Consistency: {}%", summary.consistency_score)?;
    let counts: Vec<String> = summary
        .counts
        .iter()
        .map(|(mood, n)| format!("{mood} {n}"))
        .collect();
    writeln!(out, "Mood counts: {}", counts.join(", "))?;

    let week = &summary.week;
    writeln!(
        out,
        "Trend {} to {}: {} entries, dominant {}, average {}",
        week.start,
        week.end,
        week.entries,
        week.dominant,
        score(week.average_score)
    )?;
    for day in &week.days {
        writeln!(
            out,
            "  {} {}  {:>3} entries  avg {}",
            day.weekday,
            day.date,
            day.counts.total(),
            score(day.average_score)
        )?;
    }
    Ok(())
}
