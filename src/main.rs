use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use resume_match::{
    config::Config,
    extract_text,
    models::{FileFailure, MatchReport, ResumeUpload},
    utils, MatchEngine, ResumeError,
};
use std::path::{Path, PathBuf};
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "resume-match")]
#[command(about = "Rank resumes against a job description by skills and lexical similarity")]
#[command(version)]
struct Cli {
    /// Settings file (defaults to config/settings.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank resumes against a job description
    Match {
        /// Resume files (.pdf, .docx) or directories containing them
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<PathBuf>,
        /// File holding the job description (.txt, .md, .pdf or .docx)
        #[arg(long, value_name = "FILE", conflicts_with = "job_text", required_unless_present = "job_text")]
        job: Option<PathBuf>,
        /// Job description given inline
        #[arg(long, value_name = "TEXT")]
        job_text: Option<String>,
        /// Number of top matches shown in detail (overrides config)
        #[arg(long)]
        top: Option<usize>,
        /// Write the ranked table to a CSV file
        #[arg(long, value_name = "FILE")]
        csv: Option<PathBuf>,
        /// Print the full report as JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Parse a single resume and print its record as JSON
    Parse {
        /// Resume file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load().unwrap_or_default(),
    };
    let engine = MatchEngine::from_config(&config)?;

    match cli.command {
        Commands::Match {
            paths,
            job,
            job_text,
            top,
            csv,
            json,
        } => {
            let job_description = read_job_description(job.as_deref(), job_text)?;
            let (uploads, unreadable) = collect_uploads(&paths);
            if !json {
                println!("Matching {} resume file(s)", uploads.len());
            }

            let mut report = match engine.match_resumes(&uploads, &job_description) {
                Ok(report) => report,
                Err(ResumeError::NoValidResumes { .. }) => {
                    for failure in &unreadable {
                        eprintln!("Warning: skipped {}: {}", failure.filename, failure.reason);
                    }
                    eprintln!("Failed to process any resumes!");
                    std::process::exit(1);
                }
                Err(e) => return Err(e.into()),
            };
            let mut failures = unreadable;
            failures.append(&mut report.failures);
            report.failures = failures;

            if let Some(csv_path) = &csv {
                write_csv(csv_path, &report)?;
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report, top.unwrap_or(config.report.top_n));
                if let Some(csv_path) = &csv {
                    println!("\n✓ Results written to {}", csv_path.display());
                }
            }
        }
        Commands::Parse { file } => {
            let upload = ResumeUpload::from_path(&file)?;
            let record = engine
                .parser()
                .parse_resume(&upload.bytes, &upload.filename)
                .with_context(|| format!("Failed to parse resume: {}", file.display()))?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "resume_match=debug"
    } else {
        "resume_match=info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Job description from inline text or a file; documents go through the extractor
fn read_job_description(job: Option<&Path>, job_text: Option<String>) -> Result<String> {
    let text = match (job, job_text) {
        (_, Some(text)) => text,
        (Some(path), None) => {
            let filename = path.display().to_string();
            let bytes = std::fs::read(path)
                .with_context(|| format!("Failed to read job description: {}", filename))?;
            match extract_text(&bytes, &filename)? {
                Some(text) => text,
                None => String::from_utf8(bytes)
                    .with_context(|| format!("Job description is not UTF-8 text: {}", filename))?,
            }
        }
        (None, None) => anyhow::bail!("Provide a job description with --job or --job-text"),
    };

    if text.trim().is_empty() {
        anyhow::bail!("Job description is empty");
    }
    Ok(text)
}

/// Read every resume named on the command line
///
/// Files are taken as given; directories contribute their .pdf/.docx files.
/// Paths that cannot be read are skipped and reported as failures.
fn collect_uploads(paths: &[PathBuf]) -> (Vec<ResumeUpload>, Vec<FileFailure>) {
    let mut files = Vec::new();
    let mut failures = Vec::new();
    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path).sort_by_file_name() {
                match entry {
                    Ok(entry) => {
                        if entry.file_type().is_file() && utils::is_supported_file(entry.path()) {
                            files.push(entry.into_path());
                        }
                    }
                    Err(e) => {
                        let filename = e
                            .path()
                            .map(|p| p.display().to_string())
                            .unwrap_or_else(|| path.display().to_string());
                        warn!(file = %filename, error = %e, "skipping unreadable directory entry");
                        failures.push(FileFailure {
                            filename,
                            reason: e.to_string(),
                        });
                    }
                }
            }
        } else {
            files.push(path.clone());
        }
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} files read ({msg})")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut uploads = Vec::with_capacity(files.len());
    for file in &files {
        pb.set_message(file.display().to_string());
        match ResumeUpload::from_path(file) {
            Ok(upload) => uploads.push(upload),
            Err(e) => {
                warn!(file = %file.display(), error = %format!("{:#}", e), "skipping unreadable file");
                failures.push(FileFailure {
                    filename: file.display().to_string(),
                    reason: format!("{:#}", e),
                });
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    (uploads, failures)
}

fn print_report(report: &MatchReport, top_n: usize) {
    for failure in &report.failures {
        eprintln!("Warning: skipped {}: {}", failure.filename, failure.reason);
    }

    println!("\nMatching Results");
    let name_width = report
        .results
        .iter()
        .map(|r| r.resume_name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Resume".len());

    println!("{:<width$}  {:>11}  Skills Matched", "Resume", "Match Score", width = name_width);
    for result in &report.results {
        println!(
            "{:<width$}  {:>11.2}  {}",
            result.resume_name,
            result.score,
            result.matched_skills_display(),
            width = name_width
        );
    }

    let details = report.top_details(top_n);
    if details.is_empty() {
        return;
    }

    println!("\nTop Matches Details");
    for (result, record) in details {
        println!("\nResume: {} (Score: {:.2})", result.resume_name, result.score);
        println!("  Skills: {}", record.skills().join(", "));
        println!("  Experience:");
        for sentence in record.experience() {
            println!("    - {}", utils::truncate_for_display(sentence, 160));
        }
        println!("  Education:");
        for sentence in record.education() {
            println!("    - {}", utils::truncate_for_display(sentence, 160));
        }
    }
}

fn write_csv(path: &Path, report: &MatchReport) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;

    writer.write_record(["Resume", "Match Score", "Skills Matched"])?;
    for result in &report.results {
        writer.write_record([
            result.resume_name.clone(),
            format!("{:.4}", result.score),
            result.matched_skills_display(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
