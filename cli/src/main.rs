mod build;

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Csv(#[from] plan::csv::CsvError),
    #[error("invalid JSON in {}: {source}", .path.display())]
    InvalidData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Build(#[from] build::BuildError),
    #[error("failed to encode JSON: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "content-cli", about = "Content plan conversion and UI build tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a content-plan CSV into the JSON array the importer reads.
    Convert {
        input: PathBuf,
        #[arg(help = "Output file; JSON goes to stdout when omitted")]
        output: Option<PathBuf>,
    },
    /// Inline a JSON data file into the UI document template.
    Build {
        #[arg(long, env = "CONTENT_DATA", default_value = "data/latest.json")]
        data: PathBuf,
        #[arg(long, env = "CONTENT_UI_TEMPLATE", default_value = "src/ui.html")]
        template: PathBuf,
        #[arg(long, env = "CONTENT_UI_OUT", default_value = "dist/ui.html")]
        out: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Convert { input, output } => run_convert(&input, output.as_deref()),
        Command::Build { data, template, out } => run_build(&data, &template, &out),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run_convert(input: &Path, output: Option<&Path>) -> Result<(), CliError> {
    if !input.is_file() {
        return Err(CliError::InputNotFound(input.to_path_buf()));
    }
    let text = read(input)?;
    let records = plan::csv::parse_csv(&text)?;
    let rendered = serde_json::to_string_pretty(&records)?;
    tracing::info!(input = %input.display(), rows = records.len(), "converted content plan");

    match output {
        Some(path) => {
            write(path, &rendered)?;
            println!("Converted {} rows", records.len());
            println!("Output: {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn run_build(data: &Path, template: &Path, out: &Path) -> Result<(), CliError> {
    let posts = match std::fs::read_to_string(data) {
        Ok(text) => serde_json::from_str::<Value>(&text)
            .map_err(|source| CliError::InvalidData { path: data.to_path_buf(), source })?,
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(path = %data.display(), "no data file found, inlining an empty plan");
            Value::Array(Vec::new())
        }
        Err(source) => return Err(CliError::Read { path: data.to_path_buf(), source }),
    };

    let html = build::inline_data(&read(template)?, &posts)?;
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| CliError::Write { path: out.to_path_buf(), source })?;
    }
    write(out, &html)?;

    let count = posts.as_array().map_or(0, Vec::len);
    println!("Inlined {count} posts into {}", out.display());
    Ok(())
}

fn read(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read { path: path.to_path_buf(), source })
}

fn write(path: &Path, contents: &str) -> Result<(), CliError> {
    std::fs::write(path, contents).map_err(|source| CliError::Write { path: path.to_path_buf(), source })
}
