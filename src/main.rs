use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use content_importer::config::{ConfigError, ImporterConfig};
use content_importer::{Scene, handle_message};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to read request from stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error("failed to encode response: {0}")]
    Encode(#[from] plan::CodecError),
    #[error("failed to serialize scene: {0}")]
    Scene(#[from] serde_json::Error),
    #[error("failed to write scene to {path}: {source}")]
    WriteScene {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

/// Read one UI message from stdin, answer it on stdout.
fn run() -> Result<ExitCode, HostError> {
    let config = ImporterConfig::from_env()?;

    let mut input = String::new();
    io::stdin().read_to_string(&mut input).map_err(HostError::Stdin)?;

    let mut scene = Scene::new();
    let Some(response) = handle_message(&mut scene, &input, &config) else {
        tracing::info!("message needs no response");
        return Ok(ExitCode::SUCCESS);
    };

    println!("{}", plan::encode_response(&response)?);

    if let Some(path) = &config.scene_out {
        let rendered = serde_json::to_string_pretty(&scene.to_json()?)?;
        std::fs::write(path, rendered).map_err(|source| HostError::WriteScene { path: path.clone(), source })?;
        tracing::info!(path = %path.display(), nodes = scene.len(), "scene written");
    }

    Ok(if response.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
