//! Artifact deserialization
//!
//! Turns the located files into in-memory predictor objects. Runs once at
//! process start; any failure here must abort startup.

use crate::error::{ArtifactError, Result};
use crate::locate::locate;
use model::{ModelArtifact, ScalerArtifact};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Everything the prediction path needs, loaded once and shared read-only
#[derive(Debug, Clone)]
pub struct Bundle {
    /// Human-readable model name derived from the artifact filename
    pub name: String,
    /// The fitted regressor
    pub model: ModelArtifact,
    /// The fitted feature scaler, when one was exported
    pub scaler: Option<ScalerArtifact>,
}

/// Locate and deserialize the artifacts in `dir`
///
/// The model is required; the scaler is optional and its absence is a valid
/// "no scaling" configuration.
pub fn load(dir: &Path) -> Result<Bundle> {
    let located = locate(dir)?;

    let model: ModelArtifact = read_json(&located.model_path)?;
    let scaler: Option<ScalerArtifact> = match &located.scaler_path {
        Some(path) => Some(read_json(path)?),
        None => None,
    };

    tracing::info!(
        model = %located.model_name,
        scaler = scaler.is_some(),
        "loaded artifacts from {}",
        dir.display()
    );

    Ok(Bundle {
        name: located.model_name,
        model,
        scaler,
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
