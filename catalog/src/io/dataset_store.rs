//! Dataset loading with schema + invariant validation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use jsonschema::validator_for;
use serde_json::Value;
use tracing::{debug, info};

use crate::core::query::Catalog;
use crate::dataset::Dataset;

/// The dataset compiled into the binary.
pub const EMBEDDED_DATASET: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/pathways.json"));

const DATASET_SCHEMA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/schemas/dataset/v1.schema.json"
));

/// Where the dataset comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource<'a> {
    Embedded,
    File(&'a Path),
}

/// Parse a dataset document and check it against the v1 JSON Schema.
///
/// `origin` names the document in error messages.
pub fn parse_dataset(raw: &str, origin: &str) -> Result<Dataset> {
    let value: Value =
        serde_json::from_str(raw).with_context(|| format!("parse dataset {}", origin))?;
    validate_schema(&value).with_context(|| format!("validate dataset {}", origin))?;
    let dataset: Dataset = serde_json::from_value(value)
        .with_context(|| format!("deserialize dataset {}", origin))?;
    debug!(
        origin,
        courses = dataset.courses.len(),
        pathways = dataset.pathways.len(),
        "dataset parsed"
    );
    Ok(dataset)
}

pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("read dataset {}", path.display()))?;
    parse_dataset(&raw, &path.display().to_string())
}

/// Load a dataset and build a validated [`Catalog`] from it.
pub fn load_catalog(source: DatasetSource<'_>) -> Result<Catalog> {
    let (dataset, origin) = match source {
        DatasetSource::Embedded => (
            parse_dataset(EMBEDDED_DATASET, "<embedded>")?,
            "<embedded>".to_string(),
        ),
        DatasetSource::File(path) => (load_dataset(path)?, path.display().to_string()),
    };
    let catalog = Catalog::new(dataset).with_context(|| format!("load catalog {}", origin))?;
    info!(
        origin = %origin,
        courses = catalog.courses().len(),
        pathways = catalog.pathways().len(),
        "catalog ready"
    );
    Ok(catalog)
}

fn validate_schema(dataset: &Value) -> Result<()> {
    let schema: Value = serde_json::from_str(DATASET_SCHEMA).context("parse dataset schema")?;
    let compiled = validator_for(&schema).map_err(|err| anyhow!("invalid schema: {}", err))?;
    if !compiled.is_valid(dataset) {
        let messages = compiled
            .iter_errors(dataset)
            .map(|err| err.to_string())
            .collect::<Vec<_>>();
        return Err(anyhow!(
            "dataset schema validation failed: {}",
            messages.join("; ")
        ));
    }
    Ok(())
}
