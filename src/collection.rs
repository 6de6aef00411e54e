//! Reading the route collection from disk and writing the annotated one back.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde_json::Value;
use tracing::info;

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("Error reading {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error parsing {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Expected an array of routes in {path}, found {found}")]
    NotACollection { path: PathBuf, found: &'static str },
}

#[derive(thiserror::Error, Debug)]
pub enum WriteError {
    #[error("Error serializing routes")]
    Serialize(#[from] serde_json::Error),

    #[error("Error writing {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads the whole collection. Fails unless the file holds a JSON array.
#[tracing::instrument(err)]
pub fn load_routes(path: &Path) -> Result<Vec<Value>, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let collection: Value = serde_json::from_str(&text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let routes = match collection {
        Value::Array(routes) => routes,
        other => {
            return Err(LoadError::NotACollection {
                path: path.to_path_buf(),
                found: json_kind(&other),
            });
        }
    };

    info!("got {} routes", routes.len());

    Ok(routes)
}

/// Writes pretty printed JSON next to `path` first and renames it into place,
/// so a failed write never leaves a truncated file behind.
#[tracing::instrument(err, skip(routes), fields(routes = routes.len()))]
pub fn write_routes(path: &Path, routes: &[Value]) -> Result<(), WriteError> {
    let text = serde_json::to_string_pretty(routes)?;

    let tmp_path = tmp_path_for(path);

    let written = fs::write(&tmp_path, text).and_then(|()| fs::rename(&tmp_path, path));

    written.map_err(|source| {
        _ = fs::remove_file(&tmp_path);
        WriteError::Write {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// `data/routes.json` -> `data/routes_with_eta_times.json`
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();

    input.with_file_name(format!("{stem}_with_eta_times.json"))
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
