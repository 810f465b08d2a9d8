//! JSON artifact files: `<prefix>_<year>.json` and `<prefix>_all_years.json`.

use serde::Serialize;
use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
};

use crate::{error::EspnError, Result, Season};

pub const ARTIFACT_EXT: &str = "json";

/// Path: {dir}/{prefix}_{year}.json
pub fn artifact_path(dir: &Path, prefix: &str, season: Season) -> PathBuf {
    dir.join(format!("{}_{}.{}", prefix, season, ARTIFACT_EXT))
}

/// Path: {dir}/{prefix}_all_years.json
pub fn combined_path(dir: &Path, prefix: &str) -> PathBuf {
    dir.join(format!("{}_all_years.{}", prefix, ARTIFACT_EXT))
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file, replacing whatever was there
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Serialize `value` as pretty JSON and overwrite `path` with it.
///
/// Full overwrite, so repeating a write is safe.
pub fn write_json_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    write_string(path, &json).map_err(|source| EspnError::Persistence {
        path: path.to_path_buf(),
        source,
    })
}
