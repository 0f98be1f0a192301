//! Parsers for catalog files.
//!
//! Two formats are supported:
//! - `.dat`: one movie per line, `name::genres::actors::directors`, each list
//!   `|`-separated. Blank lines and `#` comments are skipped.
//! - `.json`: an array of [`Movie`] objects.

use crate::error::{CatalogError, Result};
use crate::types::Movie;
use rayon::prelude::*;
use std::io::ErrorKind;
use std::path::Path;

/// Read a whole file, reporting a missing file as `FileNotFound`
fn read_to_string(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::Io(e),
    })
}

/// Parse a `.dat` catalog file
pub fn parse_dat_file(path: &Path) -> Result<Vec<Movie>> {
    let content = read_to_string(path)?;
    let file = path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    parse_dat(&content, &file)
}

/// Parse `.dat` content.
///
/// Lines are parsed in parallel; the result keeps file order. `file` is only
/// used in error messages.
pub fn parse_dat(content: &str, file: &str) -> Result<Vec<Movie>> {
    let lines: Vec<&str> = content.lines().collect();

    let parsed: Vec<Option<Movie>> = lines
        .par_iter()
        .enumerate()
        .map(|(idx, line)| parse_dat_line(line, file, idx + 1))
        .collect::<Result<_>>()?;

    Ok(parsed.into_iter().flatten().collect())
}

/// Parse one line; `Ok(None)` for blank and comment lines
fn parse_dat_line(line: &str, file: &str, line_no: usize) -> Result<Option<Movie>> {
    let line_trimmed = line.trim();
    if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
        return Ok(None);
    }

    let parse_error = |reason: &str| CatalogError::ParseError {
        file: file.to_string(),
        line: line_no,
        reason: reason.to_string(),
    };

    let mut parts = line_trimmed.split("::");

    let name = parts.next().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(parse_error("Missing movie name"));
    }
    let genres = parts.next().ok_or_else(|| parse_error("Missing genres"))?;
    let actors = parts.next().ok_or_else(|| parse_error("Missing actors"))?;
    let directors = parts.next().ok_or_else(|| parse_error("Missing directors"))?;
    if parts.next().is_some() {
        return Err(parse_error("Too many fields, expected 4"));
    }

    Ok(Some(Movie {
        name: name.to_string(),
        genres: parse_list(genres),
        actors: parse_list(actors),
        directors: parse_list(directors),
    }))
}

/// Split a `|`-separated list, trimming items and dropping empty ones
///
/// Example: "Action| Sci-Fi|" -> ["Action", "Sci-Fi"]
fn parse_list(s: &str) -> Vec<String> {
    s.split('|')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a JSON catalog file
pub fn parse_json_file(path: &Path) -> Result<Vec<Movie>> {
    let content = read_to_string(path)?;
    parse_json(&content)
}

pub fn parse_json(content: &str) -> Result<Vec<Movie>> {
    Ok(serde_json::from_str(content)?)
}
