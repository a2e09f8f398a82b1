// src/file.rs

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::error::{Error, Result};

/// Write headers (optional) and rows as a delimited table to any writer.
pub fn write_table_to<W: Write>(
    w: W,
    headers: Option<&[String]>,
    rows: &[Vec<String>],
    delim: u8,
) -> std::result::Result<(), csv::Error> {
    let mut out = csv::WriterBuilder::new()
        .delimiter(delim)
        .has_headers(false)
        .flexible(true)
        .from_writer(w);

    if let Some(h) = headers {
        out.write_record(h)?;
    }
    for row in rows {
        out.write_record(row)?;
    }
    out.flush()?;
    Ok(())
}

/// Write the report where `export` says; creates parent directories.
/// Returns the final path written to.
pub fn write_export(
    export: &ExportOptions,
    headers: &[String],
    rows: &[Vec<String>],
) -> Result<PathBuf> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = fs::File::create(&path)?; // truncate/overwrite
    let headers = export.include_headers.then_some(headers);
    write_table_to(file, headers, rows, export.format.delim())
        .map_err(|source| Error::Output { path: path.clone(), source })?;

    log::info!("Export: {} rows → {}", rows.len(), path.display());
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> std::io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
