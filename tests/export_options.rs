// tests/export_options.rs
//
// Tests for ExportOptions path/extension logic and table writing.
//
use std::fs;
use std::path::{Path, PathBuf};

use roadtrip::config::{ExportFormat, ExportOptions};
use roadtrip::file;

fn norm(p: &Path) -> PathBuf { p.components().collect() }

#[test]
fn default_path_ext_follows_format() {
    let mut opts = ExportOptions::default();
    assert_eq!(norm(&opts.out_path()), norm(Path::new("out/trips.csv")));

    opts.format = ExportFormat::Tsv;
    assert!(opts.out_path().to_string_lossy().ends_with("trips.tsv"));
}

#[test]
fn user_extension_survives_format_change() {
    let mut opts = ExportOptions::default();
    opts.set_path("out/custom/june.data");
    opts.format = ExportFormat::Tsv;
    assert_eq!(norm(&opts.out_path()), norm(Path::new("out/custom/june.data")));
}

#[test]
fn trailing_separator_means_directory() {
    let mut opts = ExportOptions::default();
    opts.set_path("reports/");
    assert_eq!(norm(&opts.out_path()), norm(Path::new("reports/trips.csv")));
}

#[test]
fn bare_file_name_lands_in_cwd() {
    let mut opts = ExportOptions::default();
    opts.set_path("plan");
    assert_eq!(opts.out_path(), PathBuf::from("plan.csv"));
}

#[test]
fn write_export_creates_parents_and_quotes_cells() {
    let mut dir = std::env::temp_dir();
    dir.push("roadtrip_export_parents");
    let _ = fs::remove_dir_all(&dir);

    let mut opts = ExportOptions::default();
    opts.set_path(dir.join("nested").join("t.csv").to_str().unwrap());

    let headers = vec!["Red Sox".to_string(), "Yankees".to_string()];
    let rows = vec![vec!["Yankees, Fri Jun 1".to_string(), String::new()]];
    let path = file::write_export(&opts, &headers, &rows).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, "Red Sox,Yankees\n\"Yankees, Fri Jun 1\",\n");
}

#[test]
fn table_writer_uses_delimiter() {
    let rows = vec![vec!["a".to_string(), "b c".to_string()]];
    let mut buf: Vec<u8> = Vec::new();
    file::write_table_to(&mut buf, None, &rows, b'\t').unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "a\tb c\n");
}
