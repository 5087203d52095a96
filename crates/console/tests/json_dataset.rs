//! Loading an exported JSON listing and driving it through a session.

use std::io::Write;
use std::path::PathBuf;

use bizgrid_console::{ConsoleConfig, Dataset, Session};
use tempfile::NamedTempFile;

/// JSON fixture removed when the handle drops, even if the test panics.
fn write_dataset(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("bizgrid-")
        .suffix(".json")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn json_file_becomes_sortable_listing() {
    let file = write_dataset(
        r#"[
            { "name": "Contoso Retail", "balance": 1200.5, "lastOrder": "2025-02-11" },
            { "name": "Fabrikam Ltd.", "balance": 80, "lastOrder": "2024-12-30" },
            { "name": "Wingtip Toys", "balance": null, "lastOrder": "2025-01-05" }
        ]"#,
    );

    let dataset = Dataset::from_json_file(file.path()).unwrap();
    assert_eq!(dataset.records.len(), 3);
    let headers: Vec<&str> = dataset.columns.iter().map(|c| c.header()).collect();
    assert_eq!(headers, vec!["Balance", "Last Order", "Name"]);

    let mut session = Session::new(dataset, &ConsoleConfig::default()).unwrap();
    let mut out = Vec::new();
    session
        .run("sort lastOrder\nsort balance\n".as_bytes(), &mut out)
        .unwrap();

    // Missing balance sorts first, then numerically.
    let names: Vec<String> = session
        .grid()
        .page_rows()
        .map(|r| bizgrid_core::GridRow::cell(r, "name").to_string())
        .collect();
    assert_eq!(names, vec!["Wingtip Toys", "Fabrikam Ltd.", "Contoso Retail"]);
}

#[test]
fn malformed_json_is_reported_with_context() {
    let file = write_dataset(r#"{ "not": "an array" }"#);
    let err = Dataset::from_json_file(file.path()).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("unexpected shape"));
    assert!(message.contains("expected a JSON array"));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let missing: PathBuf = dir.path().join("bizgrid.json");
    let err = Dataset::from_json_file(&missing).unwrap_err();
    assert!(format!("{err:#}").contains("failed to read dataset"));
}
