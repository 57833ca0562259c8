use std::fs;
use std::path::Path;

use clap::Parser;
use lead_finder_cli::cli::{self, Cli};

const COMPANIES: &str = "\
name,website,industry,location
Finly,finly.io,Fintech,UK
Acme,acme.io,Retail,Germany
Acme Holdings Group,acme.io,SaaS,UK
Quill,quill.com,Media,France
";

fn write_table(dir: &Path) -> String {
    let path = dir.join("companies.csv");
    fs::write(&path, COMPANIES).unwrap();
    path.to_string_lossy().into_owned()
}

#[tokio::test]
async fn export_json_writes_filtered_leads() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_table(dir.path());
    let out = dir.path().join("exports/crm_leads.json");

    let cli = Cli::try_parse_from([
        "lead-finder",
        "--quiet",
        "--data",
        data.as_str(),
        "export",
        "--format",
        "json",
        "--min-score",
        "2",
        "--out",
        out.to_str().unwrap(),
    ])
    .unwrap();
    cli::run(cli).await.unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let names: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["name"].as_str().unwrap().to_string())
        .collect();
    // Acme shadows Acme Holdings Group; Quill scores 0.
    assert_eq!(names, vec!["Finly", "Acme"]);
}

#[tokio::test]
async fn export_csv_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_table(dir.path());
    let out = dir.path().join("filtered_leads.csv");

    let cli = Cli::try_parse_from([
        "lead-finder",
        "--quiet",
        "--data",
        data.as_str(),
        "export",
        "--location",
        "UK",
        "--out",
        out.to_str().unwrap(),
    ])
    .unwrap();
    cli::run(cli).await.unwrap();

    let csv = fs::read_to_string(&out).unwrap();
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines[0], "name,website,industry,location,lead_score,reason,tech_stack");
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("Acme Holdings Group,acme.io,SaaS,UK,7,"));
    assert!(lines[2].starts_with("Finly,finly.io,Fintech,UK,6,"));
}

#[tokio::test]
async fn missing_table_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.csv");
    let cli = Cli::try_parse_from([
        "lead-finder",
        "--quiet",
        "--data",
        missing.to_str().unwrap(),
        "summary",
    ])
    .unwrap();

    let err = cli::run(cli).await.unwrap_err();
    assert!(format!("{err:#}").contains("nope.csv"));
}
