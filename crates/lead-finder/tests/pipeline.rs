use std::collections::HashSet;
use std::io::Write;

use lead_finder::export::{self, ExportFormat};
use lead_finder::query::{self, LeadQuery};
use lead_finder::summary::Summary;
use lead_finder::{LeadTable, TableCache};
use rand::rngs::StdRng;
use rand::SeedableRng;

const COMPANIES: &str = "\
name,website,industry,location
Finly,finly.io,Fintech,UK
AffinityCo,affinity.co,CRM Software,USA
Acme,acme.io,Retail,Germany
Acme Holdings Group,acme.io,SaaS,UK
Cortexa Labs,cortexa.ai,SaaS,USA
Brightpath,brightpath.com,Retail,UK
Nimbus Cloudworks,nimbus.io,SaaS,Canada
Quill,quill.com,Media,France
Orbital Analytics,orbital.ai,Fintech,USA
Paperstack,paperstack.com,CRM Software,UK
Tandem,tandem.io,Retail,USA
Greenleaf Foods,greenleaf.com,Food,Canada
Voltify,voltify.ai,Energy,Germany
Mosaic Health,mosaic.health,Health,UK
";

fn load() -> LeadTable {
    LeadTable::from_reader(COMPANIES.as_bytes(), &mut StdRng::seed_from_u64(11)).unwrap()
}

#[test]
fn default_query_returns_top_ten_distinct() {
    let table = load();
    let results = query::execute(table.leads(), &LeadQuery::default());

    assert_eq!(results.len(), 10);
    let websites: HashSet<_> = results.iter().map(|l| l.website.as_str()).collect();
    assert_eq!(websites.len(), 10);
    for pair in results.windows(2) {
        assert!(pair[0].lead_score >= pair[1].lead_score);
    }

    assert_eq!(results[0].name, "Cortexa Labs");
    assert_eq!(results[0].lead_score, 7);
    assert_eq!(results[1].name, "Orbital Analytics");
}

#[test]
fn duplicate_website_keeps_first_row_score() {
    let table = load();
    let query = LeadQuery {
        name_contains: "acme".to_string(),
        ..Default::default()
    };
    let results = query::execute(table.leads(), &query);

    // "Acme" (score 2) shadows "Acme Holdings Group" (score 7).
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Acme");
    assert_eq!(results[0].lead_score, 2);
}

#[test]
fn name_search_is_substring_and_case_insensitive() {
    let table = load();
    let query = LeadQuery {
        name_contains: "fin".to_string(),
        ..Default::default()
    };
    let names: Vec<_> = query::execute(table.leads(), &query)
        .into_iter()
        .map(|l| l.name)
        .collect();
    assert_eq!(names, vec!["Finly", "AffinityCo"]);
}

#[test]
fn combined_filters() {
    let table = load();
    let query = LeadQuery {
        industries: vec!["SaaS".to_string(), "Fintech".to_string()],
        locations: vec!["USA".to_string(), "UK".to_string()],
        min_score: 6,
        ..Default::default()
    };
    let results = query::execute(table.leads(), &query);
    let names: Vec<_> = results.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Acme Holdings Group", "Cortexa Labs", "Orbital Analytics", "Finly"]
    );
}

#[test]
fn impossible_filters_yield_empty_exports() {
    let table = load();
    let query = LeadQuery {
        min_score: 10,
        ..Default::default()
    };
    let results = query::execute(table.leads(), &query);

    assert!(results.is_empty());
    assert_eq!(export::to_json(&results).unwrap(), "[]");
    assert_eq!(export::to_csv(&results).unwrap().lines().count(), 1);
}

#[test]
fn exports_round_trip_through_files() {
    let table = load();
    let results = query::execute(table.leads(), &LeadQuery::default());
    let dir = tempfile::tempdir().unwrap();

    let csv_path = dir.path().join(ExportFormat::Csv.default_file_name());
    export::write_export(&csv_path, ExportFormat::Csv, &results).unwrap();
    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv.lines().count(), results.len() + 1);
    assert!(csv.starts_with("name,website,industry,location,lead_score,reason,tech_stack\n"));

    let json_path = dir.path().join(ExportFormat::Json.default_file_name());
    export::write_export(&json_path, ExportFormat::Json, &results).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json.as_array().unwrap().len(), results.len());
    assert_eq!(json[0]["name"], results[0].name.as_str());
}

#[test]
fn table_cache_memoizes_by_content() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(COMPANIES.as_bytes()).unwrap();

    let mut cache = TableCache::new();
    let mut rng = StdRng::seed_from_u64(5);
    let first = cache.get_or_load(file.path(), &mut rng).unwrap();
    let second = cache.get_or_load(file.path(), &mut rng).unwrap();

    let stacks = |t: &LeadTable| -> Vec<String> {
        t.leads().iter().map(|l| l.tech_stack.clone()).collect()
    };
    assert_eq!(stacks(first.as_ref()), stacks(second.as_ref()));
    assert_eq!(cache.len(), 1);
}

#[test]
fn summary_over_whole_table() {
    let table = load();
    let summary = Summary::from_leads(table.leads());

    assert_eq!(summary.total, 14);
    assert_eq!(summary.top_locations[0].value, "UK");
    assert_eq!(summary.top_locations[0].count, 5);
    assert_eq!(summary.top_locations[1].value, "USA");
    // Retail and SaaS tie on 3; Retail appears first in the table.
    assert_eq!(summary.top_industries[0].value, "Retail");
    assert_eq!(summary.top_industries[1].value, "SaaS");
    assert_eq!(summary.top_industries[1].count, 3);
}
