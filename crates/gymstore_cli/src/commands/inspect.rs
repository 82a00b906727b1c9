//! Inspect command implementation.

use gymstore_core::{LoadReport, StoreConfig, TypedStore};
use serde::Serialize;
use std::path::Path;

/// Document inspection result.
#[derive(Debug, Serialize)]
pub struct InspectResult {
    /// Document path.
    pub path: String,
    /// Number of entries in the document.
    pub entries: usize,
    /// Number of entries loaded.
    pub loaded: usize,
    /// Number of entries skipped.
    pub skipped: usize,
    /// Per-namespace statistics.
    pub namespaces: Vec<NamespaceStats>,
}

/// Statistics for a single namespace.
#[derive(Debug, Serialize)]
pub struct NamespaceStats {
    /// Namespace name.
    pub name: String,
    /// Number of loaded records.
    pub records: usize,
    /// Id the next created record would receive.
    pub next_id: u64,
}

/// Runs the inspect command.
pub fn run(path: &Path, config: &StoreConfig, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let (store, report) = super::load(path, config)?;
    let result = summarize(path, &store, &report);

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        _ => {
            print_text_output(&result);
        }
    }

    Ok(())
}

fn summarize(path: &Path, store: &TypedStore, report: &LoadReport) -> InspectResult {
    let namespaces = store
        .namespaces()
        .into_iter()
        .map(|ns| NamespaceStats {
            name: ns.to_string(),
            records: store.len_in(&ns),
            next_id: store.current_id(&ns) + 1,
        })
        .collect();

    InspectResult {
        path: path.display().to_string(),
        entries: report.total(),
        loaded: report.loaded,
        skipped: report.skipped.len(),
        namespaces,
    }
}

fn print_text_output(result: &InspectResult) {
    println!("GymStore Document Inspection");
    println!("============================");
    println!();
    println!("Path: {}", result.path);
    println!();
    println!("Entries:");
    println!("  Total:   {}", result.entries);
    println!("  Loaded:  {}", result.loaded);
    println!("  Skipped: {}", result.skipped);

    if !result.namespaces.is_empty() {
        println!();
        println!("Namespaces:");
        for ns in &result.namespaces {
            println!(
                "  {:<14} {} records, next id {}",
                ns.name, ns.records, ns.next_id
            );
        }
    }
}
