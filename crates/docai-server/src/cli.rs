//! Command-line subcommands sharing the server's state.

use std::path::Path;

use anyhow::Context;
use docai_core::{DocumentCategory, Role};
use docai_ingest::Upload;
use docai_store::DocumentStore;

use crate::state::AppState;

/// Ingest one file and print the stored document as JSON.
pub fn process(state: &AppState, file: &Path, uploader: &str) -> anyhow::Result<()> {
    let upload =
        Upload::from_path(file).with_context(|| format!("reading {}", file.display()))?;
    let doc = state.ingester().ingest(&upload, uploader)?;
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

/// Print ranked matches over every stored document.
pub fn search(state: &AppState, query: &str, category: Option<&str>) -> anyhow::Result<()> {
    let category = category.map(str::parse::<DocumentCategory>).transpose()?;
    let documents = state.store.list()?;
    let results = state.engine.search(&documents, query, category);

    if results.is_empty() {
        println!("No results for \"{}\"", query);
        return Ok(());
    }
    for result in &results {
        println!(
            "{:>6.2}  {}  [{}]  {}",
            result.relevance_score,
            result.document.id,
            result.document.category,
            result.document.metadata.title
        );
        for excerpt in &result.matched_content {
            println!("        > {}", excerpt);
        }
    }
    println!("{} result(s)", results.len());
    Ok(())
}

/// Print the documents a role may see.
pub fn list(state: &AppState, role: Option<&str>) -> anyhow::Result<()> {
    let role = match role {
        Some(r) => r.parse::<Role>()?,
        None => Role::Admin,
    };
    let documents = state.store.list_for_role(role)?;
    for doc in &documents {
        println!(
            "{}  {:<18}  {:<10}  {}",
            doc.id,
            doc.category.as_str(),
            doc.uploader,
            doc.original_name
        );
    }
    println!("{} document(s) visible to {}", documents.len(), role);
    Ok(())
}
