//! CLI presentation: text and JSON formatters for tree results.

use crate::cli::parse::OutputFormat;
use crate::error::ApiError;
use crate::tree::builder::MerkleTree;
use crate::types::digest_to_hex;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde_json::json;

fn to_json_string(value: &serde_json::Value) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ApiError::ConfigError(format!("Failed to render JSON: {}", e)))
}

fn summary_json(tree: &MerkleTree) -> serde_json::Value {
    json!({
        "directory": tree.directory().display().to_string(),
        "recursive": tree.is_recursive(),
        "algorithm": tree.algorithm().name(),
        "root": digest_to_hex(&tree.root_hash()),
        "height": tree.height(),
        "num_leaves": tree.num_leaves(),
        "total_nodes": tree.total_nodes(),
        "file_count": tree.file_count(),
        "skipped": tree
            .skipped_files()
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>(),
        "built_at": tree.built_at().to_rfc3339(),
    })
}

pub fn format_root(tree: &MerkleTree, format: OutputFormat) -> Result<String, ApiError> {
    match format {
        OutputFormat::Json => to_json_string(&summary_json(tree)),
        OutputFormat::Text => Ok(digest_to_hex(&tree.root_hash())),
    }
}

pub fn format_tree(tree: &MerkleTree, format: OutputFormat) -> Result<String, ApiError> {
    if format == OutputFormat::Json {
        let mut value = summary_json(tree);
        value["nodes"] = tree
            .populated_nodes()
            .map(|(index, level, digest)| {
                json!({ "index": index, "level": level, "digest": digest_to_hex(digest) })
            })
            .collect();
        value["slots"] = tree
            .slots()
            .iter()
            .map(|slot| match slot {
                Some(digest) => json!(digest_to_hex(digest)),
                None => serde_json::Value::Null,
            })
            .collect();
        return to_json_string(&value);
    }

    let mut output = format!(
        "{}\n  Directory: {}\n  Recursive: {}\n  Algorithm: {}\n  Root: {}\n  Height: {}\n  Leaves: {}\n  Total nodes: {}\n",
        "Merkle tree".bold(),
        tree.directory().display(),
        tree.is_recursive(),
        tree.algorithm(),
        digest_to_hex(&tree.root_hash()),
        tree.height(),
        tree.num_leaves(),
        tree.total_nodes(),
    );
    append_skipped(&mut output, tree);

    if !tree.has_tree() {
        output.push_str("\nNo files found; tree is empty.");
        return Ok(output);
    }

    let leaf_level = tree.height();
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["Index", "Level", "Kind", "Digest"]);
    for (index, level, digest) in tree.populated_nodes() {
        let kind = if level == leaf_level { "leaf" } else { "internal" };
        table.add_row(vec![
            index.to_string(),
            level.to_string(),
            kind.to_string(),
            digest_to_hex(digest),
        ]);
    }
    output.push('\n');
    output.push_str(&table.to_string());
    Ok(output)
}

pub fn format_leaves(tree: &MerkleTree, format: OutputFormat) -> Result<String, ApiError> {
    let leaves: Vec<String> = tree.leaves().iter().map(digest_to_hex).collect();
    match format {
        OutputFormat::Json => to_json_string(&json!({
            "file_count": tree.file_count(),
            "num_leaves": tree.num_leaves(),
            "leaves": leaves,
        })),
        OutputFormat::Text => Ok(leaves.join("\n")),
    }
}

pub fn format_verify_success(tree: &MerkleTree) -> String {
    let mut output = format!(
        "{} {} matches root {}",
        "OK".green(),
        tree.directory().display(),
        digest_to_hex(&tree.root_hash())
    );
    append_skipped(&mut output, tree);
    output
}

fn append_skipped(output: &mut String, tree: &MerkleTree) {
    let skipped = tree.skipped_files();
    if skipped.is_empty() {
        return;
    }
    output.push_str(&format!("\n  Skipped unreadable files ({}):", skipped.len()));
    for path in skipped {
        output.push_str(&format!("\n    - {}", path.display()));
    }
}
