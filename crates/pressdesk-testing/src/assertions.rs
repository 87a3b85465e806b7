//! Custom assertions over `pressdesk --format json` output.
//!
//! Every command wraps its payload in `{"content": ...}`; these helpers read
//! the listing and count shapes the dashboard commands emit.

use anyhow::{Context, Result};
use serde_json::Value;

/// Render a JSON id (number or string) the way the CLI accepts it back.
fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

/// Assert that `content.rows` lists exactly `expected` ids, in order.
pub fn assert_row_ids(json: &Value, expected: &[&str]) -> Result<()> {
    let rows = json["content"]["rows"]
        .as_array()
        .context("Expected 'content.rows' array in JSON")?;

    let ids = rows
        .iter()
        .enumerate()
        .map(|(i, row)| id_text(&row["id"]).with_context(|| format!("Row {} missing id", i)))
        .collect::<Result<Vec<_>>>()?;

    if ids != expected {
        anyhow::bail!("Expected rows {:?}, got {:?}", expected, ids);
    }

    Ok(())
}

/// Assert the per-tab counts under `content.counts`.
pub fn assert_counts(json: &Value, published: u64, drafts: u64, trashed: u64) -> Result<()> {
    let counts = &json["content"]["counts"];
    if !counts.is_object() {
        anyhow::bail!("Expected 'content.counts' object in JSON");
    }

    let actual = (
        counts["published"].as_u64().context("counts.published")?,
        counts["drafts"].as_u64().context("counts.drafts")?,
        counts["trashed"].as_u64().context("counts.trashed")?,
    );

    if actual != (published, drafts, trashed) {
        anyhow::bail!(
            "Expected counts (published, drafts, trashed) = {:?}, got {:?}",
            (published, drafts, trashed),
            actual
        );
    }

    Ok(())
}

/// Assert that every row under `content.rows` carries `status`.
pub fn assert_rows_have_status(json: &Value, status: &str) -> Result<()> {
    let rows = json["content"]["rows"]
        .as_array()
        .context("Expected 'content.rows' array in JSON")?;

    for (i, row) in rows.iter().enumerate() {
        let row_status = row["status"]
            .as_str()
            .with_context(|| format!("Row {} missing status", i))?;
        if row_status != status {
            anyhow::bail!("Row {} has status {} but expected {}", i, row_status, status);
        }
    }

    Ok(())
}

/// Assert the badge level of a command result (`success`, `info`, `warning`, `error`).
pub fn assert_badge(json: &Value, level: &str) -> Result<()> {
    let actual = json["badge"]["level"]
        .as_str()
        .context("Expected 'badge.level' in JSON")?;

    if actual != level {
        anyhow::bail!("Expected badge level {}, got {}", level, actual);
    }

    Ok(())
}
