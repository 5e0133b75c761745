//! `actrack seed` command.

use anyhow::Result;
use console::style;

use actrack_infra::seed::seed_sample_data;

use crate::state::AppState;

pub async fn seed(state: &AppState, json: bool) -> Result<()> {
    let summary = seed_sample_data(&state.db_pool).await?;

    if json {
        let out = serde_json::json!({
            "seeded": !summary.is_empty(),
            "groups": summary.groups,
            "categories": summary.categories,
            "activities": summary.activities,
            "records": summary.records,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    if summary.is_empty() {
        println!(
            "  {} Database already has groups; nothing seeded.",
            style("•").dim()
        );
    } else {
        println!(
            "  {} Seeded {} groups, {} categories, {} activities, {} records.",
            style("✓").green(),
            summary.groups,
            summary.categories,
            summary.activities,
            summary.records
        );
    }
    println!();

    Ok(())
}
