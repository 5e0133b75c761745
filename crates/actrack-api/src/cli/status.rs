//! System status command.

use anyhow::Result;
use console::style;

use crate::state::AppState;

/// Display entity counts, presence settings and storage paths.
pub async fn status(state: &AppState, json: bool) -> Result<()> {
    let groups = state.group_service.list_groups().await?;
    let categories = state.category_service.list_categories().await?;
    let activities = state.activity_service.list_activities().await?;
    let records = state.record_service.list_records().await?;
    let tags = state.tag_service.list_tags().await?;

    let active = activities.iter().filter(|a| a.is_active).count();
    let with_credential = groups.iter().filter(|g| g.credential().is_some()).count();

    if json {
        let status = serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "data_dir": state.data_dir.display().to_string(),
            "groups": {
                "total": groups.len(),
                "with_client_id": with_credential,
            },
            "categories": categories.len(),
            "activities": {
                "total": activities.len(),
                "active": active,
            },
            "records": records.len(),
            "tags": tags.len(),
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} actrack v{}",
        style("⚡").bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!();

    println!("  {}", style("── Tracking ──").dim());
    println!("  Groups:     {}", style(groups.len()).bold());
    println!("  Categories: {}", style(categories.len()).bold());
    println!(
        "  Activities: {} ({} active)",
        style(activities.len()).bold(),
        style(active).green()
    );
    println!("  Records:    {}", style(records.len()).bold());
    println!("  Tags:       {}", style(tags.len()).bold());
    println!();

    println!("  {}", style("── Presence ──").dim());
    if with_credential == 0 {
        println!(
            "  Client ids: {}",
            style("none configured").yellow()
        );
    } else {
        println!(
            "  Client ids: {} of {} groups",
            style(with_credential).green(),
            groups.len()
        );
    }
    println!(
        "  Default image: {}",
        style(&state.config.presence.default_image).dim()
    );
    println!();

    println!("  {}", style("── System ──").dim());
    println!(
        "  Data dir: {}",
        style(state.data_dir.display()).dim()
    );
    println!(
        "  Database: {}",
        style("SQLite (WAL mode)").dim()
    );
    println!();

    Ok(())
}
