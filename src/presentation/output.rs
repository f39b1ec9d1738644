//! Output Rendering
//!
//! Text and JSON forms of command results.

use crate::application::{DeployReport, ListedDeployment};

const ACTIVE_SUFFIX: &str = " (active)";

/// One line per deployment, newest first, active entry suffixed
pub fn render_list(listed: &[ListedDeployment]) -> String {
    let mut out = String::new();
    for entry in listed {
        out.push_str(&entry.deployment.name());
        if entry.active {
            out.push_str(ACTIVE_SUFFIX);
        }
        out.push('\n');
    }
    out
}

pub fn list_to_json(listed: &[ListedDeployment]) -> serde_json::Value {
    let deployments: Vec<serde_json::Value> = listed
        .iter()
        .map(|entry| {
            let created = entry
                .deployment
                .created_at_utc()
                .map(|at| at.to_rfc3339());
            serde_json::json!({
                "deployment": entry.deployment.name(),
                "commit": entry.deployment.commit_hash(),
                "created_at": entry.deployment.created_at(),
                "created": created,
                "active": entry.active,
            })
        })
        .collect();

    serde_json::json!({
        "event": "list",
        "deployments": deployments,
    })
}

/// Final summary object for `deploy --json`
pub fn deploy_to_json(report: &DeployReport) -> serde_json::Value {
    let removed: Vec<String> = report
        .clean
        .iter()
        .flat_map(|clean| clean.removed.iter().map(|d| d.name()))
        .collect();

    serde_json::json!({
        "event": "deploy_complete",
        "deployment": report.deployment.name(),
        "commit": report.deployment.commit_hash(),
        "cache_hit": report.is_cache_hit(),
        "removed": removed,
    })
}
