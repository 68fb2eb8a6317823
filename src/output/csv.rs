//! CSV output formatting for subnet plans.

use crate::models::{SubnetInfo, SubnetPlan};
use colored::Colorize;
use itertools::Itertools;

use super::terminal::format_field;

/// CSV header matching [`format_csv_row`].
pub const CSV_HEADER: &str = r#" "cnt",        "network",     "first_host",      "last_host",      "broadcast",  "hosts""#;

/// Render a subnet plan as CSV, followed by a `#` summary block.
pub fn render_plan(plan: &SubnetPlan) -> String {
    log::info!(
        "#Start render_plan() {} -> {} x /{}",
        plan.parent,
        plan.subnets.len(),
        plan.new_prefix
    );

    let mut lines = vec![CSV_HEADER.to_string()];
    lines.extend(plan.subnets.iter().map(format_csv_row));
    lines.extend(summary_lines(plan).into_iter().map(|line| format!("#{line}")));
    if plan.exceeds_parent() {
        lines.push(format!(
            "#{}# children run past the end of {}",
            "NOTE".on_red(),
            plan.parent
        ));
    }
    lines.join("\n")
}

/// Format one subnet as a CSV row.
pub fn format_csv_row(row: &SubnetInfo) -> String {
    [
        format_field(row.index, 6),
        format_field(row.cidr(), 18),
        format_field(row.first_host, 17),
        format_field(row.last_host, 17),
        format_field(row.broadcast, 17),
        format_field(row.hosts, 8),
    ]
    .iter()
    .join(",")
}

/// Human readable summary of a plan.
pub fn summary_lines(plan: &SubnetPlan) -> Vec<String> {
    let new_mask = plan
        .new_mask()
        .map(|m| m.to_string())
        .unwrap_or_else(|| "n/a".to_string());
    vec![
        format!("Original Network: {}", plan.parent),
        format!("New Subnet Mask: /{} ({})", plan.new_prefix, new_mask),
        format!("Total Subnets: {}", plan.subnets.len()),
        format!("Hosts per Subnet: {}", plan.hosts_per_subnet()),
        format!("Total Hosts: {}", plan.total_hosts()),
    ]
}
