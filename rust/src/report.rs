//! Plain-text rendering of analysis results.

use crate::models::CpmResult;

/// Render a result as the classic three-line schedule report.
///
/// Purely presentational; all numbers come straight from the result.
pub fn format_report(result: &CpmResult) -> String {
    let critical: Vec<String> = result
        .critical_path
        .iter()
        .map(|task| task.to_string())
        .collect();
    let slack: Vec<String> = result.slack.iter().map(|s| s.to_string()).collect();

    let mut out = String::new();
    out.push_str(&format!(
        "Length of the critical path: {}\n",
        result.project_length
    ));
    out.push_str(&format!(
        "Tasks on the critical path: {}\n",
        critical.join(" ")
    ));
    out.push_str(&format!("Slack times: {}\n", slack.join(" ")));
    out
}
