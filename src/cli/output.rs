//! Output formatting utilities

use crate::application::{BatchReport, TagChange};

/// Format the per-post result of a mutating batch.
pub fn format_changes(report: &BatchReport<TagChange>) -> String {
    let mut output = String::new();
    let mut changed = 0usize;

    for (post, change) in report.succeeded() {
        if change.changed() {
            changed += 1;
        }
        output.push_str(&format!("{}: {}\n", post, change.after));
    }

    let failed = report.failure_count();
    let summary = if report.dry_run {
        format!("Dry run: {} post(s) would be updated", changed)
    } else {
        format!("Updated {} post(s)", changed)
    };
    if failed > 0 {
        output.push_str(&format!("{}, {} failed.\n", summary, failed));
    } else {
        output.push_str(&format!("{}.\n", summary));
    }

    output
}

/// Format the errors of a batch, one line per failed post.
pub fn format_failures<T>(report: &BatchReport<T>) -> String {
    let mut output = String::new();
    for (post, error) in report.failed() {
        output.push_str(&format!("{}: {}\n", post, error));
    }
    output
}

/// Format a list of tags for display.
pub fn format_tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        output.push_str(&format!("{}\n", tag));
    }

    output
}

/// Format tags with their usage counts, count first.
pub fn format_counts(counts: &[(String, usize)]) -> String {
    if counts.is_empty() {
        return "No tags found".to_string();
    }

    let width = counts
        .iter()
        .map(|(_, count)| count.to_string().len())
        .max()
        .unwrap_or(1);

    let mut output = String::new();
    for (tag, count) in counts {
        output.push_str(&format!("{:>width$} {}\n", count, tag, width = width));
    }
    output
}
