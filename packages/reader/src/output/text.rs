//! Human-readable rendering: indented outline and summary statistics.

use std::fmt::Write;

use chrono::Duration;
use console::style;

use buildlog_model::{default_instant, BuildLog, NodeData, Timed, TreeNode};

use crate::config::TEXT_WRAP_WIDTH;

const INDENT: &str = "  ";

/// Format a duration compactly, e.g. `850ms`, `4.250s`, `2m 03s`.
///
/// # Examples
/// ```
/// use buildlog_reader::output::format_duration;
/// use chrono::Duration;
///
/// assert_eq!(format_duration(Duration::milliseconds(850)), "850ms");
/// assert_eq!(format_duration(Duration::milliseconds(4250)), "4.250s");
/// assert_eq!(format_duration(Duration::seconds(123)), "2m 03s");
/// ```
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let millis = duration.num_milliseconds();
    if millis < 1000 {
        format!("{millis}ms")
    } else if millis < 60_000 {
        format!("{}.{:03}s", millis / 1000, millis % 1000)
    } else {
        let secs = duration.num_seconds();
        format!("{}m {:02}s", secs / 60, secs % 60)
    }
}

/// Render the log as an indented outline, one node per line.
///
/// `max_depth` limits how many levels below the root are shown; the root
/// is depth 0.
#[must_use]
pub fn render_tree(log: &BuildLog, max_depth: Option<usize>) -> String {
    let mut out = String::new();

    let result = if log.build.succeeded {
        style("succeeded").green().to_string()
    } else {
        style("failed").red().to_string()
    };
    let mut header = format!("{} {result}", style("Build").bold());
    if let Some(duration) = log.build.duration() {
        header.push_str(&format!(" in {}", format_duration(duration)));
    }
    push_line(&mut out, 0, &header, log.is_low_relevance);

    if max_depth != Some(0) {
        for child in &log.children {
            render_node(&mut out, child, 1, max_depth);
        }
    }
    out
}

fn render_node(out: &mut String, node: &TreeNode, depth: usize, max_depth: Option<usize>) {
    if let NodeData::Message(message) = &node.data {
        render_message(out, depth, message.timestamp, &message.text, node.is_low_relevance);
    } else {
        push_line(out, depth, &describe(node), node.is_low_relevance);
    }

    if max_depth.is_some_and(|max| depth >= max) {
        if !node.children.is_empty() {
            let hidden = node.count() - 1;
            push_line(out, depth + 1, &format!("… {hidden} more"), true);
        }
        return;
    }
    for child in &node.children {
        render_node(out, child, depth + 1, max_depth);
    }
}

/// One-line label for a non-message node.
fn describe(node: &TreeNode) -> String {
    let kind = style(node.kind()).bold();
    let name = node.name().map(|n| style(n).cyan().to_string());

    let mut label = match &node.data {
        NodeData::Project(project) => {
            let mut label = format!("{kind} {}", name.unwrap_or_default());
            if let Some(file) = &project.project_file {
                label.push_str(&format!(" [{file}]"));
            }
            label
        }
        NodeData::Task(task) => {
            let mut label = format!("{kind} {}", name.unwrap_or_default());
            if let Some(assembly) = &task.from_assembly {
                label.push_str(&format!(" ({assembly})"));
            }
            if let Some(args) = &task.command_line_arguments {
                label.push_str(&format!(" $ {args}"));
            }
            label
        }
        NodeData::Item(item) => match (&name, &item.text) {
            (Some(n), Some(text)) => format!("{kind} {n} = {text}"),
            (None, Some(text)) => format!("{kind} {text}"),
            _ => format!("{kind} {}", name.as_deref().unwrap_or_default()),
        },
        NodeData::Property(p) => format!("{kind} {} = {}", name.unwrap_or_default(), p.value.trim()),
        NodeData::Metadata(m) => format!("{kind} {} = {}", name.unwrap_or_default(), m.value.trim()),
        NodeData::Folder(_) => match name {
            Some(n) => n,
            None => kind.to_string(),
        },
        _ => match name {
            Some(n) => format!("{kind} {n}"),
            None => kind.to_string(),
        },
    };

    if let Some(duration) = node.data.as_timed().and_then(|t| t.duration()) {
        label.push_str(&format!(" {}", style(format_duration(duration)).dim()));
    }
    label.trim_end().to_string()
}

fn render_message(
    out: &mut String,
    depth: usize,
    timestamp: chrono::DateTime<chrono::Utc>,
    text: &str,
    low_relevance: bool,
) {
    let prefix = if timestamp == default_instant() {
        String::new()
    } else {
        format!("{} ", timestamp.format("%H:%M:%S"))
    };
    let indent = INDENT.repeat(depth);
    let continuation = format!("{indent}{INDENT}");
    let options = textwrap::Options::new(TEXT_WRAP_WIDTH)
        .initial_indent(&indent)
        .subsequent_indent(&continuation);
    let body = textwrap::fill(&format!("{prefix}{}", text.trim()), options);

    let body = if low_relevance {
        style(body).dim().to_string()
    } else {
        body
    };
    out.push_str(&body);
    out.push('\n');
}

fn push_line(out: &mut String, depth: usize, text: &str, low_relevance: bool) {
    let indent = INDENT.repeat(depth);
    if low_relevance {
        let _ = writeln!(out, "{indent}{}", style(text).dim());
    } else {
        let _ = writeln!(out, "{indent}{text}");
    }
}

/// Summarize a log: result, duration, and node counts per kind.
#[must_use]
pub fn render_stats(log: &BuildLog) -> String {
    let mut out = String::new();

    let result = if log.build.succeeded {
        style("succeeded").green()
    } else {
        style("failed").red()
    };
    let _ = writeln!(out, "{} {result}", style("Result:").bold());

    if let Some(duration) = log.build.duration() {
        let _ = writeln!(out, "{} {}", style("Duration:").bold(), format_duration(duration));
    }

    let _ = writeln!(out, "{} {}", style("Nodes:").bold(), log.count());
    for (kind, count) in log.count_by_kind() {
        let _ = writeln!(out, "  {:<10} {count}", kind.name());
    }

    let low_relevance = log.descendants().filter(|n| n.is_low_relevance).count();
    if low_relevance > 0 {
        let _ = writeln!(out, "{} {low_relevance}", style("Low relevance:").dim());
    }
    out
}
