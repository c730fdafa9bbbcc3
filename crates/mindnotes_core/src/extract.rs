//! Task-list extraction from free-form assistant text.
//!
//! # Responsibility
//! - Recognize the `Title:`/`Tasks:` + numbered-lines shape in a chat reply.
//! - Return a structured draft, or nothing when the shape is absent.
//!
//! # Invariants
//! - No-match is normal control flow (`None`), never an error.
//! - This is a best-effort heuristic: malformed or ambiguous input (missing
//!   numbering, nested lists) is simply not recognized.

use once_cell::sync::Lazy;
use regex::Regex;

static TITLE_LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*(?:title|list)\s*:\s*(.+)$").expect("valid title regex"));
static TASKS_LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*(?:tasks?|items?)\s*:\s*(.*)$").expect("valid tasks regex"));
static NUMBERED_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\d+\s*\.\s*(.*)$").expect("valid item regex"));

/// Structured task-list candidate extracted from assistant text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListDraft {
    pub title: String,
    /// Trimmed, non-empty task texts in reply order.
    pub tasks: Vec<String>,
}

/// Extracts a `{title, tasks}` pair from a free-form reply.
///
/// Recognized shape: a line labelled `Title:` or `List:` with a non-empty
/// remainder, immediately followed by a line labelled `Tasks:`/`Task:` or
/// `Items:`/`Item:` (the first numbered entry may sit on the label line),
/// then consecutive `<integer>. <text>` lines. Labels are matched
/// case-insensitively. Blank lines inside the numbered block are tolerated;
/// any other line ends it.
///
/// Returns `None` when no such shape exists or it yields zero non-empty
/// tasks.
pub fn extract_task_list(response_text: &str) -> Option<TaskListDraft> {
    let lines: Vec<&str> = response_text.lines().collect();

    for (index, line) in lines.iter().enumerate() {
        let Some(title) = match_label_value(&TITLE_LABEL_RE, line) else {
            continue;
        };
        let Some(label_line) = lines.get(index + 1) else {
            continue;
        };
        let Some(remainder) = TASKS_LABEL_RE
            .captures(label_line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
        else {
            continue;
        };

        if let Some(tasks) = collect_numbered_block(remainder, &lines[index + 2..]) {
            return Some(TaskListDraft { title, tasks });
        }
    }

    None
}

fn match_label_value(label: &Regex, line: &str) -> Option<String> {
    let value = label.captures(line)?.get(1)?.as_str().trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Gathers the numbered entries that follow a tasks label.
///
/// `label_remainder` is whatever trailed the label on its own line; when it
/// holds text that is not a numbered entry the candidate does not match.
fn collect_numbered_block(label_remainder: &str, rest: &[&str]) -> Option<Vec<String>> {
    let mut tasks = Vec::new();

    let remainder = label_remainder.trim();
    if !remainder.is_empty() {
        push_item(&mut tasks, NUMBERED_ITEM_RE.captures(remainder)?);
    }

    for line in rest {
        if line.trim().is_empty() {
            continue;
        }
        match NUMBERED_ITEM_RE.captures(line) {
            Some(caps) => push_item(&mut tasks, caps),
            None => break,
        }
    }

    if tasks.is_empty() {
        None
    } else {
        Some(tasks)
    }
}

fn push_item(tasks: &mut Vec<String>, caps: regex::Captures<'_>) {
    if let Some(text) = caps.get(1) {
        let trimmed = text.as_str().trim();
        if !trimmed.is_empty() {
            tasks.push(trimmed.to_string());
        }
    }
}
