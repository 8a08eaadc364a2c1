//! Parsers for the `--xml` and plain-text output of the svn client.

use crate::domain::entities::{change::Change, log_entry::LogEntry, repository::WorkingCopyInfo};
use crate::domain::value_objects::change_kind::ChangeKind;
use chrono::{DateTime, Utc};
use roxmltree::{Document, Node};

/// Failure description, wrapped into `ScmError::ParseError` by the caller
pub type ParseResult<T> = Result<T, String>;

fn parse_document(xml: &str) -> ParseResult<Document<'_>> {
    Document::parse(xml).map_err(|e| format!("malformed XML: {}", e))
}

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.has_tag_name(name))
}

fn child_text(node: Node<'_, '_>, name: &str) -> Option<String> {
    child(node, name).map(|n| n.text().unwrap_or_default().to_string())
}

fn revision_attribute(node: Node<'_, '_>) -> ParseResult<u64> {
    let text = node
        .attribute("revision")
        .ok_or_else(|| format!("<{}> has no revision", node.tag_name().name()))?;
    text.parse::<u64>()
        .map_err(|e| format!("invalid revision '{}': {}", text, e))
}

/// Parses `svn info --xml`
pub fn parse_info(xml: &str) -> ParseResult<WorkingCopyInfo> {
    let doc = parse_document(xml)?;
    let entry = doc
        .descendants()
        .find(|n| n.has_tag_name("entry"))
        .ok_or_else(|| "missing <entry>".to_string())?;

    let revision = revision_attribute(entry)?;
    let url = child_text(entry, "url").ok_or_else(|| "missing <url>".to_string())?;
    let root = child(entry, "repository")
        .and_then(|repository| child_text(repository, "root"))
        .ok_or_else(|| "missing <root>".to_string())?;

    Ok(WorkingCopyInfo::new(url, root, revision))
}

/// Parses `svn status --xml`
pub fn parse_status(xml: &str) -> ParseResult<Vec<Change>> {
    let doc = parse_document(xml)?;
    let changes = doc
        .descendants()
        .filter(|n| n.has_tag_name("entry"))
        .map(|entry| -> ParseResult<Change> {
            let path = entry
                .attribute("path")
                .ok_or_else(|| "status entry has no path".to_string())?;
            let item = child(entry, "wc-status")
                .and_then(|status| status.attribute("item"))
                .ok_or_else(|| format!("entry '{}' has no item attribute", path))?;
            let kind = item.parse::<ChangeKind>().map_err(|e| e.to_string())?;
            Ok(Change::new(path, kind))
        })
        .collect();
    changes
}

/// Parses `svn log --xml`
pub fn parse_log(xml: &str) -> ParseResult<Vec<LogEntry>> {
    let doc = parse_document(xml)?;
    let entries = doc
        .descendants()
        .filter(|n| n.has_tag_name("logentry"))
        .map(|node| -> ParseResult<LogEntry> {
            let mut entry = LogEntry::new(revision_attribute(node)?);
            if let Some(author) = child_text(node, "author") {
                entry = entry.with_author(author);
            }
            if let Some(date) = child_text(node, "date") {
                entry = entry.with_date(parse_date(&date)?);
            }
            if let Some(msg) = child_text(node, "msg") {
                entry = entry.with_message(&msg);
            }
            Ok(entry)
        })
        .collect();
    entries
}

/// Parses `svn list`, dropping the `/` svn appends to directories
pub fn parse_list(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.trim_end().trim_end_matches('/'))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_date(text: &str) -> ParseResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text.trim())
        .map(|date| date.with_timezone(&Utc))
        .map_err(|e| format!("invalid date '{}': {}", text, e))
}
