use std::collections::BTreeMap;
use std::fmt;

/// A malformed revision-set line, reported and skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionSetIssue {
    /// 1-based line number in the source text
    pub line: usize,
    /// The offending line, trimmed
    pub entry: String,
    pub message: String,
}

impl fmt::Display for RevisionSetIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid rev set entry on line #{} ('{}'), {}",
            self.line, self.entry, self.message
        )
    }
}

/// Repository path to pinned revision mapping.
///
/// Text format is one `<repository-path> @ <revision>` per line, `#` comments
/// and blank lines are ignored. `log --rev-set` emits exactly this format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevisionSet {
    entries: BTreeMap<String, u64>,
}

impl RevisionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses revision-set text. Malformed lines never fail the whole parse,
    /// they come back as issues next to the valid entries.
    pub fn parse(content: &str) -> (Self, Vec<RevisionSetIssue>) {
        let mut set = Self::new();
        let mut issues = Vec::new();

        for (index, raw) in content.lines().enumerate() {
            let entry = raw.trim();
            if entry.is_empty() || entry.starts_with('#') {
                continue;
            }

            let issue = |message: &str| RevisionSetIssue {
                line: index + 1,
                entry: entry.to_string(),
                message: message.to_string(),
            };

            let parts: Vec<&str> = entry.split('@').collect();
            if parts.len() != 2 {
                issues.push(issue(
                    "definition must contain '@' between repository and revision",
                ));
                continue;
            }

            let repository = parts[0].trim();
            let revision = parts[1].trim();

            if repository.is_empty() {
                issues.push(issue("repository path is empty"));
                continue;
            }

            match parse_revision(revision) {
                Some(revision) => {
                    set.entries.insert(repository.to_string(), revision);
                }
                None => issues.push(issue("revision must be a non-negative number")),
            }
        }

        (set, issues)
    }

    pub fn insert(&mut self, repository: impl Into<String>, revision: u64) {
        self.entries.insert(repository.into(), revision);
    }

    /// Pinned revision for a repository path, `None` means latest
    pub fn get(&self, repository: &str) -> Option<u64> {
        self.entries.get(repository).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

fn parse_revision(text: &str) -> Option<u64> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
