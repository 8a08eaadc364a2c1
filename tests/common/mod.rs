//! Shared test support
//!
//! An in-memory Subversion server standing in for the `svn` binary, a
//! capturing console and helpers to lay out a fleet on disk.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use svnfleet::common::output::{Console, PlainStyle};
use svnfleet::domain::entities::{change::Change, log_entry::LogEntry, repository::WorkingCopyInfo};
use svnfleet::infrastructure::scm::{DiffTarget, LogQuery, MergeOptions, ScmError, SvnClient};
use tempfile::TempDir;

pub const ROOT: &str = "https://svn.example.com/repos";

/// `Write` sink whose contents stay readable after being handed to a console
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Uncolored console writing into two buffers
pub fn capture_console() -> (Console, SharedBuffer, SharedBuffer) {
    let out = SharedBuffer::default();
    let err = SharedBuffer::default();
    let console = Console::new(
        Box::new(out.clone()),
        Box::new(err.clone()),
        Box::new(PlainStyle),
    );
    (console, out, err)
}

#[derive(Default)]
struct ServerState {
    head: u64,
    /// Every directory that exists on the server
    nodes: BTreeSet<String>,
    histories: HashMap<String, Vec<LogEntry>>,
    working_copies: HashMap<PathBuf, WorkingCopyInfo>,
    statuses: HashMap<PathBuf, Vec<Change>>,
    diffs: HashMap<PathBuf, Vec<String>>,
    calls: Vec<String>,
}

/// In-memory `svn` that records every call it receives
#[derive(Clone, Default)]
pub struct FakeSvn {
    state: Arc<Mutex<ServerState>>,
}

impl FakeSvn {
    pub fn new(head: u64) -> Self {
        let fake = Self::default();
        fake.state.lock().unwrap().head = head;
        fake
    }

    /// Declares a directory on the server, e.g. `Lib/branches/feature`
    pub fn with_node(self, relative: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .nodes
            .insert(format!("{}/{}", ROOT, relative));
        self
    }

    /// Registers a working copy switched to `relative` below the root
    pub fn with_working_copy(self, path: &Path, relative: &str, revision: u64) -> Self {
        let info = WorkingCopyInfo::new(format!("{}/{}", ROOT, relative), ROOT, revision);
        let fake = self.with_node(relative);
        fake.state
            .lock()
            .unwrap()
            .working_copies
            .insert(path.to_path_buf(), info);
        fake
    }

    pub fn with_status(self, path: &Path, changes: Vec<Change>) -> Self {
        self.state
            .lock()
            .unwrap()
            .statuses
            .insert(path.to_path_buf(), changes);
        self
    }

    /// History of a URL below the root, newest first
    pub fn with_history(self, relative: &str, entries: Vec<LogEntry>) -> Self {
        self.state
            .lock()
            .unwrap()
            .histories
            .insert(format!("{}/{}", ROOT, relative), entries);
        self
    }

    pub fn with_diff(self, path: &Path, lines: &[&str]) -> Self {
        self.state.lock().unwrap().diffs.insert(
            path.to_path_buf(),
            lines.iter().map(|line| line.to_string()).collect(),
        );
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Calls whose first word is `command`
    pub fn calls_to(&self, command: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|call| call.split(' ').next() == Some(command))
            .collect()
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.state
            .lock()
            .unwrap()
            .nodes
            .contains(&format!("{}/{}", ROOT, relative))
    }

    pub fn info_of(&self, path: &Path) -> Option<WorkingCopyInfo> {
        self.state.lock().unwrap().working_copies.get(path).cloned()
    }

    fn record(&self, call: String) {
        self.state.lock().unwrap().calls.push(call);
    }
}

fn failure(command: &str, stderr: &str) -> ScmError {
    ScmError::command_failed(format!("svn {}", command), 1, stderr)
}

#[async_trait]
impl SvnClient for FakeSvn {
    async fn info(&self, path: &Path) -> Result<WorkingCopyInfo, ScmError> {
        self.info_of(path).ok_or_else(|| {
            failure(
                "info",
                &format!("svn: E155007: '{}' is not a working copy", path.display()),
            )
        })
    }

    async fn status(&self, path: &Path) -> Result<Vec<Change>, ScmError> {
        let state = self.state.lock().unwrap();
        Ok(state.statuses.get(path).cloned().unwrap_or_default())
    }

    async fn list(&self, url: &str) -> Result<Vec<String>, ScmError> {
        self.record(format!("list {}", url));
        let state = self.state.lock().unwrap();
        if !state.nodes.contains(url) {
            return Err(failure(
                "list",
                &format!("svn: E200009: '{}' non-existent in revision {}", url, state.head),
            ));
        }

        let prefix = format!("{}/", url);
        Ok(state
            .nodes
            .iter()
            .filter_map(|node| node.strip_prefix(&prefix))
            .filter(|child| !child.contains('/'))
            .map(str::to_string)
            .collect())
    }

    async fn log(&self, url: &str, query: &LogQuery) -> Result<Vec<LogEntry>, ScmError> {
        self.record(format!("log {}", url));
        let state = self.state.lock().unwrap();
        let mut entries = state.histories.get(url).cloned().unwrap_or_default();

        if let Some(search) = &query.search {
            entries.retain(|entry| {
                entry.summary.contains(search.as_str())
                    || entry.author.as_deref() == Some(search.as_str())
            });
        }
        if query.revision_range.as_deref() == Some("0:HEAD") {
            entries.reverse();
        }
        if let Some(limit) = query.limit {
            entries.truncate(limit as usize);
        }
        Ok(entries)
    }

    async fn copy(&self, source: &str, target: &str, message: &str) -> Result<(), ScmError> {
        self.record(format!("copy {} {} {}", source, target, message));
        let mut state = self.state.lock().unwrap();
        state.head += 1;
        state.nodes.insert(target.to_string());
        Ok(())
    }

    async fn remove(&self, url: &str, message: &str) -> Result<(), ScmError> {
        self.record(format!("rm {} {}", url, message));
        let mut state = self.state.lock().unwrap();
        state.head += 1;
        state.nodes.remove(url);
        Ok(())
    }

    async fn rename(&self, source: &str, target: &str, message: &str) -> Result<(), ScmError> {
        self.record(format!("rename {} {} {}", source, target, message));
        let mut state = self.state.lock().unwrap();
        state.head += 1;
        state.nodes.remove(source);
        state.nodes.insert(target.to_string());
        Ok(())
    }

    async fn switch(&self, url: &str, path: &Path) -> Result<(), ScmError> {
        self.record(format!("switch {}", url));
        let mut state = self.state.lock().unwrap();
        let head = state.head;
        let info = state
            .working_copies
            .get_mut(path)
            .ok_or_else(|| failure("switch", "svn: E155007: not a working copy"))?;
        info.url = url.to_string();
        info.revision = head;
        Ok(())
    }

    async fn update(&self, path: &Path, revision: Option<u64>) -> Result<(), ScmError> {
        self.record(match revision {
            Some(revision) => format!("update -r {}", revision),
            None => "update".to_string(),
        });
        let mut state = self.state.lock().unwrap();
        let target = revision.unwrap_or(state.head);
        let info = state
            .working_copies
            .get_mut(path)
            .ok_or_else(|| failure("update", "svn: E155007: not a working copy"))?;
        info.revision = target;
        Ok(())
    }

    async fn commit(
        &self,
        path: &Path,
        targets: &[String],
        message: &str,
    ) -> Result<(), ScmError> {
        self.record(format!("commit {} -- {}", message, targets.join(" ")));
        let mut state = self.state.lock().unwrap();
        state.head += 1;
        state.statuses.remove(path);
        Ok(())
    }

    async fn diff(&self, target: &DiffTarget) -> Result<Vec<String>, ScmError> {
        match target {
            DiffTarget::WorkingCopy(path) => {
                self.record("diff".to_string());
                let state = self.state.lock().unwrap();
                Ok(state.diffs.get(path).cloned().unwrap_or_default())
            }
            DiffTarget::Urls { old, new } => {
                self.record(format!("diff --old {} --new {}", old, new));
                Ok(vec![format!("Index: {}", new)])
            }
        }
    }

    async fn merge(
        &self,
        source_url: &str,
        _path: &Path,
        options: &MergeOptions,
    ) -> Result<Vec<String>, ScmError> {
        self.record(format!(
            "merge{} {}",
            if options.dry_run { " --dry-run" } else { "" },
            source_url
        ));
        Ok(vec![
            "--- Merging r4 through r6 into '.':".to_string(),
            "U    src/lib.c".to_string(),
        ])
    }

    async fn revert(&self, path: &Path) -> Result<(), ScmError> {
        self.record("revert".to_string());
        self.state.lock().unwrap().statuses.remove(path);
        Ok(())
    }
}

/// A directory holding working-copy folders and the fleet configuration
pub struct FleetDir {
    pub dir: TempDir,
}

impl FleetDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Creates the folder of a working copy and returns its path
    pub fn working_copy(&self, name: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::create_dir_all(&path).unwrap();
        path
    }

    /// Writes a configuration file listing `paths` in order
    pub fn config(&self, paths: &[&Path]) -> PathBuf {
        let content: Vec<String> = paths
            .iter()
            .map(|path| path.display().to_string())
            .collect();
        self.write("fleet.txt", &content.join("\n"))
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }
}
