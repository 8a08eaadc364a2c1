use percent_encoding::percent_decode_str;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;
use url::Url;

/// Name of the mainline directory
pub const TRUNK: &str = "trunk";

/// Suffix appended to archived branches
pub const ARCHIVE_SUFFIX: &str = ".closed";

/// Errors raised while mapping a repository URL onto the standard layout
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Unrecognized repository layout (expected trunk, branches/<name> or tags/<name>): {url}")]
    UnrecognizedLayout { url: String },

    #[error("Invalid repository URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },
}

/// Logical location inside the `trunk` / `branches` / `tags` layout
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum BranchPath {
    /// The mainline
    Trunk,
    /// A development line under `branches/<name>`
    Branch(String),
    /// A snapshot under `tags/<name>`
    Tag(String),
}

fn layout_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"/(?:(branches|tags)/([^/]+)|trunk)(?:/|$)")
            .expect("layout pattern is a valid regex")
    })
}

impl BranchPath {
    /// Maps a branch name as typed by a user onto the layout.
    ///
    /// `trunk` is special-cased, every other name lives under `branches/`.
    pub fn from_name(name: &str) -> Self {
        if name == TRUNK {
            Self::Trunk
        } else {
            Self::Branch(name.to_string())
        }
    }

    /// Splits a full repository URL into the project base URL and the layout
    /// location it points at.
    ///
    /// Whole path segments are matched and the leftmost match wins, so
    /// `https://host/Lib/branches/feature/src` yields
    /// (`https://host/Lib`, `Branch("feature")`).
    pub fn parse_url(url: &str) -> Result<(Url, Self), LayoutError> {
        Self::parse_url_within(url, "")
    }

    /// Like [`BranchPath::parse_url`], but only looks for the layout below
    /// `repository_root`, so the root may itself contain `trunk`, `branches`
    /// or `tags` segments. A root that is not a prefix of `url` is ignored.
    pub fn parse_url_within(url: &str, repository_root: &str) -> Result<(Url, Self), LayoutError> {
        let parsed = Url::parse(url).map_err(|e| LayoutError::InvalidUrl {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let path = parsed.path().to_string();
        let offset = root_offset(&parsed, &path, repository_root);
        let unrecognized = || LayoutError::UnrecognizedLayout {
            url: url.to_string(),
        };

        let captures = layout_pattern()
            .captures(&path[offset..])
            .ok_or_else(unrecognized)?;
        let whole = captures.get(0).ok_or_else(unrecognized)?;

        let layout = match (captures.get(1), captures.get(2)) {
            (Some(kind), Some(name)) => {
                let name = percent_decode_str(name.as_str())
                    .decode_utf8_lossy()
                    .into_owned();
                if kind.as_str() == "tags" {
                    Self::Tag(name)
                } else {
                    Self::Branch(name)
                }
            }
            _ => Self::Trunk,
        };

        let mut base = parsed.clone();
        base.set_path(&path[..offset + whole.start()]);
        base.set_query(None);
        base.set_fragment(None);

        Ok((base, layout))
    }

    /// Last path segment: `trunk` or the branch/tag name
    pub fn name(&self) -> &str {
        match self {
            Self::Trunk => TRUNK,
            Self::Branch(name) | Self::Tag(name) => name,
        }
    }

    /// Path relative to the project base (`trunk`, `branches/x`, `tags/x`)
    pub fn relative_path(&self) -> String {
        match self {
            Self::Trunk => TRUNK.to_string(),
            Self::Branch(name) => format!("branches/{}", name),
            Self::Tag(name) => format!("tags/{}", name),
        }
    }

    /// Name shown to users.
    ///
    /// Branches drop their `branches/` prefix, trunk and tags keep their
    /// relative path.
    pub fn short_name(&self) -> String {
        match self {
            Self::Branch(name) => name.clone(),
            other => other.relative_path(),
        }
    }

    pub fn is_trunk(&self) -> bool {
        matches!(self, Self::Trunk)
    }

    /// The archived counterpart of a branch, `None` for trunk and tags
    pub fn archived(&self) -> Option<Self> {
        match self {
            Self::Branch(name) => Some(Self::Branch(format!("{}{}", name, ARCHIVE_SUFFIX))),
            _ => None,
        }
    }

    /// Resolves this location against a project base URL
    pub fn url_in(&self, base: &Url) -> Result<Url, LayoutError> {
        let mut url = base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| LayoutError::InvalidUrl {
                url: base.to_string(),
                message: "URL cannot be a base".to_string(),
            })?;
            segments.pop_if_empty();
            match self {
                Self::Trunk => {
                    segments.push(TRUNK);
                }
                Self::Branch(name) => {
                    segments.push("branches").push(name);
                }
                Self::Tag(name) => {
                    segments.push("tags").push(name);
                }
            }
        }
        Ok(url)
    }
}

impl fmt::Display for BranchPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.relative_path())
    }
}

/// Length of the repository root path inside `path`, 0 when `root` does not
/// prefix the URL
fn root_offset(parsed: &Url, path: &str, root: &str) -> usize {
    let root = match Url::parse(root) {
        Ok(root) => root,
        Err(_) => return 0,
    };
    if root.scheme() != parsed.scheme() || root.host_str() != parsed.host_str() {
        return 0;
    }

    let root_path = root.path().trim_end_matches('/');
    match path.strip_prefix(root_path) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => root_path.len(),
        _ => 0,
    }
}
