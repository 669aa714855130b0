//! Navigation targets and the internal/external classification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Where a link points: a raw path/URL or a structured location.
#[derive(Clone, Debug, PartialEq)]
pub enum NavigationTarget {
    /// Plain string such as `/dashboard` or `https://example.com`.
    Path(String),
    /// Structured location handled by the router.
    Descriptor(LocationDescriptor),
}

impl NavigationTarget {
    /// Returns the raw string when the target is a non-empty path.
    #[must_use]
    pub fn as_path(&self) -> Option<&str> {
        match self {
            Self::Path(path) if !path.is_empty() => Some(path.as_str()),
            Self::Path(_) | Self::Descriptor(_) => None,
        }
    }

    /// Href rendered on the anchor.
    #[must_use]
    pub fn href(&self) -> String {
        match self {
            Self::Path(path) => path.clone(),
            Self::Descriptor(location) => location.href(),
        }
    }

    /// History state carried by a descriptor, if any.
    #[must_use]
    pub const fn state(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Descriptor(location) => location.state.as_ref(),
            Self::Path(_) => None,
        }
    }
}

impl From<&str> for NavigationTarget {
    fn from(value: &str) -> Self {
        Self::Path(value.to_string())
    }
}

impl From<String> for NavigationTarget {
    fn from(value: String) -> Self {
        Self::Path(value)
    }
}

impl From<LocationDescriptor> for NavigationTarget {
    fn from(value: LocationDescriptor) -> Self {
        Self::Descriptor(value)
    }
}

/// Structured location: pathname plus optional search, hash and history state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDescriptor {
    /// Rooted path, e.g. `/torrents/42`.
    pub pathname: String,
    /// Query string with or without the leading `?`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Fragment with or without the leading `#`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    /// Opaque state pushed alongside the history entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<serde_json::Value>,
}

impl LocationDescriptor {
    /// Descriptor pointing at `pathname` with no query, hash or state.
    #[must_use]
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            ..Self::default()
        }
    }

    /// Sets the query string.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Sets the fragment.
    #[must_use]
    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    /// Attaches history state.
    #[must_use]
    pub fn with_state(mut self, state: serde_json::Value) -> Self {
        self.state = Some(state);
        self
    }

    /// Joins the parts into `pathname[?search][#hash]`.
    #[must_use]
    pub fn href(&self) -> String {
        let mut href = self.pathname.clone();
        push_part(&mut href, '?', self.search.as_deref());
        push_part(&mut href, '#', self.hash.as_deref());
        href
    }
}

fn push_part(href: &mut String, marker: char, part: Option<&str>) {
    let Some(part) = part else {
        return;
    };
    let part = part.strip_prefix(marker).unwrap_or(part);
    if part.is_empty() {
        return;
    }
    href.push(marker);
    href.push_str(part);
}

impl fmt::Display for LocationDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

/// Failures when parsing a string into a [`LocationDescriptor`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetError {
    /// Input was empty.
    #[error("empty navigation target")]
    Empty,
    /// Input did not start with `/`.
    #[error("navigation target is not a rooted path")]
    NotRooted {
        /// Offending input.
        value: String,
    },
}

impl FromStr for LocationDescriptor {
    type Err = TargetError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.is_empty() {
            return Err(TargetError::Empty);
        }
        if !value.starts_with('/') {
            return Err(TargetError::NotRooted {
                value: value.to_string(),
            });
        }
        let (rest, hash) = match value.split_once('#') {
            Some((rest, hash)) => (rest, Some(hash)),
            None => (value, None),
        };
        let (pathname, search) = match rest.split_once('?') {
            Some((pathname, search)) => (pathname, Some(search)),
            None => (rest, None),
        };
        Ok(Self {
            pathname: pathname.to_string(),
            search: search.filter(|s| !s.is_empty()).map(|s| format!("?{s}")),
            hash: hash.filter(|h| !h.is_empty()).map(|h| format!("#{h}")),
            state: None,
        })
    }
}

/// Which render path a target takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    /// Client-side route transition.
    Internal,
    /// Full browser navigation.
    External,
}

/// True for rooted, non-empty paths and for every descriptor.
#[must_use]
pub fn is_internal_url(target: Option<&NavigationTarget>) -> bool {
    match target {
        Some(NavigationTarget::Path(path)) => path.starts_with('/'),
        Some(NavigationTarget::Descriptor(_)) => true,
        None => false,
    }
}

/// Classifies a target into the render path it takes.
#[must_use]
pub fn classify(target: Option<&NavigationTarget>) -> LinkKind {
    if is_internal_url(target) {
        LinkKind::Internal
    } else {
        LinkKind::External
    }
}
