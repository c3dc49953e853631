//! Path parsing
//!
//! Paths are `/`-separated strings. Empty segments are ignored, so `//a//b/`
//! and `/a/b` parse identically. A leading `/` anchors at the root, anything
//! else is relative to the working directory.

/// One parsed path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// `.`
    Current,
    /// `..`
    Parent,
    Name(&'a str),
}

impl<'a> Segment<'a> {
    fn parse(raw: &'a str) -> Self {
        match raw {
            "." => Segment::Current,
            ".." => Segment::Parent,
            name => Segment::Name(name),
        }
    }
}

/// A borrowed, parsed path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VfsPath<'a> {
    raw: &'a str,
    absolute: bool,
    segments: Vec<Segment<'a>>,
}

impl<'a> VfsPath<'a> {
    pub fn parse(raw: &'a str) -> Self {
        Self {
            raw,
            absolute: raw.starts_with('/'),
            segments: raw
                .split('/')
                .filter(|s| !s.is_empty())
                .map(Segment::parse)
                .collect(),
        }
    }

    /// The path exactly as supplied
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// Split off the final segment: `(parent, name)`.
    ///
    /// `None` when the path has no segments (`""`, `/`). The name may be
    /// `.` or `..`; callers that create or remove entries must reject those.
    pub fn split_last(&self) -> Option<(VfsPath<'a>, Segment<'a>)> {
        let (last, rest) = self.segments.split_last()?;
        Some((
            VfsPath {
                raw: self.raw,
                absolute: self.absolute,
                segments: rest.to_vec(),
            },
            *last,
        ))
    }
}

/// Join a directory path and an entry name without doubling the separator.
pub fn join(dir: &str, name: &str) -> String {
    if dir.ends_with('/') {
        format!("{}{}", dir, name)
    } else {
        format!("{}/{}", dir, name)
    }
}

/// Parent of an absolute path string; `/` is its own parent.
pub fn parent_of(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rsplit_once('/') {
        Some(("", _)) | None => "/".to_string(),
        Some((parent, _)) => parent.to_string(),
    }
}
