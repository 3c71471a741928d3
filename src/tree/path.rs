//! Key paths and file-location to key-path conversion
//!
//! A key path is an ordered list of segments, one per map hop from the tree
//! root. Paths derived from the filesystem are cleaned lexically (no
//! filesystem access) and their segments normalized to Unicode NFC, so that a
//! file name stored decomposed on disk addresses the same key as its composed
//! spelling.

use crate::error::PathError;
use std::fmt;
use std::path::{is_separator, Component, Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

/// Suffix recognized on JSON fragments unless configured otherwise.
pub const DEFAULT_EXTENSION: &str = ".json";

/// Split a relative filesystem path into key segments.
///
/// `.` components vanish; `..` is kept verbatim as a segment. Each segment is
/// normalized to NFC, so an ingested key can differ byte-for-byte from a
/// decomposed file name on disk; look it up by its composed spelling.
pub fn split(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(normalize_segment(&name.to_string_lossy())),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect()
}

/// Remove a trailing `ext` from `name`, or return it unchanged.
pub fn strip_extension<'a>(name: &'a str, ext: &str) -> &'a str {
    if ext.is_empty() {
        return name;
    }
    name.strip_suffix(ext).unwrap_or(name)
}

/// [`strip_extension`] over a filesystem path.
pub fn strip_path_extension(path: &Path, ext: &str) -> PathBuf {
    let lossy = path.to_string_lossy();
    PathBuf::from(strip_extension(&lossy, ext))
}

/// Lexically clean a path: drop `.` components and trailing separators and
/// fold `name/..` pairs. An empty result is `.`.
pub fn clean(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// Location of `file` relative to `base`, both cleaned first.
///
/// Returns `None` when `file` does not live under `base`.
pub fn relative_to(file: &Path, base: &Path) -> Option<PathBuf> {
    let base = clean(base);
    let file = clean(file);

    if base == Path::new(".") {
        if file.is_absolute() || file.starts_with("..") {
            return None;
        }
        return Some(file);
    }

    file.strip_prefix(&base).ok().map(Path::to_path_buf)
}

/// True when `candidate_file`, minus its extension, names the same location
/// as `base_dir`: the file holding the top level of the tree.
pub fn is_root_marker(base_dir: &Path, candidate_file: &Path, ext: &str) -> bool {
    clean(base_dir) == clean(&strip_path_extension(candidate_file, ext))
}

/// Dotted rendering of key segments, used in error messages.
pub fn join_for_display<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(".")
}

fn normalize_segment(segment: &str) -> String {
    segment.nfc().collect()
}

/// Reject a segment that could not have come from a single file name.
pub fn validate_segment(segment: &str, ext: &str) -> Result<(), PathError> {
    if segment.chars().any(is_separator) {
        return Err(PathError::InvalidSegment {
            segment: segment.to_string(),
            reason: "segments cannot contain a path separator".to_string(),
        });
    }
    if !ext.is_empty() && segment.contains(ext) {
        return Err(PathError::InvalidSegment {
            segment: segment.to_string(),
            reason: format!("segments cannot contain the '{}' extension", ext),
        });
    }
    Ok(())
}

/// An owned, validated key path.
///
/// ```rust
/// use jsondir::tree::path::KeyPath;
///
/// let path = KeyPath::parse_dotted("server.tls.port")?;
/// assert_eq!(path.segments(), ["server", "tls", "port"]);
/// assert_eq!(path.to_string(), "server.tls.port");
/// # Ok::<(), jsondir::error::PathError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// The empty path, naming the tree root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a path from segments, validated against [`DEFAULT_EXTENSION`].
    pub fn new<I, S>(segments: I) -> Result<Self, PathError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_extension(segments, DEFAULT_EXTENSION)
    }

    /// Build a path from segments, validated against a custom extension.
    pub fn with_extension<I, S>(segments: I, ext: &str) -> Result<Self, PathError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        for segment in &segments {
            validate_segment(segment, ext)?;
        }
        Ok(Self { segments })
    }

    /// Parse a dotted path such as `a.b.c`. The empty string is the root.
    pub fn parse_dotted(input: &str) -> Result<Self, PathError> {
        Self::parse_dotted_with_extension(input, DEFAULT_EXTENSION)
    }

    /// [`KeyPath::parse_dotted`], validated against a custom extension.
    pub fn parse_dotted_with_extension(input: &str, ext: &str) -> Result<Self, PathError> {
        if input.is_empty() {
            return Ok(Self::root());
        }
        Self::with_extension(input.split('.'), ext)
    }

    /// Append one segment, validated against [`DEFAULT_EXTENSION`].
    pub fn push(&mut self, segment: impl Into<String>) -> Result<(), PathError> {
        let segment = segment.into();
        validate_segment(&segment, DEFAULT_EXTENSION)?;
        self.segments.push(segment);
        Ok(())
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", join_for_display(&self.segments))
    }
}

impl AsRef<[String]> for KeyPath {
    fn as_ref(&self) -> &[String] {
        &self.segments
    }
}
