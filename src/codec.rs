//! Reading and writing single JSON documents

use crate::error::LoadError;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read and decode the JSON document stored at `path`.
///
/// Decoding failures carry a 1-based line and column counted from the number
/// of bytes consumed: the column just past the offending byte, `1:1` for an
/// empty file.
pub fn read_value(path: &Path) -> Result<Value, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_slice(&bytes).map_err(|source| {
        let (line, column) = decode_position(&source);
        LoadError::Decode {
            path: path.to_path_buf(),
            line,
            column,
            source,
        }
    })
}

/// serde_json points at the offending byte, with column 0 when nothing has
/// been consumed on the line yet; shift to the byte-count convention.
fn decode_position(err: &serde_json::Error) -> (usize, usize) {
    (err.line().max(1), err.column() + 1)
}

/// Encode `value`, compact or pretty-printed with one tab per level.
pub fn to_json_string<T: Serialize + ?Sized>(value: &T, indented: bool) -> Result<String, LoadError> {
    let bytes = encode(value, indented)?;
    String::from_utf8(bytes).map_err(|e| LoadError::Encode(serde::ser::Error::custom(e)))
}

/// Encode `value` and write it to `path`, creating the parent directory.
///
/// The document is written to a sibling temporary file first and renamed over
/// `path`, so readers see either the old or the new content.
pub fn write_value<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
    indented: bool,
) -> Result<(), LoadError> {
    let bytes = encode(value, indented)?;

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| LoadError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let temp_path = temp_path_for(path);
    fs::write(&temp_path, &bytes).map_err(|source| LoadError::Write {
        path: temp_path.clone(),
        source,
    })?;

    fs::rename(&temp_path, path).map_err(|source| {
        let _ = fs::remove_file(&temp_path);
        LoadError::Write {
            path: path.to_path_buf(),
            source,
        }
    })?;

    debug!(path = %path.display(), bytes = bytes.len(), "wrote JSON document");
    Ok(())
}

fn encode<T: Serialize + ?Sized>(value: &T, indented: bool) -> Result<Vec<u8>, LoadError> {
    if !indented {
        return serde_json::to_vec(value).map_err(LoadError::Encode);
    }

    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    value
        .serialize(&mut serializer)
        .map_err(LoadError::Encode)?;
    Ok(buf)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
