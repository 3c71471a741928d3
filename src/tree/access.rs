//! Read-only deep lookup

use super::path::join_for_display;
use super::value::{type_name, Leaf, Tree};
use crate::error::PathError;
use serde_json::Value;

/// Borrow the value stored at `path`.
///
/// Every segment but the last must resolve to a map. On failure the error
/// names the prefix up to and including the segment that could not be
/// resolved. The empty path never resolves: the root is not a leaf.
pub fn get_ref<'a, S: AsRef<str>>(tree: &'a Tree, path: &[S]) -> Result<&'a Value, PathError> {
    let Some((leaf, parents)) = path.split_last() else {
        return Err(PathError::bad_path(path));
    };

    let mut node = tree;
    for (n, segment) in parents.iter().enumerate() {
        node = node
            .get(segment.as_ref())
            .and_then(Value::as_object)
            .ok_or_else(|| PathError::bad_path(&path[..=n]))?;
    }

    node.get(leaf.as_ref())
        .ok_or_else(|| PathError::bad_path(path))
}

/// Fetch the value stored at `path` as a `T`.
///
/// ```rust
/// use jsondir::tree::{get, Tree};
/// use serde_json::json;
///
/// let tree: Tree = serde_json::from_value(json!({"foo": {"bar": "baz"}}))?;
/// assert_eq!(get::<String, _>(&tree, &["foo", "bar"])?, "baz");
/// assert!(get::<i64, _>(&tree, &["foo", "bar"]).is_err());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn get<T: Leaf, S: AsRef<str>>(tree: &Tree, path: &[S]) -> Result<T, PathError> {
    let value = get_ref(tree, path)?;
    T::from_value(value).ok_or_else(|| PathError::BadType {
        path: join_for_display(path),
        actual: type_name(value),
        expected: T::type_name(),
    })
}
