//! Deep set and merge
//!
//! Mutation walks the tree creating empty maps for missing intermediate keys.
//! The leaf write is decided entirely before the tree is touched at the leaf;
//! there is no rollback of intermediates replaced under `FORCE_THROUGH`.

use super::policy::MergePolicy;
use super::value::{is_array_of, Leaf, Tree};
use crate::error::PathError;
use serde_json::{Map, Value};
use tracing::trace;

/// Write `value` at `path` according to `policy`.
///
/// At the final key, in order of precedence:
/// 1. `MERGE_MAPS`, existing and new value both maps: shallow union, new keys win.
/// 2. `APPEND_ARRAYS`, existing and new value both arrays of `T`: existing ++ new.
/// 3. Otherwise overwrite, even when a flag is set but its precondition fails.
///
/// A non-map intermediate fails with `BadPath` unless `FORCE_THROUGH` is set,
/// in which case it is replaced by an empty map. The empty path is a no-op.
pub fn set_with_policy<T: Leaf, S: AsRef<str>>(
    tree: &mut Tree,
    path: &[S],
    value: Value,
    policy: MergePolicy,
) -> Result<(), PathError> {
    let Some((leaf, parents)) = path.split_last() else {
        return Ok(());
    };

    let mut node = tree;
    for (n, segment) in parents.iter().enumerate() {
        let child = node
            .entry(segment.as_ref())
            .or_insert_with(|| Value::Object(Map::new()));

        if !child.is_object() {
            if !policy.contains(MergePolicy::FORCE_THROUGH) {
                return Err(PathError::bad_path(&path[..=n]));
            }
            trace!(
                prefix = %super::path::join_for_display(&path[..=n]),
                "replacing non-map intermediate value"
            );
            *child = Value::Object(Map::new());
        }

        node = child
            .as_object_mut()
            .ok_or_else(|| PathError::bad_path(&path[..=n]))?;
    }

    let key = leaf.as_ref();
    let existing = node.get(key);
    let merge = policy.contains(MergePolicy::MERGE_MAPS)
        && value.is_object()
        && existing.map_or(false, Value::is_object);
    let append = policy.contains(MergePolicy::APPEND_ARRAYS)
        && is_array_of::<T>(&value)
        && existing.map_or(false, is_array_of::<T>);

    match value {
        Value::Object(incoming) if merge => {
            trace!(key, keys = incoming.len(), "merging map into existing map");
            if let Some(Value::Object(current)) = node.get_mut(key) {
                current.extend(incoming);
            }
        }
        Value::Array(incoming) if append => {
            trace!(key, items = incoming.len(), "appending to existing array");
            if let Some(Value::Array(current)) = node.get_mut(key) {
                current.extend(incoming);
            }
        }
        value => {
            node.insert(key.to_string(), value);
        }
    }

    Ok(())
}

/// Write `value` at `path` with [`MergePolicy::DEFAULT`].
///
/// ```rust
/// use jsondir::tree::{set, Tree};
/// use serde_json::json;
///
/// let mut tree = Tree::new();
/// set(&mut tree, &["hello", "corporation"], "world")?;
/// assert_eq!(serde_json::Value::Object(tree), json!({"hello": {"corporation": "world"}}));
/// # Ok::<(), jsondir::error::PathError>(())
/// ```
pub fn set<S: AsRef<str>>(
    tree: &mut Tree,
    path: &[S],
    value: impl Into<Value>,
) -> Result<(), PathError> {
    set_with_policy::<Value, S>(tree, path, value.into(), MergePolicy::DEFAULT)
}
