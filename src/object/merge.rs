//! Shallow and deep merging of string-keyed containers.
//!
//! Every helper writes into a caller-owned destination without synchronization; concurrent merges
//! into the same destination must be serialized by the caller.

use serde_json::{Map, Value};

use crate::foundation::error::{ProtomixError, ProtomixResult};
use crate::object::mapping::{Mapping, Node};

/// Options for [`try_deep_merge`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MergeOpts {
    /// Maximum nesting depth the merge may recurse to. The top-level mapping is depth `1`.
    pub max_depth: usize,
}

impl MergeOpts {
    /// Default value of [`MergeOpts::max_depth`].
    pub const DEFAULT_MAX_DEPTH: usize = 128;

    /// Parse options from a JSON object. Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> ProtomixResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| ProtomixError::serde(format!("invalid merge options: {e}")))
    }
}

impl Default for MergeOpts {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Copy every entry of each source into `dst`, in order, and return `dst`.
///
/// Later sources overwrite earlier ones on key collisions. Values are cloned, so nested containers
/// behind shared handles (`Rc`, `Arc`) end up shared between `dst` and the source.
#[tracing::instrument(level = "trace", skip_all)]
pub fn merge<'d, 's, D, S, I>(dst: &'d mut D, sources: I) -> &'d mut D
where
    D: Mapping,
    D::Value: Clone,
    S: Mapping<Value = D::Value> + 's,
    I: IntoIterator<Item = &'s S>,
{
    let mut merged = 0usize;
    for src in sources {
        for (key, value) in src.entries() {
            dst.put(key, value.clone());
        }
        merged += 1;
    }
    tracing::trace!(sources = merged, keys = dst.entry_count(), "shallow merge done");
    dst
}

/// [`merge`] over JSON values. Sources that are not JSON objects are skipped.
pub fn merge_json<'d>(
    dst: &'d mut Map<String, Value>,
    sources: &[Value],
) -> &'d mut Map<String, Value> {
    let skipped = sources.iter().filter(|v| !v.is_object()).count();
    if skipped > 0 {
        tracing::trace!(skipped, "ignoring non-object merge sources");
    }
    merge(dst, sources.iter().filter_map(Value::as_object))
}

/// Recursively merge `src` into `dst`.
///
/// Where both sides hold a nested mapping under the same key the merge descends into it; any other
/// combination assigns a clone of the source value, replacing what was there. Recursion is not
/// bounded, so input nested deeper than the stack allows overflows it. Use [`try_deep_merge`] to
/// cap the depth.
#[tracing::instrument(level = "trace", skip_all)]
pub fn deep_merge<M>(dst: &mut M, src: &M)
where
    M: Mapping,
    M::Value: Node<Map = M>,
{
    deep_merge_into(dst, src);
}

fn deep_merge_into<M>(dst: &mut M, src: &M)
where
    M: Mapping,
    M::Value: Node<Map = M>,
{
    for (key, value) in src.entries() {
        if let Some(src_map) = value.as_map() {
            if let Some(dst_map) = dst.entry_mut(key).and_then(Node::as_map_mut) {
                deep_merge_into(dst_map, src_map);
                continue;
            }
        }
        dst.put(key, value.clone());
    }
}

/// [`deep_merge`] for JSON values. When both sides are objects they are merged; otherwise `dst` is
/// replaced by a clone of `src`.
pub fn deep_merge_json(dst: &mut Value, src: &Value) {
    match (dst.as_object_mut(), src.as_object()) {
        (Some(d), Some(s)) => deep_merge(d, s),
        _ => *dst = src.clone(),
    }
}

/// [`deep_merge`] with a recursion limit from `opts`.
///
/// Fails with [`ProtomixError::DepthExceeded`] instead of descending past `opts.max_depth`. Entries
/// visited before the failure stay merged, so `dst` may be left partially updated.
#[tracing::instrument(level = "trace", skip_all, fields(max_depth = opts.max_depth))]
pub fn try_deep_merge<M>(dst: &mut M, src: &M, opts: &MergeOpts) -> ProtomixResult<()>
where
    M: Mapping,
    M::Value: Node<Map = M>,
{
    let res = bounded_merge_into(dst, src, 1, opts.max_depth);
    if let Err(err) = &res {
        tracing::warn!(%err, "bounded deep merge aborted");
    }
    res
}

fn bounded_merge_into<M>(dst: &mut M, src: &M, depth: usize, limit: usize) -> ProtomixResult<()>
where
    M: Mapping,
    M::Value: Node<Map = M>,
{
    if depth > limit {
        return Err(ProtomixError::depth_exceeded(limit));
    }
    for (key, value) in src.entries() {
        if let Some(src_map) = value.as_map() {
            if let Some(dst_map) = dst.entry_mut(key).and_then(Node::as_map_mut) {
                bounded_merge_into(dst_map, src_map, depth + 1, limit)?;
                continue;
            }
        }
        dst.put(key, value.clone());
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/object/merge.rs"]
mod tests;
