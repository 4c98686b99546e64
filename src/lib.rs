//! protomix is a small set of stateless helpers in two families.
//!
//! - **Object helpers**: prototype-style single inheritance ([`link`]), shallow multi-source
//!   merging ([`merge`]) and recursive merging ([`deep_merge`]) over any string-keyed [`Mapping`].
//! - **Scalar helpers**: [`clamp`], [`lerp`], [`map`], [`step`], [`pulse`], [`smoothstep`] and
//!   [`linstep`], generic over [`num_traits::Float`].
//!
//! The scalar helpers never fail: degenerate inputs yield NaN or infinities per IEEE-754. The
//! merge helpers write into a caller-owned destination and never fail either. Errors only surface
//! from method dispatch on [`Object`], from [`try_deep_merge`] and from option parsing.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod numeric;
mod object;

pub use foundation::error::{ProtomixError, ProtomixResult};
pub use numeric::interp::{clamp, lerp, linstep, map, pulse, smoothstep, step};
pub use numeric::ramp::Ramp;
pub use object::mapping::{Mapping, Node};
pub use object::merge::{
    MergeOpts, deep_merge, deep_merge_json, merge, merge_json, try_deep_merge,
};
pub use object::proto::{Class, Initializer, Member, Method, Object, Prototype, link};

/// Alias of [`link`].
pub use object::proto::link as inherit;
/// Alias of [`merge`].
pub use object::merge::merge as extend;
/// Alias of [`deep_merge`].
pub use object::merge::deep_merge as deep;
