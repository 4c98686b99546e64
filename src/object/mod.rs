pub(crate) mod mapping;
pub(crate) mod merge;
pub(crate) mod proto;
