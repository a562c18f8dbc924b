//! CLI command implementations.

pub(crate) mod calculate;
pub(crate) mod domains;
pub(crate) mod explain;
pub(crate) mod periods;
