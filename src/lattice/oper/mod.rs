pub(crate) mod perm;
pub(crate) mod plan;
