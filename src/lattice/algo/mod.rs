pub(crate) mod plans;
pub(crate) mod group;
