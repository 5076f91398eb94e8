pub(crate) mod lattice;
