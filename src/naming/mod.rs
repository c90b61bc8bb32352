pub(crate) mod label;
