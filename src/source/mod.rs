pub(crate) mod covers;
