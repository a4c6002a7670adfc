pub(crate) mod pledge;
