pub(crate) mod pledge_store;
