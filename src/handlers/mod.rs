pub(crate) mod pledges;
pub(crate) mod reviews;
pub(crate) mod updates;
