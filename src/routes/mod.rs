pub(crate) mod pledges;
