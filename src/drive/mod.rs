pub(crate) mod debounce;
pub(crate) mod region;
pub(crate) mod script;
pub(crate) mod session;
