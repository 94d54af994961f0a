pub(crate) mod frame_set;
pub(crate) mod mapping;
pub(crate) mod naming;
pub(crate) mod range;
