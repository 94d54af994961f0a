pub(crate) mod cpu;
pub(crate) mod fit;
pub(crate) mod surface;
