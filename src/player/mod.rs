pub(crate) mod sequence_player;
pub(crate) mod signal;
pub(crate) mod state;
