//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod driver;
pub(crate) mod input;

pub(crate) use collisions::{detect_floor, detect_wall_probes, detect_walls};
pub(crate) use driver::{drive_state_machines, start_state_machines};
pub(crate) use input::{apply_jump_input, read_input};
