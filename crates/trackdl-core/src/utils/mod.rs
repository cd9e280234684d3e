//! Pure helpers with no I/O.

pub mod filename;
pub mod size;
