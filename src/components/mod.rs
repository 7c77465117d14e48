//! UI components mounted by the application shell.

pub mod particle_field;
