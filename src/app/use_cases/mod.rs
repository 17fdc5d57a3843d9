//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod fill;
pub mod placement;
