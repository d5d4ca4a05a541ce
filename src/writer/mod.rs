//! Output writers. OpenSCAD is the only target.
pub mod scad;
