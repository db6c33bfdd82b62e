// Main library entry point for callsketch.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;
