//! Command line interface

pub mod cidr;
pub mod cluster;
pub mod commands;
pub mod display;

pub use commands::CliArgs;
