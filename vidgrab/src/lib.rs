//! vidgrab: command-line front-end over [`vidgrab_dl`].

pub mod cli;
pub mod config;
pub mod get;
pub mod info;
pub mod stats;
