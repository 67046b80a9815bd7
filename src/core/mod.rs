//! Core, platform independent code.

pub mod command;
pub mod config;
pub mod configure;
pub mod datalink;
pub mod link;
pub mod repr;
