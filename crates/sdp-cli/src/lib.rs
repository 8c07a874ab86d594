//! Library side of the `sdp` command: logging, configuration, batch runs,
//! and table rendering.

pub mod batch;
pub mod config;
pub mod logging;
pub mod summary;
