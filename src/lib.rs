//! debrelay - redirect service for Debian packages published as GitHub
//! release assets.
//!
//! The server answers `GET {download_path}?package=<file>.deb&tag=<tag>`
//! with a 302 pointing at the matching release asset. A companion binary
//! (`gen_packages`) turns GitHub releases JSON into a Debian `Packages`
//! index for the same asset tree.

pub mod config;
pub mod handler;
pub mod http;
pub mod index;
pub mod logger;
pub mod server;
