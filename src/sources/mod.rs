// src/sources/mod.rs
//! Adapters around the external recon tools.

mod subfinder;
mod waybackurls;

pub use subfinder::SubfinderSource;
pub use waybackurls::WaybackSource;
