// src/proxy/mod.rs
mod builder;
mod forward;
mod proxy;

pub use builder::ProxyBuilder;
pub use proxy::{ForeignCandidate, Proxy};
