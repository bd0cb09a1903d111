mod service;
mod target;

pub use service::{Service, ServiceBuilder};
pub use target::{Block, Invocation, NoBlockGiven, Target, UnsupportedOperation};
