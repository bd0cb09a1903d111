// src/lib.rs
//! In-process load balancer.
//!
//! A [`Proxy`] owns an ordered list of candidate targets and a [`Strategy`].
//! Every call made through the proxy asks the strategy for one candidate and
//! forwards the call to it, returning the result (or error) untouched.
//!
//! ```no_run
//! use serde_json::json;
//! use tiny_lb::{Proxy, Service, strategy::Rollout};
//!
//! # fn main() -> anyhow::Result<()> {
//! let prod = Service::builder("ProdSvc")
//!     .operation("do_work", |call| Ok(json!(format!("prod svc handled: {}", call.args[0]))))
//!     .build();
//! let exp = Service::builder("ExpSvc")
//!     .operation("do_work", |call| Ok(json!(format!("exp svc handled: {}", call.args[0]))))
//!     .build();
//!
//! let lb = Proxy::new(vec![prod, exp], Rollout::new(10)?)?;
//! let out = lb.invoke("do_work", vec![json!("my task")])?;
//! # Ok(())
//! # }
//! ```
pub mod config;
pub mod metrics;
pub mod proxy;
pub mod strategy;
pub mod target;

pub use config::ConfigError;
pub use proxy::{ForeignCandidate, Proxy, ProxyBuilder};
pub use strategy::{SelectionError, Strategy};
pub use target::{
    Block, Invocation, NoBlockGiven, Service, ServiceBuilder, Target, UnsupportedOperation,
};
