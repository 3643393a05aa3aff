//! # refwalk
//!
//! Depth-first traversal of values whose shape is only known at runtime.
//!
//! This crate provides:
//! - Single-level iteration over sequences, maps, records and channels ([`Iterate`])
//! - Panic containment for iterators ([`RecoverIter`])
//! - A depth-first walker that reports every terminal value ([`Walker`], [`walk`])
//! - Visited pairs with their full lineage ([`Pair`])
//!
//! Types describe their shape through [`Reflect`], re-exported from
//! `refwalk_reflect`.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//!
//! use refwalk::{Key, impl_record, walk};
//!
//! struct Config {
//!     pub name: String,
//!     pub ports: Vec<u16>,
//!     pub labels: BTreeMap<String, String>,
//!     token: String,
//! }
//!
//! impl_record!(Config { pub name, pub ports, pub labels, token });
//!
//! let config = Config {
//!     name: "edge".into(),
//!     ports: vec![80, 443],
//!     labels: BTreeMap::from([("tier".into(), "web".into())]),
//!     token: "secret".into(),
//! };
//!
//! let mut seen = Vec::new();
//! walk(&config, |pair| {
//!     let mut path: Vec<String> = pair
//!         .ancestors()
//!         .filter_map(|ancestor| ancestor.key().map(Key::to_string))
//!         .collect();
//!     path.reverse();
//!     path.extend(pair.key().map(Key::to_string));
//!     seen.push(format!("{} = {}", path.join("."), pair.value()));
//!     Ok(())
//! })?;
//!
//! assert_eq!(seen, ["name = edge", "ports.0 = 80", "ports.1 = 443", "labels.tier = web"]);
//! # Ok::<(), refwalk::WalkError>(())
//! ```

mod config;
mod error;
mod iter;
mod pair;
mod recover;
mod walk;

pub use config::IterConfig;
pub use error::{Result, WalkError};
pub use iter::{Iter, Iterate, MapFn, RecordFn, SeqFn};
pub use pair::{Key, Pair};
pub use recover::{RecoverIter, recover};
pub use walk::{DfsWalker, Walker, default_walker, walk};

pub use refwalk_reflect::{
    Channel, Field, Kind, Map, Pointer, Record, Reflect, ReflectRef, Scalar, Sequence, Value,
    impl_record, indirect,
};
