//! # refwalk_reflect
//!
//! Runtime value inspection for refwalk.
//!
//! Rust has no runtime reflection, so every walkable type describes its own
//! shape through the [`Reflect`] trait. A value reports exactly one
//! [`ReflectRef`] variant, and the composite variants expose the
//! enumeration primitives a traversal needs.
//!
//! ## Architecture
//!
//! - [`Reflect`] classifies a value and names its type
//! - [`Sequence`], [`Map`], [`Record`], [`Channel`] and [`Pointer`] enumerate children
//! - [`Value`] is the handle passed between iterators and walkers
//! - [`indirect`] collapses pointer chains down to the referenced value
//! - [`impl_record!`] declares record types with member visibility
//!
//! ## Example
//!
//! ```rust
//! use refwalk_reflect::{Kind, Reflect, impl_record, indirect};
//!
//! struct Point {
//!     pub x: i32,
//!     pub y: i32,
//! }
//!
//! impl_record!(Point { pub x, pub y });
//!
//! let point = Box::new(Some(Point { x: 1, y: 2 }));
//! assert_eq!(point.reflect().kind(), Kind::Pointer);
//! assert_eq!(indirect(&point).reflect().kind(), Kind::Record);
//! ```

mod field;
mod impls;
mod indirect;
mod kind;
mod record;
mod reflect;
mod summary;
mod type_name;
mod value;

pub use field::Field;
pub use indirect::indirect;
pub use kind::Kind;
pub use reflect::{Channel, Map, Pointer, Record, Reflect, ReflectRef, Scalar, Sequence};
pub use summary::{NIL, Summary, summarize};
pub use type_name::short_type_name;
pub use value::Value;
