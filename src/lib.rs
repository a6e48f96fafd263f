//! Codec for vehicle-bus software-entity addresses.
//!
//! Every addressable thing on the bus is named by a triple: an
//! [`Authority`] (where it is deployed), an [`Entity`] (the software
//! component), and a [`Resource`] (the element of it being addressed). A
//! single [`Uri`] carries the triple and projects into three
//! interchangeable wire forms:
//!
//! | Form  | Shape                                    | Use |
//! |-------|------------------------------------------|-----|
//! | long  | `//vcu.vin/body.access/1/door.front_left#Door` | human-readable, name-based |
//! | short | `//192.0.2.1/7/1/3.front_left#Door`      | compact text, numeric ids |
//! | micro | 10 or 22 fixed-layout bytes              | constrained links |
//!
//! # Quick Start
//!
//! ```rust
//! use vbus_uri::{Authority, Entity, Resource, Uri, long_form};
//!
//! let uri = Uri::new(
//!     Authority::remote("vcu", "vin"),
//!     Entity::new("body.access", Some("1")),
//!     Resource::new("door", Some("front_left"), Some("Door")),
//! );
//! assert_eq!(long_form::build(&uri), "//vcu.vin/body.access/1/door.front_left#Door");
//!
//! let parsed = long_form::parse("//vcu.vin/body.access/1/door.front_left#Door");
//! assert_eq!(parsed, uri);
//! ```
//!
//! # Failure Policy
//!
//! There is no error channel. Builders given an unrepresentable URI return
//! an empty string or empty byte vector, and the long parser resolves
//! malformed text to the most specific partial [`Uri`] it can, down to the
//! empty one. Callers check for emptiness, not for errors. All four value
//! types are immutable and every operation is a pure function, so the whole
//! crate is freely shareable across threads.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod authority;
mod constants;
mod entity;
pub mod long_form;
pub mod micro_form;
pub mod prelude;
mod resource;
pub mod short_form;
mod uri;

pub use authority::Authority;
pub use constants::{MICRO_IPV6_FLAG, MICRO_VERSION, VERSION_MAJOR_SHIFT, VERSION_UNSPECIFIED};
pub use entity::Entity;
pub use resource::Resource;
pub use uri::Uri;
