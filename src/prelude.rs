//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use vbus_uri::prelude::*;
//!
//! let uri = long_form::parse("//vcu.vin/body.access/1/door.front_left");
//! assert_eq!(uri.entity().name(), "body.access");
//! ```

pub use crate::{
    // Value types
    Authority, Entity, Resource, Uri,
    // Wire forms
    long_form, micro_form, short_form,
    // Wire constants
    MICRO_IPV6_FLAG, MICRO_VERSION, VERSION_MAJOR_SHIFT, VERSION_UNSPECIFIED,
};
