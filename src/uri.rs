//! The URI triple: authority, entity, resource.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::authority::Authority;
use crate::entity::Entity;
use crate::long_form;
use crate::resource::Resource;

/// A complete bus address: where ([`Authority`]), what ([`Entity`]), and
/// which element of it ([`Resource`]).
///
/// A `Uri` is an immutable value; it is built once and projected into a
/// wire form by [`long_form::build`], [`short_form::build`](crate::short_form::build),
/// or [`micro_form::build`](crate::micro_form::build), or recovered from
/// text by [`long_form::parse`].
///
/// # Examples
///
/// ```
/// use vbus_uri::{Authority, Entity, Resource, Uri};
///
/// let uri = Uri::new(
///     Authority::remote("vcu", "vin"),
///     Entity::new("hartley", Some("1")),
///     Resource::for_rpc("Raise"),
/// );
/// assert_eq!(uri.to_string(), "//vcu.vin/hartley/1/rpc.Raise");
///
/// let parsed: Uri = "//vcu.vin/hartley/1/rpc.Raise".parse().unwrap();
/// assert_eq!(parsed, uri);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uri {
    authority: Authority,
    entity: Entity,
    resource: Resource,
}

impl Uri {
    /// Creates a URI from its three parts.
    #[must_use]
    pub const fn new(authority: Authority, entity: Entity, resource: Resource) -> Self {
        Self {
            authority,
            entity,
            resource,
        }
    }

    /// Creates the empty URI: local authority, empty entity, empty
    /// resource.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Authority::local(), Entity::empty(), Resource::empty())
    }

    /// Creates a URI for an RPC response flowing back to the given caller
    /// entity.
    #[must_use]
    pub fn rpc_response(authority: Authority, entity: Entity) -> Self {
        Self::new(authority, entity, Resource::response())
    }

    /// Returns the authority.
    #[must_use]
    pub const fn authority(&self) -> &Authority {
        &self.authority
    }

    /// Returns the entity.
    #[must_use]
    pub const fn entity(&self) -> &Entity {
        &self.entity
    }

    /// Returns the resource.
    #[must_use]
    pub const fn resource(&self) -> &Resource {
        &self.resource
    }

    /// Returns true if all three parts are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.authority.is_local() && self.entity.is_empty() && self.resource.is_empty()
    }

    /// Returns true if the authority is marked remote.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        self.authority.is_remote()
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", long_form::build(self))
    }
}

impl FromStr for Uri {
    type Err = Infallible;

    /// Parsing is total: malformed input degrades to a partial or empty
    /// URI rather than failing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(long_form::parse(s))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Uri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&long_form::build(self))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Uri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(long_form::parse(&s))
    }
}
