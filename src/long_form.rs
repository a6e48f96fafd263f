//! Long text form: human-readable, name-based addresses.
//!
//! # Grammar
//!
//! ```text
//! ("/" | "//" device ["." domain] "/")
//!     [entity-name ["/" version]]
//!     ["/" resource-name ["." instance] ["#" message]]
//! ```
//!
//! Trailing slashes are stripped from complete addresses. When the entity
//! has no version but a resource follows, the version slot stays as an
//! empty segment (`/hartley//door`), which keeps every segment at a fixed
//! position for the parser.

use crate::authority::Authority;
use crate::entity::Entity;
use crate::resource::Resource;
use crate::uri::Uri;

/// Builds the long text form of a URI.
///
/// The empty URI produces an empty string. A URI whose entity is empty
/// produces the authority part alone.
///
/// # Examples
///
/// ```
/// use vbus_uri::{Authority, Entity, Resource, Uri, long_form};
///
/// let uri = Uri::new(
///     Authority::remote("vcu", "vin"),
///     Entity::new("hartley", Some("1")),
///     Resource::new("door", Some("front_left"), Some("Door")),
/// );
/// assert_eq!(long_form::build(&uri), "//vcu.vin/hartley/1/door.front_left#Door");
/// assert_eq!(long_form::build(&Uri::empty()), "");
/// ```
#[must_use]
pub fn build(uri: &Uri) -> String {
    if uri.is_empty() {
        return String::new();
    }

    let mut out = authority_part(uri.authority(), false);
    if uri.authority().is_remote() {
        out.push('/');
    }

    if uri.entity().is_empty() {
        return out;
    }

    out.push_str(&entity_part(uri.entity(), false));
    out.push_str(&resource_part(uri.resource(), false));

    out.trim_end_matches('/').to_string()
}

/// Builds the long form address of an RPC method on a service.
///
/// # Examples
///
/// ```
/// use vbus_uri::{Authority, Entity, long_form};
///
/// let uri = long_form::build_method(
///     &Authority::local(),
///     &Entity::new("body.access", Some("1")),
///     "UpdateDoor",
/// );
/// assert_eq!(uri, "/body.access/1/rpc.UpdateDoor");
/// ```
#[must_use]
pub fn build_method(authority: &Authority, entity: &Entity, method: &str) -> String {
    let mut out = authority_part(authority, false);
    if authority.is_remote() {
        out.push('/');
    }
    out.push_str(&entity_part(entity, false));
    out.push_str(&resource_part(&Resource::for_rpc(method), false));
    out
}

/// Builds the long form address RPC responses are delivered to for the
/// given caller entity.
///
/// # Examples
///
/// ```
/// use vbus_uri::{Authority, Entity, long_form};
///
/// let uri = long_form::build_rpc_response(
///     &Authority::remote("vcu", "vin"),
///     &Entity::new("hartley", Some("1")),
/// );
/// assert_eq!(uri, "//vcu.vin/hartley/1/rpc.response");
/// ```
#[must_use]
pub fn build_rpc_response(authority: &Authority, entity: &Entity) -> String {
    let mut out = authority_part(authority, false);
    if authority.is_remote() {
        out.push('/');
    }
    out.push_str(&entity_part(entity, false));
    out.push('/');
    out.push_str(&Resource::response().name_with_instance());
    out
}

/// Parses the long text form back into a [`Uri`].
///
/// Parsing is total and best-effort: malformed input yields the most
/// specific partial URI the positional grammar allows, down to the empty
/// URI. No field syntax is validated, so a non-numeric version segment is
/// kept as-is.
///
/// # Examples
///
/// ```
/// use vbus_uri::long_form;
///
/// let uri = long_form::parse("//vcu.vin/hartley/1/rpc.Raise");
/// assert_eq!(uri.authority().device(), Some("vcu"));
/// assert_eq!(uri.authority().domain(), Some("vin"));
/// assert_eq!(uri.entity().name(), "hartley");
/// assert_eq!(uri.entity().version(), Some("1"));
/// assert_eq!(uri.resource().name(), "rpc");
/// assert_eq!(uri.resource().instance(), Some("Raise"));
///
/// assert!(long_form::parse("/").is_empty());
/// ```
#[must_use]
pub fn parse(input: &str) -> Uri {
    if input.trim().is_empty() {
        return Uri::empty();
    }

    // Everything up to and including a scheme separator is irrelevant to
    // the positional grammar.
    let rest = match input.find(':') {
        Some(idx) => &input[idx + 1..],
        None => input,
    };
    let rest = rest.replace('\\', "/");

    let is_local = !rest.starts_with("//");

    let parts = split_dropping_trailing_empties(&rest, '/');
    if parts.len() <= 1 {
        return if is_local {
            Uri::empty()
        } else {
            Uri::new(Authority::remote("", ""), Entity::empty(), Resource::empty())
        };
    }

    if is_local {
        let (entity, resource) = parse_entity_and_resource(&parts, 1);
        Uri::new(Authority::local(), entity, resource)
    } else {
        let authority_token = parts.get(2).copied().unwrap_or_default();
        let (device, domain) = authority_token.split_once('.').unwrap_or((authority_token, ""));
        let authority = Authority::remote(device, domain);

        if parts.len() <= 3 {
            return Uri::new(authority, Entity::empty(), Resource::empty());
        }
        let (entity, resource) = parse_entity_and_resource(&parts, 3);
        Uri::new(authority, entity, resource)
    }
}

/// Reads entity name, version, and resource starting at the given segment
/// index. Absent segments leave the corresponding field at its default.
fn parse_entity_and_resource(parts: &[&str], first: usize) -> (Entity, Resource) {
    let name = parts.get(first).copied().unwrap_or_default();
    let version = parts.get(first + 1).copied();
    let resource = match parts.get(first + 2) {
        Some(token) => parse_resource(token),
        None => Resource::empty(),
    };
    (Entity::new(name, version), resource)
}

/// Splits a resource token: `name ["." instance] ["#" message]`.
fn parse_resource(token: &str) -> Resource {
    let hash_parts = split_dropping_trailing_empties(token, '#');
    let message = hash_parts.get(1).copied();

    let name_and_instance = hash_parts.first().copied().unwrap_or_default();
    let dot_parts = split_dropping_trailing_empties(name_and_instance, '.');
    let name = dot_parts.first().copied().unwrap_or_default();
    let instance = dot_parts.get(1).copied();

    Resource::new(name, instance, message)
}

/// Split that discards trailing empty segments, so `"/a/"` has the same
/// segment count as `"/a"` and `"///"` has none at all.
fn split_dropping_trailing_empties(input: &str, separator: char) -> Vec<&str> {
    let mut parts: Vec<&str> = input.split(separator).collect();
    while parts.last().is_some_and(|part| part.is_empty()) {
        parts.pop();
    }
    parts
}

pub(crate) fn authority_part(authority: &Authority, short: bool) -> String {
    if authority.is_local() {
        return "/".to_string();
    }

    let mut out = String::from("//");
    if short {
        if let Some(address) = authority.address() {
            out.push_str(&address.to_string());
        }
        return out;
    }

    if let Some(device) = authority.device() {
        out.push_str(device);
        if authority.domain().is_some() {
            out.push('.');
        }
    }
    if let Some(domain) = authority.domain() {
        out.push_str(domain);
    }
    out
}

pub(crate) fn entity_part(entity: &Entity, short: bool) -> String {
    let mut out = String::new();
    if short {
        if let Some(id) = entity.id() {
            out.push_str(&id.to_string());
        }
    } else {
        out.push_str(entity.name().trim());
    }
    out.push('/');
    if let Some(version) = entity.version() {
        out.push_str(version);
    }
    out
}

pub(crate) fn resource_part(resource: &Resource, short: bool) -> String {
    if resource.is_empty() {
        return String::new();
    }

    let mut out = String::from("/");
    if short {
        if let Some(id) = resource.id() {
            out.push_str(&id.to_string());
        }
    } else {
        out.push_str(resource.name());
    }
    if let Some(instance) = resource.instance() {
        out.push('.');
        out.push_str(instance);
    }
    if let Some(message) = resource.message() {
        out.push('#');
        out.push_str(message);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_empty_uri_is_empty_string() {
        assert_eq!(build(&Uri::empty()), "");
    }

    #[test]
    fn build_local_entity_without_version() {
        let uri = Uri::new(
            Authority::local(),
            Entity::named("hartley"),
            Resource::empty(),
        );
        assert_eq!(build(&uri), "/hartley");
    }

    #[test]
    fn build_local_entity_with_version() {
        let uri = Uri::new(
            Authority::local(),
            Entity::new("hartley", Some("1")),
            Resource::empty(),
        );
        assert_eq!(build(&uri), "/hartley/1");
    }

    #[test]
    fn build_keeps_empty_version_slot_before_resource() {
        let uri = Uri::new(
            Authority::local(),
            Entity::named("hartley"),
            Resource::named("door"),
        );
        assert_eq!(build(&uri), "/hartley//door");
    }

    #[test]
    fn build_full_remote_uri() {
        let uri = Uri::new(
            Authority::remote("vcu", "vin"),
            Entity::new("hartley", Some("1")),
            Resource::new("door", Some("front_left"), Some("Door")),
        );
        assert_eq!(build(&uri), "//vcu.vin/hartley/1/door.front_left#Door");
    }

    #[test]
    fn build_remote_authority_only() {
        let uri = Uri::new(
            Authority::remote("vcu", "vin"),
            Entity::empty(),
            Resource::empty(),
        );
        assert_eq!(build(&uri), "//vcu.vin/");
    }

    #[test]
    fn build_remote_unknown_location_authority_only() {
        let uri = Uri::new(
            Authority::remote("", ""),
            Entity::empty(),
            Resource::empty(),
        );
        assert_eq!(build(&uri), "///");
    }

    #[test]
    fn build_local_empty_entity_is_root() {
        let uri = Uri::new(Authority::local(), Entity::empty(), Resource::named("door"));
        assert_eq!(build(&uri), "/");
    }

    #[test]
    fn build_trims_entity_name() {
        let uri = Uri::new(
            Authority::local(),
            Entity::named("  hartley  "),
            Resource::empty(),
        );
        assert_eq!(build(&uri), "/hartley");
    }

    #[test]
    fn build_never_ends_in_slash_with_entity() {
        let uri = Uri::new(
            Authority::remote("vcu", "vin"),
            Entity::new("hartley", Some("1")),
            Resource::empty(),
        );
        assert_eq!(build(&uri), "//vcu.vin/hartley/1");
    }

    #[test]
    fn build_method_local() {
        let uri = build_method(
            &Authority::local(),
            &Entity::new("body.access", Some("1")),
            "UpdateDoor",
        );
        assert_eq!(uri, "/body.access/1/rpc.UpdateDoor");
    }

    #[test]
    fn build_method_without_version_keeps_slot() {
        let uri = build_method(&Authority::local(), &Entity::named("body.access"), "UpdateDoor");
        assert_eq!(uri, "/body.access//rpc.UpdateDoor");
    }

    #[test]
    fn build_rpc_response_remote() {
        let uri = build_rpc_response(
            &Authority::remote("vcu", "vin"),
            &Entity::new("hartley", Some("1")),
        );
        assert_eq!(uri, "//vcu.vin/hartley/1/rpc.response");
    }

    #[test]
    fn parse_blank_is_empty() {
        assert!(parse("").is_empty());
        assert!(parse("   ").is_empty());
    }

    #[test]
    fn parse_root_is_empty() {
        assert!(parse("/").is_empty());
    }

    #[test]
    fn parse_slashes_only_is_unlocated_remote() {
        // All segments are empty, but the leading "//" still marks it remote.
        let uri = parse("///");
        assert!(uri.is_remote());
        assert!(uri.authority().device().is_none());
        assert!(uri.entity().is_empty());
    }

    #[test]
    fn parse_double_slash_is_unlocated_remote() {
        let uri = parse("//");
        assert!(uri.is_remote());
        assert!(uri.authority().device().is_none());
        assert!(uri.entity().is_empty());
        assert!(uri.resource().is_empty());
    }

    #[test]
    fn parse_local_entity() {
        let uri = parse("/hartley");
        assert!(uri.authority().is_local());
        assert_eq!(uri.entity().name(), "hartley");
        assert!(uri.entity().version().is_none());
        assert!(uri.resource().is_empty());
    }

    #[test]
    fn parse_local_entity_with_version_and_resource() {
        let uri = parse("/body.access/1/door.front_left#Door");
        assert_eq!(uri.entity().name(), "body.access");
        assert_eq!(uri.entity().version(), Some("1"));
        assert_eq!(uri.resource().name(), "door");
        assert_eq!(uri.resource().instance(), Some("front_left"));
        assert_eq!(uri.resource().message(), Some("Door"));
    }

    #[test]
    fn parse_remote_method_uri() {
        let uri = parse("//vcu.vin/hartley/1/rpc.Raise");
        assert_eq!(uri.authority().device(), Some("vcu"));
        assert_eq!(uri.authority().domain(), Some("vin"));
        assert_eq!(uri.entity().name(), "hartley");
        assert_eq!(uri.entity().version(), Some("1"));
        // Without a '#' the dot suffix is an instance, not a message.
        assert_eq!(uri.resource().name(), "rpc");
        assert_eq!(uri.resource().instance(), Some("Raise"));
        assert!(uri.resource().message().is_none());
    }

    #[test]
    fn parse_remote_authority_only() {
        let uri = parse("//vcu.vin");
        assert_eq!(uri.authority().device(), Some("vcu"));
        assert_eq!(uri.authority().domain(), Some("vin"));
        assert!(uri.entity().is_empty());
    }

    #[test]
    fn parse_remote_multi_label_domain() {
        let uri = parse("//vcu.vin.veh.example/hartley");
        assert_eq!(uri.authority().device(), Some("vcu"));
        assert_eq!(uri.authority().domain(), Some("vin.veh.example"));
        assert_eq!(uri.entity().name(), "hartley");
    }

    #[test]
    fn parse_remote_device_without_domain() {
        let uri = parse("//vcu/hartley/1");
        assert_eq!(uri.authority().device(), Some("vcu"));
        assert!(uri.authority().domain().is_none());
    }

    #[test]
    fn parse_discards_scheme() {
        let uri = parse("up:/hartley/1");
        assert!(uri.authority().is_local());
        assert_eq!(uri.entity().name(), "hartley");
        assert_eq!(uri.entity().version(), Some("1"));
    }

    #[test]
    fn parse_normalizes_backslashes() {
        let uri = parse("up:\\\\vcu.vin\\hartley");
        assert!(uri.is_remote());
        assert_eq!(uri.authority().device(), Some("vcu"));
        assert_eq!(uri.entity().name(), "hartley");
    }

    #[test]
    fn parse_empty_version_slot() {
        let uri = parse("/hartley//door");
        assert_eq!(uri.entity().name(), "hartley");
        assert_eq!(uri.entity().version(), Some(""));
        assert_eq!(uri.resource().name(), "door");
    }

    #[test]
    fn parse_accepts_non_numeric_version() {
        let uri = parse("/hartley/latest");
        assert_eq!(uri.entity().version(), Some("latest"));
    }

    #[test]
    fn parse_resource_token_edges() {
        // Trailing '#' carries no message.
        let uri = parse("/e/1/door#");
        assert!(uri.resource().message().is_none());

        // A second '#' makes the message the empty segment between them.
        let uri = parse("/e/1/door##Door");
        assert_eq!(uri.resource().message(), Some(""));

        // Leading '.' leaves the name empty.
        let uri = parse("/e/1/.front_left");
        assert_eq!(uri.resource().name(), "");
        assert_eq!(uri.resource().instance(), Some("front_left"));
    }

    #[test]
    fn parse_round_trips_built_uri() {
        let uri = Uri::new(
            Authority::local(),
            Entity::new("body.access", Some("1")),
            Resource::new("door", Some("front_left"), Some("Door")),
        );
        assert_eq!(parse(&build(&uri)), uri);
    }
}
