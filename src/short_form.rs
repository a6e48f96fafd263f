//! Short text form: compact addresses using numeric ids and raw host
//! addresses.
//!
//! The short form keeps the long form's slash skeleton but substitutes the
//! pieces a constrained consumer resolves numerically: the authority is the
//! literal IP address, and the entity and resource render their ids instead
//! of their names. Instance and message suffixes stay textual. Projection is
//! best-effort; an absent id or address leaves its segment empty rather
//! than failing.

use crate::long_form::{authority_part, entity_part, resource_part};
use crate::uri::Uri;

/// Builds the short text form of a URI.
///
/// # Examples
///
/// ```
/// use std::net::{IpAddr, Ipv4Addr};
/// use vbus_uri::{Authority, Entity, Resource, Uri, short_form};
///
/// let uri = Uri::new(
///     Authority::remote_address(IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1))),
///     Entity::named("hartley").with_id(7),
///     Resource::named("door").with_id(3),
/// );
/// assert_eq!(short_form::build(&uri), "//192.0.2.1/7//3");
/// ```
#[must_use]
pub fn build(uri: &Uri) -> String {
    if uri.is_empty() {
        return String::new();
    }

    let mut out = authority_part(uri.authority(), true);
    if uri.authority().is_remote() {
        out.push('/');
    }

    if uri.entity().is_empty() {
        return out;
    }

    out.push_str(&entity_part(uri.entity(), true));
    out.push_str(&resource_part(uri.resource(), true));

    out.trim_end_matches('/').to_string()
}
