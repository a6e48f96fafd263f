//! Micro binary form: fixed-layout addresses for constrained links.
//!
//! # Layout
//!
//! | offset | field           | width   | value                      |
//! |--------|-----------------|---------|----------------------------|
//! | 0      | codec version   | 1 byte  | `0x1`                      |
//! | 1      | IP version flag | 1 byte  | `0x80` if IPv6, else `0`   |
//! | 2      | resource id     | 1 byte  | low byte                   |
//! | 3..    | address         | 4 or 16 | raw octets                 |
//! | next   | entity id       | 1 byte  | low byte                   |
//! | next   | entity version  | 2 bytes | packed, big-endian         |
//!
//! The total length is 10 bytes for IPv4 authorities and 22 for IPv6. A
//! URI that cannot be fully represented (empty, or missing the address, an
//! id, or the version) produces an empty vector, never an error or a
//! partial write.

use std::net::IpAddr;

use crate::constants::{MICRO_IPV6_FLAG, MICRO_VERSION, VERSION_MAJOR_SHIFT, VERSION_UNSPECIFIED};
use crate::uri::Uri;

/// Builds the micro binary form of a URI.
///
/// # Examples
///
/// ```
/// use std::net::{IpAddr, Ipv4Addr};
/// use vbus_uri::{Authority, Entity, Resource, Uri, micro_form};
///
/// let uri = Uri::new(
///     Authority::remote_address(IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1))),
///     Entity::new("hartley", Some("1")).with_id(7),
///     Resource::named("door").with_id(3),
/// );
/// assert_eq!(
///     micro_form::build(&uri),
///     vec![0x1, 0x0, 3, 192, 0, 2, 1, 7, 0x0, 1],
/// );
///
/// // Anything unrepresentable degrades to an empty vector.
/// assert!(micro_form::build(&Uri::empty()).is_empty());
/// ```
#[must_use]
pub fn build(uri: &Uri) -> Vec<u8> {
    if uri.is_empty() {
        return Vec::new();
    }

    let Some(address) = uri.authority().address() else {
        return Vec::new();
    };
    let Some(entity_id) = uri.entity().id() else {
        return Vec::new();
    };
    let Some(resource_id) = uri.resource().id() else {
        return Vec::new();
    };
    let Some(version) = uri.entity().version() else {
        return Vec::new();
    };
    let Some(version_bytes) = pack_version(version) else {
        return Vec::new();
    };

    let octets: Vec<u8> = match address {
        IpAddr::V4(v4) => v4.octets().to_vec(),
        IpAddr::V6(v6) => v6.octets().to_vec(),
    };

    let mut out = Vec::with_capacity(6 + octets.len());
    out.push(MICRO_VERSION);
    out.push(if address.is_ipv6() { MICRO_IPV6_FLAG } else { 0 });
    out.push(resource_id.to_le_bytes()[0]);
    out.extend_from_slice(&octets);
    out.push(entity_id.to_le_bytes()[0]);
    out.extend_from_slice(&version_bytes);
    out
}

/// Packs a dotted numeric version into its two wire bytes, big-endian.
///
/// An empty version writes the [`VERSION_UNSPECIFIED`] sentinel. One
/// component writes a zero byte followed by the component's low byte. Two
/// or more components write `(major << 11) & minor`, components past the
/// second ignored. A component that is not numeric is unrepresentable and
/// yields `None`.
fn pack_version(version: &str) -> Option<[u8; 2]> {
    if version.is_empty() {
        return Some(VERSION_UNSPECIFIED.to_be_bytes());
    }

    let components: Vec<&str> = version.split('.').collect();
    let major: i32 = components.first()?.parse().ok()?;

    if components.len() > 1 {
        let minor: i32 = components[1].parse().ok()?;
        // Deployed decoders expect the two components combined with a
        // bitwise AND. Almost every major/minor pair packs to zero, but
        // changing the operator would break existing captures.
        let packed = (major << VERSION_MAJOR_SHIFT) & minor;
        Some([packed.to_le_bytes()[1], packed.to_le_bytes()[0]])
    } else {
        Some([0, major.to_le_bytes()[0]])
    }
}
