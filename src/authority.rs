//! Authority type: where on the bus a software entity is deployed.

use std::net::IpAddr;

/// The deployment location of a software entity.
///
/// An authority is either the local node or a remote node. A remote node may
/// be known by a device name (optionally qualified by a domain), by a raw IP
/// address, by both, or by nothing at all. An explicitly remote authority
/// with an unknown location is still remote, which is what distinguishes it
/// from [`Authority::Local`].
///
/// # Examples
///
/// ```
/// use vbus_uri::Authority;
///
/// let local = Authority::local();
/// assert!(local.is_local());
///
/// let remote = Authority::remote("vcu", "vin");
/// assert!(remote.is_remote());
/// assert_eq!(remote.device(), Some("vcu"));
/// assert_eq!(remote.domain(), Some("vin"));
///
/// // Explicitly remote, location unknown.
/// let unknown = Authority::remote("", "");
/// assert!(unknown.is_remote());
/// assert!(unknown.device().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Authority {
    /// This node.
    Local,
    /// A node elsewhere on the bus.
    Remote {
        /// Device name, e.g. `"vcu"`.
        device: Option<String>,
        /// Domain the device belongs to, e.g. `"vin"`.
        domain: Option<String>,
        /// Raw IP address, used by the short and micro forms.
        address: Option<IpAddr>,
    },
}

impl Authority {
    /// Creates the local authority.
    #[must_use]
    pub const fn local() -> Self {
        Self::Local
    }

    /// Creates a remote authority from a device and domain name.
    ///
    /// Empty strings are recorded as absent, so `remote("", "")` yields a
    /// remote authority with an unknown location.
    #[must_use]
    pub fn remote(device: &str, domain: &str) -> Self {
        Self::Remote {
            device: non_empty(device),
            domain: non_empty(domain),
            address: None,
        }
    }

    /// Creates a remote authority known only by its IP address.
    #[must_use]
    pub const fn remote_address(address: IpAddr) -> Self {
        Self::Remote {
            device: None,
            domain: None,
            address: Some(address),
        }
    }

    /// Creates a remote authority with both a name and an IP address, as
    /// obtained from a discovery handshake.
    #[must_use]
    pub fn remote_with_address(device: &str, domain: &str, address: IpAddr) -> Self {
        Self::Remote {
            device: non_empty(device),
            domain: non_empty(domain),
            address: Some(address),
        }
    }

    /// Returns true if this authority is the local node.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(self, Self::Local)
    }

    /// Returns true if this authority is marked remote, regardless of
    /// whether its location is known.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }

    /// Returns the device name, if known.
    #[must_use]
    pub fn device(&self) -> Option<&str> {
        match self {
            Self::Local => None,
            Self::Remote { device, .. } => device.as_deref(),
        }
    }

    /// Returns the domain name, if known.
    #[must_use]
    pub fn domain(&self) -> Option<&str> {
        match self {
            Self::Local => None,
            Self::Remote { domain, .. } => domain.as_deref(),
        }
    }

    /// Returns the IP address, if known.
    #[must_use]
    pub const fn address(&self) -> Option<IpAddr> {
        match self {
            Self::Local => None,
            Self::Remote { address, .. } => *address,
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
