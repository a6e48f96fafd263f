//! Wire constants shared by the micro form.

/// Version byte written at the start of every micro-form address.
pub const MICRO_VERSION: u8 = 0x1;

/// Flag bit set in the second micro-form byte when the authority address
/// is IPv6. IPv4 addresses leave the byte zero.
pub const MICRO_IPV6_FLAG: u8 = 0x80;

/// Sentinel written in the entity-version slot of the micro form when the
/// version is present but empty.
pub const VERSION_UNSPECIFIED: u16 = 0x7FFF;

/// Bit position of the major component in a packed two-part entity version.
pub const VERSION_MAJOR_SHIFT: u32 = 11;
