use super::error::GuidResult;
use super::guid::Guid;
use std::collections::HashMap;

/// Predefined namespaces, RFC 4122 Appendix C.
pub struct SpaceId;

impl SpaceId {
    pub const DNS: Guid = Guid::from_fields(0x6ba7b810, 0x9dad, 0x11d1, [0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8]);
    pub const URL: Guid = Guid::from_fields(0x6ba7b811, 0x9dad, 0x11d1, [0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8]);
    pub const OID: Guid = Guid::from_fields(0x6ba7b812, 0x9dad, 0x11d1, [0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8]);
    pub const X500: Guid = Guid::from_fields(0x6ba7b814, 0x9dad, 0x11d1, [0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8]);

    /// `dns`, `url`, `oid`, `x500` or `x.500`, any case.
    pub fn lookup(label: &str) -> Option<Guid> {
        WELL_KNOWN.get(label.to_ascii_lowercase().as_str()).copied()
    }
}

pub const NAMESPACE_DNS: Guid = SpaceId::DNS;
pub const NAMESPACE_URL: Guid = SpaceId::URL;
pub const NAMESPACE_OID: Guid = SpaceId::OID;
pub const NAMESPACE_X500: Guid = SpaceId::X500;

lazy_static::lazy_static! {
    static ref WELL_KNOWN: HashMap<&'static str, Guid> = HashMap::from([
        ("dns", SpaceId::DNS),
        ("url", SpaceId::URL),
        ("oid", SpaceId::OID),
        ("x500", SpaceId::X500),
        ("x.500", SpaceId::X500),
    ]);
}

/// A well-known label, otherwise a uuid string. Anything else is a `ParseError`.
pub fn namespace_from_str(text: &str) -> GuidResult<Guid> {
    match SpaceId::lookup(text.trim()) {
        Some(ns) => Ok(ns),
        None => Guid::parse_str(text.trim()),
    }
}
