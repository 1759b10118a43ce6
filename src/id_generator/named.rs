//! Name-based uuids, RFC 4122 section 4.3.
//!
//! The hash input is the 16 namespace bytes followed directly by the name
//! bytes. Text names are always hashed as UTF-8.

use super::error::{GuidError, GuidResult};
use super::guid::{Guid, Variant};
use super::namespace::namespace_from_str;
use crate::common::{select, HashKind};

/// Derives the uuid for `name` inside `namespace`.
///
/// The same inputs always give the same output. An empty name is allowed,
/// the namespace bytes alone are hashed then.
pub fn build(namespace: &Guid, name: impl AsRef<[u8]>, kind: HashKind) -> Guid {
    let name = name.as_ref();
    let (hash, version) = select(kind);
    let ns = namespace.to_bytes();
    let digest = hash(&[&ns[..], name]);

    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    let mut guid = Guid::from_bytes(bytes);
    guid.set_version(version);
    guid.set_rfc4122_variant();

    tracing::trace!(target: "named_guid", %namespace, name_len = name.len(), %kind, %guid, "built name-based uuid");
    guid
}

/// SHA-1, version 5.
pub fn build_default(namespace: &Guid, name: impl AsRef<[u8]>) -> Guid {
    build(namespace, name, HashKind::default())
}

pub fn build_str(namespace: &Guid, name: &str, kind: HashKind) -> Guid {
    build(namespace, name.as_bytes(), kind)
}

/// The name is transcoded from UTF-16 to UTF-8 before hashing.
pub fn build_utf16(namespace: &Guid, name: &[u16], kind: HashKind) -> GuidResult<Guid> {
    let name = String::from_utf16(name).map_err(GuidError::encoding)?;
    Ok(build(namespace, name.as_bytes(), kind))
}

/// Namespace given as raw bytes, which must be exactly 16 in wire order.
pub fn build_raw(namespace: &[u8], name: impl AsRef<[u8]>, kind: HashKind) -> GuidResult<Guid> {
    let ns = Guid::from_slice(namespace)?;
    Ok(build(&ns, name, kind))
}

/// Namespace given as text: a well-known label (`dns`, `url`, ...) or a uuid string.
pub fn build_parsed(namespace: &str, name: impl AsRef<[u8]>, kind: HashKind) -> GuidResult<Guid> {
    let ns = namespace_from_str(namespace)?;
    Ok(build(&ns, name, kind))
}

pub fn v3(namespace: &Guid, name: impl AsRef<[u8]>) -> Guid {
    build(namespace, name, HashKind::Md5)
}

pub fn v5(namespace: &Guid, name: impl AsRef<[u8]>) -> Guid {
    build(namespace, name, HashKind::Sha1)
}

pub fn version(uuid: &Guid) -> u8 {
    uuid.version()
}

pub fn variant(uuid: &Guid) -> Variant {
    uuid.variant()
}

impl Guid {
    pub fn new_v3(namespace: &Guid, name: impl AsRef<[u8]>) -> Guid {
        v3(namespace, name)
    }

    pub fn new_v5(namespace: &Guid, name: impl AsRef<[u8]>) -> Guid {
        v5(namespace, name)
    }
}
