//! The 128-bit identifier value.
//!
//! Bytes are always kept in RFC 4122 field order, every multi-byte field
//! big-endian: time_low(4) time_mid(2) time_hi_and_version(2)
//! clock_seq_hi_and_reserved(1) clock_seq_low(1) node(6).
//! https://datatracker.ietf.org/doc/html/rfc4122#section-4.1.2

use super::error::{GuidError, GuidResult, ParseErrorKind};
use crate::common::{DecodeHex, EncodeHex};
use std::fmt::{Display, Formatter, LowerHex, UpperHex};
use std::str::FromStr;

/// Version nibble, byte 6 high bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Version {
    Mac = 1,
    Dce = 2,
    Md5 = 3,
    Random = 4,
    Sha1 = 5,
}

/// Layout family, byte 8 high bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// 0xx, NCS backward compatibility
    Ncs,
    /// 10x
    Rfc4122,
    /// 110, Microsoft backward compatibility
    Microsoft,
    /// 111, reserved
    Future,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Guid([u8; 16]);

const GROUPS: [(usize, usize); 5] = [(0, 8), (9, 13), (14, 18), (19, 23), (24, 36)];
const URN_PREFIX: &str = "urn:uuid:";

impl Guid {
    pub const fn nil() -> Self {
        Guid([0; 16])
    }

    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Guid(bytes)
    }

    /// Fails with `InvalidNamespace` unless `bytes` is exactly 16 long.
    pub fn from_slice(bytes: &[u8]) -> GuidResult<Self> {
        let arr: [u8; 16] = bytes
            .try_into()
            .map_err(|_| GuidError::invalid_namespace(bytes.len()))?;
        Ok(Guid(arr))
    }

    pub const fn from_fields(d1: u32, d2: u16, d3: u16, d4: [u8; 8]) -> Self {
        let a = d1.to_be_bytes();
        let b = d2.to_be_bytes();
        let c = d3.to_be_bytes();
        Guid([
            a[0], a[1], a[2], a[3], b[0], b[1], c[0], c[1], d4[0], d4[1], d4[2], d4[3], d4[4],
            d4[5], d4[6], d4[7],
        ])
    }

    pub fn as_fields(&self) -> (u32, u16, u16, [u8; 8]) {
        let b = &self.0;
        let mut d4 = [0u8; 8];
        d4.copy_from_slice(&b[8..]);
        (
            u32::from_be_bytes([b[0], b[1], b[2], b[3]]),
            u16::from_be_bytes([b[4], b[5]]),
            u16::from_be_bytes([b[6], b[7]]),
            d4,
        )
    }

    pub const fn from_u128(v: u128) -> Self {
        Guid(v.to_be_bytes())
    }

    pub const fn as_u128(&self) -> u128 {
        u128::from_be_bytes(self.0)
    }

    /// The 16-byte wire layout. This is what gets hashed when the value is used as a namespace.
    pub const fn to_bytes(&self) -> [u8; 16] {
        self.0
    }

    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    pub fn is_nil(&self) -> bool {
        self.0 == [0; 16]
    }

    /// Raw version nibble. No check is made that the rest of the value fits that version.
    pub const fn version(&self) -> u8 {
        (self.0[6] >> 4) & 0x0F
    }

    pub fn version_kind(&self) -> Option<Version> {
        match self.version() {
            1 => Some(Version::Mac),
            2 => Some(Version::Dce),
            3 => Some(Version::Md5),
            4 => Some(Version::Random),
            5 => Some(Version::Sha1),
            _ => None,
        }
    }

    pub fn variant(&self) -> Variant {
        match self.0[8] {
            x if x & 0x80 == 0x00 => Variant::Ncs,
            x if x & 0xC0 == 0x80 => Variant::Rfc4122,
            x if x & 0xE0 == 0xC0 => Variant::Microsoft,
            _ => Variant::Future,
        }
    }

    pub(crate) fn set_version(&mut self, version: u8) {
        self.0[6] = (self.0[6] & 0x0F) | (version << 4);
    }

    pub(crate) fn set_rfc4122_variant(&mut self) {
        self.0[8] = (self.0[8] & 0x3F) | 0x80;
    }

    /// 32 lower-case hex digits, no hyphens.
    pub fn simple(&self) -> String {
        self.0.to_hex()
    }

    pub fn hyphenated(&self) -> String {
        let hex = self.simple();
        format!(
            "{}-{}-{}-{}-{}",
            &hex[0..8],
            &hex[8..12],
            &hex[12..16],
            &hex[16..20],
            &hex[20..32]
        )
    }

    pub fn braced(&self) -> String {
        format!("{{{}}}", self.hyphenated())
    }

    pub fn urn(&self) -> String {
        format!("{URN_PREFIX}{}", self.hyphenated())
    }

    /// Accepts the hyphenated form in either case, and also the simple,
    /// braced and urn forms.
    pub fn parse_str(input: &str) -> GuidResult<Self> {
        let (body, offset) = match input.len() {
            32 => return Self::parse_simple(input, 0),
            36 => (input, 0),
            38 if input.starts_with('{') && input.ends_with('}') => (&input[1..37], 1),
            45 if input.is_char_boundary(9)
                && input[..9].eq_ignore_ascii_case(URN_PREFIX) =>
            {
                (&input[9..], 9)
            }
            38 | 45 => return Err(GuidError::parse(ParseErrorKind::InvalidGroups)),
            n => return Err(GuidError::parse(ParseErrorKind::InvalidLength(n))),
        };
        Self::parse_hyphenated(body, offset)
    }

    fn parse_hyphenated(body: &str, offset: usize) -> GuidResult<Self> {
        let raw = body.as_bytes();
        for &(_, end) in &GROUPS[..4] {
            if raw[end] != b'-' {
                return Err(GuidError::parse(ParseErrorKind::InvalidGroups));
            }
        }
        let mut digits = String::with_capacity(32);
        for &(start, end) in &GROUPS {
            if let Some(i) = raw[start..end].iter().position(|b| !b.is_ascii_hexdigit()) {
                return Err(bad_char(body, start + i, offset));
            }
            digits.push_str(&body[start..end]);
        }
        Self::parse_simple(&digits, offset)
    }

    fn parse_simple(digits: &str, offset: usize) -> GuidResult<Self> {
        if let Some(i) = digits.bytes().position(|b| !b.is_ascii_hexdigit()) {
            return Err(bad_char(digits, i, offset));
        }
        let bytes = digits
            .try_from_hex()
            .ok_or_else(|| GuidError::parse(ParseErrorKind::InvalidLength(digits.len())))?;
        Guid::from_slice(&bytes)
            .map_err(|_| GuidError::parse(ParseErrorKind::InvalidLength(digits.len())))
    }
}

fn bad_char(s: &str, byte_index: usize, offset: usize) -> GuidError {
    let c = s[byte_index..].chars().next().unwrap_or('\u{FFFD}');
    GuidError::parse(ParseErrorKind::InvalidCharacter(c, byte_index + offset))
}

impl Display for Guid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.hyphenated())
    }
}

impl LowerHex for Guid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.hyphenated())
    }
}

impl UpperHex for Guid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.hyphenated().to_ascii_uppercase())
    }
}

impl FromStr for Guid {
    type Err = GuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Guid::parse_str(s)
    }
}

impl From<[u8; 16]> for Guid {
    fn from(bytes: [u8; 16]) -> Self {
        Guid(bytes)
    }
}

impl From<Guid> for [u8; 16] {
    fn from(g: Guid) -> Self {
        g.0
    }
}

impl AsRef<[u8]> for Guid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
