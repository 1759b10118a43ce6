use crate::GuidError;
use crypto::digest::Digest;
use crypto::md5::Md5;
use crypto::sha1::Sha1 as ShaOne;
use std::fmt::{Display, Formatter};
use std::iter::repeat;
use std::str::FromStr;

/// Hashes the given parts back to back, no separator, and returns the full digest.
pub type HashFn = fn(&[&[u8]]) -> Vec<u8>;

/// Hash algorithm behind a name-based uuid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HashKind {
    /// version 3
    Md5,
    /// version 5
    #[default]
    Sha1,
}

impl HashKind {
    /// Version nibble written into byte 6 of the result.
    pub const fn version(self) -> u8 {
        match self {
            HashKind::Md5 => 3,
            HashKind::Sha1 => 5,
        }
    }

    pub const fn digest_len(self) -> usize {
        match self {
            HashKind::Md5 => 16,
            HashKind::Sha1 => 20,
        }
    }

    pub fn from_version(version: u8) -> Result<Self, GuidError> {
        match version {
            3 => Ok(HashKind::Md5),
            5 => Ok(HashKind::Sha1),
            v => Err(GuidError::unsupported_algorithm(format!("version {v}"))),
        }
    }

    fn hash_fn(self) -> HashFn {
        match self {
            HashKind::Md5 => md5_parts,
            HashKind::Sha1 => sha1_parts,
        }
    }
}

impl Display for HashKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            HashKind::Md5 => write!(f, "MD5"),
            HashKind::Sha1 => write!(f, "SHA-1"),
        }
    }
}

impl FromStr for HashKind {
    type Err = GuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "md5" | "v3" => Ok(HashKind::Md5),
            "sha1" | "sha-1" | "v5" => Ok(HashKind::Sha1),
            _ => Err(GuidError::unsupported_algorithm(s)),
        }
    }
}

impl TryFrom<u8> for HashKind {
    type Error = GuidError;

    fn try_from(version: u8) -> Result<Self, Self::Error> {
        HashKind::from_version(version)
    }
}

/// Returns the hash function for `kind` together with the uuid version it produces.
pub fn select(kind: HashKind) -> (HashFn, u8) {
    (kind.hash_fn(), kind.version())
}

pub fn digest(kind: HashKind, parts: &[&[u8]]) -> Vec<u8> {
    let (hash, _) = select(kind);
    hash(parts)
}

fn run<D: Digest>(mut d: D, parts: &[&[u8]]) -> Vec<u8> {
    for p in parts {
        d.input(p);
    }
    let mut out: Vec<u8> = repeat(0).take((d.output_bits() + 7) / 8).collect();
    d.result(out.as_mut_slice());
    out
}

fn md5_parts(parts: &[&[u8]]) -> Vec<u8> {
    run(Md5::new(), parts)
}

fn sha1_parts(parts: &[&[u8]]) -> Vec<u8> {
    run(ShaOne::new(), parts)
}

#[allow(dead_code)]
pub trait MD5 {
    fn md5(self) -> Vec<u8>;
}

impl<T: AsRef<[u8]>> MD5 for T {
    fn md5(self) -> Vec<u8> {
        md5_parts(&[self.as_ref()])
    }
}

#[allow(dead_code)]
pub trait Sha1 {
    fn sha1(self) -> Vec<u8>;
}

impl<T: AsRef<[u8]>> Sha1 for T {
    fn sha1(self) -> Vec<u8> {
        sha1_parts(&[self.as_ref()])
    }
}
