mod hash;
pub use hash::{digest, select, HashFn, HashKind};
#[cfg(feature = "md5")]
pub use hash::MD5;
#[cfg(feature = "sha1")]
pub use hash::Sha1;

mod hex;
pub use hex::{DecodeHex, EncodeHex};
