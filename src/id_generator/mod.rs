mod error;
pub use error::{GuidError, GuidResult, ParseErrorKind};

mod guid;
pub use guid::{Guid, Variant, Version};

mod namespace;
pub use namespace::{
    namespace_from_str, SpaceId, NAMESPACE_DNS, NAMESPACE_OID, NAMESPACE_URL, NAMESPACE_X500,
};

mod named;
pub use named::{
    build, build_default, build_parsed, build_raw, build_str, build_utf16, v3, v5, variant, version,
};

#[cfg(feature = "uid")]
pub mod uuid_interop;
