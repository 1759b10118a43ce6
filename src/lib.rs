//! Name-based uuid generation (RFC 4122 versions 3 and 5).
//!
//! ```
//! use named_guid::{build, Guid, HashKind, SpaceId};
//!
//! let id = build(&SpaceId::DNS, "example.com", HashKind::Sha1);
//! assert_eq!("cfbff0d1-9375-5685-968c-48ce8b15ae17", id.to_string());
//! assert_eq!(5, id.version());
//!
//! let ns: Guid = "AA0F4712-691F-4C72-B5EC-19730324EAFD".parse().unwrap();
//! assert_eq!(
//!     "dbead1ff-3f86-5d73-b577-cb00ee3fccaf",
//!     named_guid::build_default(&ns, "bob@builder.com").to_string()
//! );
//! ```

mod common;
mod id_generator;

#[allow(unused_imports)]
pub use common::*;

#[allow(unused_imports)]
pub use id_generator::*;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_dns_example() {
        let id = build(&SpaceId::DNS, "example.com", HashKind::default());
        assert_eq!(
            "cfbff0d1-9375-5685-968c-48ce8b15ae17",
            id.to_string(),
            "test_dns_example failed"
        );
        assert_eq!(5, version(&id), "test_dns_example version failed");
    }

    #[test]
    fn test_custom_space() -> anyhow::Result<()> {
        let custom: Guid = "AA0F4712-691F-4C72-B5EC-19730324EAFD".parse()?;
        let id = build_default(&custom, "bob@builder.com");
        assert_eq!(
            "dbead1ff-3f86-5d73-b577-cb00ee3fccaf",
            id.to_string(),
            "test_custom_space failed"
        );
        assert_eq!(5, version(&id), "test_custom_space version failed");
        Ok(())
    }

    #[test]
    fn test_md5_kind() -> anyhow::Result<()> {
        let kind: HashKind = "md5".parse()?;
        let id = build(&SpaceId::DNS, "example.com", kind);
        assert_eq!(3, version(&id), "test_md5_kind version failed");
        assert_eq!(Variant::Rfc4122, variant(&id), "test_md5_kind variant failed");
        Ok(())
    }

    #[test]
    #[cfg(feature = "uid")]
    fn test_random_version() {
        let id = Guid::new_v4();
        println!("uuid v4 --> {}", id);
        assert_eq!(4, version(&id), "test_random_version failed");
    }

    #[test]
    fn test_binary_round_trip() {
        let id = build(&SpaceId::URL, "https://example.com/", HashKind::Md5);
        let bytes: [u8; 16] = id.into();
        assert_eq!(id, Guid::from_slice(&bytes).unwrap(), "test_binary_round_trip failed");
    }

    #[test]
    fn test_errors_are_distinct() {
        let errs = [
            "crc32".parse::<HashKind>().unwrap_err(),
            Guid::from_slice(&[1, 2, 3]).unwrap_err(),
            build_utf16(&SpaceId::DNS, &[0xDC00], HashKind::Sha1).unwrap_err(),
            Guid::parse_str("nope").unwrap_err(),
        ];
        assert!(matches!(errs[0], GuidError::UnsupportedAlgorithm(_)));
        assert!(matches!(errs[1], GuidError::InvalidNamespace(3)));
        assert!(matches!(errs[2], GuidError::EncodingError(_)));
        assert!(matches!(errs[3], GuidError::ParseError(ParseErrorKind::InvalidLength(4))));
    }
}
