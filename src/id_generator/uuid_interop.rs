use super::guid::Guid;

impl From<uuid::Uuid> for Guid {
    fn from(u: uuid::Uuid) -> Self {
        Guid::from_bytes(u.into_bytes())
    }
}

impl From<Guid> for uuid::Uuid {
    fn from(g: Guid) -> Self {
        uuid::Uuid::from_bytes(g.to_bytes())
    }
}

impl Guid {
    /// Random uuid from the system provider. Only here so foreign values can be inspected.
    pub fn new_v4() -> Guid {
        v4_raw().into()
    }
}

pub fn v4_raw() -> uuid::Uuid {
    uuid::Uuid::new_v4()
}

pub fn v4() -> String {
    v4_raw().to_string()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::id_generator::guid::Variant;
    use crate::id_generator::named::{v3, v5};
    use crate::id_generator::namespace::SpaceId;

    #[test]
    fn test_v4_passes_through() {
        let g = Guid::new_v4();
        assert_eq!(4, g.version(), "random uuid must report version 4");
        assert_eq!(Variant::Rfc4122, g.variant());
        assert_eq!(4, Guid::parse_str(&v4()).unwrap().version());
    }

    #[test]
    fn test_agrees_with_uuid_crate() {
        let names = ["", "example.com", "bob@builder.com", "lorem ipsum"];
        for name in names {
            let expected = uuid::Uuid::new_v5(&uuid::Uuid::NAMESPACE_DNS, name.as_bytes());
            assert_eq!(Guid::from(expected), v5(&SpaceId::DNS, name), "v5 {name:?}");
            let expected = uuid::Uuid::new_v3(&uuid::Uuid::NAMESPACE_URL, name.as_bytes());
            assert_eq!(Guid::from(expected), v3(&SpaceId::URL, name), "v3 {name:?}");
        }
    }

    #[test]
    fn test_namespaces_match_uuid_crate() {
        assert_eq!(uuid::Uuid::NAMESPACE_DNS, uuid::Uuid::from(SpaceId::DNS));
        assert_eq!(uuid::Uuid::NAMESPACE_URL, uuid::Uuid::from(SpaceId::URL));
        assert_eq!(uuid::Uuid::NAMESPACE_OID, uuid::Uuid::from(SpaceId::OID));
        assert_eq!(uuid::Uuid::NAMESPACE_X500, uuid::Uuid::from(SpaceId::X500));
    }

    #[test]
    fn test_text_matches_uuid_crate() {
        let u = uuid::Uuid::new_v4();
        let g = Guid::from(u);
        assert_eq!(u.hyphenated().to_string(), g.to_string());
        assert_eq!(u.simple().to_string(), g.simple());
        assert_eq!(u.urn().to_string(), g.urn());
        assert_eq!(u.braced().to_string(), g.braced());
    }
}
