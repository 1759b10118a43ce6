use rustc_serialize::hex::{FromHex, ToHex};

pub trait EncodeHex {
    fn to_hex(self) -> String;
}
impl<T: AsRef<[u8]>> EncodeHex for T {
    fn to_hex(self) -> String {
        ToHex::to_hex(&self.as_ref())
    }
}

pub trait DecodeHex {
    /// Only ascii hex digits are accepted; an odd digit count is an error.
    fn try_from_hex(&self) -> Option<Vec<u8>>;
}
impl<T: AsRef<str> + ?Sized> DecodeHex for T {
    fn try_from_hex(&self) -> Option<Vec<u8>> {
        let s = self.as_ref();
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        FromHex::from_hex(s).ok()
    }
}
