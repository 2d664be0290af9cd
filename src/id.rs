#[cfg(not(feature = "std"))]
use core as std;

use alloc::vec::Vec;
use fstr::FStr;
use std::{fmt, str};

/// Represents a Universally Unique IDentifier.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

/// Returns `true` at the byte offsets of the four hyphens in the 8-4-4-4-12 representation.
const fn is_separator(pos: usize) -> bool {
    pos == 8 || pos == 13 || pos == 18 || pos == 23
}

const fn decode_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Creates an object from a 16-byte big-endian array.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Consumes the object and returns the underlying byte array.
    pub const fn into_bytes(self) -> [u8; 16] {
        self.0
    }

    pub(crate) fn bytes_mut(&mut self) -> &mut [u8; 16] {
        &mut self.0
    }

    /// Returns the 4-bit version field (the high nibble of byte 6).
    ///
    /// Name-based UUIDs carry `3` (MD5) or `5` (SHA-1). The value is read as is; an arbitrary
    /// parsed UUID may carry any number here.
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Returns `true` if the variant bits (the top two bits of byte 8) are set at `10`.
    pub const fn is_rfc4122(&self) -> bool {
        self.0[8] >> 6 == 0b10
    }

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    ///
    /// Accepts both lowercase and uppercase digits. Only the syntax is checked; the version and
    /// variant bits may hold any value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nsuuid::Uuid;
    ///
    /// let x = Uuid::try_parse("15588635-A45E-4867-AADB-DBF0385ADE95")?;
    /// assert_eq!(x.to_string(), "15588635-a45e-4867-aadb-dbf0385ade95");
    /// assert!(Uuid::try_parse("15588635a45e4867aadbdbf0385ade95").is_err());
    /// # Ok::<(), nsuuid::ParseError>(())
    /// ```
    pub const fn try_parse(src: &str) -> Result<Self, ParseError> {
        let src = src.as_bytes();
        if src.len() != 36 {
            return Err(ParseError::InvalidLength(src.len()));
        }

        let mut pos = 0;
        while pos < 36 {
            if is_separator(pos) && src[pos] != b'-' {
                return Err(ParseError::InvalidSeparator(pos));
            }
            pos += 1;
        }

        let mut dst = [0u8; 16];
        let (mut i, mut pos) = (0, 0);
        while i < 16 {
            if is_separator(pos) {
                pos += 1;
            }
            let Some(hi) = decode_digit(src[pos]) else {
                return Err(ParseError::InvalidDigit(pos));
            };
            let Some(lo) = decode_digit(src[pos + 1]) else {
                return Err(ParseError::InvalidDigit(pos + 1));
            };
            dst[i] = (hi << 4) | lo;
            i += 1;
            pos += 2;
        }
        Ok(Self(dst))
    }

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation, panicking if the
    /// string is invalid.
    ///
    /// This is meant for literals. In a `const` item an invalid string fails the build instead of
    /// panicking at run time. Use [`Uuid::try_parse`] or [`str::parse`] for untrusted input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nsuuid::Uuid;
    ///
    /// const NS: Uuid = Uuid::parse_or_panic("15588635-a45e-4867-aadb-dbf0385ade95");
    /// assert_eq!(NS.as_bytes()[0], 0x15);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the argument is not a valid 8-4-4-4-12 hexadecimal string.
    pub const fn parse_or_panic(src: &str) -> Self {
        match Self::try_parse(src) {
            Ok(uuid) => uuid,
            Err(ParseError::InvalidLength(_)) => {
                panic!("invalid UUID string: expected 36 characters")
            }
            Err(ParseError::InvalidSeparator(_)) => {
                panic!("invalid UUID string: misplaced separator")
            }
            Err(ParseError::InvalidDigit(_)) => {
                panic!("invalid UUID string: invalid hex digit")
            }
        }
    }

    const fn to_ascii(&self) -> [u8; 36] {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [b'-'; 36];
        let (mut i, mut pos) = (0, 0);
        while i < 16 {
            if is_separator(pos) {
                pos += 1;
            }
            let e = self.0[i] as usize;
            buffer[pos] = DIGITS[e >> 4];
            buffer[pos + 1] = DIGITS[e & 15];
            i += 1;
            pos += 2;
        }
        buffer
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// string type that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nsuuid::Uuid;
    ///
    /// let x = "4c816dc1-9418-502e-9b91-f17b83891bf8".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "4c816dc1-9418-502e-9b91-f17b83891bf8");
    /// assert_eq!(format!("{}", y), "4c816dc1-9418-502e-9b91-f17b83891bf8");
    /// # Ok::<(), nsuuid::ParseError>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        let buffer = self.to_ascii();
        debug_assert!(buffer.is_ascii());
        // SAFETY: `to_ascii` writes hex digits and hyphens only
        unsafe { FStr::from_inner_unchecked(buffer) }
    }

    /// Appends the 8-4-4-4-12 hexadecimal string representation to `buf` and returns the extended
    /// buffer.
    ///
    /// Writes the same 36 bytes as [`Uuid::encode`] and the [`Display`](fmt::Display) impl. Reusing
    /// one buffer avoids a string allocation per UUID when formatting many of them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nsuuid::Uuid;
    ///
    /// let mut buf = Vec::with_capacity(37 * 2);
    /// for text in ["15588635-a45e-4867-aadb-dbf0385ade95", "4c816dc1-9418-502e-9b91-f17b83891bf8"] {
    ///     buf = text.parse::<Uuid>()?.append_formatted(buf);
    ///     buf.push(b'\n');
    /// }
    /// assert_eq!(buf.len(), 37 * 2);
    /// # Ok::<(), nsuuid::ParseError>(())
    /// ```
    pub fn append_formatted(&self, mut buf: Vec<u8>) -> Vec<u8> {
        buf.extend_from_slice(&self.to_ascii());
        buf
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::try_parse(src).inspect_err(|err| {
            tracing::trace!(%err, len = src.len(), "rejected UUID string");
        })
    }
}

impl TryFrom<&str> for Uuid {
    type Error = ParseError;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        src.parse()
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

/// Error parsing an invalid string representation of UUID.
///
/// The variants tell where the input went wrong; any of them means the string is not a
/// 36-character hyphenated hexadecimal UUID.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum ParseError {
    /// The input is not 36 bytes long.
    #[error("invalid length: expected 36, got {0}")]
    InvalidLength(usize),

    /// A byte at offset 8, 13, 18, or 23 is not `-`.
    #[error("invalid separator at position {0}")]
    InvalidSeparator(usize),

    /// A byte outside the separator offsets is not a hexadecimal digit.
    #[error("invalid hex digit at position {0}")]
    InvalidDigit(usize),
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::{ParseError, Uuid};

    impl From<Uuid> for String {
        fn from(src: Uuid) -> Self {
            src.to_string()
        }
    }

    impl TryFrom<String> for Uuid {
        type Error = ParseError;

        fn try_from(src: String) -> Result<Self, Self::Error> {
            src.parse()
        }
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl de::Visitor<'_> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(|_| de::Error::invalid_length(value.len(), &"16 bytes"))
        }
    }

}
