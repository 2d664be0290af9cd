//! Integration with the `sha1` crate (UUID version 5).

use super::{Generator, NameHash};
use crate::Uuid;
use sha1::Sha1;

impl NameHash for Sha1 {
    const VERSION: u8 = 5;
}

/// A generator of version 5 (SHA-1 name-based) UUIDs.
pub type Sha1Generator = Generator<Sha1>;

impl Generator<Sha1> {
    /// Creates a version 5 generator for `namespace`.
    ///
    /// SHA-1 produces a 20-byte digest; the generated UUID takes its first 16 bytes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nsuuid::{Generator, NAMESPACE_DNS};
    ///
    /// let mut g = Generator::new_sha1(NAMESPACE_DNS);
    /// assert_eq!(g.generate_uuid("python.org").to_string(), "886313e1-3b8a-5372-9b90-0c9aee199e5d");
    /// ```
    pub fn new_sha1(namespace: Uuid) -> Self {
        Self::new(namespace)
    }
}
