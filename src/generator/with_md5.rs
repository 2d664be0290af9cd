//! Integration with the `md-5` crate (UUID version 3).

use super::{Generator, NameHash};
use crate::Uuid;
use md5::Md5;

impl NameHash for Md5 {
    const VERSION: u8 = 3;
}

/// A generator of version 3 (MD5 name-based) UUIDs.
pub type Md5Generator = Generator<Md5>;

impl Generator<Md5> {
    /// Creates a version 3 generator for `namespace`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nsuuid::{Generator, NAMESPACE_DNS};
    ///
    /// let mut g = Generator::new_md5(NAMESPACE_DNS);
    /// assert_eq!(g.generate_uuid("python.org").to_string(), "6fa459ea-ee8a-3ca4-894e-db77e160355e");
    /// ```
    pub fn new_md5(namespace: Uuid) -> Self {
        Self::new(namespace)
    }
}
