//! Predefined namespaces and entry point functions

use crate::{generator::Generator, Uuid};

/// Name string is a fully-qualified domain name.
pub const NAMESPACE_DNS: Uuid = Uuid::parse_or_panic("6ba7b810-9dad-11d1-80b4-00c04fd430c8");

/// Name string is a URL.
pub const NAMESPACE_URL: Uuid = Uuid::parse_or_panic("6ba7b811-9dad-11d1-80b4-00c04fd430c8");

/// Name string is an ISO OID.
pub const NAMESPACE_OID: Uuid = Uuid::parse_or_panic("6ba7b812-9dad-11d1-80b4-00c04fd430c8");

/// Name string is an X.500 DN (in DER or a text output format).
pub const NAMESPACE_X500: Uuid = Uuid::parse_or_panic("6ba7b814-9dad-11d1-80b4-00c04fd430c8");

/// Generates a UUIDv3 object from a namespace and a name.
///
/// This function creates a new generator on each call. Create a [`Generator`] once with
/// [`Generator::new_md5`] and reuse it when generating many UUIDs in the same namespace.
///
/// # Examples
///
/// ```rust
/// use nsuuid::{uuid3, NAMESPACE_DNS};
///
/// let uuid = uuid3(&NAMESPACE_DNS, "python.org");
/// assert_eq!(uuid.to_string(), "6fa459ea-ee8a-3ca4-894e-db77e160355e");
/// ```
pub fn uuid3(namespace: &Uuid, name: impl AsRef<[u8]>) -> Uuid {
    Generator::new_md5(*namespace).generate_uuid(name)
}

/// Generates a UUIDv5 object from a namespace and a name.
///
/// This function creates a new generator on each call. Create a [`Generator`] once with
/// [`Generator::new_sha1`] and reuse it when generating many UUIDs in the same namespace.
///
/// # Examples
///
/// ```rust
/// use nsuuid::{uuid5, NAMESPACE_DNS};
///
/// let uuid = uuid5(&NAMESPACE_DNS, "python.org");
/// assert_eq!(uuid.to_string(), "886313e1-3b8a-5372-9b90-0c9aee199e5d");
/// ```
pub fn uuid5(namespace: &Uuid, name: impl AsRef<[u8]>) -> Uuid {
    Generator::new_sha1(*namespace).generate_uuid(name)
}
