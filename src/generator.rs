//! Name-based UUID generator and related types.

use crate::Uuid;
use digest::{Digest, FixedOutputReset, Output};

pub mod with_md5;
pub mod with_sha1;

#[cfg(feature = "std")]
#[cfg(test)]
mod tests;

/// A trait that binds a hash function to the UUID version number it produces.
///
/// Implemented for [`md5::Md5`] (version 3) and [`sha1::Sha1`] (version 5).
pub trait NameHash: Digest + FixedOutputReset {
    /// The 4-bit version number written into the generated UUIDs.
    const VERSION: u8;
}

/// Represents a name-based UUID generator that hashes a fixed namespace followed by an arbitrary
/// name.
///
/// The generator keeps the hash state and a digest-sized scratch buffer, resetting and reusing
/// both on every call, so it is meant to be created once per namespace and called many times.
/// Generation mutates this state through `&mut self`; to share one generator among threads, wrap
/// it in a mutex or create one per thread.
///
/// # Examples
///
/// ```rust
/// use nsuuid::{Generator, Uuid};
/// use std::{sync, thread};
///
/// let ns = Uuid::parse_or_panic("15588635-a45e-4867-aadb-dbf0385ade95");
/// let g = sync::Mutex::new(Generator::new_sha1(ns));
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = &g;
///         s.spawn(move || {
///             let name = format!("input {}", i);
///             println!("{} by thread {}", g.lock().unwrap().generate_uuid(&name), i);
///         });
///     }
/// });
///
/// let mut u = Uuid::NIL;
/// g.lock().unwrap().generate(&mut u, "input 1");
/// assert_eq!(u.to_string(), "4c816dc1-9418-502e-9b91-f17b83891bf8");
/// ```
#[derive(Clone)]
pub struct Generator<H: NameHash> {
    hasher: H,
    namespace: [u8; 16],

    /// Receives the full digest; only the first 16 bytes are used.
    buffer: Output<H>,
}

impl<H: NameHash> Generator<H> {
    /// Creates a generator instance for `namespace`.
    pub fn new(namespace: Uuid) -> Self {
        tracing::debug!(version = H::VERSION, %namespace, "created name-based UUID generator");
        Self {
            hasher: <H as Digest>::new(),
            namespace: namespace.into_bytes(),
            buffer: Default::default(),
        }
    }

    /// Returns the namespace the generator was created with.
    pub fn namespace(&self) -> Uuid {
        Uuid::from_bytes(self.namespace)
    }

    /// Returns the version number written into the generated UUIDs.
    pub fn version(&self) -> u8 {
        H::VERSION
    }

    /// Generates the UUID for `input`, writing the result into `target`.
    ///
    /// All 16 bytes of `target` are overwritten: the first 16 bytes of the hash of the namespace
    /// followed by `input`, with the version and variant bits set as RFC 4122 requires. The same
    /// namespace, input, and hash function always produce the same UUID.
    pub fn generate(&mut self, target: &mut Uuid, input: impl AsRef<[u8]>) {
        Digest::reset(&mut self.hasher);
        Digest::update(&mut self.hasher, self.namespace);
        Digest::update(&mut self.hasher, input);
        Digest::finalize_into_reset(&mut self.hasher, &mut self.buffer);

        let bytes = target.bytes_mut();
        bytes.copy_from_slice(&self.buffer[..16]);
        bytes[6] = (bytes[6] & 0x0f) | (H::VERSION << 4);
        bytes[8] = (bytes[8] & 0x3f) | 0x80; // RFC 4122 variant
    }

    /// Generates the UUID for `input` and returns it as a new object.
    pub fn generate_uuid(&mut self, input: impl AsRef<[u8]>) -> Uuid {
        let mut uuid = Uuid::NIL;
        self.generate(&mut uuid, input);
        uuid
    }
}

impl<H: NameHash> core::fmt::Debug for Generator<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Generator")
            .field("version", &H::VERSION)
            .field("namespace", &format_args!("{}", self.namespace()))
            .finish_non_exhaustive()
    }
}
