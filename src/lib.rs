//! Name-based UUIDs (RFC 4122 versions 3 and 5)
//!
//! ```rust
//! use nsuuid::{uuid5, NAMESPACE_DNS};
//!
//! let uuid = uuid5(&NAMESPACE_DNS, "python.org");
//! println!("{}", uuid); // "886313e1-3b8a-5372-9b90-0c9aee199e5d"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//! ```
//!
//! A name-based UUID is a deterministic function of a namespace UUID, a name, and a hash
//! function: MD5 for version 3 and SHA-1 for version 5. See
//! [RFC 4122 Section 4.3](https://www.rfc-editor.org/rfc/rfc4122#section-4.3).
//!
//! # Field and bit layout
//!
//! This implementation produces identifiers with the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            hash_a                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |            hash_a             |  ver  |        hash_b         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                        hash_c                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            hash_c                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The `hash_a`, `hash_b`, and `hash_c` fields hold the first 16 bytes of the hash of the
//!   namespace's 16 bytes followed by the name. A SHA-1 digest is 20 bytes long; its last four
//!   bytes are discarded.
//! - The 4-bit `ver` field is set at `0011` (MD5) or `0101` (SHA-1).
//! - The 2-bit `var` field is set at `10`.
//!
//! # Reusing a generator
//!
//! [`uuid3`] and [`uuid5`] set up a hash function for every call. A [`Generator`] keeps one per
//! namespace along with its output buffer and writes into an existing [`Uuid`]:
//!
//! ```rust
//! use nsuuid::{Generator, Uuid};
//!
//! let ns = Uuid::parse_or_panic("15588635-a45e-4867-aadb-dbf0385ade95");
//! let mut g = Generator::new_sha1(ns);
//!
//! let mut uuid = Uuid::NIL;
//! let mut buf = Vec::new();
//! for name in ["input 1", "input 2", "input 3"] {
//!     g.generate(&mut uuid, name);
//!     buf = uuid.append_formatted(buf);
//!     buf.push(b'\n');
//! }
//! assert!(buf.starts_with(b"4c816dc1-9418-502e-9b91-f17b83891bf8\n"));
//! ```
//!
//! # Crate features
//!
//! - `std` (default): enables `std::error::Error` and `String` conversions.
//! - `serde`: serializes [`Uuid`] as a string (or 16 bytes for non-human-readable formats).
//! - `uuid`: conversions to and from [`uuid::Uuid`](https://docs.rs/uuid).

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

mod id;
pub use id::{ParseError, Uuid};

pub mod generator;
pub use generator::{with_md5::Md5Generator, with_sha1::Sha1Generator, Generator, NameHash};

mod entry;
pub use entry::{uuid3, uuid5, NAMESPACE_DNS, NAMESPACE_OID, NAMESPACE_URL, NAMESPACE_X500};
