use super::{with_md5::Md5Generator, with_sha1::Sha1Generator, Generator};
use crate::Uuid;
use digest::Digest;

const NS: Uuid = Uuid::parse_or_panic("15588635-a45e-4867-aadb-dbf0385ade95");

/// Returns a collection of prepared (namespace, input, expected v5) cases
fn prepare_cases() -> &'static [(&'static str, &'static str, &'static str)] {
    &[
        (
            "15588635-a45e-4867-aadb-dbf0385ade95",
            "input 1",
            "4c816dc1-9418-502e-9b91-f17b83891bf8",
        ),
        (
            "15588635-a45e-4867-aadb-dbf0385ade95",
            "input 123456123456123456123456123456123456123456123456123456123456123456123456123456123456",
            "0a550dec-ba3e-52c2-a54d-60795ea13c90",
        ),
    ]
}

fn random_input() -> Vec<u8> {
    let len = rand::random::<usize>() % 200;
    (0..len).map(|_| rand::random()).collect()
}

/// Generates prepared v5 cases correctly
#[test]
fn generates_prepared_v5_cases_correctly() {
    for &(namespace, input, expected) in prepare_cases() {
        let ns: Uuid = namespace.parse().unwrap();
        let mut u = Uuid::NIL;
        Generator::new_sha1(ns).generate(&mut u, input.as_bytes());
        assert_eq!(u.to_string(), expected);

        let oracle = uuid::Uuid::new_v5(&uuid::Uuid::from_bytes(*ns.as_bytes()), input.as_bytes());
        assert_eq!(oracle.to_string(), expected);
    }
}

/// Agrees with an independent implementation on random namespaces and inputs
#[test]
fn agrees_with_an_independent_implementation_on_random_namespaces_and_inputs() {
    for _ in 0..1_000 {
        let ns = Uuid::from(rand::random::<[u8; 16]>());
        let oracle_ns = uuid::Uuid::from_bytes(*ns.as_bytes());
        let input = random_input();

        let v3 = Generator::new_md5(ns).generate_uuid(&input);
        assert_eq!(v3.as_bytes(), uuid::Uuid::new_v3(&oracle_ns, &input).as_bytes());

        let v5 = Generator::new_sha1(ns).generate_uuid(&input);
        assert_eq!(v5.as_bytes(), uuid::Uuid::new_v5(&oracle_ns, &input).as_bytes());
    }
}

/// Returns the same UUID for the same input when reused
#[test]
fn returns_the_same_uuid_for_the_same_input_when_reused() {
    let mut g = Sha1Generator::new(NS);
    let first = g.generate_uuid("input 1");
    let long = g.generate_uuid(prepare_cases()[1].1);
    let empty = g.generate_uuid("");
    assert_eq!(g.generate_uuid("input 1"), first);
    assert_eq!(g.generate_uuid(prepare_cases()[1].1), long);
    assert_eq!(g.generate_uuid(""), empty);
    assert_eq!(Sha1Generator::new(NS).generate_uuid(""), empty);

    assert_eq!(first.to_string(), "4c816dc1-9418-502e-9b91-f17b83891bf8");
    assert_eq!(long.to_string(), "0a550dec-ba3e-52c2-a54d-60795ea13c90");
}

/// Overwrites every byte of the target
#[test]
fn overwrites_every_byte_of_the_target() {
    let mut g = Md5Generator::new(NS);
    for _ in 0..1_000 {
        let input = random_input();
        let mut zeros = Uuid::NIL;
        let mut ones = Uuid::MAX;
        g.generate(&mut zeros, &input);
        g.generate(&mut ones, &input);
        assert_eq!(zeros, ones);
    }
}

/// Copies the leading digest bytes except version and variant bits
#[test]
fn copies_the_leading_digest_bytes_except_version_and_variant_bits() {
    fn check<H: Digest>(u: Uuid, input: &[u8]) {
        let digest = H::new().chain_update(NS).chain_update(input).finalize();
        let bytes = u.as_bytes();
        for i in 0..16 {
            match i {
                6 => assert_eq!(bytes[i] & 0x0f, digest[i] & 0x0f),
                8 => assert_eq!(bytes[i] & 0x3f, digest[i] & 0x3f),
                _ => assert_eq!(bytes[i], digest[i]),
            }
        }
    }

    let mut g3 = Generator::new_md5(NS);
    let mut g5 = Generator::new_sha1(NS);
    for _ in 0..1_000 {
        let input = random_input();
        check::<md5::Md5>(g3.generate_uuid(&input), &input);
        check::<sha1::Sha1>(g5.generate_uuid(&input), &input);
    }
}

/// Sets version and variant bits properly
#[test]
fn sets_version_and_variant_bits_properly() {
    let v3 = r"^[0-9a-f]{8}-[0-9a-f]{4}-3[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";
    let v5 = r"^[0-9a-f]{8}-[0-9a-f]{4}-5[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";
    let (re3, re5) = (regex::Regex::new(v3).unwrap(), regex::Regex::new(v5).unwrap());

    let mut g3 = Generator::new_md5(NS);
    let mut g5 = Generator::new_sha1(NS);
    assert_eq!((g3.version(), g5.version()), (3, 5));

    for i in 0..10_000u32 {
        let input = i.to_be_bytes();

        let u = g3.generate_uuid(input);
        assert_eq!(u.as_bytes()[6] >> 4, 3);
        assert_eq!(u.as_bytes()[8] >> 6, 0b10);
        assert!(re3.is_match(&u.to_string()));

        let u = g5.generate_uuid(input);
        assert_eq!((u.version(), u.is_rfc4122()), (5, true));
        assert!(re5.is_match(&u.to_string()));
    }
}

/// Scopes output by namespace
#[test]
fn scopes_output_by_namespace() {
    let other = Uuid::parse_or_panic("6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    let mut g = Generator::new_sha1(NS);
    let mut h = Generator::new_sha1(other);
    assert_eq!(g.namespace(), NS);
    assert_eq!(h.namespace(), other);
    assert_ne!(g.generate_uuid("input 1"), h.generate_uuid("input 1"));
    assert_ne!(
        g.generate_uuid("input 1"),
        Generator::new_md5(NS).generate_uuid("input 1")
    );
}

/// Clones generator with independent state
#[test]
fn clones_generator_with_independent_state() {
    let mut g = Generator::new_sha1(NS);
    let before = g.generate_uuid("input 1");
    let mut h = g.clone();
    assert_eq!(h.generate_uuid("input 1"), before);
    assert_eq!(g.generate_uuid("input 1"), before);
    assert!(format!("{:?}", g).contains("15588635-a45e-4867-aadb-dbf0385ade95"));
}
