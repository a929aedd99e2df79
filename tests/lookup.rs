//! Live smoke tests against the real OS interface table.

#![cfg(any(
    target_os = "linux",
    target_os = "freebsd",
    target_os = "dragonfly",
    target_os = "netbsd",
    target_os = "openbsd",
))]

use ifhwaddr::{enumerate, hardware_address_of, Error};

#[test]
fn enumeration_includes_loopback() {
    let map = enumerate().unwrap();
    // lo on Linux, lo0 on the BSDs.
    assert!(
        map.iter().any(|(name, _)| name == "lo" || name == "lo0"),
        "no loopback key in {:?}",
        map.iter().map(|(name, _)| name.to_string()).collect::<Vec<_>>()
    );
}

#[test]
fn every_reported_address_is_normalized() {
    let map = enumerate().unwrap();
    for (name, addrs) in map.iter() {
        for addr in addrs {
            let octets: Vec<&str> = addr.split(':').collect();
            assert!(!octets.is_empty(), "{name}: empty address was retained");
            for octet in octets {
                assert_eq!(octet.len(), 2, "{name}: malformed octet in {addr}");
                assert!(
                    octet.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()),
                    "{name}: non-lowercase-hex octet in {addr}"
                );
            }
        }
    }
}

#[test]
fn lookups_match_the_enumeration() {
    let map = enumerate().unwrap();
    for (name, addrs) in map.iter() {
        match addrs.first() {
            Some(expected) => {
                assert_eq!(hardware_address_of(name).as_deref(), Ok(expected.as_str()));
            }
            None => {
                assert_eq!(
                    hardware_address_of(name),
                    Err(Error::NotFound {
                        interface: name.to_string()
                    })
                );
            }
        }
    }
}

#[test]
fn bogus_interface_is_not_found() {
    assert_eq!(
        hardware_address_of("definitely-not-a-nic0"),
        Err(Error::NotFound {
            interface: "definitely-not-a-nic0".to_string()
        })
    );
}

#[test]
fn repeated_enumerations_are_stable() {
    // Two full acquire/walk/release cycles back to back.
    let first = enumerate().unwrap();
    let second = enumerate().unwrap();
    assert_eq!(first.len(), second.len());
}
