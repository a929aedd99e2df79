pub(crate) mod link;
pub(crate) mod profile;
#[cfg(unix)]
pub(crate) mod unix;

pub use profile::{resolve_platform, LinkLayout, PlatformProfile, RecordLayout};

use crate::error::Error;

/// Mapping from interface name to the formatted hardware addresses
/// discovered for it, in OS enumeration order.
///
/// Built fresh on every enumeration and never cached. Every interface name
/// the OS reported appears as a key, including interfaces with no link-layer
/// record at all (their sequence is simply empty).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceAddressMap {
    entries: Vec<(String, Vec<String>)>,
}

impl InterfaceAddressMap {
    /// The addresses discovered for `name`, or `None` if the interface was
    /// never seen. An empty slice means the interface exists but exposed no
    /// usable link-layer address.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, addrs)| addrs.as_slice())
    }

    /// The first discovered address for `name`, if any.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.get(name)?.first().map(String::as_str)
    }

    /// Iterates interfaces in the order the OS listed them.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, addrs)| (name.as_str(), addrs.as_slice()))
    }

    /// Number of distinct interfaces seen.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Makes sure `name` is present as a key, without touching its sequence.
    pub(crate) fn ensure(&mut self, name: &str) {
        if self.get(name).is_none() {
            self.entries.push((name.to_string(), Vec::new()));
        }
    }

    pub(crate) fn push(&mut self, name: &str, addr: String) {
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some((_, addrs)) => addrs.push(addr),
            None => self.entries.push((name.to_string(), vec![addr])),
        }
    }
}

/// Enumerates every configured interface and its link-layer addresses.
///
/// Performs one full `getifaddrs` walk. An OS-level enumeration failure is
/// reported as an empty map, not an error; only an unsupported host OS
/// fails. See the crate docs for why that asymmetry is kept.
pub fn enumerate() -> Result<InterfaceAddressMap, Error> {
    let profile = PlatformProfile::current()?;
    #[cfg(unix)]
    {
        Ok(unix::enumerate_system(&profile))
    }
    #[cfg(not(unix))]
    {
        // current() only resolves unix families, so this is unreachable in
        // practice; keep the compiler happy on other targets.
        let _ = profile;
        Ok(InterfaceAddressMap::default())
    }
}

/// Returns the hardware address of the named interface, formatted as
/// colon-separated lowercase hex octets.
///
/// Runs one fresh enumeration per call; interface state can change between
/// invocations of a short-lived process, so nothing is cached. Fails with
/// [`Error::NotFound`] (carrying the name, for diagnosability) when the
/// interface was never seen or exposed no usable link-layer address.
pub fn hardware_address_of(interface: &str) -> Result<String, Error> {
    let map = enumerate()?;
    match map.first(interface) {
        Some(addr) => Ok(addr.to_string()),
        None => Err(Error::not_found(interface)),
    }
}
