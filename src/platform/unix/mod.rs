//! The interface-list walk over `getifaddrs`.
//!
//! The kernel owns the record list for the duration of one enumeration;
//! everything here borrows from the [`IfAddrs`] guard so that no interior
//! reference can outlive the matching `freeifaddrs`.

use std::ffi::CStr;
use std::io;
use std::marker::PhantomData;
use std::ptr;

use super::link;
use super::profile::PlatformProfile;
use super::InterfaceAddressMap;

/// Owning guard over one `getifaddrs` call.
///
/// `Drop` releases the kernel-held list, exactly once per successful fetch,
/// on every exit path including panics during parsing.
pub(crate) struct IfAddrs {
    head: *mut libc::ifaddrs,
}

impl IfAddrs {
    /// Asks the OS for the current interface-address list.
    pub(crate) fn fetch() -> io::Result<IfAddrs> {
        let mut head: *mut libc::ifaddrs = ptr::null_mut();
        // SAFETY: getifaddrs writes the list head through the out pointer.
        if unsafe { libc::getifaddrs(&mut head) } != 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(IfAddrs { head })
    }

    pub(crate) fn iter(&self) -> RecordIter<'_> {
        RecordIter {
            next: self.head,
            _list: PhantomData,
        }
    }
}

impl Drop for IfAddrs {
    fn drop(&mut self) {
        if self.head.is_null() {
            return;
        }
        // SAFETY: head came from a successful getifaddrs and is freed once.
        unsafe { libc::freeifaddrs(self.head) };
    }
}

/// Read-only cursor over the NULL-terminated record list, bound to the
/// lifetime of the guard that owns it.
pub(crate) struct RecordIter<'a> {
    next: *const libc::ifaddrs,
    _list: PhantomData<&'a ()>,
}

impl<'a> RecordIter<'a> {
    #[cfg(test)]
    fn from_head(head: *const libc::ifaddrs) -> RecordIter<'a> {
        RecordIter {
            next: head,
            _list: PhantomData,
        }
    }
}

impl<'a> Iterator for RecordIter<'a> {
    type Item = Record<'a>;

    fn next(&mut self) -> Option<Record<'a>> {
        if self.next.is_null() {
            return None;
        }
        // SAFETY: non-null nodes of a live getifaddrs list are valid ifaddrs.
        let inner = unsafe { &*self.next };
        self.next = inner.ifa_next;
        Some(Record { inner })
    }
}

/// A borrowed view of one interface-address record.
pub(crate) struct Record<'a> {
    inner: &'a libc::ifaddrs,
}

impl Record<'_> {
    fn name(&self) -> Option<String> {
        if self.inner.ifa_name.is_null() {
            return None;
        }
        // SAFETY: ifa_name points to a NUL-terminated name owned by the list.
        let name = unsafe { CStr::from_ptr(self.inner.ifa_name) };
        Some(name.to_string_lossy().into_owned())
    }

    fn flags(&self) -> u32 {
        self.inner.ifa_flags as u32
    }
}

/// Builds the name -> formatted-addresses map from one OS enumeration.
///
/// A failed `getifaddrs` call is soft: it logs a warning and produces an
/// empty map, indistinguishable from a host with no interfaces.
pub(crate) fn enumerate_system(profile: &PlatformProfile) -> InterfaceAddressMap {
    let list = match IfAddrs::fetch() {
        Ok(list) => list,
        Err(e) => {
            log::warn!("getifaddrs failed, treating as no interfaces: {e:?}");
            return InterfaceAddressMap::default();
        }
    };
    walk(list.iter(), profile)
    // list drops here; freeifaddrs runs exactly once
}

/// Walks the record list, grouping one map entry per interface name.
///
/// Every seen name becomes a key even when its record carries no address at
/// all (null `ifa_addr` is common for tunnel interfaces); non-link records
/// are filtered by the extractor and leave the entry untouched.
fn walk<'a>(
    records: impl Iterator<Item = Record<'a>>,
    profile: &PlatformProfile,
) -> InterfaceAddressMap {
    let mut map = InterfaceAddressMap::default();
    for record in records {
        let Some(name) = record.name() else {
            continue;
        };
        map.ensure(&name);
        // SAFETY: ifa_addr in a live list is either null or points to an
        // OS-provided sockaddr sized for its address family.
        match unsafe { link::extract(record.inner.ifa_addr as *const _, profile) } {
            Some(link) if !link.is_empty() => {
                map.push(&name, link::format_octets(link.octets()));
            }
            Some(_) => {}
            None => {
                log::trace!(
                    "{name}: flags {:#x}, not a link-layer record",
                    record.flags()
                );
            }
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::link::sockaddr_ll;
    use crate::platform::profile::resolve_platform;
    use std::ffi::CString;
    use std::mem;

    fn link_record(addr: &[u8]) -> sockaddr_ll {
        let mut sll: sockaddr_ll = unsafe { mem::zeroed() };
        sll.sll_family = 17;
        sll.sll_halen = addr.len() as u8;
        sll.sll_addr[..addr.len()].copy_from_slice(addr);
        sll
    }

    #[test]
    fn synthetic_list_groups_by_interface_name() {
        let profile = resolve_platform("linux").unwrap();
        let eth0 = CString::new("eth0").unwrap();
        let lo = CString::new("lo").unwrap();

        let first = link_record(&[0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e]);
        let second = link_record(&[0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]);
        // A family tag the linux profile must filter out.
        let mut inet: sockaddr_ll = unsafe { mem::zeroed() };
        inet.sll_family = 2;

        let mut n3: libc::ifaddrs = unsafe { mem::zeroed() };
        n3.ifa_name = lo.as_ptr() as *mut _;
        n3.ifa_addr = &inet as *const _ as *mut libc::sockaddr;
        let mut n2: libc::ifaddrs = unsafe { mem::zeroed() };
        n2.ifa_name = eth0.as_ptr() as *mut _;
        n2.ifa_addr = &second as *const _ as *mut libc::sockaddr;
        n2.ifa_next = &mut n3;
        let mut n1: libc::ifaddrs = unsafe { mem::zeroed() };
        n1.ifa_name = eth0.as_ptr() as *mut _;
        n1.ifa_addr = &first as *const _ as *mut libc::sockaddr;
        n1.ifa_next = &mut n2;

        let map = walk(RecordIter::from_head(&n1), &profile);
        assert_eq!(map.len(), 2);
        assert_eq!(
            map.get("eth0"),
            Some(&["00:1a:2b:3c:4d:5e".to_string(), "aa:bb:cc:dd:ee:ff".to_string()][..])
        );
        assert_eq!(map.get("lo"), Some(&[][..]));
        assert_eq!(map.first("eth0"), Some("00:1a:2b:3c:4d:5e"));
        assert_eq!(map.first("lo"), None);
    }

    #[test]
    fn null_ifa_addr_still_records_the_interface() {
        let profile = resolve_platform("linux").unwrap();
        let tun0 = CString::new("tun0").unwrap();
        let mut node: libc::ifaddrs = unsafe { mem::zeroed() };
        node.ifa_name = tun0.as_ptr() as *mut _;

        let map = walk(RecordIter::from_head(&node), &profile);
        assert_eq!(map.get("tun0"), Some(&[][..]));
    }

    #[test]
    fn unparseable_record_does_not_abort_the_walk() {
        let profile = resolve_platform("linux").unwrap();
        let bad = CString::new("bad0").unwrap();
        let eth0 = CString::new("eth0").unwrap();

        // A link record claiming more address bytes than its buffer holds is
        // clamped, not fatal; the walk must reach the next node.
        let mut oversized = link_record(&[0x01]);
        oversized.sll_halen = 0xff;
        let good = link_record(&[0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e]);

        let mut n2: libc::ifaddrs = unsafe { mem::zeroed() };
        n2.ifa_name = eth0.as_ptr() as *mut _;
        n2.ifa_addr = &good as *const _ as *mut libc::sockaddr;
        let mut n1: libc::ifaddrs = unsafe { mem::zeroed() };
        n1.ifa_name = bad.as_ptr() as *mut _;
        n1.ifa_addr = &oversized as *const _ as *mut libc::sockaddr;
        n1.ifa_next = &mut n2;

        let map = walk(RecordIter::from_head(&n1), &profile);
        assert_eq!(map.first("eth0"), Some("00:1a:2b:3c:4d:5e"));
        assert!(map.get("bad0").is_some());
    }

    #[test]
    fn empty_list_yields_an_empty_map() {
        let profile = resolve_platform("linux").unwrap();
        let map = walk(RecordIter::from_head(ptr::null()), &profile);
        assert!(map.is_empty());
    }

    #[test]
    fn fetch_and_release_round_trip() {
        // Acquire/release twice in a row; the Drop pairing must hold.
        for _ in 0..2 {
            let list = IfAddrs::fetch().expect("getifaddrs");
            let _ = list.iter().count();
        }
    }
}
