//! Link-layer sockaddr layouts and the address extraction that runs over
//! them.
//!
//! The structs here are crate-owned `#[repr(C)]` mirrors of the kernel
//! definitions, one per supported layout, so that any profile can be parsed
//! (and tested) on any host. Whichever layout applies, extraction never
//! trusts kernel-provided length fields beyond the fixed buffer capacity.

use std::ffi::c_void;
use std::fmt::Write;
use std::ptr;

use super::profile::{LinkLayout, PlatformProfile, RecordLayout};

/// Capacity of the combined name+address buffer in the long `sockaddr_dl`
/// (FreeBSD, DragonFlyBSD). Also the capacity of [`LinkAddress`], since no
/// supported layout carries more data than this.
pub(crate) const SDL_DATA_LONG: usize = 46;
/// Capacity of the combined buffer in the short `sockaddr_dl`
/// (NetBSD, OpenBSD).
pub(crate) const SDL_DATA_SHORT: usize = 12;

#[allow(dead_code)]
#[allow(non_camel_case_types)]
#[repr(C)]
#[derive(Copy, Clone)]
pub(crate) struct sockaddr_ll {
    pub sll_family: u16,
    pub sll_protocol: u16,
    pub sll_ifindex: i32,
    pub sll_hatype: u16,
    pub sll_pkttype: u8,
    pub sll_halen: u8,
    pub sll_addr: [u8; 8],
}

#[allow(dead_code)]
#[allow(non_camel_case_types)]
#[repr(C)]
#[derive(Copy, Clone)]
pub(crate) struct sockaddr_dl_long {
    pub sdl_len: u8,
    pub sdl_family: u8,
    pub sdl_index: u16,
    pub sdl_type: u8,
    pub sdl_nlen: u8,
    pub sdl_alen: u8,
    pub sdl_slen: u8,
    pub sdl_data: [u8; SDL_DATA_LONG],
}

#[allow(dead_code)]
#[allow(non_camel_case_types)]
#[repr(C)]
#[derive(Copy, Clone)]
pub(crate) struct sockaddr_dl_short {
    pub sdl_len: u8,
    pub sdl_family: u8,
    pub sdl_index: u16,
    pub sdl_type: u8,
    pub sdl_nlen: u8,
    pub sdl_alen: u8,
    pub sdl_slen: u8,
    pub sdl_data: [u8; SDL_DATA_SHORT],
}

/// One hardware address lifted out of a link-layer sockaddr.
///
/// Stores the combined name+address bytes in a fixed buffer with the two
/// kernel length fields; the address itself is always reached through
/// bounds-checked slicing. Zero-length is valid and means "no usable
/// address".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LinkAddress {
    name_len: u8,
    addr_len: u8,
    data: [u8; SDL_DATA_LONG],
}

impl LinkAddress {
    /// Builds from a Linux `sockaddr_ll`: `sll_halen` valid bytes of the
    /// fixed `sll_addr` buffer, clamped to the buffer rather than trusted.
    fn from_packet(sll: &sockaddr_ll) -> LinkAddress {
        let len = (sll.sll_halen as usize).min(sll.sll_addr.len());
        let mut data = [0u8; SDL_DATA_LONG];
        data[..len].copy_from_slice(&sll.sll_addr[..len]);
        LinkAddress {
            name_len: 0,
            addr_len: len as u8,
            data,
        }
    }

    /// Builds from the common BSD shape: a combined buffer holding the
    /// interface name (`nlen` bytes) immediately followed by the address
    /// (`alen` bytes). Works for both buffer capacities. Length fields that
    /// reach past the buffer yield a zero-length address.
    fn from_dl(nlen: u8, alen: u8, buf: &[u8]) -> LinkAddress {
        let end = nlen as usize + alen as usize;
        if end > buf.len() {
            return LinkAddress::empty();
        }
        let mut data = [0u8; SDL_DATA_LONG];
        data[..buf.len()].copy_from_slice(buf);
        LinkAddress {
            name_len: nlen,
            addr_len: alen,
            data,
        }
    }

    fn empty() -> LinkAddress {
        LinkAddress {
            name_len: 0,
            addr_len: 0,
            data: [0u8; SDL_DATA_LONG],
        }
    }

    /// The raw hardware-address bytes, in kernel order.
    pub(crate) fn octets(&self) -> &[u8] {
        let start = self.name_len as usize;
        &self.data[start..start + self.addr_len as usize]
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.addr_len == 0
    }
}

/// Reads the address-family tag of a generic sockaddr under `record`.
///
/// # Safety
///
/// `sa` must point to at least two readable bytes laid out as a generic
/// sockaddr of the given record layout.
unsafe fn family_tag(sa: *const c_void, record: RecordLayout) -> u16 {
    match record {
        // sa_family: u16 at offset 0.
        RecordLayout::Linux => ptr::read_unaligned(sa as *const u16),
        // sa_len at offset 0, sa_family: u8 at offset 1.
        RecordLayout::Bsd => ptr::read_unaligned((sa as *const u8).add(1)) as u16,
    }
}

/// Inspects the generic sockaddr at `sa` and, if its family tag identifies a
/// link-layer record under `profile`, reinterprets the same memory with the
/// profile's link layout and lifts out the address bytes.
///
/// A family mismatch (IPv4/IPv6 records and the like) returns `None`; that
/// is the normal outcome for most records, not an error.
///
/// # Safety
///
/// `sa` must either be null or point to a readable OS-provided sockaddr.
/// Whenever the family tag equals `profile.link_family`, the memory must be
/// at least as large as the link layout the profile selects.
pub(crate) unsafe fn extract(sa: *const c_void, profile: &PlatformProfile) -> Option<LinkAddress> {
    if sa.is_null() {
        return None;
    }
    if family_tag(sa, profile.record) != profile.link_family {
        return None;
    }
    let link = match profile.link {
        LinkLayout::Packet => LinkAddress::from_packet(&*(sa as *const sockaddr_ll)),
        LinkLayout::DataLong => {
            let sdl = &*(sa as *const sockaddr_dl_long);
            LinkAddress::from_dl(sdl.sdl_nlen, sdl.sdl_alen, &sdl.sdl_data)
        }
        LinkLayout::DataShort => {
            let sdl = &*(sa as *const sockaddr_dl_short);
            LinkAddress::from_dl(sdl.sdl_nlen, sdl.sdl_alen, &sdl.sdl_data)
        }
    };
    Some(link)
}

/// Renders raw address bytes as colon-separated lowercase hex octets, in the
/// order they were read. Empty input renders as an empty string.
pub(crate) fn format_octets(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(':');
        }
        let _ = write!(out, "{b:02x}");
    }
    out
}
