/*!
# ifhwaddr: link-layer address enumeration for Linux and the BSDs

A small, synchronous library that asks the operating system for its list of
configured network interfaces and reports each interface's link-layer (MAC)
address, normalized to colon-separated lowercase hex. Built for tools that
need a hardware address for a *named* interface before talking to something
else (a campus gateway, a DHCP server, an inventory endpoint) and that must
run unchanged across kernels with structurally different interface ABIs.

## Supported platforms

Linux, FreeBSD, DragonFlyBSD, NetBSD and OpenBSD. The kernels disagree on
how a link-layer sockaddr is laid out:

- Linux tags link records with the packet family and stores the address in a
  fixed 8-byte buffer with a separate valid-length field (`sockaddr_ll`).
- The BSDs tag them with `AF_LINK` (18) and pack the interface name and the
  address back-to-back into one data buffer (`sockaddr_dl`), whose capacity
  is 46 bytes on FreeBSD/DragonFlyBSD and 12 on NetBSD/OpenBSD.

The crate selects one [`PlatformProfile`] per process describing the layouts
in play; every record is parsed through bounds-checked slicing under that
profile. Any other OS fails fast with [`Error::UnsupportedPlatform`].

## Quick start

```no_run
let mac = ifhwaddr::hardware_address_of("eth0")?;
println!("eth0 is {mac}");
# Ok::<(), ifhwaddr::Error>(())
```

Or walk everything the OS reported:

```no_run
for (name, addrs) in ifhwaddr::enumerate()?.iter() {
    println!("{name}: {addrs:?}");
}
# Ok::<(), ifhwaddr::Error>(())
```

## Error handling

Only two things are errors: an unsupported host OS (fatal, at startup) and a
lookup that found no usable address ([`Error::NotFound`], carrying the
interface name). A failing `getifaddrs` call is deliberately *not* an error:
it is logged and reported as an empty enumeration, so the only failure mode
callers ever see from a lookup is `NotFound`. Callers that need to tell the
two apart cannot; this mirrors the permissive behavior of the tools this
library grew out of, and changing it would break them.

Non-link address records (IPv4, IPv6, ...) are normal filtering outcomes,
never errors.

## Resource handling

Each enumeration acquires the kernel-owned record list once and releases it
exactly once, on every exit path, via an RAII guard. Borrowed views into the
list are lifetime-bound to the guard, so holding an interior reference past
the release does not compile. Enumerations never cache: interface state can
change between two calls of a short-lived process.

## Safety

The walk and the extraction necessarily read OS-defined C structures through
raw pointers. All unsafe blocks sit in `platform/unix` and `platform/link`,
each documenting the invariant it relies on; kernel-provided length fields
are clamped to the fixed buffers they index rather than trusted.
*/

mod error;
mod platform;

pub use crate::error::Error;
pub use crate::platform::{
    enumerate, hardware_address_of, resolve_platform, InterfaceAddressMap, LinkLayout,
    PlatformProfile, RecordLayout,
};
