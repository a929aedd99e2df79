use std::sync::OnceLock;

use crate::error::Error;

/// Numeric address family tagging raw packet-socket addresses on Linux.
pub(crate) const AF_PACKET: u16 = 17;
/// Numeric address family tagging link-level addresses on every supported BSD.
pub(crate) const AF_LINK: u16 = 18;

/// How the kernel lays out the generic `sockaddr` attached to an
/// interface-address record, i.e. where its address-family tag lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordLayout {
    /// `sa_family` is a 16-bit integer at offset 0.
    Linux,
    /// `sa_len` occupies offset 0 and `sa_family` is a single byte at offset 1.
    Bsd,
}

/// Which link-layer sockaddr structure the family tag dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkLayout {
    /// Linux `sockaddr_ll`: fixed size, address in an 8-byte buffer with a
    /// separate valid-length field.
    Packet,
    /// FreeBSD/DragonFlyBSD `sockaddr_dl`: 46-byte combined name+address
    /// data buffer.
    DataLong,
    /// NetBSD/OpenBSD `sockaddr_dl`: 12-byte combined name+address data
    /// buffer.
    DataShort,
}

/// The struct layouts and family identifier applicable to one OS family.
///
/// Selected once per process and read-only thereafter; see [`PlatformProfile::current`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformProfile {
    /// Layout of the generic sockaddr attached to each interface record.
    pub record: RecordLayout,
    /// Layout the same memory is reinterpreted under when the family matches.
    pub link: LinkLayout,
    /// The numeric address family identifying link-layer records on this OS.
    pub link_family: u16,
}

impl PlatformProfile {
    /// The profile for the operating system this process is running on.
    ///
    /// Resolved once from [`std::env::consts::OS`] and cached for the process
    /// lifetime. Fails with [`Error::UnsupportedPlatform`] on any OS outside
    /// the supported set.
    pub fn current() -> Result<PlatformProfile, Error> {
        static PROFILE: OnceLock<Result<PlatformProfile, Error>> = OnceLock::new();
        PROFILE
            .get_or_init(|| resolve_platform(std::env::consts::OS))
            .clone()
    }
}

/// Resolves an OS family identifier (as reported by [`std::env::consts::OS`])
/// to its [`PlatformProfile`].
///
/// The supported set is closed: `linux`, `freebsd`, `dragonfly`, `netbsd`
/// and `openbsd`. Anything else fails with [`Error::UnsupportedPlatform`];
/// interface records cannot be parsed without a known kernel ABI.
pub fn resolve_platform(os: &str) -> Result<PlatformProfile, Error> {
    let profile = match os {
        "linux" => PlatformProfile {
            record: RecordLayout::Linux,
            link: LinkLayout::Packet,
            link_family: AF_PACKET,
        },
        "freebsd" | "dragonfly" => PlatformProfile {
            record: RecordLayout::Bsd,
            link: LinkLayout::DataLong,
            link_family: AF_LINK,
        },
        "netbsd" | "openbsd" => PlatformProfile {
            record: RecordLayout::Bsd,
            link: LinkLayout::DataShort,
            link_family: AF_LINK,
        },
        _ => return Err(Error::unsupported(os)),
    };
    Ok(profile)
}
