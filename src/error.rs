//! Error types for hardware-address lookups.

use thiserror::Error;

/// Error type for platform resolution and address lookups.
///
/// Layout/family mismatches while parsing individual address records are not
/// errors; they are normal filtering outcomes and never surface here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The running operating system is not in the supported set
    /// (Linux, FreeBSD, DragonFlyBSD, NetBSD, OpenBSD).
    ///
    /// Fatal: interface records cannot be interpreted without a known
    /// kernel ABI, so nothing in this crate can work on such a host.
    #[error("unsupported platform: {os}")]
    UnsupportedPlatform {
        /// The OS identifier that failed to resolve.
        os: String,
    },

    /// The named interface has no usable hardware address: it either never
    /// appeared in the enumeration, or all of its address records were
    /// non-link-layer entries.
    #[error("no hardware address found for interface {interface}")]
    NotFound {
        /// The interface name that was looked up.
        interface: String,
    },
}

impl Error {
    pub(crate) fn unsupported(os: &str) -> Self {
        Error::UnsupportedPlatform { os: os.to_string() }
    }

    pub(crate) fn not_found(interface: &str) -> Self {
        Error::NotFound {
            interface: interface.to_string(),
        }
    }
}
