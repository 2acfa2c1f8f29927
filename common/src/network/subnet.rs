//! # Subnet Arithmetic
//!
//! Derives the three answers a drill question asks for: network address,
//! broadcast address and subnet mask.
//!
//! Parsing is deliberately non-strict about host bits: `1.2.3.4/24` is a
//! valid input whose network address is `1.2.3.0`. Stored prefixes are
//! curated with aligned addresses, but the same code path also validates
//! ad-hoc user input, which may not be.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use thiserror::Error;

/// The text could not be read as an IPv4 CIDR prefix.
///
/// Carries the offending input so callers can echo it back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a valid IPv4 CIDR prefix: {text:?}")]
pub struct InvalidPrefix {
    pub text: String,
}

impl InvalidPrefix {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

/// A derived subnet, computed on demand from CIDR text and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subnet {
    pub network_address: Ipv4Addr,
    pub broadcast_address: Ipv4Addr,
    pub netmask: Ipv4Addr,
    pub prefix_len: u8,
}

impl Subnet {
    /// Derives the subnet of `addr` at `prefix_len` bits.
    ///
    /// Host bits in `addr` are cleared, not rejected.
    pub fn derive(addr: Ipv4Addr, prefix_len: u8) -> Self {
        debug_assert!(prefix_len <= 32);
        let mask: u32 = netmask_bits(prefix_len);
        let network: u32 = u32::from(addr) & mask;
        let broadcast: u32 = network | !mask;

        Self {
            network_address: Ipv4Addr::from(network),
            broadcast_address: Ipv4Addr::from(broadcast),
            netmask: Ipv4Addr::from(mask),
            prefix_len,
        }
    }
}

impl fmt::Display for Subnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network_address, self.prefix_len)
    }
}

impl FromStr for Subnet {
    type Err = InvalidPrefix;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_and_derive(s)
    }
}

/// Parses CIDR text like `192.168.1.0/24` and derives its subnet.
///
/// Accepted input is an IPv4 dotted quad, a `/`, and a prefix length in
/// `[0, 32]`. Anything else fails with [`InvalidPrefix`]; octets outside
/// `0..=255`, a missing slash and a prefix length above 32 all count as
/// malformed.
pub fn parse_and_derive(text: &str) -> Result<Subnet, InvalidPrefix> {
    let trimmed = text.trim();

    let Some((addr_str, prefix_str)) = trimmed.split_once('/') else {
        return Err(InvalidPrefix::new(text));
    };

    let addr: Ipv4Addr = addr_str
        .parse()
        .map_err(|_| InvalidPrefix::new(text))?;

    let prefix_len: u8 = prefix_str
        .parse()
        .ok()
        .filter(|len| *len <= 32)
        .ok_or_else(|| InvalidPrefix::new(text))?;

    Ok(Subnet::derive(addr, prefix_len))
}

/// The netmask for `prefix_len` as raw bits: that many leading ones.
fn netmask_bits(prefix_len: u8) -> u32 {
    // Shifting a u32 by 32 overflows, so /0 is its own case.
    match prefix_len {
        0 => 0,
        len => u32::MAX << (32 - u32::from(len)),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
