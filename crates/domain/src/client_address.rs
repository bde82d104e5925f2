use crate::errors::DomainError;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// ECS address family numbers (RFC 7871 §6, IANA address family registry).
pub const FAMILY_IPV4: u16 = 1;
pub const FAMILY_IPV6: u16 = 2;

const IPV6_GROUPS: usize = 8;

/// Client address as it is carried inside an ECS option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientAddress {
    V4([u8; 4]),
    V6([u8; 16]),
}

impl ClientAddress {
    /// Classifies and converts a textual client address.
    ///
    /// Four dot-separated parts make an IPv4 address; otherwise three or more
    /// colon-separated parts make an IPv6 address. The classification is a
    /// heuristic; the conversion that follows is strict and rejects anything
    /// that does not yield exactly 4 or 16 bytes.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let ip = raw.trim();

        if ip.split('.').count() == 4 {
            return parse_ipv4(ip).map(Self::V4);
        }
        if ip.split(':').count() > 2 {
            return parse_ipv6(ip).map(Self::V6);
        }

        Err(DomainError::InvalidAddress(ip.to_string()))
    }

    pub fn family(&self) -> u16 {
        match self {
            Self::V4(_) => FAMILY_IPV4,
            Self::V6(_) => FAMILY_IPV6,
        }
    }

    pub fn octets(&self) -> &[u8] {
        match self {
            Self::V4(octets) => octets,
            Self::V6(octets) => octets,
        }
    }

    pub fn is_ipv4(&self) -> bool {
        matches!(self, Self::V4(_))
    }
}

impl fmt::Display for ClientAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4(octets) => Ipv4Addr::from(*octets).fmt(f),
            Self::V6(octets) => Ipv6Addr::from(*octets).fmt(f),
        }
    }
}

fn parse_ipv4(ip: &str) -> Result<[u8; 4], DomainError> {
    let mut octets = [0u8; 4];
    for (slot, part) in octets.iter_mut().zip(ip.split('.')) {
        *slot = part
            .parse::<u8>()
            .map_err(|_| DomainError::InvalidAddress(ip.to_string()))?;
    }
    Ok(octets)
}

fn parse_ipv6(ip: &str) -> Result<[u8; 16], DomainError> {
    let invalid = || DomainError::InvalidAddress(ip.to_string());

    let groups: Vec<&str> = match ip.split_once("::") {
        Some((head, tail)) => {
            if tail.contains("::") {
                return Err(invalid());
            }
            let head = explicit_groups(head);
            let tail = explicit_groups(tail);
            let explicit = head.len() + tail.len();
            if explicit >= IPV6_GROUPS {
                return Err(invalid());
            }
            let mut expanded = Vec::with_capacity(IPV6_GROUPS);
            expanded.extend(head);
            expanded.extend(std::iter::repeat("0000").take(IPV6_GROUPS - explicit));
            expanded.extend(tail);
            expanded
        }
        None => ip.split(':').collect(),
    };

    if groups.len() != IPV6_GROUPS {
        return Err(invalid());
    }

    let mut octets = [0u8; 16];
    for (chunk, group) in octets.chunks_exact_mut(2).zip(groups) {
        if group.is_empty() || group.len() > 4 {
            return Err(invalid());
        }
        let value = u16::from_str_radix(group, 16).map_err(|_| invalid())?;
        chunk.copy_from_slice(&value.to_be_bytes());
    }
    Ok(octets)
}

fn explicit_groups(side: &str) -> Vec<&str> {
    if side.is_empty() {
        Vec::new()
    } else {
        side.split(':').collect()
    }
}
