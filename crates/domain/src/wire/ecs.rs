use super::{ECS_OPTION_CODE, EDNS_UDP_PAYLOAD, OPT_RR_TYPE};
use crate::client_address::ClientAddress;
use crate::errors::DomainError;

const MAX_IPV4_PREFIX: u8 = 32;
const MAX_IPV6_PREFIX: u8 = 128;

/// FAMILY(2) + SOURCE PREFIX-LENGTH(1) + SCOPE PREFIX-LENGTH(1).
const ECS_FIXED_LEN: usize = 4;

/// OPTION-CODE(2) + OPTION-LENGTH(2).
const OPTION_HEADER_LEN: usize = 4;

/// NAME(1) + TYPE(2) + UDP size(2) + ext-RCODE/version/flags(4) + RDLENGTH(2).
const OPT_HEADER_LEN: usize = 11;

/// Source prefix lengths announced for each address family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcsPrefixes {
    pub ipv4: u8,
    pub ipv6: u8,
}

impl EcsPrefixes {
    pub fn new(ipv4: u8, ipv6: u8) -> Self {
        Self {
            ipv4: ipv4.min(MAX_IPV4_PREFIX),
            ipv6: ipv6.min(MAX_IPV6_PREFIX),
        }
    }

    pub fn for_address(&self, address: &ClientAddress) -> u8 {
        if address.is_ipv4() {
            self.ipv4
        } else {
            self.ipv6
        }
    }
}

impl Default for EcsPrefixes {
    fn default() -> Self {
        Self::new(MAX_IPV4_PREFIX, MAX_IPV6_PREFIX)
    }
}

/// Builds an OPT pseudo-record carrying an ECS option for `ip`.
///
/// Fails with `InvalidAddress` when `ip` is neither IPv4 nor IPv6.
pub fn build_opt(ip: &str, ipv4_prefix: u8, ipv6_prefix: u8) -> Result<Vec<u8>, DomainError> {
    let address = ClientAddress::parse(ip)?;
    let prefixes = EcsPrefixes::new(ipv4_prefix, ipv6_prefix);
    Ok(build_opt_for(&address, prefixes.for_address(&address)))
}

/// Builds the OPT record for an already classified address.
///
/// Layout:
/// ```text
/// 00            NAME (root)
/// 00 29         TYPE = OPT
/// 10 00         UDP payload size = 4096
/// 00 00 00 00   extended RCODE, version, flags
/// RDLENGTH(2)
/// 00 08 LEN(2) 00 FAMILY PREFIX 00 ADDRESS...
/// ```
/// The address is carried in full; it is not truncated to the prefix.
pub fn build_opt_for(address: &ClientAddress, source_prefix: u8) -> Vec<u8> {
    let octets = address.octets();
    let option_len = ECS_FIXED_LEN + octets.len();
    let rdlength = OPTION_HEADER_LEN + option_len;

    let mut record = Vec::with_capacity(OPT_HEADER_LEN + rdlength);
    record.push(0x00);
    record.extend_from_slice(&OPT_RR_TYPE.to_be_bytes());
    record.extend_from_slice(&EDNS_UDP_PAYLOAD.to_be_bytes());
    record.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
    record.extend_from_slice(&(rdlength as u16).to_be_bytes());

    record.extend_from_slice(&ECS_OPTION_CODE.to_be_bytes());
    record.extend_from_slice(&(option_len as u16).to_be_bytes());
    record.extend_from_slice(&address.family().to_be_bytes());
    record.push(source_prefix);
    record.push(0x00);
    record.extend_from_slice(octets);
    record
}
