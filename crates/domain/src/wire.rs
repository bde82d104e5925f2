//! Minimal DNS wire-format handling for ECS injection.
//!
//! Only the parts of RFC 1035 / RFC 6891 / RFC 7871 needed to find the end of
//! the question section, detect an existing OPT record and append a synthetic
//! one. Every byte access goes through [`WireCursor`], so malformed input
//! surfaces as [`DomainError::MalformedQuery`](crate::DomainError::MalformedQuery).

pub mod cursor;
pub mod ecs;
pub mod rewriter;
pub mod scanner;

pub use cursor::WireCursor;
pub use ecs::{build_opt, build_opt_for, EcsPrefixes};
pub use rewriter::MessageRewriter;
pub use scanner::{has_opt_record, split_header_and_question, HeaderCounts};

/// Fixed size of the DNS message header.
pub const HEADER_LEN: usize = 12;

/// RR TYPE of the EDNS0 OPT pseudo-record.
pub const OPT_RR_TYPE: u16 = 41;

/// EDNS0 option code for Client Subnet.
pub const ECS_OPTION_CODE: u16 = 8;

/// UDP payload size advertised by the synthetic OPT record.
pub const EDNS_UDP_PAYLOAD: u16 = 4096;
