use super::HEADER_LEN;
use crate::errors::DomainError;

/// Value the legacy proxy wrote into byte 3 (low byte of FLAGS).
const LEGACY_FLAGS_LOW_BYTE: u8 = 32;

/// Appends a synthetic OPT record to a header + question prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageRewriter {
    legacy_flags_rewrite: bool,
}

impl MessageRewriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reproduces the deployed proxy's output byte for byte, including the
    /// overwrite of the low FLAGS byte. Only for upstreams that were tuned to
    /// that output.
    pub fn with_legacy_flags_rewrite(mut self, enabled: bool) -> Self {
        self.legacy_flags_rewrite = enabled;
        self
    }

    /// Concatenates `header_and_question` with `opt_record`.
    ///
    /// Answer and authority sections are not part of the input, so ANCOUNT and
    /// NSCOUNT become 0 and ARCOUNT becomes 1.
    pub fn splice_opt(
        &self,
        header_and_question: &[u8],
        opt_record: &[u8],
    ) -> Result<Vec<u8>, DomainError> {
        if header_and_question.len() < HEADER_LEN {
            return Err(DomainError::MalformedQuery(format!(
                "cannot splice OPT record into {} byte prefix",
                header_and_question.len()
            )));
        }

        let mut message = Vec::with_capacity(header_and_question.len() + opt_record.len());
        message.extend_from_slice(header_and_question);
        message.extend_from_slice(opt_record);

        message[6..8].copy_from_slice(&0u16.to_be_bytes());
        message[8..10].copy_from_slice(&0u16.to_be_bytes());
        message[10..12].copy_from_slice(&1u16.to_be_bytes());

        if self.legacy_flags_rewrite {
            message[3] = LEGACY_FLAGS_LOW_BYTE;
        }

        Ok(message)
    }
}
