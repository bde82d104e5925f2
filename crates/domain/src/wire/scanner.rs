use super::cursor::WireCursor;
use super::{HEADER_LEN, OPT_RR_TYPE};
use crate::errors::DomainError;

/// TYPE(2) + CLASS(2) + TTL(4) preceding RDLENGTH in a resource record.
const RR_FIXED_BEFORE_RDLENGTH: usize = 8;

/// QTYPE(2) + QCLASS(2) following a question name.
const QUESTION_TRAILER: usize = 4;

/// Section counts from the fixed DNS header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderCounts {
    pub questions: u16,
    pub answers: u16,
    pub authorities: u16,
    pub additionals: u16,
}

impl HeaderCounts {
    pub fn read(message: &[u8]) -> Result<Self, DomainError> {
        if message.len() < HEADER_LEN {
            return Err(DomainError::MalformedQuery(format!(
                "message is {} bytes, shorter than the {}-byte header",
                message.len(),
                HEADER_LEN
            )));
        }
        let mut cursor = WireCursor::at(message, 4)?;
        Ok(Self {
            questions: cursor.read_u16()?,
            answers: cursor.read_u16()?,
            authorities: cursor.read_u16()?,
            additionals: cursor.read_u16()?,
        })
    }
}

/// Returns the header plus question section and the offset where the answer
/// section starts.
///
/// `header_and_question ++ &message[offset..]` reproduces `message`.
pub fn split_header_and_question(message: &[u8]) -> Result<(&[u8], usize), DomainError> {
    let counts = HeaderCounts::read(message)?;
    let mut cursor = WireCursor::at(message, HEADER_LEN)?;
    skip_questions(&mut cursor, counts.questions)?;
    let offset = cursor.position();
    Ok((&message[..offset], offset))
}

/// Reports whether the additional section already carries an OPT record.
pub fn has_opt_record(message: &[u8]) -> Result<bool, DomainError> {
    let counts = HeaderCounts::read(message)?;
    if counts.additionals == 0 {
        return Ok(false);
    }

    let mut cursor = WireCursor::at(message, HEADER_LEN)?;
    skip_questions(&mut cursor, counts.questions)?;
    for _ in 0..counts.answers {
        skip_record(&mut cursor)?;
    }
    for _ in 0..counts.authorities {
        skip_record(&mut cursor)?;
    }

    for _ in 0..counts.additionals {
        let is_root = cursor.skip_name()?;
        let rr_type = cursor.read_u16()?;
        if is_root && rr_type == OPT_RR_TYPE {
            return Ok(true);
        }
        skip_after_type(&mut cursor)?;
    }

    Ok(false)
}

fn skip_questions(cursor: &mut WireCursor<'_>, count: u16) -> Result<(), DomainError> {
    for _ in 0..count {
        cursor.skip_name()?;
        cursor.skip(QUESTION_TRAILER)?;
    }
    Ok(())
}

fn skip_record(cursor: &mut WireCursor<'_>) -> Result<(), DomainError> {
    cursor.skip_name()?;
    cursor.skip(RR_FIXED_BEFORE_RDLENGTH)?;
    let rdlength = cursor.read_u16()?;
    cursor.skip(rdlength as usize)
}

/// Skips CLASS, TTL, RDLENGTH and RDATA once TYPE has been consumed.
fn skip_after_type(cursor: &mut WireCursor<'_>) -> Result<(), DomainError> {
    cursor.skip(RR_FIXED_BEFORE_RDLENGTH - 2)?;
    let rdlength = cursor.read_u16()?;
    cursor.skip(rdlength as usize)
}
