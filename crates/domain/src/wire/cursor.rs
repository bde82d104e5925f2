use crate::errors::DomainError;

/// Length-checked read cursor over a DNS message.
///
/// Every advance is validated against the buffer length; running past the end
/// yields `MalformedQuery` with the offending offset.
#[derive(Debug, Clone)]
pub struct WireCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn at(buf: &'a [u8], pos: usize) -> Result<Self, DomainError> {
        if pos > buf.len() {
            return Err(out_of_bounds(pos, 0, buf.len()));
        }
        Ok(Self { buf, pos })
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn peek_u8(&self) -> Result<u8, DomainError> {
        self.buf
            .get(self.pos)
            .copied()
            .ok_or_else(|| out_of_bounds(self.pos, 1, self.buf.len()))
    }

    pub fn read_u8(&mut self) -> Result<u8, DomainError> {
        let value = self.peek_u8()?;
        self.pos += 1;
        Ok(value)
    }

    pub fn read_u16(&mut self) -> Result<u16, DomainError> {
        let bytes = self.take(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn take(&mut self, len: usize) -> Result<&'a [u8], DomainError> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|end| *end <= self.buf.len())
            .ok_or_else(|| out_of_bounds(self.pos, len, self.buf.len()))?;
        let slice = &self.buf[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    pub fn skip(&mut self, len: usize) -> Result<(), DomainError> {
        self.take(len).map(|_| ())
    }

    /// Skips an owner name: labels up to the zero terminator, or up to and
    /// including a two-byte compression pointer.
    ///
    /// Returns `true` when the name was the root (a single zero byte).
    pub fn skip_name(&mut self) -> Result<bool, DomainError> {
        let start = self.pos;
        loop {
            let len = self.read_u8()?;
            match len & 0xC0 {
                0x00 if len == 0 => return Ok(self.pos == start + 1),
                0x00 => self.skip(len as usize)?,
                0xC0 => {
                    self.skip(1)?;
                    return Ok(false);
                }
                _ => {
                    return Err(DomainError::MalformedQuery(format!(
                        "unsupported label type 0x{:02x} at offset {}",
                        len,
                        self.pos - 1
                    )))
                }
            }
        }
    }
}

fn out_of_bounds(pos: usize, wanted: usize, len: usize) -> DomainError {
    DomainError::MalformedQuery(format!(
        "read of {} bytes at offset {} exceeds message length {}",
        wanted, pos, len
    ))
}
