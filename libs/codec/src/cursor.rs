//! Bounds-checked Buffer Cursor
//!
//! A `Cursor` is a window `[position, end)` over a borrowed buffer. Every read
//! checks the window before advancing, so "premature end of buffer" is
//! detected in one place instead of at each call site. Positions are always
//! absolute offsets into the original buffer, including for sub-cursors
//! created with [`Cursor::take`], so error offsets point at the real bytes.

use pcf_types::Encoding;

use crate::error::{DecodeError, DecodeResult};

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    data: &'a [u8],
    position: usize,
    end: usize,
    encoding: Encoding,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8], encoding: Encoding) -> Self {
        Self {
            data,
            position: 0,
            end: data.len(),
            encoding,
        }
    }

    /// Absolute offset of the next unread byte
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.end - self.position
    }

    pub fn is_empty(&self) -> bool {
        self.position == self.end
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Unread bytes in the window
    pub fn as_slice(&self) -> &'a [u8] {
        &self.data[self.position..self.end]
    }

    /// Fail with MalformedBuffer unless `need` bytes are available
    pub fn ensure(&self, need: usize, context: &str) -> DecodeResult<()> {
        if need > self.remaining() {
            return Err(DecodeError::premature_end(
                need,
                self.remaining(),
                self.position,
                context,
            ));
        }
        Ok(())
    }

    pub fn read_bytes(&mut self, len: usize, context: &str) -> DecodeResult<&'a [u8]> {
        self.ensure(len, context)?;
        let bytes = &self.data[self.position..self.position + len];
        self.position += len;
        Ok(bytes)
    }

    pub fn read_i32(&mut self, context: &str) -> DecodeResult<i32> {
        let bytes = self.read_bytes(4, context)?;
        Ok(self.encoding.read_i32(bytes))
    }

    pub fn read_u32(&mut self, context: &str) -> DecodeResult<u32> {
        let bytes = self.read_bytes(4, context)?;
        Ok(self.encoding.read_u32(bytes))
    }

    pub fn read_i64(&mut self, context: &str) -> DecodeResult<i64> {
        let bytes = self.read_bytes(8, context)?;
        Ok(self.encoding.read_i64(bytes))
    }

    /// Read a 32-bit field at `offset` bytes past the position without advancing
    pub fn peek_i32_at(&self, offset: usize, context: &str) -> DecodeResult<i32> {
        self.ensure(offset.saturating_add(4), context)?;
        let start = self.position + offset;
        Ok(self.encoding.read_i32(&self.data[start..start + 4]))
    }

    pub fn peek_u32_at(&self, offset: usize, context: &str) -> DecodeResult<u32> {
        self.ensure(offset.saturating_add(4), context)?;
        let start = self.position + offset;
        Ok(self.encoding.read_u32(&self.data[start..start + 4]))
    }

    pub fn advance(&mut self, len: usize, context: &str) -> DecodeResult<()> {
        self.ensure(len, context)?;
        self.position += len;
        Ok(())
    }

    /// Split off the next `len` bytes as their own cursor and advance past them.
    ///
    /// The parent is untouched when the split fails.
    pub fn take(&mut self, len: usize, context: &str) -> DecodeResult<Cursor<'a>> {
        self.ensure(len, context)?;
        let sub = Cursor {
            data: self.data,
            position: self.position,
            end: self.position + len,
            encoding: self.encoding,
        };
        self.position += len;
        Ok(sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_advance_and_check() {
        let data = [1, 0, 0, 0, 2, 0, 0, 0, 0xFF];
        let mut cursor = Cursor::new(&data, Encoding::Little);

        assert_eq!(cursor.read_i32("first").unwrap(), 1);
        assert_eq!(cursor.read_u32("second").unwrap(), 2);
        assert_eq!(cursor.position(), 8);
        assert_eq!(cursor.remaining(), 1);

        let err = cursor.read_i32("third").unwrap_err();
        match err {
            DecodeError::MalformedBuffer {
                need,
                remaining,
                offset,
                ..
            } => {
                assert_eq!(need, 4);
                assert_eq!(remaining, 1);
                assert_eq!(offset, 8);
            }
            other => panic!("unexpected error {:?}", other),
        }
        // Failed read leaves the cursor where it was
        assert_eq!(cursor.position(), 8);
    }

    #[test]
    fn test_take_is_windowed_with_absolute_offsets() {
        let data: Vec<u8> = (0u8..16).collect();
        let mut cursor = Cursor::new(&data, Encoding::Big);
        cursor.advance(4, "skip").unwrap();

        let mut sub = cursor.take(8, "window").unwrap();
        assert_eq!(cursor.position(), 12);
        assert_eq!(sub.position(), 4);
        assert_eq!(sub.remaining(), 8);
        assert_eq!(sub.read_bytes(8, "all").unwrap(), &data[4..12]);
        assert!(sub.read_bytes(1, "past window").is_err());

        assert!(cursor.take(5, "too long").is_err());
        assert_eq!(cursor.position(), 12);
    }

    #[test]
    fn test_peek_does_not_advance() {
        let data = [0, 0, 0, 5, 0, 0, 0, 9];
        let cursor = Cursor::new(&data, Encoding::Big);
        assert_eq!(cursor.peek_i32_at(4, "peek").unwrap(), 9);
        assert_eq!(cursor.peek_u32_at(0, "peek").unwrap(), 5);
        assert!(cursor.peek_i32_at(6, "peek").is_err());
        assert!(cursor.peek_i32_at(usize::MAX, "peek").is_err());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_read_i64() {
        let mut data = Vec::new();
        Encoding::Little.put_i64(&mut data, -42);
        let mut cursor = Cursor::new(&data, Encoding::Little);
        assert_eq!(cursor.read_i64("value").unwrap(), -42);
        assert!(cursor.is_empty());
    }
}
