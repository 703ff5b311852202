//! Byte order of 32/64-bit fields
//!
//! PCF buffers are written in the producing queue manager's native integer
//! encoding. Readers never reinterpret memory as structs; every field goes
//! through one of these explicit conversions.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use super::constants::{MQENC_INTEGER_MASK, MQENC_INTEGER_REVERSED};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "lowercase"))]
pub enum Encoding {
    /// Reversed integers (x86, most distributed platforms)
    #[default]
    Little,
    /// Normal integers (z/OS, IBM i, AIX)
    Big,
}

impl Encoding {
    /// Encoding of the running process
    pub fn native() -> Self {
        if cfg!(target_endian = "big") {
            Encoding::Big
        } else {
            Encoding::Little
        }
    }

    /// Map an MQENC_* value (as carried in a message descriptor) to a byte order
    pub fn from_mqenc(encoding: i32) -> Self {
        if encoding & MQENC_INTEGER_MASK == MQENC_INTEGER_REVERSED {
            Encoding::Little
        } else {
            Encoding::Big
        }
    }

    /// `bytes` must hold at least 4 bytes; callers bounds-check first.
    #[inline]
    pub fn read_i32(self, bytes: &[u8]) -> i32 {
        match self {
            Encoding::Little => LittleEndian::read_i32(bytes),
            Encoding::Big => BigEndian::read_i32(bytes),
        }
    }

    #[inline]
    pub fn read_u32(self, bytes: &[u8]) -> u32 {
        match self {
            Encoding::Little => LittleEndian::read_u32(bytes),
            Encoding::Big => BigEndian::read_u32(bytes),
        }
    }

    #[inline]
    pub fn read_i64(self, bytes: &[u8]) -> i64 {
        match self {
            Encoding::Little => LittleEndian::read_i64(bytes),
            Encoding::Big => BigEndian::read_i64(bytes),
        }
    }

    pub fn put_i32(self, buffer: &mut Vec<u8>, value: i32) {
        let mut field = [0u8; 4];
        match self {
            Encoding::Little => LittleEndian::write_i32(&mut field, value),
            Encoding::Big => BigEndian::write_i32(&mut field, value),
        }
        buffer.extend_from_slice(&field);
    }

    pub fn put_u32(self, buffer: &mut Vec<u8>, value: u32) {
        let mut field = [0u8; 4];
        match self {
            Encoding::Little => LittleEndian::write_u32(&mut field, value),
            Encoding::Big => BigEndian::write_u32(&mut field, value),
        }
        buffer.extend_from_slice(&field);
    }

    pub fn put_i64(self, buffer: &mut Vec<u8>, value: i64) {
        let mut field = [0u8; 8];
        match self {
            Encoding::Little => LittleEndian::write_i64(&mut field, value),
            Encoding::Big => BigEndian::write_i64(&mut field, value),
        }
        buffer.extend_from_slice(&field);
    }
}
