//! Decode errors for PCF buffer processing
//!
//! Every failure is local to one decode or skip call. Variants carry enough
//! buffer context (offset, bytes needed, bytes remaining) to diagnose a
//! malformed message from a log line alone.

use std::io;
use thiserror::Error;

/// PCF decoding errors with diagnostic context
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Not enough bytes left for a header or a declared structure length
    #[error("Premature end of buffer: need {need} bytes at offset {offset}, {remaining} remaining (context: {context})")]
    MalformedBuffer {
        need: usize,
        remaining: usize,
        offset: usize,
        context: String,
    },

    /// StrucLength smaller than the fixed part of the declared element kind
    #[error("Invalid structure length {struct_length} for element type {element_type} at offset {offset}: minimum is {minimum}")]
    InvalidStructLength {
        struct_length: usize,
        minimum: usize,
        element_type: i32,
        offset: usize,
    },

    /// Group recursion deeper than the configured guard
    #[error("Group nesting exceeds {limit} levels at offset {offset}")]
    NestingTooDeep { limit: usize, offset: usize },

    /// Payload storage could not be reserved
    #[error("Cannot allocate {bytes} bytes for {context}")]
    AllocationFailure { bytes: usize, context: String },

    /// The output sink rejected rendered text
    #[error("Output sink failed: {0}")]
    Sink(#[from] io::Error),
}

impl DecodeError {
    pub fn premature_end(
        need: usize,
        remaining: usize,
        offset: usize,
        context: impl Into<String>,
    ) -> Self {
        Self::MalformedBuffer {
            need,
            remaining,
            offset,
            context: context.into(),
        }
    }

    pub fn invalid_struct_length(
        struct_length: usize,
        minimum: usize,
        element_type: i32,
        offset: usize,
    ) -> Self {
        Self::InvalidStructLength {
            struct_length,
            minimum,
            element_type,
            offset,
        }
    }

    pub fn nesting_too_deep(limit: usize, offset: usize) -> Self {
        Self::NestingTooDeep { limit, offset }
    }

    pub fn allocation_failure(bytes: usize, context: impl Into<String>) -> Self {
        Self::AllocationFailure {
            bytes,
            context: context.into(),
        }
    }

    /// True for the malformed-input family: the buffer cannot be interpreted
    /// further, but nothing outside this decode call is affected.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::MalformedBuffer { .. }
                | Self::InvalidStructLength { .. }
                | Self::NestingTooDeep { .. }
        )
    }
}

/// Result type for decode operations
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;
