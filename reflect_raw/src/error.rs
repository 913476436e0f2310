use std::str::Utf8Error;

use thiserror::Error;

/// Result type for fallible operations in this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced while reading a buffer, or when selecting fields by index.
///
/// Writing never fails. Buffers are trusted to have been produced by
/// serializing the same type, so these errors only report input which could
/// not be turned into a valid Rust value at all.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
	#[error("unexpected end of input: needed {needed} bytes, {remaining} remaining")]
	UnexpectedEnd { needed: usize, remaining: usize },
	#[error("invalid bool byte: {0:#04x}")]
	InvalidBool(u8),
	#[error("invalid char: {0:#x}")]
	InvalidChar(u32),
	#[error("zero value for non-zero integer type `{0}`")]
	InvalidNonZero(&'static str),
	#[error("invalid UTF-8 in string: {0}")]
	InvalidUtf8(#[from] Utf8Error),
	#[error("invalid presence byte: {0:#04x}")]
	InvalidPresence(u8),
	#[error("invalid variant index {index} for `{type_name}`")]
	InvalidVariant { type_name: &'static str, index: u32 },
	#[error("length mismatch: expected {expected}, got {actual}")]
	LengthMismatch { expected: usize, actual: usize },
	#[error("{0} trailing bytes after value")]
	TrailingBytes(usize),
	#[error("field index {index} out of range for type with {count} fields")]
	FieldIndexOutOfRange { index: usize, count: usize },
}
