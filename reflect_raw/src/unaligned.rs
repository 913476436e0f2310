use crate::Serializer;

/// Serializer which writes into a `Vec<u8>`.
///
/// Values are packed back to back with no padding, so are not aligned as
/// their types require.
#[derive(Debug, Default)]
pub struct UnalignedSerializer {
	buf: Vec<u8>,
}

impl UnalignedSerializer {
	/// Create new Serializer without allocating any memory for output buffer.
	/// Memory will be allocated when first value is serialized.
	pub fn new() -> Self {
		UnalignedSerializer { buf: Vec::new() }
	}

	/// Create new Serializer with buffer pre-allocated with capacity of
	/// `capacity` bytes.
	///
	/// [`serialized_size`](crate::serialized_size) gives the exact capacity
	/// needed for a value.
	pub fn with_capacity(capacity: usize) -> Self {
		UnalignedSerializer {
			buf: Vec::with_capacity(capacity),
		}
	}

	/// Create new Serializer which appends to `buf`.
	pub fn from_vec(buf: Vec<u8>) -> Self {
		UnalignedSerializer { buf }
	}

	/// Current capacity of output buffer.
	pub fn capacity(&self) -> usize {
		self.buf.capacity()
	}

	/// Consume Serializer and return the output buffer as a `Vec<u8>`.
	pub fn into_vec(self) -> Vec<u8> {
		self.buf
	}
}

impl Serializer for UnalignedSerializer {
	#[inline]
	fn push_bytes(&mut self, bytes: &[u8]) {
		self.buf.extend_from_slice(bytes);
	}

	#[inline]
	fn pos(&self) -> usize {
		self.buf.len()
	}
}
