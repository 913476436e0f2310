use crate::{Scalar, Serializer};

/// Serializer which only counts bytes, to size a buffer before writing.
#[derive(Debug, Default)]
pub struct SizeSerializer {
	size: usize,
}

impl SizeSerializer {
	pub fn new() -> Self {
		SizeSerializer { size: 0 }
	}

	/// Number of bytes counted so far.
	pub fn size(&self) -> usize {
		self.size
	}
}

impl Serializer for SizeSerializer {
	#[inline]
	fn push_bytes(&mut self, bytes: &[u8]) {
		self.size += bytes.len();
	}

	#[inline]
	fn pos(&self) -> usize {
		self.size
	}

	#[inline]
	fn push_raw<T: Scalar>(&mut self, _value: T) {
		self.size += T::SIZE;
	}
}
