use crate::{Scalar, Serialize};

/// Serializers implement this trait.
pub trait Serializer: Sized {
	/// Serialize a value and all its dependencies.
	///
	/// The entry point for serializing, which user will call.
	#[inline]
	fn serialize_value<T: Serialize<Self> + ?Sized>(&mut self, value: &T) {
		value.serialize_data(self);
	}

	/// Push raw bytes to output.
	fn push_bytes(&mut self, bytes: &[u8]);

	/// Number of bytes written so far.
	fn pos(&self) -> usize;

	/// Push a scalar as its native-endian bytes.
	#[inline]
	fn push_raw<T: Scalar>(&mut self, value: T) {
		self.push_bytes(value.to_raw().as_ref());
	}

	/// Push length prefix of a sequence, map, set or string.
	#[inline]
	fn push_len(&mut self, len: usize) {
		self.push_raw(len);
	}

	/// Push presence flag of an `Option`.
	#[inline]
	fn push_presence(&mut self, present: bool) {
		self.push_raw(u8::from(present));
	}

	/// Push index of an enum variant.
	#[inline]
	fn push_variant(&mut self, index: u32) {
		self.push_raw(index);
	}
}
