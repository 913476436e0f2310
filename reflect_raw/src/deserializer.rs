use crate::{Deserialize, Error, Result, Scalar};

/// Source of bytes for [`Deserialize`] impls.
pub trait Deserializer: Sized {
	/// Deserialize a value. The entry point which user will call.
	#[inline]
	fn deserialize_value<T: Deserialize>(&mut self) -> Result<T> {
		T::deserialize_data(self)
	}

	/// Take the next `len` bytes of input.
	fn pull_bytes(&mut self, len: usize) -> Result<&[u8]>;

	/// Number of bytes consumed so far.
	fn pos(&self) -> usize;

	/// Number of bytes left unread.
	fn remaining(&self) -> usize;

	#[inline]
	fn pull_raw<T: Scalar>(&mut self) -> Result<T> {
		T::from_raw(self.pull_bytes(T::SIZE)?)
	}

	#[inline]
	fn pull_len(&mut self) -> Result<usize> {
		self.pull_raw()
	}

	#[inline]
	fn pull_presence(&mut self) -> Result<bool> {
		match self.pull_raw::<u8>()? {
			0 => Ok(false),
			1 => Ok(true),
			byte => Err(Error::InvalidPresence(byte)),
		}
	}

	#[inline]
	fn pull_variant(&mut self) -> Result<u32> {
		self.pull_raw()
	}
}

/// Deserializer reading from a byte slice.
#[derive(Clone, Debug)]
pub struct SliceDeserializer<'de> {
	buf: &'de [u8],
	pos: usize,
}

impl<'de> SliceDeserializer<'de> {
	pub fn new(buf: &'de [u8]) -> Self {
		SliceDeserializer { buf, pos: 0 }
	}
}

impl<'de> Deserializer for SliceDeserializer<'de> {
	fn pull_bytes(&mut self, len: usize) -> Result<&[u8]> {
		let remaining = self.remaining();
		if len > remaining {
			return Err(Error::UnexpectedEnd {
				needed: len,
				remaining,
			});
		}
		let bytes = &self.buf[self.pos..self.pos + len];
		self.pos += len;
		Ok(bytes)
	}

	#[inline]
	fn pos(&self) -> usize {
		self.pos
	}

	#[inline]
	fn remaining(&self) -> usize {
		self.buf.len() - self.pos
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn pull_past_end() {
		let mut deserializer = SliceDeserializer::new(&[1, 2, 3]);
		assert_eq!(deserializer.pull_bytes(2), Ok(&[1u8, 2][..]));
		assert_eq!(
			deserializer.pull_bytes(2),
			Err(Error::UnexpectedEnd {
				needed: 2,
				remaining: 1
			})
		);
		assert_eq!(deserializer.pos(), 2);
	}

	#[test]
	fn presence_byte() {
		let mut deserializer = SliceDeserializer::new(&[0, 1, 2]);
		assert_eq!(deserializer.pull_presence(), Ok(false));
		assert_eq!(deserializer.pull_presence(), Ok(true));
		assert_eq!(deserializer.pull_presence(), Err(Error::InvalidPresence(2)));
	}
}
