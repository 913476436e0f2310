use std::{mem, num};

use crate::{Error, Result};

mod private {
	pub trait Sealed {}
}

/// Fixed-size values written as their native-endian bytes.
///
/// Sealed. Implemented for integers, floats, `bool`, `char` and the
/// `NonZero*` integers.
pub trait Scalar: Copy + private::Sealed {
	type Bytes: AsRef<[u8]>;

	/// Size in bytes of the encoded value.
	const SIZE: usize;

	fn to_raw(self) -> Self::Bytes;

	/// Decode from exactly `SIZE` bytes, rejecting invalid bit patterns.
	fn from_raw(bytes: &[u8]) -> Result<Self>;
}

fn array<const N: usize>(bytes: &[u8]) -> Result<[u8; N]> {
	bytes.try_into().map_err(|_| Error::LengthMismatch {
		expected: N,
		actual: bytes.len(),
	})
}

macro_rules! impl_number {
	($($ty:ty),*) => {
		$(
			impl private::Sealed for $ty {}

			impl Scalar for $ty {
				type Bytes = [u8; mem::size_of::<$ty>()];
				const SIZE: usize = mem::size_of::<$ty>();

				#[inline]
				fn to_raw(self) -> Self::Bytes {
					self.to_ne_bytes()
				}

				#[inline]
				fn from_raw(bytes: &[u8]) -> Result<Self> {
					Ok(<$ty>::from_ne_bytes(array(bytes)?))
				}
			}
		)*
	};
}

impl_number!(u8, u16, u32, u64, u128, usize);
impl_number!(i8, i16, i32, i64, i128, isize);
impl_number!(f32, f64);

macro_rules! impl_non_zero {
	($($ty:ident => $inner:ty),*) => {
		$(
			impl private::Sealed for num::$ty {}

			impl Scalar for num::$ty {
				type Bytes = [u8; mem::size_of::<$inner>()];
				const SIZE: usize = mem::size_of::<$inner>();

				#[inline]
				fn to_raw(self) -> Self::Bytes {
					self.get().to_ne_bytes()
				}

				#[inline]
				fn from_raw(bytes: &[u8]) -> Result<Self> {
					let value = <$inner>::from_ne_bytes(array(bytes)?);
					num::$ty::new(value).ok_or(Error::InvalidNonZero(stringify!($ty)))
				}
			}
		)*
	};
}

impl_non_zero!(
	NonZeroU8 => u8,
	NonZeroU16 => u16,
	NonZeroU32 => u32,
	NonZeroU64 => u64,
	NonZeroU128 => u128,
	NonZeroUsize => usize,
	NonZeroI8 => i8,
	NonZeroI16 => i16,
	NonZeroI32 => i32,
	NonZeroI64 => i64,
	NonZeroI128 => i128,
	NonZeroIsize => isize
);

impl private::Sealed for bool {}

impl Scalar for bool {
	type Bytes = [u8; 1];
	const SIZE: usize = 1;

	#[inline]
	fn to_raw(self) -> [u8; 1] {
		[self as u8]
	}

	#[inline]
	fn from_raw(bytes: &[u8]) -> Result<Self> {
		match array::<1>(bytes)? {
			[0] => Ok(false),
			[1] => Ok(true),
			[byte] => Err(Error::InvalidBool(byte)),
		}
	}
}

impl private::Sealed for char {}

impl Scalar for char {
	type Bytes = [u8; 4];
	const SIZE: usize = 4;

	#[inline]
	fn to_raw(self) -> [u8; 4] {
		u32::from(self).to_ne_bytes()
	}

	#[inline]
	fn from_raw(bytes: &[u8]) -> Result<Self> {
		let code = u32::from_ne_bytes(array(bytes)?);
		char::from_u32(code).ok_or(Error::InvalidChar(code))
	}
}

#[cfg(test)]
mod tests {
	use std::num::NonZeroU16;

	use super::*;

	#[test]
	fn bool_rejects_other_bytes() {
		assert_eq!(bool::from_raw(&[1]), Ok(true));
		assert_eq!(bool::from_raw(&[2]), Err(Error::InvalidBool(2)));
	}

	#[test]
	fn char_rejects_surrogates() {
		let raw = 0xD800u32.to_ne_bytes();
		assert_eq!(char::from_raw(&raw), Err(Error::InvalidChar(0xD800)));
		assert_eq!(char::from_raw(&'*'.to_raw()), Ok('*'));
	}

	#[test]
	fn non_zero_rejects_zero() {
		assert_eq!(
			NonZeroU16::from_raw(&[0, 0]),
			Err(Error::InvalidNonZero("NonZeroU16"))
		);
	}

	#[test]
	fn wrong_length() {
		assert_eq!(
			u32::from_raw(&[1, 2]),
			Err(Error::LengthMismatch { expected: 4, actual: 2 })
		);
	}
}
