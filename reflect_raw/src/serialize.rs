use crate::{Result, Serializer};

/// Trait for types which can be serialized.
///
/// Implement with `#[derive(Serialize)]`, or by hand by pushing each part of
/// the value to `serializer` in a fixed order.
pub trait Serialize<S: Serializer> {
	fn serialize_data(&self, serializer: &mut S);

	/// Serialize every element of `slice`, without a length prefix.
	#[inline]
	fn serialize_slice(slice: &[Self], serializer: &mut S)
	where Self: Sized {
		for value in slice {
			value.serialize_data(serializer);
		}
	}
}

/// Trait for use with `#[ser_with]`.
///
/// Serializes a `T` on its behalf, for field types which do not implement
/// [`Serialize`] themselves.
pub trait SerializeWith<T: ?Sized, S: Serializer> {
	fn serialize_data_with(value: &T, serializer: &mut S);
}

/// Serialization of individual fields, selected by declaration index.
pub trait SerializeFields<S: Serializer>: Serialize<S> {
	/// Serialize field `index` alone.
	///
	/// Fails with [`Error::FieldIndexOutOfRange`](crate::Error::FieldIndexOutOfRange)
	/// if there is no such field.
	fn serialize_field(&self, index: usize, serializer: &mut S) -> Result<()>;
}
