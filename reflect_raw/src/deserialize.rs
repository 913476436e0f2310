use crate::{Deserializer, Result};

/// Trait for types which can be deserialized.
///
/// Implement with `#[derive(Deserialize)]`. Reads must mirror the order in
/// which the type's [`Serialize`](crate::Serialize) impl writes.
pub trait Deserialize: Sized {
	fn deserialize_data<D: Deserializer>(deserializer: &mut D) -> Result<Self>;

	/// Deserialize over an existing value.
	///
	/// On error, `self` may be left partially overwritten.
	#[inline]
	fn deserialize_in_place<D: Deserializer>(&mut self, deserializer: &mut D) -> Result<()> {
		*self = Self::deserialize_data(deserializer)?;
		Ok(())
	}

	/// Deserialize `len` consecutive values.
	fn deserialize_vec<D: Deserializer>(len: usize, deserializer: &mut D) -> Result<Vec<Self>> {
		// Every element occupies at least a byte, except ZSTs
		let mut vec = Vec::with_capacity(len.min(deserializer.remaining()));
		for _ in 0..len {
			vec.push(Self::deserialize_data(deserializer)?);
		}
		Ok(vec)
	}
}

/// Trait for use with `#[ser_with]`. Counterpart of
/// [`SerializeWith`](crate::SerializeWith).
pub trait DeserializeWith<T> {
	fn deserialize_data_with<D: Deserializer>(deserializer: &mut D) -> Result<T>;
}

/// Deserialization of individual fields, selected by declaration index.
pub trait DeserializeFields: Deserialize {
	/// Read field `index` into `self`, leaving other fields unchanged.
	fn deserialize_field<D: Deserializer>(&mut self, index: usize, deserializer: &mut D)
		-> Result<()>;
}
