//! Structural reflection and binary serialization for plain structs.
//!
//! * [`Cons`] / [`Nil`] form a fixed-arity heterogeneous [`Record`].
//! * [`Reflect`] (usually derived) exposes a struct's fields as a `Record`
//!   type, with per-field offsets and accessors.
//! * [`Serialize`] / [`Deserialize`] (usually derived) write and read any
//!   nesting of records, tuples, reflected structs and std containers to a
//!   flat byte buffer.
//!
//! ```
//! use reflect_raw::{Deserialize, Reflect, Serialize};
//!
//! #[derive(Reflect, Serialize, Deserialize, Debug, PartialEq)]
//! struct X {
//! 	f: f32,
//! 	s: String,
//! }
//!
//! let x = X { f: 18.47, s: "stateful".to_string() };
//! assert_eq!(X::FIELD_COUNT, 2);
//!
//! let bytes = reflect_raw::marshal(&x);
//! let out: X = reflect_raw::unmarshal(&bytes).unwrap();
//! assert_eq!(out, x);
//! ```

// Derived impls name this crate as `::reflect_raw`, including from within it
extern crate self as reflect_raw;

#[cfg(feature = "derive")]
pub use reflect_raw_derive::{Deserialize, Reflect, Serialize};

mod error;
pub use error::{Error, Result};

mod index;
pub use index::{Get, Here, Index, Peano, Pick, There, ToPeano};

mod record;
pub use record::{
	Assign, Cloned, Concat, Cons, Ignore, Nil, Record, RecordFrom, SwapPrefix, WriteThrough,
};

mod tuple;
pub use tuple::{IntoRecord, IntoTuple};

mod traverse;
pub use traverse::{
	apply, for_each, zip, zip3, zip_all, Apply, Columns, ForEach, PrependColumns, Visit, Zip, Zip3,
	ZipAll,
};

mod field;
pub use field::{FieldDescriptor, FieldPtr};

mod reflect;
pub use reflect::{arity, FieldAt, Reflect};

mod convert;
pub use convert::{
	apply_fields, field, field_mut, field_ptr, fill, fill_from, for_each_field, for_each_field_mut,
	pick_field, pick_field_mut, tie_tuple, to_record, to_tuple, zip_fields,
};

pub mod cmp;
pub mod layout;

mod registry;
pub use registry::{field_table, FieldTable};

mod scalar;
pub use scalar::Scalar;

mod serialize;
pub use serialize::{Serialize, SerializeFields, SerializeWith};

mod serializer;
pub use serializer::Serializer;

mod unaligned;
pub use unaligned::UnalignedSerializer;

mod size;
pub use size::SizeSerializer;

mod deserialize;
pub use deserialize::{Deserialize, DeserializeFields, DeserializeWith};

mod deserializer;
pub use deserializer::{Deserializer, SliceDeserializer};

mod impls;
pub mod util;

/// Serialize a value into a freshly allocated buffer.
pub fn marshal<T>(value: &T) -> Vec<u8>
where T: Serialize<UnalignedSerializer> + ?Sized {
	let mut serializer = UnalignedSerializer::new();
	serializer.serialize_value(value);
	let mut vec = serializer.into_vec();
	vec.shrink_to_fit();
	tracing::trace!(
		type_name = std::any::type_name::<T>(),
		len = vec.len(),
		"marshalled value"
	);
	vec
}

/// Serialize a value, appending to the end of an existing buffer.
pub fn marshal_into<T>(value: &T, buf: &mut Vec<u8>)
where T: Serialize<UnalignedSerializer> + ?Sized {
	let mut serializer = UnalignedSerializer::from_vec(std::mem::take(buf));
	serializer.serialize_value(value);
	*buf = serializer.into_vec();
}

/// Serialize only the fields at `indices`, in the order given.
///
/// The buffer carries no field tags. It can only be read back with
/// [`unmarshal_fields`] given the identical selection.
pub fn marshal_fields<T, I>(value: &T, indices: I) -> Result<Vec<u8>>
where
	T: SerializeFields<UnalignedSerializer>,
	I: IntoIterator<Item = usize>,
{
	let mut serializer = UnalignedSerializer::new();
	for index in indices {
		value.serialize_field(index, &mut serializer)?;
	}
	Ok(serializer.into_vec())
}

/// Number of bytes [`marshal`] would produce for `value`.
pub fn serialized_size<T>(value: &T) -> usize
where T: Serialize<SizeSerializer> + ?Sized {
	let mut serializer = SizeSerializer::new();
	serializer.serialize_value(value);
	serializer.size()
}

/// Deserialize a value from `bytes`, which must be consumed exactly.
pub fn unmarshal<T: Deserialize>(bytes: &[u8]) -> Result<T> {
	let (value, consumed) = unmarshal_prefix(bytes)?;
	if consumed != bytes.len() {
		tracing::trace!(
			type_name = std::any::type_name::<T>(),
			consumed,
			len = bytes.len(),
			"trailing bytes after value"
		);
		return Err(Error::TrailingBytes(bytes.len() - consumed));
	}
	Ok(value)
}

/// Deserialize a value from the start of `bytes`.
///
/// Returns the value and the number of bytes it occupied.
pub fn unmarshal_prefix<T: Deserialize>(bytes: &[u8]) -> Result<(T, usize)> {
	let mut deserializer = SliceDeserializer::new(bytes);
	let value = deserializer.deserialize_value::<T>()?;
	tracing::trace!(
		type_name = std::any::type_name::<T>(),
		consumed = deserializer.pos(),
		"unmarshalled value"
	);
	Ok((value, deserializer.pos()))
}

/// Deserialize `bytes` over an existing value.
pub fn unmarshal_into<T: Deserialize>(target: &mut T, bytes: &[u8]) -> Result<()> {
	let mut deserializer = SliceDeserializer::new(bytes);
	target.deserialize_in_place(&mut deserializer)?;
	match deserializer.remaining() {
		0 => Ok(()),
		remaining => Err(Error::TrailingBytes(remaining)),
	}
}

/// Read back a buffer written by [`marshal_fields`].
///
/// Fields not in `indices` are left as `T::default()`.
pub fn unmarshal_fields<T, I>(bytes: &[u8], indices: I) -> Result<T>
where
	T: DeserializeFields + Default,
	I: IntoIterator<Item = usize>,
{
	let mut value = T::default();
	unmarshal_fields_into(&mut value, bytes, indices)?;
	Ok(value)
}

/// Read back a buffer written by [`marshal_fields`] into an existing value.
///
/// Fields not in `indices` are untouched.
pub fn unmarshal_fields_into<T, I>(target: &mut T, bytes: &[u8], indices: I) -> Result<()>
where
	T: DeserializeFields,
	I: IntoIterator<Item = usize>,
{
	let mut deserializer = SliceDeserializer::new(bytes);
	for index in indices {
		target.deserialize_field(index, &mut deserializer)?;
	}
	match deserializer.remaining() {
		0 => Ok(()),
		remaining => Err(Error::TrailingBytes(remaining)),
	}
}
