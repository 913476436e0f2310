use std::{rc::Rc, str, sync::Arc};

use crate::{Deserialize, Deserializer, Result, Serialize, Serializer};

// Pointers are written as the value they point to. On reading, each pointer
// gets its own fresh allocation, so sharing between `Rc`s is not preserved.

impl<T, S> Serialize<S> for Box<T>
where
	T: Serialize<S> + ?Sized,
	S: Serializer,
{
	#[inline]
	fn serialize_data(&self, serializer: &mut S) {
		(**self).serialize_data(serializer);
	}
}

impl<T: Deserialize> Deserialize for Box<T> {
	#[inline]
	fn deserialize_data<D: Deserializer>(deserializer: &mut D) -> Result<Self> {
		Ok(Box::new(T::deserialize_data(deserializer)?))
	}
}

impl<T, S> Serialize<S> for Rc<T>
where
	T: Serialize<S> + ?Sized,
	S: Serializer,
{
	#[inline]
	fn serialize_data(&self, serializer: &mut S) {
		(**self).serialize_data(serializer);
	}
}

impl<T: Deserialize> Deserialize for Rc<T> {
	#[inline]
	fn deserialize_data<D: Deserializer>(deserializer: &mut D) -> Result<Self> {
		Ok(Rc::new(T::deserialize_data(deserializer)?))
	}
}

impl<T, S> Serialize<S> for Arc<T>
where
	T: Serialize<S> + ?Sized,
	S: Serializer,
{
	#[inline]
	fn serialize_data(&self, serializer: &mut S) {
		(**self).serialize_data(serializer);
	}
}

impl<T: Deserialize> Deserialize for Arc<T> {
	#[inline]
	fn deserialize_data<D: Deserializer>(deserializer: &mut D) -> Result<Self> {
		Ok(Arc::new(T::deserialize_data(deserializer)?))
	}
}

// References can be written, but not read back

impl<'a, T, S> Serialize<S> for &'a T
where
	T: Serialize<S> + ?Sized,
	S: Serializer,
{
	#[inline]
	fn serialize_data(&self, serializer: &mut S) {
		(**self).serialize_data(serializer);
	}
}

impl<'a, T, S> Serialize<S> for &'a mut T
where
	T: Serialize<S> + ?Sized,
	S: Serializer,
{
	#[inline]
	fn serialize_data(&self, serializer: &mut S) {
		(**self).serialize_data(serializer);
	}
}

impl<S: Serializer> Serialize<S> for str {
	#[inline]
	fn serialize_data(&self, serializer: &mut S) {
		serializer.push_len(self.len());
		serializer.push_bytes(self.as_bytes());
	}
}

impl<S: Serializer> Serialize<S> for String {
	#[inline]
	fn serialize_data(&self, serializer: &mut S) {
		self.as_str().serialize_data(serializer);
	}
}

impl Deserialize for String {
	fn deserialize_data<D: Deserializer>(deserializer: &mut D) -> Result<Self> {
		let len = deserializer.pull_len()?;
		let bytes = deserializer.pull_bytes(len)?;
		Ok(str::from_utf8(bytes)?.to_owned())
	}
}

impl Deserialize for Box<str> {
	#[inline]
	fn deserialize_data<D: Deserializer>(deserializer: &mut D) -> Result<Self> {
		Ok(String::deserialize_data(deserializer)?.into_boxed_str())
	}
}

// Unsized pointees are read into an owned buffer, then moved behind the pointer

impl Deserialize for Rc<str> {
	#[inline]
	fn deserialize_data<D: Deserializer>(deserializer: &mut D) -> Result<Self> {
		Ok(String::deserialize_data(deserializer)?.into())
	}
}

impl Deserialize for Arc<str> {
	#[inline]
	fn deserialize_data<D: Deserializer>(deserializer: &mut D) -> Result<Self> {
		Ok(String::deserialize_data(deserializer)?.into())
	}
}

impl<T: Deserialize> Deserialize for Rc<[T]> {
	#[inline]
	fn deserialize_data<D: Deserializer>(deserializer: &mut D) -> Result<Self> {
		Ok(Vec::<T>::deserialize_data(deserializer)?.into())
	}
}

impl<T: Deserialize> Deserialize for Arc<[T]> {
	#[inline]
	fn deserialize_data<D: Deserializer>(deserializer: &mut D) -> Result<Self> {
		Ok(Vec::<T>::deserialize_data(deserializer)?.into())
	}
}
