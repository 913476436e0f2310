use std::{any::type_name, marker::PhantomData};

use crate::{Deserialize, Deserializer, Error, Result, Serialize, Serializer};

impl<T: Serialize<S>, S: Serializer> Serialize<S> for Option<T> {
	#[inline]
	fn serialize_data(&self, serializer: &mut S) {
		serializer.push_presence(self.is_some());
		if let Some(value) = self {
			value.serialize_data(serializer);
		}
	}
}

impl<T: Deserialize> Deserialize for Option<T> {
	#[inline]
	fn deserialize_data<D: Deserializer>(deserializer: &mut D) -> Result<Self> {
		if deserializer.pull_presence()? {
			Ok(Some(T::deserialize_data(deserializer)?))
		} else {
			Ok(None)
		}
	}
}

impl<T, E, S> Serialize<S> for std::result::Result<T, E>
where
	T: Serialize<S>,
	E: Serialize<S>,
	S: Serializer,
{
	#[inline]
	fn serialize_data(&self, serializer: &mut S) {
		match self {
			Ok(value) => {
				serializer.push_variant(0);
				value.serialize_data(serializer);
			}
			Err(err) => {
				serializer.push_variant(1);
				err.serialize_data(serializer);
			}
		}
	}
}

impl<T: Deserialize, E: Deserialize> Deserialize for std::result::Result<T, E> {
	fn deserialize_data<D: Deserializer>(deserializer: &mut D) -> Result<Self> {
		match deserializer.pull_variant()? {
			0 => Ok(Ok(T::deserialize_data(deserializer)?)),
			1 => Ok(Err(E::deserialize_data(deserializer)?)),
			index => Err(Error::InvalidVariant {
				type_name: type_name::<Self>(),
				index,
			}),
		}
	}
}

impl<T: ?Sized, S: Serializer> Serialize<S> for PhantomData<T> {
	#[inline(always)]
	fn serialize_data(&self, _serializer: &mut S) {}
}

impl<T: ?Sized> Deserialize for PhantomData<T> {
	#[inline(always)]
	fn deserialize_data<D: Deserializer>(_deserializer: &mut D) -> Result<Self> {
		Ok(PhantomData)
	}
}
