use std::{
	collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque},
	hash::{BuildHasher, Hash},
};

use crate::{Deserialize, Deserializer, Error, Result, Serialize, Serializer};

// Every collection is written as its element count followed by each element.
// Maps write each key followed by its value.

/// Serialize count then elements.
#[inline]
fn serialize_iter<'a, T, S, I>(iter: I, serializer: &mut S)
where
	T: Serialize<S> + 'a,
	S: Serializer,
	I: ExactSizeIterator<Item = &'a T>,
{
	serializer.push_len(iter.len());
	for value in iter {
		value.serialize_data(serializer);
	}
}

/// Serialize count then key-value pairs.
#[inline]
fn serialize_entries<'a, K, V, S, I>(iter: I, serializer: &mut S)
where
	K: Serialize<S> + 'a,
	V: Serialize<S> + 'a,
	S: Serializer,
	I: ExactSizeIterator<Item = (&'a K, &'a V)>,
{
	serializer.push_len(iter.len());
	for (key, value) in iter {
		key.serialize_data(serializer);
		value.serialize_data(serializer);
	}
}

/// Read count, then rebuild the collection by inserting elements in the order
/// they were written.
#[inline]
fn deserialize_collect<T, C, D>(deserializer: &mut D) -> Result<C>
where
	T: Deserialize,
	C: FromIterator<T>,
	D: Deserializer,
{
	let len = deserializer.pull_len()?;
	(0..len)
		.map(|_| T::deserialize_data(deserializer))
		.collect()
}

impl<T: Serialize<S>, S: Serializer> Serialize<S> for [T] {
	#[inline]
	fn serialize_data(&self, serializer: &mut S) {
		serializer.push_len(self.len());
		T::serialize_slice(self, serializer);
	}
}

impl<T: Serialize<S>, S: Serializer> Serialize<S> for Vec<T> {
	#[inline]
	fn serialize_data(&self, serializer: &mut S) {
		self.as_slice().serialize_data(serializer);
	}
}

impl<T: Deserialize> Deserialize for Vec<T> {
	#[inline]
	fn deserialize_data<D: Deserializer>(deserializer: &mut D) -> Result<Self> {
		let len = deserializer.pull_len()?;
		T::deserialize_vec(len, deserializer)
	}
}

impl<T: Deserialize> Deserialize for Box<[T]> {
	#[inline]
	fn deserialize_data<D: Deserializer>(deserializer: &mut D) -> Result<Self> {
		Ok(Vec::<T>::deserialize_data(deserializer)?.into_boxed_slice())
	}
}

impl<T: Serialize<S>, S: Serializer, const N: usize> Serialize<S> for [T; N] {
	#[inline]
	fn serialize_data(&self, serializer: &mut S) {
		self.as_slice().serialize_data(serializer);
	}
}

impl<T: Deserialize, const N: usize> Deserialize for [T; N] {
	fn deserialize_data<D: Deserializer>(deserializer: &mut D) -> Result<Self> {
		let len = deserializer.pull_len()?;
		if len != N {
			return Err(Error::LengthMismatch {
				expected: N,
				actual: len,
			});
		}
		let vec = T::deserialize_vec(len, deserializer)?;
		let actual = vec.len();
		<[T; N]>::try_from(vec).map_err(|_| Error::LengthMismatch {
			expected: N,
			actual,
		})
	}
}

impl<T: Serialize<S>, S: Serializer> Serialize<S> for VecDeque<T> {
	#[inline]
	fn serialize_data(&self, serializer: &mut S) {
		serialize_iter(self.iter(), serializer);
	}
}

impl<T: Deserialize> Deserialize for VecDeque<T> {
	#[inline]
	fn deserialize_data<D: Deserializer>(deserializer: &mut D) -> Result<Self> {
		Ok(Vec::<T>::deserialize_data(deserializer)?.into())
	}
}

impl<T: Serialize<S>, S: Serializer> Serialize<S> for LinkedList<T> {
	#[inline]
	fn serialize_data(&self, serializer: &mut S) {
		serialize_iter(self.iter(), serializer);
	}
}

impl<T: Deserialize> Deserialize for LinkedList<T> {
	#[inline]
	fn deserialize_data<D: Deserializer>(deserializer: &mut D) -> Result<Self> {
		deserialize_collect::<T, _, _>(deserializer)
	}
}

impl<T: Serialize<S>, S: Serializer> Serialize<S> for BTreeSet<T> {
	#[inline]
	fn serialize_data(&self, serializer: &mut S) {
		serialize_iter(self.iter(), serializer);
	}
}

impl<T: Deserialize + Ord> Deserialize for BTreeSet<T> {
	#[inline]
	fn deserialize_data<D: Deserializer>(deserializer: &mut D) -> Result<Self> {
		deserialize_collect::<T, _, _>(deserializer)
	}
}

impl<T: Serialize<S>, H, S: Serializer> Serialize<S> for HashSet<T, H> {
	#[inline]
	fn serialize_data(&self, serializer: &mut S) {
		serialize_iter(self.iter(), serializer);
	}
}

impl<T, H> Deserialize for HashSet<T, H>
where
	T: Deserialize + Eq + Hash,
	H: BuildHasher + Default,
{
	#[inline]
	fn deserialize_data<D: Deserializer>(deserializer: &mut D) -> Result<Self> {
		deserialize_collect::<T, _, _>(deserializer)
	}
}

impl<T: Serialize<S>, S: Serializer> Serialize<S> for BinaryHeap<T> {
	#[inline]
	fn serialize_data(&self, serializer: &mut S) {
		serialize_iter(self.iter(), serializer);
	}
}

impl<T: Deserialize + Ord> Deserialize for BinaryHeap<T> {
	#[inline]
	fn deserialize_data<D: Deserializer>(deserializer: &mut D) -> Result<Self> {
		Ok(Vec::<T>::deserialize_data(deserializer)?.into())
	}
}

impl<K, V, S> Serialize<S> for BTreeMap<K, V>
where
	K: Serialize<S>,
	V: Serialize<S>,
	S: Serializer,
{
	#[inline]
	fn serialize_data(&self, serializer: &mut S) {
		serialize_entries(self.iter(), serializer);
	}
}

impl<K, V> Deserialize for BTreeMap<K, V>
where
	K: Deserialize + Ord,
	V: Deserialize,
{
	#[inline]
	fn deserialize_data<D: Deserializer>(deserializer: &mut D) -> Result<Self> {
		deserialize_collect::<(K, V), _, _>(deserializer)
	}
}

impl<K, V, H, S> Serialize<S> for HashMap<K, V, H>
where
	K: Serialize<S>,
	V: Serialize<S>,
	S: Serializer,
{
	#[inline]
	fn serialize_data(&self, serializer: &mut S) {
		serialize_entries(self.iter(), serializer);
	}
}

impl<K, V, H> Deserialize for HashMap<K, V, H>
where
	K: Deserialize + Eq + Hash,
	V: Deserialize,
	H: BuildHasher + Default,
{
	#[inline]
	fn deserialize_data<D: Deserializer>(deserializer: &mut D) -> Result<Self> {
		deserialize_collect::<(K, V), _, _>(deserializer)
	}
}
