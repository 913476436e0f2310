use crate::{
	Cons, Deserialize, DeserializeFields, Deserializer, Error, Nil, Record, Result, Serialize,
	SerializeFields, Serializer,
};

// Records and tuples write each slot in order with no header, so a record
// and a tuple with the same slot types produce the same bytes.

impl<S: Serializer> Serialize<S> for Nil {
	#[inline(always)]
	fn serialize_data(&self, _serializer: &mut S) {}
}

impl<H, T, S> Serialize<S> for Cons<H, T>
where
	H: Serialize<S>,
	T: Serialize<S>,
	S: Serializer,
{
	#[inline]
	fn serialize_data(&self, serializer: &mut S) {
		self.head.serialize_data(serializer);
		self.tail.serialize_data(serializer);
	}
}

impl Deserialize for Nil {
	#[inline(always)]
	fn deserialize_data<D: Deserializer>(_deserializer: &mut D) -> Result<Self> {
		Ok(Nil)
	}
}

impl<H: Deserialize, T: Deserialize> Deserialize for Cons<H, T> {
	#[inline]
	fn deserialize_data<D: Deserializer>(deserializer: &mut D) -> Result<Self> {
		Ok(Cons {
			head: H::deserialize_data(deserializer)?,
			tail: T::deserialize_data(deserializer)?,
		})
	}

	#[inline]
	fn deserialize_in_place<D: Deserializer>(&mut self, deserializer: &mut D) -> Result<()> {
		self.head.deserialize_in_place(deserializer)?;
		self.tail.deserialize_in_place(deserializer)
	}
}

impl<S: Serializer> SerializeFields<S> for Nil {
	#[inline]
	fn serialize_field(&self, index: usize, _serializer: &mut S) -> Result<()> {
		Err(Error::FieldIndexOutOfRange { index, count: 0 })
	}
}

impl<H, T, S> SerializeFields<S> for Cons<H, T>
where
	H: Serialize<S>,
	T: SerializeFields<S> + Record,
	S: Serializer,
{
	fn serialize_field(&self, index: usize, serializer: &mut S) -> Result<()> {
		if index >= Self::LEN {
			return Err(Error::FieldIndexOutOfRange {
				index,
				count: Self::LEN,
			});
		}
		match index {
			0 => {
				self.head.serialize_data(serializer);
				Ok(())
			}
			_ => self.tail.serialize_field(index - 1, serializer),
		}
	}
}

impl DeserializeFields for Nil {
	#[inline]
	fn deserialize_field<D: Deserializer>(&mut self, index: usize, _deserializer: &mut D)
		-> Result<()> {
		Err(Error::FieldIndexOutOfRange { index, count: 0 })
	}
}

impl<H, T> DeserializeFields for Cons<H, T>
where
	H: Deserialize,
	T: DeserializeFields + Record,
{
	fn deserialize_field<D: Deserializer>(&mut self, index: usize, deserializer: &mut D)
		-> Result<()> {
		if index >= Self::LEN {
			return Err(Error::FieldIndexOutOfRange {
				index,
				count: Self::LEN,
			});
		}
		match index {
			0 => self.head.deserialize_in_place(deserializer),
			_ => self.tail.deserialize_field(index - 1, deserializer),
		}
	}
}

macro_rules! impl_tuple {
	($count:literal; $($ty:ident $idx:tt),+) => {
		impl<__S: Serializer, $($ty: Serialize<__S>),+> Serialize<__S> for ($($ty,)+) {
			#[inline]
			fn serialize_data(&self, serializer: &mut __S) {
				$(self.$idx.serialize_data(serializer);)+
			}
		}

		impl<$($ty: Deserialize),+> Deserialize for ($($ty,)+) {
			#[inline]
			fn deserialize_data<__D: Deserializer>(deserializer: &mut __D) -> Result<Self> {
				Ok(($($ty::deserialize_data(deserializer)?,)+))
			}

			#[inline]
			fn deserialize_in_place<__D: Deserializer>(&mut self, deserializer: &mut __D)
				-> Result<()> {
				$(self.$idx.deserialize_in_place(deserializer)?;)+
				Ok(())
			}
		}

		impl<__S: Serializer, $($ty: Serialize<__S>),+> SerializeFields<__S> for ($($ty,)+) {
			fn serialize_field(&self, index: usize, serializer: &mut __S) -> Result<()> {
				match index {
					$($idx => self.$idx.serialize_data(serializer),)+
					_ => return Err(Error::FieldIndexOutOfRange { index, count: $count }),
				}
				Ok(())
			}
		}

		impl<$($ty: Deserialize),+> DeserializeFields for ($($ty,)+) {
			fn deserialize_field<__D: Deserializer>(&mut self, index: usize, deserializer: &mut __D)
				-> Result<()> {
				match index {
					$($idx => self.$idx.deserialize_in_place(deserializer),)+
					_ => Err(Error::FieldIndexOutOfRange { index, count: $count }),
				}
			}
		}
	};
}

impl_tuple!(1; A 0);
impl_tuple!(2; A 0, B 1);
impl_tuple!(3; A 0, B 1, C 2);
impl_tuple!(4; A 0, B 1, C 2, E 3);
impl_tuple!(5; A 0, B 1, C 2, E 3, F 4);
impl_tuple!(6; A 0, B 1, C 2, E 3, F 4, G 5);
impl_tuple!(7; A 0, B 1, C 2, E 3, F 4, G 5, H 6);
impl_tuple!(8; A 0, B 1, C 2, E 3, F 4, G 5, H 6, I 7);
impl_tuple!(9; A 0, B 1, C 2, E 3, F 4, G 5, H 6, I 7, J 8);
impl_tuple!(10; A 0, B 1, C 2, E 3, F 4, G 5, H 6, I 7, J 8, K 9);
impl_tuple!(11; A 0, B 1, C 2, E 3, F 4, G 5, H 6, I 7, J 8, K 9, L 10);
impl_tuple!(12; A 0, B 1, C 2, E 3, F 4, G 5, H 6, I 7, J 8, K 9, L 10, M 11);
