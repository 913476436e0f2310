//! Conversions between records and native tuples, up to arity 12.

use crate::{Cons, Nil, Record};

/// Convert a record into the tuple with the same slot types.
pub trait IntoTuple {
	type Tuple;

	fn into_tuple(self) -> Self::Tuple;
}

/// Convert a tuple (or a record, unchanged) into a record.
pub trait IntoRecord {
	type Record: Record;

	fn into_record(self) -> Self::Record;
}

impl IntoRecord for Nil {
	type Record = Nil;

	#[inline]
	fn into_record(self) -> Nil {
		self
	}
}

impl<H, T: Record> IntoRecord for Cons<H, T> {
	type Record = Self;

	#[inline]
	fn into_record(self) -> Self {
		self
	}
}

macro_rules! impl_tuple {
	($($ty:ident $val:ident),*) => {
		impl<$($ty),*> IntoRecord for ($($ty,)*) {
			type Record = crate::Record!($($ty),*);

			#[inline]
			#[allow(clippy::unused_unit)]
			fn into_record(self) -> Self::Record {
				let ($($val,)*) = self;
				crate::record!($($val),*)
			}
		}

		impl<$($ty),*> IntoTuple for crate::Record!($($ty),*) {
			type Tuple = ($($ty,)*);

			#[inline]
			#[allow(clippy::unused_unit)]
			fn into_tuple(self) -> Self::Tuple {
				let crate::record_pat!($($val),*) = self;
				($($val,)*)
			}
		}
	};
}

impl_tuple!();
impl_tuple!(A0 a0);
impl_tuple!(A0 a0, A1 a1);
impl_tuple!(A0 a0, A1 a1, A2 a2);
impl_tuple!(A0 a0, A1 a1, A2 a2, A3 a3);
impl_tuple!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4);
impl_tuple!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4, A5 a5);
impl_tuple!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6);
impl_tuple!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7);
impl_tuple!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7, A8 a8);
impl_tuple!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7, A8 a8, A9 a9);
impl_tuple!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7, A8 a8, A9 a9, A10 a10);
impl_tuple!(
	A0 a0, A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7, A8 a8, A9 a9, A10 a10, A11 a11
);
