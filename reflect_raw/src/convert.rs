//! Conversions between reflected structs, records and tuples, plus
//! field-level helpers built on [`Reflect`].

use crate::{
	Apply, Cloned, ForEach, Get, Index, IntoRecord, IntoTuple, Peano, Pick, RecordFrom, Reflect,
	ToPeano, WriteThrough, Zip,
};

/// Cloned copy of `value`'s fields as a record.
pub fn to_record<'a, T>(value: &'a T) -> T::Fields
where
	T: Reflect,
	T::Refs<'a>: Cloned<Owned = T::Fields>,
{
	T::as_record(value).cloned()
}

/// Cloned copy of `value`'s fields as a tuple.
pub fn to_tuple<'a, T>(value: &'a T) -> <T::Fields as IntoTuple>::Tuple
where
	T: Reflect,
	T::Refs<'a>: Cloned<Owned = T::Fields>,
	T::Fields: IntoTuple,
{
	to_record(value).into_tuple()
}

/// Tuple of mutable references to `value`'s fields.
pub fn tie_tuple<'a, T>(value: &'a mut T) -> <T::RefsMut<'a> as IntoTuple>::Tuple
where
	T: Reflect,
	T::RefsMut<'a>: IntoTuple,
{
	T::tie_record(value).into_tuple()
}

/// Overwrite `target`'s fields from a record or tuple of the same arity.
///
/// Each source value is converted into its field's type with [`From`].
pub fn fill<'a, T, R>(target: &'a mut T, source: R)
where
	T: Reflect,
	R: IntoRecord,
	T::RefsMut<'a>: WriteThrough<R::Record>,
{
	T::tie_record(target).write(source.into_record());
}

/// Construct a `T` from a record or tuple of the same arity.
///
/// ```
/// use reflect_raw::Reflect;
///
/// #[derive(Reflect, Debug, PartialEq)]
/// struct Point(f64, f64);
///
/// let p: Point = reflect_raw::fill_from((1.5f32, 2u8));
/// assert_eq!(p, Point(1.5, 2.0));
/// ```
pub fn fill_from<T, R>(source: R) -> T
where
	T: Reflect,
	R: IntoRecord,
	T::Fields: RecordFrom<R::Record>,
{
	T::from_record(RecordFrom::record_from(source.into_record()))
}

/// Reference to field `N` of `value`. Call as `field::<N, _>(&value)`.
pub fn field<'a, const N: usize, T>(value: &'a T) -> <T::Refs<'a> as Get<Peano<N>>>::Output
where
	T: Reflect,
	Index<N>: ToPeano,
	T::Refs<'a>: Get<Peano<N>>,
{
	<T::Refs<'a> as Get<Peano<N>>>::into_slot(T::as_record(value))
}

/// Mutable reference to field `N` of `value`.
pub fn field_mut<'a, const N: usize, T>(
	value: &'a mut T,
) -> <T::RefsMut<'a> as Get<Peano<N>>>::Output
where
	T: Reflect,
	Index<N>: ToPeano,
	T::RefsMut<'a>: Get<Peano<N>>,
{
	<T::RefsMut<'a> as Get<Peano<N>>>::into_slot(T::tie_record(value))
}

/// Reference to the one field of type `F`. Call as `pick_field::<F, _, _>(&value)`.
pub fn pick_field<'a, F, T, I>(value: &'a T) -> &'a F
where
	T: Reflect,
	T::Refs<'a>: Pick<&'a F, I>,
{
	<T::Refs<'a> as Pick<&'a F, I>>::into_pick(T::as_record(value))
}

pub fn pick_field_mut<'a, F, T, I>(value: &'a mut T) -> &'a mut F
where
	T: Reflect,
	T::RefsMut<'a>: Pick<&'a mut F, I>,
{
	<T::RefsMut<'a> as Pick<&'a mut F, I>>::into_pick(T::tie_record(value))
}

/// Field pointer for field `N` of `T`. Call as `field_ptr::<N, T>()`.
pub fn field_ptr<const N: usize, T>() -> <T::FieldPtrs as Get<Peano<N>>>::Output
where
	T: Reflect,
	Index<N>: ToPeano,
	T::FieldPtrs: Get<Peano<N>>,
{
	<T::FieldPtrs as Get<Peano<N>>>::into_slot(T::field_ptrs())
}

/// Call `visitor` with a reference to each field of `value`.
pub fn for_each_field<'a, V, T>(visitor: &mut V, value: &'a T)
where
	T: Reflect,
	T::Refs<'a>: ForEach<V>,
{
	T::as_record(value).for_each_from(0, visitor);
}

/// Call `visitor` with a mutable reference to each field of `value`.
pub fn for_each_field_mut<'a, V, T>(visitor: &mut V, value: &'a mut T)
where
	T: Reflect,
	T::RefsMut<'a>: ForEach<V>,
{
	T::tie_record(value).for_each_from(0, visitor);
}

/// Call `f` once, with a reference to each field of `value` as arguments.
pub fn apply_fields<'a, F, T>(f: F, value: &'a T) -> <T::Refs<'a> as Apply<F>>::Output
where
	T: Reflect,
	T::Refs<'a>: Apply<F>,
{
	T::as_record(value).apply_to(f)
}

/// Call `visitor` with `(&a.field_i, &b.field_i)` for each field index
/// the two values share.
pub fn zip_fields<'a, 'b, V, A, B>(visitor: &mut V, a: &'a A, b: &'b B)
where
	A: Reflect,
	B: Reflect,
	A::Refs<'a>: Zip<B::Refs<'b>>,
	<A::Refs<'a> as Zip<B::Refs<'b>>>::Output: ForEach<V>,
{
	A::as_record(a).zip(B::as_record(b)).for_each_from(0, visitor);
}
