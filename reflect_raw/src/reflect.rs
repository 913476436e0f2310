use crate::{FieldDescriptor, Get, Peano, Record};

/// Structural view of a struct's fields.
///
/// Implement with `#[derive(Reflect)]`. Fields appear in declaration order.
/// Deriving on an enum or union, or on a type which implements `Drop`,
/// fails to compile.
///
/// ```
/// use reflect_raw::{record_pat, Reflect};
///
/// #[derive(Reflect)]
/// struct W {
/// 	rank: u32,
/// 	key: char,
/// 	val: f64,
/// }
///
/// let mut w = W { rank: 1, key: 'k', val: 0.5 };
/// assert_eq!(W::FIELD_COUNT, 3);
///
/// *w.tie_record().head = 7;
/// let record_pat![rank, key, _] = w.as_record();
/// assert_eq!((*rank, *key), (7, 'k'));
/// ```
pub trait Reflect: Sized {
	/// Number of declared fields.
	const FIELD_COUNT: usize;

	/// Field types, in order, as a record type.
	type Fields: Record;
	/// Record of shared references to each field.
	type Refs<'a>: Record
	where Self: 'a;
	/// Record of mutable references to each field.
	type RefsMut<'a>: Record
	where Self: 'a;
	/// Record of [`FieldPtr`](crate::FieldPtr)s to each field.
	type FieldPtrs: Record;

	fn field_descriptors() -> Vec<FieldDescriptor>;
	fn field_ptrs() -> Self::FieldPtrs;

	fn as_record(&self) -> Self::Refs<'_>;
	fn tie_record(&mut self) -> Self::RefsMut<'_>;
	fn into_record(self) -> Self::Fields;
	fn from_record(fields: Self::Fields) -> Self;
}

/// Type of field `N` of `T`.
pub type FieldAt<T, const N: usize> = <<T as Reflect>::Fields as Get<Peano<N>>>::Output;

/// Number of fields of `T`.
#[inline]
pub const fn arity<T: Reflect>() -> usize {
	T::FIELD_COUNT
}
