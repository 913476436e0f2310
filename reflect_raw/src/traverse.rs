//! Visiting, zipping and spreading the slots of records.

use crate::{Cons, Nil};

/// Visitor called once per slot.
///
/// A visitor used with [`for_each`] must implement `Visit<T>` for every slot
/// type `T` in the record.
pub trait Visit<T> {
	fn visit(&mut self, index: usize, value: T);
}

/// Records which can be walked by visitor `V`.
pub trait ForEach<V> {
	/// Visit every slot, numbering them from `index`.
	fn for_each_from(self, index: usize, visitor: &mut V);
}

impl<V> ForEach<V> for Nil {
	#[inline]
	fn for_each_from(self, _index: usize, _visitor: &mut V) {}
}

impl<V, H, T> ForEach<V> for Cons<H, T>
where
	V: Visit<H>,
	T: ForEach<V>,
{
	#[inline]
	fn for_each_from(self, index: usize, visitor: &mut V) {
		visitor.visit(index, self.head);
		self.tail.for_each_from(index + 1, visitor);
	}
}

/// Call `visitor` with each slot of `record`, left to right.
#[inline]
pub fn for_each<V, R: ForEach<V>>(visitor: &mut V, record: R) {
	record.for_each_from(0, visitor);
}

/// Pair up slots of two records. Output has the arity of the shorter one.
pub trait Zip<Rhs> {
	type Output;

	fn zip(self, rhs: Rhs) -> Self::Output;
}

impl<Rhs> Zip<Rhs> for Nil {
	type Output = Nil;

	#[inline]
	fn zip(self, _rhs: Rhs) -> Nil {
		Nil
	}
}

impl<H, T> Zip<Nil> for Cons<H, T> {
	type Output = Nil;

	#[inline]
	fn zip(self, _rhs: Nil) -> Nil {
		Nil
	}
}

impl<H, T, H2, T2> Zip<Cons<H2, T2>> for Cons<H, T>
where T: Zip<T2>
{
	type Output = Cons<(H, H2), T::Output>;

	#[inline]
	fn zip(self, rhs: Cons<H2, T2>) -> Self::Output {
		Cons {
			head: (self.head, rhs.head),
			tail: self.tail.zip(rhs.tail),
		}
	}
}

/// Three-way [`Zip`], producing flat triples.
pub trait Zip3<B, C> {
	type Output;

	fn zip3(self, b: B, c: C) -> Self::Output;
}

impl<B, C> Zip3<B, C> for Nil {
	type Output = Nil;

	#[inline]
	fn zip3(self, _b: B, _c: C) -> Nil {
		Nil
	}
}

impl<H, T, C> Zip3<Nil, C> for Cons<H, T> {
	type Output = Nil;

	#[inline]
	fn zip3(self, _b: Nil, _c: C) -> Nil {
		Nil
	}
}

impl<H, T, H2, T2> Zip3<Cons<H2, T2>, Nil> for Cons<H, T> {
	type Output = Nil;

	#[inline]
	fn zip3(self, _b: Cons<H2, T2>, _c: Nil) -> Nil {
		Nil
	}
}

impl<H, T, H2, T2, H3, T3> Zip3<Cons<H2, T2>, Cons<H3, T3>> for Cons<H, T>
where T: Zip3<T2, T3>
{
	type Output = Cons<(H, H2, H3), T::Output>;

	#[inline]
	fn zip3(self, b: Cons<H2, T2>, c: Cons<H3, T3>) -> Self::Output {
		Cons {
			head: (self.head, b.head, c.head),
			tail: self.tail.zip3(b.tail, c.tail),
		}
	}
}

/// Call `visitor` with `(a[i], b[i])` for each index shared by both records.
#[inline]
pub fn zip<V, A, B>(visitor: &mut V, a: A, b: B)
where
	A: Zip<B>,
	A::Output: ForEach<V>,
{
	for_each(visitor, a.zip(b));
}

/// Call `visitor` with `(a[i], b[i], c[i])` for each index shared by all three.
#[inline]
pub fn zip3<V, A, B, C>(visitor: &mut V, a: A, b: B, c: C)
where
	A: Zip3<B, C>,
	A::Output: ForEach<V>,
{
	for_each(visitor, a.zip3(b, c));
}

/// Any-arity [`Zip`]: transposes a record of operand records.
///
/// Slot `i` of operand `j` lands in slot `j` of output slot `i`. The output
/// has the arity of the shortest operand.
///
/// ```
/// use reflect_raw::{record, ZipAll};
///
/// let columns = record![record![1u8, 2u8], record!['a', 'b', 'c'], record![true, false]].zip_all();
/// assert_eq!(columns, record![record![1u8, 'a', true], record![2u8, 'b', false]]);
/// ```
pub trait ZipAll {
	type Output;

	fn zip_all(self) -> Self::Output;
}

impl<A: Columns> ZipAll for Cons<A, Nil> {
	type Output = A::Output;

	#[inline]
	fn zip_all(self) -> Self::Output {
		self.head.columns()
	}
}

impl<A, B, Rest> ZipAll for Cons<A, Cons<B, Rest>>
where
	Cons<B, Rest>: ZipAll,
	A: PrependColumns<<Cons<B, Rest> as ZipAll>::Output>,
{
	type Output = A::Output;

	#[inline]
	fn zip_all(self) -> Self::Output {
		self.head.prepend_columns(self.tail.zip_all())
	}
}

/// Wrap each slot of the last operand of a [`ZipAll`] in a one-slot record.
pub trait Columns {
	type Output;

	fn columns(self) -> Self::Output;
}

impl Columns for Nil {
	type Output = Nil;

	#[inline]
	fn columns(self) -> Nil {
		Nil
	}
}

impl<H, T: Columns> Columns for Cons<H, T> {
	type Output = Cons<Cons<H, Nil>, T::Output>;

	#[inline]
	fn columns(self) -> Self::Output {
		Cons {
			head: Cons {
				head: self.head,
				tail: Nil,
			},
			tail: self.tail.columns(),
		}
	}
}

/// Push each slot onto the front of the matching column of a [`ZipAll`].
pub trait PrependColumns<Cols> {
	type Output;

	fn prepend_columns(self, columns: Cols) -> Self::Output;
}

impl<Cols> PrependColumns<Cols> for Nil {
	type Output = Nil;

	#[inline]
	fn prepend_columns(self, _columns: Cols) -> Nil {
		Nil
	}
}

impl<H, T> PrependColumns<Nil> for Cons<H, T> {
	type Output = Nil;

	#[inline]
	fn prepend_columns(self, _columns: Nil) -> Nil {
		Nil
	}
}

impl<H, T, C, Cs> PrependColumns<Cons<C, Cs>> for Cons<H, T>
where T: PrependColumns<Cs>
{
	type Output = Cons<Cons<H, C>, T::Output>;

	#[inline]
	fn prepend_columns(self, columns: Cons<C, Cs>) -> Self::Output {
		Cons {
			head: Cons {
				head: self.head,
				tail: columns.head,
			},
			tail: self.tail.prepend_columns(columns.tail),
		}
	}
}

/// Call `visitor` once per index shared by every record in `operands`,
/// with a record of that index's slots.
#[inline]
pub fn zip_all<V, R>(visitor: &mut V, operands: R)
where
	R: ZipAll,
	R::Output: ForEach<V>,
{
	for_each(visitor, operands.zip_all());
}

/// Spread a record's slots as positional arguments to `f`.
pub trait Apply<F> {
	type Output;

	fn apply_to(self, f: F) -> Self::Output;
}

macro_rules! impl_apply {
	($($ty:ident $val:ident),*) => {
		impl<F, R, $($ty),*> Apply<F> for crate::Record!($($ty),*)
		where F: FnOnce($($ty),*) -> R
		{
			type Output = R;

			#[inline]
			fn apply_to(self, f: F) -> R {
				let crate::record_pat!($($val),*) = self;
				f($($val),*)
			}
		}
	};
}

impl_apply!();
impl_apply!(A0 a0);
impl_apply!(A0 a0, A1 a1);
impl_apply!(A0 a0, A1 a1, A2 a2);
impl_apply!(A0 a0, A1 a1, A2 a2, A3 a3);
impl_apply!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4);
impl_apply!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4, A5 a5);
impl_apply!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6);
impl_apply!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7);
impl_apply!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7, A8 a8);
impl_apply!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7, A8 a8, A9 a9);
impl_apply!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7, A8 a8, A9 a9, A10 a10);
impl_apply!(
	A0 a0, A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7, A8 a8, A9 a9, A10 a10, A11 a11
);

/// Call `f` once with every slot of `record` as an argument.
///
/// ```
/// use reflect_raw::record;
///
/// let sum = reflect_raw::apply(|a: u8, b: u16, c: u32| a as u32 + b as u32 + c, record![1, 2, 3]);
/// assert_eq!(sum, 6);
/// ```
#[inline]
pub fn apply<F, Rec: Apply<F>>(f: F, record: Rec) -> Rec::Output {
	record.apply_to(f)
}
