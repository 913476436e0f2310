//! Fixed-arity heterogeneous records.
//!
//! A record of types `A, B, C` is `Cons<A, Cons<B, Cons<C, Nil>>>`. The
//! [`record!`](crate::record), [`Record!`](crate::Record) and
//! [`record_pat!`](crate::record_pat) macros build values, types and
//! patterns of this shape without the nesting.

use std::{
	cmp::Ordering,
	hash::{Hash, Hasher},
	mem,
};

use crate::{Get, Index, Peano, Pick, ToPeano};

/// Non-empty record: a head slot followed by the remaining slots.
#[derive(Clone, Copy, Debug, Default)]
pub struct Cons<H, T> {
	pub head: H,
	pub tail: T,
}

/// The empty record.
#[derive(Clone, Copy, Debug, Default)]
pub struct Nil;

/// Placeholder slot in a tie view. Writing through it discards the value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ignore;

/// Implemented by [`Cons`] lists terminated by [`Nil`].
pub trait Record: Sized {
	/// Number of slots.
	const LEN: usize;

	#[inline]
	fn len(&self) -> usize {
		Self::LEN
	}

	#[inline]
	fn is_empty(&self) -> bool {
		Self::LEN == 0
	}
}

impl Record for Nil {
	const LEN: usize = 0;
}

impl<H, T: Record> Record for Cons<H, T> {
	const LEN: usize = T::LEN + 1;
}

impl<H, T> Cons<H, T> {
	#[inline]
	pub const fn new(head: H, tail: T) -> Self {
		Self { head, tail }
	}

	/// Reference to slot `N`.
	#[inline]
	pub fn get<const N: usize>(&self) -> &<Self as Get<Peano<N>>>::Output
	where
		Index<N>: ToPeano,
		Self: Get<Peano<N>>,
	{
		<Self as Get<Peano<N>>>::slot(self)
	}

	/// Mutable reference to slot `N`.
	#[inline]
	pub fn get_mut<const N: usize>(&mut self) -> &mut <Self as Get<Peano<N>>>::Output
	where
		Index<N>: ToPeano,
		Self: Get<Peano<N>>,
	{
		<Self as Get<Peano<N>>>::slot_mut(self)
	}

	/// Consume the record, returning slot `N`.
	#[inline]
	pub fn take<const N: usize>(self) -> <Self as Get<Peano<N>>>::Output
	where
		Index<N>: ToPeano,
		Self: Get<Peano<N>>,
	{
		<Self as Get<Peano<N>>>::into_slot(self)
	}

	/// Reference to the slot of type `U`. Call as `record.pick::<U, _>()`.
	#[inline]
	pub fn pick<U, I>(&self) -> &U
	where Self: Pick<U, I> {
		<Self as Pick<U, I>>::pick_ref(self)
	}

	#[inline]
	pub fn pick_mut<U, I>(&mut self) -> &mut U
	where Self: Pick<U, I> {
		<Self as Pick<U, I>>::pick_mut(self)
	}

	#[inline]
	pub fn take_pick<U, I>(self) -> U
	where Self: Pick<U, I> {
		<Self as Pick<U, I>>::into_pick(self)
	}
}

/// Build a record from another of equal arity, converting each slot with
/// [`From`].
pub trait RecordFrom<Src>: Sized {
	fn record_from(src: Src) -> Self;
}

impl RecordFrom<Nil> for Nil {
	#[inline]
	fn record_from(_src: Nil) -> Self {
		Nil
	}
}

impl<H, T, S, U> RecordFrom<Cons<S, U>> for Cons<H, T>
where
	H: From<S>,
	T: RecordFrom<U>,
{
	#[inline]
	fn record_from(src: Cons<S, U>) -> Self {
		Cons {
			head: H::from(src.head),
			tail: T::record_from(src.tail),
		}
	}
}

/// Slot-wise assignment from a record of equal arity.
pub trait Assign<Src> {
	fn assign(&mut self, src: Src);
}

impl<Dst, Src> Assign<Src> for Dst
where Dst: RecordFrom<Src>
{
	#[inline]
	fn assign(&mut self, src: Src) {
		*self = Dst::record_from(src);
	}
}

/// Assignment through a record of `&mut` slots.
///
/// Slot types may be converted with [`From`]. [`Ignore`] slots swallow the
/// corresponding source value.
pub trait WriteThrough<Src> {
	fn write(&mut self, src: Src);
}

impl WriteThrough<Nil> for Nil {
	#[inline]
	fn write(&mut self, _src: Nil) {}
}

impl<'a, H, T, S, U> WriteThrough<Cons<S, U>> for Cons<&'a mut H, T>
where
	H: From<S>,
	T: WriteThrough<U>,
{
	#[inline]
	fn write(&mut self, src: Cons<S, U>) {
		*self.head = H::from(src.head);
		self.tail.write(src.tail);
	}
}

impl<T, S, U> WriteThrough<Cons<S, U>> for Cons<Ignore, T>
where T: WriteThrough<U>
{
	#[inline]
	fn write(&mut self, src: Cons<S, U>) {
		self.tail.write(src.tail);
	}
}

/// Concatenation. Arity of the output is the sum of both arities.
pub trait Concat<Rhs> {
	type Output: Record;

	fn concat(self, rhs: Rhs) -> Self::Output;
}

impl<Rhs: Record> Concat<Rhs> for Nil {
	type Output = Rhs;

	#[inline]
	fn concat(self, rhs: Rhs) -> Rhs {
		rhs
	}
}

impl<H, T, Rhs> Concat<Rhs> for Cons<H, T>
where T: Concat<Rhs>
{
	type Output = Cons<H, T::Output>;

	#[inline]
	fn concat(self, rhs: Rhs) -> Self::Output {
		Cons {
			head: self.head,
			tail: self.tail.concat(rhs),
		}
	}
}

/// Swap the slots two records have in common, up to the shorter arity.
pub trait SwapPrefix<Rhs> {
	fn swap_prefix(&mut self, other: &mut Rhs);
}

impl<Rhs> SwapPrefix<Rhs> for Nil {
	#[inline]
	fn swap_prefix(&mut self, _other: &mut Rhs) {}
}

impl<H, T> SwapPrefix<Nil> for Cons<H, T> {
	#[inline]
	fn swap_prefix(&mut self, _other: &mut Nil) {}
}

impl<H, T, U> SwapPrefix<Cons<H, U>> for Cons<H, T>
where T: SwapPrefix<U>
{
	#[inline]
	fn swap_prefix(&mut self, other: &mut Cons<H, U>) {
		mem::swap(&mut self.head, &mut other.head);
		self.tail.swap_prefix(&mut other.tail);
	}
}

/// Owned copy of a record of references.
pub trait Cloned {
	type Owned: Record;

	fn cloned(&self) -> Self::Owned;
}

impl Cloned for Nil {
	type Owned = Nil;

	#[inline]
	fn cloned(&self) -> Nil {
		Nil
	}
}

impl<'a, H: Clone, T: Cloned> Cloned for Cons<&'a H, T> {
	type Owned = Cons<H, T::Owned>;

	#[inline]
	fn cloned(&self) -> Self::Owned {
		Cons {
			head: H::clone(self.head),
			tail: self.tail.cloned(),
		}
	}
}

impl<'a, H: Clone, T: Cloned> Cloned for Cons<&'a mut H, T> {
	type Owned = Cons<H, T::Owned>;

	#[inline]
	fn cloned(&self) -> Self::Owned {
		Cons {
			head: H::clone(&*self.head),
			tail: self.tail.cloned(),
		}
	}
}

// Comparisons run over the common prefix of the two records. If that prefix
// is equal, the shorter record orders first, and records of different arity
// are never equal.

impl<Rhs: Record> PartialEq<Rhs> for Nil {
	#[inline]
	fn eq(&self, _other: &Rhs) -> bool {
		Rhs::LEN == 0
	}
}

impl<H, T> PartialEq<Nil> for Cons<H, T> {
	#[inline]
	fn eq(&self, _other: &Nil) -> bool {
		false
	}
}

impl<H, T, H2, T2> PartialEq<Cons<H2, T2>> for Cons<H, T>
where
	H: PartialEq<H2>,
	T: PartialEq<T2>,
{
	#[inline]
	fn eq(&self, other: &Cons<H2, T2>) -> bool {
		self.head == other.head && self.tail == other.tail
	}
}

impl Eq for Nil {}

impl<H: Eq, T: Eq> Eq for Cons<H, T> {}

impl<Rhs: Record> PartialOrd<Rhs> for Nil {
	#[inline]
	fn partial_cmp(&self, _other: &Rhs) -> Option<Ordering> {
		Some(0usize.cmp(&Rhs::LEN))
	}
}

impl<H, T> PartialOrd<Nil> for Cons<H, T> {
	#[inline]
	fn partial_cmp(&self, _other: &Nil) -> Option<Ordering> {
		Some(Ordering::Greater)
	}
}

impl<H, T, H2, T2> PartialOrd<Cons<H2, T2>> for Cons<H, T>
where
	H: PartialOrd<H2>,
	T: PartialOrd<T2>,
{
	#[inline]
	fn partial_cmp(&self, other: &Cons<H2, T2>) -> Option<Ordering> {
		match self.head.partial_cmp(&other.head)? {
			Ordering::Equal => self.tail.partial_cmp(&other.tail),
			ordering => Some(ordering),
		}
	}
}

impl Ord for Nil {
	#[inline]
	fn cmp(&self, _other: &Nil) -> Ordering {
		Ordering::Equal
	}
}

impl<H: Ord, T: Ord> Ord for Cons<H, T> {
	#[inline]
	fn cmp(&self, other: &Self) -> Ordering {
		self.head
			.cmp(&other.head)
			.then_with(|| self.tail.cmp(&other.tail))
	}
}

impl Hash for Nil {
	#[inline]
	fn hash<S: Hasher>(&self, _state: &mut S) {}
}

impl<H: Hash, T: Hash> Hash for Cons<H, T> {
	#[inline]
	fn hash<S: Hasher>(&self, state: &mut S) {
		self.head.hash(state);
		self.tail.hash(state);
	}
}

/// Build a record value.
///
/// ```
/// use reflect_raw::{record, Record};
///
/// let r: Record![i32, &str, f64] = record![1, "two", 3.0];
/// assert_eq!(*r.get::<1>(), "two");
/// ```
#[macro_export]
macro_rules! record {
	() => { $crate::Nil };
	($head:expr $(, $tail:expr)* $(,)?) => {
		$crate::Cons {
			head: $head,
			tail: $crate::record!($($tail),*),
		}
	};
}

/// Name a record type.
#[macro_export]
macro_rules! Record {
	() => { $crate::Nil };
	($head:ty $(, $tail:ty)* $(,)?) => {
		$crate::Cons<$head, $crate::Record!($($tail),*)>
	};
}

/// Destructure a record.
///
/// ```
/// use reflect_raw::{record, record_pat};
///
/// let record_pat![a, b] = record![1u8, 'b'];
/// assert_eq!((a, b), (1, 'b'));
/// ```
#[macro_export]
macro_rules! record_pat {
	() => { $crate::Nil };
	($head:pat $(, $tail:pat)* $(,)?) => {
		$crate::Cons {
			head: $head,
			tail: $crate::record_pat!($($tail),*),
		}
	};
}

/// Concatenate any number of records, left to right.
#[macro_export]
macro_rules! record_cat {
	($only:expr $(,)?) => { $only };
	($first:expr, $($rest:expr),+ $(,)?) => {
		$crate::Concat::concat($first, $crate::record_cat!($($rest),+))
	};
}
