//! Type-level indices into a [`Cons`] list.
//!
//! A position is a Peano number: [`Here`] is slot 0, `There<Here>` is slot 1,
//! and so on. [`Index<N>`] maps a const integer onto the same chain, so callers
//! can write `record.get::<2>()` instead of spelling out `There<There<Here>>`.

use std::marker::PhantomData;

use crate::Cons;

/// Index of the head slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Here;

/// Index of slot `I` within the tail.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct There<I>(PhantomData<I>);

/// Const index, converted to a Peano index via [`ToPeano`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Index<const N: usize>;

pub trait ToPeano {
	type Peano;
}

/// Peano index equivalent of const index `N`.
pub type Peano<const N: usize> = <Index<N> as ToPeano>::Peano;

macro_rules! impl_to_peano {
	($peano:ty;) => {};
	($peano:ty; $n:literal $(, $rest:literal)*) => {
		impl ToPeano for Index<$n> {
			type Peano = $peano;
		}

		impl_to_peano!(There<$peano>; $($rest),*);
	};
}

impl_to_peano!(
	Here; 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23,
	24, 25, 26, 27, 28, 29, 30, 31
);

/// Access to the slot at index `I`.
///
/// Indexing past the end of a record fails to type-check.
pub trait Get<I> {
	type Output;

	fn slot(&self) -> &Self::Output;
	fn slot_mut(&mut self) -> &mut Self::Output;
	fn into_slot(self) -> Self::Output;
}

impl<H, T> Get<Here> for Cons<H, T> {
	type Output = H;

	#[inline]
	fn slot(&self) -> &H {
		&self.head
	}

	#[inline]
	fn slot_mut(&mut self) -> &mut H {
		&mut self.head
	}

	#[inline]
	fn into_slot(self) -> H {
		self.head
	}
}

impl<H, T, I> Get<There<I>> for Cons<H, T>
where T: Get<I>
{
	type Output = T::Output;

	#[inline]
	fn slot(&self) -> &T::Output {
		self.tail.slot()
	}

	#[inline]
	fn slot_mut(&mut self) -> &mut T::Output {
		self.tail.slot_mut()
	}

	#[inline]
	fn into_slot(self) -> T::Output {
		self.tail.into_slot()
	}
}

/// Access to the one slot of type `T`.
///
/// `I` is inferred. If `T` is absent, or appears in more than one slot,
/// inference fails and the call does not compile.
pub trait Pick<T, I> {
	fn pick_ref(&self) -> &T;
	fn pick_mut(&mut self) -> &mut T;
	fn into_pick(self) -> T;
}

impl<T, Tail> Pick<T, Here> for Cons<T, Tail> {
	#[inline]
	fn pick_ref(&self) -> &T {
		&self.head
	}

	#[inline]
	fn pick_mut(&mut self) -> &mut T {
		&mut self.head
	}

	#[inline]
	fn into_pick(self) -> T {
		self.head
	}
}

impl<H, T, Tail, I> Pick<T, There<I>> for Cons<H, Tail>
where Tail: Pick<T, I>
{
	#[inline]
	fn pick_ref(&self) -> &T {
		self.tail.pick_ref()
	}

	#[inline]
	fn pick_mut(&mut self) -> &mut T {
		self.tail.pick_mut()
	}

	#[inline]
	fn into_pick(self) -> T {
		self.tail.into_pick()
	}
}
