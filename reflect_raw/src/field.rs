use std::{alloc::Layout, any::type_name, fmt, marker::PhantomData, mem};

use crate::util::is_aligned_to;

/// Accessor for a field of type `F` at a fixed byte offset within `S`.
///
/// Obtained from [`Reflect::field_ptrs`](crate::Reflect::field_ptrs) or
/// [`field_ptr`](crate::field_ptr). Usable with any value of type `S`.
pub struct FieldPtr<S, F> {
	index: usize,
	offset: usize,
	marker: PhantomData<fn(&S) -> &F>,
}

impl<S, F> FieldPtr<S, F> {
	/// Create a field pointer for field `index`, stored at byte `offset`.
	///
	/// # Safety
	///
	/// `offset` must be the offset of a field of type `F` within `S`,
	/// as given by `core::mem::offset_of!`.
	#[inline]
	pub const unsafe fn new_unchecked(index: usize, offset: usize) -> Self {
		debug_assert!(is_aligned_to(offset, mem::align_of::<F>()));
		Self {
			index,
			offset,
			marker: PhantomData,
		}
	}

	#[inline]
	pub const fn offset(self) -> usize {
		self.offset
	}

	/// Reference to the field within `owner`.
	#[inline]
	pub fn get(self, owner: &S) -> &F {
		// SAFETY: Constructor guarantees a field of type `F` lives at `offset`
		unsafe {
			&*(owner as *const S)
				.cast::<u8>()
				.add(self.offset)
				.cast::<F>()
		}
	}

	#[inline]
	pub fn get_mut(self, owner: &mut S) -> &mut F {
		// SAFETY: As `get`. `owner` is borrowed mutably so access is exclusive.
		unsafe {
			&mut *(owner as *mut S)
				.cast::<u8>()
				.add(self.offset)
				.cast::<F>()
		}
	}

	#[inline]
	pub fn set(self, owner: &mut S, value: F) {
		*self.get_mut(owner) = value;
	}

	/// Set the field, returning its previous value.
	#[inline]
	pub fn replace(self, owner: &mut S, value: F) -> F {
		mem::replace(self.get_mut(owner), value)
	}

	/// Declaration index of the field this pointer refers to.
	///
	/// Zero-sized fields can share an offset, so the index is not derivable
	/// from the offset alone.
	#[inline]
	pub const fn index(self) -> usize {
		self.index
	}
}

impl<S, F> Clone for FieldPtr<S, F> {
	#[inline]
	fn clone(&self) -> Self {
		*self
	}
}

impl<S, F> Copy for FieldPtr<S, F> {}

impl<S, F> PartialEq for FieldPtr<S, F> {
	#[inline]
	fn eq(&self, other: &Self) -> bool {
		self.index == other.index && self.offset == other.offset
	}
}

impl<S, F> Eq for FieldPtr<S, F> {}

impl<S, F> fmt::Debug for FieldPtr<S, F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FieldPtr")
			.field("owner", &type_name::<S>())
			.field("field", &type_name::<F>())
			.field("index", &self.index)
			.field("offset", &self.offset)
			.finish()
	}
}

/// Static description of one field of a reflected type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
	/// Declaration index.
	pub index: usize,
	/// Field name. Tuple struct fields are named by index (`"0"`, `"1"`, ...).
	pub name: &'static str,
	pub type_name: &'static str,
	/// Byte offset within the owning type.
	pub offset: usize,
	pub layout: Layout,
}

impl FieldDescriptor {
	pub fn new<F>(index: usize, name: &'static str, offset: usize) -> Self {
		Self {
			index,
			name,
			type_name: type_name::<F>(),
			offset,
			layout: Layout::new::<F>(),
		}
	}

	#[inline]
	pub fn size(&self) -> usize {
		self.layout.size()
	}

	#[inline]
	pub fn align(&self) -> usize {
		self.layout.align()
	}
}
