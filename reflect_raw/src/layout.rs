//! Field offsets of a synthetic declaration-ordered layout.
//!
//! A shadow layout places each field at the next offset aligned for it,
//! in declaration order, as `#[repr(C)]` does. Comparing it with the real
//! offsets tells whether a type's fields are stored in declaration order.

use std::alloc::{Layout, LayoutError};

use crate::util::align_up_to;

/// Offsets of `fields` when laid out one after another in order.
pub fn shadow_offsets(fields: &[Layout]) -> Vec<usize> {
	let mut pos = 0;
	fields
		.iter()
		.map(|field| {
			let offset = align_up_to(pos, field.align());
			pos = offset + field.size();
			offset
		})
		.collect()
}

/// Layout of the whole shadow record, including trailing padding.
pub fn shadow_layout(fields: &[Layout]) -> Result<Layout, LayoutError> {
	let mut layout = Layout::from_size_align(0, 1)?;
	for field in fields {
		layout = layout.extend(*field)?.0;
	}
	Ok(layout.pad_to_align())
}
