/// Round up `pos` to alignment of `alignment`.
///
/// `alignment` must be a power of 2.
///
/// Caller must ensure `pos + alignment` cannot overflow `usize`.
/// Offsets and sizes of real types are below `isize::MAX`, which satisfies this.
pub const fn align_up_to(pos: usize, alignment: usize) -> usize {
	debug_assert!(alignment.is_power_of_two());
	(pos + alignment - 1) & !(alignment - 1)
}

/// Check if `pos` is a multiple of `alignment`.
///
/// `alignment` must be a power of 2.
pub const fn is_aligned_to(pos: usize, alignment: usize) -> bool {
	debug_assert!(alignment.is_power_of_two());
	pos & (alignment - 1) == 0
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn align_up() {
		assert_eq!(align_up_to(0, 8), 0);
		assert_eq!(align_up_to(1, 8), 8);
		assert_eq!(align_up_to(8, 8), 8);
		assert_eq!(align_up_to(9, 4), 12);
		assert_eq!(align_up_to(13, 1), 13);
	}

	#[test]
	fn aligned() {
		assert!(is_aligned_to(0, 16));
		assert!(is_aligned_to(24, 8));
		assert!(!is_aligned_to(6, 4));
	}
}
