//! Lexicographic comparison of reflected structs, field by field.
//!
//! The two operands may be different types. Fields at indices both have are
//! compared first; if those are all equal, the type with fewer fields is less.

use std::cmp::Ordering;

use crate::Reflect;

pub fn compare<'a, 'b, A, B>(a: &'a A, b: &'b B) -> Option<Ordering>
where
	A: Reflect,
	B: Reflect,
	A::Refs<'a>: PartialOrd<B::Refs<'b>>,
{
	A::as_record(a).partial_cmp(&B::as_record(b))
}

pub fn eq<'a, 'b, A, B>(a: &'a A, b: &'b B) -> bool
where
	A: Reflect,
	B: Reflect,
	A::Refs<'a>: PartialEq<B::Refs<'b>>,
{
	A::as_record(a) == B::as_record(b)
}

pub fn ne<'a, 'b, A, B>(a: &'a A, b: &'b B) -> bool
where
	A: Reflect,
	B: Reflect,
	A::Refs<'a>: PartialEq<B::Refs<'b>>,
{
	!eq(a, b)
}

pub fn lt<'a, 'b, A, B>(a: &'a A, b: &'b B) -> bool
where
	A: Reflect,
	B: Reflect,
	A::Refs<'a>: PartialOrd<B::Refs<'b>>,
{
	matches!(compare(a, b), Some(Ordering::Less))
}

pub fn le<'a, 'b, A, B>(a: &'a A, b: &'b B) -> bool
where
	A: Reflect,
	B: Reflect,
	A::Refs<'a>: PartialOrd<B::Refs<'b>>,
{
	matches!(compare(a, b), Some(Ordering::Less | Ordering::Equal))
}

pub fn gt<'a, 'b, A, B>(a: &'a A, b: &'b B) -> bool
where
	A: Reflect,
	B: Reflect,
	A::Refs<'a>: PartialOrd<B::Refs<'b>>,
{
	matches!(compare(a, b), Some(Ordering::Greater))
}

pub fn ge<'a, 'b, A, B>(a: &'a A, b: &'b B) -> bool
where
	A: Reflect,
	B: Reflect,
	A::Refs<'a>: PartialOrd<B::Refs<'b>>,
{
	matches!(compare(a, b), Some(Ordering::Greater | Ordering::Equal))
}
