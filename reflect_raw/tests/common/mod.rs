#![allow(dead_code)]

use rand::Rng;
use reflect_raw::{Deserialize, Reflect, Serialize};

mod catalogue;
pub use catalogue::{generate_catalogue, Catalogue, Entry, Kind};

#[derive(Reflect, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct X {
	pub f: f32,
	pub s: String,
}

#[derive(Reflect, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Y {
	pub i: i32,
	pub d: f64,
	pub c: char,
	pub x: X,
}

#[derive(Reflect, Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct W {
	pub rank: u32,
	pub key: char,
	pub val: f64,
}

/// `Y { i: 2022, d: 12.05, c: '*', x: X { f: 18.47, s: "stateful" } }`
pub fn y() -> Y {
	Y {
		i: 2022,
		d: 12.05,
		c: '*',
		x: X {
			f: 18.47,
			s: "stateful".to_string(),
		},
	}
}

pub fn w(rank: u32, key: char, val: f64) -> W {
	W { rank, key, val }
}

pub trait Generate {
	fn generate<R: Rng>(rng: &mut R) -> Self;
}

impl Generate for () {
	fn generate<R: Rng>(_: &mut R) -> Self {}
}

impl Generate for bool {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		rng.gen_bool(0.5)
	}
}

macro_rules! impl_generate {
	($ty:ty) => {
		impl Generate for $ty {
			fn generate<R: Rng>(rng: &mut R) -> Self {
				rng.gen()
			}
		}
	};
}

impl_generate!(u8);
impl_generate!(u16);
impl_generate!(u32);
impl_generate!(u64);
impl_generate!(u128);
impl_generate!(i8);
impl_generate!(i16);
impl_generate!(i32);
impl_generate!(i64);
impl_generate!(f32);
impl_generate!(f64);
impl_generate!(char);

macro_rules! impl_tuple {
	() => {};
	($first:ident, $($rest:ident,)*) => {
		impl<$first: Generate, $($rest: Generate,)*> Generate for ($first, $($rest,)*) {
			fn generate<R: Rng>(rng: &mut R) -> Self {
				($first::generate(rng), $($rest::generate(rng),)*)
			}
		}

		impl_tuple!($($rest,)*);
	};
}

impl_tuple!(T0, T1, T2, T3,);

impl<T: Generate, const N: usize> Generate for [T; N] {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		std::array::from_fn(|_| T::generate(rng))
	}
}

impl<T: Generate> Generate for Option<T> {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		if rng.gen_bool(0.5) {
			Some(T::generate(rng))
		} else {
			None
		}
	}
}

impl Generate for X {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		X {
			f: rng.gen(),
			s: generate_word(rng),
		}
	}
}

impl Generate for Y {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		Y {
			i: rng.gen(),
			d: rng.gen(),
			c: rng.gen(),
			x: X::generate(rng),
		}
	}
}

pub fn generate_vec<R: Rng, T: Generate>(rng: &mut R, range: std::ops::Range<usize>) -> Vec<T> {
	let len = rng.gen_range(range);
	(0..len).map(|_| T::generate(rng)).collect()
}

pub fn generate_word<R: Rng>(rng: &mut R) -> String {
	const WORDS: [&str; 8] = [
		"stateful", "bolt", "washer", "bracket", "hinge", "spring", "gasket", "rivet",
	];
	WORDS[rng.gen_range(0..WORDS.len())].to_string()
}
