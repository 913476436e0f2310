use std::{
	collections::{BTreeMap, HashSet, VecDeque},
	num::NonZeroU32,
};

use rand::Rng;
use rand_pcg::Lcg64Xsh32;
use reflect_raw::{Deserialize, Reflect, Serialize};

use super::{generate_vec, generate_word, Generate};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub enum Kind {
	#[default]
	Loose,
	Packed(u8),
	Bundle {
		parts: Vec<u64>,
		discount: f32,
	},
}

impl Generate for Kind {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		match rng.gen_range(0..3) {
			0 => Kind::Loose,
			1 => Kind::Packed(rng.gen()),
			2 => Kind::Bundle {
				parts: generate_vec(rng, 0..6),
				discount: rng.gen(),
			},
			_ => unreachable!(),
		}
	}
}

#[derive(Reflect, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Entry {
	pub sku: u64,
	pub name: String,
	pub price: f64,
	pub stock: Option<NonZeroU32>,
	pub dims: [u16; 3],
	pub kind: Kind,
}

impl Generate for Entry {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		Entry {
			sku: rng.gen(),
			name: generate_word(rng),
			price: rng.gen(),
			stock: <Option<()> as Generate>::generate(rng)
				.map(|_| NonZeroU32::new(rng.gen_range(1..=u32::MAX)).unwrap()),
			dims: <[u16; 3] as Generate>::generate(rng),
			kind: Kind::generate(rng),
		}
	}
}

#[derive(Reflect, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Catalogue {
	pub entries: Vec<Entry>,
	pub by_name: BTreeMap<String, u64>,
	pub tags: HashSet<String>,
	pub recent: VecDeque<(u64, i16)>,
	pub note: Option<Box<str>>,
	pub checksum: u128,
}

impl Generate for Catalogue {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		let entries = generate_vec::<_, Entry>(rng, 50..100);
		let by_name = entries
			.iter()
			.map(|entry| (entry.name.clone(), entry.sku))
			.collect();
		let tags = (0..rng.gen_range(0..8)).map(|_| generate_word(rng)).collect();
		let recent = generate_vec::<_, (u64, i16)>(rng, 0..20).into();
		let note = <Option<()> as Generate>::generate(rng).map(|_| generate_word(rng).into());

		Catalogue {
			entries,
			by_name,
			tags,
			recent,
			note,
			checksum: rng.gen(),
		}
	}
}

pub fn generate_catalogue() -> Catalogue {
	const STATE: u64 = 3141592653;
	const STREAM: u64 = 5897932384;

	let mut rng = Lcg64Xsh32::new(STATE, STREAM);
	Catalogue::generate(&mut rng)
}
