use num_bigint::{BigInt, BigUint, Sign};

use crate::{Deserialize, Deserializer, Error, Result, Serialize, Serializer};

// `BigUint` is written as its base-2^32 digits, least significant first.
// `BigInt` is a sign byte followed by the digits of its magnitude.

impl<S: Serializer> Serialize<S> for BigUint {
	fn serialize_data(&self, serializer: &mut S) {
		self.to_u32_digits().serialize_data(serializer);
	}
}

impl Deserialize for BigUint {
	fn deserialize_data<D: Deserializer>(deserializer: &mut D) -> Result<Self> {
		Ok(BigUint::new(Vec::<u32>::deserialize_data(deserializer)?))
	}
}

impl<S: Serializer> Serialize<S> for BigInt {
	fn serialize_data(&self, serializer: &mut S) {
		let sign: u8 = match self.sign() {
			Sign::Minus => 0,
			Sign::NoSign => 1,
			Sign::Plus => 2,
		};
		serializer.push_raw(sign);
		self.magnitude().serialize_data(serializer);
	}
}

impl Deserialize for BigInt {
	fn deserialize_data<D: Deserializer>(deserializer: &mut D) -> Result<Self> {
		let sign = match deserializer.pull_raw::<u8>()? {
			0 => Sign::Minus,
			1 => Sign::NoSign,
			2 => Sign::Plus,
			index => {
				return Err(Error::InvalidVariant {
					type_name: "BigInt",
					index: index.into(),
				})
			}
		};
		let magnitude = BigUint::deserialize_data(deserializer)?;
		Ok(BigInt::from_biguint(sign, magnitude))
	}
}
