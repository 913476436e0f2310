use std::{
	collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque},
	mem,
	num::NonZeroU16,
	rc::Rc,
	sync::Arc,
	time::Duration,
};

use num_bigint::{BigInt, BigUint};
use reflect_raw::{
	marshal, marshal_fields, marshal_into, record, serialized_size, unmarshal, unmarshal_fields,
	unmarshal_fields_into, unmarshal_into, unmarshal_prefix, Deserialize, DeserializeWith,
	Deserializer, Error, Reflect, Result, Serialize, SerializeWith, Serializer, UnalignedSerializer,
};

mod common;
use common::{w, y, W, X, Y};

fn round_trip<T>(value: &T) -> T
where T: Serialize<UnalignedSerializer> + Deserialize {
	let bytes = marshal(value);
	unmarshal(&bytes).unwrap()
}

fn len_bytes(len: usize) -> Vec<u8> {
	len.to_ne_bytes().to_vec()
}

#[test]
fn vec_is_count_then_elements() {
	let mut expected = len_bytes(3);
	for n in [1i32, 3, 6] {
		expected.extend_from_slice(&n.to_ne_bytes());
	}
	assert_eq!(marshal(&vec![1i32, 3, 6]), expected);
	assert_eq!(unmarshal::<Vec<i32>>(&expected), Ok(vec![1, 3, 6]));
}

#[test]
fn byte_vec_is_one_block() {
	let mut expected = len_bytes(3);
	expected.extend_from_slice(&[7, 8, 9]);
	assert_eq!(marshal(&vec![7u8, 8, 9]), expected);
	assert_eq!(round_trip(&vec![7u8, 8, 9]), vec![7, 8, 9]);
}

#[test]
fn nested_struct_layout() {
	let value = y();

	let mut expected = Vec::new();
	expected.extend_from_slice(&2022i32.to_ne_bytes());
	expected.extend_from_slice(&12.05f64.to_ne_bytes());
	expected.extend_from_slice(&('*' as u32).to_ne_bytes());
	expected.extend_from_slice(&18.47f32.to_ne_bytes());
	expected.extend_from_slice(&len_bytes(8));
	expected.extend_from_slice(b"stateful");

	let bytes = marshal(&value);
	assert_eq!(bytes, expected);
	assert_eq!(serialized_size(&value), bytes.len());
	assert_eq!(unmarshal::<Y>(&bytes), Ok(value));
}

#[test]
fn records_tuples_and_structs_share_encoding() {
	let value = y();
	let bytes = marshal(&value);

	let as_record = record![2022i32, 12.05f64, '*', record![18.47f32, String::from("stateful")]];
	let as_tuple = (2022i32, 12.05f64, '*', (18.47f32, String::from("stateful")));
	assert_eq!(marshal(&as_record), bytes);
	assert_eq!(marshal(&as_tuple), bytes);
	assert_eq!(marshal(&value.as_record()), bytes);

	let (i, d, c, (f, s)) = unmarshal::<(i32, f64, char, (f32, String))>(&bytes).unwrap();
	assert_eq!((i, d, c, f, s.as_str()), (2022, 12.05, '*', 18.47, "stateful"));
	assert_eq!(unmarshal(&bytes), Ok(as_record));
}

#[test]
fn selected_fields_round_trip() {
	let value = y();
	let bytes = marshal_fields(&value, [0, 3]).unwrap();
	assert_eq!(bytes.len(), 4 + serialized_size(&value.x));

	let out = unmarshal_fields::<Y, _>(&bytes, [0, 3]).unwrap();
	assert_eq!(out, Y {
		i: 2022,
		x: value.x.clone(),
		..Y::default()
	});

	let bytes = marshal_fields(&w(1, 'k', 2.5), 1..3).unwrap();
	assert_eq!(unmarshal_fields::<W, _>(&bytes, 1..3), Ok(w(0, 'k', 2.5)));

	let mut existing = w(9, 'a', 0.0);
	unmarshal_fields_into(&mut existing, &bytes, 1..3).unwrap();
	assert_eq!(existing, w(9, 'k', 2.5));
}

#[test]
fn selected_fields_of_records_and_tuples() {
	let bytes = marshal_fields(&record![1u8, 'b', 3u16], [2]).unwrap();
	assert_eq!(bytes, 3u16.to_ne_bytes());

	let out = unmarshal_fields::<(u8, char, u16), _>(&bytes, [2]).unwrap();
	assert_eq!(out, (0, '\0', 3));
}

#[test]
fn field_index_out_of_range() {
	assert_eq!(
		marshal_fields(&w(1, 'k', 2.5), [3]),
		Err(Error::FieldIndexOutOfRange { index: 3, count: 3 })
	);
	assert_eq!(
		unmarshal_fields::<W, _>(&[], [5]),
		Err(Error::FieldIndexOutOfRange { index: 5, count: 3 })
	);
	assert_eq!(
		marshal_fields(&record![1u8, 2u8], [2]),
		Err(Error::FieldIndexOutOfRange { index: 2, count: 2 })
	);
}

#[test]
fn in_place_and_appending() {
	let mut buf = vec![0xff];
	marshal_into(&1u16, &mut buf);
	marshal_into(&w(2, 'b', 0.5), &mut buf);
	assert_eq!(buf.len(), 1 + 2 + serialized_size(&W::default()));

	let (first, used) = unmarshal_prefix::<u16>(&buf[1..]).unwrap();
	assert_eq!((first, used), (1, 2));
	let mut target = W::default();
	unmarshal_into(&mut target, &buf[1 + used..]).unwrap();
	assert_eq!(target, w(2, 'b', 0.5));
}

#[test]
fn scalars() {
	assert_eq!(round_trip(&u128::MAX), u128::MAX);
	assert_eq!(round_trip(&i64::MIN), i64::MIN);
	assert_eq!(round_trip(&usize::MAX), usize::MAX);
	assert_eq!(round_trip(&-0.5f32), -0.5);
	assert!(round_trip(&true));
	assert_eq!(round_trip(&'\u{1F980}'), '\u{1F980}');
	assert_eq!(round_trip(&NonZeroU16::new(513).unwrap()).get(), 513);
	assert_eq!(marshal(&()), Vec::<u8>::new());
	assert_eq!(marshal(&true), vec![1]);
	assert_eq!(marshal(&'a').len(), 4);
}

#[test]
fn options_and_results() {
	assert_eq!(marshal(&None::<u32>), vec![0]);
	assert_eq!(marshal(&Some(5u8)), vec![1, 5]);
	assert_eq!(round_trip(&Some(Some(String::from("deep")))), Some(Some("deep".into())));
	assert_eq!(round_trip(&Some(None::<u8>)), Some(None));

	let ok: std::result::Result<u8, String> = Ok(3);
	let err: std::result::Result<u8, String> = Err("bad".into());
	assert_eq!(round_trip(&ok), ok);
	assert_eq!(round_trip(&err), err);
	assert_eq!(&marshal(&err)[..4], 1u32.to_ne_bytes());
}

#[test]
fn pointers() {
	assert_eq!(round_trip(&Box::new(Box::new(7u8))), Box::new(Box::new(7)));
	assert_eq!(marshal(&Box::new(7u32)), marshal(&7u32));

	let boxed_str: Box<str> = "boxed".into();
	assert_eq!(round_trip(&boxed_str), boxed_str);
	let boxed_slice: Box<[u16]> = vec![1, 2].into_boxed_slice();
	assert_eq!(round_trip(&boxed_slice), boxed_slice);

	assert_eq!(*round_trip(&Arc::new(X::default())), X::default());

	let rc_str: Rc<str> = "shared".into();
	assert_eq!(marshal(&rc_str), marshal("shared"));
	assert_eq!(round_trip(&rc_str), rc_str);
	let arc_str: Arc<str> = "".into();
	assert_eq!(round_trip(&arc_str), arc_str);
	let rc_slice: Rc<[char]> = vec!['a', 'b'].into();
	assert_eq!(round_trip(&rc_slice), rc_slice);
	let arc_slice: Arc<[u8]> = vec![1, 2, 3].into();
	assert_eq!(marshal(&arc_slice), marshal(&vec![1u8, 2, 3]));
	assert_eq!(round_trip(&arc_slice), arc_slice);

	// Each pointer is read back into its own allocation
	let shared = Rc::new(5u32);
	let out = round_trip(&vec![shared.clone(), shared]);
	assert_eq!(*out[0], 5);
	assert_eq!(*out[1], 5);
	assert!(!Rc::ptr_eq(&out[0], &out[1]));
}

#[test]
fn strings() {
	// Length is in bytes, not chars
	let mut expected = len_bytes("héé".len());
	expected.extend_from_slice("héé".as_bytes());
	assert_eq!(expected.len(), mem::size_of::<usize>() + 5);
	assert_eq!(marshal("héé"), expected);
	assert_eq!(marshal(&String::from("héé")), expected);
	assert_eq!(unmarshal::<String>(&expected), Ok("héé".to_string()));
	assert_eq!(round_trip(&String::new()), "");
}

#[test]
fn arrays() {
	let value = [[1u16, 2], [3, 4], [5, 6]];
	assert_eq!(round_trip(&value), value);
	assert_eq!(marshal(&[9u8; 2]), marshal(&vec![9u8; 2]));
	assert_eq!(round_trip(&[0u64; 0]), []);

	let bytes = marshal(&vec![1u8, 2, 3]);
	assert_eq!(
		unmarshal::<[u8; 2]>(&bytes),
		Err(Error::LengthMismatch {
			expected: 2,
			actual: 3
		})
	);
}

#[test]
fn sequences_and_sets() {
	let deque = VecDeque::from(vec![3u8, 1, 2]);
	assert_eq!(round_trip(&deque), deque);
	assert_eq!(marshal(&deque), marshal(&vec![3u8, 1, 2]));

	let list = LinkedList::from([String::from("a"), String::from("b")]);
	assert_eq!(round_trip(&list), list);

	let tree = BTreeSet::from([5i16, -1, 3]);
	assert_eq!(round_trip(&tree), tree);

	let hashed = HashSet::from(['x', 'y', 'z']);
	assert_eq!(round_trip(&hashed), hashed);

	let heap = BinaryHeap::from(vec![4u32, 9, 1, 9]);
	assert_eq!(round_trip(&heap).into_sorted_vec(), vec![1, 4, 9, 9]);
}

#[test]
fn maps() {
	let tree = BTreeMap::from([(1u8, String::from("one")), (2, String::from("two"))]);
	let mut expected = len_bytes(2);
	for (key, value) in &tree {
		expected.push(*key);
		expected.extend_from_slice(&marshal(value));
	}
	assert_eq!(marshal(&tree), expected);
	assert_eq!(round_trip(&tree), tree);

	let hashed = HashMap::from([(String::from("k"), vec![w(1, 'a', 1.0)]), (String::new(), vec![])]);
	assert_eq!(round_trip(&hashed), hashed);
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
enum Shape {
	Empty,
	Circle(f64),
	Rect { w: u16, h: u16 },
	Group(Vec<Shape>),
}

#[test]
fn enums() {
	assert_eq!(marshal(&Shape::Empty), 0u32.to_ne_bytes());

	let mut expected = 2u32.to_ne_bytes().to_vec();
	expected.extend_from_slice(&3u16.to_ne_bytes());
	expected.extend_from_slice(&4u16.to_ne_bytes());
	assert_eq!(marshal(&Shape::Rect { w: 3, h: 4 }), expected);

	let group = Shape::Group(vec![
		Shape::Circle(1.5),
		Shape::Empty,
		Shape::Group(vec![Shape::Rect { w: 1, h: 2 }]),
	]);
	assert_eq!(round_trip(&group), group);

	let bytes = marshal(&7u32);
	assert!(matches!(
		unmarshal::<Shape>(&bytes),
		Err(Error::InvalidVariant { index: 7, .. })
	));
}

#[derive(Reflect, Serialize, Deserialize, Debug, Default, PartialEq)]
struct Tagged<T> {
	tag: u8,
	value: T,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Pair(u8, String);

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Unit;

#[test]
fn struct_shapes() {
	let tagged = Tagged {
		tag: 1,
		value: vec![String::from("a")],
	};
	assert_eq!(round_trip(&tagged), tagged);
	assert_eq!(marshal(&tagged), marshal(&(1u8, vec![String::from("a")])));

	assert_eq!(round_trip(&Pair(2, "b".into())), Pair(2, "b".into()));
	assert_eq!(marshal(&Unit), Vec::<u8>::new());
	assert_eq!(unmarshal::<Unit>(&[]), Ok(Unit));
}

/// Writes a `Duration` as whole milliseconds.
struct Millis;

impl<S: Serializer> SerializeWith<Duration, S> for Millis {
	fn serialize_data_with(value: &Duration, serializer: &mut S) {
		serializer.push_raw(value.as_millis() as u64);
	}
}

impl DeserializeWith<Duration> for Millis {
	fn deserialize_data_with<D: Deserializer>(deserializer: &mut D) -> Result<Duration> {
		Ok(Duration::from_millis(deserializer.pull_raw()?))
	}
}

#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
struct Timed {
	label: String,
	#[ser_with(Millis)]
	elapsed: Duration,
}

#[test]
fn proxy_for_foreign_type() {
	let timed = Timed {
		label: "boot".into(),
		elapsed: Duration::from_millis(1500),
	};
	let bytes = marshal(&timed);
	assert_eq!(bytes.len(), mem::size_of::<usize>() + 4 + 8);
	assert_eq!(unmarshal::<Timed>(&bytes), Ok(timed));

	let only_elapsed = marshal_fields(
		&Timed {
			label: String::new(),
			elapsed: Duration::from_millis(20),
		},
		[1],
	)
	.unwrap();
	assert_eq!(only_elapsed, 20u64.to_ne_bytes());
	assert_eq!(
		unmarshal_fields::<Timed, _>(&only_elapsed, [1]).unwrap().elapsed,
		Duration::from_millis(20)
	);
}

#[test]
fn big_integers() {
	let big = BigUint::from(u128::MAX) * BigUint::from(u64::MAX);
	assert_eq!(round_trip(&big), big);
	assert_eq!(round_trip(&BigUint::default()), BigUint::default());

	for value in [BigInt::from(-12345678901234567890i128), BigInt::from(0), BigInt::from(42)] {
		assert_eq!(round_trip(&value), value);
	}

	let bytes = marshal(&BigInt::from(-1));
	assert_eq!(bytes[0], 0);
	let mut bad = bytes.clone();
	bad[0] = 3;
	assert!(matches!(
		unmarshal::<BigInt>(&bad),
		Err(Error::InvalidVariant { index: 3, .. })
	));
}

#[test]
fn malformed_input() {
	assert_eq!(
		unmarshal::<u32>(&[1, 2]),
		Err(Error::UnexpectedEnd {
			needed: 4,
			remaining: 2
		})
	);
	assert_eq!(unmarshal::<u8>(&[1, 2]), Err(Error::TrailingBytes(1)));
	assert_eq!(unmarshal::<bool>(&[3]), Err(Error::InvalidBool(3)));
	assert_eq!(unmarshal::<Option<u8>>(&[2]), Err(Error::InvalidPresence(2)));
	assert_eq!(
		unmarshal::<char>(&0x110000u32.to_ne_bytes()),
		Err(Error::InvalidChar(0x110000))
	);
	assert_eq!(
		unmarshal::<NonZeroU16>(&[0, 0]),
		Err(Error::InvalidNonZero("NonZeroU16"))
	);

	let not_utf8 = marshal(&vec![0xffu8, 0xfe]);
	assert!(matches!(unmarshal::<String>(&not_utf8), Err(Error::InvalidUtf8(_))));

	// Length prefix promises more than the buffer holds
	let mut short = len_bytes(10);
	short.push(1);
	assert!(matches!(
		unmarshal::<Vec<u8>>(&short),
		Err(Error::UnexpectedEnd { needed: 10, .. })
	));
	assert!(matches!(
		unmarshal::<Vec<u32>>(&short),
		Err(Error::UnexpectedEnd { needed: 4, .. })
	));
}

#[test]
fn error_messages() {
	assert_eq!(Error::TrailingBytes(2).to_string(), "2 trailing bytes after value");
	assert_eq!(
		Error::FieldIndexOutOfRange { index: 4, count: 3 }.to_string(),
		"field index 4 out of range for type with 3 fields"
	);
}
