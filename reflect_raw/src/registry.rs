use std::{
	alloc::Layout,
	any::{type_name, TypeId},
	collections::HashMap,
	slice,
	sync::OnceLock,
};

use parking_lot::RwLock;

use crate::{layout::shadow_offsets, FieldDescriptor, Reflect};

/// Field descriptors of a reflected type, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldTable {
	pub type_name: &'static str,
	pub layout: Layout,
	fields: Vec<FieldDescriptor>,
}

impl FieldTable {
	/// Build the table for `T`. Prefer [`field_table`], which caches it.
	pub fn of<T: Reflect>() -> Self {
		Self {
			type_name: type_name::<T>(),
			layout: Layout::new::<T>(),
			fields: T::field_descriptors(),
		}
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	#[inline]
	pub fn get(&self, index: usize) -> Option<&FieldDescriptor> {
		self.fields.get(index)
	}

	pub fn by_name(&self, name: &str) -> Option<&FieldDescriptor> {
		self.fields.iter().find(|field| field.name == name)
	}

	/// Index of the first field stored at byte `offset`.
	///
	/// Zero-sized fields can share an offset with their neighbour.
	/// [`FieldPtr::index`](crate::FieldPtr::index) carries the exact index.
	pub fn index_of(&self, offset: usize) -> Option<usize> {
		self.fields
			.iter()
			.find(|field| field.offset == offset)
			.map(|field| field.index)
	}

	#[inline]
	pub fn iter(&self) -> slice::Iter<'_, FieldDescriptor> {
		self.fields.iter()
	}

	/// Offsets the fields would have if laid out in declaration order.
	pub fn shadow_offsets(&self) -> Vec<usize> {
		let layouts = self.fields.iter().map(|field| field.layout).collect::<Vec<_>>();
		shadow_offsets(&layouts)
	}

	/// Whether the real field offsets match declaration order.
	///
	/// Always true for `#[repr(C)]` types. The default Rust representation
	/// may reorder fields.
	pub fn is_declaration_ordered(&self) -> bool {
		self.fields
			.iter()
			.zip(self.shadow_offsets())
			.all(|(field, offset)| field.offset == offset)
	}
}

impl<'a> IntoIterator for &'a FieldTable {
	type Item = &'a FieldDescriptor;
	type IntoIter = slice::Iter<'a, FieldDescriptor>;

	fn into_iter(self) -> Self::IntoIter {
		self.fields.iter()
	}
}

type Registry = RwLock<HashMap<TypeId, &'static FieldTable>>;

fn registry() -> &'static Registry {
	static REGISTRY: OnceLock<Registry> = OnceLock::new();
	REGISTRY.get_or_init(Default::default)
}

/// Field table for `T`, built on first request and shared thereafter.
///
/// Safe to call from many threads at once. Each type's table is built at
/// most once per process.
pub fn field_table<T: Reflect + 'static>() -> &'static FieldTable {
	let type_id = TypeId::of::<T>();

	if let Some(table) = registry().read().get(&type_id).copied() {
		return table;
	}

	let mut tables = registry().write();
	// Another thread may have got the write lock first
	*tables.entry(type_id).or_insert_with(|| {
		let table = FieldTable::of::<T>();
		tracing::debug!(
			type_name = table.type_name,
			fields = table.len(),
			declaration_ordered = table.is_declaration_ordered(),
			"derived field table"
		);
		&*Box::leak(Box::new(table))
	})
}
