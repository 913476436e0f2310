use proc_macro2::Span;
use quote::format_ident;
use syn::{ext::IdentExt, Fields, Ident, Index, Member, Meta, MetaList, NestedMeta, Path, Type};

/// Parsed field of a struct or enum variant.
pub struct FieldInfo {
	pub member: Member,
	pub name: String,
	pub ty: Type,
	/// Local binding for the field's value.
	/// Prefixed in case of a field called `serializer` or `deserializer`.
	pub alias: Ident,
	pub with: Option<Path>,
}

pub fn get_fields(fields: Fields) -> Vec<FieldInfo> {
	fields
		.into_iter()
		.enumerate()
		.map(|(index, field)| {
			let with = get_with(&field.attrs);
			let (member, name) = match field.ident {
				Some(ident) => (Member::Named(ident.clone()), ident.unraw().to_string()),
				None => (
					Member::Unnamed(Index {
						index: index as u32,
						span: Span::call_site(),
					}),
					index.to_string(),
				),
			};
			FieldInfo {
				member,
				alias: format_ident!("val_{}", name),
				name,
				ty: field.ty,
				with,
			}
		})
		.collect()
}

/// Get proxy type from `#[ser_with(Proxy)]` attribute, if present.
fn get_with(attrs: &[syn::Attribute]) -> Option<Path> {
	let attrs = attrs
		.iter()
		.filter(|attr| attr.path.is_ident("ser_with"))
		.collect::<Vec<_>>();

	if attrs.is_empty() {
		return None;
	}

	if attrs.len() != 1 {
		panic!("Cannot have more than 1 `#[ser_with]` attribute on a field");
	}

	if let Ok(Meta::List(MetaList { nested, .. })) = attrs[0].parse_meta() {
		if nested.len() == 1 {
			if let Some(NestedMeta::Meta(Meta::Path(with))) = nested.into_iter().next() {
				return Some(with);
			}
		}
	}
	panic!("`#[ser_with]` needs a path e.g. `#[ser_with(ForeignTypeProxy)]`");
}
