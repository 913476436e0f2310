use proc_macro2::TokenStream;
use syn::{parse_macro_input, parse_quote, Data, DeriveInput, GenericParam, Generics};

mod fields;
mod reflect;
use reflect::derive_reflect;
mod structs;
use structs::{deserialize_struct, serialize_struct};
mod enums;
use enums::{deserialize_enum, serialize_enum};

#[proc_macro_derive(Reflect)]
pub fn reflect(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	match input.data {
		Data::Struct(data) => derive_reflect(data, input.ident, input.generics).into(),
		Data::Enum(_) => panic!("Deriving `Reflect` on enums not supported"),
		Data::Union(_) => panic!("Deriving `Reflect` on unions not supported"),
	}
}

#[proc_macro_derive(Serialize, attributes(ser_with))]
pub fn serialize(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	serialize_impl(input).into()
}

fn serialize_impl(input: DeriveInput) -> TokenStream {
	let generics = input.generics;
	let generics_for_impl = get_generics(
		&generics,
		parse_quote!(::reflect_raw::Serialize<__S>),
		Some(parse_quote!(__S: ::reflect_raw::Serializer)),
	);

	match input.data {
		Data::Struct(data) => serialize_struct(data, input.ident, generics, generics_for_impl),
		Data::Enum(data) => serialize_enum(data, input.ident, generics, generics_for_impl),
		Data::Union(_) => panic!("Deriving `Serialize` on unions not supported"),
	}
}

#[proc_macro_derive(Deserialize, attributes(ser_with))]
pub fn deserialize(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	deserialize_impl(input).into()
}

fn deserialize_impl(input: DeriveInput) -> TokenStream {
	let generics = input.generics;
	let generics_for_impl = get_generics(&generics, parse_quote!(::reflect_raw::Deserialize), None);

	match input.data {
		Data::Struct(data) => deserialize_struct(data, input.ident, generics, generics_for_impl),
		Data::Enum(data) => deserialize_enum(data, input.ident, generics, generics_for_impl),
		Data::Union(_) => panic!("Deriving `Deserialize` on unions not supported"),
	}
}

/// Amend generics to bound every type parameter by `bound`,
/// and add `extra` parameter (e.g. the Serializer type) if provided.
fn get_generics(
	generics: &Generics,
	bound: syn::TypeParamBound,
	extra: Option<GenericParam>,
) -> Generics {
	let mut generics_for_impl = generics.clone();
	for param in generics_for_impl.params.iter_mut() {
		if let GenericParam::Type(type_param) = param {
			type_param.bounds.push(bound.clone());
		}
	}
	if let Some(extra) = extra {
		generics_for_impl.params.push(extra);
	}
	generics_for_impl
}
