use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::{DataEnum, Generics, Ident};

use crate::{
	fields::get_fields,
	structs::{get_deserialize_expr, get_serialize_stmt},
};

// Variants are written as their `u32` index followed by their fields.

pub fn serialize_enum(
	data: DataEnum,
	ident: Ident,
	generics: Generics,
	generics_for_impl: Generics,
) -> TokenStream {
	let matches = data
		.variants
		.into_iter()
		.enumerate()
		.map(|(index, variant)| {
			let variant_ident = variant.ident;
			let index = Literal::u32_suffixed(index as u32);
			let fields = get_fields(variant.fields);

			// Aliases are required in case of a field called `serializer`.
			// `Self::Foo {x: val_x} =>` instead of just `Self::Foo {x} =>`.
			let var_mappings = fields.iter().map(|field| {
				let (member, alias) = (&field.member, &field.alias);
				quote! { #member: #alias }
			});
			let stmts = fields
				.iter()
				.map(|field| {
					let alias = &field.alias;
					get_serialize_stmt(quote! { #alias }, field)
				})
				.collect::<Vec<_>>();

			quote! {
				Self::#variant_ident { #(#var_mappings),* } => {
					::reflect_raw::Serializer::push_variant(serializer, #index);
					#(#stmts)*
				}
			}
		})
		.collect::<Vec<_>>();

	let match_stmt = if matches.is_empty() {
		quote! { match *self {} }
	} else {
		quote! {
			match self {
				#(#matches)*
			}
		}
	};

	let (impl_generics, _, _) = generics_for_impl.split_for_impl();
	let (_, type_generics, where_clause) = generics.split_for_impl();

	quote! {
		#[automatically_derived]
		impl #impl_generics ::reflect_raw::Serialize<__S> for #ident #type_generics #where_clause {
			#[allow(unused_variables)]
			fn serialize_data(&self, serializer: &mut __S) {
				#match_stmt
			}
		}
	}
}

pub fn deserialize_enum(
	data: DataEnum,
	ident: Ident,
	generics: Generics,
	generics_for_impl: Generics,
) -> TokenStream {
	let matches = data
		.variants
		.into_iter()
		.enumerate()
		.map(|(index, variant)| {
			let variant_ident = variant.ident;
			let index = Literal::u32_suffixed(index as u32);
			let fields = get_fields(variant.fields);
			let members = fields.iter().map(|field| &field.member);
			let reads = fields.iter().map(get_deserialize_expr);

			quote! {
				#index => ::core::result::Result::Ok(Self::#variant_ident { #(#members: #reads),* }),
			}
		})
		.collect::<Vec<_>>();

	let (impl_generics, _, _) = generics_for_impl.split_for_impl();
	let (_, type_generics, where_clause) = generics.split_for_impl();

	quote! {
		#[automatically_derived]
		impl #impl_generics ::reflect_raw::Deserialize for #ident #type_generics #where_clause {
			fn deserialize_data<__D: ::reflect_raw::Deserializer>(
				deserializer: &mut __D,
			) -> ::reflect_raw::Result<Self> {
				match ::reflect_raw::Deserializer::pull_variant(deserializer)? {
					#(#matches)*
					index => ::core::result::Result::Err(::reflect_raw::Error::InvalidVariant {
						type_name: ::core::any::type_name::<Self>(),
						index,
					}),
				}
			}
		}
	}
}
