use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::{spanned::Spanned, DataStruct, Generics, Ident};

use crate::fields::{get_fields, FieldInfo};

pub fn serialize_struct(
	data: DataStruct,
	ident: Ident,
	generics: Generics,
	generics_for_impl: Generics,
) -> TokenStream {
	let fields = get_fields(data.fields);
	let field_count = fields.len();

	let field_stmts = fields
		.iter()
		.map(|field| {
			let member = &field.member;
			get_serialize_stmt(quote! { &self.#member }, field)
		})
		.collect::<Vec<_>>();
	let indices = 0..field_count;

	let (impl_generics, _, _) = generics_for_impl.split_for_impl();
	let (_, type_generics, where_clause) = generics.split_for_impl();

	quote! {
		#[automatically_derived]
		impl #impl_generics ::reflect_raw::Serialize<__S> for #ident #type_generics #where_clause {
			#[allow(unused_variables)]
			fn serialize_data(&self, serializer: &mut __S) {
				#(#field_stmts)*
			}
		}

		#[automatically_derived]
		impl #impl_generics ::reflect_raw::SerializeFields<__S> for #ident #type_generics #where_clause {
			#[allow(unused_variables, unreachable_code)]
			fn serialize_field(&self, index: usize, serializer: &mut __S) -> ::reflect_raw::Result<()> {
				match index {
					#(#indices => { #field_stmts })*
					_ => {
						return ::core::result::Result::Err(::reflect_raw::Error::FieldIndexOutOfRange {
							index,
							count: #field_count,
						})
					}
				}
				::core::result::Result::Ok(())
			}
		}
	}
}

pub fn deserialize_struct(
	data: DataStruct,
	ident: Ident,
	generics: Generics,
	generics_for_impl: Generics,
) -> TokenStream {
	let fields = get_fields(data.fields);
	let field_count = fields.len();

	let members = fields.iter().map(|field| &field.member).collect::<Vec<_>>();
	let reads = fields.iter().map(get_deserialize_expr).collect::<Vec<_>>();
	let in_place_stmts = fields.iter().map(get_in_place_stmt).collect::<Vec<_>>();
	let indices = 0..field_count;

	let (impl_generics, _, _) = generics_for_impl.split_for_impl();
	let (_, type_generics, where_clause) = generics.split_for_impl();

	quote! {
		#[automatically_derived]
		impl #impl_generics ::reflect_raw::Deserialize for #ident #type_generics #where_clause {
			#[allow(unused_variables)]
			fn deserialize_data<__D: ::reflect_raw::Deserializer>(
				deserializer: &mut __D,
			) -> ::reflect_raw::Result<Self> {
				::core::result::Result::Ok(Self { #(#members: #reads),* })
			}

			#[allow(unused_variables)]
			fn deserialize_in_place<__D: ::reflect_raw::Deserializer>(
				&mut self,
				deserializer: &mut __D,
			) -> ::reflect_raw::Result<()> {
				#(#in_place_stmts)*
				::core::result::Result::Ok(())
			}
		}

		#[automatically_derived]
		impl #impl_generics ::reflect_raw::DeserializeFields for #ident #type_generics #where_clause {
			#[allow(unused_variables, unreachable_code)]
			fn deserialize_field<__D: ::reflect_raw::Deserializer>(
				&mut self,
				index: usize,
				deserializer: &mut __D,
			) -> ::reflect_raw::Result<()> {
				match index {
					#(#indices => { #in_place_stmts })*
					_ => {
						return ::core::result::Result::Err(::reflect_raw::Error::FieldIndexOutOfRange {
							index,
							count: #field_count,
						})
					}
				}
				::core::result::Result::Ok(())
			}
		}
	}
}

/// Statement serializing `value`, which evaluates to a reference to the field.
pub fn get_serialize_stmt(value: TokenStream, field: &FieldInfo) -> TokenStream {
	let ty = &field.ty;
	match &field.with {
		Some(with) => {
			quote_spanned! {ty.span()=>
				<#with as ::reflect_raw::SerializeWith<#ty, __S>>::serialize_data_with(#value, serializer);
			}
		}
		None => {
			quote_spanned! {ty.span()=>
				<#ty as ::reflect_raw::Serialize<__S>>::serialize_data(#value, serializer);
			}
		}
	}
}

/// Expression reading a field's value, propagating errors.
pub fn get_deserialize_expr(field: &FieldInfo) -> TokenStream {
	let ty = &field.ty;
	match &field.with {
		Some(with) => {
			quote_spanned! {ty.span()=>
				<#with as ::reflect_raw::DeserializeWith<#ty>>::deserialize_data_with(deserializer)?
			}
		}
		None => {
			quote_spanned! {ty.span()=>
				<#ty as ::reflect_raw::Deserialize>::deserialize_data(deserializer)?
			}
		}
	}
}

fn get_in_place_stmt(field: &FieldInfo) -> TokenStream {
	let (member, ty) = (&field.member, &field.ty);
	match &field.with {
		Some(with) => {
			quote_spanned! {ty.span()=>
				self.#member = <#with as ::reflect_raw::DeserializeWith<#ty>>::deserialize_data_with(deserializer)?;
			}
		}
		None => {
			quote_spanned! {ty.span()=>
				<#ty as ::reflect_raw::Deserialize>::deserialize_in_place(&mut self.#member, deserializer)?;
			}
		}
	}
}
