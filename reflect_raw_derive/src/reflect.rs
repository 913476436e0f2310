use proc_macro2::TokenStream;
use quote::quote;
use syn::{DataStruct, Generics, Ident};

use crate::fields::get_fields;

pub fn derive_reflect(data: DataStruct, ident: Ident, generics: Generics) -> TokenStream {
	let fields = get_fields(data.fields);
	let field_count = fields.len();

	let members = fields.iter().map(|field| &field.member).collect::<Vec<_>>();
	let types = fields.iter().map(|field| &field.ty).collect::<Vec<_>>();
	let aliases = fields.iter().map(|field| &field.alias).collect::<Vec<_>>();
	let indices = 0..field_count;
	let descriptors = fields.iter().enumerate().map(|(index, field)| {
		let (member, ty, name) = (&field.member, &field.ty, &field.name);
		quote! {
			::reflect_raw::FieldDescriptor::new::<#ty>(#index, #name, ::core::mem::offset_of!(Self, #member))
		}
	});

	let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

	quote! {
		#[automatically_derived]
		impl #impl_generics ::reflect_raw::Reflect for #ident #type_generics #where_clause {
			const FIELD_COUNT: usize = #field_count;

			type Fields = ::reflect_raw::Record![#(#types),*];
			type Refs<'__a> = ::reflect_raw::Record![#(&'__a #types),*] where Self: '__a;
			type RefsMut<'__a> = ::reflect_raw::Record![#(&'__a mut #types),*] where Self: '__a;
			type FieldPtrs = ::reflect_raw::Record![#(::reflect_raw::FieldPtr<Self, #types>),*];

			fn field_descriptors() -> ::std::vec::Vec<::reflect_raw::FieldDescriptor> {
				::std::vec![#(#descriptors),*]
			}

			#[allow(unused_unsafe)]
			fn field_ptrs() -> Self::FieldPtrs {
				// SAFETY: Offsets are of the fields with these types
				unsafe {
					::reflect_raw::record![
						#(::reflect_raw::FieldPtr::new_unchecked(#indices, ::core::mem::offset_of!(Self, #members))),*
					]
				}
			}

			#[inline]
			fn as_record(&self) -> Self::Refs<'_> {
				::reflect_raw::record![#(&self.#members),*]
			}

			#[inline]
			fn tie_record(&mut self) -> Self::RefsMut<'_> {
				::reflect_raw::record![#(&mut self.#members),*]
			}

			#[inline]
			fn into_record(self) -> Self::Fields {
				let Self { #(#members: #aliases),* } = self;
				::reflect_raw::record![#(#aliases),*]
			}

			#[inline]
			fn from_record(fields: Self::Fields) -> Self {
				let ::reflect_raw::record_pat![#(#aliases),*] = fields;
				Self { #(#members: #aliases),* }
			}
		}
	}
}
