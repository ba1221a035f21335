//! FromRecord derive macro implementation
//!
//! This module contains the implementation of the FromRecord derive macro,
//! which generates the transformer, presence and serialization impls of a
//! domain struct.

use darling::{FromDeriveInput, FromField, ast};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use crate::utils::{Extraction, camel_case, extraction_for, option_inner_type};

/// Receiver for the struct that derives FromRecord
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(record), supports(struct_named))]
pub struct FromRecordReceiver {
    /// The struct identifier
    ident: syn::Ident,
    generics: syn::Generics,
    /// The struct data with parsed fields
    data: ast::Data<(), FromRecordFieldReceiver>,
}

/// Receiver for the fields in the struct
#[derive(Debug, FromField)]
#[darling(attributes(record))]
pub struct FromRecordFieldReceiver {
    /// The field identifier
    ident: Option<syn::Ident>,
    /// The field type
    ty: syn::Type,
    /// Raw key, when it differs from the camelCase field name
    #[darling(default)]
    rename: Option<String>,
    /// Serialize an absent value as `null` instead of skipping it
    #[darling(default)]
    keep_null: bool,
    /// Custom extraction function
    #[darling(default)]
    with: Option<syn::Path>,
}

/// A field ready for code generation
struct RecordField<'a> {
    ident: &'a syn::Ident,
    key: String,
    extraction: TokenStream2,
    keep_null: bool,
}

/// Process the FromRecord derive macro
pub fn process_derive_from_record(input: TokenStream) -> TokenStream {
    // Parse the input tokens into a syntax tree
    let input = parse_macro_input!(input as DeriveInput);

    // Parse with darling
    let receiver = match FromRecordReceiver::from_derive_input(&input) {
        Ok(receiver) => receiver,
        Err(err) => return err.write_errors().into(),
    };

    match generate_from_record_impl(&receiver) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => err.to_compile_error().into(),
    }
}

fn record_fields(receiver: &FromRecordReceiver) -> syn::Result<Vec<RecordField<'_>>> {
    let ast::Data::Struct(fields) = &receiver.data else {
        unreachable!("Darling ensures this is a struct")
    };

    fields
        .iter()
        .map(|field| {
            let ident = field
                .ident
                .as_ref()
                .ok_or_else(|| syn::Error::new_spanned(&field.ty, "expected a named field"))?;
            let inner = option_inner_type(&field.ty).ok_or_else(|| {
                syn::Error::new_spanned(&field.ty, "FromRecord fields must be `Option<_>`")
            })?;
            let key = field
                .rename
                .clone()
                .unwrap_or_else(|| camel_case(&ident.to_string()));

            let extraction = match (&field.with, extraction_for(inner)) {
                (Some(function), _) => quote! { #function(raw, bindings) },
                (None, Extraction::Scalar) => quote! {
                    ::byggesak_view::record::scalar(raw, #key)
                },
                (None, Extraction::List) => quote! {
                    ::byggesak_view::record::list(raw, #key, bindings)
                },
                (None, Extraction::Nested) => quote! {
                    ::byggesak_view::record::nested(raw, #key, bindings)
                },
            };

            Ok(RecordField {
                ident,
                key,
                extraction,
                keep_null: field.keep_null,
            })
        })
        .collect()
}

/// Generate the FromRecord, HasValue and Serialize implementations
fn generate_from_record_impl(receiver: &FromRecordReceiver) -> syn::Result<TokenStream2> {
    let struct_name = &receiver.ident;
    let (impl_generics, ty_generics, where_clause) = receiver.generics.split_for_impl();
    let fields = record_fields(receiver)?;

    let keys = fields.iter().map(|field| &field.key);
    let initializers = fields.iter().map(|field| {
        let ident = field.ident;
        let extraction = &field.extraction;
        quote! { #ident: #extraction }
    });
    let presence_checks = fields.iter().map(|field| {
        let ident = field.ident;
        quote! { || ::byggesak_view::presence::HasValue::has_value(&self.#ident) }
    });
    let entries = fields.iter().map(|field| {
        let ident = field.ident;
        let key = &field.key;
        if field.keep_null {
            quote! { map.serialize_entry(#key, &self.#ident)?; }
        } else {
            quote! {
                if let ::core::option::Option::Some(value) = &self.#ident {
                    map.serialize_entry(#key, value)?;
                }
            }
        }
    });

    Ok(quote! {
        impl #impl_generics ::byggesak_view::record::FromRecord for #struct_name #ty_generics #where_clause {
            const FIELDS: &'static [&'static str] = &[#(#keys),*];

            #[allow(unused_variables)]
            fn from_record(
                raw: &::byggesak_view::__private::Value,
                bindings: ::core::option::Option<&::byggesak_view::resources::ResourceBindings>,
            ) -> Self {
                Self {
                    #(#initializers),*
                }
            }

            fn has_any_value(&self) -> bool {
                false #(#presence_checks)*
            }
        }

        impl #impl_generics ::byggesak_view::presence::HasValue for #struct_name #ty_generics #where_clause {
            fn has_value(&self) -> bool {
                ::byggesak_view::record::FromRecord::has_any_value(self)
            }
        }

        impl #impl_generics ::byggesak_view::__private::serde::Serialize for #struct_name #ty_generics #where_clause {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: ::byggesak_view::__private::serde::Serializer,
            {
                use ::byggesak_view::__private::serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(::core::option::Option::None)?;
                #(#entries)*
                map.end()
            }
        }
    })
}
