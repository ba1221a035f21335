//! Utility functions for procedural macros
//!
//! This module contains the type inspection used to pick a field's
//! extraction, and the raw-key naming rule.

use syn::Type;

/// Scalar types copied 1:1 from the raw record
const SCALAR_TYPES: &[&str] = &["String", "f64", "i64", "bool", "Value", "Lenient"];

/// How a field is read from the raw record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction {
    Scalar,
    List,
    Nested,
}

/// Get the `T` of an `Option<T>`
pub fn option_inner_type(ty: &Type) -> Option<&Type> {
    generic_argument(ty, "Option")
}

/// Pick the extraction for the inner type of an `Option<T>` field
pub fn extraction_for(inner: &Type) -> Extraction {
    if generic_argument(inner, "Vec").is_some() {
        return Extraction::List;
    }
    match last_segment_ident(inner) {
        Some(ident) if SCALAR_TYPES.contains(&ident.as_str()) => Extraction::Scalar,
        _ => Extraction::Nested,
    }
}

/// Raw key for a field: the camelCase form of its snake_case name
pub fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut capitalize = false;
    for ch in field.trim_start_matches("r#").chars() {
        if ch == '_' {
            capitalize = !out.is_empty();
        } else if capitalize {
            out.extend(ch.to_uppercase());
            capitalize = false;
        } else {
            out.push(ch);
        }
    }
    out
}

fn last_segment_ident(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => type_path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.to_string()),
        _ => None,
    }
}

/// Get the single type argument of `Wrapper<T>`, also when written with a
/// path such as `std::option::Option<T>`
fn generic_argument<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        syn::GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}
