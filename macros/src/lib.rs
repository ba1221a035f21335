//! Procedural macros for the byggesak-view crate
//!
//! This crate provides the `FromRecord` derive, which generates a tolerant
//! raw-record transformer for a domain struct, removing the per-field
//! boilerplate of copying scalars, constructing nested objects and mapping
//! lists.

use proc_macro::TokenStream;

// Import modules
mod from_record;
mod utils;

// Tests
#[cfg(test)]
mod tests;

/// Derive macro for generating domain transformers
///
/// Every field must be an `Option<_>`. The raw key defaults to the camelCase
/// form of the field name. The extraction is picked from the field type:
///
/// - `Option<String>`, `Option<f64>`, `Option<i64>`, `Option<bool>` and
///   `Option<Value>` are copied as scalars
/// - `Option<Vec<T>>` maps each raw item through `T`
/// - any other `Option<T>` constructs `T` when the raw sub-object is truthy
///
/// The derive also implements `HasValue` (present iff any field is) and
/// `Serialize` (absent fields are skipped).
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Debug, Clone, Default, PartialEq, FromRecord)]
/// struct Eiendom {
///     eiendomsidentifikasjon: Option<Eiendomsidentifikasjon>,
///     adresse: Option<EiendommensAdresse>,
///     bygningsnummer: Option<String>,
///
///     #[record(keep_null)]
///     kommunenavn: Option<String>,
///
///     #[record(rename = "bolignummer")]
///     bruksenhetsnummer: Option<String>,
/// }
/// ```
///
/// `#[record(with = "path::to::function")]` replaces the extraction with a
/// call to `fn(&Value, Option<&ResourceBindings>) -> Option<T>`.
#[proc_macro_derive(FromRecord, attributes(record))]
pub fn derive_from_record(input: TokenStream) -> TokenStream {
    from_record::process_derive_from_record(input)
}
