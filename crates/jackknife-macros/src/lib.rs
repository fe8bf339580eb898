extern crate proc_macro;

use proc_macro::TokenStream;

/// Implements `jackknife::Bean` for a struct with named fields.
///
/// Field attributes: `#[key]` marks a primary key column assigned by the
/// caller, `#[key] #[auto]` one assigned by the database, `#[column("name")]`
/// overrides the derived column name and `#[skip]` excludes the field from
/// persistence. `#[table = "name"]` on the struct overrides the table name.
#[proc_macro_derive(Bean, attributes(key, auto, column, skip, table))]
pub fn derive_bean(input: TokenStream) -> TokenStream {
    match jackknife_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
