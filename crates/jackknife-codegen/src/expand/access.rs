use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_get_fn(&self) -> TokenStream {
        let jackknife = &self.jackknife;

        let arms = self.bean.persistent_fields().map(|field| {
            let name = &field.name;
            let ident = &field.ident;
            let ty = &field.ty;

            quote! {
                #name => Ok(<#ty as #jackknife::Primitive>::to_value(&self.#ident)),
            }
        });

        quote! {
            fn get(&self, field: &str) -> #jackknife::Result<#jackknife::Value> {
                match field {
                    #( #arms )*
                    _ => Err(#jackknife::Error::field_access(field, "no such persistent field")),
                }
            }
        }
    }

    pub(super) fn expand_set_fn(&self) -> TokenStream {
        let jackknife = &self.jackknife;

        let arms = self.bean.persistent_fields().map(|field| {
            let name = &field.name;
            let ident = &field.ident;
            let ty = &field.ty;

            quote! {
                #name => {
                    self.#ident = <#ty as #jackknife::Primitive>::load(value)
                        .map_err(|err| #jackknife::Error::field_access(#name, err.to_string()))?;
                    Ok(())
                }
            }
        });

        quote! {
            fn set(&mut self, field: &str, value: #jackknife::Value) -> #jackknife::Result<()> {
                match field {
                    #( #arms )*
                    _ => {
                        let _ = value;
                        Err(#jackknife::Error::field_access(field, "no such persistent field"))
                    }
                }
            }
        }
    }
}
