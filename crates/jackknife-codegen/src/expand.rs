mod access;
mod schema;

use crate::schema::Bean;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The bean being expanded
    bean: &'a Bean,

    /// Path prefix for jackknife types
    jackknife: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let jackknife = &self.jackknife;
        let ident = &self.bean.ident;
        let (impl_generics, ty_generics, where_clause) = self.bean.generics.split_for_impl();

        let schema_fn = self.expand_schema_fn();
        let get_fn = self.expand_get_fn();
        let set_fn = self.expand_set_fn();

        quote! {
            impl #impl_generics #jackknife::Bean for #ident #ty_generics #where_clause {
                #schema_fn
                #get_fn
                #set_fn
            }
        }
    }
}

pub(super) fn bean(bean: &Bean) -> TokenStream {
    let jackknife = quote!(_jackknife::codegen_support);

    wrap_in_const(Expand { bean, jackknife }.expand())
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use jackknife as _jackknife;
            #code
        };
    }
}
