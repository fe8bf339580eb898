use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_schema_fn(&self) -> TokenStream {
        let jackknife = &self.jackknife;

        let table = self.bean.attrs.table.as_ref().map(|table| quote!(.table(#table)));

        let fields = self.bean.fields.iter().map(|field| {
            let name = &field.name;

            if !field.is_persistent() {
                return quote!(.field(#jackknife::schema::Field::excluded(#name)));
            }

            let ty = &field.ty;
            let column = field.attrs.column.as_ref().map(|column| {
                let name = &column.name;
                quote!(.column(#name))
            });
            let key = match (&field.attrs.key, &field.attrs.auto) {
                (Some(_), Some(_)) => {
                    Some(quote!(.primary_key(#jackknife::schema::AssignType::AutoIncrement)))
                }
                (Some(_), None) => {
                    Some(quote!(.primary_key(#jackknife::schema::AssignType::ByMyself)))
                }
                _ => None,
            };

            quote! {
                .field(
                    #jackknife::schema::Field::new(#name, <#ty as #jackknife::Primitive>::TY)
                        #column
                        #key
                )
            }
        });

        quote! {
            fn schema() -> #jackknife::schema::Model {
                #jackknife::schema::Model::new::<Self>()
                    #table
                    #( #fields )*
            }
        }
    }
}
