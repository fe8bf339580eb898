use super::{BeanAttr, ErrorSet, Field};

#[derive(Debug)]
pub(crate) struct Bean {
    /// Bean type identifier
    pub(crate) ident: syn::Ident,

    /// Type generics
    pub(crate) generics: syn::Generics,

    /// Bean attributes
    pub(crate) attrs: BeanAttr,

    /// Declared fields, in order
    pub(crate) fields: Vec<Field>,
}

impl Bean {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Bean> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "bean fields must be named",
            ));
        };

        let mut errs = ErrorSet::new();
        let attrs = errs.check(BeanAttr::from_ast(&ast.attrs));

        let mut fields = vec![];
        for field in &node.named {
            if let Some(field) = errs.check(Field::from_ast(field)) {
                fields.push(field);
            }
        }

        // The database assigns at most one key per row.
        let mut auto = fields.iter().filter_map(|field| field.attrs.auto.as_ref());
        if auto.next().is_some() {
            for attr in auto {
                errs.push(syn::Error::new_spanned(
                    attr,
                    "only one field may be #[auto]",
                ));
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Bean {
            ident: ast.ident.clone(),
            generics: ast.generics.clone(),
            attrs: attrs.unwrap_or_default(),
            fields,
        })
    }

    pub(crate) fn persistent_fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(|field| field.is_persistent())
    }
}
