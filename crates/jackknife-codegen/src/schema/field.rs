use super::{Column, ErrorSet};

use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier, used to access the field in generated code
    pub(crate) ident: syn::Ident,

    /// Field name as exposed to the schema, without any `r#` prefix
    pub(crate) name: String,

    /// Field type
    pub(crate) ty: syn::Type,

    /// Field attributes
    pub(crate) attrs: FieldAttr,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// Set if the field is annotated with `#[key]`
    pub(crate) key: Option<syn::Attribute>,

    /// Set if the database assigns the key: `#[auto]`
    pub(crate) auto: Option<syn::Attribute>,

    /// Optional database column name
    pub(crate) column: Option<Column>,

    /// Set if the field is never persisted: `#[skip]`
    pub(crate) skip: Option<syn::Attribute>,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Field> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "bean fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if attr.path().is_ident("key") {
                if attrs.key.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
                } else {
                    errs.check(attr.meta.require_path_only().map(|_| ()));
                    attrs.key = Some(attr.clone());
                }
            } else if attr.path().is_ident("auto") {
                if attrs.auto.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[auto] attribute"));
                } else {
                    errs.check(attr.meta.require_path_only().map(|_| ()));
                    attrs.auto = Some(attr.clone());
                }
            } else if attr.path().is_ident("column") {
                if attrs.column.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[column] attribute",
                    ));
                } else {
                    attrs.column = errs.check(Column::from_ast(attr));
                }
            } else if attr.path().is_ident("skip") {
                if attrs.skip.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[skip] attribute"));
                } else {
                    errs.check(attr.meta.require_path_only().map(|_| ()));
                    attrs.skip = Some(attr.clone());
                }
            }
        }

        if let (Some(auto), None) = (&attrs.auto, &attrs.key) {
            errs.push(syn::Error::new_spanned(
                auto,
                "#[auto] must be combined with #[key]",
            ));
        }

        if let Some(skip) = &attrs.skip {
            if attrs.key.is_some() || attrs.auto.is_some() || attrs.column.is_some() {
                errs.push(syn::Error::new_spanned(
                    skip,
                    "#[skip] fields cannot be keys or carry a column name",
                ));
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Field {
            ident: ident.clone(),
            name: ident.unraw().to_string(),
            ty: field.ty.clone(),
            attrs,
        })
    }

    pub(crate) fn is_persistent(&self) -> bool {
        self.attrs.skip.is_none()
    }
}
