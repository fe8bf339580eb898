use super::ErrorSet;

#[derive(Debug, Default)]
pub(crate) struct BeanAttr {
    /// Optional database table name to map the bean to
    pub(crate) table: Option<syn::LitStr>,
}

impl BeanAttr {
    pub(super) fn from_ast(attrs: &[syn::Attribute]) -> syn::Result<BeanAttr> {
        let mut errs = ErrorSet::new();
        let mut result = BeanAttr::default();

        for attr in attrs {
            if attr.path().is_ident("table") {
                if result.table.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[table] attribute"));
                } else if let Some(table) = errs.check(parse_table(attr)) {
                    result.table = Some(table);
                }
            } else if attr.path().is_ident("key")
                || attr.path().is_ident("auto")
                || attr.path().is_ident("column")
                || attr.path().is_ident("skip")
            {
                errs.push(syn::Error::new_spanned(
                    attr,
                    "this attribute applies to bean fields, not the bean itself",
                ));
            }
        }

        match errs.collect() {
            Some(err) => Err(err),
            None => Ok(result),
        }
    }
}

fn parse_table(attr: &syn::Attribute) -> syn::Result<syn::LitStr> {
    let expected = || syn::Error::new_spanned(attr, "expected `table = \"table_name\"`");

    let syn::Meta::NameValue(meta) = &attr.meta else {
        return Err(expected());
    };

    let syn::Expr::Lit(syn::ExprLit {
        lit: syn::Lit::Str(lit),
        ..
    }) = &meta.value
    else {
        return Err(expected());
    };

    if lit.value().trim().is_empty() {
        return Err(syn::Error::new_spanned(lit, "table name cannot be empty"));
    }

    Ok(lit.clone())
}
