use syn::Attribute;

/// Marker attribute stripping

/// Check if an attribute matches a given path (e.g., "observable")
fn is_attribute(attr: &Attribute, name: &str) -> bool {
    attr.path().is_ident(name)
}

/// Remove every attribute with the given name
pub fn remove_attribute(attrs: &mut Vec<Attribute>, name: &str) {
    attrs.retain(|attr| !is_attribute(attr, name));
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_remove_attribute() {
        let mut field: syn::Field = parse_quote! {
            #[observable]
            #[doc = "kept"]
            _counter: i32
        };
        remove_attribute(&mut field.attrs, "observable");
        assert_eq!(field.attrs.len(), 1);
        assert!(is_attribute(&field.attrs[0], "doc"));
    }
}
