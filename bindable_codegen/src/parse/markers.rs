//! The closed marker vocabulary.
//!
//! Markers are ordinary attributes recognized by their single-segment path.
//! Any attribute whose path is not one of [`MarkerKind`]'s names is left
//! alone.

use std::str::FromStr;

use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};
use syn::{Attribute, LitStr, Meta};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum MarkerKind {
    ReactiveModel,
    Observable,
    DependentUpdater,
    ClickHandler,
}

/// A parsed marker with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    /// `#[reactive_model]` or `#[reactive_model(allow_cycles)]`
    ReactiveModel { allow_cycles: bool },
    /// `#[observable]`
    Observable,
    /// `#[dependent_updater]`
    DependentUpdater,
    /// `#[click_handler("Element")]`
    ClickHandler { element: String },
}

impl MarkerKind {
    pub fn of(attr: &Attribute) -> Option<Self> {
        let ident = attr.path().get_ident()?;
        MarkerKind::from_str(&ident.to_string()).ok()
    }

    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn all_names() -> Vec<&'static str> {
        MarkerKind::iter().map(MarkerKind::name).collect()
    }
}

impl Marker {
    pub fn kind(&self) -> MarkerKind {
        match self {
            Marker::ReactiveModel { .. } => MarkerKind::ReactiveModel,
            Marker::Observable => MarkerKind::Observable,
            Marker::DependentUpdater => MarkerKind::DependentUpdater,
            Marker::ClickHandler { .. } => MarkerKind::ClickHandler,
        }
    }

    /// Parse an attribute; `None` when it is not a marker at all.
    pub fn parse(attr: &Attribute) -> Option<syn::Result<Marker>> {
        let kind = MarkerKind::of(attr)?;
        Some(Self::parse_kind(kind, attr))
    }

    fn parse_kind(kind: MarkerKind, attr: &Attribute) -> syn::Result<Marker> {
        match kind {
            MarkerKind::ReactiveModel => {
                let mut allow_cycles = false;
                if let Meta::List(_) = &attr.meta {
                    attr.parse_nested_meta(|meta| {
                        if meta.path.is_ident("allow_cycles") {
                            allow_cycles = true;
                            Ok(())
                        } else {
                            Err(meta.error("expected `allow_cycles`"))
                        }
                    })?;
                } else {
                    attr.meta.require_path_only()?;
                }
                Ok(Marker::ReactiveModel { allow_cycles })
            }
            MarkerKind::Observable => {
                attr.meta.require_path_only()?;
                Ok(Marker::Observable)
            }
            MarkerKind::DependentUpdater => {
                attr.meta.require_path_only()?;
                Ok(Marker::DependentUpdater)
            }
            MarkerKind::ClickHandler => {
                let element: LitStr = attr.parse_args().map_err(|e| {
                    syn::Error::new(
                        e.span(),
                        "click_handler must be in the form #[click_handler(\"ElementName\")]",
                    )
                })?;
                if element.value().is_empty() {
                    return Err(syn::Error::new_spanned(
                        &element,
                        "click_handler element name must not be empty",
                    ));
                }
                Ok(Marker::ClickHandler {
                    element: element.value(),
                })
            }
        }
    }
}

/// First marker of the given kind among `attrs`, parsed.
pub fn find_marker(attrs: &[Attribute], kind: MarkerKind) -> Option<(&Attribute, syn::Result<Marker>)> {
    attrs
        .iter()
        .find(|attr| MarkerKind::of(attr) == Some(kind))
        .map(|attr| (attr, Marker::parse_kind(kind, attr)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_parse_markers() {
        let attr: Attribute = parse_quote!(#[observable]);
        assert_eq!(Marker::parse(&attr).unwrap().unwrap(), Marker::Observable);

        let attr: Attribute = parse_quote!(#[click_handler("Go")]);
        assert_eq!(
            Marker::parse(&attr).unwrap().unwrap(),
            Marker::ClickHandler {
                element: "Go".to_string()
            }
        );

        let attr: Attribute = parse_quote!(#[reactive_model(allow_cycles)]);
        assert_eq!(
            Marker::parse(&attr).unwrap().unwrap(),
            Marker::ReactiveModel { allow_cycles: true }
        );
    }

    #[test]
    fn test_non_markers_are_ignored() {
        let attr: Attribute = parse_quote!(#[derive(Debug)]);
        assert!(Marker::parse(&attr).is_none());
        let attr: Attribute = parse_quote!(#[bindable::observable]);
        assert!(Marker::parse(&attr).is_none());
    }

    #[test]
    fn test_malformed_markers() {
        let attr: Attribute = parse_quote!(#[click_handler(Go)]);
        assert!(Marker::parse(&attr).unwrap().is_err());
        let attr: Attribute = parse_quote!(#[click_handler("")]);
        assert!(Marker::parse(&attr).unwrap().is_err());
        let attr: Attribute = parse_quote!(#[observable(x)]);
        assert!(Marker::parse(&attr).unwrap().is_err());
        let attr: Attribute = parse_quote!(#[reactive_model(nope)]);
        assert!(Marker::parse(&attr).unwrap().is_err());
    }

    #[test]
    fn test_marker_names_round_trip() {
        for name in MarkerKind::all_names() {
            assert_eq!(MarkerKind::from_str(name).unwrap().name(), name);
        }
    }
}
