// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Compile-time derivation descriptor.
//!
//! Built once from the derive input and validated against the ceiling of the
//! chosen configuration before any token is generated. A failed validation
//! therefore never leaves a partially derived type behind.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::spanned::Spanned;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, Type};

/// Maximum number of components of a `#[derive(Composition)]` type.
pub(crate) const COMPOSITION_CEILING: usize = 2;

/// Maximum number of components of a `#[derive(Concord)]` type.
pub(crate) const CONCORD_CEILING: usize = 3;

/// Names the generated inherent items already occupy.
const RESERVED_NAMES: &[&str] = &["new"];

/// The three ready-made parameterizations of the derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Configuration {
    Composition,
    Concord,
    ConcordPublic,
}

impl Configuration {
    pub(crate) const fn ceiling(self) -> usize {
        match self {
            Self::Composition => COMPOSITION_CEILING,
            Self::Concord | Self::ConcordPublic => CONCORD_CEILING,
        }
    }

    /// Accessor visibility before any republish pass.
    pub(crate) const fn base_visibility(self) -> Visibility {
        match self {
            Self::Composition => Visibility::Public,
            Self::Concord | Self::ConcordPublic => Visibility::Protected,
        }
    }

    /// Path of the matching runtime `concord::Configuration` variant.
    pub(crate) fn runtime_tokens(self) -> TokenStream {
        match self {
            Self::Composition => quote! { ::concord::Configuration::Composition },
            Self::Concord => quote! { ::concord::Configuration::Concord },
            Self::ConcordPublic => quote! { ::concord::Configuration::ConcordPublic },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Visibility {
    Public,
    Protected,
}

impl Visibility {
    pub(crate) fn runtime_tokens(self) -> TokenStream {
        match self {
            Self::Public => quote! { ::concord::Visibility::Public },
            Self::Protected => quote! { ::concord::Visibility::Protected },
        }
    }
}

/// One named component, in declared order.
pub(crate) struct Component {
    pub(crate) name: Ident,
    pub(crate) ty: Type,
    pub(crate) visibility: Visibility,
}

/// Which accessors `#[concord(public ..)]` republishes.
enum Publish {
    All,
    Only(Vec<Ident>),
}

struct ContainerOptions {
    publish: Option<(Span, Publish)>,
    debug: bool,
}

impl ContainerOptions {
    fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut options = Self {
            publish: None,
            debug: true,
        };

        for attr in attrs.iter().filter(|a| a.path().is_ident("concord")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("public") {
                    let span = meta.path.span();
                    if meta.input.peek(syn::token::Paren) {
                        let mut names = Vec::new();
                        meta.parse_nested_meta(|inner| {
                            let Some(name) = inner.path.get_ident() else {
                                return Err(inner.error("expected a component name"));
                            };
                            names.push(name.clone());
                            Ok(())
                        })?;
                        options.publish = Some((span, Publish::Only(names)));
                    } else {
                        options.publish = Some((span, Publish::All));
                    }
                    Ok(())
                } else if meta.path.is_ident("debug") {
                    let value: syn::LitBool = meta.value()?.parse()?;
                    options.debug = value.value;
                    Ok(())
                } else {
                    Err(meta.error("unsupported concord attribute, expected `public` or `debug`"))
                }
            })?;
        }

        Ok(options)
    }
}

/// `#[concord(memo)]` marks a cache field that is not a component.
fn is_memo(attrs: &[Attribute]) -> syn::Result<bool> {
    let mut memo = false;
    for attr in attrs.iter().filter(|a| a.path().is_ident("concord")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("memo") {
                memo = true;
                Ok(())
            } else {
                Err(meta.error("unsupported concord field attribute, expected `memo`"))
            }
        })?;
    }
    Ok(memo)
}

/// Validated description of one derivation.
pub(crate) struct Descriptor {
    pub(crate) configuration: Configuration,
    pub(crate) components: Vec<Component>,
    pub(crate) memo_fields: Vec<Ident>,
    pub(crate) debug: bool,
}

impl Descriptor {
    /// Reads the component list of `input` and checks it against `configuration`.
    pub(crate) fn from_input(input: &DeriveInput, configuration: Configuration) -> syn::Result<Self> {
        let fields = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(f) => &f.named,
                _ => {
                    return Err(syn::Error::new_spanned(
                        &input.ident,
                        "Only named fields are supported",
                    ))
                }
            },
            _ => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "Only structs are supported",
                ))
            }
        };

        let options = ContainerOptions::parse(&input.attrs)?;

        let mut components = Vec::new();
        let mut memo_fields = Vec::new();

        for field in fields {
            let Some(name) = field.ident.clone() else {
                return Err(syn::Error::new_spanned(field, "Field must have a name"));
            };

            if !matches!(field.vis, syn::Visibility::Inherited) {
                return Err(syn::Error::new_spanned(
                    &field.vis,
                    format!("field `{name}` must be private, value objects are immutable after construction"),
                ));
            }

            if is_memo(&field.attrs)? {
                memo_fields.push(name);
                continue;
            }

            if RESERVED_NAMES.iter().any(|reserved| name == reserved) {
                return Err(syn::Error::new_spanned(
                    &name,
                    format!("`{name}` clashes with a generated method and cannot name a component"),
                ));
            }

            components.push(Component {
                name,
                ty: field.ty.clone(),
                visibility: configuration.base_visibility(),
            });
        }

        let ceiling = configuration.ceiling();
        if components.len() > ceiling {
            return Err(syn::Error::new_spanned(
                &input.ident,
                format!("composition of more than {ceiling} objects is not allowed"),
            ));
        }
        if components.is_empty() {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "a value object needs at least one component",
            ));
        }

        let mut descriptor = Self {
            configuration,
            components,
            memo_fields,
            debug: options.debug,
        };
        descriptor.republish(options.publish)?;
        Ok(descriptor)
    }

    /// Second pass over the derived accessor set: flips the selected
    /// accessors to public. Constructor and equality are left alone.
    fn republish(&mut self, publish: Option<(Span, Publish)>) -> syn::Result<()> {
        match (self.configuration, publish) {
            (Configuration::ConcordPublic, None) | (Configuration::Concord, Some((_, Publish::All))) => {
                for component in &mut self.components {
                    component.visibility = Visibility::Public;
                }
                Ok(())
            }
            (Configuration::Concord, Some((_, Publish::Only(names)))) => {
                for name in names {
                    let Some(component) = self.components.iter_mut().find(|c| c.name == name) else {
                        return Err(syn::Error::new_spanned(
                            &name,
                            format!("`{name}` is not a component"),
                        ));
                    };
                    component.visibility = Visibility::Public;
                }
                Ok(())
            }
            (_, None) => Ok(()),
            (_, Some((span, _))) => Err(syn::Error::new(
                span,
                "#[concord(public)] only applies to #[derive(Concord)], accessors are already public",
            )),
        }
    }

    pub(crate) fn arity(&self) -> usize {
        self.components.len()
    }
}
