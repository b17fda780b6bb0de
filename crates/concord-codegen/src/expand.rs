// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Token generation for the derivation steps.
//!
//! Steps run in a fixed order: constructor, accessors (with visibility
//! applied), equality/hash, then the immutability marker. Later steps only
//! read the component list the earlier ones were generated from.

use crate::descriptor::{Configuration, Descriptor, Visibility};
use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_quote, DeriveInput, Generics, Ident, Type, TypeParamBound};

/// Expands one `#[derive(..)]` into the full derived surface.
pub(crate) fn expand(input: &DeriveInput, configuration: Configuration) -> syn::Result<TokenStream> {
    let descriptor = Descriptor::from_input(input, configuration)?;
    let derivation = Derivation::new(input, &descriptor);

    let constructor = derivation.constructor();
    let accessors = derivation.accessors();
    let equality = derivation.equality();
    let debug = derivation.debug();
    let value_object = derivation.value_object();

    Ok(quote! {
        #constructor
        #accessors
        #equality
        #debug
        #value_object
    })
}

struct Derivation<'a> {
    input: &'a DeriveInput,
    descriptor: &'a Descriptor,
    names: Vec<&'a Ident>,
    types: Vec<&'a Type>,
}

impl<'a> Derivation<'a> {
    fn new(input: &'a DeriveInput, descriptor: &'a Descriptor) -> Self {
        Self {
            input,
            descriptor,
            names: descriptor.components.iter().map(|c| &c.name).collect(),
            types: descriptor.components.iter().map(|c| &c.ty).collect(),
        }
    }

    fn constructor(&self) -> TokenStream {
        let ident = &self.input.ident;
        let (impl_generics, ty_generics, where_clause) = self.input.generics.split_for_impl();
        let names = &self.names;
        let types = &self.types;
        let memo = &self.descriptor.memo_fields;
        let doc = format!(
            "Builds a `{ident}` from its {} components, in declared order.",
            self.descriptor.arity()
        );

        quote! {
            impl #impl_generics #ident #ty_generics #where_clause {
                #[doc = #doc]
                #[must_use]
                pub fn new(#(#names: #types),*) -> Self {
                    Self {
                        #(#names,)*
                        #(#memo: ::core::default::Default::default(),)*
                    }
                }
            }

            impl #impl_generics ::core::convert::From<(#(#types,)*)> for #ident #ty_generics #where_clause {
                fn from((#(#names,)*): (#(#types,)*)) -> Self {
                    Self::new(#(#names),*)
                }
            }
        }
    }

    fn accessors(&self) -> TokenStream {
        let ident = &self.input.ident;
        let (impl_generics, ty_generics, where_clause) = self.input.generics.split_for_impl();

        let accessors = self.descriptor.components.iter().map(|component| {
            let name = &component.name;
            let ty = &component.ty;
            let visibility = accessor_visibility(component.visibility);
            let doc = format!("Returns the `{name}` component.");
            quote! {
                #[doc = #doc]
                #[inline]
                #[must_use]
                #visibility fn #name(&self) -> &#ty {
                    &self.#name
                }
            }
        });

        quote! {
            impl #impl_generics #ident #ty_generics #where_clause {
                #(#accessors)*
            }
        }
    }

    fn equality(&self) -> TokenStream {
        let ident = &self.input.ident;
        let names = &self.names;

        let partial_eq = bounded(&self.input.generics, &[parse_quote!(::core::cmp::PartialEq)]);
        let (pe_impl, pe_ty, pe_where) = partial_eq.split_for_impl();
        let eq = bounded(&self.input.generics, &[parse_quote!(::core::cmp::Eq)]);
        let (eq_impl, eq_ty, eq_where) = eq.split_for_impl();
        let hash = bounded(&self.input.generics, &[parse_quote!(::core::hash::Hash)]);
        let (hash_impl, hash_ty, hash_where) = hash.split_for_impl();

        quote! {
            impl #pe_impl ::core::cmp::PartialEq for #ident #pe_ty #pe_where {
                fn eq(&self, other: &Self) -> bool {
                    true #(&& ::core::cmp::PartialEq::eq(&self.#names, &other.#names))*
                }
            }

            impl #eq_impl ::core::cmp::Eq for #ident #eq_ty #eq_where {}

            impl #hash_impl ::core::hash::Hash for #ident #hash_ty #hash_where {
                fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                    #(::core::hash::Hash::hash(&self.#names, state);)*
                }
            }
        }
    }

    fn debug(&self) -> TokenStream {
        if !self.descriptor.debug {
            return TokenStream::new();
        }

        let ident = &self.input.ident;
        let type_name = ident.unraw().to_string();
        let names = &self.names;
        let labels: Vec<String> = self.names.iter().map(|n| n.unraw().to_string()).collect();
        let generics = bounded(&self.input.generics, &[parse_quote!(::core::fmt::Debug)]);
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        quote! {
            impl #impl_generics ::core::fmt::Debug for #ident #ty_generics #where_clause {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    f.debug_struct(#type_name)
                        #(.field(#labels, &self.#names))*
                        .finish()
                }
            }
        }
    }

    fn value_object(&self) -> TokenStream {
        let ident = &self.input.ident;
        let type_name = ident.unraw().to_string();
        let names = &self.names;
        let types = &self.types;
        let arity = self.descriptor.arity();
        let configuration = self.descriptor.configuration.runtime_tokens();
        let components = self.descriptor.components.iter().map(|component| {
            let name = component.name.unraw().to_string();
            let visibility = component.visibility.runtime_tokens();
            quote! { (#name, #visibility) }
        });
        let generics = bounded(
            &self.input.generics,
            &[parse_quote!(::core::cmp::Eq), parse_quote!(::core::hash::Hash)],
        );
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        quote! {
            impl #impl_generics ::concord::ValueObject for #ident #ty_generics #where_clause {
                type Components = (#(#types,)*);

                const ARITY: usize = #arity;

                fn descriptor() -> &'static ::concord::Descriptor {
                    static DESCRIPTOR: ::std::sync::OnceLock<::concord::Descriptor> =
                        ::std::sync::OnceLock::new();
                    DESCRIPTOR.get_or_init(|| {
                        ::concord::Descriptor::derived(
                            #type_name,
                            #configuration,
                            &[#(#components),*],
                        )
                    })
                }

                fn from_components((#(#names,)*): Self::Components) -> Self {
                    Self::new(#(#names),*)
                }
            }
        }
    }
}

/// Protected accessors stay private to the defining module.
fn accessor_visibility(visibility: Visibility) -> TokenStream {
    match visibility {
        Visibility::Public => quote! { pub },
        Visibility::Protected => quote! { #[allow(dead_code)] },
    }
}

/// Adds `bounds` to every type parameter, like the std derives do.
fn bounded(generics: &Generics, bounds: &[TypeParamBound]) -> Generics {
    let mut generics = generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.extend(bounds.iter().cloned());
    }
    generics
}
