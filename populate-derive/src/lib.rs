//! Derive macros for populate.
//!
//! This crate provides `#[derive(Composite)]`, which builds a composite
//! value generator for a struct out of one generator per field.

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Fields, Ident};

/// Derive a composite value generator for a struct.
///
/// For a struct `Foo`, this emits `FooGenerator` with one public,
/// generically typed generator per field of `Foo`, laid out the same way
/// (named fields or tuple fields). The generator draws every field in
/// declaration order and assembles a `Foo`.
///
/// # Example
///
/// ```rust,ignore
/// use populate::*;
///
/// #[derive(Composite, Debug)]
/// struct Reading {
///     sensor: String,
///     value: f64,
/// }
///
/// let readings = ReadingGenerator {
///     sensor: StringValueGenerator::new(4, 4, ASCII_UPPERCASE)?,
///     value: ArithmeticValueGenerator::new(-40.0, 85.0)?,
/// };
/// let batch: Vec<Reading> = Engine::new().generate_sequential(10, &readings);
/// ```
#[proc_macro_derive(Composite)]
pub fn derive_composite(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match composite_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Generate the generator struct and its `ValueGenerator` impl.
fn composite_impl(input: &DeriveInput) -> Result<TokenStream2, syn::Error> {
    let name = &input.ident;
    let vis = &input.vis;
    let generator = format_ident!("{}Generator", name);

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Composite derive macro does not support generic structs",
        ));
    }

    let data = match &input.data {
        Data::Struct(data) => data,
        Data::Enum(_) => {
            return Err(syn::Error::new_spanned(
                input,
                "Composite derive macro does not support enums",
            ));
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                input,
                "Composite derive macro does not support unions",
            ));
        }
    };

    let doc = format!("Composite value generator for [`{name}`], one generator per field.");

    let expanded = match &data.fields {
        Fields::Named(fields) => {
            let field_names: Vec<&Ident> = fields
                .named
                .iter()
                .filter_map(|field| field.ident.as_ref())
                .collect();
            let field_types: Vec<_> = fields.named.iter().map(|field| &field.ty).collect();
            let params = type_params(field_names.len());

            quote! {
                #[doc = #doc]
                #[derive(Debug, Clone)]
                #vis struct #generator<#(#params),*> {
                    #(pub #field_names: #params),*
                }

                impl<#(#params),*> populate::ValueGenerator for #generator<#(#params),*>
                where
                    #(#params: populate::ValueGenerator<Value = #field_types>),*
                {
                    type Value = #name;

                    fn draw(&self, source: &mut populate::RandomSource) -> #name {
                        #name {
                            #(#field_names: populate::ValueGenerator::draw(&self.#field_names, source)),*
                        }
                    }
                }
            }
        }
        Fields::Unnamed(fields) => {
            let field_types: Vec<_> = fields.unnamed.iter().map(|field| &field.ty).collect();
            let indices = (0..field_types.len()).map(syn::Index::from);
            let params = type_params(field_types.len());

            quote! {
                #[doc = #doc]
                #[derive(Debug, Clone)]
                #vis struct #generator<#(#params),*>(#(pub #params),*);

                impl<#(#params),*> populate::ValueGenerator for #generator<#(#params),*>
                where
                    #(#params: populate::ValueGenerator<Value = #field_types>),*
                {
                    type Value = #name;

                    fn draw(&self, source: &mut populate::RandomSource) -> #name {
                        #name(#(populate::ValueGenerator::draw(&self.#indices, source)),*)
                    }
                }
            }
        }
        Fields::Unit => quote! {
            #[doc = #doc]
            #[derive(Debug, Clone, Copy, Default)]
            #vis struct #generator;

            impl populate::ValueGenerator for #generator {
                type Value = #name;

                fn draw(&self, _source: &mut populate::RandomSource) -> #name {
                    #name
                }
            }
        },
    };

    Ok(expanded)
}

/// `G0, G1, ...` type parameters, one per field.
fn type_params(count: usize) -> Vec<Ident> {
    (0..count)
        .map(|i| Ident::new(&format!("G{i}"), Span::call_site()))
        .collect()
}
