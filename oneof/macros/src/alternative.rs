use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{parse::Parse, punctuated::Punctuated, Token};

pub(crate) mod kw {
    syn::custom_keyword!(derive);
}

pub(crate) struct Args {
    extra_derives: Punctuated<syn::Path, Token![,]>,
}

impl Parse for Args {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut extra_derives = Punctuated::new();
        if input.is_empty() {
            return Ok(Self { extra_derives });
        }

        input.parse::<kw::derive>()?;
        let content;
        syn::parenthesized!(content in input);
        extra_derives = content.parse_terminated(syn::Path::parse_mod_style, Token![,])?;

        if !input.is_empty() {
            return Err(input.error("expected only `derive(...)`"));
        }

        Ok(Self { extra_derives })
    }
}

pub(crate) fn generate(args: Args, item: syn::Item) -> syn::Result<TokenStream> {
    let item_struct = match item {
        syn::Item::Struct(item_struct) => item_struct,
        syn::Item::Enum(item_enum) => {
            return Err(syn::Error::new_spanned(
                item_enum.enum_token,
                "#[alternative] can only be applied to structs",
            ))
        }
        syn::Item::Union(item_union) => {
            return Err(syn::Error::new_spanned(
                item_union.union_token,
                "#[alternative] can only be applied to structs",
            ))
        }
        other => {
            return Err(syn::Error::new_spanned(
                other,
                "#[alternative] can only be applied to structs",
            ))
        }
    };

    let extra_derives = args.extra_derives.iter();
    let constructor = generate_constructor(&item_struct);

    Ok(quote! {
        #[derive(
            ::core::fmt::Debug,
            ::core::clone::Clone,
            ::core::cmp::PartialEq
            #(, #extra_derives)*
        )]
        #item_struct

        #constructor
    })
}

fn generate_constructor(item: &syn::ItemStruct) -> TokenStream {
    let id_struct = &item.ident;
    let vis = &item.vis;
    let (impl_generics, ty_generics, where_clause) = item.generics.split_for_impl();

    let (params, body) = match &item.fields {
        syn::Fields::Named(fields_named) => {
            let idents: Vec<&syn::Ident> = fields_named
                .named
                .iter()
                .filter_map(|field| field.ident.as_ref())
                .collect();
            let types = fields_named.named.iter().map(|field| &field.ty);

            (
                quote! { #(#idents: #types),* },
                quote! { Self { #(#idents),* } },
            )
        }
        syn::Fields::Unnamed(fields_unnamed) => {
            let idents: Vec<syn::Ident> = (0..fields_unnamed.unnamed.len())
                .map(|index| format_ident!("field{}", index))
                .collect();
            let types = fields_unnamed.unnamed.iter().map(|field| &field.ty);

            (
                quote! { #(#idents: #types),* },
                quote! { Self(#(#idents),*) },
            )
        }
        // unit alternatives are constructed by name
        syn::Fields::Unit => return TokenStream::new(),
    };

    quote! {
        impl #impl_generics #id_struct #ty_generics #where_clause {
            #[allow(dead_code, clippy::too_many_arguments)]
            #vis fn new(#params) -> Self {
                #body
            }
        }
    }
}
