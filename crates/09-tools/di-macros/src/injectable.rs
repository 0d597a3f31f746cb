//! `#[derive(Injectable)]` 实现

use crate::utils::{classify, Injection};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Error, Fields, Result};

/// 展开派生宏
pub fn derive_injectable_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Struct(data) = &input.data else {
        return Err(Error::new_spanned(
            &input.ident,
            "#[derive(Injectable)] 只支持结构体",
        ));
    };

    let mut parameters = Vec::new();
    let mut values = Vec::new();

    for (index, field) in data.fields.iter().enumerate() {
        let name = field
            .ident
            .as_ref()
            .map_or_else(|| index.to_string(), ToString::to_string);

        match classify(&field.ty) {
            Injection::Required(inner) => {
                parameters.push(quote! { ::di_abstractions::Parameter::of::<#inner>(#name) });
                values.push(quote! { args.required::<#inner>(#name)? });
            }
            Injection::Optional(inner) => {
                parameters.push(quote! { ::di_abstractions::Parameter::of::<#inner>(#name) });
                values.push(quote! { args.optional::<#inner>(#name)? });
            }
            Injection::Untyped => {
                parameters.push(quote! { ::di_abstractions::Parameter::untyped(#name) });
                values.push(quote! {{
                    args.skip();
                    ::std::default::Default::default()
                }});
            }
        }
    }

    let body = match &data.fields {
        Fields::Named(named) => {
            let idents = named.named.iter().filter_map(|field| field.ident.as_ref());
            quote! { Self { #( #idents: #values ),* } }
        }
        Fields::Unnamed(_) => quote! { Self( #( #values ),* ) },
        Fields::Unit => quote! { Self },
    };

    let args = if data.fields.is_empty() {
        format_ident!("_args")
    } else {
        format_ident!("args")
    };

    Ok(quote! {
        impl #impl_generics ::di_abstractions::Injectable for #struct_name #ty_generics #where_clause {
            fn parameters() -> ::std::vec::Vec<::di_abstractions::Parameter> {
                ::std::vec![ #( #parameters ),* ]
            }

            fn construct(
                #args: &mut ::di_abstractions::Arguments,
            ) -> ::di_abstractions::DependencyResult<Self> {
                ::std::result::Result::Ok(#body)
            }
        }
    })
}
