use proc_macro::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Data, DataStruct, DeriveInput, Fields, GenericArgument, Ident, LitStr,
    PathArguments, Token, Type, TypePath,
};

struct NodeAttribute {
    crate_path: syn::Path,
}

/// Parses the attribute in the format: `crate_path = "path::to::crate"`.
impl Parse for NodeAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Ident = input.parse()?;
        if key != "crate_path" {
            return Err(syn::Error::new(key.span(), "expected attribute `crate_path`"));
        }

        let _: Token![=] = input.parse()?;
        let value: LitStr = input.parse()?;
        let path: syn::Path = value.parse()?;

        Ok(NodeAttribute { crate_path: path })
    }
}

/// Extracts `T` from a field typed `NonNull<T>`.
fn nonnull_inner(ty: &Type) -> Option<&Type> {
    if let Type::Path(TypePath { path, .. }) = ty {
        let segment = path.segments.last()?;
        if segment.ident != "NonNull" {
            return None;
        }
        if let PathArguments::AngleBracketed(args) = &segment.arguments {
            if let Some(GenericArgument::Type(inner)) = args.args.first() {
                return Some(inner);
            }
        }
    }
    None
}

/// Derive macro for creating linked list nodes.
///
/// Expects a struct with a field named `link` (of type `SingleLink<Self>` or
/// `DoubleLink<Self>`) and optionally a field named `data` (of type
/// `NonNull<T>` for the payload type `T`).
#[proc_macro_derive(Node, attributes(node))]
pub fn node_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Find absolute crate path
    let mut crate_path = quote! { ::dlists };

    for attr in &input.attrs {
        if attr.path().is_ident("node") {
            match attr.parse_args::<NodeAttribute>() {
                Ok(node_attr) => {
                    let path = node_attr.crate_path;
                    crate_path = quote! { #path };
                    break;
                }
                Err(e) => return e.to_compile_error().into(),
            }
        }
    }

    let traits_path = quote! { #crate_path::traits };

    let mut link_field = None;
    let mut data_field = None;

    if let Data::Struct(DataStruct {
        fields: Fields::Named(ref fields),
        ..
    }) = input.data
    {
        for field in fields.named.iter() {
            if let Some(ident) = &field.ident {
                match ident.to_string().as_str() {
                    "link" => link_field = Some(field.clone()),
                    "data" => data_field = Some(field.clone()),
                    _ => {
                        return syn::Error::new_spanned(
                            ident,
                            "Unexpected field name: expected 'link' or 'data'",
                        )
                        .to_compile_error()
                        .into();
                    }
                }
            }
        }
    } else {
        return syn::Error::new_spanned(
            input,
            "Node derive macro only supports structs with named fields",
        )
        .to_compile_error()
        .into();
    };

    let link_field = match link_field {
        Some(field) => field,
        None => {
            return syn::Error::new_spanned(struct_name, "Struct must have a field named 'link'")
                .to_compile_error()
                .into();
        }
    };
    let link_type = &link_field.ty;

    let type_ident = if let Type::Path(TypePath { path, .. }) = link_type {
        path.segments
            .last()
            .expect("Expected at least one segment in the type path")
            .ident
            .clone()
    } else {
        return syn::Error::new_spanned(link_type, "Field 'link' must be a Link type")
            .to_compile_error()
            .into();
    };

    let is_double_linked = match type_ident.to_string().as_str() {
        "SingleLink" => false,
        "DoubleLink" => true,
        _ => {
            return syn::Error::new_spanned(
                type_ident,
                "Field 'link' must be one of 'SingleLink' or 'DoubleLink'",
            )
            .to_compile_error()
            .into();
        }
    };

    // Generate the `Link` trait implementation
    let link_impl = quote! {
        impl #impl_generics #traits_path::Link for #struct_name #ty_generics #where_clause {
            #[inline]
            fn next(&self) -> Option<::core::ptr::NonNull<Self>> {
                self.link.next()
            }

            #[inline]
            fn set_next(&mut self, next: Option<::core::ptr::NonNull<Self>>) {
                self.link.set_next(next);
            }

            #[inline]
            fn unlink(&mut self) {
                self.link.unlink();
            }

            #[inline]
            fn is_linked(&self) -> bool {
                self.link.is_linked()
            }
        }
    };

    // Generate the `LinkWithPrev` trait implementation for `DoubleLink`
    let prev_impl = if is_double_linked {
        quote! {
            impl #impl_generics #traits_path::LinkWithPrev for #struct_name #ty_generics #where_clause {
                #[inline]
                fn prev(&self) -> Option<::core::ptr::NonNull<Self>> {
                    self.link.prev()
                }

                #[inline]
                fn set_prev(&mut self, prev: Option<::core::ptr::NonNull<Self>>) {
                    self.link.set_prev(prev);
                }
            }
        }
    } else {
        quote! {}
    };

    // Generate the `Node` trait implementation if a `data` field exists
    let node_impl = if let Some(data_field) = data_field {
        let data_type = match nonnull_inner(&data_field.ty) {
            Some(inner) => inner.clone(),
            None => {
                return syn::Error::new_spanned(
                    &data_field.ty,
                    "Field 'data' must be of type NonNull<T>",
                )
                .to_compile_error()
                .into();
            }
        };
        quote! {
            impl #impl_generics #traits_path::Node for #struct_name #ty_generics #where_clause {
                type Data = #data_type;

                #[inline]
                fn data_ptr(&self) -> ::core::ptr::NonNull<Self::Data> {
                    self.data
                }
            }
        }
    } else {
        quote! {}
    };

    let expanded = quote! {
        #link_impl
        #prev_impl
        #node_impl
    };

    TokenStream::from(expanded)
}
