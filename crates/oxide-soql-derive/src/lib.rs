//! Derive macros for SOQL object definitions.
//!
//! This crate provides the `#[derive(Table)]` macro for describing
//! Salesforce objects with compile-time checked field names.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Expr, Fields, Ident, Lit, Meta};

/// Derives the `Table` trait for a struct, generating field accessors.
///
/// # Attributes
///
/// - `#[table(name = "Invoice__c")]` - Specifies the object API name
///   (optional, defaults to the struct name)
///
/// # Field Attributes
///
/// - `#[field(name = "Amount__c")]` - Specifies the field API name
///   (optional, defaults to the PascalCase form of the Rust field name)
///
/// # Generated Items
///
/// For a struct `Invoice`, this macro generates:
///
/// - `InvoiceTable` - A type implementing `Table` with the object metadata
/// - `InvoiceFields` - A module containing one type per field (`Id`,
///   `Amount`, etc.), each convertible into a query fragment
/// - Field accessor methods and `all_fields()` on `InvoiceTable`, and field
///   accessors on `Invoice`
#[proc_macro_derive(Table, attributes(table, field))]
pub fn derive_table(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive_table_impl(&input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

fn derive_table_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let table_name = get_table_name(&input.attrs)?.unwrap_or_else(|| struct_name.to_string());

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "Table derive only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "Table derive only supports structs",
            ));
        }
    };

    let mut field_infos: Vec<FieldInfo> = Vec::new();
    for field in fields {
        let Some(field_name) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(field, "expected a named field"));
        };
        // `r#type` keeps its raw form for the accessor but names `Type`.
        let pascal = to_pascal_case(&field_name.unraw().to_string());
        let api_name = get_field_name(&field.attrs)?.unwrap_or_else(|| pascal.clone());
        let type_name = format_ident!("{}", pascal);
        field_infos.push(FieldInfo {
            field_name,
            type_name,
            api_name,
        });
    }

    let table_struct_name = format_ident!("{}Table", struct_name);
    let fields_mod_name = format_ident!("{}Fields", struct_name);

    let field_structs: Vec<TokenStream2> = field_infos
        .iter()
        .map(|info| {
            let type_name = &info.type_name;
            let api_name = &info.api_name;

            quote! {
                /// Field type for compile-time checked queries.
                #[derive(Debug, Clone, Copy)]
                pub struct #type_name;

                impl ::oxide_soql_core::schema::Column for #type_name {
                    type Table = super::#table_struct_name;

                    const NAME: &'static str = #api_name;
                }

                impl ::core::convert::From<#type_name> for ::oxide_soql_core::builder::Field {
                    fn from(_: #type_name) -> Self {
                        Self::from_static(#api_name)
                    }
                }

                impl ::core::convert::From<#type_name> for ::oxide_soql_core::builder::FieldRef {
                    fn from(_: #type_name) -> Self {
                        Self::Field(::oxide_soql_core::builder::Field::from_static(#api_name))
                    }
                }

                impl ::core::convert::From<#type_name> for ::oxide_soql_core::builder::Fragment {
                    fn from(_: #type_name) -> Self {
                        Self::Field(::oxide_soql_core::builder::Field::from_static(#api_name))
                    }
                }
            }
        })
        .collect();

    let field_accessors: Vec<TokenStream2> = field_infos
        .iter()
        .map(|info| {
            let method_name = &info.field_name;
            let type_name = &info.type_name;
            quote! {
                /// Returns the field type for type-safe queries.
                #[inline]
                pub const fn #method_name() -> #fields_mod_name::#type_name {
                    #fields_mod_name::#type_name
                }
            }
        })
        .collect();

    let all_api_names: Vec<&str> = field_infos.iter().map(|f| f.api_name.as_str()).collect();

    let fields_doc = format!("Field types for `{struct_name}`.");
    let table_doc = format!("Object metadata for `{struct_name}`.");

    let expanded = quote! {
        #[doc = #fields_doc]
        #[allow(non_snake_case)]
        pub mod #fields_mod_name {
            #(#field_structs)*
        }

        #[doc = #table_doc]
        #[derive(Debug, Clone, Copy)]
        pub struct #table_struct_name;

        impl ::oxide_soql_core::schema::Table for #table_struct_name {
            const NAME: &'static str = #table_name;
            const FIELDS: &'static [&'static str] = &[#(#all_api_names),*];
        }

        impl #table_struct_name {
            /// Returns the object API name.
            #[inline]
            pub const fn table_name() -> &'static str {
                #table_name
            }

            /// Returns every field of the object as a field group.
            pub fn all_fields() -> ::oxide_soql_core::builder::FieldGroup {
                <Self as ::oxide_soql_core::schema::Table>::all_fields()
            }

            #(#field_accessors)*
        }

        impl #struct_name {
            /// Returns the object metadata type.
            pub const fn table() -> #table_struct_name {
                #table_struct_name
            }

            #(#field_accessors)*
        }
    };

    Ok(expanded)
}

struct FieldInfo {
    field_name: Ident,
    type_name: Ident,
    api_name: String,
}

/// Reads `name = "..."` from the first `#[<attr_name>(...)]` attribute.
fn get_name_attr(attrs: &[Attribute], attr_name: &str) -> syn::Result<Option<String>> {
    for attr in attrs {
        if attr.path().is_ident(attr_name) {
            // Handle empty attribute like #[field]
            if matches!(attr.meta, Meta::Path(_)) {
                continue;
            }

            let mut name = None;
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let value: Expr = meta.value()?.parse()?;
                    if let Expr::Lit(lit) = value {
                        if let Lit::Str(s) = lit.lit {
                            name = Some(s.value());
                            return Ok(());
                        }
                    }
                    return Err(meta.error("expected a string literal"));
                }
                Err(meta.error(format!("unsupported {attr_name} attribute")))
            })?;
            if name.is_some() {
                return Ok(name);
            }
        }
    }
    Ok(None)
}

fn get_table_name(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    get_name_attr(attrs, "table")
}

fn get_field_name(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    get_name_attr(attrs, "field")
}

fn to_pascal_case(s: &str) -> String {
    let mut result = String::new();
    let mut capitalize_next = true;
    for c in s.chars() {
        if c == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }
    result
}
