//! Procedural macros for Contact Grid record descriptors.
//!
//! This crate provides `#[derive(Record)]`, which turns a struct with named
//! scalar fields into a table record: it generates the static field
//! descriptor list (declaration order, one entry per field) together with a
//! typed getter and a coercing setter for every field.
//!
//! # Attributes
//!
//! ## `#[record(...)]` on fields
//!
//! ```ignore
//! #[derive(Record, Clone, Default)]
//! struct Address {
//!     #[record(rename = "type")]
//!     kind: String,
//!     address: String,
//!
//!     #[record(skip)]
//!     notes: Vec<String>,
//! }
//! ```
//!
//! - `rename = "header"`: Column header used instead of the field name
//! - `skip`: Excludes the field from the column list (it keeps its default
//!   value when a record is rebuilt from a row)
//!
//! ## `#[record(...)]` on the struct
//!
//! - `placeholder = "path::to::fn"`: Function returning the record used for
//!   newly added rows (defaults to `Default::default()`)
//! - `crate = "path"`: Path to the core crate (defaults to `::contact_grid_core`)

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    parse_macro_input, Attribute, Data, DeriveInput, Expr, ExprLit, Field, Fields, Ident, Lit,
    LitStr, Path, Type,
};

/// Derive the `Record` trait and generate the static field descriptor list.
///
/// Every field type must implement `FieldValue` unless it is marked
/// `#[record(skip)]`. The struct must implement `Default` and `Clone`.
///
/// # Example
///
/// ```ignore
/// use contact_grid::prelude::*;
///
/// #[derive(Record, Clone, Debug, Default, PartialEq)]
/// struct Phone {
///     #[record(rename = "type")]
///     kind: String,
///     number: String,
/// }
///
/// assert_eq!(Phone::fields().len(), 2);
/// assert_eq!(Phone::fields()[0].header, "type");
/// ```
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match impl_derive_record(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Parsed column information for one field.
struct ColumnInfo {
    field_name: Ident,
    field_type: Type,
    header: String,
}

/// Parsed struct-level record attributes.
struct RecordAttrs {
    placeholder: Option<Path>,
    core_path: Path,
}

fn impl_derive_record(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Record derive does not support generic structs",
        ));
    }

    let record_attrs = parse_record_attrs(&input.attrs)?;
    let core = &record_attrs.core_path;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "Record derive only supports structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "Record derive only supports structs",
            ))
        }
    };

    let mut columns = Vec::new();
    for field in fields.iter() {
        if let Some(column) = parse_column_field(field)? {
            columns.push(column);
        }
    }

    let accessor_fns = generate_accessor_fns(struct_name, &columns, core);
    let descriptors = generate_descriptors(struct_name, &columns, core);
    let column_count = columns.len();
    let record_name = struct_name.to_string();

    let placeholder = match &record_attrs.placeholder {
        Some(path) => quote! {
            fn placeholder() -> Self {
                #path()
            }
        },
        None => quote! {},
    };

    let expanded = quote! {
        #accessor_fns

        impl #core::record::Record for #struct_name {
            fn record_name() -> &'static str {
                #record_name
            }

            fn fields() -> &'static [#core::record::FieldDescriptor<Self>] {
                static FIELDS: [#core::record::FieldDescriptor<#struct_name>; #column_count] = [
                    #(#descriptors),*
                ];
                &FIELDS
            }

            #placeholder
        }
    };

    Ok(expanded)
}

/// Parse struct-level #[record(...)] attributes.
fn parse_record_attrs(attrs: &[Attribute]) -> syn::Result<RecordAttrs> {
    let mut result = RecordAttrs {
        placeholder: None,
        core_path: syn::parse_quote!(::contact_grid_core),
    };

    for attr in attrs {
        if !attr.path().is_ident("record") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("placeholder") {
                let value: LitStr = meta.value()?.parse()?;
                result.placeholder = Some(value.parse()?);
                Ok(())
            } else if meta.path.is_ident("crate") {
                let value: LitStr = meta.value()?.parse()?;
                result.core_path = value.parse()?;
                Ok(())
            } else {
                Err(meta.error("unknown record attribute; expected `placeholder` or `crate`"))
            }
        })?;
    }

    Ok(result)
}

/// Parse a field and its #[record(...)] attributes into a column.
///
/// Returns `None` for skipped fields.
fn parse_column_field(field: &Field) -> syn::Result<Option<ColumnInfo>> {
    let field_name = match &field.ident {
        Some(name) => name.clone(),
        None => return Ok(None),
    };

    let mut header = None;
    let mut skip = false;

    for attr in &field.attrs {
        if !attr.path().is_ident("record") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let value: Expr = meta.value()?.parse()?;
                match value {
                    Expr::Lit(ExprLit {
                        lit: Lit::Str(lit_str),
                        ..
                    }) => {
                        header = Some(lit_str.value());
                        Ok(())
                    }
                    other => Err(syn::Error::new_spanned(other, "rename expects a string literal")),
                }
            } else if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("unknown record attribute; expected `rename` or `skip`"))
            }
        })?;
    }

    if skip {
        return Ok(None);
    }

    let header = header.unwrap_or_else(|| field_name.to_string().trim_start_matches("r#").to_string());

    Ok(Some(ColumnInfo {
        field_name,
        field_type: field.ty.clone(),
        header,
    }))
}

fn getter_name(struct_name: &Ident, field_name: &Ident) -> Ident {
    format_ident!(
        "__{}_{}_get",
        struct_name.to_string().to_lowercase(),
        field_name
    )
}

fn setter_name(struct_name: &Ident, field_name: &Ident) -> Ident {
    format_ident!(
        "__{}_{}_set",
        struct_name.to_string().to_lowercase(),
        field_name
    )
}

/// Generate getter and setter functions for each column.
fn generate_accessor_fns(struct_name: &Ident, columns: &[ColumnInfo], core: &Path) -> TokenStream2 {
    let fns: Vec<TokenStream2> = columns
        .iter()
        .map(|column| {
            let field_name = &column.field_name;
            let field_type = &column.field_type;
            let getter = getter_name(struct_name, field_name);
            let setter = setter_name(struct_name, field_name);

            quote! {
                #[allow(non_snake_case)]
                #[doc(hidden)]
                fn #getter(record: &#struct_name) -> #core::value::CellValue {
                    <#field_type as #core::record::FieldValue>::to_cell(&record.#field_name)
                }

                #[allow(non_snake_case)]
                #[doc(hidden)]
                fn #setter(
                    record: &mut #struct_name,
                    cell: &#core::value::CellValue,
                ) -> #core::error::CoercionResult<()> {
                    record.#field_name = <#field_type as #core::record::FieldValue>::from_cell(cell)?;
                    Ok(())
                }
            }
        })
        .collect();

    quote! { #(#fns)* }
}

/// Generate the descriptor array entries.
fn generate_descriptors(struct_name: &Ident, columns: &[ColumnInfo], core: &Path) -> Vec<TokenStream2> {
    columns
        .iter()
        .map(|column| {
            let field_name = &column.field_name;
            let field_type = &column.field_type;
            let name_str = field_name.to_string().trim_start_matches("r#").to_string();
            let header = &column.header;
            let getter = getter_name(struct_name, field_name);
            let setter = setter_name(struct_name, field_name);

            quote! {
                #core::record::FieldDescriptor {
                    name: #name_str,
                    header: #header,
                    value_type: <#field_type as #core::record::FieldValue>::VALUE_TYPE,
                    get: #getter,
                    set: #setter,
                }
            }
        })
        .collect()
}
