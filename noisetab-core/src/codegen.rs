//! Rust source generation for embedding tables as `static` arrays.
//!
//! Each table becomes a flattened `[f64; 2·len]` item named after its label,
//! e.g. `Perlin noise gradients` turns into `PERLIN_NOISE_GRADIENTS`.
//! The output holds only items with outer docs, so it can be used as a
//! module file or pulled in with `include!`.

use heck::ToShoutySnakeCase;
use proc_macro2::{Ident, Literal, Span, TokenStream};
use quote::quote;

use crate::error::TableError;
use crate::pipeline::GeneratedTables;
use crate::table::NamedTable;

/// Builds the `static` identifier for a table label.
///
/// Falls back to `TABLE` for labels without any identifier characters and
/// prefixes an underscore when the label starts with a digit.
#[must_use]
pub fn static_name(label: &str) -> String {
    let cleaned: String = label
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect();
    let name = cleaned.to_shouty_snake_case();
    if name.is_empty() {
        "TABLE".to_owned()
    } else if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{name}")
    } else {
        name
    }
}

/// Generates a single `pub static` item for one table.
#[must_use]
pub fn table_item(named: NamedTable<'_>) -> TokenStream {
    let ident = Ident::new(&static_name(named.label), Span::call_site());
    let len = named.table.scalar_count();
    let doc = format!("{} ({} vectors).", named.label, named.table.len());
    let values = named.table.scalars().map(Literal::f64_unsuffixed);

    quote! {
        #[doc = #doc]
        pub static #ident: [f64; #len] = [
            #(#values),*
        ];
    }
}

/// Generates the items for every table in `tables`.
///
/// Fails when two labels map to the same identifier.
pub fn tables_module(tables: &GeneratedTables) -> Result<TokenStream, TableError> {
    let mut seen: Vec<(String, &str)> = Vec::with_capacity(tables.tables().len());
    for table in tables.tables() {
        let label = table.plan.label.as_str();
        let name = static_name(label);
        if let Some((_, first)) = seen.iter().find(|(n, _)| *n == name) {
            return Err(TableError::DuplicateName {
                name,
                first: (*first).to_owned(),
                second: label.to_owned(),
            });
        }
        seen.push((name, label));
    }

    let items = tables.tables().iter().map(|t| table_item(t.named()));
    Ok(quote! {
        #(#items)*
    })
}
