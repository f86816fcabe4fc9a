//! Template generation code for Config derive macro.

use proc_macro2::TokenStream;
use quote::quote;

use crate::config::field::FieldInfo;
use crate::config::types::{format_default_for_type, type_to_string};

/// Generate template code (TokenStream) for fields
pub fn generate_template_code(fields: &[&FieldInfo]) -> TokenStream {
    let field_codes: Vec<TokenStream> = fields
        .iter()
        .map(|f| generate_field_template_code(f))
        .collect();

    quote! {
        #(#field_codes)*
    }
}

/// Generate TOML template code for a single field
fn generate_field_template_code(info: &FieldInfo) -> TokenStream {
    let field_name = &info.name;
    let toml_name = &info.toml_name;

    let doc_code = if let Some(ref doc) = info.doc {
        let doc_str: String = doc.lines().map(|l| format!("# {}\n", l.trim())).collect();
        quote! { out.push_str(#doc_str); }
    } else {
        quote! {}
    };

    let inline_suffix = info
        .inline_doc
        .as_ref()
        .map(|c| format!("  # {}", c))
        .unwrap_or_default();

    let ty_str = type_to_string(&info.ty);
    let is_optional = ty_str.starts_with("Option<");

    // Nested config - output the sub config's template_with_header
    if info.sub {
        let field_ty = &info.ty;
        return quote! {
            out.push('\n');
            #doc_code
            out.push_str(&<#field_ty>::template_with_header());
        };
    }

    // Optional fields without explicit default are commented out
    if is_optional && info.default.is_none() {
        let line = format!("# {} = \"\"{}\n", toml_name, inline_suffix);
        return quote! {
            #doc_code
            out.push_str(#line);
        };
    }

    // Explicit default value (compile-time known)
    if let Some(ref default_val) = info.default {
        let formatted = format_default_for_type(default_val, &ty_str);
        let line = format!("{} = {}{}\n", toml_name, formatted, inline_suffix);
        return quote! {
            #doc_code
            out.push_str(#line);
        };
    }

    // Default::default() - runtime value
    quote! {
        #doc_code
        out.push_str(#toml_name);
        out.push_str(" = ");
        out.push_str(&toml::Value::try_from(default.#field_name.clone())
            .map(|v| v.to_string())
            .unwrap_or_default());
        out.push_str(#inline_suffix);
        out.push('\n');
    }
}
