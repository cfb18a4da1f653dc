//! TOML template generation.

use proc_macro2::TokenStream;
use quote::quote;

use super::attr::{FieldInfo, Status};

const NUMERIC: &[&str] = &[
    "bool", "u8", "u16", "u32", "u64", "usize", "i8", "i16", "i32", "i64", "isize", "f32", "f64",
];

/// Statements pushing every template line onto `out`.
pub fn generate(fields: &[&FieldInfo]) -> TokenStream {
    let lines = fields.iter().map(|f| field_lines(f));
    quote! { #(#lines)* }
}

fn field_lines(info: &FieldInfo) -> TokenStream {
    let field = &info.name;
    let key = &info.toml_name;
    let ty = info.type_string();

    // An inline doc replaces the comment above the key.
    let doc = info
        .doc
        .as_ref()
        .filter(|_| info.inline_doc.is_none())
        .map(|doc| {
            let text: String = doc.lines().map(|l| format!("# {}\n", l.trim())).collect();
            quote! { out.push_str(#text); }
        })
        .unwrap_or_default();

    if info.sub {
        let sub_ty = &info.ty;
        return quote! {
            out.push('\n');
            out.push_str(&<#sub_ty>::template_with_header());
        };
    }

    let (commented, note) = match info.status {
        Status::Normal => (false, None),
        Status::Experimental => (true, Some("# (experimental) may change or be removed\n")),
        Status::NotImplemented => (true, Some("# (not implemented)\n")),
        Status::Deprecated => (true, Some("# (deprecated) will be removed in a future version\n")),
        Status::Hidden => return quote! {},
    };
    let note = note.map(|n| quote! { out.push_str(#n); }).unwrap_or_default();
    let prefix = if commented { "# " } else { "" };
    let suffix = info
        .inline_doc
        .as_ref()
        .map(|c| format!("  # {c}"))
        .unwrap_or_default();

    // Unset optional: show the key commented out with a placeholder of its type.
    if let Some(inner) = option_inner(&ty)
        && info.default.is_none()
    {
        let line = format!("# {key} = {}{suffix}\n", placeholder(inner));
        return quote! {
            #doc
            #note
            out.push_str(#line);
        };
    }

    if let Some(value) = &info.default {
        let line = format!("{prefix}{key} = {}{suffix}\n", quote_default(value, &ty));
        return quote! {
            #doc
            #note
            out.push_str(#line);
        };
    }

    // Fall back to the runtime `Default` value.
    quote! {
        #doc
        #note
        out.push_str(#prefix);
        out.push_str(#key);
        out.push_str(" = ");
        out.push_str(&toml::Value::try_from(default.#field.clone())
            .map(|v| v.to_string())
            .unwrap_or_else(|_| "\"\"".to_string()));
        out.push_str(#suffix);
        out.push('\n');
    }
}

fn option_inner(ty: &str) -> Option<&str> {
    ty.strip_prefix("Option<")?.strip_suffix('>')
}

fn placeholder(ty: &str) -> &'static str {
    match ty {
        "bool" => "false",
        "f32" | "f64" => "0.0",
        _ if NUMERIC.contains(&ty) => "0",
        _ if ty.starts_with("Vec<") => "[]",
        _ => "\"\"",
    }
}

/// Strings, paths and plain enums are quoted; numbers and bools are not.
fn quote_default(value: &str, ty: &str) -> String {
    let bare = NUMERIC.contains(&ty)
        || ty.starts_with("Option<")
        || ty.starts_with("Vec<")
        || ty.ends_with("Config");
    if bare {
        value.to_string()
    } else {
        format!("\"{value}\"")
    }
}
