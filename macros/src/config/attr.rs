//! `#[config(...)]` attribute parsing and per-field info.

use quote::quote;
use syn::{Attribute, Expr, Lit, Meta, Type};

/// Field or section status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Normal,
    Experimental,
    NotImplemented,
    Deprecated,
    Hidden,
}

impl Status {
    /// Whether the status needs a runtime diagnostic when the value is set.
    pub const fn is_reported(self) -> bool {
        matches!(
            self,
            Self::Experimental | Self::NotImplemented | Self::Deprecated
        )
    }

    /// Path to the runtime `FieldStatus` variant.
    pub fn runtime_variant(self) -> proc_macro2::TokenStream {
        match self {
            Self::Experimental => quote! { crate::config::types::FieldStatus::Experimental },
            Self::NotImplemented => quote! { crate::config::types::FieldStatus::NotImplemented },
            Self::Deprecated => quote! { crate::config::types::FieldStatus::Deprecated },
            Self::Normal | Self::Hidden => unreachable!("status is not reported"),
        }
    }
}

/// Everything the derive needs to know about one named field.
pub struct FieldInfo {
    pub name: syn::Ident,
    pub toml_name: String,
    pub doc: Option<String>,
    pub inline_doc: Option<String>,
    pub status: Status,
    pub default: Option<String>,
    pub skip: bool,
    pub sub: bool,
    pub ty: Type,
}

impl FieldInfo {
    pub fn from_field(field: &syn::Field) -> Option<Self> {
        let ident = field.ident.as_ref()?;
        let attrs = &field.attrs;

        Some(Self {
            name: ident.clone(),
            toml_name: string_attr(attrs, "name").unwrap_or_else(|| ident.to_string()),
            doc: doc_comment(attrs),
            inline_doc: inline_doc(attrs),
            status: status(attrs),
            default: string_attr(attrs, "default"),
            skip: flag(attrs, "skip"),
            sub: flag(attrs, "sub"),
            ty: field.ty.clone(),
        })
    }

    /// Type rendered without whitespace, e.g. `Option<PathBuf>`.
    pub fn type_string(&self) -> String {
        let ty = &self.ty;
        quote!(#ty).to_string().replace(' ', "")
    }
}

/// Read `key = "value"` from any `#[config(...)]` attribute.
pub fn string_attr(attrs: &[Attribute], key: &str) -> Option<String> {
    let mut value = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("config")) {
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                let lit: syn::LitStr = meta.value()?.parse()?;
                value = Some(lit.value());
            } else {
                skip_value(&meta);
            }
            Ok(())
        });
        if value.is_some() {
            break;
        }
    }
    value
}

/// Check for a bare flag such as `#[config(skip)]`.
pub fn flag(attrs: &[Attribute], key: &str) -> bool {
    let mut found = false;
    for attr in attrs.iter().filter(|a| a.path().is_ident("config")) {
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                found = true;
            }
            skip_value(&meta);
            Ok(())
        });
    }
    found
}

/// `#[config(inline_doc)]` reuses the doc comment, `inline_doc = "x"` overrides it.
fn inline_doc(attrs: &[Attribute]) -> Option<String> {
    if let Some(text) = string_attr(attrs, "inline_doc") {
        return Some(text);
    }
    if flag(attrs, "inline_doc") {
        return doc_comment(attrs).map(|d| d.lines().next().unwrap_or_default().to_string());
    }
    None
}

/// Parse `status = ident`.
fn status(attrs: &[Attribute]) -> Status {
    let mut status = Status::Normal;
    for attr in attrs.iter().filter(|a| a.path().is_ident("config")) {
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("status") {
                let _: syn::Token![=] = meta.input.parse()?;
                let ident: syn::Ident = meta.input.parse()?;
                status = match ident.to_string().as_str() {
                    "experimental" => Status::Experimental,
                    "not_implemented" => Status::NotImplemented,
                    "deprecated" => Status::Deprecated,
                    "hidden" => Status::Hidden,
                    _ => Status::Normal,
                };
            } else {
                skip_value(&meta);
            }
            Ok(())
        });
    }
    status
}

/// Consume `= value` of a nested meta we are not interested in.
fn skip_value(meta: &syn::meta::ParseNestedMeta<'_>) {
    if meta.input.peek(syn::Token![=]) {
        let _ = meta.input.parse::<syn::Token![=]>();
        if meta.input.parse::<syn::Ident>().is_err() {
            let _ = meta.input.parse::<Lit>();
        }
    }
}

/// Join `///` doc lines.
pub fn doc_comment(attrs: &[Attribute]) -> Option<String> {
    let lines: Vec<String> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(expr) => match &expr.lit {
                    Lit::Str(s) => Some(s.value()),
                    _ => None,
                },
                _ => None,
            },
            _ => None,
        })
        .collect();

    let joined = lines.join("\n");
    let trimmed = joined.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// `ImportCodeConfig` → `import_code`.
pub fn infer_section(name: &str) -> String {
    let stem = name
        .strip_suffix("SectionConfig")
        .or_else(|| name.strip_suffix("Config"))
        .unwrap_or(name);

    let mut out = String::with_capacity(stem.len() + 4);
    for (i, c) in stem.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
