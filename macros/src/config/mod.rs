//! Config derive: FIELDS, template() and validate_field_status().

mod attr;
mod template;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

use attr::{FieldInfo, Status, doc_comment, infer_section, string_attr};

pub fn derive(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;
    let fields_name = syn::Ident::new(&format!("{name}Fields"), name.span());

    let section =
        string_attr(&input.attrs, "section").unwrap_or_else(|| infer_section(&name.to_string()));
    let section_doc = doc_comment(&input.attrs).unwrap_or_default();

    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => return quote! { compile_error!("Config requires named fields"); },
        },
        _ => return quote! { compile_error!("Config only works on structs"); },
    };

    let fields: Vec<FieldInfo> = named.iter().filter_map(FieldInfo::from_field).collect();
    let visible: Vec<&FieldInfo> = fields.iter().filter(|f| !f.skip).collect();
    let own: Vec<&FieldInfo> = visible.iter().copied().filter(|f| !f.sub).collect();

    let full_path = |f: &FieldInfo| {
        if section.is_empty() {
            f.toml_name.clone()
        } else {
            format!("{section}.{}", f.toml_name)
        }
    };

    // FIELDS
    let field_defs = visible.iter().map(|f| {
        let ident = &f.name;
        quote! { pub #ident: crate::config::FieldPath, }
    });
    let field_inits = visible.iter().map(|f| {
        let ident = &f.name;
        let path = full_path(f);
        quote! { #ident: crate::config::FieldPath::new(#path), }
    });

    // template()
    let template_fields: Vec<&FieldInfo> = visible
        .iter()
        .copied()
        .filter(|f| f.status != Status::Hidden)
        .collect();
    let template_body = template::generate(&template_fields);

    // validate_field_status()
    let field_checks: Vec<TokenStream> = own
        .iter()
        .filter(|f| f.status.is_reported())
        .map(|f| {
            let ident = &f.name;
            let path = full_path(f);
            let variant = f.status.runtime_variant();
            quote! {
                if self.#ident != default.#ident {
                    crate::config::types::check_field_status(#path, #variant, diag);
                }
            }
        })
        .collect();

    let default_binding = if !field_checks.is_empty() {
        quote! { let default = Self::default(); }
    } else {
        quote! {}
    };

    let nested = visible.iter().filter(|f| f.sub).map(|f| {
        let ident = &f.name;
        quote! { self.#ident.validate_field_status(diag); }
    });

    quote! {
        /// Generated field path accessors.
        #[allow(non_camel_case_types, dead_code)]
        pub struct #fields_name {
            #(#field_defs)*
        }

        #[allow(dead_code)]
        impl #name {
            /// Field paths for diagnostic messages.
            pub const FIELDS: #fields_name = #fields_name {
                #(#field_inits)*
            };

            /// Section name for TOML output.
            pub const TEMPLATE_SECTION: &'static str = #section;

            /// Section documentation.
            pub const TEMPLATE_DOC: &'static str = #section_doc;

            /// TOML template for this section's own keys.
            pub fn template() -> String {
                let default = Self::default();
                let _ = &default;
                let mut out = String::new();
                #template_body
                out
            }

            /// TOML template preceded by the doc comment and `[section]` header.
            pub fn template_with_header() -> String {
                let mut out = String::new();
                for line in Self::TEMPLATE_DOC.lines() {
                    out.push_str("# ");
                    out.push_str(line.trim());
                    out.push('\n');
                }
                if !Self::TEMPLATE_SECTION.is_empty() {
                    out.push('[');
                    out.push_str(Self::TEMPLATE_SECTION);
                    out.push_str("]\n");
                }
                out.push_str(&Self::template());
                out
            }

            /// Report set fields that are experimental, deprecated or not implemented.
            #[allow(unused_variables)]
            pub fn validate_field_status(&self, diag: &mut crate::config::ConfigDiagnostics) {
                #default_binding
                #(#field_checks)*
                #(#nested)*
            }
        }
    }
}
