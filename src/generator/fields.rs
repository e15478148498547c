//! Field mapping: the per-field annotation policy and accessor specs.

use super::types::{resolve_type, TypeRef};
use crate::module::{ModuleInfo, RecordType};

/// One generated accessor method.
///
/// Produced once per included field during the mapping pass and never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct AccessorSpec {
    /// Method name to emit.
    pub exposed_name: String,
    /// Field read off the wrapped record.
    pub source_field: String,
    /// Return type, possibly qualified by a foreign module.
    pub declared_type: TypeRef,
    /// Element type tracked for sequence fields, with one level of
    /// `&`/`Box` indirection peeled; `None` for every other shape.
    pub underlying_element: Option<TypeRef>,
}

/// Walk the record's fields in declaration order and apply the annotation
/// policy:
///
/// - no annotation: included, exposed name is the field name with its first
///   letter capitalized;
/// - annotation `-`: dropped entirely;
/// - any other non-empty annotation: included under that name verbatim.
pub fn map_fields(record: &RecordType, module: &ModuleInfo, tag: &str) -> Vec<AccessorSpec> {
    let mut specs = Vec::new();
    for field in &record.fields {
        let ident = match &field.ident {
            Some(ident) => ident,
            None => continue,
        };
        let name = ident.to_string();
        let exposed = match annotation_value(&field.attrs, tag).as_deref() {
            Some("-") => continue,
            Some(value) if !value.is_empty() => value.to_string(),
            _ => capitalize(&name),
        };
        let declared = resolve_type(&field.ty, module);
        let underlying = underlying_element(&declared);
        specs.push(AccessorSpec {
            exposed_name: exposed,
            source_field: name,
            declared_type: declared,
            underlying_element: underlying,
        });
    }
    specs
}

/// Read the string value of the `#[<tag>("...")]` or `#[<tag> = "..."]`
/// attribute, also unwrapping `#[cfg_attr(<pred>, <tag>("..."))]` so the
/// annotation can stay inert for rustc.
pub fn annotation_value(attrs: &[syn::Attribute], tag: &str) -> Option<String> {
    for attr in attrs {
        if attr.path().is_ident(tag) {
            if let Some(value) = meta_value(&attr.meta, tag) {
                return Some(value);
            }
        } else if attr.path().is_ident("cfg_attr") {
            let metas = attr.parse_args_with(
                syn::punctuated::Punctuated::<syn::Meta, syn::Token![,]>::parse_terminated,
            );
            if let Ok(metas) = metas {
                // first element is the cfg predicate, the rest are attributes
                for meta in metas.iter().skip(1) {
                    if let Some(value) = meta_value(meta, tag) {
                        return Some(value);
                    }
                }
            }
        }
    }
    None
}

fn meta_value(meta: &syn::Meta, tag: &str) -> Option<String> {
    if !meta.path().is_ident(tag) {
        return None;
    }
    match meta {
        syn::Meta::NameValue(nv) => match &nv.value {
            syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Str(s),
                ..
            }) => Some(s.value()),
            _ => None,
        },
        syn::Meta::List(list) => syn::parse2::<syn::LitStr>(list.tokens.clone())
            .ok()
            .map(|s| s.value()),
        syn::Meta::Path(_) => None,
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// `[T; N]` and `Vec<T>` fields track their element type for imports; the
/// element is peeled through one `&`/`Box` indirection to the referent.
fn underlying_element(ty: &TypeRef) -> Option<TypeRef> {
    match ty {
        TypeRef::Array { elem, .. } => Some(peel(elem)),
        TypeRef::Named {
            module: None,
            name,
            args,
        } if name == "Vec" && args.len() == 1 => Some(peel(&args[0])),
        _ => None,
    }
}

fn peel(elem: &TypeRef) -> TypeRef {
    match elem {
        TypeRef::Reference { elem, .. } => (**elem).clone(),
        TypeRef::Named {
            module: None,
            name,
            args,
        } if name == "Box" && args.len() == 1 => args[0].clone(),
        other => other.clone(),
    }
}
