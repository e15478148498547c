//! Renderable type descriptors and their resolution against a module scope.

use crate::module::ModuleInfo;
use quote::ToTokens;
use std::collections::BTreeMap;

/// A field type reduced to the shapes the generator understands.
///
/// Anything outside this set becomes [`TypeRef::Verbatim`], is spelled as
/// written, and contributes no imports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// A possibly module-qualified named type with generic arguments.
    Named {
        module: Option<String>,
        name: String,
        args: Vec<TypeRef>,
    },
    /// `&T`, `&mut T`, `&'static T`.
    Reference {
        lifetime: Option<String>,
        mutable: bool,
        elem: Box<TypeRef>,
    },
    /// `[T; N]`.
    Array { elem: Box<TypeRef>, len: String },
    /// `[T]`.
    Slice { elem: Box<TypeRef> },
    /// `(A, B, ...)`.
    Tuple(Vec<TypeRef>),
    /// An unmodeled shape, spelled as written.
    Verbatim(String),
}

impl TypeRef {
    /// Spell this type as it must appear in the destination module.
    ///
    /// Destination-owned named types are never qualified; foreign named types
    /// are qualified with their local alias from the import set.
    pub fn render(&self, dest_path: &str, imports: &BTreeMap<String, String>) -> String {
        match self {
            TypeRef::Named { module, name, args } => {
                let mut out = String::new();
                if let Some(m) = module {
                    if m != dest_path {
                        let alias = imports
                            .get(m)
                            .map(String::as_str)
                            .unwrap_or_else(|| trailing_segment(m));
                        out.push_str(alias);
                        out.push_str("::");
                    }
                }
                out.push_str(name);
                if !args.is_empty() {
                    let rendered: Vec<String> =
                        args.iter().map(|a| a.render(dest_path, imports)).collect();
                    out.push('<');
                    out.push_str(&rendered.join(", "));
                    out.push('>');
                }
                out
            }
            TypeRef::Reference {
                lifetime,
                mutable,
                elem,
            } => {
                let mut out = String::from("&");
                if let Some(lt) = lifetime {
                    out.push_str(lt);
                    out.push(' ');
                }
                if *mutable {
                    out.push_str("mut ");
                }
                out.push_str(&elem.render(dest_path, imports));
                out
            }
            TypeRef::Array { elem, len } => {
                format!("[{}; {}]", elem.render(dest_path, imports), len)
            }
            TypeRef::Slice { elem } => format!("[{}]", elem.render(dest_path, imports)),
            TypeRef::Tuple(elems) => {
                let rendered: Vec<String> =
                    elems.iter().map(|e| e.render(dest_path, imports)).collect();
                format!("({})", rendered.join(", "))
            }
            TypeRef::Verbatim(s) => s.clone(),
        }
    }
}

/// Last `::`-separated segment of a module path.
pub fn trailing_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

/// Resolve a declared field type against the source module's scope.
pub fn resolve_type(ty: &syn::Type, module: &ModuleInfo) -> TypeRef {
    match ty {
        syn::Type::Path(p) if p.qself.is_none() => resolve_path(p, module),
        syn::Type::Reference(r) => TypeRef::Reference {
            lifetime: r.lifetime.as_ref().map(|l| l.to_string()),
            mutable: r.mutability.is_some(),
            elem: Box::new(resolve_type(&r.elem, module)),
        },
        syn::Type::Array(a) => TypeRef::Array {
            elem: Box::new(resolve_type(&a.elem, module)),
            len: a.len.to_token_stream().to_string(),
        },
        syn::Type::Slice(s) => TypeRef::Slice {
            elem: Box::new(resolve_type(&s.elem, module)),
        },
        syn::Type::Tuple(t) => {
            TypeRef::Tuple(t.elems.iter().map(|e| resolve_type(e, module)).collect())
        }
        syn::Type::Paren(p) => resolve_type(&p.elem, module),
        syn::Type::Group(g) => resolve_type(&g.elem, module),
        other => TypeRef::Verbatim(spell_verbatim(other)),
    }
}

fn resolve_path(p: &syn::TypePath, module: &ModuleInfo) -> TypeRef {
    let segments: Vec<&syn::PathSegment> = p.path.segments.iter().collect();
    let last = match segments.last() {
        Some(last) => *last,
        None => return TypeRef::Verbatim(spell_verbatim(&syn::Type::Path(p.clone()))),
    };
    // generic arguments anywhere but the final segment are out of scope
    for seg in segments.iter().take(segments.len() - 1) {
        if !matches!(seg.arguments, syn::PathArguments::None) {
            return TypeRef::Verbatim(spell_verbatim(&syn::Type::Path(p.clone())));
        }
    }
    let args = match &last.arguments {
        syn::PathArguments::None => Vec::new(),
        syn::PathArguments::AngleBracketed(ab) => {
            let mut out = Vec::new();
            for arg in &ab.args {
                match arg {
                    syn::GenericArgument::Type(t) => out.push(resolve_type(t, module)),
                    syn::GenericArgument::Lifetime(lt) => {
                        out.push(TypeRef::Verbatim(lt.to_string()))
                    }
                    other => out.push(TypeRef::Verbatim(other.to_token_stream().to_string())),
                }
            }
            out
        }
        syn::PathArguments::Parenthesized(_) => {
            return TypeRef::Verbatim(spell_verbatim(&syn::Type::Path(p.clone())))
        }
    };
    let names: Vec<String> = segments.iter().map(|s| s.ident.to_string()).collect();
    let mut name = names[names.len() - 1].clone();
    let module_path = if names.len() == 1 {
        if module.types.contains_key(&name) {
            // declared in the source module itself
            Some(module.path.clone())
        } else if let Some(full) = module.uses.get(&name) {
            let abs = absolutize(full, module);
            // a renamed import is spelled by its referent, not the local name
            if let Some(real) = abs.last() {
                name = real.clone();
            }
            if abs.len() >= 2 {
                Some(abs[..abs.len() - 1].join("::"))
            } else {
                None
            }
        } else {
            // prelude or primitive
            None
        }
    } else {
        let abs = absolutize(&names, module);
        if abs.len() >= 2 {
            Some(abs[..abs.len() - 1].join("::"))
        } else {
            None
        }
    };
    TypeRef::Named {
        module: module_path,
        name,
        args,
    }
}

/// Normalize a path's head against the module: expand `self`/`super`, local
/// `use`d names, and child modules. `crate` heads and external crates pass
/// through unchanged.
fn absolutize(segments: &[String], module: &ModuleInfo) -> Vec<String> {
    let head = match segments.first() {
        Some(head) => head.as_str(),
        None => return Vec::new(),
    };
    match head {
        "crate" | "self" | "super" => expand_roots(segments, module),
        // a `use` path head cannot itself be a `use`d name, so one expansion
        // followed by root normalization is enough
        _ if module.uses.contains_key(head) => {
            let mut out = expand_roots(&module.uses[head], module);
            out.extend(segments[1..].iter().cloned());
            out
        }
        _ if module.children.contains(head) => {
            let mut out = module_segments(module);
            out.extend(segments.iter().cloned());
            out
        }
        _ => segments.to_vec(),
    }
}

/// Resolve `crate`/`self`/`super` heads to absolute segments.
fn expand_roots(segments: &[String], module: &ModuleInfo) -> Vec<String> {
    match segments.first().map(String::as_str) {
        Some("self") => {
            let mut out = module_segments(module);
            out.extend(segments[1..].iter().cloned());
            out
        }
        Some("super") => {
            let mut base = module_segments(module);
            let mut rest = segments;
            while rest.first().map(String::as_str) == Some("super") {
                if base.len() > 1 {
                    base.pop();
                }
                rest = &rest[1..];
            }
            base.extend(rest.iter().cloned());
            base
        }
        _ => segments.to_vec(),
    }
}

fn module_segments(module: &ModuleInfo) -> Vec<String> {
    module.path.split("::").map(str::to_string).collect()
}

/// Token-stream spelling for unmodeled shapes, with the worst of the
/// token-gap noise squeezed back out.
fn spell_verbatim(ty: &syn::Type) -> String {
    ty.to_token_stream()
        .to_string()
        .replace(" :: ", "::")
        .replace(" < ", "<")
        .replace("< ", "<")
        .replace(" >", ">")
        .replace(" ,", ",")
        .replace("& ", "&")
        .replace("' ", "'")
}
