use std::collections::{BTreeMap, BTreeSet};

/// A type declaration found in a loaded module.
#[derive(Debug, Clone)]
pub enum TypeDecl {
    Struct(syn::ItemStruct),
    Enum(syn::ItemEnum),
    Alias(syn::ItemType),
    Union(syn::ItemUnion),
    Trait(syn::ItemTrait),
}

impl TypeDecl {
    /// Human-readable shape name for diagnostics.
    pub fn shape(&self) -> &'static str {
        match self {
            TypeDecl::Struct(item) => match item.fields {
                syn::Fields::Unnamed(_) => "a tuple struct",
                _ => "a struct",
            },
            TypeDecl::Enum(_) => "an enum",
            TypeDecl::Alias(_) => "a type alias",
            TypeDecl::Union(_) => "a union",
            TypeDecl::Trait(_) => "a trait",
        }
    }
}

/// Declaration-level view of one loaded module.
///
/// Built once per invocation per module path and never mutated afterwards.
/// Only the shape of the module is captured; whether the module currently
/// compiles is irrelevant.
#[derive(Debug, Clone)]
pub struct ModuleInfo {
    /// Logical path rustc accepts inside the package, e.g. `crate::models`.
    pub path: String,
    /// Trailing path segment, or the package name for a crate root.
    pub name: String,
    /// Declared type identifiers in this module.
    pub types: BTreeMap<String, TypeDecl>,
    /// Names of child `mod` declarations.
    pub children: BTreeSet<String>,
    /// Imported identifier -> full path segments, from `use` items.
    pub uses: BTreeMap<String, Vec<String>>,
}

/// The located record: an ordered field list ready for mapping.
#[derive(Debug, Clone)]
pub struct RecordType {
    /// The struct name as looked up.
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<syn::Field>,
}
