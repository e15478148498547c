//! Module loading and record lookup.
//!
//! A "module" is addressed by a filesystem path: either a `.rs` file or a
//! directory (a package root resolves to `src/lib.rs`, any other directory to
//! its `mod.rs`). Loading reads declarations only — the module is allowed to
//! not compile, since the tool is expected to run against in-progress code.

use super::types::{ModuleInfo, RecordType, TypeDecl};
use anyhow::{bail, Context, Result};
use quote::ToTokens;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve `path` against the current directory and load the module it names.
///
/// # Errors
///
/// Fails if the path cannot be located, is not inside a Cargo package, or its
/// module file cannot be read or parsed.
pub fn load_module(path: &Path) -> Result<ModuleInfo> {
    let abs = normalize(path)?;
    let file = resolve_module_file(&abs)?;
    let (logical, name) = logical_path(&file)?;
    let source = std::fs::read_to_string(&file)
        .with_context(|| format!("failed to read module file {}", file.display()))?;
    let info = parse_module(&source, &logical, &name)
        .with_context(|| format!("failed to parse module file {}", file.display()))?;
    debug!(path = %info.path, types = info.types.len(), "loaded module");
    Ok(info)
}

/// Build a module view from already-read source text.
///
/// Split out of [`load_module`] so callers holding source in memory (tests,
/// editors) can reuse the declaration scan.
pub fn parse_module(source: &str, path: &str, name: &str) -> Result<ModuleInfo> {
    let ast = syn::parse_file(source)?;
    let mut types = BTreeMap::new();
    let mut children = BTreeSet::new();
    let mut uses = BTreeMap::new();
    for item in ast.items {
        match item {
            syn::Item::Struct(i) => {
                types.insert(i.ident.to_string(), TypeDecl::Struct(i));
            }
            syn::Item::Enum(i) => {
                types.insert(i.ident.to_string(), TypeDecl::Enum(i));
            }
            syn::Item::Type(i) => {
                types.insert(i.ident.to_string(), TypeDecl::Alias(i));
            }
            syn::Item::Union(i) => {
                types.insert(i.ident.to_string(), TypeDecl::Union(i));
            }
            syn::Item::Trait(i) => {
                types.insert(i.ident.to_string(), TypeDecl::Trait(i));
            }
            syn::Item::Mod(m) => {
                children.insert(m.ident.to_string());
            }
            syn::Item::Use(u) => collect_uses(&u.tree, &mut Vec::new(), &mut uses),
            _ => {}
        }
    }
    Ok(ModuleInfo {
        path: path.to_string(),
        name: name.to_string(),
        types,
        children,
        uses,
    })
}

/// Look up `name` in the module's declared scope and return its record
/// definition, following local type-alias chains.
///
/// # Errors
///
/// Fails if the name is absent, or if the underlying shape is anything other
/// than a struct with named fields (or no fields at all).
pub fn locate_record(module: &ModuleInfo, name: &str) -> Result<RecordType> {
    let mut current = name.to_string();
    let mut seen = HashSet::new();
    loop {
        let decl = match module.types.get(&current) {
            Some(decl) => decl,
            None => bail!("{}::{} not found in module scope", module.path, current),
        };
        match decl {
            TypeDecl::Struct(item) => {
                if !item.generics.params.is_empty() {
                    bail!(
                        "{} is generic; parameterized record types are not supported",
                        current
                    );
                }
                return match &item.fields {
                    syn::Fields::Named(fields) => Ok(RecordType {
                        name: name.to_string(),
                        fields: fields.named.iter().cloned().collect(),
                    }),
                    syn::Fields::Unit => Ok(RecordType {
                        name: name.to_string(),
                        fields: Vec::new(),
                    }),
                    syn::Fields::Unnamed(_) => bail!(
                        "{} should be a struct with named fields, was a tuple struct",
                        current
                    ),
                };
            }
            TypeDecl::Alias(item) => {
                if !seen.insert(current.clone()) {
                    bail!("type alias cycle while resolving {}", name);
                }
                match alias_target(&item.ty) {
                    Some(next) if module.types.contains_key(&next) => current = next,
                    _ => bail!(
                        "{} should be a struct, was an alias to {}",
                        current,
                        item.ty.to_token_stream()
                    ),
                }
            }
            other => bail!("{} should be a struct, was {}", current, other.shape()),
        }
    }
}

/// The single bare identifier an alias points at, if it has that shape.
fn alias_target(ty: &syn::Type) -> Option<String> {
    match ty {
        syn::Type::Path(p) if p.qself.is_none() && p.path.segments.len() == 1 => {
            let seg = p.path.segments.first()?;
            if matches!(seg.arguments, syn::PathArguments::None) {
                Some(seg.ident.to_string())
            } else {
                None
            }
        }
        _ => None,
    }
}

fn normalize(path: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .context("cannot determine current directory")?
            .join(path)
    };
    joined
        .canonicalize()
        .with_context(|| format!("module path {} cannot be located", joined.display()))
}

fn resolve_module_file(abs: &Path) -> Result<PathBuf> {
    if abs.is_file() {
        return Ok(abs.to_path_buf());
    }
    let candidates: &[&str] = if abs.join("Cargo.toml").is_file() {
        &["src/lib.rs", "src/main.rs"]
    } else {
        &["mod.rs", "lib.rs", "main.rs"]
    };
    for candidate in candidates {
        let file = abs.join(candidate);
        if file.is_file() {
            return Ok(file);
        }
    }
    bail!("no module file found under {}", abs.display())
}

/// Map a module file to the logical path rustc accepts inside its package
/// (`crate`, `crate::models`, ...) plus the module's short name.
fn logical_path(file: &Path) -> Result<(String, String)> {
    let root = package_root(file)?;
    let package = package_name(&root.join("Cargo.toml"))?;
    let src = root.join("src");
    let rel = file.strip_prefix(&src).map_err(|_| {
        anyhow::anyhow!(
            "module file {} is not under {}",
            file.display(),
            src.display()
        )
    })?;
    let mut segments: Vec<String> = rel
        .with_extension("")
        .components()
        .filter_map(|c| c.as_os_str().to_str().map(str::to_string))
        .collect();
    if let Some(last) = segments.last() {
        if last == "mod" || last == "lib" || last == "main" {
            segments.pop();
        }
    }
    let path = if segments.is_empty() {
        "crate".to_string()
    } else {
        format!("crate::{}", segments.join("::"))
    };
    let name = segments.last().cloned().unwrap_or(package);
    Ok((path, name))
}

fn package_root(file: &Path) -> Result<PathBuf> {
    for dir in file.ancestors().skip(1) {
        if dir.join("Cargo.toml").is_file() {
            return Ok(dir.to_path_buf());
        }
    }
    bail!("{} is not inside a Cargo package", file.display())
}

fn package_name(manifest_path: &Path) -> Result<String> {
    let text = std::fs::read_to_string(manifest_path)
        .with_context(|| format!("failed to read {}", manifest_path.display()))?;
    let manifest: toml::Value = toml::from_str(&text)
        .with_context(|| format!("failed to parse {}", manifest_path.display()))?;
    let name = manifest
        .get("package")
        .and_then(|p| p.get("name"))
        .and_then(|n| n.as_str())
        .with_context(|| format!("no package.name in {}", manifest_path.display()))?;
    Ok(name.replace('-', "_"))
}

fn collect_uses(
    tree: &syn::UseTree,
    prefix: &mut Vec<String>,
    out: &mut BTreeMap<String, Vec<String>>,
) {
    match tree {
        syn::UseTree::Path(p) => {
            prefix.push(p.ident.to_string());
            collect_uses(&p.tree, prefix, out);
            prefix.pop();
        }
        syn::UseTree::Name(n) => {
            let mut full = prefix.clone();
            full.push(n.ident.to_string());
            out.insert(n.ident.to_string(), full);
        }
        syn::UseTree::Rename(r) => {
            let mut full = prefix.clone();
            full.push(r.ident.to_string());
            out.insert(r.rename.to_string(), full);
        }
        syn::UseTree::Group(g) => {
            for item in &g.items {
                collect_uses(item, prefix, out);
            }
        }
        // glob imports carry no single name to resolve against
        syn::UseTree::Glob(_) => {}
    }
}
