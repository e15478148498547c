//! Cross-module import tracking and alias assignment.

use super::fields::AccessorSpec;
use super::types::{trailing_segment, TypeRef};
use crate::module::ModuleInfo;
use std::collections::{BTreeMap, BTreeSet};

/// Tracks foreign module references and assigns each a unique local alias.
///
/// Alias assignment is first-seen order, so for a fixed input the result is
/// stable across runs.
pub struct ImportTracker {
    base: String,
    by_path: BTreeMap<String, String>,
    taken: BTreeSet<String>,
}

impl ImportTracker {
    /// `base` is the destination module path: tracked as the excluded
    /// baseline and never part of the final set. The destination's short
    /// name is reserved so no foreign module shadows it.
    pub fn new(base: &str, base_name: &str) -> Self {
        let mut taken = BTreeSet::new();
        taken.insert(base_name.to_string());
        Self {
            base: base.to_string(),
            by_path: BTreeMap::new(),
            taken,
        }
    }

    /// Record every module reference transitively reachable from `ty`.
    pub fn add_from(&mut self, ty: &TypeRef) {
        match ty {
            TypeRef::Named { module, args, .. } => {
                if let Some(path) = module {
                    self.add_path(path);
                }
                for arg in args {
                    self.add_from(arg);
                }
            }
            TypeRef::Reference { elem, .. }
            | TypeRef::Array { elem, .. }
            | TypeRef::Slice { elem } => self.add_from(elem),
            TypeRef::Tuple(elems) => {
                for elem in elems {
                    self.add_from(elem);
                }
            }
            TypeRef::Verbatim(_) => {}
        }
    }

    fn add_path(&mut self, path: &str) {
        if self.by_path.contains_key(path) {
            return;
        }
        if path == self.base {
            // recorded so `finish` has something to strip, but never aliased
            self.by_path
                .insert(path.to_string(), trailing_segment(path).to_string());
            return;
        }
        let candidate = trailing_segment(path);
        let mut alias = candidate.to_string();
        let mut n = 1;
        while self.taken.contains(&alias) {
            alias = format!("{candidate}_{n}");
            n += 1;
        }
        self.taken.insert(alias.clone());
        self.by_path.insert(path.to_string(), alias);
    }

    /// Final path -> alias map, with the destination module removed.
    pub fn finish(mut self) -> BTreeMap<String, String> {
        self.by_path.remove(&self.base);
        self.by_path
    }
}

/// Resolve the import set for the given accessor specifications.
pub fn resolve_imports(dest: &ModuleInfo, specs: &[AccessorSpec]) -> BTreeMap<String, String> {
    let mut tracker = ImportTracker::new(&dest.path, &dest.name);
    for spec in specs {
        tracker.add_from(&spec.declared_type);
        if let Some(elem) = &spec.underlying_element {
            tracker.add_from(elem);
        }
    }
    tracker.finish()
}
