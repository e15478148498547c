//! End-to-end wrapper generation pipeline.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::fields::{map_fields, AccessorSpec};
use super::imports::resolve_imports;
use super::templates::render_wrapper;
use crate::module::{load_module, locate_record, ModuleInfo};

/// Everything the pipeline needs for one invocation.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Source struct name.
    pub src_type: String,
    /// Wrapper type name.
    pub dst_type: String,
    /// Source module path (file or directory).
    pub src_module: PathBuf,
    /// Destination module path (file or directory).
    pub dst_module: PathBuf,
    /// Field attribute key read for renames and exclusions.
    pub tag: String,
}

/// The assembled inputs the renderer consumes exactly once.
#[derive(Debug, Clone)]
pub struct GenerationContext {
    pub src_name: String,
    pub dst_name: String,
    pub dst_module: ModuleInfo,
    pub specs: Vec<AccessorSpec>,
    pub imports: BTreeMap<String, String>,
}

/// Load both modules, locate the record, and map it into a render-ready
/// context.
pub fn build_context(opts: &GenerateOptions) -> Result<GenerationContext> {
    let src_module = load_module(&opts.src_module)
        .with_context(|| format!("loading source module {}", opts.src_module.display()))?;
    let dst_module = if opts.src_module == opts.dst_module {
        src_module.clone()
    } else {
        load_module(&opts.dst_module)
            .with_context(|| format!("loading destination module {}", opts.dst_module.display()))?
    };
    info!(
        src = %format!("{}::{}", src_module.path, opts.src_type),
        dst = %format!("{}::{}", dst_module.path, opts.dst_type),
        "generating wrapper"
    );
    let record = locate_record(&src_module, &opts.src_type)?;
    let specs = map_fields(&record, &src_module, &opts.tag);
    debug!(accessors = specs.len(), "mapped fields");
    let imports = resolve_imports(&dst_module, &specs);
    Ok(GenerationContext {
        src_name: opts.src_type.clone(),
        dst_name: opts.dst_type.clone(),
        dst_module,
        specs,
        imports,
    })
}

/// Run the full pipeline and return the generated source text.
pub fn generate_wrapper(opts: &GenerateOptions) -> Result<String> {
    let ctx = build_context(opts)?;
    render_wrapper(&ctx)
}
