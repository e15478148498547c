//! Askama template data for the generated wrapper source.

use anyhow::Context;
use askama::Template;
use std::collections::BTreeMap;

use super::generate::GenerationContext;
use super::types::trailing_segment;

/// One accessor, pre-rendered for the template.
#[derive(Debug, Clone)]
pub struct AccessorLine {
    /// Method name.
    pub exposed_name: String,
    /// Field read in the method body.
    pub source_field: String,
    /// Fully rendered return type.
    pub return_type: String,
}

/// Template data for the generated wrapper file.
#[derive(Template)]
#[template(path = "wrapper.rs.txt", escape = "none")]
pub struct WrapperTemplateData {
    /// Destination module path, recorded in the module doc line.
    pub dst_module: String,
    /// Wrapper type name.
    pub dst_name: String,
    /// Wrapped struct name.
    pub src_name: String,
    /// Pre-rendered `use` block, empty when there are no imports.
    pub import_block: String,
    /// Accessors in field declaration order.
    pub accessors: Vec<AccessorLine>,
}

/// Render the `use` block, in lexicographic path order. An alias is spelled
/// only when it differs from the path's trailing segment.
pub fn render_import_block(imports: &BTreeMap<String, String>) -> String {
    if imports.is_empty() {
        return String::new();
    }
    let mut out = String::from("\n");
    for (path, alias) in imports {
        if alias == trailing_segment(path) {
            out.push_str(&format!("use {path};\n"));
        } else {
            out.push_str(&format!("use {path} as {alias};\n"));
        }
    }
    out
}

/// Render the full wrapper source for the assembled context.
///
/// The result is buffered entirely in memory; nothing reaches the output
/// sink unless rendering succeeds.
///
/// # Errors
///
/// Fails only on template execution failure, which indicates a malformed
/// context and aborts generation.
pub fn render_wrapper(ctx: &GenerationContext) -> anyhow::Result<String> {
    let accessors = ctx
        .specs
        .iter()
        .map(|spec| AccessorLine {
            exposed_name: spec.exposed_name.clone(),
            source_field: spec.source_field.clone(),
            return_type: spec.declared_type.render(&ctx.dst_module.path, &ctx.imports),
        })
        .collect();
    let data = WrapperTemplateData {
        dst_module: ctx.dst_module.path.clone(),
        dst_name: ctx.dst_name.clone(),
        src_name: ctx.src_name.clone(),
        import_block: render_import_block(&ctx.imports),
        accessors,
    };
    data.render().context("wrapper template rendering failed")
}
