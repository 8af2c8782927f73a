//! The translate pipeline: JSON AST in, target text out.

use std::io::{self, Read, Write};
use std::path::PathBuf;

use l3_diagnostic::TranslateError;
use l3_ir::Node;
use serde::Deserialize;
use thiserror::Error;

use crate::options::{CompileOptions, Emit};

/// Anything that can stop an `l3c` run.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("cannot read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("invalid AST: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Translate(#[from] TranslateError),
}

impl CompileError {
    /// The line printed to stderr when a run fails.
    pub fn to_diagnostic_string(&self) -> String {
        match self {
            CompileError::Translate(err) => err.to_diagnostic_string(),
            other => format!("error: {other}"),
        }
    }
}

/// Translate an already-built tree according to `options.emit()`.
///
/// - `Emit::L3`: lower L31 to L3, then print it as Scheme source.
/// - `Emit::Python`: render L2 directly.
#[tracing::instrument(level = "debug", skip_all, fields(emit = options.emit().as_str()))]
pub fn compile(node: &Node, options: &CompileOptions) -> Result<String, TranslateError> {
    match options.emit() {
        Emit::L3 => {
            l3_lower::lower_with(node, &options.lower_options()).map(|lowered| lowered.to_string())
        }
        Emit::Python => l3_pyemit::render_with(node, &options.render_options()),
    }
}

/// Decode the JSON encoding of a `Node`.
///
/// Nesting is unbounded here; the stack grows as the decoder descends, and
/// depth is policed by the translators' `max_depth` instead.
pub fn decode(json: &str) -> Result<Node, CompileError> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    deserializer.disable_recursion_limit();
    let node = Node::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(node)
}

pub fn compile_json(json: &str, options: &CompileOptions) -> Result<String, CompileError> {
    let node = decode(json)?;
    Ok(compile(&node, options)?)
}

/// Read a JSON AST from `input` (`-` for stdin), translate it, and write the
/// result to `options.output` or stdout.
pub fn compile_file(input: &str, options: &CompileOptions) -> Result<(), CompileError> {
    let json = read_input(input)?;
    let output = compile_json(&json, options)?;
    tracing::debug!(bytes = output.len(), "translation succeeded");

    match &options.output {
        Some(path) => std::fs::write(path, format!("{output}\n")).map_err(|source| {
            CompileError::Write {
                path: path.clone(),
                source,
            }
        }),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{output}").map_err(|source| CompileError::Write {
                path: PathBuf::from("<stdout>"),
                source,
            })
        }
    }
}

fn read_input(input: &str) -> Result<String, CompileError> {
    if input == "-" {
        let mut json = String::new();
        io::stdin()
            .read_to_string(&mut json)
            .map_err(|source| CompileError::Read {
                path: PathBuf::from("<stdin>"),
                source,
            })?;
        return Ok(json);
    }
    std::fs::read_to_string(input).map_err(|source| CompileError::Read {
        path: PathBuf::from(input),
        source,
    })
}
