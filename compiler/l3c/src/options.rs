//! Driver configuration.

use std::path::PathBuf;

use l3_ir::DEFAULT_MAX_DEPTH;
use l3_lower::LowerOptions;
use l3_pyemit::RenderOptions;

/// What the driver produces.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum Emit {
    /// Lower L31 to L3 and print it as Scheme source.
    #[default]
    L3,
    /// Render L2 as Python-like source.
    Python,
}

impl Emit {
    pub fn parse(s: &str) -> Option<Emit> {
        match s {
            "l3" => Some(Emit::L3),
            "python" | "py" => Some(Emit::Python),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Emit::L3 => "l3",
            Emit::Python => "python",
        }
    }
}

/// Options for a single `l3c` invocation.
///
/// Unset fields fall back to their defaults when read, so a flag that
/// names the default value still overrides an earlier one in [`merge`].
///
/// [`merge`]: CompileOptions::merge
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct CompileOptions {
    /// Output kind (--emit)
    pub emit: Option<Emit>,
    /// Nesting limit handed to whichever translator runs (--max-depth)
    pub max_depth: Option<usize>,
    /// Output file; stdout when `None` (-o, --output)
    pub output: Option<PathBuf>,
}

impl CompileOptions {
    /// Overlay the settings present in `other`.
    pub fn merge(&mut self, other: &Self) {
        if other.emit.is_some() {
            self.emit = other.emit;
        }
        if other.max_depth.is_some() {
            self.max_depth = other.max_depth;
        }
        if other.output.is_some() {
            self.output.clone_from(&other.output);
        }
    }

    pub fn emit(&self) -> Emit {
        self.emit.unwrap_or_default()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH)
    }

    pub fn lower_options(&self) -> LowerOptions {
        LowerOptions {
            max_depth: self.max_depth(),
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            max_depth: self.max_depth(),
        }
    }
}

/// Parse `--emit=`, `--max-depth=` and `--output=`/`-o=` flags.
///
/// Unknown values print a warning and leave the field unset. Arguments that are
/// not recognized flags are ignored.
pub fn parse_compile_options(args: &[String]) -> CompileOptions {
    let mut options = CompileOptions::default();

    for arg in args {
        if let Some(emit) = arg.strip_prefix("--emit=") {
            if let Some(e) = Emit::parse(emit) {
                options.emit = Some(e);
            } else {
                eprintln!("warning: unknown emit type '{emit}', options: l3, python");
            }
        } else if let Some(depth) = arg.strip_prefix("--max-depth=") {
            match depth.parse::<usize>() {
                Ok(n) if n > 0 => options.max_depth = Some(n),
                _ => eprintln!("warning: invalid max depth '{depth}', ignoring"),
            }
        } else if let Some(output) = arg.strip_prefix("-o=") {
            options.output = Some(PathBuf::from(output));
        } else if let Some(output) = arg.strip_prefix("--output=") {
            options.output = Some(PathBuf::from(output));
        }
    }

    options
}
