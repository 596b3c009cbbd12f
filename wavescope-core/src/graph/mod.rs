// ============================================================================
// wavescope-core/src/graph/mod.rs
// ============================================================================
//
// FILTER GRAPH: Builders for ffmpeg `-filter_complex` descriptions
//
// A filter graph is a list of chains joined by `;`. Each chain reads its
// labelled inputs, runs a comma-separated list of filters and writes its
// labelled outputs:
//
//   [in1][in2]filter=k=v:k=v,filter2[out]
//
// KEY COMPONENTS:
// - Filter: a single filter with its options
// - FilterChain: labelled inputs, filters and outputs
// - FilterGraph: the complete `;`-joined description
// - escape_graph_path: quoting for file paths used as option values
// - build_filter_graph: the wavescope visualization layout (see panes)

mod panes;

pub use panes::{FRAME_HEIGHT, FRAME_WIDTH, OUTPUT_LABEL, build_filter_graph};

use std::fmt;

/// One filter invocation, e.g. `showwaves=s=898x268:mode=p2p`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    name: String,
    params: Vec<String>,
}

impl Filter {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            params: Vec::new(),
        }
    }

    /// Adds a `key=value` option.
    #[must_use]
    pub fn param(mut self, key: &str, value: impl fmt::Display) -> Self {
        self.params.push(format!("{key}={value}"));
        self
    }

    /// Adds a positional option (`asplit=6`).
    #[must_use]
    pub fn arg(mut self, value: impl fmt::Display) -> Self {
        self.params.push(value.to_string());
        self
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.params.is_empty() {
            write!(f, "={}", self.params.join(":"))?;
        }
        Ok(())
    }
}

/// A linear run of filters between labelled pads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterChain {
    inputs: Vec<String>,
    filters: Vec<Filter>,
    outputs: Vec<String>,
}

impl FilterChain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an input pad label (without brackets).
    #[must_use]
    pub fn input(mut self, label: &str) -> Self {
        self.inputs.push(label.to_string());
        self
    }

    #[must_use]
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Adds an output pad label (without brackets).
    #[must_use]
    pub fn output(mut self, label: &str) -> Self {
        self.outputs.push(label.to_string());
        self
    }
}

impl fmt::Display for FilterChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for label in &self.inputs {
            write!(f, "[{label}]")?;
        }
        let filters: Vec<String> = self.filters.iter().map(ToString::to_string).collect();
        f.write_str(&filters.join(","))?;
        for label in &self.outputs {
            write!(f, "[{label}]")?;
        }
        Ok(())
    }
}

/// A complete filter graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterGraph {
    chains: Vec<FilterChain>,
}

impl FilterGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn chain(mut self, chain: FilterChain) -> Self {
        self.chains.push(chain);
        self
    }

    pub fn chains(&self) -> &[FilterChain] {
        &self.chains
    }

    /// Renders the graph into the `-filter_complex` argument.
    #[must_use]
    pub fn build(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FilterGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chains: Vec<String> = self.chains.iter().map(ToString::to_string).collect();
        f.write_str(&chains.join(";"))
    }
}

/// Quotes a file path for use as a filter option value.
///
/// The value is unescaped twice: once when the graph is split into filters
/// and once when the filter's options are split on `:`. Backslashes and
/// colons are escaped for the option level and the result is single-quoted
/// for the graph level. A single quote closes the quoting, is emitted as an
/// option-level `\'` escaped again for the graph level, and reopens it.
/// On Windows backslash separators become forward slashes first.
pub fn escape_graph_path(path: &str) -> String {
    let path = if cfg!(windows) {
        path.replace('\\', "/")
    } else {
        path.to_string()
    };
    let escaped = path
        .replace('\\', r"\\")
        .replace(':', r"\:")
        .replace('\'', r"'\\\''");
    format!("'{escaped}'")
}
