//! Language type and the supported-direction graph.
//!
//! Providers report their translation directions as a flat list of tokens such
//! as `"en-ru"` or a bare `"ja"`. `LanguageGraph` reshapes that list into one
//! node per language code, each carrying the languages it can translate into.
//! Nodes live in an arena and edges refer to them by index, so a target shared
//! by many sources exists exactly once.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator between the source and target code of a direction token.
pub const DIRECTION_SEPARATOR: char = '-';

/// A language identified by its code, with an optional display name.
///
/// The name is empty when the provider did not report one (detection results,
/// translation results, or codes missing from the provider's name table).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Language {
    /// Short language code (e.g., "en", "ru")
    pub code: String,

    /// Human-readable name, localized by the provider (may be empty)
    pub name: String,
}

impl Language {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// A language known only by its code.
    pub fn from_code(code: impl Into<String>) -> Self {
        Self::new(code, String::new())
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{} ({})", self.name, self.code)
        }
    }
}

/// Split a direction token on its first separator.
///
/// Returns the source code and, for paired tokens, the target code. A token
/// without a separator is a bare source.
pub fn split_direction(token: &str) -> (&str, Option<&str>) {
    match token.split_once(DIRECTION_SEPARATOR) {
        Some((from, to)) => (from, Some(to)),
        None => (token, None),
    }
}

#[derive(Debug, Clone)]
struct Node {
    language: Language,
    is_source: bool,
    targets: Vec<usize>,
}

/// Directed graph of supported translation directions.
///
/// Top-level order follows the first appearance of each code as a source.
/// Codes that only ever appear as targets are reachable through `targets()`
/// and `get()`, but are not listed by `languages()`.
#[derive(Debug, Clone, Default)]
pub struct LanguageGraph {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
    sources: Vec<usize>,
}

impl LanguageGraph {
    /// Build the graph from direction tokens and an optional code-to-name table.
    ///
    /// Parsing is permissive: no token is rejected. A token without a
    /// separator (including the empty string) declares a source with no
    /// outgoing directions.
    ///
    /// # Arguments
    /// * `directions` - Tokens such as `"en-ru"` or a bare `"ja"`, in API order
    /// * `names` - Display names by code; codes missing here get an empty name
    ///
    /// # Example
    /// ```ignore
    /// let graph = LanguageGraph::from_directions(["en-fr", "en-de", "fr-en"], None);
    /// // languages(): en, fr (de only ever appears as a target)
    /// ```
    pub fn from_directions<I, S>(directions: I, names: Option<&HashMap<String, String>>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut graph = Self::default();

        for token in directions {
            let (from, to) = split_direction(token.as_ref());

            let source = graph.node_for(from, names);
            graph.mark_source(source);

            if let Some(to) = to {
                let target = graph.node_for(to, names);
                let edges = &mut graph.nodes[source].targets;
                if !edges.contains(&target) {
                    edges.push(target);
                }
            }
        }

        graph
    }

    /// Index of the node for `code`, creating it on first sight.
    fn node_for(&mut self, code: &str, names: Option<&HashMap<String, String>>) -> usize {
        if let Some(&idx) = self.index.get(code) {
            return idx;
        }

        let name = names
            .and_then(|names| names.get(code))
            .cloned()
            .unwrap_or_default();

        let idx = self.nodes.len();
        self.nodes.push(Node {
            language: Language::new(code, name),
            is_source: false,
            targets: Vec::new(),
        });
        self.index.insert(code.to_string(), idx);
        idx
    }

    /// Record `idx` as a source; the first time this happens it joins the
    /// top-level sequence, even if it was created earlier as a target.
    fn mark_source(&mut self, idx: usize) {
        let node = &mut self.nodes[idx];
        if !node.is_source {
            node.is_source = true;
            self.sources.push(idx);
        }
    }

    /// Source languages in first-source-appearance order.
    pub fn languages(&self) -> impl ExactSizeIterator<Item = SupportedLanguage<'_>> + '_ {
        self.sources
            .iter()
            .map(move |&idx| SupportedLanguage { graph: self, idx })
    }

    /// Look up any node by code, including target-only languages.
    pub fn get(&self, code: &str) -> Option<SupportedLanguage<'_>> {
        self.index
            .get(code)
            .map(|&idx| SupportedLanguage { graph: self, idx })
    }

    /// Whether a direct `from` → `to` direction was listed.
    pub fn can_translate(&self, from: &str, to: &str) -> bool {
        self.get(from)
            .map(|lang| lang.targets().any(|target| target.code == to))
            .unwrap_or(false)
    }

    /// Number of top-level (source) languages.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

/// A node of a `LanguageGraph`, borrowed from the graph.
#[derive(Debug, Clone, Copy)]
pub struct SupportedLanguage<'g> {
    graph: &'g LanguageGraph,
    idx: usize,
}

impl<'g> SupportedLanguage<'g> {
    pub fn language(&self) -> &'g Language {
        &self.graph.nodes[self.idx].language
    }

    pub fn code(&self) -> &'g str {
        &self.language().code
    }

    pub fn name(&self) -> &'g str {
        &self.language().name
    }

    /// Whether this code appeared on the left side of some direction.
    pub fn is_source(&self) -> bool {
        self.graph.nodes[self.idx].is_source
    }

    /// Languages this one translates into, in first-seen order.
    pub fn targets(&self) -> impl ExactSizeIterator<Item = &'g Language> + 'g {
        let graph = self.graph;
        graph.nodes[self.idx]
            .targets
            .iter()
            .map(move |&idx| &graph.nodes[idx].language)
    }
}
