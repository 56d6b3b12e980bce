//! Skeleton extraction: remove function bodies, keep structure.
//!
//! Parses source with tree-sitter, runs the language's body query, and
//! drops the captured line ranges. Signatures, type definitions, and
//! Python docstrings survive.

use crate::error::Error;
use crate::lang::Lang;
use crate::util::read_text;
use std::collections::BTreeSet;
use std::path::Path;
use tree_sitter::{Node, Parser, Query, QueryCursor};

/// Reusable extractor for a single language.
///
/// Holds the compiled body query and parser so repeated extraction over
/// many files pays the setup cost once.
pub struct Extractor {
    lang: Lang,
    parser: Parser,
    query: Query,
}

impl Extractor {
    pub fn new(lang: Lang) -> Result<Self, Error> {
        let grammar = lang.grammar();
        let mut parser = Parser::new();
        parser
            .set_language(grammar)
            .map_err(|_| Error::Grammar(lang))?;
        let query = Query::new(grammar, lang.body_query()).map_err(|e| Error::Query {
            lang,
            message: e.to_string(),
        })?;
        Ok(Extractor {
            lang,
            parser,
            query,
        })
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    /// Extract the skeleton of `source`.
    pub fn extract(&mut self, source: &str) -> Result<String, Error> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or(Error::Parse(self.lang))?;

        let mut removed: BTreeSet<usize> = BTreeSet::new();
        let mut cursor = QueryCursor::new();
        let matches = cursor.matches(&self.query, tree.root_node(), source.as_bytes());
        for matched in matches {
            for capture in matched.captures {
                mark_body_lines(self.lang, capture.node, &mut removed);
            }
        }

        let mut skeleton = String::with_capacity(source.len());
        for (line_no, line) in source.split_inclusive('\n').enumerate() {
            if !removed.contains(&line_no) {
                skeleton.push_str(line);
            }
        }
        skeleton.truncate(skeleton.trim_end().len());
        Ok(skeleton)
    }
}

/// Record the zero-based line numbers of `body` that should be dropped.
fn mark_body_lines(lang: Lang, body: Node, removed: &mut BTreeSet<usize>) {
    let start = body.start_position().row;
    let end = body.end_position().row;

    let mut skip_start = start;
    if lang == Lang::Python {
        if let Some(docstring_end) = python_docstring_end(body) {
            skip_start = docstring_end + 1;
        }
    } else if start < end {
        // The opening-brace line usually carries the declaration; keep it.
        skip_start = start + 1;
    }

    // Single-line bodies take the whole line with them. Multi-line brace
    // bodies keep the closing-brace line; Python has no brace to keep.
    let end_exclusive = if start == end || lang == Lang::Python {
        end + 1
    } else {
        end
    };

    for line_no in skip_start..end_exclusive {
        removed.insert(line_no);
    }
}

/// If the body opens with a docstring, the line it ends on.
fn python_docstring_end(body: Node) -> Option<usize> {
    let first = body.child(0)?;
    if first.kind() != "expression_statement" {
        return None;
    }
    if first.child(0)?.kind() != "string" {
        return None;
    }
    Some(first.end_position().row)
}

/// One-shot extraction for a known language.
pub fn skeleton(source: &str, lang: Lang) -> Result<String, Error> {
    let mut extractor = Extractor::new(lang)?;
    extractor.extract(source)
}

/// Extract a file, detecting the language from its extension.
pub fn skeleton_from_path(path: &Path) -> Result<String, Error> {
    let lang =
        Lang::from_path(path).ok_or_else(|| Error::UnknownExtension(path.to_path_buf()))?;
    let source = read_text(path)?;
    skeleton(&source, lang)
}
