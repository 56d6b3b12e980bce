//! Language registry: grammar handles, body queries, and extension mapping.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tree_sitter::Language;

/// A language the extractor understands.
///
/// The set tracks the grammar crates we ship; `tsx` is separate because
/// tree-sitter-typescript exposes it as a distinct grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lang {
    C,
    Cpp,
    CSharp,
    Go,
    Java,
    JavaScript,
    Python,
    Rust,
    Tsx,
    TypeScript,
}

impl Lang {
    pub const ALL: [Lang; 10] = [
        Lang::C,
        Lang::Cpp,
        Lang::CSharp,
        Lang::Go,
        Lang::Java,
        Lang::JavaScript,
        Lang::Python,
        Lang::Rust,
        Lang::Tsx,
        Lang::TypeScript,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Lang::C => "c",
            Lang::Cpp => "cpp",
            Lang::CSharp => "csharp",
            Lang::Go => "go",
            Lang::Java => "java",
            Lang::JavaScript => "javascript",
            Lang::Python => "python",
            Lang::Rust => "rust",
            Lang::Tsx => "tsx",
            Lang::TypeScript => "typescript",
        }
    }

    /// Parse a language identifier, accepting common aliases.
    pub fn from_name(name: &str) -> Option<Lang> {
        match name.to_ascii_lowercase().as_str() {
            "c" => Some(Lang::C),
            "cpp" | "c++" | "cxx" => Some(Lang::Cpp),
            "csharp" | "c#" | "cs" => Some(Lang::CSharp),
            "go" | "golang" => Some(Lang::Go),
            "java" => Some(Lang::Java),
            "javascript" | "js" | "jsx" => Some(Lang::JavaScript),
            "python" | "py" => Some(Lang::Python),
            "rust" | "rs" => Some(Lang::Rust),
            "tsx" => Some(Lang::Tsx),
            "typescript" | "ts" => Some(Lang::TypeScript),
            _ => None,
        }
    }

    /// Detect language from a file extension.
    pub fn from_path(path: &Path) -> Option<Lang> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("c" | "h") => Some(Lang::C),
            Some("cc" | "cpp" | "cxx" | "hh" | "hpp") => Some(Lang::Cpp),
            Some("cs") => Some(Lang::CSharp),
            Some("go") => Some(Lang::Go),
            Some("java") => Some(Lang::Java),
            Some("js" | "mjs" | "cjs" | "jsx") => Some(Lang::JavaScript),
            Some("py" | "pyi") => Some(Lang::Python),
            Some("rs") => Some(Lang::Rust),
            Some("tsx") => Some(Lang::Tsx),
            Some("ts" | "mts" | "cts") => Some(Lang::TypeScript),
            _ => None,
        }
    }

    pub fn grammar(self) -> Language {
        match self {
            Lang::C => tree_sitter_c::language(),
            Lang::Cpp => tree_sitter_cpp::language(),
            Lang::CSharp => tree_sitter_c_sharp::language(),
            Lang::Go => tree_sitter_go::language(),
            Lang::Java => tree_sitter_java::language(),
            Lang::JavaScript => tree_sitter_javascript::language(),
            Lang::Python => tree_sitter_python::language(),
            Lang::Rust => tree_sitter_rust::language(),
            Lang::Tsx => tree_sitter_typescript::language_tsx(),
            Lang::TypeScript => tree_sitter_typescript::language_typescript(),
        }
    }

    /// Tree-sitter query capturing function/method bodies as `@body`.
    pub(crate) fn body_query(self) -> &'static str {
        match self {
            Lang::C | Lang::Cpp => "[(function_definition body: (compound_statement) @body)]",
            Lang::CSharp => {
                "[(method_declaration body: (block) @body) \
                 (accessor_declaration body: (block) @body)]"
            }
            Lang::Go => {
                "[(function_declaration body: (block) @body) \
                 (method_declaration body: (block) @body)]"
            }
            Lang::Java => {
                "[(method_declaration body: (block) @body) \
                 (constructor_declaration body: (constructor_body) @body)]"
            }
            Lang::JavaScript | Lang::TypeScript | Lang::Tsx => {
                "[(function_declaration body: (statement_block) @body) \
                 (function_expression body: (statement_block) @body) \
                 (arrow_function body: (_) @body) \
                 (method_definition body: (statement_block) @body)]"
            }
            Lang::Python => "[(function_definition body: (block) @body)]",
            Lang::Rust => "[(function_item body: (block) @body)]",
        }
    }

    /// Comma-separated list of supported language names, for error messages.
    pub fn supported() -> String {
        Lang::ALL
            .iter()
            .map(|lang| lang.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
