//! Concatenate files under a root with per-file headers, extracting
//! skeletons where the language is known.

use crate::error::Error;
use crate::extract::Extractor;
use crate::lang::Lang;
use crate::util::read_text;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// Options for [`concatenate`].
#[derive(Debug, Clone)]
pub struct ConcatOptions {
    /// Replace file bodies with skeletons where possible (default: true).
    pub extract: bool,
    /// Skip unreadable or missing files instead of failing (default: false).
    pub ignore_missing: bool,
}

impl Default for ConcatOptions {
    fn default() -> Self {
        ConcatOptions {
            extract: true,
            ignore_missing: false,
        }
    }
}

/// Concatenate `files` (paths relative to `root`) into one text blob.
///
/// Each entry is prefixed with a `--- <path>` header. Files whose language
/// is detectable are reduced to skeletons when `options.extract` is on;
/// everything else is included verbatim. Extraction failures fall back to
/// the original content rather than dropping the file.
pub fn concatenate(root: &Path, files: &[String], options: &ConcatOptions) -> Result<String, Error> {
    if files.is_empty() {
        return Err(Error::NoFiles);
    }
    if !root.exists() {
        return Err(Error::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(Error::NotADirectory(root.to_path_buf()));
    }

    // One extractor per language seen, reused across files.
    let mut extractors: HashMap<Lang, Extractor> = HashMap::new();
    let mut sections: Vec<String> = Vec::new();

    for file in files {
        let path = root.join(file);
        let content = match read_text(&path) {
            Ok(content) => content,
            Err(e) if options.ignore_missing => {
                warn!("skipping {file}: {e}");
                continue;
            }
            Err(e) => return Err(e),
        };

        let mut body = content;
        if options.extract {
            if let Some(lang) = Lang::from_path(&path) {
                match extractor_for(&mut extractors, lang) {
                    Ok(extractor) => match extractor.extract(&body) {
                        Ok(skeleton) => {
                            debug!("extracted {lang} skeleton from {file}");
                            body = skeleton;
                        }
                        Err(e) => warn!("could not extract {file}: {e}"),
                    },
                    Err(e) => warn!("no extractor for {lang}: {e}"),
                }
            } else {
                debug!("no language for {file}, including as-is");
            }
        }

        sections.push(format!("--- {file}\n{}\n", body.trim_end()));
    }

    Ok(sections.join("\n").trim_end().to_string())
}

fn extractor_for(
    extractors: &mut HashMap<Lang, Extractor>,
    lang: Lang,
) -> Result<&mut Extractor, Error> {
    Ok(match extractors.entry(lang) {
        Entry::Occupied(entry) => entry.into_mut(),
        Entry::Vacant(entry) => entry.insert(Extractor::new(lang)?),
    })
}
