//! Box-drawing tree rendering for discovered file lists.

use std::collections::BTreeMap;

#[derive(Default)]
struct TreeNode {
    children: BTreeMap<String, TreeNode>,
}

impl TreeNode {
    fn is_file(&self) -> bool {
        self.children.is_empty()
    }
}

/// Render `paths` (relative, `/`-separated) as a tree rooted at `.`.
///
/// Directories sort before files, names case-insensitively. With
/// `collapse_single_dirs`, chains of single-child directories render on
/// one line (`main/java/com/example`).
pub fn render_tree(paths: &[String], collapse_single_dirs: bool) -> String {
    let mut root = TreeNode::default();
    for path in paths {
        let mut node = &mut root;
        for part in path.split('/').filter(|p| !p.is_empty()) {
            node = node.children.entry(part.to_string()).or_default();
        }
    }

    let mut lines = vec![".".to_string()];
    render_children(&root, "", collapse_single_dirs, &mut lines);
    lines.join("\n")
}

fn render_children(
    node: &TreeNode,
    prefix: &str,
    collapse: bool,
    lines: &mut Vec<String>,
) {
    let mut entries: Vec<(&String, &TreeNode)> = node.children.iter().collect();
    entries.sort_by_key(|(name, child)| (child.is_file(), name.to_lowercase()));

    let last = entries.len().saturating_sub(1);
    for (i, (name, child)) in entries.into_iter().enumerate() {
        let connector = if i == last { "└─ " } else { "├─ " };

        let mut display = name.clone();
        let mut current = child;
        if collapse {
            // Fold chains of single-child directories into one segment.
            while current.children.len() == 1 {
                let (child_name, grandchild) = current.children.iter().next().unwrap();
                if grandchild.is_file() {
                    break;
                }
                display.push('/');
                display.push_str(child_name);
                current = grandchild;
            }
        }

        lines.push(format!("{prefix}{connector}{display}"));
        if !current.is_file() {
            let extension = if i == last { "   " } else { "│  " };
            render_children(current, &format!("{prefix}{extension}"), collapse, lines);
        }
    }
}
