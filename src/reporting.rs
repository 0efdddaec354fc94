use crate::collector::CaptureSummary;
use crate::trie::{Trie, TrieNode};
use tracing::{info, warn};

/// Logs the captured files as a tree with per-file and per-directory byte counts.
pub fn print_stats(summary: &CaptureSummary) {
    let mut trie = Trie::new();
    for file in &summary.captured {
        trie.insert(&file.relative_path, file.bytes);
    }

    info!(
        "Overall ({} files, {} bytes)",
        summary.captured.len(),
        trie.get_root().calculate_total_bytes()
    );
    for line in render_tree(trie.get_root()) {
        info!("{}", line);
    }
    for failure in &summary.failures {
        warn!("Skipped {}: {}", failure.path.display(), failure.message);
    }
}

/// Renders the trie into display lines, children sorted by name.
pub fn render_tree(root: &TrieNode) -> Vec<String> {
    let mut lines = Vec::new();
    render_node(root, "", &mut lines);
    lines
}

fn render_node(node: &TrieNode, prefix: &str, lines: &mut Vec<String>) {
    let mut children: Vec<_> = node.children.iter().collect();
    children.sort_by(|a, b| a.0.cmp(b.0));

    for (i, (name, child)) in children.iter().enumerate() {
        let is_last_child = i == children.len() - 1;
        let connector = if is_last_child { "┗━━" } else { "┣━━" };

        match child.bytes {
            Some(bytes) => lines.push(format!("{}{} {} ({} bytes)", prefix, connector, name, bytes)),
            None => {
                lines.push(format!(
                    "{}{} 📂 {} ({} bytes)",
                    prefix,
                    connector,
                    name,
                    child.calculate_total_bytes()
                ));
                let new_prefix = format!("{}{}   ", prefix, if is_last_child { " " } else { "┃" });
                render_node(child, &new_prefix, lines);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn renders_sorted_tree() {
        let mut trie = Trie::new();
        trie.insert(Path::new("src/b.rs"), 3);
        trie.insert(Path::new("src/a.rs"), 4);
        trie.insert(Path::new("package.json"), 2);

        let lines = render_tree(trie.get_root());
        assert_eq!(
            lines,
            vec![
                "┣━━ package.json (2 bytes)".to_string(),
                "┗━━ 📂 src (7 bytes)".to_string(),
                "    ┣━━ a.rs (4 bytes)".to_string(),
                "    ┗━━ b.rs (3 bytes)".to_string(),
            ]
        );
    }
}
