use std::path::Path;

/// Renders one output block: path header, `file code{`, raw content, `}`, blank line.
pub fn format_block(relative_path: &Path, content: &str) -> String {
    let mut block = String::with_capacity(content.len() + 64);
    block.push_str(&format!(
        "filepath:///{} /// /// ///\n",
        relative_path.display()
    ));
    block.push_str("file code{\n");
    block.push_str(content);
    block.push_str("\n}\n\n");
    block
}
