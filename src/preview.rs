use crate::vfs::VirtualFS;
use colored::Colorize;
use std::path::Path;

/// Renders one line per staged entry, indented by path depth. Entries are
/// staged parent-before-child, so no re-parenting is needed to draw the tree.
fn render_lines(vfs: &VirtualFS, destination: &Path) -> Vec<String> {
    let root_name = destination
        .file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| destination.display().to_string());

    let mut lines = vec![root_name.blue().to_string()];

    for entry in &vfs.entries {
        let name = entry
            .path
            .file_name()
            .map(|os| os.to_string_lossy().to_string())
            .unwrap_or_else(|| entry.path.display().to_string());

        let name = if entry.is_file {
            name.green()
        } else {
            name.blue()
        };

        let depth = entry.path.components().count();
        let indent = "    ".repeat(depth.saturating_sub(1));

        lines.push(format!("{}{}{}", indent, "└── ".yellow(), name));
    }

    lines
}

/// Prints the tree of everything about to be created under `destination`.
pub fn preview_as_tree(vfs: &VirtualFS, destination: &Path) {
    println!(
        "Legend: {} = (directory), {} = (file)",
        "blue".blue(),
        "green".green()
    );

    println!(
        "{} {}\n",
        "┌─".bold().bright_blue(),
        "Scaffolding".bold().bright_blue(),
    );

    for line in render_lines(vfs, destination) {
        println!("{}", line);
    }

    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leading_spaces(line: &str) -> usize {
        line.chars().take_while(|c| *c == ' ').count()
    }

    #[test]
    fn one_line_per_entry_under_the_root() {
        let mut vfs = VirtualFS::new();
        vfs.file("package.json", "{}");
        vfs.dir("src");
        vfs.file("src/info.json", "{}");

        let lines = render_lines(&vfs, Path::new("/tmp/x"));

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains('x'));
        assert!(lines[3].contains("info.json"));
    }

    #[test]
    fn indentation_follows_path_depth() {
        let mut vfs = VirtualFS::new();
        vfs.file("package.json", "{}");
        vfs.dir("src");
        vfs.file("src/locale/en.cfg", "# stub");

        let lines = render_lines(&vfs, Path::new("/tmp/x"));

        assert_eq!(leading_spaces(&lines[1]), 0);
        assert_eq!(leading_spaces(&lines[2]), 0);
        assert_eq!(leading_spaces(&lines[3]), 8);
    }
}
