//! Text rendering for listings, trees and file info.

use crate::vfs::{DirEntry, EntryKind, FileInfo, TreeEntry};
use crate::tree::FileType;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Icon shown next to an entry in the file manager
pub fn icon_for(kind: &EntryKind) -> &'static str {
    match kind {
        EntryKind::Directory => "📁",
        EntryKind::File(file_type) => match file_type {
            FileType::Image => "🖼️",
            FileType::Audio => "🎵",
            FileType::Video => "🎬",
            FileType::Pdf => "📕",
            FileType::Spreadsheet | FileType::Presentation => "📊",
            FileType::Archive => "🗜️",
            FileType::Code => "💻",
            FileType::Text | FileType::Other(_) => "📄",
        },
    }
}

/// Render a directory listing as a table.
pub fn render_listing(entries: &[DirEntry]) -> String {
    if entries.is_empty() {
        return "(empty)".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["", "Name", "Type", "Size", "Modified"]);
    for entry in entries {
        table.add_row(vec![
            icon_for(&entry.kind).to_string(),
            entry.name.clone(),
            entry.kind.to_string(),
            entry.size.to_string(),
            entry.modified_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        ]);
    }
    table.to_string()
}

pub fn render_file_info(info: &FileInfo) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.add_row(vec!["Name".to_string(), info.name.clone()]);
    table.add_row(vec!["Type".to_string(), info.kind.to_string()]);
    table.add_row(vec!["Size".to_string(), info.size.to_string()]);
    table.add_row(vec!["Created".to_string(), info.created_at.to_rfc3339()]);
    table.add_row(vec!["Modified".to_string(), info.modified_at.to_rfc3339()]);
    table.to_string()
}

fn display_name(entry: &TreeEntry) -> String {
    if entry.kind.is_directory() && entry.name != "/" {
        format!("{}/", entry.name)
    } else {
        entry.name.clone()
    }
}

/// Render a subtree with box-drawing guides.
pub fn render_tree(root: &TreeEntry) -> String {
    let mut lines = vec![display_name(root)];
    push_children(&root.children, "", &mut lines);
    lines.join("\n")
}

fn push_children(children: &[TreeEntry], prefix: &str, lines: &mut Vec<String>) {
    for (i, child) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        let (branch, indent) = if last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        lines.push(format!("{}{}{}", prefix, branch, display_name(child)));
        push_children(&child.children, &format!("{}{}", prefix, indent), lines);
    }
}
