//! Human-readable sizes and per-extension display hints.

const SIZE_UNITS: &[&str] = &["B", "KB", "MB", "GB"];

/// Format a byte count, e.g. `1536` -> `"1.5 KB"`.
///
/// Uses 1024-based units up to GB; anything larger is still expressed in GB.
/// Plain bytes print without a fraction.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut unit_index = 0;
    let mut divisor = 1u64;
    while unit_index < SIZE_UNITS.len() - 1 && bytes / divisor >= 1024 {
        divisor *= 1024;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, SIZE_UNITS[0])
    } else {
        let value = bytes as f64 / divisor as f64;
        format!("{:.1} {}", value, SIZE_UNITS[unit_index])
    }
}

/// Lowercased extension, or the whole lowercased name when it has no dot
/// (so `Dockerfile` maps to `dockerfile`).
fn extension_key(file_name: &str) -> String {
    file_name
        .rsplit('.')
        .next()
        .unwrap_or(file_name)
        .to_lowercase()
}

/// Icon shown next to a file entry.
pub fn file_icon(file_name: &str) -> &'static str {
    match extension_key(file_name).as_str() {
        "js" | "txt" | "xml" | "yml" | "yaml" => "📄",
        "jsx" | "tsx" => "⚛️",
        "ts" => "📘",
        "css" | "scss" | "less" => "🎨",
        "html" => "🌐",
        "json" => "📋",
        "md" | "gitignore" => "📝",
        "py" => "🐍",
        "java" => "☕",
        "cpp" | "c" => "⚙️",
        "php" => "🐘",
        "rb" => "💎",
        "go" => "🐹",
        "rs" => "🦀",
        "swift" => "🦉",
        "kt" => "🏗️",
        "dart" => "🎯",
        "vue" => "💚",
        "dockerfile" => "🐳",
        "env" => "🔐",
        "sql" => "🗃️",
        _ => "📄",
    }
}

/// Icon shown next to a directory entry.
pub fn folder_icon(expanded: bool) -> &'static str {
    if expanded {
        "📂"
    } else {
        "📁"
    }
}

/// Editor language for syntax display.
pub fn language_for(file_name: &str) -> &'static str {
    match extension_key(file_name).as_str() {
        "js" | "jsx" | "vue" => "javascript",
        "ts" | "tsx" => "typescript",
        "py" => "python",
        "java" => "java",
        "cpp" => "cpp",
        "c" => "c",
        "css" => "css",
        "html" => "html",
        "json" => "json",
        "md" => "markdown",
        "sql" => "sql",
        "php" => "php",
        "rb" => "ruby",
        "go" => "go",
        "rs" => "rust",
        "swift" => "swift",
        "kt" => "kotlin",
        "dart" => "dart",
        "scss" => "scss",
        "less" => "less",
        "xml" => "xml",
        "yml" | "yaml" => "yaml",
        _ => "text",
    }
}
