pub fn clip(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    let mut out = s[..end].to_string();
    out.push_str("… [truncated]");
    out
}

/// Boxed preview of inserted lines, at most `max_lines` of them.
pub fn render_insertion(inserted: &str, max_lines: usize) -> String {
    let lines: Vec<&str> = inserted
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();
    let shown = lines.len().min(max_lines);

    let mut out = String::new();
    out.push_str("\u{001b}[36m╭─ Inserted\u{001b}[0m\n");
    for line in &lines[..shown] {
        out.push_str(&format!(
            "\u{001b}[90m│\u{001b}[0m \u{001b}[32m+ {}\u{001b}[0m\n",
            clip(line.trim_end(), 72)
        ));
    }
    if lines.len() > shown {
        out.push_str(&format!(
            "\u{001b}[90m│ ... ({} more lines)\u{001b}[0m\n",
            lines.len() - shown
        ));
    }
    out.push_str("\u{001b}[36m╰─\u{001b}[0m");
    out
}
