//! Front-matter title extraction from YAML-like (`---`) or TOML (`+++`) blocks.

/// Extract the `title` declared in a page's front matter.
pub fn extract_title(content: &str) -> Option<String> {
    let (fm, is_toml) = detect_frontmatter(content)?;
    let title = if is_toml {
        let table: toml::Table = toml::from_str(fm).ok()?;
        table.get("title")?.as_str()?.to_string()
    } else {
        parse_yaml_like_title(fm)?
    };

    let title = title.trim();
    (!title.is_empty()).then(|| title.to_string())
}

/// Find `title: value` among simple `key: value` lines.
fn parse_yaml_like_title(content: &str) -> Option<String> {
    content.lines().find_map(|line| {
        // Nested keys are indented; only top-level `title` counts
        if line.starts_with([' ', '\t']) {
            return None;
        }
        let (key, value) = line.split_once(':')?;
        if !key.trim().eq_ignore_ascii_case("title") {
            return None;
        }
        Some(unquote(value.trim()).to_string())
    })
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

/// Detect and extract front matter. Returns `(frontmatter, is_toml)`.
fn detect_frontmatter(content: &str) -> Option<(&str, bool)> {
    let trimmed = content.trim_start_matches('\u{feff}').trim_start();

    for (fence, is_toml) in [("---", false), ("+++", true)] {
        if trimmed.starts_with(fence)
            && let Some(end) = trimmed[3..].find(&format!("\n{fence}"))
        {
            return Some((trimmed[3..3 + end].trim(), is_toml));
        }
    }

    None
}
