use convert_case::{Case, Casing};

/// Turn a doc-comment token into a single-line comment.
///
/// `/**` and `*/` are stripped, every line loses its leading `*` gutter and blank
/// lines are dropped; the remaining lines are joined with a literal `\n` so the
/// result stays on one line. A missing or blank comment yields `None`, never `""`.
#[must_use]
pub fn format_comment(comment: Option<&str>) -> Option<String> {
    let trimmed = comment?.trim();
    let body = trimmed
        .strip_prefix("/**")
        .or_else(|| trimmed.strip_prefix("/*"))
        .unwrap_or(trimmed);
    let body = body.strip_suffix("*/").unwrap_or(body);

    let lines: Vec<&str> = body
        .lines()
        .map(|line| line.trim().trim_start_matches('*').trim())
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\\n"))
    }
}

/// `JobHistory` → `jobHistory`
#[must_use]
pub fn lower_camel(name: &str) -> String {
    name.to_case(Case::Camel)
}

/// `one-to-many` → `OneToMany`
#[must_use]
pub fn pascal(token: &str) -> String {
    token.to_case(Case::Pascal)
}

/// `Service` → `service`; only the first character changes.
#[must_use]
pub fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_comment_strips_doc_markers() {
        assert_eq!(
            format_comment(Some("/** The department */")),
            Some("The department".to_string())
        );
        assert_eq!(
            format_comment(Some("/**\n * First line\n * Second line\n */")),
            Some("First line\\nSecond line".to_string())
        );
        assert_eq!(format_comment(Some("plain")), Some("plain".to_string()));
    }

    #[test]
    fn test_format_comment_absent_is_none() {
        assert_eq!(format_comment(None), None);
        assert_eq!(format_comment(Some("/** */")), None);
        assert_eq!(format_comment(Some("   ")), None);
    }

    #[test]
    fn test_casing() {
        assert_eq!(lower_camel("JobHistory"), "jobHistory");
        assert_eq!(lower_camel("guid"), "guid");
        assert_eq!(lower_camel("firstName"), "firstName");
        assert_eq!(pascal("one-to-many"), "OneToMany");
        assert_eq!(pascal("many-to-many"), "ManyToMany");
        assert_eq!(pascal("OneToOne"), "OneToOne");
        assert_eq!(lower_first("Service"), "service");
        assert_eq!(lower_first("skipClient"), "skipClient");
        assert_eq!(lower_first(""), "");
    }
}
