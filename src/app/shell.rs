//! HTML shell document.
//!
//! # Responsibilities
//! - Provide the default `index.html` or load one from disk
//! - Locate the mount element by id
//! - Split the document around the mount element, injecting head tags
//!
//! # Design Decisions
//! - Only `#id` selectors are supported
//! - Existing children of the mount element are replaced on mount
//! - Nested elements with the same tag name are balanced when searching
//!   for the closing tag

use std::path::Path;

use crate::app::MountError;
use crate::pages::escape_html;

/// An HTML document containing the mount element.
#[derive(Debug, Clone)]
pub struct ShellTemplate {
    html: String,
}

/// The shell split around the mount element.
#[derive(Debug, Clone)]
pub struct MountPoint {
    /// Everything up to and including the mount element's opening tag.
    pub before: String,
    /// The mount element's closing tag and everything after it.
    pub after: String,
}

impl ShellTemplate {
    pub fn from_html(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    /// Load an `index.html` from disk.
    pub fn from_file(path: &Path) -> Result<Self, std::io::Error> {
        Ok(Self::from_html(std::fs::read_to_string(path)?))
    }

    /// Built-in document with a title, a stylesheet and `<div id="app">`.
    pub fn standard(title: &str, stylesheet_href: &str) -> Self {
        Self::from_html(format!(
            "<!DOCTYPE html>\n\
             <html lang=\"en\">\n\
             <head>\n\
             <meta charset=\"UTF-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
             <title>{}</title>\n\
             <link rel=\"stylesheet\" href=\"{}\">\n\
             </head>\n\
             <body>\n\
             <div id=\"app\"></div>\n\
             </body>\n\
             </html>\n",
            escape_html(title),
            escape_html(stylesheet_href)
        ))
    }

    /// Split the document around the element with the given id.
    pub fn split(&self, id: &str, head_tags: &[String]) -> Result<MountPoint, MountError> {
        let html = self.html.as_str();
        let not_found = || MountError::TargetNotFound(format!("#{}", id));

        let attr_pos = [format!("id=\"{}\"", id), format!("id='{}'", id)]
            .iter()
            .filter_map(|needle| find_attribute(html, needle))
            .min()
            .ok_or_else(not_found)?;

        let tag_start = html[..attr_pos].rfind('<').ok_or_else(not_found)?;
        let open_end = attr_pos + html[attr_pos..].find('>').ok_or_else(not_found)? + 1;
        if html[tag_start..open_end].ends_with("/>") {
            return Err(not_found());
        }

        let tag_name: String = html[tag_start + 1..]
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
            .collect::<String>()
            .to_ascii_lowercase();
        if tag_name.is_empty() {
            return Err(not_found());
        }

        let close_start = find_closing_tag(html, open_end, &tag_name)
            .ok_or_else(|| MountError::UnclosedTarget(format!("#{}", id)))?;

        let mut before = html[..open_end].to_string();
        let after = html[close_start..].to_string();

        if !head_tags.is_empty() {
            let head_end = before.find("</head>").ok_or(MountError::MissingHead)?;
            let injected: String = head_tags.iter().map(|t| format!("{}\n", t)).collect();
            before.insert_str(head_end, &injected);
        }

        Ok(MountPoint { before, after })
    }
}

/// Position of `needle` where it appears inside a tag (after a space).
fn find_attribute(html: &str, needle: &str) -> Option<usize> {
    let mut from = 0;
    while let Some(offset) = html[from..].find(needle) {
        let pos = from + offset;
        let preceded_by_space = html[..pos].ends_with(|c: char| c.is_ascii_whitespace());
        let inside_tag = html[..pos]
            .rfind(|c: char| c == '<' || c == '>')
            .map(|i| html.as_bytes()[i] == b'<')
            .unwrap_or(false);
        if preceded_by_space && inside_tag {
            return Some(pos);
        }
        from = pos + needle.len();
    }
    None
}

/// Start of the closing tag balancing an element opened before `from`.
fn find_closing_tag(html: &str, from: usize, tag: &str) -> Option<usize> {
    let lower = html.to_ascii_lowercase();
    let open = format!("<{}", tag);
    let close = format!("</{}", tag);
    let mut depth = 1usize;
    let mut pos = from;

    loop {
        let next_close = lower[pos..].find(&close).map(|i| pos + i)?;
        let next_open = lower[pos..]
            .match_indices(&open)
            .map(|(i, _)| pos + i)
            .find(|&i| {
                // "<div" must not match "<divider"
                lower[i + open.len()..]
                    .starts_with(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/')
            });

        match next_open {
            Some(o) if o < next_close => {
                depth += 1;
                pos = o + open.len();
            }
            _ => {
                depth -= 1;
                if depth == 0 {
                    return Some(next_close);
                }
                pos = next_close + close.len();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_shell_splits() {
        let shell = ShellTemplate::standard("Olympiads", "/assets/main.css");
        let mount = shell.split("app", &[]).unwrap();

        assert!(mount.before.ends_with("<div id=\"app\">"));
        assert!(mount.after.starts_with("</div>"));
        assert!(mount.before.contains("<link rel=\"stylesheet\" href=\"/assets/main.css\">"));
    }

    #[test]
    fn test_head_tags_injected() {
        let shell = ShellTemplate::standard("Olympiads", "/assets/main.css");
        let tags = vec!["<script src=\"/a.js\"></script>".to_string()];
        let mount = shell.split("app", &tags).unwrap();

        assert!(mount.before.contains("<script src=\"/a.js\"></script>\n</head>"));
    }

    #[test]
    fn test_children_replaced_and_nesting_balanced() {
        let shell = ShellTemplate::from_html(
            "<html><head></head><body><div class='x' id='root'><div>loading</div></div><div>tail</div></body></html>",
        );
        let mount = shell.split("root", &[]).unwrap();

        assert_eq!(mount.before, "<html><head></head><body><div class='x' id='root'>");
        assert_eq!(mount.after, "</div><div>tail</div></body></html>");
    }

    #[test]
    fn test_missing_target() {
        let shell = ShellTemplate::from_html("<html><head></head><body><p>id=\"app\"</p></body></html>");
        assert!(matches!(shell.split("app", &[]), Err(MountError::TargetNotFound(_))));

        let shell = ShellTemplate::from_html("<div id=\"application\"></div>");
        assert!(matches!(shell.split("app", &[]), Err(MountError::TargetNotFound(_))));
    }

    #[test]
    fn test_unclosed_target_and_missing_head() {
        let shell = ShellTemplate::from_html("<body><div id=\"app\"></body>");
        assert!(matches!(shell.split("app", &[]), Err(MountError::UnclosedTarget(_))));

        let shell = ShellTemplate::from_html("<body><div id=\"app\"></div></body>");
        assert!(shell.split("app", &[]).is_ok());
        let tags = vec!["<script></script>".to_string()];
        assert!(matches!(shell.split("app", &tags), Err(MountError::MissingHead)));
    }
}
