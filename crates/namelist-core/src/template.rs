//! Text templates with `$name` placeholders.
//!
//! Syntax:
//! - `$name` or `${name}` is a placeholder; names match `[_A-Za-z][_A-Za-z0-9]*`
//! - `$$` is a literal `$`
//! - any other `$` is an error
//!
//! Placeholders are collected at parse time so that missing values are
//! reported all at once, before anything is rendered.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{RenderError, Result};

/// Default Stellaris name-list template, covering every renderer key
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/name_list.txt");

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A parsed template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse template text
    pub fn parse(source: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((offset, c)) = chars.next() {
            if c != '$' {
                literal.push(c);
                continue;
            }

            let invalid = |message: &str| {
                let (line, column) = line_col(source, offset);
                RenderError::InvalidPlaceholder {
                    line,
                    column,
                    message: message.to_string(),
                }
            };

            match chars.peek().map(|&(_, next)| next) {
                Some('$') => {
                    chars.next();
                    literal.push('$');
                }
                Some('{') => {
                    chars.next();
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some((_, '}')) => break,
                            Some((_, ch)) => name.push(ch),
                            None => return Err(invalid("unterminated '${'")),
                        }
                    }
                    if !is_identifier(&name) {
                        return Err(invalid(&format!("'{}' is not a valid name", name)));
                    }
                    flush(&mut segments, &mut literal);
                    segments.push(Segment::Placeholder(name));
                }
                Some(next) if next == '_' || next.is_ascii_alphabetic() => {
                    let mut name = String::new();
                    while let Some(&(_, ch)) = chars.peek() {
                        if ch == '_' || ch.is_ascii_alphanumeric() {
                            name.push(ch);
                            chars.next();
                        } else {
                            break;
                        }
                    }
                    flush(&mut segments, &mut literal);
                    segments.push(Segment::Placeholder(name));
                }
                Some(_) => return Err(invalid("'$' must start a placeholder or be written '$$'")),
                None => return Err(invalid("template ends with a lone '$'")),
            }
        }

        flush(&mut segments, &mut literal);
        Ok(Self { segments })
    }

    /// Load and parse a template file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| RenderError::TemplateRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source)
    }

    /// The built-in Stellaris template
    pub fn builtin() -> Result<Self> {
        Self::parse(DEFAULT_TEMPLATE)
    }

    /// Placeholder names in order of first appearance
    pub fn placeholders(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for segment in &self.segments {
            if let Segment::Placeholder(name) = segment {
                if !seen.contains(&name.as_str()) {
                    seen.push(name.as_str());
                }
            }
        }
        seen
    }

    /// Fail unless every placeholder is among `keys`
    pub fn check_keys<S: AsRef<str>>(&self, keys: &[S]) -> Result<()> {
        let missing: Vec<String> = self
            .placeholders()
            .into_iter()
            .filter(|name| !keys.iter().any(|k| k.as_ref() == *name))
            .map(str::to_string)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(RenderError::UnresolvedPlaceholders(missing))
        }
    }

    /// Substitute every placeholder; unused values are ignored
    pub fn render(&self, values: &HashMap<String, String>) -> Result<String> {
        let keys: Vec<&String> = values.keys().collect();
        self.check_keys(&keys)?;

        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => {
                    if let Some(value) = values.get(name) {
                        out.push_str(value);
                    }
                }
            }
        }
        Ok(out)
    }
}

fn flush(segments: &mut Vec<Segment>, literal: &mut String) {
    if !literal.is_empty() {
        segments.push(Segment::Literal(std::mem::take(literal)));
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}

/// 1-based line and column of a byte offset
fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let column = before
        .rfind('\n')
        .map_or(before.chars().count(), |nl| before[nl + 1..].chars().count())
        + 1;
    (line, column)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::required_keys;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_render_simple_and_braced() {
        let template = Template::parse("$listname = { ${shipgeneral}x }").unwrap();
        let out = template
            .render(&values(&[("listname", "HUM1"), ("shipgeneral", "\"Orion\"")]))
            .unwrap();
        assert_eq!(out, "HUM1 = { \"Orion\"x }");
    }

    #[test]
    fn test_dollar_escape() {
        let template = Template::parse("cost: $$5 $name").unwrap();
        assert_eq!(template.placeholders(), vec!["name"]);
        assert_eq!(
            template.render(&values(&[("name", "x")])).unwrap(),
            "cost: $5 x"
        );
    }

    #[test]
    fn test_placeholders_in_first_appearance_order() {
        let template = Template::parse("$b $a $b ${c}").unwrap();
        assert_eq!(template.placeholders(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_unused_values_are_allowed() {
        let template = Template::parse("plain text").unwrap();
        assert_eq!(
            template.render(&values(&[("extra", "1")])).unwrap(),
            "plain text"
        );
    }

    #[test]
    fn test_unresolved_placeholders_listed_together() {
        let template = Template::parse("$listname $bogus ${other} $bogus").unwrap();
        let err = template.render(&values(&[("listname", "x")])).unwrap_err();
        match err {
            RenderError::UnresolvedPlaceholders(names) => {
                assert_eq!(names, vec!["bogus", "other"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_placeholders() {
        for source in ["a $ b", "price $5", "${unterminated", "${1abc}", "${}", "end $"] {
            assert!(
                matches!(
                    Template::parse(source),
                    Err(RenderError::InvalidPlaceholder { .. })
                ),
                "{source:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_invalid_placeholder_position() {
        let err = Template::parse("line one\n  $-").unwrap_err();
        match err {
            RenderError::InvalidPlaceholder { line, column, .. } => {
                assert_eq!((line, column), (2, 3));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_builtin_template_uses_exactly_the_renderer_keys() {
        let template = Template::builtin().unwrap();
        let mut used = template.placeholders();
        used.sort_unstable();
        let mut keys = required_keys();
        keys.sort_unstable();
        assert_eq!(used, keys);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            Template::load("/nonexistent/template.txt"),
            Err(RenderError::TemplateRead { .. })
        ));
    }
}
