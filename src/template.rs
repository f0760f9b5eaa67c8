//! Literal `{header}` token substitution.
//!
//! A token is exactly `{` + a CSV column header + `}`. There is no escaping
//! and no expression syntax: a `{...}` sequence that does not name a column
//! of the row is copied through unchanged.
//!
//! Rendering is a single left-to-right scan, so a substituted value is never
//! scanned again for tokens.

use crate::error::{GenError, InputKind, Result};
use crate::rows::Row;
use std::io::ErrorKind;
use std::path::Path;

/// A template loaded once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
}

impl Template {
    /// Read the whole template file as UTF-8 text.
    ///
    /// A missing file is reported as [`GenError::MissingFile`]; any other
    /// read failure as [`GenError::Unreadable`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => GenError::MissingFile {
                kind: InputKind::Template,
                path: path.to_path_buf(),
            },
            _ => GenError::Unreadable {
                kind: InputKind::Template,
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        tracing::debug!(path = %path.display(), bytes = text.len(), "loaded template");
        Ok(Self { text })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Substitute the row's values for every `{header}` token.
    ///
    /// At each `{`, the row's headers are tried in header order and the first
    /// whose token matches is replaced. Unmatched braces are kept literally.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let template = Template::from("Host: {name}\nIP: {ip}\n");
    /// let row = Row::from_fields(1, ["name", "ip"], ["host1", "10.0.0.1"]);
    /// assert_eq!(template.render(&row), "Host: host1\nIP: 10.0.0.1\n");
    /// ```
    pub fn render(&self, row: &Row) -> String {
        let text = self.text.as_str();
        let mut result = String::with_capacity(text.len());
        let mut pos = 0;

        while let Some(offset) = text[pos..].find('{') {
            let start = pos + offset;
            result.push_str(&text[pos..start]);

            let rest = &text[start + 1..];
            let matched = row.iter().find_map(|(header, value)| {
                rest.strip_prefix(header)
                    .filter(|after| after.starts_with('}'))
                    .map(|_| (header.len(), value))
            });

            match matched {
                Some((name_len, value)) => {
                    result.push_str(value);
                    // `{` + header + `}`
                    pos = start + name_len + 2;
                }
                None => {
                    result.push('{');
                    pos = start + 1;
                }
            }
        }

        result.push_str(&text[pos..]);
        result
    }

    /// Distinct `{name}` tokens in the template, in order of first appearance.
    ///
    /// A token here is the shortest `{...}` span without a nested `{`.
    pub fn tokens(&self) -> Vec<&str> {
        let mut tokens: Vec<&str> = Vec::new();
        let mut open: Option<usize> = None;

        for (pos, ch) in self.text.char_indices() {
            match ch {
                '{' => open = Some(pos),
                '}' => {
                    if let Some(start) = open.take() {
                        let name = &self.text[start + 1..pos];
                        if !name.is_empty() && !tokens.contains(&name) {
                            tokens.push(name);
                        }
                    }
                }
                _ => {}
            }
        }

        tokens
    }

    /// Tokens that name none of the given headers; they render literally.
    pub fn unmatched_tokens<'a, I>(&self, headers: I) -> Vec<&str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let headers: Vec<&str> = headers.into_iter().collect();
        self.tokens()
            .into_iter()
            .filter(|token| !headers.iter().any(|header| header == token))
            .collect()
    }
}

impl From<&str> for Template {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}
