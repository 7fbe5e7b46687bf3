//! Structured view of a signature string.
//!
//! The IR keeps `sig` as opaque text. Emitters that need to look inside a
//! function signature can parse it here. The accepted syntax is the one
//! the scripting runtime prints for a callable:
//!
//! ```text
//! (a: int, b: str = 'x', /, c=None, *args: int, d: bool = True, **kwargs) -> dict
//! ```
//!
//! Splitting happens only at the top level, so commas, colons and equals
//! signs inside brackets or string literals stay part of an annotation or
//! default value.

use std::fmt;
use std::str::FromStr;

use crate::error::SignatureError;

/// How an argument can be bound to a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    /// Declared before a `/` marker
    PositionalOnly,

    /// Ordinary parameter
    PositionalOrKeyword,

    /// `*args`
    VarPositional,

    /// Declared after `*` or `*args`
    KeywordOnly,

    /// `**kwargs`
    VarKeyword,
}

/// One parameter of a parsed signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub kind: ParameterKind,
    pub annotation: Option<String>,
    pub default: Option<String>,
}

impl Parameter {
    /// Check if a caller must supply this parameter.
    pub fn is_required(&self) -> bool {
        self.default.is_none()
            && !matches!(
                self.kind,
                ParameterKind::VarPositional | ParameterKind::VarKeyword
            )
    }
}

/// A parsed call signature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    pub parameters: Vec<Parameter>,
    pub returns: Option<String>,
}

impl Signature {
    /// Parse a signature string.
    pub fn parse(input: &str) -> Result<Self, SignatureError> {
        let text = input.trim();
        if !text.starts_with('(') {
            return Err(SignatureError::MissingParen(text.to_string()));
        }

        let close =
            closing_paren(text).ok_or_else(|| SignatureError::Unbalanced(text.to_string()))?;
        let inner = &text[1..close];
        let rest = text[close + 1..].trim();

        let returns = if rest.is_empty() {
            None
        } else {
            match rest.strip_prefix("->").map(str::trim) {
                Some(ret) if !ret.is_empty() => Some(ret.to_string()),
                _ => return Err(SignatureError::TrailingText(rest.to_string())),
            }
        };

        let parameters = if inner.trim().is_empty() {
            Vec::new()
        } else {
            let parts = split_top_level(inner, ',')
                .ok_or_else(|| SignatureError::Unbalanced(text.to_string()))?;
            parse_parameters(&parts)?
        };

        Ok(Self {
            parameters,
            returns,
        })
    }

    /// Find a parameter by name.
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Check if the signature accepts `*args` or `**kwargs`.
    pub fn is_variadic(&self) -> bool {
        self.parameters.iter().any(|p| {
            matches!(
                p.kind,
                ParameterKind::VarPositional | ParameterKind::VarKeyword
            )
        })
    }

    /// Parameters a caller must supply.
    pub fn required(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().filter(|p| p.is_required())
    }
}

impl FromStr for Signature {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Signature::parse(s)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParameterKind::VarPositional => f.write_str("*")?,
            ParameterKind::VarKeyword => f.write_str("**")?,
            _ => {}
        }
        f.write_str(&self.name)?;
        if let Some(annotation) = &self.annotation {
            write!(f, ": {}", annotation)?;
        }
        match (&self.annotation, &self.default) {
            (Some(_), Some(default)) => write!(f, " = {}", default),
            (None, Some(default)) => write!(f, "={}", default),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::with_capacity(self.parameters.len() + 2);
        let has_var_positional = self
            .parameters
            .iter()
            .any(|p| p.kind == ParameterKind::VarPositional);
        let mut star_written = has_var_positional;

        for (i, param) in self.parameters.iter().enumerate() {
            if param.kind == ParameterKind::KeywordOnly && !star_written {
                parts.push("*".to_string());
                star_written = true;
            }
            parts.push(param.to_string());

            let next_positional_only = self
                .parameters
                .get(i + 1)
                .is_some_and(|p| p.kind == ParameterKind::PositionalOnly);
            if param.kind == ParameterKind::PositionalOnly && !next_positional_only {
                parts.push("/".to_string());
            }
        }

        write!(f, "({})", parts.join(", "))?;
        if let Some(returns) = &self.returns {
            write!(f, " -> {}", returns)?;
        }
        Ok(())
    }
}

fn parse_parameters(parts: &[&str]) -> Result<Vec<Parameter>, SignatureError> {
    let mut parameters: Vec<Parameter> = Vec::with_capacity(parts.len());
    let mut keyword_only = false;
    let mut slash_seen = false;
    let mut var_keyword_seen = false;

    for (position, raw) in parts.iter().enumerate() {
        let part = raw.trim();
        if part.is_empty() {
            return Err(SignatureError::EmptyParameter { position });
        }

        // `**kwargs` closes the parameter list.
        if var_keyword_seen {
            return Err(if part == "/" {
                SignatureError::MisplacedSlash { position }
            } else {
                SignatureError::AfterVarKeyword { position }
            });
        }

        if part == "/" {
            if slash_seen || keyword_only || parameters.is_empty() {
                return Err(SignatureError::MisplacedSlash { position });
            }
            slash_seen = true;
            for param in &mut parameters {
                param.kind = ParameterKind::PositionalOnly;
            }
            continue;
        }

        if part == "*" {
            keyword_only = true;
            continue;
        }

        let (kind, body) = if let Some(body) = part.strip_prefix("**") {
            var_keyword_seen = true;
            (ParameterKind::VarKeyword, body)
        } else if let Some(body) = part.strip_prefix('*') {
            keyword_only = true;
            (ParameterKind::VarPositional, body)
        } else if keyword_only {
            (ParameterKind::KeywordOnly, part)
        } else {
            (ParameterKind::PositionalOrKeyword, part)
        };

        let (head, default) = match find_top_level(body, '=') {
            Some(eq) => (&body[..eq], Some(body[eq + 1..].trim().to_string())),
            None => (body, None),
        };
        let (name, annotation) = match find_top_level(head, ':') {
            Some(colon) => (&head[..colon], Some(head[colon + 1..].trim().to_string())),
            None => (head, None),
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(SignatureError::EmptyParameter { position });
        }

        parameters.push(Parameter {
            name: name.to_string(),
            kind,
            annotation: annotation.filter(|a| !a.is_empty()),
            default: default.filter(|d| !d.is_empty()),
        });
    }

    Ok(parameters)
}

fn closer_for(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        _ => None,
    }
}

/// Tracks bracket nesting and string literals while walking a signature.
#[derive(Default)]
struct Nesting {
    stack: Vec<char>,
    quote: Option<char>,
    escaped: bool,
}

impl Nesting {
    /// Feed one character. Returns `Err(())` on a mismatched closer and
    /// `Ok(true)` when the character sits at the top level.
    fn feed(&mut self, c: char) -> Result<bool, ()> {
        if let Some(q) = self.quote {
            if self.escaped {
                self.escaped = false;
            } else if c == '\\' {
                self.escaped = true;
            } else if c == q {
                self.quote = None;
            }
            return Ok(false);
        }

        let top_level = self.stack.is_empty();
        match c {
            '\'' | '"' => self.quote = Some(c),
            '(' | '[' | '{' => {
                if let Some(closer) = closer_for(c) {
                    self.stack.push(closer);
                }
            }
            ')' | ']' | '}' => {
                if self.stack.pop() != Some(c) {
                    return Err(());
                }
            }
            _ => {}
        }
        Ok(top_level)
    }

    fn is_balanced(&self) -> bool {
        self.stack.is_empty() && self.quote.is_none()
    }
}

/// Byte index of the parenthesis closing the one at index 0.
fn closing_paren(text: &str) -> Option<usize> {
    let mut nesting = Nesting::default();
    for (i, c) in text.char_indices() {
        nesting.feed(c).ok()?;
        if i > 0 && nesting.is_balanced() {
            return Some(i);
        }
    }
    None
}

fn split_top_level(text: &str, sep: char) -> Option<Vec<&str>> {
    let mut nesting = Nesting::default();
    let mut parts = Vec::new();
    let mut start = 0;
    for (i, c) in text.char_indices() {
        if nesting.feed(c).ok()? && c == sep {
            parts.push(&text[start..i]);
            start = i + c.len_utf8();
        }
    }
    if !nesting.is_balanced() {
        return None;
    }
    parts.push(&text[start..]);
    Some(parts)
}

fn find_top_level(text: &str, target: char) -> Option<usize> {
    let mut nesting = Nesting::default();
    for (i, c) in text.char_indices() {
        if nesting.feed(c).ok()? && c == target {
            return Some(i);
        }
    }
    None
}
