//! Minimal Turtle support: enough to write our playlist documents and to
//! scan documents we read back (our own checkpoints, WebID profiles for
//! storage discovery, container listings).
//!
//! Deliberately not a general RDF parser: blank nodes, collections,
//! multi-line literals and datatype handling beyond "drop the tag" are
//! out of scope.

/// One subject-predicate-object statement with IRIs fully expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: Object,
}

/// A statement object: an IRI reference or a literal value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Object {
    Iri(String),
    Literal(String),
}

impl Object {
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Object::Iri(iri) => Some(iri),
            Object::Literal(_) => None,
        }
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Object::Literal(text) => Some(text),
            Object::Iri(_) => None,
        }
    }
}

/// Builds a Turtle document one triple at a time.
///
/// Statements are emitted in insertion order, grouped by subject with `;`
/// continuations, which keeps the output stable and diffable.
#[derive(Debug, Default)]
pub struct TurtleWriter {
    triples: Vec<Triple>,
}

impl TurtleWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iri(&mut self, subject: &str, predicate: &str, object: &str) {
        self.triples.push(Triple {
            subject: subject.to_string(),
            predicate: predicate.to_string(),
            object: Object::Iri(object.to_string()),
        });
    }

    pub fn literal(&mut self, subject: &str, predicate: &str, value: &str) {
        self.triples.push(Triple {
            subject: subject.to_string(),
            predicate: predicate.to_string(),
            object: Object::Literal(value.to_string()),
        });
    }

    /// A literal added only when the value is present; `None` emits nothing
    /// (absent stays absent, it never becomes an empty string).
    pub fn opt_literal(&mut self, subject: &str, predicate: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.literal(subject, predicate, value);
        }
    }

    /// Render the document.
    pub fn to_turtle(&self) -> String {
        let mut out = String::new();
        let mut current_subject: Option<&str> = None;

        for triple in &self.triples {
            match current_subject {
                Some(subject) if subject == triple.subject => {
                    out.push_str(" ;\n    ");
                }
                Some(_) => {
                    out.push_str(" .\n\n");
                    out.push_str(&format!("<{}>\n    ", triple.subject));
                }
                None => {
                    out.push_str(&format!("<{}>\n    ", triple.subject));
                }
            }
            current_subject = Some(&triple.subject);

            out.push_str(&format!("<{}> ", triple.predicate));
            match &triple.object {
                Object::Iri(iri) => out.push_str(&format!("<{iri}>")),
                Object::Literal(text) => out.push_str(&format!("\"{}\"", escape_literal(text))),
            }
        }

        if current_subject.is_some() {
            out.push_str(" .\n");
        }
        out
    }
}

fn escape_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out
}

/// Scan a Turtle document into expanded triples.
///
/// Handles `@prefix` declarations, `<>`-wrapped IRIs, prefixed names, the
/// `a` keyword, quoted literals with escapes (language tags and datatype
/// suffixes are dropped), and `;` / `,` continuations.
pub fn scan(document: &str) -> Vec<Triple> {
    let mut prefixes: Vec<(String, String)> = Vec::new();
    let mut triples = Vec::new();

    for statement in split_statements(document) {
        let tokens = tokenize(&statement);
        if tokens.is_empty() {
            continue;
        }

        if tokens[0] == "@prefix" || tokens[0].eq_ignore_ascii_case("prefix") {
            if tokens.len() >= 3 {
                let name = tokens[1].trim_end_matches(':').to_string();
                if let Some(iri) = strip_iri(&tokens[2]) {
                    prefixes.push((name, iri.to_string()));
                }
            }
            continue;
        }

        parse_statement(&tokens, &prefixes, &mut triples);
    }

    triples
}

/// All object IRIs for a given predicate, in document order.
pub fn object_iris<'a>(triples: &'a [Triple], predicate: &str) -> Vec<&'a str> {
    triples
        .iter()
        .filter(|t| t.predicate == predicate)
        .filter_map(|t| t.object.as_iri())
        .collect()
}

/// The first literal object for a subject/predicate pair.
pub fn literal_of<'a>(triples: &'a [Triple], subject: &str, predicate: &str) -> Option<&'a str> {
    triples
        .iter()
        .find(|t| t.subject == subject && t.predicate == predicate)
        .and_then(|t| t.object.as_literal())
}

/// Split a document into `.`-terminated statements, ignoring dots inside
/// quoted literals and IRIs, and dropping `#` comments.
fn split_statements(document: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut in_quote = false;
    let mut in_iri = false;
    let mut escaped = false;
    let mut in_comment = false;

    for c in document.chars() {
        if in_comment {
            if c == '\n' {
                in_comment = false;
                current.push(' ');
            }
            continue;
        }
        match c {
            '\\' if in_quote && !escaped => {
                escaped = true;
                current.push(c);
                continue;
            }
            '"' if !in_iri && !escaped => in_quote = !in_quote,
            '<' if !in_quote => in_iri = true,
            '>' if !in_quote => in_iri = false,
            '#' if !in_quote && !in_iri => {
                in_comment = true;
                continue;
            }
            '.' if !in_quote && !in_iri => {
                statements.push(std::mem::take(&mut current));
                escaped = false;
                continue;
            }
            _ => {}
        }
        escaped = false;
        current.push(c);
    }
    if !current.trim().is_empty() {
        statements.push(current);
    }
    statements
}

/// Break a statement into tokens: IRIs, quoted literals (with any language
/// tag or datatype suffix attached), punctuation, and bare words.
fn tokenize(statement: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut chars = statement.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
        } else if c == '<' {
            let mut token = String::new();
            for c in chars.by_ref() {
                token.push(c);
                if c == '>' {
                    break;
                }
            }
            tokens.push(token);
        } else if c == '"' {
            let mut token = String::new();
            token.push(chars.next().unwrap_or('"'));
            let mut escaped = false;
            for c in chars.by_ref() {
                token.push(c);
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == '"' {
                    break;
                }
            }
            // Attach a trailing language tag or datatype suffix
            while let Some(&next) = chars.peek() {
                if next.is_whitespace() || next == ';' || next == ',' {
                    break;
                }
                token.push(chars.next().unwrap_or(next));
            }
            tokens.push(token);
        } else if c == ';' || c == ',' {
            chars.next();
            tokens.push(c.to_string());
        } else {
            let mut token = String::new();
            while let Some(&next) = chars.peek() {
                if next.is_whitespace() || next == ';' || next == ',' || next == '<' || next == '"'
                {
                    break;
                }
                token.push(chars.next().unwrap_or(next));
            }
            tokens.push(token);
        }
    }

    tokens
}

fn parse_statement(tokens: &[String], prefixes: &[(String, String)], triples: &mut Vec<Triple>) {
    let Some(subject) = tokens.first().and_then(|t| expand_term(t, prefixes)) else {
        return;
    };

    let mut predicate: Option<String> = None;
    let mut i = 1;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == ";" {
            predicate = None;
            i += 1;
            continue;
        }
        if token == "," {
            i += 1;
            continue;
        }
        if predicate.is_none() {
            predicate = if token == "a" {
                Some(super::vocab::RDF_TYPE.to_string())
            } else {
                expand_term(token, prefixes)
            };
            i += 1;
            continue;
        }
        if let (Some(pred), Some(object)) = (predicate.clone(), parse_object(token, prefixes)) {
            triples.push(Triple {
                subject: subject.clone(),
                predicate: pred,
                object,
            });
        }
        i += 1;
    }
}

fn parse_object(token: &str, prefixes: &[(String, String)]) -> Option<Object> {
    if token.starts_with('"') {
        // Strip quotes and any trailing @lang / ^^datatype suffix
        let end = token.rfind('"')?;
        if end == 0 {
            return None;
        }
        return Some(Object::Literal(unescape_literal(&token[1..end])));
    }
    expand_term(token, prefixes).map(Object::Iri)
}

fn expand_term(token: &str, prefixes: &[(String, String)]) -> Option<String> {
    if let Some(iri) = strip_iri(token) {
        return Some(iri.to_string());
    }
    let (prefix, local) = token.split_once(':')?;
    let base = prefixes
        .iter()
        .find(|(name, _)| name == prefix)
        .map(|(_, iri)| iri)?;
    Some(format!("{base}{local}"))
}

fn strip_iri(token: &str) -> Option<&str> {
    token.strip_prefix('<')?.strip_suffix('>')
}

fn unescape_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}
