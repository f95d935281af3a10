//! Formula template tokenizer
//!
//! Splits a formula body into literal text and embedded cell references before
//! any translation happens. Classifying first is what keeps translation from
//! shifting reference-shaped substrings inside string literals or function
//! names.

use sheetfill_core::CellAddress;

/// One token of a formula template's expression
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateToken {
    /// Text passed through unchanged (operators, function names, numbers,
    /// string literals with their quotes)
    Literal(String),
    /// An embedded cell reference, shifted during translation
    Reference(CellAddress),
}

/// A formula anchored at an origin cell
///
/// Immutable once built; [`translate`](FormulaTemplate::translate) rewrites it
/// for other destination cells.
#[derive(Debug, Clone, PartialEq)]
pub struct FormulaTemplate {
    origin: CellAddress,
    tokens: Vec<TemplateToken>,
}

impl FormulaTemplate {
    /// Tokenize a formula body anchored at `origin`
    ///
    /// A leading `=` is accepted and dropped. Tokenization is total: anything
    /// that does not classify as a cell reference stays literal text.
    ///
    /// # Examples
    /// ```
    /// use sheetfill_core::CellAddress;
    /// use sheetfill_formula::FormulaTemplate;
    ///
    /// let origin = CellAddress::parse("B2").unwrap();
    /// let template = FormulaTemplate::parse("=SUM(B2:B2)", origin);
    /// assert_eq!(template.reference_count(), 2);
    /// ```
    pub fn parse(formula: &str, origin: CellAddress) -> Self {
        let body = formula.trim().strip_prefix('=').unwrap_or(formula.trim());

        let mut tokens = Vec::new();
        let mut literal = String::new();
        let mut scanner = Scanner::new(body);

        while let Some(c) = scanner.peek() {
            if c == '"' {
                literal.push_str(&scanner.scan_string());
            } else if c.is_ascii_alphabetic() || c == '$' {
                // A run glued to a preceding identifier char is part of a
                // larger token, e.g. the E5 in the numeric constant 1E5
                let prev_is_ident = literal
                    .chars()
                    .last()
                    .map_or(false, |p| p.is_ascii_alphanumeric() || p == '_' || p == '.');
                let run = scanner.scan_run();
                if prev_is_ident {
                    literal.push_str(&run);
                    continue;
                }
                match classify_reference(&run, scanner.peek()) {
                    Some(addr) => {
                        if !literal.is_empty() {
                            tokens.push(TemplateToken::Literal(std::mem::take(&mut literal)));
                        }
                        tokens.push(TemplateToken::Reference(addr));
                    }
                    None => literal.push_str(&run),
                }
            } else {
                literal.push(c);
                scanner.advance();
            }
        }

        if !literal.is_empty() {
            tokens.push(TemplateToken::Literal(literal));
        }

        Self { origin, tokens }
    }

    /// The anchor cell the formula was authored at
    pub fn origin(&self) -> CellAddress {
        self.origin
    }

    /// The classified tokens
    pub fn tokens(&self) -> &[TemplateToken] {
        &self.tokens
    }

    /// Number of reference tokens in the expression
    pub fn reference_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| matches!(t, TemplateToken::Reference(_)))
            .count()
    }

    /// Reassemble the formula body (no leading `=`)
    pub fn text(&self) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            match token {
                TemplateToken::Literal(s) => out.push_str(s),
                TemplateToken::Reference(addr) => out.push_str(&addr.to_a1_string()),
            }
        }
        out
    }

    /// Decide whether the template is worth propagating
    ///
    /// Evidence of being a formula is at least one reference token, an
    /// arithmetic operator, or a function call in the literal text. Templates
    /// without evidence are treated as plain text by the propagation driver.
    pub fn is_propagatable(&self) -> bool {
        if self.reference_count() > 0 {
            return true;
        }

        self.tokens.iter().any(|t| match t {
            TemplateToken::Literal(s) => has_formula_evidence(s),
            TemplateToken::Reference(_) => true,
        })
    }
}

/// Operator or function-call evidence in literal text (string literals have
/// already been folded into literals with their quotes, so check outside them)
fn has_formula_evidence(literal: &str) -> bool {
    let mut in_string = false;
    let mut prev_was_ident = false;

    for c in literal.chars() {
        if c == '"' {
            in_string = !in_string;
            prev_was_ident = false;
            continue;
        }
        if in_string {
            continue;
        }
        if matches!(c, '+' | '-' | '*' | '/') {
            return true;
        }
        if c == '(' && prev_was_ident {
            return true;
        }
        prev_was_ident = c.is_ascii_alphanumeric() || c == '_' || c == '.';
    }

    false
}

/// Classify a scanned identifier-like run as a cell reference, or reject it
///
/// The run must match `$? letters $? digits` exactly, and must not be a
/// function call (next char `(`). Runs that parse but fall outside the sheet
/// bounds stay literal.
fn classify_reference(run: &str, next: Option<char>) -> Option<CellAddress> {
    if next == Some('(') {
        return None;
    }

    if !looks_like_reference(run) {
        return None;
    }

    CellAddress::parse(run).ok()
}

fn looks_like_reference(run: &str) -> bool {
    let bytes = run.as_bytes();
    let mut pos = 0;

    if bytes.get(pos) == Some(&b'$') {
        pos += 1;
    }

    let letters_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
        pos += 1;
    }
    if pos == letters_start {
        return false;
    }

    if bytes.get(pos) == Some(&b'$') {
        pos += 1;
    }

    let digits_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }

    pos > digits_start && pos == bytes.len()
}

/// Byte-walking scanner over a formula body
struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(offset)
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    /// Scan a double-quoted string literal, quotes included; `""` escapes a
    /// quote inside the string
    fn scan_string(&mut self) -> String {
        let start = self.pos;
        self.advance(); // opening quote

        while let Some(c) = self.peek() {
            if c == '"' {
                if self.peek_at(1) == Some('"') {
                    self.advance();
                    self.advance();
                } else {
                    self.advance(); // closing quote
                    break;
                }
            } else {
                self.advance();
            }
        }

        self.input[start..self.pos].to_string()
    }

    /// Scan a maximal run of identifier-ish characters (`$` included so
    /// absolute markers stay attached to their reference)
    fn scan_run(&mut self) -> String {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' || c == '$' || c == '.' {
                self.advance();
            } else {
                break;
            }
        }
        self.input[start..self.pos].to_string()
    }
}
