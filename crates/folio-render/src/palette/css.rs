//! CSS palette parsing.
//!
//! Palettes can be written as CSS custom properties, which keeps them
//! editable with ordinary CSS tooling:
//!
//! ```css
//! /* Shared by both schemes */
//! :root {
//!     --border: rgba(148, 163, 184, 0.2);
//! }
//!
//! @media (prefers-color-scheme: light) {
//!     :root { --text-primary: #0f172a; }
//! }
//!
//! @media (prefers-color-scheme: dark) {
//!     :root { --text-primary: #f8fafc; }
//! }
//! ```
//!
//! Only `:root` (or `html`) rules are accepted, and only custom properties
//! naming a [`ColorRole`](super::ColorRole) are allowed inside them. Any
//! component value is accepted, so gradients and shadows work as well as
//! colors. `!important` is rejected since inline styles cannot carry it.
//!
//! Values are rebuilt from `cssparser` tokens: comments are dropped, runs of
//! whitespace collapse to one space, and nested functions like `rgba(..)`
//! keep their structure.

use std::fmt;

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, ParseErrorKind, Parser, ParserInput,
    ParserState, QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser, ToCss, Token,
};

use super::error::PaletteError;
use super::set::SectionSources;
use crate::scheme::Scheme;

/// Parses CSS into per-section `(custom property, value)` lists.
pub(crate) fn parse_css(css: &str) -> Result<SectionSources, PaletteError> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);

    let mut palette_parser = PaletteSheetParser {
        sources: SectionSources::default(),
        current: None,
        errors: Vec::new(),
    };

    let errors: Vec<String> = cssparser::StyleSheetParser::new(&mut parser, &mut palette_parser)
        .filter_map(|result| result.err())
        .map(|(err, _)| describe(&err))
        .collect();

    palette_parser.errors.extend(errors);
    if let Some(message) = palette_parser.errors.into_iter().next() {
        return Err(PaletteError::Parse {
            path: None,
            message,
        });
    }
    Ok(palette_parser.sources)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum CssIssue {
    Selector(String),
    AtRule(String),
    MediaQuery,
    Property(String),
    Important(String),
}

impl fmt::Display for CssIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssIssue::Selector(s) => write!(f, "unsupported selector '{}', expected ':root'", s),
            CssIssue::AtRule(name) => write!(f, "unsupported at-rule '@{}'", name),
            CssIssue::MediaQuery => {
                f.write_str("expected '(prefers-color-scheme: light|dark)' media query")
            }
            CssIssue::Property(name) => {
                write!(f, "'{}' is not a custom property", name)
            }
            CssIssue::Important(name) => {
                write!(f, "'{}' cannot be !important", name)
            }
        }
    }
}

fn describe(err: &ParseError<'_, CssIssue>) -> String {
    let what = match &err.kind {
        ParseErrorKind::Custom(issue) => issue.to_string(),
        ParseErrorKind::Basic(basic) => format!("{:?}", basic),
    };
    format!(
        "line {}, column {}: {}",
        err.location.line + 1,
        err.location.column,
        what
    )
}

/// Consumes the rest of `input` and returns its source text.
fn rest<'i>(input: &mut Parser<'i, '_>) -> &'i str {
    let start = input.position();
    while input.next().is_ok() {}
    input.slice_from(start).trim()
}

/// Serializes the remaining component values of `input` into `out`.
///
/// Fails with `None` when an `!important` flag is found.
fn serialize_value(input: &mut Parser<'_, '_>, out: &mut String) -> Option<()> {
    loop {
        if input.try_parse(cssparser::parse_important).is_ok() {
            return None;
        }
        let Ok(token) = input.next_including_whitespace() else {
            break;
        };
        let closing = match token {
            Token::WhiteSpace(_) => {
                if !(out.is_empty() || out.ends_with(&[' ', '(', '['][..])) {
                    out.push(' ');
                }
                continue;
            }
            Token::Function(_) | Token::ParenthesisBlock => ')',
            Token::SquareBracketBlock => ']',
            Token::CurlyBracketBlock => '}',
            other => {
                out.push_str(&other.to_css_string());
                continue;
            }
        };
        out.push_str(&token.to_css_string());
        let nested: Result<Option<()>, ParseError<'_, ()>> =
            input.parse_nested_block(|nested| Ok(serialize_value(nested, out)));
        nested.ok().flatten()?;
        out.truncate(out.trim_end().len());
        out.push(closing);
    }
    out.truncate(out.trim_end().len());
    Some(())
}

struct PaletteSheetParser {
    sources: SectionSources,
    current: Option<Scheme>,
    errors: Vec<String>,
}

impl<'i> QualifiedRuleParser<'i> for PaletteSheetParser {
    type Prelude = ();
    type QualifiedRule = ();
    type Error = CssIssue;

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        let selector = rest(input);
        match selector {
            ":root" | "html" => Ok(()),
            other => Err(input.new_custom_error::<CssIssue, CssIssue>(CssIssue::Selector(
                other.to_string(),
            ))),
        }
    }

    fn parse_block<'t>(
        &mut self,
        _prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::QualifiedRule, ParseError<'i, Self::Error>> {
        let mut decl_parser = CustomPropertyParser;
        let mut declarations = Vec::new();
        let mut errors = Vec::new();
        for result in RuleBodyParser::new(input, &mut decl_parser) {
            match result {
                Ok(declaration) => declarations.push(declaration),
                Err((err, _)) => errors.push(describe(&err)),
            }
        }
        self.errors.extend(errors);
        self.sources.section_mut(self.current).extend(declarations);
        Ok(())
    }
}

impl<'i> AtRuleParser<'i> for PaletteSheetParser {
    type Prelude = Scheme;
    type AtRule = ();
    type Error = CssIssue;

    fn parse_prelude<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        if !name.eq_ignore_ascii_case("media") {
            let issue = CssIssue::AtRule(name.to_string());
            return Err(input.new_custom_error::<CssIssue, CssIssue>(issue));
        }
        if self.current.is_some() {
            // Nested media blocks would make the target scheme ambiguous.
            return Err(input.new_custom_error::<CssIssue, CssIssue>(CssIssue::MediaQuery));
        }

        input.expect_parenthesis_block()?;
        let scheme = input.parse_nested_block(|input| -> Result<Scheme, ParseError<'i, CssIssue>> {
            input.expect_ident_matching("prefers-color-scheme")?;
            input.expect_colon()?;
            let value = input.expect_ident()?.clone();
            value
                .parse::<Scheme>()
                .map_err(|_| input.new_custom_error::<CssIssue, CssIssue>(CssIssue::MediaQuery))
        })?;
        input.expect_exhausted()?;
        Ok(scheme)
    }

    fn parse_block<'t>(
        &mut self,
        scheme: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::AtRule, ParseError<'i, Self::Error>> {
        let previous = self.current.replace(scheme);
        let errors: Vec<String> = cssparser::StyleSheetParser::new(input, self)
            .filter_map(|result| result.err())
            .map(|(err, _)| describe(&err))
            .collect();
        self.current = previous;
        self.errors.extend(errors);
        Ok(())
    }
}

struct CustomPropertyParser;

impl<'i> DeclarationParser<'i> for CustomPropertyParser {
    type Declaration = (String, String);
    type Error = CssIssue;

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Declaration, ParseError<'i, Self::Error>> {
        if !name.starts_with("--") {
            let issue = CssIssue::Property(name.to_string());
            return Err(input.new_custom_error::<CssIssue, CssIssue>(issue));
        }
        let mut value = String::new();
        if serialize_value(input, &mut value).is_none() {
            let issue = CssIssue::Important(name.to_string());
            return Err(input.new_custom_error::<CssIssue, CssIssue>(issue));
        }
        Ok((name.to_string(), value))
    }
}

impl<'i> AtRuleParser<'i> for CustomPropertyParser {
    type Prelude = ();
    type AtRule = (String, String);
    type Error = CssIssue;
}

impl<'i> QualifiedRuleParser<'i> for CustomPropertyParser {
    type Prelude = ();
    type QualifiedRule = (String, String);
    type Error = CssIssue;
}

impl<'i> RuleBodyItemParser<'i, (String, String), CssIssue> for CustomPropertyParser {
    fn parse_declarations(&self) -> bool {
        true
    }

    fn parse_qualified(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_declarations_go_to_base() {
        let sources = parse_css(":root { --border: #333; --shadow: 0 1px 2px black; }").unwrap();
        assert_eq!(
            sources.base,
            vec![
                ("--border".to_string(), "#333".to_string()),
                ("--shadow".to_string(), "0 1px 2px black".to_string()),
            ]
        );
        assert!(sources.light.is_empty());
        assert!(sources.dark.is_empty());
    }

    #[test]
    fn test_media_blocks_select_scheme() {
        let css = r#"
            @media (prefers-color-scheme: light) { :root { --text-primary: #0f172a; } }
            @media (prefers-color-scheme: dark) { html { --text-primary: #f8fafc; } }
        "#;
        let sources = parse_css(css).unwrap();
        assert_eq!(sources.light[0].1, "#0f172a");
        assert_eq!(sources.dark[0].1, "#f8fafc");
        assert!(sources.base.is_empty());
    }

    #[test]
    fn test_function_values_are_kept_verbatim() {
        let css =
            ":root { --page-background: radial-gradient(circle at top, #1e1b4b, #050505 45%); }";
        let sources = parse_css(css).unwrap();
        assert_eq!(
            sources.base[0].1,
            "radial-gradient(circle at top, #1e1b4b, #050505 45%)"
        );
    }

    #[test]
    fn test_comments_are_ignored() {
        let css = "/* palette */ :root { /* accent */ --accent-link: #7c3aed; }";
        let sources = parse_css(css).unwrap();
        assert_eq!(sources.base.len(), 1);
    }

    #[test]
    fn test_comments_inside_values_are_dropped() {
        let css = ":root { --border: red /* note */; --shadow: 0 1px /* y */ 2px black; }";
        let sources = parse_css(css).unwrap();
        assert_eq!(sources.base[0].1, "red");
        assert_eq!(sources.base[1].1, "0 1px 2px black");
    }

    #[test]
    fn test_whitespace_is_collapsed() {
        let css = ":root { --card-bg:\n    rgba( 2,  6, 23, 0.7 ) ; }";
        let sources = parse_css(css).unwrap();
        assert_eq!(sources.base[0].1, "rgba(2, 6, 23, 0.7)");
    }

    #[test]
    fn test_important_is_rejected() {
        let err = parse_css(":root { --shadow: none !important; }").unwrap_err();
        assert!(err.to_string().contains("cannot be !important"));
    }

    #[test]
    fn test_class_selector_is_rejected() {
        let err = parse_css(".card { --border: red; }").unwrap_err();
        assert!(err.to_string().contains("unsupported selector"));
    }

    #[test]
    fn test_plain_property_is_rejected() {
        let err = parse_css(":root { color: red; }").unwrap_err();
        assert!(err.to_string().contains("not a custom property"));
    }

    #[test]
    fn test_other_media_query_is_rejected() {
        let err = parse_css("@media (max-width: 600px) { :root { --border: red; } }").unwrap_err();
        assert!(matches!(err, PaletteError::Parse { .. }));
    }

    #[test]
    fn test_unknown_at_rule_is_rejected() {
        let err = parse_css("@import url(x.css);").unwrap_err();
        assert!(matches!(err, PaletteError::Parse { .. }));
    }
}
