//! Emitted CSS rules.
//!
//! A decoded key becomes a [`CssRule`]: one or more selectors built around a
//! single class, a declaration block, and an optional min-width media query.
//! The class is substituted at render time so the same rule can be written
//! with its key-derived class name or with an allocated short token.
//!
//! Class names are escaped with `cssparser::serialize_identifier`, since keys
//! legally contain `:`, `[`, `,` and `.`.

use std::fmt::Write as _;

use serde::Serialize;

/// A single `property: value` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub property: &'static str,
    pub value: String,
}

impl Declaration {
    pub fn new(property: &'static str, value: impl Into<String>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }
}

/// One selector of a rule, relative to the rule's class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Selector {
    /// `.{class}{pseudo}`
    Own { pseudo: &'static str },
    /// `{ancestor} .{class}`, where `ancestor` is a complete selector such
    /// as `.group:hover`.
    Inherited { ancestor: String },
}

/// A CSS rule produced from one style key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CssRule {
    /// Class name derived from the key. Usually the key itself; breakpoint
    /// keys drop their size qualifier (`paddingTop--lg1__16`).
    pub class_name: String,
    pub selectors: Vec<Selector>,
    pub declarations: Vec<Declaration>,
    /// Minimum viewport width of the wrapping media query, if any.
    pub min_width: Option<u32>,
}

impl CssRule {
    /// Rule with a single own-class selector.
    pub fn new(class_name: impl Into<String>, pseudo: &'static str) -> Self {
        Self {
            class_name: class_name.into(),
            selectors: vec![Selector::Own { pseudo }],
            declarations: Vec::new(),
            min_width: None,
        }
    }

    pub fn declare(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.declarations.push(Declaration::new(property, value));
        self
    }

    pub fn with_selector(mut self, selector: Selector) -> Self {
        self.selectors.push(selector);
        self
    }

    pub fn within_media(mut self, min_width: Option<u32>) -> Self {
        self.min_width = min_width;
        self
    }

    /// Renders the rule using its own class name.
    pub fn render(&self) -> String {
        self.render_as(&self.class_name)
    }

    /// Renders the rule with `class` substituted for the class name.
    pub fn render_as(&self, class: &str) -> String {
        let class = escape_class(class);
        let selectors: Vec<String> = self
            .selectors
            .iter()
            .map(|selector| match selector {
                Selector::Own { pseudo } => format!(".{}{}", class, pseudo),
                Selector::Inherited { ancestor } => format!("{} .{}", ancestor, class),
            })
            .collect();

        let mut body = String::new();
        for decl in &self.declarations {
            let _ = write!(body, " {}: {};", decl.property, decl.value);
        }
        let rule = format!("{} {{{} }}", selectors.join(", "), body);

        match self.min_width {
            Some(px) => format!("@media (min-width: {}px) {{ {} }}", px, rule),
            None => rule,
        }
    }
}

/// Escapes a class name for use in a selector.
pub fn escape_class(class: &str) -> String {
    let mut out = String::with_capacity(class.len());
    // Writing into a String cannot fail.
    let _ = cssparser::serialize_identifier(class, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain_rule() {
        let rule = CssRule::new("paddingTop__16", "").declare("padding-top", "16px");
        assert_eq!(rule.render(), ".paddingTop__16 { padding-top: 16px; }");
    }

    #[test]
    fn test_render_with_media() {
        let rule = CssRule::new("paddingTop--lg1__16", "")
            .declare("padding-top", "16px")
            .within_media(Some(1024));
        assert_eq!(
            rule.render(),
            "@media (min-width: 1024px) { .paddingTop--lg1__16 { padding-top: 16px; } }"
        );
    }

    #[test]
    fn test_render_with_companion_selector() {
        let rule = CssRule::new("k", ":hover")
            .with_selector(Selector::Inherited {
                ancestor: ".group:hover".to_string(),
            })
            .declare("color", "#f00");
        assert_eq!(rule.render(), ".k:hover, .group:hover .k { color: #f00; }");
    }

    #[test]
    fn test_render_as_substitutes_class() {
        let rule = CssRule::new("textSize__16", "").declare("font-size", "1rem");
        assert_eq!(rule.render_as("a"), ".a { font-size: 1rem; }");
    }

    #[test]
    fn test_escape_class() {
        assert_eq!(escape_class("abc"), "abc");
        assert_eq!(escape_class("a:b"), "a\\:b");
        assert_eq!(escape_class("x__[1,2]"), "x__\\[1\\,2\\]");
    }
}
