use crate::colors::{name_to_color, RgbColor};
use crate::selector::CssSelector;
use std::fmt::Display;
use std::sync::Arc;

/// A complete style sheet: the selector→declaration associations extracted
/// from one source fragment.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StyleSheet {
    rules: Vec<CssRule>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate one selector with a declaration set. A rule with several
    /// selectors shares a single set between them.
    pub fn add_selector_rule(&mut self, selector: CssSelector, declarations: Arc<DeclarationSet>) {
        self.rules.push(CssRule {
            selector,
            declarations,
        });
    }

    pub fn rules(&self) -> &[CssRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// One selector and the declarations that apply to it.
#[derive(Debug, Clone, PartialEq)]
pub struct CssRule {
    pub selector: CssSelector,
    pub declarations: Arc<DeclarationSet>,
}

/// The declarations of one rule body.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DeclarationSet {
    declarations: Vec<CssDeclaration>,
}

impl DeclarationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, declaration: CssDeclaration) {
        self.declarations.push(declaration);
    }

    pub fn declarations(&self) -> &[CssDeclaration] {
        &self.declarations
    }

    /// Find a declaration by property name (stored lowercased).
    pub fn get(&self, property: &str) -> Option<&CssDeclaration> {
        self.declarations.iter().find(|d| d.property == property)
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

/// A CSS declaration: property, value and the `!important` flag.
#[derive(Debug, Clone, PartialEq)]
pub struct CssDeclaration {
    /// Property name, lowercased
    pub property: String,
    /// Parsed value; a multi-component value becomes a `Sequence`
    pub value: CssValue,
    pub important: bool,
}

/// A parsed CSS value. Values are kept close to their source form; colors are
/// the exception and are resolved eagerly because the deceptive-styling
/// checks compare them.
#[derive(Debug, Clone, PartialEq)]
pub enum CssValue {
    Ident(String),
    String(String),
    Number(f32),
    Percentage(f32),
    Dimension { value: f32, unit: String },
    Color(RgbColor),
    Url(String),
    Function(String, Vec<CssValue>),
    Sequence(Vec<CssValue>),
}

impl Display for CssValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CssValue::Ident(v) => write!(f, "{}", v),
            CssValue::String(v) => write!(f, "{}", v),
            CssValue::Number(v) => write!(f, "{}", v),
            CssValue::Percentage(v) => write!(f, "{}%", v),
            CssValue::Dimension { value, unit } => write!(f, "{}{}", value, unit),
            CssValue::Color(col) => {
                write!(
                    f,
                    "#{:02x}{:02x}{:02x}{:02x}",
                    col.r as u8, col.g as u8, col.b as u8, col.a as u8
                )
            }
            CssValue::Url(url) => write!(f, "url({})", url),
            CssValue::Function(name, args) => {
                write!(f, "{}(", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
            CssValue::Sequence(values) => {
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", value)?;
                }
                Ok(())
            }
        }
    }
}

impl CssValue {
    /// Resolve the value to a color if it denotes one: an already parsed
    /// color, a recognized color name, or the first color of a sequence
    /// (shorthands like `background: white url(x)`).
    pub fn to_color(&self) -> Option<RgbColor> {
        match self {
            CssValue::Color(col) => Some(*col),
            CssValue::Ident(name) | CssValue::String(name) => name_to_color(name),
            CssValue::Sequence(values) => values.iter().find_map(|v| v.to_color()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_lookup() {
        let mut set = DeclarationSet::new();
        set.push(CssDeclaration {
            property: "color".to_string(),
            value: CssValue::Ident("red".to_string()),
            important: false,
        });

        assert!(set.get("color").is_some());
        assert!(set.get("display").is_none());
    }

    #[test]
    fn value_display() {
        assert_eq!(CssValue::Number(42.0).to_string(), "42");
        assert_eq!(CssValue::Percentage(50.0).to_string(), "50%");
        assert_eq!(
            CssValue::Dimension {
                value: 1.0,
                unit: "em".to_string()
            }
            .to_string(),
            "1em"
        );
        assert_eq!(
            CssValue::Color(RgbColor::new(255.0, 0.0, 0.0, 255.0)).to_string(),
            "#ff0000ff"
        );
        assert_eq!(
            CssValue::Function(
                "rgb".to_string(),
                vec![CssValue::Number(255.0), CssValue::Number(0.0)]
            )
            .to_string(),
            "rgb(255, 0)"
        );
    }

    #[test]
    fn value_to_color() {
        assert_eq!(
            CssValue::Ident("red".to_string()).to_color(),
            Some(RgbColor::new(255.0, 0.0, 0.0, 255.0))
        );
        assert_eq!(CssValue::Ident("inline".to_string()).to_color(), None);
        assert_eq!(
            CssValue::Sequence(vec![
                CssValue::Ident("solid".to_string()),
                CssValue::Ident("white".to_string()),
            ])
            .to_color(),
            Some(RgbColor::new(255.0, 255.0, 255.0, 255.0))
        );
    }

    #[test]
    fn shared_declarations() {
        let set = Arc::new(DeclarationSet::new());
        let mut sheet = StyleSheet::new();
        sheet.add_selector_rule(CssSelector::Tag("h1".into()), Arc::clone(&set));
        sheet.add_selector_rule(CssSelector::Tag("h2".into()), Arc::clone(&set));

        assert_eq!(sheet.rules().len(), 2);
        assert!(Arc::ptr_eq(
            &sheet.rules()[0].declarations,
            &sheet.rules()[1].declarations
        ));
    }
}
