use crate::block::{BlockTag, ConsumedBlock, FunctionBlock};
use crate::colors::RgbColor;
use crate::stylesheet::{CssDeclaration, CssValue, DeclarationSet};
use crate::tokenizer::TokenType;

enum State {
    /// Waiting for a property name
    Name,
    /// Property seen, waiting for the `:`
    Colon,
    /// Collecting value components until `;` or end of block
    Value,
}

/// Parse the children of a declaration body into a declaration set. `next`
/// pulls successive children of the simple block; `None` ends the block.
///
/// The grammar is `property : value… [!important] [;]`. Malformed
/// declarations are skipped rather than fatal; `Some` is returned only when
/// at least one declaration parsed.
pub fn process_declaration_blocks<'a, F>(mut next: F) -> Option<DeclarationSet>
where
    F: FnMut() -> Option<&'a ConsumedBlock>,
{
    let mut set = DeclarationSet::new();

    let mut state = State::Name;
    let mut property = String::new();
    let mut values: Vec<CssValue> = Vec::new();
    let mut important = false;
    // the previous component was a '!' delimiter
    let mut bang = false;

    fn finish(
        property: &mut String,
        values: &mut Vec<CssValue>,
        important: &mut bool,
        set: &mut DeclarationSet,
    ) {
        if !property.is_empty() && !values.is_empty() {
            let value = if values.len() == 1 {
                values.remove(0)
            } else {
                CssValue::Sequence(std::mem::take(values))
            };
            set.push(CssDeclaration {
                property: std::mem::take(property),
                value,
                important: *important,
            });
        }
        property.clear();
        values.clear();
        *important = false;
    }

    while let Some(block) = next() {
        let token_type = block.token().map(|t| &t.token_type);

        match state {
            State::Name => match token_type {
                Some(TokenType::Ident(name)) => {
                    property = name.to_ascii_lowercase();
                    state = State::Colon;
                }
                _ => {
                    // garbage before a property name, skip it
                }
            },
            State::Colon => match token_type {
                Some(TokenType::Colon) => {
                    state = State::Value;
                }
                Some(TokenType::Semicolon) => {
                    // property without a value, drop it
                    property.clear();
                    state = State::Name;
                }
                Some(TokenType::Ident(name)) => {
                    // missing colon; the previous property is lost
                    property = name.to_ascii_lowercase();
                }
                _ => {
                    property.clear();
                    state = State::Name;
                }
            },
            State::Value => match token_type {
                Some(TokenType::Semicolon) => {
                    finish(&mut property, &mut values, &mut important, &mut set);
                    bang = false;
                    state = State::Name;
                }
                Some(TokenType::Delim('!')) => {
                    bang = true;
                }
                Some(TokenType::Ident(name))
                    if bang && name.eq_ignore_ascii_case("important") =>
                {
                    important = true;
                    bang = false;
                }
                _ => {
                    bang = false;
                    if let Some(value) = block_to_value(block) {
                        values.push(value);
                    }
                }
            },
        }
    }

    finish(&mut property, &mut values, &mut important, &mut set);

    if set.is_empty() {
        return None;
    }

    log::debug!("processed {} declarations", set.declarations().len());

    Some(set)
}

/// Map a consumed block inside a value position onto a CSS value. Blocks that
/// carry no usable value (separators, stray simple blocks) map to `None`.
fn block_to_value(block: &ConsumedBlock) -> Option<CssValue> {
    match block.tag() {
        BlockTag::Component | BlockTag::FunctionArg => token_to_value(&block.token()?.token_type),
        BlockTag::Function => function_to_value(block.function_block()?),
        _ => None,
    }
}

fn token_to_value(token_type: &TokenType) -> Option<CssValue> {
    match token_type {
        TokenType::Ident(value) => Some(CssValue::Ident(value.clone())),
        TokenType::QuotedString(value) => Some(CssValue::String(value.clone())),
        TokenType::Number(value) => Some(CssValue::Number(*value)),
        TokenType::Percentage(value) => Some(CssValue::Percentage(*value)),
        TokenType::Dimension { value, unit } => Some(CssValue::Dimension {
            value: *value,
            unit: unit.clone(),
        }),
        TokenType::Url(url) => Some(CssValue::Url(url.clone())),
        TokenType::Hash(value) => Some(hash_to_value(value)),
        _ => None,
    }
}

fn hash_to_value(value: &str) -> CssValue {
    let is_hex_color = matches!(value.len(), 3 | 4 | 6 | 8)
        && value.chars().all(|c| c.is_ascii_hexdigit());

    if is_hex_color {
        CssValue::Color(RgbColor::from(format!("#{}", value).as_str()))
    } else {
        CssValue::Ident(format!("#{}", value))
    }
}

fn function_to_value(function: &FunctionBlock) -> Option<CssValue> {
    let TokenType::Function(name) = &function.function.token_type else {
        return None;
    };
    let name = name.to_ascii_lowercase();

    let args: Vec<CssValue> = function.args.iter().filter_map(block_to_value).collect();

    match name.as_str() {
        "rgb" | "rgba" => color_from_rgb_args(&args)
            .map(CssValue::Color)
            .or(Some(CssValue::Function(name, args))),
        "hsl" | "hsla" => color_from_hsl_args(&args)
            .map(CssValue::Color)
            .or(Some(CssValue::Function(name, args))),
        _ => Some(CssValue::Function(name, args)),
    }
}

/// `rgb()` components may be numbers (0..=255) or percentages; both are
/// clipped into range. The optional alpha is a 0..=1 number or a percentage.
fn color_from_rgb_args(args: &[CssValue]) -> Option<RgbColor> {
    if args.len() < 3 {
        return None;
    }

    let channel = |value: &CssValue| -> Option<f32> {
        match value {
            CssValue::Number(n) => Some(*n),
            CssValue::Percentage(p) => Some(p / 100.0 * 255.0),
            _ => None,
        }
    };

    let r = channel(&args[0])?;
    let g = channel(&args[1])?;
    let b = channel(&args[2])?;
    let a = match args.get(3) {
        Some(CssValue::Number(n)) => n * 255.0,
        Some(CssValue::Percentage(p)) => p / 100.0 * 255.0,
        _ => 255.0,
    };

    Some(RgbColor::from_rgb(r, g, b, a))
}

fn color_from_hsl_args(args: &[CssValue]) -> Option<RgbColor> {
    if args.len() < 3 {
        return None;
    }

    let hue = match &args[0] {
        CssValue::Number(n) => *n,
        CssValue::Dimension { value, unit } if unit.eq_ignore_ascii_case("deg") => *value,
        _ => return None,
    };
    let CssValue::Percentage(saturation) = args[1] else {
        return None;
    };
    let CssValue::Percentage(lightness) = args[2] else {
        return None;
    };
    let alpha = match args.get(3) {
        Some(CssValue::Number(n)) => n * 255.0,
        Some(CssValue::Percentage(p)) => p / 100.0 * 255.0,
        _ => 255.0,
    };

    Some(RgbColor::from_hsl(hue, saturation, lightness, alpha))
}
