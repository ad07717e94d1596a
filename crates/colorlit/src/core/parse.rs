//! The grammar for color literals.
//!
//! The parser is a small recursive descent over the [`Scanner`]'s tokens. It
//! recognizes hashed hexadecimal literals as well as the `rgb()`, `rgba()`,
//! `hsl()`, and `hsla()` functions. The functions accept legacy syntax, which
//! separates all components including alpha by commas, and modern syntax,
//! which separates components by white space and alpha by a slash. The parser
//! does not classify the function up front. Instead, the separator after the
//! first component commits it to one syntax.

use super::scan::{Scanner, Token};
use super::unit::{to_alpha, to_channel, to_hue, to_percent, AngleUnit, Component};
use crate::error::SyntaxError;
use crate::{Color, Hsl, Rgb};

/// The families of color functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Family {
    Rgb,
    Hsl,
}

const FUNCTIONS: [(&str, Family); 4] = [
    ("rgb", Family::Rgb),
    ("rgba", Family::Rgb),
    ("hsl", Family::Hsl),
    ("hsla", Family::Hsl),
];

impl Family {
    fn from_name(name: &str) -> Option<Self> {
        FUNCTIONS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, family)| *family)
    }
}

/// The separator style a color function has committed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Syntax {
    Legacy,
    Modern,
}

impl Syntax {
    /// Get the token dividing the color components from alpha.
    const fn alpha_divider(&self) -> Token<'static> {
        match *self {
            Self::Legacy => Token::Comma,
            Self::Modern => Token::Slash,
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse a hashed hexadecimal color from the digits following `#`.
///
/// This function transparently handles single-digit coordinates and the
/// optional fourth coordinate for alpha.
fn parse_hashed(digits: &str) -> Result<Rgb, SyntaxError> {
    let width = match digits.len() {
        3 | 4 => 1,
        6 | 8 => 2,
        _ => return Err(SyntaxError::BadHexLength),
    };

    fn parse_coordinate(digits: &str, width: usize, index: usize) -> Result<u8, SyntaxError> {
        let t = digits
            .get(width * index..width * (index + 1))
            .ok_or(SyntaxError::BadHexLength)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| SyntaxError::MalformedHex)?;

        Ok(if width == 1 { 16 * n + n } else { n })
    }

    let r = parse_coordinate(digits, width, 0)?;
    let g = parse_coordinate(digits, width, 1)?;
    let b = parse_coordinate(digits, width, 2)?;
    if digits.len() == 3 * width {
        return Ok(Rgb::new(r, g, b));
    }

    let a = parse_coordinate(digits, width, 3)?;
    Ok(Rgb::with_alpha(r, g, b, a as crate::Float / 255.0))
}

/// Parse a single component.
fn parse_component(scanner: &mut Scanner<'_>) -> Result<Component, SyntaxError> {
    match scanner.next_token()? {
        Token::Number(n) => Ok(Component::Number(n)),
        Token::Percentage(p) => Ok(Component::Percentage(p)),
        Token::Dimension(value, unit) => AngleUnit::from_name(unit)
            .map(|unit| Component::Angle(unit.to_degrees(value)))
            .ok_or(SyntaxError::UnknownUnit),
        Token::Name("none") => Ok(Component::None),
        Token::CloseParen | Token::End => Err(SyntaxError::MissingComponent),
        Token::Comma | Token::Slash => Err(SyntaxError::MixedSeparators),
        Token::Name(_) | Token::Hash(_) | Token::OpenParen => Err(SyntaxError::MalformedComponent),
    }
}

/// Consume the separator between the second and third component.
fn parse_separator(scanner: &mut Scanner<'_>, syntax: Syntax) -> Result<(), SyntaxError> {
    if syntax == Syntax::Modern {
        return Ok(());
    }

    match scanner.peek()? {
        Token::Comma => {
            scanner.next_token()?;
            Ok(())
        }
        Token::CloseParen | Token::End => Err(SyntaxError::MissingComponent),
        _ => Err(SyntaxError::MixedSeparators),
    }
}

/// Parse the arguments of a color function, starting with the opening
/// parenthesis and ending with the closing parenthesis.
fn parse_function(scanner: &mut Scanner<'_>, family: Family) -> Result<Color, SyntaxError> {
    if !scanner.accept(Token::OpenParen)? {
        return Err(SyntaxError::NoOpeningParenthesis);
    }

    let c1 = parse_component(scanner)?;
    let syntax = if scanner.accept(Token::Comma)? {
        Syntax::Legacy
    } else {
        Syntax::Modern
    };
    let c2 = parse_component(scanner)?;
    parse_separator(scanner, syntax)?;
    let c3 = parse_component(scanner)?;

    let alpha = if scanner.accept(syntax.alpha_divider())? {
        Some(parse_component(scanner)?)
    } else {
        None
    };

    match scanner.next_token()? {
        Token::CloseParen => (),
        Token::End => return Err(SyntaxError::NoClosingParenthesis),
        Token::Comma | Token::Slash if alpha.is_none() => {
            return Err(SyntaxError::MixedSeparators)
        }
        _ => return Err(SyntaxError::TooManyComponents),
    }

    let alpha = alpha.map(to_alpha).transpose()?.unwrap_or(1.0);
    let color = match family {
        Family::Rgb => Color::Rgb(Rgb::with_alpha(
            to_channel(c1)?,
            to_channel(c2)?,
            to_channel(c3)?,
            alpha,
        )),
        Family::Hsl => Color::Hsl(Hsl::with_alpha(
            to_hue(c1)?,
            to_percent(c2)?,
            to_percent(c3)?,
            alpha,
        )),
    };

    Ok(color)
}

/// Parse the string into a color.
///
/// Before parsing, this function trims leading and trailing white space and
/// converts ASCII letters to lowercase, which makes parsing case-insensitive.
/// A complete literal must be followed by nothing but white space.
pub(crate) fn parse(s: &str) -> Result<Color, SyntaxError> {
    let lowercase = s.trim().to_ascii_lowercase(); // Keep around for fn scope
    if lowercase.is_empty() {
        return Err(SyntaxError::Empty);
    }

    let mut scanner = Scanner::new(lowercase.as_str());
    let color = match scanner.next_token()? {
        Token::Hash(digits) => Color::Rgb(parse_hashed(digits)?),
        Token::Name(name) => {
            let family = Family::from_name(name).ok_or(SyntaxError::UnknownFormat)?;
            parse_function(&mut scanner, family)?
        }
        _ => return Err(SyntaxError::UnknownFormat),
    };

    if scanner.next_token()? != Token::End {
        return Err(SyntaxError::TrailingCharacters);
    }

    Ok(color)
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{parse, parse_hashed};
    use crate::error::SyntaxError;
    use crate::{Color, Hsl, Rgb};

    #[test]
    fn test_parse_hashed() -> Result<(), SyntaxError> {
        assert_eq!(parse_hashed("123")?, Rgb::new(0x11, 0x22, 0x33));
        assert_eq!(parse_hashed("112233")?, Rgb::new(0x11, 0x22, 0x33));
        assert_eq!(
            parse_hashed("1234")?,
            Rgb::with_alpha(0x11, 0x22, 0x33, 0x44 as crate::Float / 255.0)
        );
        assert_eq!(
            parse_hashed("11223344")?,
            Rgb::with_alpha(0x11, 0x22, 0x33, 0x44 as crate::Float / 255.0)
        );
        assert_eq!(parse_hashed(""), Err(SyntaxError::BadHexLength));
        assert_eq!(parse_hashed("ff"), Err(SyntaxError::BadHexLength));
        assert_eq!(parse_hashed("12345"), Err(SyntaxError::BadHexLength));
        assert_eq!(parse_hashed("1234567"), Err(SyntaxError::BadHexLength));
        assert_eq!(parse_hashed("0g0"), Err(SyntaxError::MalformedHex));
        assert_eq!(parse_hashed("00000g"), Err(SyntaxError::MalformedHex));
        Ok(())
    }

    #[test]
    fn test_validate() {
        for (literal, error) in [
            ("", SyntaxError::Empty),
            ("   ", SyntaxError::Empty),
            ("?", SyntaxError::UnexpectedCharacter),
            ("#", SyntaxError::BadHexLength),
            ("#ff", SyntaxError::BadHexLength),
            ("#ff f", SyntaxError::BadHexLength),
            ("#123 #456", SyntaxError::TrailingCharacters),
            ("rgb", SyntaxError::NoOpeningParenthesis),
            ("rgb()", SyntaxError::MissingComponent),
            ("rgb(1 2)", SyntaxError::MissingComponent),
            ("rgb(1, 2)", SyntaxError::MissingComponent),
            ("rgb(1 2 3", SyntaxError::NoClosingParenthesis),
            ("rgb(1 2 3 4)", SyntaxError::TooManyComponents),
            ("rgb(1 2 3/4/5)", SyntaxError::TooManyComponents),
            ("rgb(1,2,3,4,5)", SyntaxError::TooManyComponents),
            ("rgb(1, 2 3)", SyntaxError::MixedSeparators),
            ("rgb(1 2, 3)", SyntaxError::MixedSeparators),
            ("rgb(1 2 3, 0.5)", SyntaxError::MixedSeparators),
            ("rgb(1, 2, 3/0.5)", SyntaxError::MixedSeparators),
            ("rgb(1 / 2 3)", SyntaxError::MixedSeparators),
            ("rgb(1 2 3) x", SyntaxError::TrailingCharacters),
            ("rgb(1deg 2 3)", SyntaxError::MalformedComponent),
            ("rgb(red 2 3)", SyntaxError::MalformedComponent),
            ("hsl(0 1deg 2)", SyntaxError::MalformedComponent),
            ("hsl(1em 2 3)", SyntaxError::UnknownUnit),
            ("hwb(1 2 3)", SyntaxError::UnknownFormat),
            ("red", SyntaxError::UnknownFormat),
            ("42", SyntaxError::UnknownFormat),
            ("(1 2 3)", SyntaxError::UnknownFormat),
        ] {
            assert_eq!(parse(literal), Err(error), "literal {:?}", literal);
        }
    }

    #[test]
    fn test_parse_functions() -> Result<(), SyntaxError> {
        assert_eq!(parse("rgb(17 34 51)")?, Color::Rgb(Rgb::new(17, 34, 51)));
        assert_eq!(parse("rgb(17,34,51)")?, Color::Rgb(Rgb::new(17, 34, 51)));
        assert_eq!(
            parse("rgba(17 34 51/0.5)")?,
            Color::Rgb(Rgb::with_alpha(17, 34, 51, 0.5))
        );
        assert_eq!(
            parse("RGBA(17, 34, 51, 50%)")?,
            Color::Rgb(Rgb::with_alpha(17, 34, 51, 0.5))
        );
        assert_eq!(
            parse("rgb(-10 300 127.5)")?,
            Color::Rgb(Rgb::new(0, 255, 128))
        );
        assert_eq!(
            parse("hsl(0.5turn 10 20)")?,
            Color::Hsl(Hsl::new(180.0, 10.0, 20.0))
        );
        assert_eq!(
            parse("hsla(200grad, 10%, 20%, 2)")?,
            Color::Hsl(Hsl::new(180.0, 10.0, 20.0))
        );
        assert_eq!(
            parse("hsl(none none none/none)")?,
            Color::Hsl(Hsl::new(0.0, 0.0, 0.0))
        );
        assert_eq!(parse("#ABCDEF")?, Color::Rgb(Rgb::new(0xab, 0xcd, 0xef)));
        Ok(())
    }
}
