// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! STEP record tokenizer using nom combinators
//!
//! Parses data-section entity records and header records into tokens.

use ifc_inspect_model::{AttributeValue, DecodedEntity, EntityId, IfcType};
use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::{char, multispace0},
    combinator::{opt, recognize},
    error::{Error, ErrorKind},
    multi::separated_list0,
    sequence::{delimited, pair},
    IResult, Parser,
};

/// Raw token from a STEP record (before conversion to AttributeValue)
#[derive(Clone, Debug, PartialEq)]
pub enum Token<'a> {
    /// Entity reference (#123)
    EntityRef(u32),
    /// String value ('text'), still carrying `''` escapes
    String(&'a str),
    /// Integer value
    Integer(i64),
    /// Float value
    Float(f64),
    /// Enumeration (.VALUE.)
    Enum(&'a str),
    /// List of tokens
    List(Vec<Token<'a>>),
    /// Typed value like IFCLABEL('text')
    TypedValue(&'a str, Vec<Token<'a>>),
    /// Null value ($)
    Null,
    /// Derived value (*)
    Derived,
}

impl<'a> Token<'a> {
    /// Convert token to owned AttributeValue
    pub fn to_attribute_value(&self) -> AttributeValue {
        match self {
            Token::EntityRef(id) => AttributeValue::EntityRef(EntityId(*id)),
            Token::String(s) => AttributeValue::String(unescape(s)),
            Token::Integer(i) => AttributeValue::Integer(*i),
            Token::Float(f) => AttributeValue::Float(*f),
            Token::Enum(s) => AttributeValue::Enum((*s).to_string()),
            Token::List(items) => {
                AttributeValue::List(items.iter().map(|t| t.to_attribute_value()).collect())
            }
            Token::TypedValue(name, args) => AttributeValue::TypedValue(
                (*name).to_string(),
                args.iter().map(|t| t.to_attribute_value()).collect(),
            ),
            Token::Null => AttributeValue::Null,
            Token::Derived => AttributeValue::Derived,
        }
    }

    /// First string found in this token, descending into lists
    pub fn first_string(&self) -> Option<String> {
        match self {
            Token::String(s) => Some(unescape(s)),
            Token::List(items) => items.iter().find_map(|t| t.first_string()),
            _ => None,
        }
    }
}

/// Resolve STEP `''` quote escapes
pub fn unescape(raw: &str) -> String {
    if raw.contains("''") {
        raw.replace("''", "'")
    } else {
        raw.to_string()
    }
}

// ============================================================================
// Parsing Primitives
// ============================================================================

/// Parse whitespace and `/* ... */` comments
pub(crate) fn ws(mut input: &str) -> IResult<&str, ()> {
    loop {
        let (rest, _) = multispace0(input)?;
        match rest.strip_prefix("/*") {
            Some(comment) => {
                let end = comment.find("*/").map_or(comment.len(), |p| p + 2);
                input = &comment[end..];
            }
            None => return Ok((rest, ())),
        }
    }
}

fn fail<T>(input: &str, kind: ErrorKind) -> IResult<&str, T> {
    Err(nom::Err::Error(Error::new(input, kind)))
}

/// Parse an entity reference (#123)
fn entity_ref(input: &str) -> IResult<&str, Token> {
    let (rest, _) = char('#')(input)?;
    let (rest, digits) = take_while1(|c: char| c.is_ascii_digit())(rest)?;
    match digits.parse::<u32>() {
        Ok(id) => Ok((rest, Token::EntityRef(id))),
        Err(_) => fail(input, ErrorKind::Digit),
    }
}

/// Parse a STEP string ('text' with '' for escaped quotes)
fn step_string(input: &str) -> IResult<&str, Token> {
    let (rest, _) = char('\'')(input)?;

    let bytes = rest.as_bytes();
    let mut end = 0;
    while end < bytes.len() {
        if bytes[end] == b'\'' {
            if bytes.get(end + 1) == Some(&b'\'') {
                end += 2;
                continue;
            }
            return Ok((&rest[end + 1..], Token::String(&rest[..end])));
        }
        end += 1;
    }

    // Unterminated string
    fail(input, ErrorKind::Char)
}

/// Parse a number (integer or float)
fn number(input: &str) -> IResult<&str, Token> {
    let (rest, num_str) = recognize((
        opt(alt((char('-'), char('+')))),
        take_while1(|c: char| c.is_ascii_digit()),
        opt(pair(char('.'), take_while(|c: char| c.is_ascii_digit()))),
        opt((
            alt((char('e'), char('E'))),
            opt(alt((char('+'), char('-')))),
            take_while1(|c: char| c.is_ascii_digit()),
        )),
    ))
    .parse(input)?;

    if num_str.contains(['.', 'e', 'E']) {
        // lexical-core rejects a bare trailing dot ("1."), which STEP allows
        let parsed = lexical_core::parse::<f64>(num_str.as_bytes())
            .ok()
            .or_else(|| num_str.parse::<f64>().ok());
        match parsed {
            Some(f) => Ok((rest, Token::Float(f))),
            None => fail(input, ErrorKind::Float),
        }
    } else {
        match lexical_core::parse::<i64>(num_str.as_bytes()) {
            Ok(i) => Ok((rest, Token::Integer(i))),
            Err(_) => fail(input, ErrorKind::Digit),
        }
    }
}

/// Parse an enumeration (.VALUE.)
fn enumeration(input: &str) -> IResult<&str, Token> {
    let (input, _) = char('.')(input)?;
    let (input, name) = take_while1(|c: char| c.is_alphanumeric() || c == '_')(input)?;
    let (input, _) = char('.')(input)?;
    Ok((input, Token::Enum(name)))
}

/// Parse null ($)
fn null_value(input: &str) -> IResult<&str, Token> {
    let (input, _) = char('$')(input)?;
    Ok((input, Token::Null))
}

/// Parse derived (*)
fn derived_value(input: &str) -> IResult<&str, Token> {
    let (input, _) = char('*')(input)?;
    Ok((input, Token::Derived))
}

/// Parse a parenthesized, comma separated token list
fn token_list(input: &str) -> IResult<&str, Vec<Token>> {
    delimited(
        pair(char('('), ws),
        separated_list0((ws, char(','), ws), token),
        pair(ws, char(')')),
    )
    .parse(input)
}

/// Parse a list of tokens
fn list(input: &str) -> IResult<&str, Token> {
    let (input, items) = token_list(input)?;
    Ok((input, Token::List(items)))
}

/// Parse a keyword (entity or type name)
fn keyword(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_')(input)
}

/// Parse a typed value like IFCLABEL('text')
fn typed_value(input: &str) -> IResult<&str, Token> {
    let (input, type_name) = keyword(input)?;
    let (input, _) = ws(input)?;
    let (input, args) = token_list(input)?;
    Ok((input, Token::TypedValue(type_name, args)))
}

/// Parse any token
fn token(input: &str) -> IResult<&str, Token> {
    alt((
        entity_ref,
        step_string,
        null_value,
        derived_value,
        enumeration,
        number,
        list,
        typed_value,
    ))
    .parse(input)
}

// ============================================================================
// Record Parsing
// ============================================================================

/// Parse a header record like `FILE_SCHEMA(('IFC4'));`
///
/// Returns the record name, its arguments and the remaining input.
pub fn parse_header_record(input: &str) -> Option<(&str, Vec<Token<'_>>, &str)> {
    let (rest, (_, name, _, args, _, _)) = (ws, keyword, ws, token_list, ws, char(';'))
        .parse(input)
        .ok()?;
    Some((name, args, rest))
}

/// Parse a complete entity definition
///
/// Format: `#123=IFCWALL(attr1,attr2,...);`
pub fn parse_entity(input: &str) -> Result<DecodedEntity, String> {
    let (input, _) = ws(input).map_err(|_| "Unterminated comment")?;

    let (input, token) = entity_ref(input).map_err(|_| "Expected # at start of entity")?;
    let Token::EntityRef(id) = token else {
        return Err("Expected entity ID".to_string());
    };

    let (input, _) = (ws, char('='), ws)
        .parse(input)
        .map_err(|_: nom::Err<Error<&str>>| "Expected = after entity ID")?;

    if input.starts_with('(') {
        return Err("Complex entity instances are not supported".to_string());
    }

    let (input, type_name) = keyword(input).map_err(|_| "Expected type name")?;
    let (input, _) = ws(input).map_err(|_| "Unterminated comment")?;

    let (input, tokens) =
        token_list(input).map_err(|e| format!("Failed to parse attributes: {:?}", e))?;

    let (_, _) = (ws, char(';'))
        .parse(input)
        .map_err(|_: nom::Err<Error<&str>>| "Expected ; after attributes")?;

    Ok(DecodedEntity {
        id: EntityId(id),
        ifc_type: IfcType::parse(type_name),
        attributes: tokens.iter().map(|t| t.to_attribute_value()).collect(),
    })
}

/// Parse the entity stored at the given byte range
pub fn parse_entity_at(content: &str, start: usize, end: usize) -> Result<DecodedEntity, String> {
    let slice = content
        .get(start..end)
        .ok_or_else(|| format!("Byte range {start}..{end} is out of bounds"))?;
    parse_entity(slice)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entity_ref() {
        let (remaining, token) = entity_ref("#123").unwrap();
        assert_eq!(remaining, "");
        assert_eq!(token, Token::EntityRef(123));
    }

    #[test]
    fn test_parse_string() {
        let (remaining, token) = step_string("'hello world'").unwrap();
        assert_eq!(remaining, "");
        assert_eq!(token, Token::String("hello world"));
    }

    #[test]
    fn test_string_escapes_are_resolved() {
        let (_, token) = step_string("'it''s a test'").unwrap();
        assert_eq!(token, Token::String("it''s a test"));
        assert_eq!(
            token.to_attribute_value(),
            AttributeValue::String("it's a test".to_string())
        );
    }

    #[test]
    fn test_unterminated_string_is_an_error() {
        assert!(step_string("'never closed").is_err());
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!(number("42").unwrap().1, Token::Integer(42));
        assert_eq!(number("-7").unwrap().1, Token::Integer(-7));
        assert_eq!(number("0.").unwrap().1, Token::Float(0.0));

        let Token::Float(f) = number("1.5E-3").unwrap().1 else {
            panic!("Expected float");
        };
        assert!((f - 0.0015).abs() < 1e-10);
    }

    #[test]
    fn test_parse_enum() {
        let (remaining, token) = enumeration(".TRUE.").unwrap();
        assert_eq!(remaining, "");
        assert_eq!(token, Token::Enum("TRUE"));
    }

    #[test]
    fn test_parse_nested_list() {
        let (remaining, token) = list("((0.,0.,0.), (1.,0.,0.))").unwrap();
        assert_eq!(remaining, "");
        let Token::List(items) = token else {
            panic!("Expected list");
        };
        assert_eq!(items.len(), 2);
        assert!(matches!(&items[1], Token::List(inner) if inner.len() == 3));
    }

    #[test]
    fn test_whitespace_skips_comments() {
        let (rest, _) = ws("  /* note */ \n #1").unwrap();
        assert_eq!(rest, "#1");
    }

    #[test]
    fn test_parse_entity() {
        let entity = parse_entity("#1=IFCWALL('abc',$,#2);").unwrap();
        assert_eq!(entity.id, EntityId(1));
        assert_eq!(entity.ifc_type, IfcType::IfcWall);
        assert_eq!(entity.attributes.len(), 3);
        assert_eq!(entity.get_ref(2), Some(EntityId(2)));
    }

    #[test]
    fn test_parse_entity_with_typed_value_and_spacing() {
        let entity = parse_entity(
            "#7 = IFCPROPERTYSINGLEVALUE('IsExternal', $, IFCBOOLEAN(.T.), $);",
        )
        .unwrap();
        assert_eq!(entity.ifc_type, IfcType::IfcPropertySingleValue);
        assert_eq!(
            entity.get(2),
            Some(&AttributeValue::TypedValue(
                "IFCBOOLEAN".to_string(),
                vec![AttributeValue::Enum("T".to_string())]
            ))
        );
    }

    #[test]
    fn test_parse_entity_rejects_broken_records() {
        assert!(parse_entity("#2=IFCWALL('abc',$,#;").is_err());
        assert!(parse_entity("#3=(IFCA()IFCB());").is_err());
        assert!(parse_entity("IFCWALL();").is_err());
    }

    #[test]
    fn test_parse_header_record() {
        let (name, args, rest) = parse_header_record("FILE_SCHEMA(('IFC4'));\nENDSEC;").unwrap();
        assert_eq!(name, "FILE_SCHEMA");
        assert_eq!(args[0].first_string(), Some("IFC4".to_string()));
        assert_eq!(rest.trim(), "ENDSEC;");
    }
}
