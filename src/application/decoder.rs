//! Decoding of the stored `"state"` record.
//!
//! OneTab persists its session as a double-quoted, backslash-escaped string
//! literal wrapping the real JSON text. [`unquote`] reverses the escaping,
//! [`parse_session`] parses the recovered text into the domain model.

use crate::domain::{AppError, Result, Session};

/// Reverses C-style quoted-string escaping.
///
/// The input must be a complete string literal: opening and closing double
/// quotes with nothing after the closing quote. Recognized escapes are
/// `\" \\ \/ \' \n \r \t \b \f \a \v \0`, `\xHH` and `\uXXXX` (with UTF-16
/// surrogate pairing).
///
/// # Errors
/// Returns a `Decode` error on invalid UTF-8, missing or mismatched quotes,
/// a dangling backslash, an unknown escape, bad hex digits, a lone
/// surrogate, or trailing bytes after the closing quote.
pub fn unquote(raw: &[u8]) -> Result<String> {
    let text = std::str::from_utf8(raw)
        .map_err(|e| AppError::decode(format!("value is not valid UTF-8: {e}")))?;

    let mut chars = text.chars();
    if chars.next() != Some('"') {
        return Err(AppError::decode("missing opening quote"));
    }

    let mut out = String::with_capacity(text.len());
    loop {
        match chars.next() {
            None => return Err(AppError::decode("unterminated string literal")),
            Some('"') => break,
            Some('\\') => out.push(unescape(&mut chars)?),
            Some(c) => out.push(c),
        }
    }

    if chars.next().is_some() {
        return Err(AppError::decode("data after closing quote"));
    }

    Ok(out)
}

/// Decodes one escape sequence, the leading backslash already consumed.
fn unescape(chars: &mut std::str::Chars<'_>) -> Result<char> {
    let Some(marker) = chars.next() else {
        return Err(AppError::decode("dangling escape at end of input"));
    };

    let decoded = match marker {
        '"' => '"',
        '\\' => '\\',
        '/' => '/',
        '\'' => '\'',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'b' => '\u{8}',
        'f' => '\u{c}',
        'a' => '\u{7}',
        'v' => '\u{b}',
        '0' => '\0',
        'x' => {
            let byte = hex_value(chars, 2)?;
            char::from_u32(byte)
                .ok_or_else(|| AppError::decode(format!("invalid \\x escape value {byte:#x}")))?
        }
        'u' => unescape_unicode(chars)?,
        other => {
            return Err(AppError::decode(format!(
                "invalid escape sequence \\{other}"
            )))
        }
    };

    Ok(decoded)
}

/// Decodes `\uXXXX`, pairing UTF-16 surrogates when needed.
fn unescape_unicode(chars: &mut std::str::Chars<'_>) -> Result<char> {
    let unit = hex_value(chars, 4)?;

    match unit {
        0xD800..=0xDBFF => {
            // High surrogate: the low half must follow as another \u escape.
            if chars.next() != Some('\\') || chars.next() != Some('u') {
                return Err(AppError::decode("high surrogate not followed by \\u escape"));
            }
            let low = hex_value(chars, 4)?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(AppError::decode(format!(
                    "invalid low surrogate {low:#06x}"
                )));
            }
            let code = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
            char::from_u32(code)
                .ok_or_else(|| AppError::decode(format!("invalid surrogate pair value {code:#x}")))
        }
        0xDC00..=0xDFFF => Err(AppError::decode(format!("lone low surrogate {unit:#06x}"))),
        _ => char::from_u32(unit)
            .ok_or_else(|| AppError::decode(format!("invalid \\u escape value {unit:#06x}"))),
    }
}

/// Reads `digits` hex characters and returns their value.
fn hex_value(chars: &mut std::str::Chars<'_>, digits: u32) -> Result<u32> {
    let mut value = 0u32;
    for _ in 0..digits {
        let Some(c) = chars.next() else {
            return Err(AppError::decode("truncated hex escape"));
        };
        let digit = c
            .to_digit(16)
            .ok_or_else(|| AppError::decode(format!("invalid hex digit '{c}' in escape")))?;
        value = value * 16 + digit;
    }
    Ok(value)
}

/// Parses recovered JSON text into a [`Session`].
///
/// Unknown fields are ignored and missing array fields degrade to empty
/// lists, so newer extension schema versions still extract.
///
/// # Errors
/// Returns a `Parse` error if the text is not valid JSON or field types do
/// not match.
pub fn parse_session(text: &str) -> Result<Session> {
    serde_json::from_str(text).map_err(AppError::json_parse)
}
