//! Parsing utilities.
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_till},
    combinator::opt,
    sequence::terminated,
};

pub(crate) mod fields;

/// A line terminator: CRLF, LF, or a lone CR.
fn line_terminator(input: &[u8]) -> IResult<&[u8], &[u8]> {
    alt((tag("\r\n"), tag("\n"), tag("\r"))).parse(input)
}

fn line(input: &[u8]) -> IResult<&[u8], &[u8]> {
    terminated(take_till(|b: u8| b == b'\r' || b == b'\n'), opt(line_terminator)).parse(input)
}

/// Split the data into lines without their terminators.
///
/// A terminator at the very end does not produce an extra empty line.
pub fn split_lines(mut data: &[u8]) -> Vec<&[u8]> {
    let mut lines = Vec::new();

    while !data.is_empty() {
        match line(data) {
            Ok((remain, output)) => {
                lines.push(output);
                data = remain;
            }
            Err(_) => break,
        }
    }

    lines
}

/// Split a first line into space-separated fields.
///
/// When `limit` is given, the last field holds the rest of the line
/// including any spaces. An empty field before it means two separators were
/// adjacent, and no fields are returned.
pub fn split_first_line(line: &[u8], limit: Option<usize>) -> Vec<&[u8]> {
    let is_space = |b: &u8| *b == b' ';

    match limit {
        Some(limit) => {
            let fields = line.splitn(limit, is_space).collect::<Vec<_>>();
            let leading = &fields[..fields.len().saturating_sub(1)];

            if leading.iter().any(|field| field.is_empty()) {
                Vec::new()
            } else {
                fields
            }
        }
        None => line.split(is_space).collect(),
    }
}

/// Split a header line on the first colon.
///
/// Leading spaces are removed from the value. Returns `None` when the line
/// has no colon.
pub fn split_field_line(line: &[u8]) -> Option<(&[u8], &[u8])> {
    match fields::field_line(line) {
        Ok((_remain, output)) => Some(output),
        Err(_) => None,
    }
}

/// Returns whether the value is a valid HTTP token such as a method.
pub fn is_token(value: &[u8]) -> bool {
    nom::combinator::all_consuming(fields::token)
        .parse(value)
        .is_ok()
}

/// Returns whether the value is a 3-digit status code.
pub fn is_status_code(value: &[u8]) -> bool {
    nom::combinator::all_consuming(fields::status_code)
        .parse(value)
        .is_ok()
}
