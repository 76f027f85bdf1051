use nom::{
    IResult, Parser,
    bytes::complete::{tag, take_till, take_while, take_while1},
    character::complete::digit1,
    combinator::{rest, verify},
};

pub fn field_line(input: &[u8]) -> IResult<&[u8], (&[u8], &[u8])> {
    let parts = (
        take_till(|b: u8| b == b':'),
        tag(":"),
        take_while(|b: u8| b == b' '),
        rest,
    );

    #[allow(clippy::type_complexity)]
    nom::combinator::map(parts, |output: (&[u8], &[u8], &[u8], &[u8])| {
        (output.0, output.3)
    })
    .parse(input)
}

pub fn token(input: &[u8]) -> IResult<&[u8], &[u8]> {
    take_while1(is_tchar).parse(input)
}

pub fn status_code(input: &[u8]) -> IResult<&[u8], &[u8]> {
    verify(digit1, |i: &[u8]| i.len() == 3).parse(input)
}

pub fn is_tchar(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
}
