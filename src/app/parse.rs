use std::io::Write;

use crate::{Compiled, Format, HttpMessage};

use super::{
    arg::{ParseCommand, ParseOutputFormat},
    io::{open_output, read_message, write_compiled},
};

pub fn parse(args: &ParseCommand) -> anyhow::Result<()> {
    let span = tracing::info_span!("parse", path = ?args.input);
    let _span_guard = span.enter();

    let raw = read_message(&args.input)?;

    let message = match args.kind.to_native() {
        Some(kind) => HttpMessage::parse_as(kind, raw)?,
        None => HttpMessage::parse(raw)?,
    };

    if args.strict {
        message.validate()?;
    }

    tracing::info!(kind = %message.kind(), "parsed message");

    let mut output = open_output(&args.output)?;

    match args.format {
        ParseOutputFormat::Pretty => {
            let pretty = Compiled::Text(message.to_pretty());
            write_compiled(&mut output, &pretty, true)?;
        }
        ParseOutputFormat::Text => {
            write_compiled(&mut output, &message.compile(Format::Text, None), false)?
        }
        ParseOutputFormat::Raw => {
            write_compiled(&mut output, &message.compile(Format::Bytes, None), false)?
        }
        ParseOutputFormat::Json => {
            serde_json::to_writer_pretty(&mut output, &message)?;
            writeln!(output)?;
            output.flush()?;
        }
    }

    Ok(())
}
