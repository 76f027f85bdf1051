use crate::{Compiled, Format, HttpMessage};

use super::{
    arg::{CompileCommand, CompileOutputFormat},
    io::{open_input, open_output, write_compiled},
};

pub fn compile(args: &CompileCommand) -> anyhow::Result<()> {
    let span = tracing::info_span!("compile", path = ?args.input);
    let _span_guard = span.enter();

    let message: HttpMessage = serde_json::from_reader(open_input(&args.input)?)?;

    tracing::info!(kind = %message.kind(), "read message description");

    let (compiled, newline) = match args.format {
        CompileOutputFormat::Raw => (message.compile(Format::Bytes, None), false),
        CompileOutputFormat::Text => (message.compile(Format::Text, None), false),
        CompileOutputFormat::Pretty => (Compiled::Text(message.to_pretty()), true),
    };

    let mut output = open_output(&args.output)?;
    write_compiled(&mut output, &compiled, newline)?;

    Ok(())
}
