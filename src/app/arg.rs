use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::MessageKind;

#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[clap(long, default_value = "warn")]
    pub log_level: super::logging::Level,

    #[clap(long)]
    pub log_file: Option<PathBuf>,

    #[clap(long)]
    pub log_json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a message in wire format and print it.
    Parse(ParseCommand),
    /// Compile a JSON description of a message into wire format.
    Compile(CompileCommand),
}

#[derive(Parser, Debug)]
pub struct ParseCommand {
    #[clap(long, default_value = "-")]
    pub input: PathBuf,

    #[clap(long, default_value = "-")]
    pub output: PathBuf,

    #[clap(long, default_value = "auto")]
    pub kind: KindArg,

    #[clap(long, default_value = "pretty")]
    pub format: ParseOutputFormat,

    /// Reject a method that is not an HTTP token or a status that is not 3 digits.
    #[clap(long)]
    pub strict: bool,
}

#[derive(Parser, Debug)]
pub struct CompileCommand {
    #[clap(long, default_value = "-")]
    pub input: PathBuf,

    #[clap(long, default_value = "-")]
    pub output: PathBuf,

    #[clap(long, default_value = "raw")]
    pub format: CompileOutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum KindArg {
    Auto,
    Request,
    Response,
}

impl KindArg {
    /// Returns the kind, or `None` when it should be detected.
    pub fn to_native(self) -> Option<MessageKind> {
        match self {
            Self::Auto => None,
            Self::Request => Some(MessageKind::Request),
            Self::Response => Some(MessageKind::Response),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ParseOutputFormat {
    Pretty,
    Text,
    Raw,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CompileOutputFormat {
    Raw,
    Text,
    Pretty,
}
