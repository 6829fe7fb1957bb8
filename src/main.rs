use clap::Parser;
use jelly2groovy::{ConvertError, ConverterBuilder, StringEscaping, UnknownControlTags};
use std::path::PathBuf;

/// Convert INPUTFILE from a Jenkins Jelly view to a Jenkins Groovy view and write it to OUTPUTFILE.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The path to the Jelly file to convert.
    #[arg(value_name = "INPUTFILE")]
    input: PathBuf,

    /// The path to the Groovy file to write to.
    #[arg(value_name = "OUTPUTFILE")]
    output: PathBuf,

    /// Fail on jelly:core tags that have no Groovy translation instead of skipping them
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Backslash-escape quotes, backslashes and `$` inside string literals
    #[arg(long, default_value_t = false)]
    escape_strings: bool,
}

fn main() -> Result<(), ConvertError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("jelly2groovy=info,jelly_view=info"))
        .init();

    let args = Args::parse();

    let unknown_control_tags = if args.strict {
        UnknownControlTags::Reject
    } else {
        UnknownControlTags::Skip
    };
    let escaping = if args.escape_strings {
        StringEscaping::Escape
    } else {
        StringEscaping::Verbatim
    };

    let converter = ConverterBuilder::new()
        .with_input_file(&args.input)?
        .with_unknown_control_tags(unknown_control_tags)
        .with_string_escaping(escaping)
        .build()?;

    converter.write_to_file(&args.output)
}
