// SPDX-License-Identifier: MPL-2.0
use chekmate_stories::app::{self, Flags};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

const HELP: &str = "\
chekmate-stories

USAGE:
  chekmate-stories [OPTIONS] CATALOG.toml

OPTIONS:
  --config-dir DIR    Directory holding settings.toml
  --focus AUTHOR_ID   Open the viewer on this author at startup
  --lang LOCALE       UI language (e.g. en-US, fr); defaults to the OS locale
  -h, --help          Print this help

Set RUST_LOG (e.g. RUST_LOG=chekmate_stories=debug) to control logging.
";

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str::<_, PathBuf>("--config-dir")?,
        focus: args.opt_value_from_str("--focus")?,
        catalog_path: args.opt_free_from_str::<PathBuf>()?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(flags)
}

fn main() -> iced::Result {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
