// SPDX-License-Identifier: MPL-2.0
use pinch_lens::app::{self, Flags};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Pinch Lens: a scrollable gallery of pinch-to-zoom thumbnails

USAGE:
  pinch_lens [OPTIONS] [DIRECTORY]

ARGS:
  DIRECTORY          Folder to show (defaults to the last one opened)

OPTIONS:
  --config PATH      Settings file to use instead of the platform default
  -v, --verbose      Log debug output (RUST_LOG overrides)
  -h, --help         Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let verbose = args.contains(["-v", "--verbose"]);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config_path: Option<PathBuf> = match args.opt_value_from_str("--config") {
        Ok(path) => path,
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let flags = Flags {
        directory: args.finish().into_iter().next().map(PathBuf::from),
        config_path,
    };

    tracing::debug!(?flags, "starting");
    app::run(flags)
}
