// SPDX-License-Identifier: MPL-2.0
use focus_lens::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
FocusLens - reader for summarized documents

USAGE:
  focus_lens [OPTIONS] [FILE.json]

OPTIONS:
  --lang <id>          Interface language (e.g. en-US, fr)
  --config-dir <dir>   Directory holding settings.toml
  --i18n-dir <dir>     Directory with extra or overriding .ftl files
  -h, --help           Print this help

ENVIRONMENT:
  FOCUS_LENS_CONFIG_DIR   Same as --config-dir
  RUST_LOG                Log filter (default: focus_lens=info)
";

struct Args {
    flags: Flags,
    config_dir: Option<String>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let i18n_dir = args.opt_value_from_str("--i18n-dir")?;
    let file_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Some(Args {
        flags: Flags {
            lang,
            file_path,
            i18n_dir,
        },
        config_dir,
    }))
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("focus_lens=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    init_logging();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_override(args.config_dir);
    app::run(args.flags)
}
