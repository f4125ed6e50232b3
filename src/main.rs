// SPDX-License-Identifier: MPL-2.0
use iced_carousel::app::{self, config, logging, paths, Flags, Startup};
use iced_carousel::gallery::ImageSource;
use std::process::ExitCode;

const HELP: &str = "\
Usage: iced_carousel [URL] [OPTIONS]

Arguments:
  [URL]                 Image list endpoint (overrides the config file)

Options:
  --page <N>            Page to request
  --limit <N>           Images per page
  --lang <LOCALE>       UI language, e.g. en-US or fr
  --config-dir <DIR>    Directory holding settings.toml
  --debug               Log fetched data at debug level
  -h, --help            Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        page: args.opt_value_from_str("--page")?,
        limit: args.opt_value_from_str("--limit")?,
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        debug: args.contains("--debug"),
        url: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };
    Ok(Some(flags))
}

fn main() -> ExitCode {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    let (config, config_warning) = config::load();
    logging::init(flags.debug || config.diagnostics.debug_log);
    if let Some(key) = &config_warning {
        tracing::warn!(notice = %key, "configuration file ignored; defaults in use");
    }

    let source = match ImageSource::new(config.fetch.timeout()) {
        Ok(source) => source,
        Err(error) => {
            tracing::error!(%error, "failed to build HTTP client");
            return ExitCode::FAILURE;
        }
    };

    let startup = Startup {
        flags,
        config,
        config_warning,
        source,
    };

    match app::run(startup) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
