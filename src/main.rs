// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, Flags};
use iced_folio::config::paths;
use iced_folio::logging;

const HELP: &str = "\
IcedFolio - manifest-driven photo gallery

USAGE:
  iced_folio [OPTIONS]

OPTIONS:
  -h, --help              Print this help and exit
      --lang <ID>         Interface language (e.g. en-US, fr)
      --manifest <SRC>    Manifest URL (http/https) or file path
      --config-dir <DIR>  Directory holding settings.toml

ENVIRONMENT:
  ICED_FOLIO_CONFIG_DIR   Config directory when --config-dir is absent
  RUST_LOG                Log filter (e.g. iced_folio=debug)
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let (flags, config_dir) = match parse_args(&mut args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("warning: ignoring unexpected arguments: {remaining:?}");
    }

    logging::init();
    paths::init_cli_override(config_dir);

    app::run(flags)
}

fn parse_args(
    args: &mut pico_args::Arguments,
) -> Result<(Flags, Option<String>), pico_args::Error> {
    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        manifest: args.opt_value_from_str("--manifest")?,
    };
    let config_dir = args.opt_value_from_str("--config-dir")?;
    Ok((flags, config_dir))
}
