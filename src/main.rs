// SPDX-License-Identifier: MPL-2.0
use iced_subscriptions::app::{self, paths, Flags};
use std::path::PathBuf;

const HELP: &str = "\
Usage: iced_subscriptions [OPTIONS]

Options:
  --lang <ID>               Interface language (e.g. en-US, fr)
  --snapshot <PATH>         Subscription snapshot file to display
  --config-dir <PATH>       Directory holding settings.toml
  --diagnostics-out <PATH>  Write the diagnostics log here on exit
  -h, --help                Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("[WARN] Ignoring unexpected arguments: {remaining:?}");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        snapshot: args.opt_value_from_str::<_, PathBuf>("--snapshot")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        diagnostics_out: args.opt_value_from_str::<_, PathBuf>("--diagnostics-out")?,
    })
}
