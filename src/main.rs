// SPDX-License-Identifier: MPL-2.0
use env_logger::{Builder, Target};
use folio_gallery::app::{self, paths, Flags};
use log::LevelFilter;

const HELP: &str = "\
folio-gallery: browse portfolio projects in an image carousel

USAGE:
    folio-gallery [OPTIONS] [IMAGE...]

OPTIONS:
    --config-dir DIR   Directory holding settings.toml
    --catalog FILE     Project catalog (TOML) to open
    --threshold PX     Minimum swipe distance in pixels
    -h, --help         Print this help

Images given on the command line form a single project and the catalog is
not read.
";

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("folio_gallery", LevelFilter::Debug)
        .init();
}

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let config_dir = args.opt_value_from_str("--config-dir")?;
    let catalog = args.opt_value_from_str("--catalog")?;
    let threshold = args.opt_value_from_str("--threshold")?;
    let images = args
        .finish()
        .into_iter()
        .filter_map(|arg| arg.into_string().ok())
        .collect();

    Ok(Flags {
        config_dir,
        catalog,
        threshold,
        images,
    })
}

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
