use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, Command};
use scanline::{config, logger, render, Report, Size};
use scanline::config::Config;

fn main() -> anyhow::Result<()> {
    let matches = Command::new("Scanline")
        .about("Renders a gradient image as plain PPM")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("width")
                .short('W')
                .long("width")
                .action(ArgAction::Set)
                .value_parser(value_parser!(u32))
                .help("Image width in pixels (at least 2)")
        )
        .arg(
            Arg::new("height")
                .short('H')
                .long("height")
                .action(ArgAction::Set)
                .value_parser(value_parser!(u32))
                .help("Image height in pixels (at least 2)")
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .action(ArgAction::Set)
                .help("Config file to read")
        )
        .arg(
            Arg::new("save-config")
                .long("save-config")
                .action(ArgAction::Set)
                .help("Write the effective config to a file")
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .action(ArgAction::Set)
                .help("Output image file, e.g. `*.png` (default: plain PPM to stdout)")
        )
        .arg(
            Arg::new("parallel")
                .short('j')
                .long("parallel")
                .action(ArgAction::SetTrue)
                .help("Render rows in parallel when writing a file")
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .conflicts_with("report-every")
                .help("Do not report progress")
        )
        .arg(
            Arg::new("report-every")
                .long("report-every")
                .action(ArgAction::Set)
                .value_parser(value_parser!(u32).range(1..))
                .help("Report progress every N rows")
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Increase log verbosity")
        )
        .get_matches();

    logger::init(logger::level(matches.get_count("verbose")))?;

    let mut config = match matches.get_one::<String>("config") {
        Some(file) => config::open(file)
            .with_context(|| format!("could not read config `{}`", file))?,
        None => Config::default(),
    };
    let width = matches.get_one::<u32>("width").copied().unwrap_or(config.size.width());
    let height = matches.get_one::<u32>("height").copied().unwrap_or(config.size.height());
    config.size = Size::new(width, height)?;
    if matches.get_flag("quiet") {
        config.report = Report::None;
    } else if let Some(&n) = matches.get_one::<u32>("report-every") {
        config.report = Report::Row(n);
    }
    log::debug!("{:?}", config);

    if let Some(file) = matches.get_one::<String>("save-config") {
        config::save(file, &config)
            .with_context(|| format!("could not write config `{}`", file))?;
    }

    match matches.get_one::<String>("output") {
        Some(file) => write_file(matches.get_flag("parallel"), &config, file),
        None => {
            let stdout = std::io::stdout();
            render::gen(config.report, config.size, stdout.lock())?;
            Ok(())
        }
    }
}

#[cfg(feature = "render")]
fn write_file(parallel: bool, config: &Config, file: &str) -> anyhow::Result<()> {
    render::gen_file(parallel, config.report, config.size, file)
        .with_context(|| format!("could not render to `{}`", file))
}

#[cfg(not(feature = "render"))]
fn write_file(_parallel: bool, _config: &Config, file: &str) -> anyhow::Result<()> {
    anyhow::bail!("cannot write `{}`: built without the `render` feature", file)
}
