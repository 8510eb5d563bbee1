use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use labeler::flags::{flag_names, preset_names};
use labeler::{parse_elements, ElementLabels, FormatFlags, Separators, StyledLabel};
use std::fs;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("labeler")
        .about("Compose display labels for source-code model elements")
        .arg(
            Arg::new("input")
                .help("JSON file holding one element or an array of elements")
                .required_unless_present("list-flags")
                .index(1),
        )
        .arg(
            Arg::new("preset")
                .long("preset")
                .short('p')
                .help("Starting option set (default, basics, qualified, post_qualified)")
                .default_value("default"),
        )
        .arg(
            Arg::new("flag")
                .long("flag")
                .short('f')
                .help("Turn on one option, e.g. method.parameter_names (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("separators")
                .long("separators")
                .help("JSON file overriding the concat/comma/declaration/ellipsis strings"),
        )
        .arg(
            Arg::new("styled")
                .long("styled")
                .help("Print styled segments as JSON instead of plain labels")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-flags")
                .long("list-flags")
                .help("List preset and option names, then exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log loader decisions to stderr")
                .action(ArgAction::SetTrue),
        )
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(matches: &ArgMatches) -> Result<()> {
    if matches.get_flag("list-flags") {
        for name in preset_names() {
            println!("preset {}", name);
        }
        for name in flag_names() {
            println!("flag {}", name);
        }
        return Ok(());
    }

    let input_file = matches
        .get_one::<String>("input")
        .context("no input file given")?;

    let preset = matches
        .get_one::<String>("preset")
        .map(String::as_str)
        .unwrap_or("default");
    let mut flags = FormatFlags::preset(preset)?;
    for name in matches.get_many::<String>("flag").into_iter().flatten() {
        flags.set(name)?;
    }
    debug!(?flags, "resolved format flags");

    let separators = match matches.get_one::<String>("separators") {
        Some(path) => Separators::load(Path::new(path))?,
        None => Separators::discover()?,
    };

    // Read and parse the element snapshot
    let json_content = fs::read_to_string(input_file)
        .with_context(|| format!("failed to read {}", input_file))?;
    let elements = parse_elements(&json_content).with_context(|| format!("failed to parse {}", input_file))?;
    debug!(count = elements.len(), "loaded elements");

    let labels = ElementLabels::new(separators);

    if matches.get_flag("styled") {
        let styled: Vec<StyledLabel> = elements
            .iter()
            .map(|element| labels.styled_label(element, flags))
            .collect();
        println!("{}", serde_json::to_string_pretty(&styled)?);
    } else {
        for element in &elements {
            println!("{}", labels.label(element, flags));
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_logging(matches.get_flag("verbose"));
    run(&matches)
}
