use clap::{
    Arg, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

pub const ARG_MODE: &str = "mode";
pub const ARG_DIR: &str = "dir";
pub const ARG_VERBOSITY: &str = "verbosity";

pub const CMD_PRE_BUILD: &str = "pre-build";
pub const CMD_POST_BUILD: &str = "post-build";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("csp-template")
        .about("Swap the HTML entry template around production builds")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_MODE)
                .short('m')
                .long("mode")
                .help("Build mode: development or production (default: derived from BUILD_MODE / TRUNK_PROFILE)")
                .env("BUILD_MODE")
                .global(true),
        )
        .arg(
            Arg::new(ARG_DIR)
                .short('d')
                .long("dir")
                .help("Directory holding index.html and its production/development templates")
                .env("CSP_TEMPLATE_DIR")
                .default_value(".")
                .global(true),
        )
        .arg(
            Arg::new(ARG_VERBOSITY)
                .short('v')
                .long("verbose")
                .help("Verbosity level: -v warn, -vv info, -vvv debug, -vvvv trace")
                .global(true)
                .action(clap::ArgAction::Count),
        )
        .subcommand(
            Command::new(CMD_PRE_BUILD)
                .about("Install the production template before the build starts"),
        )
        .subcommand(
            Command::new(CMD_POST_BUILD)
                .about("Restore the development template after the build ends"),
        )
}
