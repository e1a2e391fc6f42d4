//! Map validated CLI arguments to a template-swap action.

use crate::cli::commands::{ARG_DIR, ARG_MODE, CMD_POST_BUILD, CMD_PRE_BUILD};
use crate::mode::BuildMode;
use crate::selector::TemplatePair;
use anyhow::{Context, Result, bail};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hook {
    PreBuild,
    PostBuild,
}

#[derive(Debug)]
pub struct Action {
    pub hook: Hook,
    pub mode: BuildMode,
    pub dir: PathBuf,
}

impl Action {
    /// Run the selected lifecycle hook against the templates in `dir`.
    ///
    /// # Errors
    /// Returns an error if a template cannot be read or the working entry
    /// cannot be replaced.
    pub fn execute(&self) -> Result<()> {
        let pair = TemplatePair::in_dir(&self.dir);
        match self.hook {
            Hook::PreBuild => pair.on_build_start(self.mode)?,
            Hook::PostBuild => pair.on_build_end(self.mode)?,
        }
        Ok(())
    }
}

/// # Errors
/// Returns an error on a missing or unknown subcommand, or when the build
/// mode cannot be determined from the flag or the environment.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let hook = match matches.subcommand_name() {
        Some(CMD_PRE_BUILD) => Hook::PreBuild,
        Some(CMD_POST_BUILD) => Hook::PostBuild,
        Some(other) => bail!("unknown subcommand: {other}"),
        None => bail!("missing subcommand"),
    };

    let mode = match matches.get_one::<String>(ARG_MODE) {
        Some(raw) => raw.parse()?,
        None => BuildMode::from_env()?,
    };

    let dir = matches
        .get_one::<String>(ARG_DIR)
        .map(PathBuf::from)
        .context("missing --dir")?;

    Ok(Action { hook, mode, dir })
}
