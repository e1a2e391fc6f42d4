use anyhow::Result;
use csp_template::cli;

fn main() -> Result<()> {
    let action = cli::start()?;

    action.execute()?;

    Ok(())
}
