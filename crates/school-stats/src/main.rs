mod bootstrap;
mod prompt;

use std::io::{self, Write};

use anyhow::{Context, Result};
use enrollment_core::settings::Settings;
use enrollment_data::reference_cube;
use enrollment_report::{render, write_full_report, CubeSummary};

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("school-stats v{} starting", env!("CARGO_PKG_VERSION"));

    let cube = reference_cube().context("bundled enrollment dataset is malformed")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render::render_header(&mut out, &CubeSummary::of(&cube))?;
    out.flush()?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let school = prompt::select_school(
        settings.school.as_deref(),
        &mut input,
        &mut out,
        cube.config().roster(),
    )
    .context("no school selected")?;
    tracing::info!(code = school.code, name = %school.name, "school selected");

    let position = cube
        .config()
        .school_position(school)
        .context("selected school is not in the roster")?;

    write_full_report(&mut out, &cube, position)?;
    out.flush()?;

    Ok(())
}
