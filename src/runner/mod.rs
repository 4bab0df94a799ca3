mod error;


pub use error::RunError;

use chrono::Local;
use std::io::Write;
use std::path::PathBuf;

use crate::api::{JsonSource, ASTROS_PATH, ISS_NOW_PATH, ISS_PASS_PATH};
use crate::mapper::{
    parse_crew, parse_pass_time, parse_position, CrewMember, GeoPosition, PassPrediction,
};
use crate::render::{Glyph, MapSurface, MarkerColor, RenderError};

/// Heading for the station icon: upright.
pub const ICON_HEADING_DEG: f64 = 90.0;
pub const OBSERVER_DOT_RADIUS_PX: u32 = 5;

type RunResult<T> = Result<T, RunError>;

/// Fixed ground location the pass prediction is requested for.
#[derive(Debug, Clone)]
pub struct Observer {
    pub name: String,
    pub position: GeoPosition,
    pub color: MarkerColor,
}

/// Drives one demo run: fetch, print, draw, wait.
pub struct Runner<'a, S: JsonSource, W: Write> {
    pub source: &'a S,
    pub observer: Observer,
    pub icon: PathBuf,
    pub out: W,
}

impl<S: JsonSource, W: Write> Runner<'_, S, W> {
    /// Prints the crew and station position, then shows the map.
    ///
    /// Only failures to bring up the map are absorbed: they are reported on
    /// the output and the run ends without waiting for dismissal. Every other
    /// error is returned.
    pub fn run_map<M, F>(&mut self, open_surface: F) -> RunResult<()>
    where
        M: MapSurface,
        F: FnOnce() -> Result<M, RenderError>,
    {
        self.report_crew()?;
        let position = self.report_position()?;

        let surface = match self.draw_map(position, open_surface) {
            Ok(surface) => surface,
            Err(RunError::Render(e)) => {
                log::warn!("Map unavailable: {}", e);
                writeln!(self.out, "Error: problem loading graphics: {}", e)?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        writeln!(self.out, "Click on screen to exit...")?;
        if let Some(address) = surface.address() {
            writeln!(self.out, "Map is open at {}", address)?;
        }
        self.out.flush()?;

        surface.wait_for_dismissal()?;
        Ok(())
    }

    /// Text-only run: crew, position and the next pass over the observer.
    pub fn run_report(&mut self) -> RunResult<()> {
        self.report_crew()?;
        self.report_position()?;

        let pass = self.next_pass()?;
        writeln!(
            self.out,
            "\nNext ISS pass over {}: {}",
            self.observer.name,
            pass.display()
        )?;
        Ok(())
    }

    fn report_crew(&mut self) -> RunResult<()> {
        let crew = fetch_crew(self.source)?;
        log::info!("{} people in space", crew.len());
        writeln!(self.out, "\nCurrent people in space: {}", crew.len())?;
        for member in &crew {
            writeln!(self.out, " - {} in {}", member.name, member.craft)?;
        }
        Ok(())
    }

    fn report_position(&mut self) -> RunResult<GeoPosition> {
        let position = fetch_position(self.source)?;
        writeln!(self.out, "\nCurrent ISS coordinates: {}", position)?;
        Ok(position)
    }

    fn draw_map<M, F>(&self, position: GeoPosition, open_surface: F) -> RunResult<M>
    where
        M: MapSurface,
        F: FnOnce() -> Result<M, RenderError>,
    {
        let mut surface = open_surface()?;
        let icon = surface.register_shape(&self.icon)?;
        surface.place_marker(position, Glyph::Icon(icon), Some(ICON_HEADING_DEG));

        let pass = self.next_pass()?;
        surface.place_labeled_dot(
            self.observer.position,
            self.observer.color,
            OBSERVER_DOT_RADIUS_PX,
            &pass.display(),
        );
        Ok(surface)
    }

    fn next_pass(&self) -> RunResult<PassPrediction> {
        let pass = fetch_pass(self.source, self.observer.position)?;

        let until = (pass.rise_time - Local::now()).to_std().ok();
        match (until, pass.duration_s) {
            (Some(until), Some(duration)) => log::info!(
                "ISS rises over {} in {} and stays up for {}",
                self.observer.name,
                humantime::format_duration(std::time::Duration::from_secs(until.as_secs())),
                humantime::format_duration(std::time::Duration::from_secs(duration)),
            ),
            _ => log::info!(
                "ISS rise time over {}: {}",
                self.observer.name,
                pass.display()
            ),
        }
        Ok(pass)
    }
}

pub fn fetch_crew<S: JsonSource>(source: &S) -> RunResult<Vec<CrewMember>> {
    let raw = source.fetch_json(ASTROS_PATH, &[])?;
    Ok(parse_crew(&raw)?)
}

pub fn fetch_position<S: JsonSource>(source: &S) -> RunResult<GeoPosition> {
    let raw = source.fetch_json(ISS_NOW_PATH, &[])?;
    Ok(parse_position(&raw)?)
}

pub fn fetch_pass<S: JsonSource>(source: &S, at: GeoPosition) -> RunResult<PassPrediction> {
    let query = [
        ("lat", at.latitude.to_string()),
        ("lon", at.longitude.to_string()),
    ];
    let raw = source.fetch_json(ISS_PASS_PATH, &query)?;
    Ok(parse_pass_time(&raw)?)
}
