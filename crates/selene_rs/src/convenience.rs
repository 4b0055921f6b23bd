use selene_assets::{FrameImage, ImageLoader};
use selene_phase::{self as phase, ImageIndex, MoonPhase};
use selene_time::UtcTime;
use tracing::debug;

use crate::error::SeleneError;
use crate::request::{PhaseRequest, RenderData};

/// Moon phase for a UTC date, or for the current time when `date` is `None`.
pub fn moon_phase(date: Option<UtcTime>) -> Result<MoonPhase, SeleneError> {
    let date = match date {
        Some(d) => d,
        None => UtcTime::now()?,
    };
    Ok(phase::moon_phase(&date)?)
}

/// Frame index (2..=28) for a phase fraction.
pub fn image_index(phase_fraction: f64) -> Result<ImageIndex, SeleneError> {
    Ok(phase::image_index(phase_fraction)?)
}

/// Phase data and frame index for a request.
///
/// An override phase bypasses the calendar entirely: name and illumination
/// are derived from the override itself.
pub fn render_data(request: &PhaseRequest) -> Result<RenderData, SeleneError> {
    let moon = match request.phase {
        Some(p) => phase::moon_phase_from_override(p)?,
        None => moon_phase(request.date)?,
    };
    let image_index = phase::image_index(moon.phase)?;
    debug!(
        phase = moon.phase,
        name = moon.name.name(),
        image_index = image_index.get(),
        "computed render data"
    );
    Ok(RenderData { moon, image_index })
}

/// [`render_data`] followed by loading the selected frame.
pub fn render_with_loader(
    request: &PhaseRequest,
    loader: &dyn ImageLoader,
) -> Result<(RenderData, FrameImage), SeleneError> {
    let data = render_data(request)?;
    let frame = loader.load(data.image_index)?;
    Ok((data, frame))
}

/// Phase data for each of `count` consecutive days starting at `start`.
pub fn daily_phases(start: UtcTime, count: usize) -> Result<Vec<(UtcTime, RenderData)>, SeleneError> {
    (0..count)
        .map(|i| {
            let date = start.add_days(i as f64);
            render_data(&PhaseRequest::at(date)).map(|data| (date, data))
        })
        .collect()
}
