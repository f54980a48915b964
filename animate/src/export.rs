use std::path::Path;
use std::time::Duration;

use abstutil::Timer;
use plotters::prelude::*;

use kinematics::{Animation, FrameState};

use crate::figure::{draw_frame, Figure};
use crate::RenderError;

// GIFs store each frame's delay in centiseconds, as a u16
const MAX_FRAME_DELAY_MS: u128 = u16::MAX as u128 * 10;

/// Renders every frame of the animation, in order, into a looping GIF.
pub fn export_gif(
    path: &Path,
    animation: &mut Animation,
    figure: &Figure,
    timer: &mut Timer,
) -> Result<(), RenderError> {
    let frame_delay_ms = frame_delay_ms(animation.interval())?;
    create_parent_dir(path)?;
    let root = BitMapBackend::gif(path, figure.size, frame_delay_ms)
        .map_err(RenderError::draw)?
        .into_drawing_area();

    timer.start_iter("render frames", animation.len());
    for idx in 0..animation.len() {
        timer.next();
        let state = animation.frame(idx)?;
        draw_frame(&root, figure, state)?;
        root.present().map_err(RenderError::draw)?;
    }
    info!("Wrote {} frames to {}", animation.len(), path.display());
    Ok(())
}

/// Saves one frame as a still image. Given the final state, this shows the whole trajectory.
pub fn export_png(path: &Path, figure: &Figure, state: &FrameState) -> Result<(), RenderError> {
    create_parent_dir(path)?;
    let root = BitMapBackend::new(path, figure.size).into_drawing_area();
    draw_frame(&root, figure, state)?;
    root.present().map_err(RenderError::draw)?;
    info!("Wrote {}", path.display());
    Ok(())
}

fn frame_delay_ms(interval: Duration) -> Result<u32, RenderError> {
    let ms = interval.as_millis();
    if ms > MAX_FRAME_DELAY_MS {
        return Err(RenderError::IntervalTooLong(interval));
    }
    Ok(ms as u32)
}

fn create_parent_dir(path: &Path) -> Result<(), RenderError> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            fs_err::create_dir_all(dir).map_err(|source| RenderError::CreateDir {
                path: dir.display().to_string(),
                source,
            })
        }
        _ => Ok(()),
    }
}
