use crate::constants::{FPS, POINT_SIZE, WINDOW_SIZE};
use crate::error::ViewerError;
use crate::viewer::{intensity_color, intensity_range, FrameCommand, ScanViewer};
use piston_window::{EventLoop, PistonWindow, TextEvent, WindowSettings};
use plotters::drawing::IntoDrawingArea;
use plotters::prelude::{ChartBuilder, Circle, RGBColor, WHITE};
use plotters::style::Color;
use plotters_piston::{draw_piston_window, PistonBackend};
use std::error::Error;
use tracing::debug;

fn draw_scan(backend: PistonBackend, viewer: &ScanViewer) -> Result<(), Box<dyn Error>> {
    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    let bounds = viewer.bounds();
    let mut cc =
        ChartBuilder::on(&root).build_cartesian_2d(bounds.x_range(), bounds.y_range())?;

    let scan = viewer.current();
    let (min, max) = intensity_range(scan.intensities());
    let circles: Vec<_> = scan
        .x()
        .iter()
        .zip(scan.y())
        .zip(scan.intensities())
        .map(|((x, y), intensity)| {
            let (r, g, b) = intensity_color(*intensity, min, max);
            Circle::new((*x, *y), POINT_SIZE, RGBColor(r, g, b).filled())
        })
        .collect();
    cc.draw_series(circles)?;

    Ok(())
}

/// Opens the viewer window and runs its event loop until the window closes.
pub fn run(mut viewer: ScanViewer) -> Result<(), ViewerError> {
    let mut window: PistonWindow = WindowSettings::new("LDS scan", [WINDOW_SIZE, WINDOW_SIZE])
        .build()
        .map_err(|e| ViewerError::Window(e.to_string()))?;
    window.set_max_fps(FPS);

    while let Some(event) = draw_piston_window(&mut window, |b| draw_scan(b, &viewer)) {
        let Some(text) = event.text_args() else {
            continue;
        };
        for command in text.chars().filter_map(FrameCommand::from_key) {
            let index = viewer.handle(command);
            debug!(?command, "Frame changed.");
            println!("Scan index = {index}");
        }
    }

    Ok(())
}
