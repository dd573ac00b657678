use crate::constants::AXIS_MARGIN;
use crate::error::ViewerError;
use lds_data::Scan;
use std::ops::Range;

/// Step through the loaded scans.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameCommand {
    Next,
    Previous,
}

impl FrameCommand {
    /// `d` moves forward, `a` moves back.
    pub fn from_key(key: char) -> Option<FrameCommand> {
        match key {
            'd' => Some(FrameCommand::Next),
            'a' => Some(FrameCommand::Previous),
            _ => None,
        }
    }
}

/// Plot limits shared by every frame, in meters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl AxisBounds {
    /// Smallest box holding every point of every scan, padded by `margin`.
    /// Scans without points give a box of `margin` around the origin.
    pub fn from_scans(scans: &[Scan], margin: f64) -> AxisBounds {
        let mut points = scans
            .iter()
            .flat_map(|scan| scan.x().iter().copied().zip(scan.y().iter().copied()));

        let bounds = match points.next() {
            Some((x, y)) => points.fold(
                AxisBounds {
                    x_min: x,
                    x_max: x,
                    y_min: y,
                    y_max: y,
                },
                |b, (x, y)| AxisBounds {
                    x_min: b.x_min.min(x),
                    x_max: b.x_max.max(x),
                    y_min: b.y_min.min(y),
                    y_max: b.y_max.max(y),
                },
            ),
            None => AxisBounds {
                x_min: 0.,
                x_max: 0.,
                y_min: 0.,
                y_max: 0.,
            },
        };

        AxisBounds {
            x_min: bounds.x_min - margin,
            x_max: bounds.x_max + margin,
            y_min: bounds.y_min - margin,
            y_max: bounds.y_max + margin,
        }
    }

    pub fn x_range(&self) -> Range<f64> {
        self.x_min..self.x_max
    }

    pub fn y_range(&self) -> Range<f64> {
        self.y_min..self.y_max
    }
}

/// Frame cursor over a list of scans.
///
/// Each viewer owns its scans, its cursor and the axis bounds computed when it
/// was created.
#[derive(Debug)]
pub struct ScanViewer {
    scans: Vec<Scan>,
    index: usize,
    bounds: AxisBounds,
}

impl ScanViewer {
    pub fn new(scans: Vec<Scan>) -> Result<ScanViewer, ViewerError> {
        if scans.is_empty() {
            return Err(ViewerError::NoScans);
        }
        let bounds = AxisBounds::from_scans(&scans, AXIS_MARGIN);
        Ok(ScanViewer {
            scans,
            index: 0,
            bounds,
        })
    }

    /// Moves the cursor, staying within `[0, len - 1]`. Returns the new index.
    pub fn handle(&mut self, command: FrameCommand) -> usize {
        self.index = match command {
            FrameCommand::Next => usize::min(self.index + 1, self.scans.len() - 1),
            FrameCommand::Previous => self.index.saturating_sub(1),
        };
        self.index
    }

    pub fn current(&self) -> &Scan {
        &self.scans[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.scans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scans.is_empty()
    }

    pub fn bounds(&self) -> AxisBounds {
        self.bounds
    }
}

/// Lowest and highest intensity of a frame, `(0, 0)` when there are none.
pub fn intensity_range(intensities: &[i32]) -> (i32, i32) {
    let min = intensities.iter().copied().min().unwrap_or(0);
    let max = intensities.iter().copied().max().unwrap_or(0);
    (min, max)
}

/// Blue-red-green ramp: `min` is blue, the midpoint red and `max` green.
pub fn intensity_color(intensity: i32, min: i32, max: i32) -> (u8, u8, u8) {
    let t = if max > min {
        (f64::from(intensity) - f64::from(min)) / (f64::from(max) - f64::from(min))
    } else {
        0.
    };
    let t = t.clamp(0., 1.);

    let channel = |v: f64| (v * 255.).round() as u8;
    if t <= 0.5 {
        (channel(2. * t), 0, channel(1. - 2. * t))
    } else {
        (channel(2. - 2. * t), channel(2. * t - 1.), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(readings: &[(f64, f64)]) -> Scan {
        let mut scan = Scan::new();
        for (distance, angle) in readings {
            scan.push(*distance, *angle);
        }
        scan
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            f64::abs(actual - expected) < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_from_key() {
        assert_eq!(FrameCommand::from_key('d'), Some(FrameCommand::Next));
        assert_eq!(FrameCommand::from_key('a'), Some(FrameCommand::Previous));
        assert_eq!(FrameCommand::from_key('q'), None);
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(matches!(ScanViewer::new(vec![]), Err(ViewerError::NoScans)));
    }

    #[test]
    fn test_cursor_is_clamped() {
        let scans = vec![
            scan(&[(1000., 0.)]),
            scan(&[(2000., 0.)]),
            scan(&[(3000., 0.)]),
        ];
        let mut viewer = ScanViewer::new(scans).unwrap();
        assert_eq!(viewer.len(), 3);
        assert_eq!(viewer.index(), 0);

        assert_eq!(viewer.handle(FrameCommand::Previous), 0);
        assert_eq!(viewer.handle(FrameCommand::Next), 1);
        assert_eq!(viewer.handle(FrameCommand::Next), 2);
        assert_eq!(viewer.handle(FrameCommand::Next), 2);
        assert_close(viewer.current().distances()[0], 3.);

        assert_eq!(viewer.handle(FrameCommand::Previous), 1);
        assert_close(viewer.current().distances()[0], 2.);
    }

    #[test]
    fn test_single_scan_cursor() {
        let mut viewer = ScanViewer::new(vec![scan(&[(1000., 0.)])]).unwrap();
        assert_eq!(viewer.handle(FrameCommand::Next), 0);
        assert_eq!(viewer.handle(FrameCommand::Previous), 0);
    }

    #[test]
    fn test_bounds_cover_all_scans() {
        let scans = vec![
            scan(&[(1000., 0.), (2000., 90.)]),
            scan(&[(3000., 180.), (500., 270.)]),
        ];
        let viewer = ScanViewer::new(scans).unwrap();
        let bounds = viewer.bounds();

        assert_close(bounds.x_min, -3. - AXIS_MARGIN);
        assert_close(bounds.x_max, 1. + AXIS_MARGIN);
        assert_close(bounds.y_min, -0.5 - AXIS_MARGIN);
        assert_close(bounds.y_max, 2. + AXIS_MARGIN);
        assert_eq!(bounds.x_range(), bounds.x_min..bounds.x_max);
    }

    #[test]
    fn test_bounds_without_points() {
        let bounds = AxisBounds::from_scans(&[Scan::new()], 0.1);
        assert_eq!(
            bounds,
            AxisBounds {
                x_min: -0.1,
                x_max: 0.1,
                y_min: -0.1,
                y_max: 0.1,
            }
        );
    }

    #[test]
    fn test_intensity_range() {
        assert_eq!(intensity_range(&[5, 1, 9, 3]), (1, 9));
        assert_eq!(intensity_range(&[]), (0, 0));
    }

    #[test]
    fn test_intensity_color() {
        assert_eq!(intensity_color(0, 0, 100), (0, 0, 255));
        assert_eq!(intensity_color(50, 0, 100), (255, 0, 0));
        assert_eq!(intensity_color(100, 0, 100), (0, 255, 0));
        // flat frames use the low end of the ramp
        assert_eq!(intensity_color(7, 7, 7), (0, 0, 255));
        assert_eq!(intensity_color(200, 0, 100), (0, 255, 0));
    }
}
