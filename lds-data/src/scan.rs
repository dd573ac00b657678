use crate::constants::DISTANCE_MAX_METERS;
use crate::units::{AngularUnit, LinearUnit};
use ndarray::Array2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::cell::OnceCell;

/// One reading of the LDS after unit normalization.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Measurement {
    /// Distance in meters. Zero when the reading was out of the sensor range.
    pub distance: f64,
    /// Angle in radians.
    pub angle: f64,
    /// Return strength of the laser pulse.
    pub intensity: i32,
    /// Error code reported by the sensor for this reading.
    pub error_code: i32,
}

/// Angle-sorted copy of the measurements, split into parallel sequences.
#[derive(Clone, Debug, Default)]
struct SortedView {
    distances: Vec<f64>,
    angles: Vec<f64>,
    intensities: Vec<i32>,
    error_codes: Vec<i32>,
    x: Vec<f64>,
    y: Vec<f64>,
}

impl SortedView {
    fn new(measurements: &[Measurement]) -> SortedView {
        let mut sorted = measurements.to_vec();
        // stable, so readings at the same angle keep insertion order
        sorted.sort_by(|a, b| a.angle.total_cmp(&b.angle));

        let n = sorted.len();
        let mut view = SortedView {
            distances: Vec::with_capacity(n),
            angles: Vec::with_capacity(n),
            intensities: Vec::with_capacity(n),
            error_codes: Vec::with_capacity(n),
            x: Vec::with_capacity(n),
            y: Vec::with_capacity(n),
        };
        for m in sorted {
            view.distances.push(m.distance);
            view.angles.push(m.angle);
            view.intensities.push(m.intensity);
            view.error_codes.push(m.error_code);
            view.x.push(m.distance * f64::cos(m.angle));
            view.y.push(m.distance * f64::sin(m.angle));
        }
        view
    }
}

/// Struct to hold one rotation of LDS scan data.
///
/// Measurements are kept in insertion order. Every accessor returns them
/// sorted by ascending angle; the sorted view is built on the first read after
/// a mutation and reused until the next [`Scan::add_measurement`].
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scan {
    measurements: Vec<Measurement>,
    #[cfg_attr(feature = "serde", serde(skip))]
    sorted: OnceCell<SortedView>,
}

impl Scan {
    pub fn new() -> Scan {
        Scan::default()
    }

    /// Adds a reading in the native units of the LDS log (millimeters, degrees)
    /// with zero intensity and error code.
    pub fn push(&mut self, distance: f64, angle: f64) {
        self.add_measurement(
            distance,
            angle,
            0,
            0,
            LinearUnit::default(),
            AngularUnit::default(),
        );
    }

    /// Adds a reading, converting it to meters and radians.
    ///
    /// A distance at or beyond [`DISTANCE_MAX_METERS`] is stored as zero, which
    /// is how the sensor marks an invalid reading.
    pub fn add_measurement(
        &mut self,
        distance: f64,
        angle: f64,
        intensity: i32,
        error_code: i32,
        linear_unit: LinearUnit,
        angular_unit: AngularUnit,
    ) {
        let distance = linear_unit.to_meters(distance);
        let distance = if distance >= DISTANCE_MAX_METERS {
            0.
        } else {
            distance
        };

        self.measurements.push(Measurement {
            distance,
            angle: angular_unit.to_radians(angle),
            intensity,
            error_code,
        });
        self.sorted.take();
    }

    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    fn sorted(&self) -> &SortedView {
        self.sorted.get_or_init(|| SortedView::new(&self.measurements))
    }

    /// Distances in meters.
    pub fn distances(&self) -> &[f64] {
        &self.sorted().distances
    }

    /// Angles in radians, ascending.
    pub fn angles(&self) -> &[f64] {
        &self.sorted().angles
    }

    pub fn intensities(&self) -> &[i32] {
        &self.sorted().intensities
    }

    pub fn error_codes(&self) -> &[i32] {
        &self.sorted().error_codes
    }

    /// X coordinates of the 2D point cloud, in meters.
    pub fn x(&self) -> &[f64] {
        &self.sorted().x
    }

    /// Y coordinates of the 2D point cloud, in meters.
    pub fn y(&self) -> &[f64] {
        &self.sorted().y
    }

    /// The 2D point cloud as a `2 x n` array. Row 0 holds the x coordinates and
    /// row 1 the y coordinates, in the same order as the other accessors.
    pub fn points(&self) -> Array2<f64> {
        let view = self.sorted();
        Array2::from_shape_fn((2, view.x.len()), |(row, col)| match row {
            0 => view.x[col],
            _ => view.y[col],
        })
    }
}

impl PartialEq for Scan {
    fn eq(&self, other: &Self) -> bool {
        let a = self.sorted();
        let b = other.sorted();
        a.distances == b.distances
            && a.angles == b.angles
            && a.intensities == b.intensities
            && a.error_codes == b.error_codes
    }
}
