//! Solid angle of a longitude/latitude rectangle on the celestial sphere.
//!
//! The pipeline is linear and stops at the first failure:
//! normalize bounds, convert to degrees, compute the area fraction,
//! check it is physical, then scale to the requested output unit.

use crate::angle::{
    DEFAULT_SEPARATOR, sexagesimal_degrees_to_degrees, sexagesimal_hours_to_degrees,
};
use crate::error::SkyAreaError;
use crate::units::{InputUnit, OutputUnit};
use std::f64::consts::PI;
use tracing::{debug, trace};

/// Area of the full celestial sphere in square degrees (4π sr).
pub const FULL_SKY_DEG2: f64 = 129_600.0 / PI;

/// Area fractions within this distance of 0 or 1 are snapped to the boundary.
const ROUNDING_TOLERANCE: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Longitude,
    Latitude,
}

impl Axis {
    pub fn name(&self) -> &'static str {
        match self {
            Axis::Longitude => "longitude",
            Axis::Latitude => "latitude",
        }
    }
}

/// One coordinate bound in the request's input unit.
#[derive(Debug, Clone, PartialEq)]
pub enum Bound {
    Value(f64),
    /// Decimal text for numeric units, `H:M:S` / `D:M:S` for sexagesimal.
    Text(String),
}

impl From<f64> for Bound {
    fn from(value: f64) -> Self {
        Bound::Value(value)
    }
}

impl From<i32> for Bound {
    fn from(value: i32) -> Self {
        Bound::Value(f64::from(value))
    }
}

impl From<&str> for Bound {
    fn from(value: &str) -> Self {
        Bound::Text(value.to_string())
    }
}

impl From<String> for Bound {
    fn from(value: String) -> Self {
        Bound::Text(value)
    }
}

impl Bound {
    pub fn to_degrees(
        &self,
        unit: InputUnit,
        axis: Axis,
        separator: &str,
    ) -> Result<f64, SkyAreaError> {
        match (self, unit) {
            (Bound::Text(text), InputUnit::Sexagesimal) => match axis {
                Axis::Longitude => sexagesimal_hours_to_degrees(text, separator),
                Axis::Latitude => sexagesimal_degrees_to_degrees(text, separator),
            },
            (Bound::Value(value), InputUnit::Sexagesimal) => {
                Err(SkyAreaError::NotSexagesimal(*value))
            }
            (Bound::Value(value), unit) => Ok(unit.to_degrees(*value)),
            (Bound::Text(text), unit) => text
                .trim()
                .parse::<f64>()
                .map(|value| unit.to_degrees(value))
                .map_err(|_| SkyAreaError::InvalidNumber {
                    field: text.clone(),
                    value: text.clone(),
                }),
        }
    }
}

/// Region bounds after conversion to decimal degrees, as `(low, high)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegreeBounds {
    pub longitude: (f64, f64),
    pub latitude: (f64, f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkyAreaRequest {
    pub longitude: Vec<Bound>,
    pub latitude: Vec<Bound>,
    pub input_unit: InputUnit,
    pub output_unit: OutputUnit,
    pub separator: String,
}

impl Default for SkyAreaRequest {
    fn default() -> Self {
        Self {
            longitude: vec![Bound::Value(129.0), Bound::Value(141.0)],
            latitude: vec![Bound::Value(-2.0), Bound::Value(3.0)],
            input_unit: InputUnit::default(),
            output_unit: OutputUnit::default(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl SkyAreaRequest {
    pub fn new<L, A>(longitude: L, latitude: A) -> Self
    where
        L: IntoIterator,
        L::Item: Into<Bound>,
        A: IntoIterator,
        A::Item: Into<Bound>,
    {
        Self {
            longitude: longitude.into_iter().map(Into::into).collect(),
            latitude: latitude.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set both units from their short names. The input unit is checked
    /// before the output unit.
    pub fn with_units(mut self, input: &str, output: &str) -> Result<Self, SkyAreaError> {
        self.input_unit = input.parse()?;
        self.output_unit = output.parse()?;
        Ok(self)
    }

    pub fn with_input_unit(mut self, unit: InputUnit) -> Self {
        self.input_unit = unit;
        self
    }

    pub fn with_output_unit(mut self, unit: OutputUnit) -> Self {
        self.output_unit = unit;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Normalize both axes and convert them to decimal degrees.
    pub fn degree_bounds(&self) -> Result<DegreeBounds, SkyAreaError> {
        let longitude = self.axis_degrees(Axis::Longitude, &self.longitude)?;
        let latitude = self.axis_degrees(Axis::Latitude, &self.latitude)?;
        Ok(DegreeBounds {
            longitude,
            latitude,
        })
    }

    fn axis_degrees(&self, axis: Axis, bounds: &[Bound]) -> Result<(f64, f64), SkyAreaError> {
        // A lone bound is the upper end of a range starting at zero, and zero
        // is zero in every input unit.
        let (low, high) = match bounds {
            [high] => (None, high),
            [low, high] => (Some(low), high),
            _ => {
                return Err(SkyAreaError::BoundCount {
                    axis: axis.name(),
                    count: bounds.len(),
                });
            }
        };

        let low = match low {
            Some(bound) => bound.to_degrees(self.input_unit, axis, &self.separator)?,
            None => 0.0,
        };
        let high = high.to_degrees(self.input_unit, axis, &self.separator)?;
        trace!(axis = axis.name(), low, high, "converted bounds to degrees");
        Ok((low, high))
    }
}

/// Computed sky area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyArea {
    /// Area in `unit`.
    pub area: f64,
    /// Fraction of the full sphere, independent of `unit`.
    pub areafrac: f64,
    pub unit: OutputUnit,
    pub bounds: DegreeBounds,
}

/// Fraction of the full sphere covered by a latitude/longitude rectangle.
pub fn area_fraction(bounds: &DegreeBounds) -> f64 {
    let (lon0, lon1) = bounds.longitude;
    let (lat0, lat1) = bounds.latitude;
    ((lat1.to_radians().sin() - lat0.to_radians().sin()) * (lon1 - lon0) / 360.0) / 2.0
}

fn check_physical(areafrac: f64) -> Result<f64, SkyAreaError> {
    if !areafrac.is_finite() {
        return Err(SkyAreaError::NotFinite);
    }
    if areafrac <= 0.0 {
        // Also turns -0.0 into 0.0.
        return if areafrac >= -ROUNDING_TOLERANCE {
            Ok(0.0)
        } else {
            Err(SkyAreaError::NegativeArea(areafrac))
        };
    }
    if areafrac > 1.0 {
        return if areafrac <= 1.0 + ROUNDING_TOLERANCE {
            Ok(1.0)
        } else {
            Err(SkyAreaError::ExceedsFullSky(areafrac))
        };
    }
    Ok(areafrac)
}

/// Compute the solid angle of the requested region.
pub fn sky_area(request: &SkyAreaRequest) -> Result<SkyArea, SkyAreaError> {
    let bounds = request.degree_bounds()?;
    let areafrac = check_physical(area_fraction(&bounds))?;
    let area = request
        .output_unit
        .convert_square_degrees(areafrac * FULL_SKY_DEG2);

    debug!(
        input_unit = %request.input_unit,
        output_unit = %request.output_unit,
        areafrac,
        area,
        "computed sky area"
    );

    Ok(SkyArea {
        area,
        areafrac,
        unit: request.output_unit,
        bounds,
    })
}
