//! Angular input units and solid-angle output units.

use crate::error::SkyAreaError;
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

const VALID_INPUT_UNITS: &str = "deg, amin, asec, rad or sex";
const VALID_OUTPUT_UNITS: &str = "deg2, amin2, asec2, rad2 or sr";

/// Unit of the longitude/latitude bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputUnit {
    #[default]
    Degrees,
    Arcminutes,
    Arcseconds,
    Radians,
    /// `H:M:S` for longitude, `D:M:S` for latitude.
    Sexagesimal,
}

impl InputUnit {
    pub const ALL: [InputUnit; 5] = [
        InputUnit::Degrees,
        InputUnit::Arcminutes,
        InputUnit::Arcseconds,
        InputUnit::Radians,
        InputUnit::Sexagesimal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InputUnit::Degrees => "deg",
            InputUnit::Arcminutes => "amin",
            InputUnit::Arcseconds => "asec",
            InputUnit::Radians => "rad",
            InputUnit::Sexagesimal => "sex",
        }
    }

    /// Convert a numeric bound to degrees. Sexagesimal bounds are strings and
    /// go through [`crate::angle`] instead, so they pass through unchanged here.
    pub fn to_degrees(self, value: f64) -> f64 {
        match self {
            InputUnit::Degrees | InputUnit::Sexagesimal => value,
            InputUnit::Arcminutes => value / 60.0,
            InputUnit::Arcseconds => value / 3600.0,
            InputUnit::Radians => value.to_degrees(),
        }
    }
}

impl FromStr for InputUnit {
    type Err = SkyAreaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InputUnit::ALL
            .into_iter()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| SkyAreaError::InvalidUnit {
                which: "input",
                value: s.to_string(),
                valid: VALID_INPUT_UNITS,
            })
    }
}

impl fmt::Display for InputUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit of the reported solid angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputUnit {
    #[default]
    SquareDegrees,
    SquareArcminutes,
    SquareArcseconds,
    SquareRadians,
    Steradians,
}

impl OutputUnit {
    pub const ALL: [OutputUnit; 5] = [
        OutputUnit::SquareDegrees,
        OutputUnit::SquareArcminutes,
        OutputUnit::SquareArcseconds,
        OutputUnit::SquareRadians,
        OutputUnit::Steradians,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputUnit::SquareDegrees => "deg2",
            OutputUnit::SquareArcminutes => "amin2",
            OutputUnit::SquareArcseconds => "asec2",
            OutputUnit::SquareRadians => "rad2",
            OutputUnit::Steradians => "sr",
        }
    }

    /// Human-readable unit suffix.
    pub fn symbol(&self) -> &'static str {
        match self {
            OutputUnit::SquareDegrees => "deg²",
            OutputUnit::SquareArcminutes => "arcmin²",
            OutputUnit::SquareArcseconds => "arcsec²",
            OutputUnit::SquareRadians => "rad²",
            OutputUnit::Steradians => "sr",
        }
    }

    pub fn convert_square_degrees(self, area: f64) -> f64 {
        match self {
            OutputUnit::SquareDegrees => area,
            OutputUnit::SquareArcminutes => area * 3600.0,
            OutputUnit::SquareArcseconds => area * 12_960_000.0,
            OutputUnit::SquareRadians | OutputUnit::Steradians => area / (180.0 / PI).powi(2),
        }
    }
}

impl FromStr for OutputUnit {
    type Err = SkyAreaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputUnit::ALL
            .into_iter()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| SkyAreaError::InvalidUnit {
                which: "output",
                value: s.to_string(),
                valid: VALID_OUTPUT_UNITS,
            })
    }
}

impl fmt::Display for OutputUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_input_units() {
        assert_eq!("deg".parse::<InputUnit>().unwrap(), InputUnit::Degrees);
        assert_eq!("amin".parse::<InputUnit>().unwrap(), InputUnit::Arcminutes);
        assert_eq!("asec".parse::<InputUnit>().unwrap(), InputUnit::Arcseconds);
        assert_eq!("rad".parse::<InputUnit>().unwrap(), InputUnit::Radians);
        assert_eq!("sex".parse::<InputUnit>().unwrap(), InputUnit::Sexagesimal);
    }

    #[test]
    fn test_unit_names_are_case_sensitive() {
        assert!("DEG".parse::<InputUnit>().is_err());
        assert!("Sr".parse::<OutputUnit>().is_err());
    }

    #[test]
    fn test_invalid_input_unit() {
        let err = "foo".parse::<InputUnit>().unwrap_err();
        assert!(err.to_string().contains("deg, amin, asec, rad or sex"));
    }

    #[test]
    fn test_output_unit_is_not_an_input_unit() {
        assert!("deg2".parse::<InputUnit>().is_err());
        assert!("deg".parse::<OutputUnit>().is_err());
    }

    #[test]
    fn test_round_trip_names() {
        for unit in InputUnit::ALL {
            assert_eq!(unit.to_string().parse::<InputUnit>().unwrap(), unit);
        }
        for unit in OutputUnit::ALL {
            assert_eq!(unit.to_string().parse::<OutputUnit>().unwrap(), unit);
        }
    }

    #[test]
    fn test_to_degrees() {
        assert_eq!(InputUnit::Degrees.to_degrees(12.5), 12.5);
        assert_eq!(InputUnit::Arcminutes.to_degrees(90.0), 1.5);
        assert_eq!(InputUnit::Arcseconds.to_degrees(5400.0), 1.5);
        assert_relative_eq!(InputUnit::Radians.to_degrees(PI), 180.0, max_relative = 1e-15);
    }

    #[test]
    fn test_full_sky_in_each_output_unit() {
        let full_sky_deg2 = 129_600.0 / PI;
        assert_relative_eq!(
            OutputUnit::SquareArcminutes.convert_square_degrees(full_sky_deg2),
            148_510_660.497_909_4,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            OutputUnit::Steradians.convert_square_degrees(full_sky_deg2),
            4.0 * PI,
            max_relative = 1e-12
        );
        assert_eq!(
            OutputUnit::SquareRadians.convert_square_degrees(full_sky_deg2),
            OutputUnit::Steradians.convert_square_degrees(full_sky_deg2)
        );
    }
}
