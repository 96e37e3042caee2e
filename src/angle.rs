//! Sexagesimal angle parsing.
//!
//! Right ascension is written as hours, minutes, seconds (`08:36:00`), and
//! declination as degrees, arcminutes, arcseconds (`-02:30:00`). Both
//! helpers return decimal degrees.
//!
//! Parsing is deliberately permissive: fields are not range checked and the
//! sign of the leading field is not carried into the minutes and seconds, so
//! `-1:30:00` reads as `-1 + 30/60 = -0.5`.

use crate::error::SkyAreaError;

pub const DEFAULT_SEPARATOR: &str = ":";

/// Degrees of right ascension per hour.
pub const DEGREES_PER_HOUR: f64 = 15.0;

fn parse_fields(value: &str, separator: &str) -> Result<[f64; 3], SkyAreaError> {
    if separator.is_empty() {
        return Err(SkyAreaError::EmptySeparator);
    }

    let fields = value
        .split(separator)
        .map(|field| {
            field
                .trim()
                .parse::<f64>()
                .map_err(|_| SkyAreaError::InvalidNumber {
                    field: field.to_string(),
                    value: value.to_string(),
                })
        })
        .collect::<Result<Vec<f64>, _>>()?;

    match fields.as_slice() {
        [whole, minutes, seconds, ..] => Ok([*whole, *minutes, *seconds]),
        _ => Err(SkyAreaError::MissingFields {
            value: value.to_string(),
            separator: separator.to_string(),
        }),
    }
}

fn sexagesimal_sum([whole, minutes, seconds]: [f64; 3]) -> f64 {
    whole + minutes / 60.0 + seconds / 3600.0
}

/// Convert an `H:M:S` hour-angle string to decimal degrees.
pub fn sexagesimal_hours_to_degrees(value: &str, separator: &str) -> Result<f64, SkyAreaError> {
    let fields = parse_fields(value, separator)?;
    Ok(sexagesimal_sum(fields) * DEGREES_PER_HOUR)
}

/// Convert a `D:M:S` string to decimal degrees.
pub fn sexagesimal_degrees_to_degrees(value: &str, separator: &str) -> Result<f64, SkyAreaError> {
    let fields = parse_fields(value, separator)?;
    Ok(sexagesimal_sum(fields))
}
