//! Output formatting for text, CSV, and JSON.

mod formatters;

use crate::config::{OutputFormat, Parameters};
use formatters::{CsvFormatter, Formatter, JsonFormatter, TextFormatter};
use skyarea::{OutputUnit, SkyArea};
use std::io::{self, BufWriter, Write};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Degrees(f64),
    Area(f64, OutputUnit),
    Fraction(f64),
    Unit(OutputUnit),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub value: FieldValue,
}

impl Field {
    fn new(name: &'static str, value: FieldValue) -> Self {
        Self { name, value }
    }

    /// Full-precision value for CSV and JSON.
    pub fn machine_value(&self) -> String {
        match self.value {
            FieldValue::Degrees(v) | FieldValue::Area(v, _) | FieldValue::Fraction(v) => {
                format!("{}", v)
            }
            FieldValue::Unit(unit) => unit.as_str().to_string(),
        }
    }
}

pub fn area_fields(result: &SkyArea, show_inputs: bool) -> Vec<Field> {
    let mut fields = Vec::with_capacity(7);
    if show_inputs {
        let (lon_min, lon_max) = result.bounds.longitude;
        let (lat_min, lat_max) = result.bounds.latitude;
        fields.push(Field::new("lon_min", FieldValue::Degrees(lon_min)));
        fields.push(Field::new("lon_max", FieldValue::Degrees(lon_max)));
        fields.push(Field::new("lat_min", FieldValue::Degrees(lat_min)));
        fields.push(Field::new("lat_max", FieldValue::Degrees(lat_max)));
    }
    fields.push(Field::new("area", FieldValue::Area(result.area, result.unit)));
    fields.push(Field::new("areafrac", FieldValue::Fraction(result.areafrac)));
    fields.push(Field::new("unit", FieldValue::Unit(result.unit)));
    fields
}

pub fn write_report<W: Write>(
    result: &SkyArea,
    params: &Parameters,
    writer: &mut W,
) -> io::Result<()> {
    let fields = area_fields(result, params.output.show_inputs);
    match params.output.format {
        OutputFormat::Text => TextFormatter::new(writer).write(&fields),
        OutputFormat::Csv => CsvFormatter::new(writer, params.output.headers).write(&fields),
        OutputFormat::Json => JsonFormatter::new(writer).write(&fields),
    }
}

pub fn dispatch_output(result: &SkyArea, params: &Parameters) -> io::Result<()> {
    let stdout = io::stdout().lock();
    let mut writer = BufWriter::new(stdout);
    write_report(result, params, &mut writer)?;
    writer.flush()
}
