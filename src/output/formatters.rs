use super::{Field, FieldValue};
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

pub trait Formatter {
    fn write(&mut self, fields: &[Field]) -> io::Result<()>;
}

pub struct CsvFormatter<'a, W: Write> {
    writer: &'a mut W,
    headers: bool,
}

impl<'a, W: Write> CsvFormatter<'a, W> {
    pub fn new(writer: &'a mut W, headers: bool) -> Self {
        Self { writer, headers }
    }
}

impl<W: Write> Formatter for CsvFormatter<'_, W> {
    fn write(&mut self, fields: &[Field]) -> io::Result<()> {
        if self.headers {
            let names: Vec<&str> = fields.iter().map(|f| f.name).collect();
            writeln!(self.writer, "{}", names.join(","))?;
        }
        let values: Vec<String> = fields.iter().map(Field::machine_value).collect();
        writeln!(self.writer, "{}", values.join(","))
    }
}

pub struct JsonFormatter<'a, W: Write> {
    writer: &'a mut W,
}

impl<'a, W: Write> JsonFormatter<'a, W> {
    pub fn new(writer: &'a mut W) -> Self {
        Self { writer }
    }
}

impl<W: Write> Formatter for JsonFormatter<'_, W> {
    fn write(&mut self, fields: &[Field]) -> io::Result<()> {
        write!(self.writer, "{{")?;
        for (index, field) in fields.iter().enumerate() {
            if index > 0 {
                write!(self.writer, ",")?;
            }
            match field.value {
                FieldValue::Unit(_) => {
                    write!(self.writer, "\"{}\":\"{}\"", field.name, field.machine_value())?
                }
                _ => write!(self.writer, "\"{}\":{}", field.name, field.machine_value())?,
            }
        }
        writeln!(self.writer, "}}")
    }
}

pub struct TextFormatter<'a, W: Write> {
    writer: &'a mut W,
}

impl<'a, W: Write> TextFormatter<'a, W> {
    pub fn new(writer: &'a mut W) -> Self {
        Self { writer }
    }
}

fn text_value(value: FieldValue) -> Option<String> {
    match value {
        FieldValue::Degrees(v) => Some(format!("{:.5}°", v)),
        FieldValue::Area(v, unit) => Some(format!("{:.6} {}", v, unit.symbol())),
        FieldValue::Fraction(v) => Some(format!("{:.8}", v)),
        // Already attached to the area.
        FieldValue::Unit(_) => None,
    }
}

impl<W: Write> Formatter for TextFormatter<'_, W> {
    fn write(&mut self, fields: &[Field]) -> io::Result<()> {
        let rows: Vec<(&str, String)> = fields
            .iter()
            .filter_map(|f| text_value(f.value).map(|v| (f.name, v)))
            .collect();

        let label_width = rows.iter().map(|(name, _)| name.width()).max().unwrap_or(0);
        let value_width = rows.iter().map(|(_, v)| v.width()).max().unwrap_or(0);

        for (name, value) in rows {
            let label_pad = label_width - name.width();
            let value_pad = value_width - value.width();
            writeln!(
                self.writer,
                "{}{}  {}{}",
                name,
                " ".repeat(label_pad),
                " ".repeat(value_pad),
                value
            )?;
        }
        Ok(())
    }
}
