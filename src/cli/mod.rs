//! Command-line parsing and validation.

mod error;

pub use error::{CliError, CliResult};

use crate::config::{OutputFormat, Parameters};
use skyarea::{Bound, InputUnit, OutputUnit};
use std::collections::HashSet;

/// Separates the two bounds of `--lon`/`--lat`, so it cannot also be the
/// sexagesimal field separator.
const BOUND_LIST_SEPARATOR: char = ',';

/// Parameters being built from the command line. Unit names are held as given
/// and validated together once all options are read.
#[derive(Default)]
struct ParsedArgs {
    params: Parameters,
    input_unit: Option<String>,
    output_unit: Option<String>,
}

impl ParsedArgs {
    fn finish(self) -> CliResult<Parameters> {
        let Self {
            mut params,
            input_unit,
            output_unit,
        } = self;
        if input_unit.is_none() && output_unit.is_none() {
            return Ok(params);
        }

        let input = input_unit.unwrap_or_else(|| params.region.input_unit.to_string());
        let output = output_unit.unwrap_or_else(|| params.region.output_unit.to_string());
        params.region = params.region.with_units(&input, &output)?;
        Ok(params)
    }
}

type ApplyFn = fn(Option<&str>, &mut ParsedArgs) -> CliResult<()>;

enum OptKind {
    Value(ApplyFn),
    Flag(ApplyFn),
}

struct OptionSpec {
    name: &'static str,
    kind: OptKind,
}

const OPTION_SPECS: &[OptionSpec] = &[
    OptionSpec {
        name: "lon",
        kind: OptKind::Value(|value, parsed| {
            let v = required_value("lon", value)?;
            parsed.params.region.longitude = parse_bounds(v);
            Ok(())
        }),
    },
    OptionSpec {
        name: "lat",
        kind: OptKind::Value(|value, parsed| {
            let v = required_value("lat", value)?;
            parsed.params.region.latitude = parse_bounds(v);
            Ok(())
        }),
    },
    OptionSpec {
        name: "in-unit",
        kind: OptKind::Value(|value, parsed| {
            let v = required_value("in-unit", value)?;
            parsed.input_unit = Some(v.to_string());
            Ok(())
        }),
    },
    OptionSpec {
        name: "out-unit",
        kind: OptKind::Value(|value, parsed| {
            let v = required_value("out-unit", value)?;
            parsed.output_unit = Some(v.to_string());
            Ok(())
        }),
    },
    OptionSpec {
        name: "separator",
        kind: OptKind::Value(|value, parsed| {
            let v = required_value("separator", value)?;
            if v.contains(BOUND_LIST_SEPARATOR) {
                return Err(format!(
                    "Separator cannot contain '{}' (it separates --lon/--lat bounds)",
                    BOUND_LIST_SEPARATOR
                )
                .into());
            }
            parsed.params.region.separator = v.to_string();
            Ok(())
        }),
    },
    OptionSpec {
        name: "format",
        kind: OptKind::Value(|value, parsed| {
            let v = required_value("format", value)?;
            parsed.params.output.format = v.parse::<OutputFormat>().map_err(CliError::from)?;
            Ok(())
        }),
    },
    OptionSpec {
        name: "headers",
        kind: OptKind::Flag(|_, parsed| {
            parsed.params.output.headers = true;
            Ok(())
        }),
    },
    OptionSpec {
        name: "no-headers",
        kind: OptKind::Flag(|_, parsed| {
            parsed.params.output.headers = false;
            Ok(())
        }),
    },
    OptionSpec {
        name: "show-inputs",
        kind: OptKind::Flag(|_, parsed| {
            parsed.params.output.show_inputs = true;
            Ok(())
        }),
    },
    OptionSpec {
        name: "no-show-inputs",
        kind: OptKind::Flag(|_, parsed| {
            parsed.params.output.show_inputs = false;
            Ok(())
        }),
    },
    OptionSpec {
        name: "help",
        kind: OptKind::Flag(|_, _| Err(CliError::Exit(get_help_text()))),
    },
    OptionSpec {
        name: "version",
        kind: OptKind::Flag(|_, _| Err(CliError::Exit(get_version_text()))),
    },
];

pub fn parse_cli(args: Vec<String>) -> CliResult<Parameters> {
    let mut parsed = ParsedArgs::default();
    let mut positional = Vec::new();
    let mut applied_options: HashSet<&'static str> = HashSet::new();

    for arg in args.into_iter().skip(1) {
        if let Some(stripped) = arg.strip_prefix("--") {
            let (name, value) = stripped
                .split_once('=')
                .map(|(n, v)| (n, Some(v)))
                .unwrap_or((stripped, None));
            apply_option(name, value, &mut parsed, &mut applied_options)?;
        } else {
            positional.push(arg);
        }
    }

    match positional.first() {
        None => parsed.finish(),
        Some(first) if first == "help" => Err(CliError::Exit(get_help_text())),
        Some(first) => Err(format!(
            "Unexpected argument: {} (bounds are given with --lon=<a,b> and --lat=<a,b>)",
            first
        )
        .into()),
    }
}

fn apply_option(
    name: &str,
    value: Option<&str>,
    parsed: &mut ParsedArgs,
    applied: &mut HashSet<&'static str>,
) -> CliResult<()> {
    let Some(spec) = OPTION_SPECS.iter().find(|s| s.name == name) else {
        return Err(format!("Unknown option: --{}", name).into());
    };

    match spec.kind {
        OptKind::Value(handler) => {
            if applied.contains(spec.name) {
                return Err(format!(
                    "error: the argument '--{}' cannot be used multiple times",
                    spec.name
                )
                .into());
            }
            let val = required_value(spec.name, value)?;
            handler(Some(val), parsed)?;
        }
        OptKind::Flag(handler) => {
            if value.is_some() {
                return Err(format!("Option --{} does not take a value", spec.name).into());
            }
            handler(None, parsed)?;
        }
    }

    applied.insert(spec.name);
    Ok(())
}

fn required_value<'a>(flag: &'static str, value: Option<&'a str>) -> CliResult<&'a str> {
    value.ok_or_else(|| CliError::from(format!("Option --{} requires a value", flag)))
}

/// Split `a,b` (or a lone `b`) into raw bounds; conversion happens once the
/// input unit is known.
fn parse_bounds(value: &str) -> Vec<Bound> {
    value
        .split(BOUND_LIST_SEPARATOR)
        .map(|part| Bound::Text(part.trim().to_string()))
        .collect()
}

fn get_version_text() -> String {
    format!(
        "skyarea {}\n Build: {} ({})\n Built: {}\n Features: {}",
        env!("CARGO_PKG_VERSION"),
        env!("BUILD_PROFILE"),
        env!("BUILD_TARGET"),
        env!("BUILD_DATE"),
        env!("BUILD_FEATURES")
    )
}

fn get_help_text() -> String {
    let defaults = Parameters::default();
    let formats = OutputFormat::all().join(", ");
    let inputs = InputUnit::ALL.map(|u| u.as_str()).join(", ");
    let outputs = OutputUnit::ALL.map(|u| u.as_str()).join(", ");
    format!(
        r#"skyarea {}
Calculates the sky area (solid angle) of a longitude/latitude rectangle.

Usage:
  skyarea [OPTIONS]

Examples:
  skyarea
  skyarea --lon=129,141 --lat=-2,3 --out-unit=sr
  skyarea --lon=08:36:00,09:24:00 --lat=-02:00:00,03:00:00 --in-unit=sex
  skyarea --lon=360 --lat=-90,90 --format=json

Options:
  --lon=<a[,b]>         Longitude bounds. A single value b means 0,b.
                        Default: 129,141
  --lat=<a[,b]>         Latitude bounds. A single value b means 0,b.
                        Default: -2,3
  --in-unit=<unit>      Unit of the bounds: {}. Default: {}
                        sex reads longitude as H:M:S and latitude as D:M:S.
  --out-unit=<unit>     Unit of the area: {}. Default: {}
  --separator=<sep>     Sexagesimal field separator. Default: {}
  --format=<format>     Output format: {}. Default: {}
  --[no-]headers        Include headers in CSV output. Default: {}
  --[no-]show-inputs    Include the bounds (in degrees) in the output.
  --help                Show this help message and exit.
  --version             Print version information and exit.

Set RUST_LOG=debug to print diagnostics to stderr.
"#,
        env!("CARGO_PKG_VERSION"),
        inputs,
        defaults.region.input_unit,
        outputs,
        defaults.region.output_unit,
        defaults.region.separator,
        formats,
        defaults.output.format,
        defaults.output.headers
    )
}
