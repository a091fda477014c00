//! Text and JSON rendering of extracted parameters

use std::io;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::extractor::Signature;
use crate::param::Parameter;

const REST_MARKER: &str = "...";
const DEFAULT_MARKER: &str = " (default)";

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub use_color: bool,
}

/// Formatter for one-parameter-per-line text output.
///
/// Rest parameters keep their `...` marker and defaulted parameters are
/// followed by `(default)`. An empty parameter list prints nothing.
pub struct ParameterFormatter {
    config: OutputConfig,
}

impl ParameterFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    pub fn format(&self, params: &[Parameter]) -> String {
        let mut output = String::new();
        for param in params {
            if param.rest {
                output.push_str(REST_MARKER);
            }
            output.push_str(&param.name);
            if param.has_default {
                output.push_str(DEFAULT_MARKER);
            }
            output.push('\n');
        }
        output
    }

    pub fn print(&self, params: &[Parameter]) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        Self::write_params(&mut stdout, params)
    }

    fn write_params<W: WriteColor>(out: &mut W, params: &[Parameter]) -> io::Result<()> {
        for param in params {
            if param.rest {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
                write!(out, "{}", REST_MARKER)?;
                out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
            } else {
                out.set_color(ColorSpec::new().set_bold(true))?;
            }
            write!(out, "{}", param.name)?;
            out.reset()?;

            if param.has_default {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
                write!(out, "{}", DEFAULT_MARKER)?;
                out.reset()?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

/// Print a signature as pretty-printed JSON to stdout.
pub fn print_json(signature: &Signature) -> io::Result<()> {
    let json = serde_json::to_string_pretty(signature).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Shape;

    fn formatter() -> ParameterFormatter {
        ParameterFormatter::new(OutputConfig { use_color: false })
    }

    #[test]
    fn test_format_plain_parameters() {
        let params = vec![Parameter::plain("a"), Parameter::plain("b")];
        assert_eq!(formatter().format(&params), "a\nb\n");
    }

    #[test]
    fn test_format_rest_and_default() {
        let params = vec![Parameter::defaulted("port"), Parameter::rest("args")];
        assert_eq!(formatter().format(&params), "port (default)\n...args\n");
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(formatter().format(&[]), "");
    }

    #[test]
    fn test_json_shape() {
        let signature = Signature {
            shape: Some(Shape::Regular),
            parameters: vec![Parameter::plain("a")],
        };
        let json = serde_json::to_string_pretty(&signature).unwrap();
        assert!(json.contains("\"shape\": \"regular\""));
        assert!(json.contains("\"name\": \"a\""));
    }
}
