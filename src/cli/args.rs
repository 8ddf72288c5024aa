//! Command-line argument structures for the `trapdecode` tool.

use clap::{Parser, ValueEnum};
use std::io::Read;
use std::path::PathBuf;

use crate::format::hex;
use crate::options::{DecodeOptions, IntegerEncoding, TimeTicksFormat, UnknownValuePolicy};

/// Output format for CLI tools.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary.
    #[default]
    Human,
    /// Raw tab-separated output for scripting.
    Raw,
}

/// Where the trap bytes come from.
#[derive(Debug, Parser)]
pub struct InputArgs {
    /// File holding one trap datagram; reads stdin when omitted or "-".
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Input is a hex dump rather than raw bytes (whitespace ignored).
    #[arg(short = 'x', long = "hex")]
    pub hex: bool,
}

impl InputArgs {
    fn is_stdin(&self) -> bool {
        self.file.as_ref().is_none_or(|p| p.as_os_str() == "-")
    }

    /// Name of the input for log output.
    pub fn source_name(&self) -> String {
        match &self.file {
            Some(path) if !self.is_stdin() => path.display().to_string(),
            _ => "<stdin>".to_string(),
        }
    }

    /// Read the input and return the datagram bytes.
    pub fn read(&self) -> Result<Vec<u8>, String> {
        let raw = match &self.file {
            Some(path) if !self.is_stdin() => std::fs::read(path)
                .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?,
            _ => {
                let mut buf = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut buf)
                    .map_err(|e| format!("cannot read stdin: {}", e))?;
                buf
            }
        };

        if self.hex {
            parse_hex_input(&raw)
        } else {
            Ok(raw)
        }
    }
}

/// Decode hex dump text into bytes.
pub fn parse_hex_input(raw: &[u8]) -> Result<Vec<u8>, String> {
    let text = std::str::from_utf8(raw).map_err(|_| "hex input is not valid UTF-8".to_string())?;
    hex::decode(text).map_err(|e| format!("invalid hex input: {}", e))
}

/// Decode behaviour switches.
#[derive(Debug, Parser)]
pub struct DecodeArgs {
    /// Decode INTEGER values as two's-complement.
    #[arg(long = "signed-integers")]
    pub signed_integers: bool,

    /// Render the time-stamp as a single big-endian number.
    #[arg(long = "numeric-timeticks")]
    pub numeric_timeticks: bool,

    /// Fail on varbind values of unsupported type instead of keeping raw bytes.
    #[arg(long = "reject-unknown")]
    pub reject_unknown: bool,
}

impl DecodeArgs {
    /// Build the decode options selected on the command line.
    pub fn options(&self) -> DecodeOptions {
        let mut opts = DecodeOptions::new();
        if self.signed_integers {
            opts = opts.integer_encoding(IntegerEncoding::Signed);
        }
        if self.numeric_timeticks {
            opts = opts.time_ticks(TimeTicksFormat::BigEndian);
        }
        if self.reject_unknown {
            opts = opts.unknown_value(UnknownValuePolicy::Reject);
        }
        opts
    }
}

/// Output control arguments.
#[derive(Debug, Parser)]
pub struct OutputArgs {
    /// Output format: human or raw.
    #[arg(short = 'O', long = "output", default_value = "human")]
    pub format: OutputFormat,

    /// Enable debug logging (snmp_trapv1=debug).
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,

    /// Enable trace logging (snmp_trapv1=trace).
    #[arg(short = 'D', long = "trace")]
    pub trace: bool,
}

impl OutputArgs {
    /// Initialize tracing based on debug/trace flags.
    pub fn init_tracing(&self) {
        use tracing_subscriber::EnvFilter;

        let filter = if self.trace {
            "snmp_trapv1=trace"
        } else if self.debug {
            "snmp_trapv1=debug"
        } else {
            "snmp_trapv1=warn"
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_writer(std::io::stderr)
            .try_init();
    }
}
