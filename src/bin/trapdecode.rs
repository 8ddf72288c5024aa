//! trapdecode: Decode an SNMPv1 trap datagram.
//!
//! Reads one BER-encoded trap from a file or stdin and prints it.

use bytes::Bytes;
use clap::Parser;
use snmp_trapv1::TrapMessage;
use snmp_trapv1::cli::args::{DecodeArgs, InputArgs, OutputArgs};
use snmp_trapv1::cli::output::write_trap;
use std::process::ExitCode;

/// Decode an SNMPv1 trap captured as raw bytes or a hex dump.
#[derive(Debug, Parser)]
#[command(name = "trapdecode", version, about)]
struct Args {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    decode: DecodeArgs,

    #[command(flatten)]
    output: OutputArgs,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize tracing
    args.output.init_tracing();

    let data = match args.input.read() {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let span = tracing::info_span!("trapdecode", source = %args.input.source_name(), bytes = data.len());
    let _guard = span.enter();

    let msg = match TrapMessage::decode_with(Bytes::from(data), &args.decode.options()) {
        Ok(msg) => msg,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = write_trap(&mut stdout, &msg, args.output.format) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
