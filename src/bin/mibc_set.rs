//! mibc-set: write a value to an agent's MIB.
//!
//! Part of the mibcore CLI utilities.

use std::process::ExitCode;

use clap::Parser;

use mibcore::cli::args::{CommonArgs, OutputArgs};
use mibcore::cli::output::{write_error, write_result};
use mibcore::{Dispatcher, NullConnector};

/// Write a value to one OID.
#[derive(Debug, Parser)]
#[command(name = "mibc-set", version, about)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Target OID (dotted notation).
    #[arg(value_name = "OID")]
    oid: String,

    /// Value to write.
    #[arg(value_name = "VALUE")]
    value: String,

    /// Declared type of the value (Integer, OctetString, OID, IpAddress,
    /// Counter32, Gauge32, TimeTicks, Opaque, Counter64).
    #[arg(short = 't', long = "type", default_value = "OctetString")]
    kind: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    args.output.init_tracing();

    let dispatcher = Dispatcher::new(args.common.manager_config(), NullConnector);

    let status = match dispatcher
        .set(
            &args.oid,
            &args.value,
            &args.kind,
            &args.common.agent,
            &args.common.community,
        )
        .await
    {
        Ok(ack) => {
            if let Err(e) = write_result(&ack, args.output.json) {
                eprintln!("Error writing output: {e}");
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(err) => {
            write_error(&err, args.output.json);
            ExitCode::FAILURE
        }
    };

    dispatcher.registry().close_all().await;
    status
}
