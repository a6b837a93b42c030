//! mibc-get: retrieve one or more OID values from an agent.
//!
//! Part of the mibcore CLI utilities.

use std::process::ExitCode;

use clap::Parser;

use mibcore::cli::args::{CommonArgs, OutputArgs};
use mibcore::cli::output::{write_error, write_result};
use mibcore::{Dispatcher, NullConnector};

/// Retrieve one or more OID values.
#[derive(Debug, Parser)]
#[command(name = "mibc-get", version, about)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// OIDs to retrieve (dotted notation).
    #[arg(required = true, value_name = "OID")]
    oids: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    args.output.init_tracing();

    let dispatcher = Dispatcher::new(args.common.manager_config(), NullConnector);

    let mut failed = false;
    for oid in &args.oids {
        match dispatcher
            .get(oid, &args.common.agent, &args.common.community)
            .await
        {
            Ok(result) => {
                if let Err(e) = write_result(&result, args.output.json) {
                    eprintln!("Error writing output: {e}");
                    failed = true;
                }
            }
            Err(err) => {
                write_error(&err, args.output.json);
                failed = true;
            }
        }
    }

    dispatcher.registry().close_all().await;

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
