//! mibc-walk: walk an agent's MIB with repeated GETNEXT.
//!
//! Part of the mibcore CLI utilities.

use std::process::ExitCode;

use clap::Parser;

use mibcore::cli::args::{CommonArgs, OutputArgs};
use mibcore::cli::output::{write_error, write_result};
use mibcore::{Dispatcher, ErrorKind, NullConnector, Oid};

/// Walk the MIB starting after the given OID.
#[derive(Debug, Parser)]
#[command(name = "mibc-walk", version, about)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Starting OID (the walk reports everything after it).
    #[arg(value_name = "OID", default_value = "1.3.6.1.2.1.1")]
    start: String,

    /// Maximum number of results.
    #[arg(long, default_value_t = 1000)]
    max: usize,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    args.output.init_tracing();

    let dispatcher = Dispatcher::new(args.common.manager_config(), NullConnector);

    let mut previous = match Oid::parse(&args.start) {
        Ok(oid) => oid,
        Err(err) => {
            write_error(&err, args.output.json);
            return ExitCode::FAILURE;
        }
    };

    let mut cursor = args.start.clone();
    let mut failed = false;

    for _ in 0..args.max {
        match dispatcher
            .get_next(&cursor, &args.common.agent, &args.common.community)
            .await
        {
            Ok(result) => {
                // Stop on a non-increasing OID: the stand-in wraps to the
                // first entry, and a misbehaving agent could loop forever.
                if result.oid <= previous {
                    break;
                }
                if let Err(e) = write_result(&result, args.output.json) {
                    eprintln!("Error writing output: {e}");
                    failed = true;
                    break;
                }
                previous = result.oid.clone();
                cursor = result.oid.to_string();
            }
            Err(err) if err.kind() == ErrorKind::NoSuccessor => break,
            Err(err) => {
                write_error(&err, args.output.json);
                failed = true;
                break;
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
