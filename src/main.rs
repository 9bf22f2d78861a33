// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;

use ledgerlens::commands::{self, Ctx};
use ledgerlens::error::LedgerError;
use ledgerlens::{cli, db, logging};

fn main() -> ExitCode {
    logging::init();
    let matches = cli::build_cli().get_matches();
    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(matches: &clap::ArgMatches) -> Result<()> {
    let path = db::db_path(matches.get_one::<PathBuf>("db").map(PathBuf::as_path))?;
    let conn = db::open_or_init(&path)?;
    let ctx = Ctx::from_matches(&conn, matches)?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", path.display());
        }
        Some(("seed", _)) => commands::seed::handle(&ctx)?,
        Some(("tx", sub)) => commands::transactions::handle(&ctx, sub)?,
        Some(("report", sub)) => commands::reports::handle(&ctx, sub)?,
        Some(("category", sub)) => commands::categories::handle(sub)?,
        Some(("export", sub)) => commands::exporter::handle(&ctx, sub)?,
        Some(("import", sub)) => commands::importer::handle(&ctx, sub)?,
        Some(("config", sub)) => commands::settings::handle(&ctx, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}

/// Caller mistakes are shown as-is; storage failures are logged in full and
/// shown as a generic message.
fn report(e: &anyhow::Error) {
    match e.chain().find_map(|c| c.downcast_ref::<LedgerError>()) {
        Some(le) if !le.is_client_error() => {
            tracing::error!(error = ?e, "ledger failure");
            eprintln!("Error: {}", le.public_message());
        }
        Some(le) => eprintln!("Error: {}", le),
        None => eprintln!("Error: {:#}", e),
    }
}
