// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .value_name("YYYY-MM")
        .help("Calendar month to report on")
}

fn range_arg() -> Arg {
    Arg::new("range")
        .long("range")
        .value_name("SELECTOR")
        .conflicts_with("month")
        .help("last-7-days | this-month | last-3-months | this-year | last-12-months")
}

/// Fields shared by `tx add` and `tx edit`; edit has no implicit type since
/// it replaces the whole record.
fn transaction_fields(cmd: Command, default_type: Option<&'static str>) -> Command {
    let mut kind = Arg::new("type")
        .long("type")
        .value_parser(["expense", "income"]);
    kind = match default_type {
        Some(t) => kind.default_value(t),
        None => kind.required(true),
    };
    cmd.arg(
        Arg::new("amount")
            .long("amount")
            .required(true)
            .allow_hyphen_values(true)
            .help("Positive amount, e.g. 12.50"),
    )
    .arg(
        Arg::new("category")
            .long("category")
            .required(true)
            .help("Category name, e.g. 'Food & Dining'"),
    )
    .arg(
        Arg::new("date")
            .long("date")
            .value_name("YYYY-MM-DD")
            .required(true)
            .help("Transaction date"),
    )
    .arg(Arg::new("description").long("description").help("Free text"))
    .arg(kind)
}

pub fn build_cli() -> Command {
    Command::new("ledgerlens")
        .about("Personal expense ledger with monthly summaries and category breakdowns")
        .version(clap::crate_version!())
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("SQLite ledger file (default: $LEDGERLENS_DB or the platform data dir)"),
        )
        .arg(
            Arg::new("as-of")
                .long("as-of")
                .global(true)
                .value_name("YYYY-MM-DD")
                .help("Reference date used instead of today"),
        )
        .subcommand(Command::new("init").about("Create the ledger database"))
        .subcommand(Command::new("seed").about("Insert a few sample transactions"))
        .subcommand(
            Command::new("tx")
                .about("Record and browse transactions")
                .subcommand(transaction_fields(
                    Command::new("add").about("Record a transaction"),
                    Some("expense"),
                ))
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions")
                        .arg(month_arg())
                        .arg(
                            Arg::new("search")
                                .long("search")
                                .help("Match description or category (case-insensitive)"),
                        )
                        .arg(
                            Arg::new("order")
                                .long("order")
                                .value_parser(["asc", "desc"])
                                .default_value("desc"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("show")
                        .about("Show one transaction")
                        .arg(Arg::new("id").required(true)),
                ))
                .subcommand(transaction_fields(
                    Command::new("edit")
                        .about("Replace every field of a transaction")
                        .arg(Arg::new("id").required(true)),
                    None,
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Derived metrics")
                .subcommand(json_flags(
                    Command::new("summary")
                        .about("Monthly spend/income with changes against the prior month")
                        .arg(month_arg()),
                ))
                .subcommand(json_flags(
                    Command::new("categories")
                        .about("Expense breakdown by category")
                        .arg(month_arg())
                        .arg(range_arg()),
                ))
                .subcommand(json_flags(
                    Command::new("series")
                        .about("Daily or monthly expense/income series")
                        .arg(
                            Arg::new("range")
                                .long("range")
                                .value_name("SELECTOR")
                                .help("last-7-days | this-month | last-3-months | this-year | last-12-months"),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("overview")
                        .about("Total, top category and monthly average")
                        .arg(month_arg())
                        .arg(range_arg()),
                )),
        )
        .subcommand(
            Command::new("category")
                .about("Known categories")
                .subcommand(json_flags(Command::new("list").about("List categories"))),
        )
        .subcommand(
            Command::new("export")
                .about("Export transactions")
                .subcommand(
                    Command::new("csv")
                        .about("Write Date,Amount,Category,Description,Type")
                        .arg(month_arg())
                        .arg(
                            Arg::new("order")
                                .long("order")
                                .value_parser(["asc", "desc"])
                                .help("Sort by date (whole-ledger exports default to desc)"),
                        )
                        .arg(
                            Arg::new("search")
                                .long("search")
                                .help("Only export matching transactions"),
                        )
                        .arg(
                            Arg::new("out")
                                .long("out")
                                .value_name("PATH")
                                .help("Output file (default: expenses-<period>.csv)"),
                        ),
                ),
        )
        .subcommand(
            Command::new("import")
                .about("Import transactions")
                .subcommand(
                    Command::new("csv")
                        .about("Read a file in the export format")
                        .arg(Arg::new("path").long("path").required(true)),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Settings")
                .subcommand(Command::new("get").arg(Arg::new("key")))
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("key").required(true))
                        .arg(Arg::new("value").required(true)),
                ),
        )
}
