// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::commands::Ctx;
use crate::config::{self, KEYS};
use crate::utils::pretty_table;

pub fn handle(ctx: &Ctx<'_>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("get", sub)) => match sub.get_one::<String>("key") {
            Some(key) => println!("{}", value_of(ctx, key)),
            None => {
                let rows = KEYS
                    .iter()
                    .map(|k| vec![k.to_string(), value_of(ctx, k)])
                    .collect();
                println!("{}", pretty_table(&["Key", "Value"], rows));
            }
        },
        Some(("set", sub)) => {
            let key = sub.get_one::<String>("key").map(String::as_str).unwrap_or("");
            let value = sub.get_one::<String>("value").map(String::as_str).unwrap_or("");
            let stored = config::set(ctx.conn, key, value)?;
            println!("{} = {}", key, stored);
        }
        _ => {}
    }
    Ok(())
}

/// Effective value, defaults included; unknown keys print as empty.
fn value_of(ctx: &Ctx<'_>, key: &str) -> String {
    match key {
        config::CURRENCY_KEY => ctx.settings.currency.clone(),
        config::DEFAULT_RANGE_KEY => ctx.settings.default_range.to_string(),
        _ => String::new(),
    }
}
