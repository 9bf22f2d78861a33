// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    if let Some(("list", sub)) = m.subcommand() {
        let all = categories::all();
        if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &all)? {
            let rows = all
                .iter()
                .map(|c| {
                    vec![
                        c.name.to_string(),
                        c.color.to_string(),
                        c.background.to_string(),
                        c.icon.to_string(),
                    ]
                })
                .collect();
            println!(
                "{}",
                pretty_table(&["Category", "Color", "Background", "Icon"], rows)
            );
        }
    }
    Ok(())
}
