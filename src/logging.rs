// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "LEDGERLENS_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Installs the stderr subscriber.
///
/// The filter comes from `LEDGERLENS_LOG`, then `RUST_LOG`, then `warn`.
/// Calling this twice is harmless; the second install is ignored.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
