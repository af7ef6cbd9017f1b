//! `vaxreg catalog [--json]`: print the fixed vaccine catalog.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Args;

use vaxreg_core::catalog;

use crate::render;

/// Arguments for `vaxreg catalog`.
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl CatalogArgs {
    pub fn run(self) -> Result<()> {
        let mut out = io::stdout().lock();
        if self.json {
            let payload = serde_json::to_string_pretty(&catalog::STANDARD[..])
                .context("failed to serialize catalog JSON")?;
            writeln!(out, "{payload}").context("failed to write to stdout")?;
            return Ok(());
        }
        render::catalog_table(&mut out, &catalog::STANDARD).context("failed to write to stdout")
    }
}
