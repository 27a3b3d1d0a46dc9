// SPDX-License-Identifier: PMPL-1.0-or-later

//! countries-l10n: add localized country names to a world-map dataset
//!
//! ```text
//! countries-l10n [INPUT] [LINGUAS] [OUTPUT] [--no-minify]
//! ```

use anyhow::Result;
use clap::Parser;
use countries_l10n::diagnostics;
use countries_l10n::locale::CldrTerritories;
use countries_l10n::output::OutputStyle;
use countries_l10n::pipeline::{self, TranslateConfig, DEFAULT_INPUT, DEFAULT_LINGUAS, DEFAULT_OUTPUT};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "countries-l10n")]
#[command(version)]
#[command(about = "Add localized country names for every LINGUAS language to a countries dataset")]
#[command(long_about = None)]
struct Cli {
    /// Country dataset (JSON with a `features` array)
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// LINGUAS file listing the target languages
    #[arg(value_name = "LINGUAS", default_value = DEFAULT_LINGUAS)]
    linguas: PathBuf,

    /// Where to write the translated dataset
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Pretty-print instead of minifying
    #[arg(long)]
    no_minify: bool,

    /// Root of the cldr-localenames-full package (contains main/)
    #[arg(long, env = "CLDR_LOCALENAMES_DIR", default_value = "cldr-localenames-full")]
    cldr_dir: PathBuf,

    /// Check inputs and locale coverage without writing anything
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("countries_l10n=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = TranslateConfig {
        input: cli.input,
        linguas: cli.linguas,
        output: Some(cli.output),
        style: OutputStyle::from_minify(!cli.no_minify),
    };

    if cli.check {
        return diagnostics::run_self_diagnostics(&config, &cli.cldr_dir);
    }

    let provider = CldrTerritories::open(&cli.cldr_dir)?;
    pipeline::run(&config, &provider)?;
    Ok(())
}
