//! Binary entry point for the `mandelpool` command-line tool.
//!
//! 1. [`mandelpool::cli::parse_args`] parses `std::env::args()` into a [`Cli`].
//! 2. [`run`] builds a render session and palette from the parsed flags, runs
//!    the render (synchronous or asynchronous per `--async`), and writes the
//!    result as a PPM file.
//!
//! All heap allocations are released by Rust's RAII; there is no explicit
//! `free` or `goto _cleanup`.

use std::sync::Arc;

use anyhow::Context;

use mandelpool::cli::Cli;
use mandelpool::{dispatcher, displaylevel, io, session::RenderSession};

/// Execute the render and PPM-write selected by `cli`: argument dispatch
/// happens here, with `anyhow` attaching file/path context to lower-level
/// `std::io::Error` and core [`mandelpool::Error`] failures.
fn run(cli: Cli) -> anyhow::Result<()> {
    let workers = cli.resolved_workers();
    let palette = cli.palette.build();

    displaylevel!(
        3,
        "*** mandelpool v{} — {}x{} region ({}, {})..({}, {}), {} iterations, {} workers, split {} ***",
        mandelpool::VERSION_STRING,
        cli.width,
        cli.height,
        cli.re_min,
        cli.im_min,
        cli.re_max,
        cli.im_max,
        cli.iterations,
        workers,
        cli.split,
    );

    let session = RenderSession::new(
        cli.iterations,
        cli.re_min,
        cli.im_min,
        cli.re_max,
        cli.im_max,
        cli.width,
        cli.height,
        palette,
    )
    .map_err(|e| anyhow::anyhow!(e))
    .context("invalid render configuration")?;

    let session = Arc::new(session);

    if cli.r#async {
        displaylevel!(4, "rendering asynchronously...");
        let handle = dispatcher::render_async(Arc::clone(&session), workers, cli.split);
        handle.join().map_err(|e| anyhow::anyhow!(e))?;
    } else {
        displaylevel!(4, "rendering...");
        dispatcher::render(&session, workers, cli.split).map_err(|e| anyhow::anyhow!(e))?;
    }

    io::write_ppm_file(&session, &cli.output)
        .with_context(|| format!("failed to write PPM output to {}", cli.output))?;

    displaylevel!(2, "wrote {}", cli.output);

    Ok(())
}

fn main() {
    let cli = match mandelpool::cli::parse_args() {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    if let Err(e) = run(cli) {
        eprintln!("mandelpool: {e:#}");
        std::process::exit(1);
    }
}
