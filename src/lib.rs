//! mandelpool — a tiled parallel Mandelbrot rasterizer over a hand-rolled
//! fixed-size worker pool.
//!
//! Rust port of the mandelpool C sources (Christofer Lind, Sebastian
//! Rautila, Adam Risberg, Andreas Widmark): `fifo.c`/`fifo.h` →
//! [`fifo`], `threadpool.c`/`threadpool.h` → [`threadpool`],
//! `colorpalette.c`/`colorpalette.h` → [`palette`], `mandelbrot.c`/
//! `mandelbrot.h` → [`kernel`], [`session`], and [`dispatcher`].

pub mod cli;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod fifo;
pub mod io;
pub mod kernel;
pub mod palette;
pub mod session;
pub mod threadpool;

pub use dispatcher::{render, render_async, RenderHandle};
pub use error::{Error, Result};
pub use fifo::Fifo;
pub use kernel::Region;
pub use palette::Palette;
pub use session::RenderSession;
pub use threadpool::WorkerPool;

pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");
