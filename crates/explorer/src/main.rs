//! Cityquad - store cities in a quadtree, look them up, draw the tree.

use anyhow::Context;
use clap::Parser;
use explorer::{Cli, Config, Session};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they don't interleave with prompts
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    info!("Cityquad v{}", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load_from(&cli.config)?;
    if let Some(output) = cli.output {
        config.render.output = output;
    }
    if cli.no_render {
        config.render.enabled = false;
    }
    let w = &config.world;
    info!("Loaded configuration");
    info!("  World: [{}, {}) x [{}, {})", w.x_min, w.x_max, w.y_min, w.y_max);
    info!("  Capacity: {}", config.index.capacity);
    match config.index.max_depth {
        Some(depth) => info!("  Max depth: {}", depth),
        None => info!("  Max depth: unbounded"),
    }

    let mut index = config.build_index().context("invalid index configuration")?;

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout());
    session.run(&mut index)?;

    info!(
        "Index holds {} cities in {} nodes, depth {}",
        index.len(),
        index.node_count(),
        index.depth()
    );

    if config.render.enabled {
        explorer::write_svg(&index, config.render.size, &config.render.output)
            .with_context(|| format!("writing {}", config.render.output.display()))?;
    }

    Ok(())
}
