use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use trailmark::breadcrumbs::Trail;
use trailmark::content::ItemId;
use trailmark::Site;

/// Prints the JSON-LD breadcrumb list for the items of a site.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The root directory of the site, containing `site.toml` and `content/`.
    #[arg(long, env = "TRAILMARK_ROOT", default_value = "demos/breadcrumbs/site")]
    root: PathBuf,

    /// The item to print breadcrumbs for. Prints every item when omitted.
    #[arg(long)]
    item: Option<u64>,

    /// Print compact JSON instead of pretty-printed JSON.
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let site = Site::load(&args.root)?;
    info!(items = site.items().len(), root = %args.root.display(), "loaded site");

    let trails = match args.item {
        Some(id) => {
            let trail = site
                .breadcrumbs(ItemId(id))
                .ok_or_else(|| anyhow!("no item with ID {id}"))?;
            vec![trail]
        }
        None => site
            .items()
            .into_iter()
            .filter_map(|item| site.breadcrumbs(item.id))
            .collect(),
    };

    for trail in &trails {
        println!("{}", render(trail, args.compact)?);
    }

    Ok(())
}

fn render(trail: &Trail, compact: bool) -> Result<String> {
    let json_ld = trail.to_json_ld();

    let rendered = if compact {
        json_ld.to_json_string()?
    } else {
        json_ld.to_json_string_pretty()?
    };

    Ok(rendered)
}
