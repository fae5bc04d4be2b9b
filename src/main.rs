use anyhow::{Context, Result};
use clap::Parser;
use property_catalog::carousel::{HttpPrefetcher, NoopPrefetcher, Prefetcher};
use property_catalog::format::{
    format_area, format_price, price_suffix_label, status_label, whatsapp_link,
};
use property_catalog::{
    sources, Carousel, Catalog, CatalogConfig, FilterOptions, Slide, TypeFilter,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Browse a listing snapshot from the command line
#[derive(Parser, Debug)]
#[command(name = "property-catalog", version, about)]
struct Cli {
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Snapshot file path or http(s) URL (overrides the config)
    #[arg(long)]
    source: Option<String>,

    /// Free-text query over address, description and category
    #[arg(long, default_value = "")]
    search: String,

    #[arg(long)]
    min_price: Option<f64>,

    #[arg(long)]
    max_price: Option<f64>,

    /// Minimum number of bedrooms
    #[arg(long)]
    bedrooms: Option<u32>,

    /// all, sale or rent
    #[arg(long = "type", default_value = "all")]
    property_type: TypeFilter,

    /// all or a category code (house, apartment, land, commercial, rural, other)
    #[arg(long, default_value = "all")]
    category: String,

    #[arg(long, default_value = "")]
    neighborhood: String,

    /// Print the result as JSON instead of a list
    #[arg(long)]
    json: bool,

    /// Also write the result as JSON to this file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Open the viewer for this listing id and walk through its slides
    #[arg(long)]
    open: Option<String>,
}

impl Cli {
    fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            search: self.search.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
            bedrooms: self.bedrooms,
            property_type: self.property_type,
            category: self.category.clone(),
            neighborhood: self.neighborhood.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so --json output stays clean
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CatalogConfig::load(cli.config.as_deref()).context("Failed to load config")?;

    let location = cli
        .source
        .clone()
        .or_else(|| config.source.clone())
        .context("No listing source given (use --source or CATALOG_SOURCE)")?;

    let source = sources::from_location(&location)?;
    let catalog = Catalog::load(source.as_ref())
        .await
        .with_context(|| format!("Failed to load listings from {}", location))?;

    let opts = cli.filter_options();
    let view = catalog.view(&opts);
    info!(
        "{} of {} listings match ({} filters active)",
        view.len(),
        catalog.len(),
        opts.active_count()
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        for (i, record) in view.iter().enumerate() {
            let suffix = price_suffix_label(record).unwrap_or_default();
            println!(
                "{}. {} ({} {})",
                i + 1,
                record.location,
                format_price(record.price),
                suffix
            );
            println!(
                "   [{}] {} quartos, {} banheiros, {}",
                status_label(record),
                record.bedrooms,
                record.bathrooms,
                format_area(record.area, record.area_unit)
            );
            if !record.neighborhood.is_empty() {
                println!("   Bairro: {}", record.neighborhood);
            }
            println!("   ID: {}", record.id);
            println!();
        }
        if view.is_empty() {
            println!("Nenhum imóvel encontrado.");
        }
    }

    if let Some(path) = &cli.output {
        let json = serde_json::to_string_pretty(&view)?;
        tokio::fs::write(path, json).await?;
        info!("Saved {} listings to {}", view.len(), path.display());
    }

    if let Some(id) = &cli.open {
        let record = catalog
            .get(id)
            .with_context(|| format!("No listing with id {}", id))?;

        if !record.is_viewable() {
            warn!("Listing {} has no photos or video to show", id);
            return Ok(());
        }

        let prefetcher: Arc<dyn Prefetcher> = if config.carousel.prefetch {
            Arc::new(HttpPrefetcher::new()?)
        } else {
            Arc::new(NoopPrefetcher)
        };
        let mut carousel = Carousel::for_record(record, &config.carousel, prefetcher)?;

        for _ in 0..carousel.total_slides() {
            match carousel.current_slide() {
                Slide::Photo(url) => println!("{}  {}", carousel.counter_label(), url),
                Slide::Video(video) => match video.embed_url() {
                    Some(embed) => println!("{}  video: {}", carousel.counter_label(), embed),
                    None => println!("{}  video indisponível", carousel.counter_label()),
                },
            }
            carousel.next();
        }

        if !config.site.whatsapp.is_empty() {
            println!("WhatsApp: {}", whatsapp_link(record, &config.site));
        }
    }

    Ok(())
}
