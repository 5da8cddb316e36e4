//! Cat gallery CLI binary.
//!
//! A command-line interface for browsing The Cat API.

use catgallery::cli::{Cli, Command};
use catgallery::{
    find_image, Collection, GalleryClient, Image, ImageSearchQuery, List, Page, PageSize,
    PrettyPrint,
};
use clap::Parser;
use serde::Serialize;
use std::process::ExitCode;
use tabled::{Table, Tabled};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let client = match GalleryClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set CAT_API_KEY environment variable");
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &GalleryClient, cli: Cli) -> catgallery::Result<()> {
    match cli.command {
        Command::Get { id } => handle_get(client, &id, cli.json).await,
        Command::List {
            page,
            limit,
            has_breeds,
            breeds,
        } => {
            let query = ImageSearchQuery {
                has_breeds: has_breeds.then_some(true),
                breed_ids: breeds,
            };
            handle_list(client, &query, page, limit, cli.json).await
        }
        Command::Browse { pages, limit } => handle_browse(client, pages, limit, cli.json).await,
    }
}

fn page_size(limit: Option<u32>) -> catgallery::Result<PageSize> {
    limit.map_or(Ok(PageSize::DEFAULT), PageSize::new)
}

async fn handle_get(client: &GalleryClient, id: &str, json: bool) -> catgallery::Result<()> {
    match find_image(client, id).await {
        Some(image) => output_single(&image, json)?,
        None if json => println!("null"),
        None => {
            println!("← Back to Gallery\n");
            println!("No cat found with id '{id}'.");
        }
    }
    Ok(())
}

async fn handle_list(
    client: &GalleryClient,
    query: &ImageSearchQuery,
    page: Option<u32>,
    limit: Option<u32>,
    json: bool,
) -> catgallery::Result<()> {
    let page = page.unwrap_or(1);
    let images = Image::list_page(client, query, page, page_size(limit)?).await?;
    output_page(&images, json)
}

async fn handle_browse(
    client: &GalleryClient,
    max_pages: u32,
    limit: Option<u32>,
    json: bool,
) -> catgallery::Result<()> {
    let query = ImageSearchQuery::default();
    let mut gallery = Image::load_first(client, &query, page_size(limit)?).await?;

    while gallery.page() < max_pages && gallery.next_page().is_some() {
        // A failed page ends the scroll quietly; what was loaded is still shown.
        if let Err(e) = Image::load_more(client, &query, &mut gallery).await {
            tracing::warn!(error = %e, page = gallery.page() + 1, "stopped loading more cats");
            break;
        }
    }

    output_collection(&gallery, json)
}

fn output_single<T: Serialize + PrettyPrint>(item: &T, json: bool) -> catgallery::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
    } else {
        println!("{}", item.pretty_print());
    }
    Ok(())
}

fn output_page(page: &Page<Image>, json: bool) -> catgallery::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&page.items)?);
    } else {
        let rows: Vec<ImageRow> = page.items.iter().map(ImageRow::from).collect();
        println!("{}", Table::new(rows));
        if page.exhausted {
            println!("\nPage {} (end)", page.page);
        } else {
            println!("\nPage {} (more available)", page.page);
        }
    }
    Ok(())
}

fn output_collection(gallery: &Collection<Image>, json: bool) -> catgallery::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(gallery.items())?);
    } else {
        let rows: Vec<ImageRow> = gallery.items().iter().map(ImageRow::from).collect();
        println!("{}", Table::new(rows));
        if gallery.is_exhausted() {
            println!(
                "\n{} cats over {} pages. No more cats to load!",
                gallery.len(),
                gallery.page()
            );
        } else {
            println!("\n{} cats over {} pages (more available)", gallery.len(), gallery.page());
        }
    }
    Ok(())
}

// Table row types for non-JSON output

#[derive(Tabled)]
struct ImageRow {
    id: String,
    name: String,
    size: String,
    url: String,
}

impl From<&Image> for ImageRow {
    fn from(i: &Image) -> Self {
        Self {
            id: i.detail_id().to_string(),
            name: i.display_name(),
            size: i.dimensions(),
            url: i.url.clone(),
        }
    }
}
