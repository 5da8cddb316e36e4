//! Basic example demonstrating the gallery client.
//!
//! Run with:
//! ```
//! CAT_API_KEY=your-key cargo run --example basic
//! ```

use catgallery::{find_image, GalleryClient, Image, ImageSearchQuery, List, PageSize};

#[tokio::main]
async fn main() -> catgallery::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    println!("Creating gallery client...");
    let client = GalleryClient::from_env()?;
    println!("Connected to: {}", client.base_url());

    // Load the first page, as the gallery view does on open
    println!("\n--- First page ---");
    let query = ImageSearchQuery::default();
    let mut gallery = Image::load_first(&client, &query, PageSize::DEFAULT).await?;
    for image in gallery.items() {
        println!("  - {} ({})", image.display_name(), image.detail_id());
    }

    // Scroll once
    if gallery.next_page().is_some() {
        println!("\n--- Loading more ---");
        let added = Image::load_more(&client, &query, &mut gallery).await?;
        println!("Added {added} cats, {} loaded in total", gallery.len());
    }

    // Open the detail view for the first image
    if let Some(first) = gallery.items().first() {
        println!("\n--- Detail ---");
        match find_image(&client, first.detail_id()).await {
            Some(image) => {
                println!("{}", image.detail_title());
                println!("{}", image.summary());
            }
            None => println!("That cat wandered off."),
        }
    }

    Ok(())
}
