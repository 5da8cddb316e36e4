//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the catgallery binary.

use clap::{Parser, Subcommand};

/// Cat gallery command-line interface.
#[derive(Parser, Debug)]
#[command(name = "catgallery", about = "Browse The Cat API from the terminal", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the detail view of a single image.
    Get {
        /// The image id.
        id: String,
    },

    /// List a single page of images.
    List {
        /// Page number.
        #[arg(long)]
        page: Option<u32>,

        /// Number of images per page.
        #[arg(long)]
        limit: Option<u32>,

        /// Only list images with breed metadata.
        #[arg(long)]
        has_breeds: bool,

        /// Comma separated breed ids to filter by.
        #[arg(long)]
        breeds: Option<String>,
    },

    /// Load the gallery page after page until it runs out.
    Browse {
        /// Maximum number of pages to load.
        #[arg(long, default_value = "3")]
        pages: u32,

        /// Number of images per page.
        #[arg(long)]
        limit: Option<u32>,
    },
}
