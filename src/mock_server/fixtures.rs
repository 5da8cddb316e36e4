//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use crate::{Breed, Image, Rating, Weight};

/// Collection of fixture factories for test data.
pub struct Fixtures;

/// Data set served by a default mock server.
pub struct DefaultScenario {
    pub images: Vec<Image>,
}

impl Fixtures {
    // =========================================================================
    // Breed Fixtures
    // =========================================================================

    /// An Abyssinian with a full set of ratings.
    pub fn abyssinian() -> Breed {
        Breed {
            id: Some("abys".to_string()),
            name: "Abyssinian".to_string(),
            description: "The Abyssinian is easy to care for, and a joy to have in your home."
                .to_string(),
            origin: "Egypt".to_string(),
            temperament: "Active, Energetic, Independent, Intelligent, Gentle".to_string(),
            life_span: "14 - 15".to_string(),
            weight: Weight {
                metric: "3 - 5".to_string(),
                imperial: "7  -  10".to_string(),
            },
            adaptability: Some(Rating::clamped(5)),
            affection_level: Some(Rating::clamped(5)),
            child_friendly: Some(Rating::clamped(3)),
            energy_level: Some(Rating::clamped(5)),
            intelligence: Some(Rating::clamped(5)),
            wikipedia_url: Some("https://en.wikipedia.org/wiki/Abyssinian_(cat)".to_string()),
        }
    }

    /// A Bengal without a Wikipedia link.
    pub fn bengal() -> Breed {
        Breed {
            id: Some("beng".to_string()),
            name: "Bengal".to_string(),
            description: "Bengals are a lot of fun to live with.".to_string(),
            origin: "United States".to_string(),
            temperament: "Alert, Agile, Energetic, Demanding, Intelligent".to_string(),
            life_span: "12 - 15".to_string(),
            weight: Weight {
                metric: "3 - 7".to_string(),
                imperial: "6 - 12".to_string(),
            },
            adaptability: Some(Rating::clamped(5)),
            affection_level: Some(Rating::clamped(5)),
            child_friendly: Some(Rating::clamped(4)),
            energy_level: Some(Rating::clamped(5)),
            intelligence: Some(Rating::clamped(5)),
            wikipedia_url: None,
        }
    }

    // =========================================================================
    // Image Fixtures
    // =========================================================================

    /// An image with no breed metadata.
    pub fn plain_image(id: &str, width: u32, height: u32) -> Image {
        Image {
            id: id.to_string(),
            url: format!("https://cdn2.thecatapi.com/images/{id}.jpg"),
            width,
            height,
            breeds: vec![],
            reference_image_id: None,
        }
    }

    /// An image carrying one breed.
    pub fn breed_image(id: &str, breed: Breed) -> Image {
        let mut image = Self::plain_image(id, 1200, 800);
        image.breeds = vec![breed];
        image
    }

    /// `count` breedless images with ids `cat-000`, `cat-001`, ...
    pub fn numbered_images(count: usize) -> Vec<Image> {
        (0..count)
            .map(|n| Self::plain_image(&format!("cat-{n:03}"), 500, 500))
            .collect()
    }

    // =========================================================================
    // Scenarios
    // =========================================================================

    /// Default data set: 23 images, two of them with breeds.
    ///
    /// With the default page size of 10 this gives two full pages and a
    /// short third page.
    pub fn default_scenario() -> DefaultScenario {
        let mut images = vec![
            Self::breed_image("0XYvRd7oD", Self::abyssinian()),
            Self::breed_image("O3btzLlsO", Self::bengal()),
        ];
        images.extend(Self::numbered_images(21));
        DefaultScenario { images }
    }
}
