//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use crate::{Breed, Image, Rating};

/// Placeholder shown for a rating the upstream did not send.
const MISSING_RATING: &str = "-";

/// Trait for human-readable key-value output.
///
/// Implemented by entity types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

/// Render an optional rating as glyphs.
pub fn rating_display(rating: Option<Rating>) -> String {
    rating
        .map(Rating::glyphs)
        .unwrap_or_else(|| MISSING_RATING.to_string())
}

impl PrettyPrint for Breed {
    fn pretty_print(&self) -> String {
        let mut lines = vec![
            "About this Breed".to_string(),
            self.description.clone(),
            String::new(),
            "Characteristics".to_string(),
            format!("Temperament:     {}", self.temperament),
            format!("Origin:          {}", self.origin),
            format!("Life Span:       {}", self.life_span_display()),
            format!("Weight:          {}", self.weight_display()),
            String::new(),
            "Ratings (1-5)".to_string(),
        ];

        for (label, rating) in self.ratings() {
            lines.push(format!("{:<17}{}", format!("{label}:"), rating_display(rating)));
        }

        if let Some(ref wiki) = self.wikipedia_url {
            lines.push(String::new());
            lines.push(format!("Learn more:      {}", wiki));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for Image {
    fn pretty_print(&self) -> String {
        let title = self.detail_title();
        let divider = "─".repeat(title.chars().count().max(30));

        let mut lines = vec![
            title,
            divider,
            self.heading(),
            format!("Image:           {}", self.url),
        ];

        match self.breed() {
            Some(breed) => {
                lines.push(String::new());
                lines.push(breed.pretty_print());
            }
            None => {
                lines.push(format!("Image dimensions: {}", self.dimensions()));
            }
        }

        lines.join("\n")
    }
}
