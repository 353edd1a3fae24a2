//! Fallback font resolution.
//!
//! Each font variant has a primary and a secondary family name. The table is
//! resolved once against the platform font catalog; lookups afterwards only
//! resize the font that was found.

use std::collections::HashMap;

use derive_more::Display;
use log::{debug, warn};

use crate::consts::FONT_PROBE_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum FontVariant {
    Regular,
    Bold,
    Italic,
}

/// Font names to try, in order, for one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFallback {
    pub variant: FontVariant,
    pub primary: String,
    pub secondary: String,
}

impl FontFallback {
    pub fn new(variant: FontVariant, primary: &str, secondary: &str) -> Self {
        Self {
            variant,
            primary: primary.to_string(),
            secondary: secondary.to_string(),
        }
    }
}

/// Fallback table used when none is configured.
pub fn default_fallbacks() -> Vec<FontFallback> {
    vec![
        FontFallback::new(FontVariant::Regular, "Helvetica", "Arial"),
        FontFallback::new(FontVariant::Bold, "Helvetica-Bold", "Arial-BoldMT"),
        FontFallback::new(FontVariant::Italic, "Helvetica-Italic", "Arial-ItalicMT"),
    ]
}

/// Platform font lookup.
pub trait FontCatalog {
    type Font: Clone;

    fn font_named(&self, name: &str, size: f64) -> Option<Self::Font>;

    /// Same face as `font` at another size.
    fn resized(&self, font: &Self::Font, size: f64) -> Self::Font;
}

/// Fonts resolved from a fallback table.
pub struct FallbackFonts<C: FontCatalog> {
    catalog: C,
    fonts: HashMap<FontVariant, C::Font>,
}

impl<C: FontCatalog> FallbackFonts<C> {
    pub fn resolve(catalog: C, fallbacks: &[FontFallback]) -> Self {
        let mut fonts = HashMap::new();

        for fallback in fallbacks {
            let font = catalog
                .font_named(&fallback.primary, FONT_PROBE_SIZE)
                .or_else(|| {
                    debug!("font {} not found, trying {}", fallback.primary, fallback.secondary);
                    catalog.font_named(&fallback.secondary, FONT_PROBE_SIZE)
                });

            match font {
                Some(font) => {
                    fonts.insert(fallback.variant, font);
                }
                None => warn!("no font available for the {} variant", fallback.variant),
            }
        }

        Self { catalog, fonts }
    }

    /// The resolved font for `variant` at `size`, if one was found.
    pub fn font(&self, variant: FontVariant, size: f64) -> Option<C::Font> {
        self.fonts
            .get(&variant)
            .map(|font| self.catalog.resized(font, size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Font {
        name: String,
        size: f64,
    }

    struct Catalog(Vec<&'static str>);

    impl FontCatalog for Catalog {
        type Font = Font;

        fn font_named(&self, name: &str, size: f64) -> Option<Font> {
            self.0.iter().any(|known| *known == name).then(|| Font { name: name.to_string(), size })
        }

        fn resized(&self, font: &Font, size: f64) -> Font {
            Font { name: font.name.clone(), size }
        }
    }

    #[test]
    fn test_primary_preferred() {
        let fonts = FallbackFonts::resolve(Catalog(vec!["Helvetica", "Arial"]), &default_fallbacks());
        let font = fonts.font(FontVariant::Regular, 18.0).unwrap();
        assert_eq!(font, Font { name: "Helvetica".to_string(), size: 18.0 });
    }

    #[test]
    fn test_secondary_used_when_primary_missing() {
        let fonts = FallbackFonts::resolve(Catalog(vec!["Arial-BoldMT"]), &default_fallbacks());
        assert_eq!(
            fonts.font(FontVariant::Bold, 10.0),
            Some(Font { name: "Arial-BoldMT".to_string(), size: 10.0 })
        );
    }

    #[test]
    fn test_missing_variant_yields_none() {
        let fonts = FallbackFonts::resolve(Catalog(vec!["Helvetica"]), &default_fallbacks());
        assert!(fonts.font(FontVariant::Italic, 12.0).is_none());
        assert!(fonts.font(FontVariant::Bold, 12.0).is_none());
        assert!(fonts.font(FontVariant::Regular, 12.0).is_some());
    }
}
