use crate::insight::models::{BusinessData, HeadlineResponse};
use rand::Rng;

pub const NAME_MARKER: &str = "{name}";
pub const LOCATION_MARKER: &str = "{location}";

// ── Synthesis pools ─────────────────────────────────────────────────

pub const RATINGS: [f64; 8] = [4.1, 4.2, 4.3, 4.4, 4.5, 4.6, 4.7, 4.8];

pub const REVIEW_COUNTS: [u32; 10] = [67, 89, 127, 156, 203, 245, 289, 312, 387, 429];

pub const HEADLINE_TEMPLATES: [&str; 8] = [
    "Why {name} is {location}'s Best Kept Secret in 2025",
    "How {name} Became {location}'s Top-Rated Business This Year",
    "The Ultimate Guide to {name} - {location}'s Premier Destination",
    "{name}: Your Go-To Spot in {location} for Excellence",
    "Discover Why {name} is {location}'s Most Loved Business",
    "From Local Favorite to {location} Legend: The {name} Story",
    "{name} - Where {location} Meets Quality and Service",
    "Breaking: {name} Transforms {location}'s Business Landscape",
];

/// Uniformly pick one entry of a non-empty pool.
pub fn pick<'a, T, R: Rng>(rng: &mut R, pool: &'a [T]) -> &'a T {
    &pool[rng.gen_range(0..pool.len())]
}

/// Substitute every name and location marker in `template`.
///
/// Values are inserted verbatim and never scanned again, so a business
/// called `{location}` keeps its name.
pub fn render_headline(template: &str, name: &str, location: &str) -> String {
    template
        .split(NAME_MARKER)
        .map(|part| part.replace(LOCATION_MARKER, location))
        .collect::<Vec<_>>()
        .join(name)
}

pub fn synthesize_headline<R: Rng>(
    rng: &mut R,
    name: &str,
    location: &str,
) -> HeadlineResponse {
    let template = pick(rng, &HEADLINE_TEMPLATES);
    HeadlineResponse {
        headline: render_headline(template, name, location),
    }
}

pub fn synthesize_business_data<R: Rng>(
    rng: &mut R,
    name: &str,
    location: &str,
) -> BusinessData {
    let rating = *pick(rng, &RATINGS);
    let reviews = *pick(rng, &REVIEW_COUNTS);
    let HeadlineResponse { headline } = synthesize_headline(rng, name, location);

    BusinessData {
        rating,
        reviews,
        headline,
    }
}
