//! Mock metrics and headline generation.
//!
//! Every function draws from a caller-supplied random source so the server can
//! run entropy-seeded in production and fixed-seeded under test.

use rand::Rng;

pub const NAME_PLACEHOLDER: &str = "{name}";
pub const LOCATION_PLACEHOLDER: &str = "{location}";

pub const MIN_RATING: f64 = 3.5;
pub const MAX_RATING: f64 = 5.0;
pub const MIN_REVIEWS: u32 = 50;
pub const MAX_REVIEWS: u32 = 549;

pub const HEADLINE_TEMPLATES: [&str; 8] = [
    "Why {name} is {location}'s Best Kept Secret in 2025",
    "{name}: The {location} Destination Everyone's Talking About",
    "Discover Why {name} is Revolutionizing {location}'s Local Scene",
    "How {name} Became {location}'s Most Trusted Local Business",
    "{name}: Where {location} Residents Go for Excellence",
    "The Ultimate Guide to {name} - {location}'s Premier Choice",
    "Why {name} is Setting New Standards in {location}",
    "{name}: Your Go-To Destination in {location} for Quality Service",
];

/// Rating in [3.5, 5.0], rounded to one decimal place.
pub fn generate_rating<R: Rng>(rng: &mut R) -> f64 {
    let raw = rng.gen_range(MIN_RATING..=MAX_RATING);
    (raw * 10.0).round() / 10.0
}

/// Review count in [50, 549].
pub fn generate_review_count<R: Rng>(rng: &mut R) -> u32 {
    rng.gen_range(MIN_REVIEWS..=MAX_REVIEWS)
}

pub fn generate_headline<R: Rng>(rng: &mut R, name: &str, location: &str) -> String {
    let template = HEADLINE_TEMPLATES[rng.gen_range(0..HEADLINE_TEMPLATES.len())];
    fill_template(template, name, location)
}

/// Replace every placeholder in a single pass. Placeholder text that appears
/// inside `name` or `location` is copied through verbatim.
pub fn fill_template(template: &str, name: &str, location: &str) -> String {
    let mut out = String::with_capacity(template.len() + name.len() + location.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        if let Some(after) = tail.strip_prefix(NAME_PLACEHOLDER) {
            out.push_str(name);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(LOCATION_PLACEHOLDER) {
            out.push_str(location);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn is_instance_of_some_template(headline: &str, name: &str, location: &str) -> bool {
        HEADLINE_TEMPLATES
            .iter()
            .any(|t| fill_template(t, name, location) == headline)
    }

    #[test]
    fn rating_stays_in_range_with_one_decimal() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..5_000 {
            let rating = generate_rating(&mut rng);
            assert!((MIN_RATING..=MAX_RATING).contains(&rating), "rating {}", rating);
            let tenths = rating * 10.0;
            assert!((tenths - tenths.round()).abs() < 1e-9, "rating {}", rating);
        }
    }

    #[test]
    fn rating_reaches_both_ends() {
        let mut rng = StdRng::seed_from_u64(2);
        let ratings: Vec<f64> = (0..20_000).map(|_| generate_rating(&mut rng)).collect();
        assert!(ratings.contains(&3.5));
        assert!(ratings.contains(&5.0));
    }

    #[test]
    fn review_count_covers_inclusive_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let counts: Vec<u32> = (0..20_000).map(|_| generate_review_count(&mut rng)).collect();
        assert!(counts.iter().all(|c| (MIN_REVIEWS..=MAX_REVIEWS).contains(c)));
        assert_eq!(counts.iter().min(), Some(&MIN_REVIEWS));
        assert_eq!(counts.iter().max(), Some(&MAX_REVIEWS));
    }

    #[test]
    fn headline_fills_every_placeholder() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..200 {
            let headline = generate_headline(&mut rng, "Cake & Co", "Mumbai");
            assert!(!headline.contains(NAME_PLACEHOLDER));
            assert!(!headline.contains(LOCATION_PLACEHOLDER));
            assert!(headline.contains("Cake & Co"));
            assert!(headline.contains("Mumbai"));
            assert!(is_instance_of_some_template(&headline, "Cake & Co", "Mumbai"));
        }
    }

    #[test]
    fn every_template_is_reachable() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut seen = [false; HEADLINE_TEMPLATES.len()];
        for _ in 0..500 {
            let headline = generate_headline(&mut rng, "N", "L");
            let idx = HEADLINE_TEMPLATES
                .iter()
                .position(|t| fill_template(t, "N", "L") == headline)
                .unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn same_seed_same_output() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        assert_eq!(generate_rating(&mut a), generate_rating(&mut b));
        assert_eq!(generate_review_count(&mut a), generate_review_count(&mut b));
        assert_eq!(
            generate_headline(&mut a, "Bakery", "Pune"),
            generate_headline(&mut b, "Bakery", "Pune")
        );
    }

    #[test]
    fn fill_replaces_repeated_placeholders() {
        assert_eq!(
            fill_template("{name} and {name} in {location}, {location}", "A", "B"),
            "A and A in B, B"
        );
    }

    #[test]
    fn fill_does_not_expand_placeholders_inside_values() {
        assert_eq!(
            fill_template("{name} @ {location}", "{location}", "{name}"),
            "{location} @ {name}"
        );
    }

    #[test]
    fn fill_keeps_unrelated_braces() {
        assert_eq!(fill_template("{x} {name} {", "A", "B"), "{x} A {");
    }
}
