use crate::models::BusinessData;
use chrono::{DateTime, Utc};
use std::fmt::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarFill {
    Full,
    Partial,
    Empty,
}

impl StarFill {
    pub fn glyph(self) -> char {
        match self {
            StarFill::Full => '★',
            StarFill::Partial => '⯪',
            StarFill::Empty => '☆',
        }
    }
}

/// Five stars for `rating`; the star holding a fractional remainder is partial.
pub fn stars(rating: f64) -> [StarFill; 5] {
    let full = rating.floor();
    std::array::from_fn(|i| {
        let i = i as f64;
        if i < full {
            StarFill::Full
        } else if i < rating {
            StarFill::Partial
        } else {
            StarFill::Empty
        }
    })
}

pub fn rating_label(rating: f64) -> &'static str {
    if rating >= 4.5 {
        "Excellent"
    } else if rating >= 4.0 {
        "Very Good"
    } else {
        "Good"
    }
}

pub fn review_volume_label(reviews: u32) -> &'static str {
    if reviews >= 200 {
        "High"
    } else if reviews >= 100 {
        "Moderate"
    } else {
        "Growing"
    }
}

/// `1234567` -> `1,234,567`
pub fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// e.g. `October 19, 2026 at 03:04 PM`
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%B %-d, %Y at %I:%M %p").to_string()
}

/// Everything the dashboard shows, derived from one `BusinessData`.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub name: String,
    pub location: String,
    pub rating_text: String,
    pub stars: [StarFill; 5],
    pub reviews_text: String,
    pub headline: String,
    pub updated: String,
    pub rating_label: &'static str,
    pub review_label: &'static str,
}

impl From<&BusinessData> for DashboardView {
    fn from(data: &BusinessData) -> Self {
        Self {
            name: data.name.clone(),
            location: data.location.clone(),
            rating_text: format!("{:.1}", data.rating),
            stars: stars(data.rating),
            reviews_text: group_thousands(data.reviews),
            headline: data.headline.clone(),
            updated: format_timestamp(&data.timestamp),
            rating_label: rating_label(data.rating),
            review_label: review_volume_label(data.reviews),
        }
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stars: String = self.stars.iter().map(|s| s.glyph()).collect();
        let mut out = String::new();
        writeln!(out, "{}", self.name)?;
        writeln!(out, "{}", self.location)?;
        writeln!(out)?;
        writeln!(out, "Google Rating     {} {}", self.rating_text, stars)?;
        writeln!(out, "Customer Reviews  {} reviews", self.reviews_text)?;
        writeln!(out)?;
        writeln!(out, "SEO Headline")?;
        writeln!(out, "  \"{}\"", self.headline)?;
        writeln!(out, "  Last updated: {}", self.updated)?;
        writeln!(out)?;
        writeln!(out, "Rating Quality    {} customer satisfaction", self.rating_label)?;
        writeln!(out, "Review Volume     {} review activity", self.review_label)?;
        write!(out, "SEO Status        Optimized headline ready for content marketing")?;
        f.write_str(&out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use StarFill::*;

    #[test]
    fn whole_rating_has_no_partial_star() {
        assert_eq!(stars(4.0), [Full, Full, Full, Full, Empty]);
        assert_eq!(stars(5.0), [Full; 5]);
    }

    #[test]
    fn fractional_rating_has_one_partial_star() {
        assert_eq!(stars(3.5), [Full, Full, Full, Partial, Empty]);
        assert_eq!(stars(4.9), [Full, Full, Full, Full, Partial]);
    }

    #[test]
    fn labels_follow_tiers() {
        assert_eq!(rating_label(4.5), "Excellent");
        assert_eq!(rating_label(4.4), "Very Good");
        assert_eq!(rating_label(4.0), "Very Good");
        assert_eq!(rating_label(3.9), "Good");
        assert_eq!(review_volume_label(200), "High");
        assert_eq!(review_volume_label(199), "Moderate");
        assert_eq!(review_volume_label(100), "Moderate");
        assert_eq!(review_volume_label(99), "Growing");
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(549), "549");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn view_renders_business() {
        let data = BusinessData {
            rating: 4.0,
            reviews: 1203,
            headline: "Why Cake & Co is Mumbai's Best Kept Secret in 2025".to_string(),
            name: "Cake & Co".to_string(),
            location: "Mumbai".to_string(),
            timestamp: Utc.with_ymd_and_hms(2026, 10, 19, 15, 4, 0).unwrap(),
        };
        let view = DashboardView::from(&data);
        assert_eq!(view.rating_text, "4.0");
        assert_eq!(view.reviews_text, "1,203");
        assert_eq!(view.updated, "October 19, 2026 at 03:04 PM");

        let text = view.to_string();
        assert!(text.contains("4.0 ★★★★☆"));
        assert!(text.contains("\"Why Cake & Co is Mumbai's Best Kept Secret in 2025\""));
        assert!(text.contains("Very Good customer satisfaction"));
        assert!(text.contains("High review activity"));
    }
}
