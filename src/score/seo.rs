//! SEO scoring from page markup.
//!
//! Markup-presence heuristics only: no external ranking signals. Five
//! sub-scores, each in `[0, 100]`, averaged with integer division.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::models::{ScoringResult, SeoBreakdown};
use crate::score::clamp_score;

static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("title").expect("Failed to parse title selector - this is a bug")
});

static META_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("meta[name='description']")
        .expect("Failed to parse meta description selector - this is a bug")
});

static META_VIEWPORT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("meta[name='viewport']")
        .expect("Failed to parse viewport selector - this is a bug")
});

static H1_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1").expect("Failed to parse h1 selector - this is a bug"));

static H2_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h2").expect("Failed to parse h2 selector - this is a bug"));

static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img").expect("Failed to parse img selector - this is a bug"));

/// Ideal `<title>` length range in characters.
const TITLE_LENGTH_RANGE: (usize, usize) = (20, 60);
/// Ideal meta description length range in characters.
const DESCRIPTION_LENGTH_RANGE: (usize, usize) = (120, 160);

/// Scores on-page SEO signals from markup.
///
/// Empty markup yields the all-zero breakdown. The composite is
/// `floor(sum_of_five / 5)`, clamped to `[0, 100]`.
pub fn score_seo(markup: &str) -> ScoringResult<SeoBreakdown> {
    if markup.is_empty() {
        return ScoringResult {
            score: 0,
            breakdown: SeoBreakdown::default(),
        };
    }

    let document = Html::parse_document(markup);

    let title_score = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|element| {
            length_score(
                element.text().collect::<String>().trim().chars().count(),
                TITLE_LENGTH_RANGE,
            )
        })
        .unwrap_or(0);

    let meta_description_score = document
        .select(&META_DESCRIPTION_SELECTOR)
        .next()
        .map(|element| {
            let content = element.value().attr("content").unwrap_or("");
            length_score(content.trim().chars().count(), DESCRIPTION_LENGTH_RANGE)
        })
        .unwrap_or(0);

    let has_h1 = document.select(&H1_SELECTOR).next().is_some();
    let has_h2 = document.select(&H2_SELECTOR).next().is_some();
    let heading_score = match (has_h1, has_h2) {
        (true, true) => 100,
        (true, false) => 50,
        _ => 0,
    };

    let viewport_score = if document.select(&META_VIEWPORT_SELECTOR).next().is_some() {
        100
    } else {
        0
    };

    // No-image pages score 0 here, not N/A.
    let mut image_count = 0u32;
    let mut images_with_alt = 0u32;
    for img in document.select(&IMG_SELECTOR) {
        image_count += 1;
        if img
            .value()
            .attr("alt")
            .map(|alt| !alt.trim().is_empty())
            .unwrap_or(false)
        {
            images_with_alt += 1;
        }
    }
    let image_alt_score = if image_count == 0 {
        0
    } else {
        ((images_with_alt as f64 / image_count as f64) * 100.0).round() as u32
    };

    let sum = title_score + meta_description_score + heading_score + viewport_score + image_alt_score;

    ScoringResult {
        score: clamp_score((sum / 5) as i64),
        breakdown: SeoBreakdown {
            title_score,
            meta_description_score,
            heading_score,
            viewport_score,
            image_alt_score,
        },
    }
}

/// 100 when present with length inside `range`, 50 when present but outside,
/// and the caller maps absence to 0.
fn length_score(length: usize, range: (usize, usize)) -> u32 {
    if (range.0..=range.1).contains(&length) {
        100
    } else {
        50
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_sub_score() {
        let ideal = format!("<html><head><title>{}</title></head></html>", "t".repeat(40));
        assert_eq!(score_seo(&ideal).breakdown.title_score, 100);

        let short = "<html><head><title>Short</title></head></html>";
        assert_eq!(score_seo(short).breakdown.title_score, 50);

        let long = format!("<html><head><title>{}</title></head></html>", "t".repeat(80));
        assert_eq!(score_seo(&long).breakdown.title_score, 50);

        let missing = "<html><head></head><body>no title</body></html>";
        assert_eq!(score_seo(missing).breakdown.title_score, 0);
    }

    #[test]
    fn test_meta_description_sub_score() {
        let ideal = format!(
            r#"<html><head><meta name="description" content="{}"></head></html>"#,
            "d".repeat(140)
        );
        assert_eq!(score_seo(&ideal).breakdown.meta_description_score, 100);

        let short = r#"<html><head><meta name="description" content="tiny"></head></html>"#;
        assert_eq!(score_seo(short).breakdown.meta_description_score, 50);

        let missing = "<html><head></head></html>";
        assert_eq!(score_seo(missing).breakdown.meta_description_score, 0);
    }

    #[test]
    fn test_heading_structure_sub_score() {
        let both = "<html><body><h1>a</h1><h2>b</h2></body></html>";
        assert_eq!(score_seo(both).breakdown.heading_score, 100);

        let h1_only = "<html><body><h1>a</h1></body></html>";
        assert_eq!(score_seo(h1_only).breakdown.heading_score, 50);

        let h2_only = "<html><body><h2>b</h2></body></html>";
        assert_eq!(score_seo(h2_only).breakdown.heading_score, 0);

        let neither = "<html><body><p>text</p></body></html>";
        assert_eq!(score_seo(neither).breakdown.heading_score, 0);
    }

    #[test]
    fn test_viewport_sub_score() {
        let with = r#"<html><head><meta name="viewport" content="width=device-width"></head></html>"#;
        assert_eq!(score_seo(with).breakdown.viewport_score, 100);

        let without = "<html><head></head></html>";
        assert_eq!(score_seo(without).breakdown.viewport_score, 0);
    }

    #[test]
    fn test_image_alt_sub_score_is_rounded_percentage() {
        let markup = r#"<html><body>
            <img src="a.png" alt="a">
            <img src="b.png" alt="">
            <img src="c.png">
        </body></html>"#;
        // 1 of 3 images has a non-empty alt: round(33.33) = 33
        assert_eq!(score_seo(markup).breakdown.image_alt_score, 33);
    }

    #[test]
    fn test_no_images_scores_zero_not_na() {
        let markup = "<html><body><p>no images here</p></body></html>";
        assert_eq!(score_seo(markup).breakdown.image_alt_score, 0);
    }

    #[test]
    fn test_empty_markup_is_all_zero() {
        let result = score_seo("");
        assert_eq!(result.score, 0);
        assert_eq!(result.breakdown, SeoBreakdown::default());
    }

    #[test]
    fn test_composite_is_floored_mean_of_five() {
        let markup = format!(
            r#"<html><head>
                <title>{}</title>
                <meta name="viewport" content="width=device-width">
            </head><body><h1>a</h1><h2>b</h2></body></html>"#,
            "t".repeat(40)
        );
        // title 100, description 0, headings 100, viewport 100, images 0
        let result = score_seo(&markup);
        assert_eq!(result.score, 60);
    }

    // Property-based tests using proptest
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_composite_always_in_range(markup in "\\PC{0,200}") {
            let result = score_seo(&markup);
            prop_assert!(result.score <= 100);
            prop_assert!(result.breakdown.image_alt_score <= 100);
        }
    }

    #[test]
    fn test_unparseable_markup_degrades_gracefully() {
        // html5ever parses anything; garbage in means signals absent, not errors
        let result = score_seo("<<<>>> not really <html");
        assert!(result.score <= 100);
        assert_eq!(result.breakdown.title_score, 0);
    }
}
