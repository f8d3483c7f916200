//! Integration tests for garment analysis and outfit suggestion
//!
//! These tests exercise the public API end to end:
//! - Decoding encoded images and deriving color/pattern attributes
//! - Falling back to caller values when analysis fails
//! - Generating seeded outfit batches from a wardrobe and preferences
//! - Filtering and ranking generated proposals

use std::collections::BTreeSet;
use std::io::Cursor;

use image::{DynamicImage, Rgb, RgbImage};
use outfit_recommender::{
    analyze_garment, analyze_garment_bytes, top_ranked, wardrobe_variety_score, CategoryTag,
    ColorCategory, EngineError, GarmentAttributes, ImageAnalyzer, OccasionTag, PatternCategory,
    ProposalFilter, SeasonTag, StylePreferences, StyleTag, SuggestionEngine, WardrobeItem,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn encode_png(image: RgbImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(image)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}

fn summer_prefs(colors: &[ColorCategory], patterns: &[PatternCategory]) -> StylePreferences {
    let mut prefs = StylePreferences::default();
    prefs.favorite_colors = colors.iter().copied().collect();
    prefs.preferred_patterns = patterns.iter().copied().collect();
    prefs.occasion_preferences.insert(OccasionTag::Casual);
    prefs.seasonal_preferences.insert(SeasonTag::Summer, true);
    prefs
}

fn mixed_wardrobe() -> Vec<WardrobeItem> {
    use CategoryTag::*;
    use ColorCategory as C;
    use PatternCategory as P;
    use SeasonTag as S;

    vec![
        WardrobeItem::new(1, Tops, C::Blue, P::Solid, S::Summer),
        WardrobeItem::new(2, Tops, C::White, P::Striped, S::All),
        WardrobeItem::new(3, Tops, C::Red, P::Plaid, S::Winter),
        WardrobeItem::new(4, Bottoms, C::Black, P::Solid, S::All),
        WardrobeItem::new(5, Bottoms, C::Brown, P::Solid, S::Fall),
        WardrobeItem::new(6, Shoes, C::White, P::Solid, S::All),
        WardrobeItem::new(7, Outerwear, C::Gray, P::Solid, S::Winter),
        WardrobeItem::new(8, Accessories, C::Yellow, P::Floral, S::Spring),
        WardrobeItem::new(9, Dresses, C::Pink, P::PolkaDot, S::Summer),
        WardrobeItem::new(10, Shoes, C::Black, P::Solid, S::Fall),
    ]
}

// ============================================================================
// Image Analysis Tests
// ============================================================================

#[test]
fn test_analyze_encoded_solid_garment() {
    let bytes = encode_png(RgbImage::from_pixel(100, 100, Rgb([200, 30, 30])));
    let attributes = analyze_garment_bytes(&bytes).unwrap();

    assert_eq!(attributes.color, ColorCategory::Red);
    assert_eq!(attributes.pattern, PatternCategory::Solid);
}

#[test]
fn test_analyze_garment_from_file() {
    let path = std::env::temp_dir().join(format!("outfit_recommender_shirt_{}.png", std::process::id()));
    std::fs::write(&path, encode_png(RgbImage::from_pixel(100, 100, Rgb([250, 250, 250])))).unwrap();

    let result = analyze_garment(&path);
    std::fs::remove_file(&path).ok();

    let attributes = result.unwrap();
    assert_eq!(attributes.color, ColorCategory::White);
    assert_eq!(attributes.pattern, PatternCategory::Solid);
}

#[test]
fn test_analyze_busy_corner_is_floral() {
    let grid = RgbImage::from_fn(100, 100, |x, y| {
        if x >= 50 && y >= 50 && (x / 2 + y / 2) % 2 == 0 {
            Rgb([255, 255, 0])
        } else {
            Rgb([10, 10, 10])
        }
    });
    let attributes = ImageAnalyzer::new().analyze_pixels(&grid).unwrap();

    assert_eq!(attributes.color, ColorCategory::Black);
    assert_eq!(attributes.pattern, PatternCategory::Floral);
}

#[test]
fn test_analyze_file_not_found() {
    let result = analyze_garment(std::path::Path::new("nonexistent_file.jpg"));

    match result {
        Err(EngineError::DecodeFailure { .. }) => {}
        other => panic!("Expected DecodeFailure, got: {:?}", other),
    }
}

#[test]
fn test_failed_analysis_keeps_caller_values() {
    let analysis = analyze_garment_bytes(b"not an image").ok();
    assert!(analysis.is_none());

    let resolved = GarmentAttributes::resolve(
        analysis.as_ref(),
        Some(ColorCategory::Green),
        Some(PatternCategory::Plaid),
    );
    assert_eq!(resolved, (Some(ColorCategory::Green), Some(PatternCategory::Plaid)));
}

// ============================================================================
// Suggestion Tests
// ============================================================================

#[test]
fn test_two_item_end_to_end() {
    let items = vec![
        WardrobeItem::new(1, CategoryTag::Tops, ColorCategory::Blue, PatternCategory::Solid, SeasonTag::Summer),
        WardrobeItem::new(2, CategoryTag::Bottoms, ColorCategory::Black, PatternCategory::Solid, SeasonTag::Summer),
    ];
    let prefs = summer_prefs(&[ColorCategory::Blue], &[PatternCategory::Solid]);
    let mut rng = StdRng::seed_from_u64(2024);

    let proposals = SuggestionEngine::new().generate(&items, &prefs, &mut rng);

    // min(6, 2 / 2 + 1) attempts, every one succeeds, no dedup
    assert_eq!(proposals.len(), 2);
    for proposal in &proposals {
        assert_eq!(proposal.item_ids(), &[1, 2]);
        assert_eq!(proposal.occasion(), OccasionTag::Casual);
        assert_eq!(proposal.season(), SeasonTag::Summer);
        assert_eq!(proposal.style(), StyleTag::Casual);
        // 70 + 10 * 1/2 + 10 * 2/2 + 10
        assert_eq!(proposal.score(), 95);
        assert!(proposal.name().ends_with(" Ensemble"));
        assert!(proposal.style_notes().ends_with(
            "The complementary colors create a balanced and visually appealing combination."
        ));
    }
}

#[test]
fn test_all_matching_outfit_scores_100() {
    let items = vec![
        WardrobeItem::new(1, CategoryTag::Tops, ColorCategory::Blue, PatternCategory::Solid, SeasonTag::Summer),
        WardrobeItem::new(2, CategoryTag::Bottoms, ColorCategory::Black, PatternCategory::Solid, SeasonTag::Summer),
    ];
    let prefs = summer_prefs(&[ColorCategory::Blue, ColorCategory::Black], &[PatternCategory::Solid]);
    let mut rng = StdRng::seed_from_u64(1);

    let proposals = SuggestionEngine::new().generate(&items, &prefs, &mut rng);
    assert!(!proposals.is_empty());
    assert!(proposals.iter().all(|p| p.score() == 100));
}

#[test]
fn test_seeded_generation_is_reproducible() {
    let items = mixed_wardrobe();
    let prefs = StylePreferences::default();
    let engine = SuggestionEngine::new();

    let first = engine.generate(&items, &prefs, &mut StdRng::seed_from_u64(99));
    let second = engine.generate(&items, &prefs, &mut StdRng::seed_from_u64(99));
    assert_eq!(first, second);
}

#[test]
fn test_mixed_wardrobe_proposals_are_well_formed() {
    let items = mixed_wardrobe();
    let known: BTreeSet<u64> = items.iter().map(|i| i.id).collect();
    let engine = SuggestionEngine::new();

    for seed in 0..25 {
        let proposals = engine.generate(&items, &StylePreferences::default(), &mut StdRng::seed_from_u64(seed));
        assert!(proposals.len() <= 6);

        for proposal in &proposals {
            let ids = proposal.item_ids();
            let unique: BTreeSet<u64> = ids.iter().copied().collect();
            assert!(ids.len() >= 2 && ids.len() <= 4, "{:?}", ids);
            assert_eq!(unique.len(), ids.len());
            assert!(unique.is_subset(&known));
            assert!([OccasionTag::Casual, OccasionTag::Formal, OccasionTag::Business]
                .contains(&proposal.occasion()));
            assert_ne!(proposal.season(), SeasonTag::All);
            assert!((70..=100).contains(&proposal.score()));
        }
    }
}

#[test]
fn test_insufficient_wardrobe() {
    let engine = SuggestionEngine::new();
    let one = vec![WardrobeItem::new(1, CategoryTag::Tops, ColorCategory::Blue, PatternCategory::Solid, SeasonTag::All)];
    let mut rng = StdRng::seed_from_u64(0);

    assert!(engine.generate(&one, &StylePreferences::default(), &mut rng).is_empty());
    let err = engine.try_generate(&one, &StylePreferences::default(), &mut rng).unwrap_err();
    assert!(err.is_recoverable());
    assert!(err.user_message().contains("at least 2 items"));
}

#[test]
fn test_filter_and_rank_generated_batch() {
    let items = mixed_wardrobe();
    let mut prefs = StylePreferences::default();
    prefs.occasion_preferences = BTreeSet::from([OccasionTag::Party, OccasionTag::Date]);
    let proposals = SuggestionEngine::new().generate(&items, &prefs, &mut StdRng::seed_from_u64(5));

    let parties = ProposalFilter::new().occasion(OccasionTag::Party).apply(&proposals);
    assert!(parties.iter().all(|p| p.occasion() == OccasionTag::Party));
    assert!(parties.windows(2).all(|w| w[0].score() >= w[1].score()));

    let best = top_ranked(&proposals, 1);
    if let Some(best) = best.first() {
        assert!(proposals.iter().all(|p| p.score() <= best.score()));
    }
}

#[test]
fn test_variety_score_of_mixed_wardrobe() {
    // 6 categories (30) + 8 colors (30) + 5 patterns (30) + 5 seasons (10)
    assert_eq!(wardrobe_variety_score(&mixed_wardrobe()), 100);
}

// ============================================================================
// Property Tests
// ============================================================================

fn any_item() -> impl Strategy<Value = WardrobeItem> {
    (
        any::<u64>(),
        prop::sample::select(CategoryTag::ALL),
        prop::sample::select(ColorCategory::ALL),
        prop::sample::select(PatternCategory::ALL),
        prop::sample::select(SeasonTag::ALL),
    )
        .prop_map(|(id, category, color, pattern, season)| {
            WardrobeItem::new(id, category, color, pattern, season)
        })
}

proptest! {
    #[test]
    fn prop_batch_size_is_bounded(items in prop::collection::vec(any_item(), 0..20), seed: u64) {
        let proposals = SuggestionEngine::new().generate(
            &items,
            &StylePreferences::default(),
            &mut StdRng::seed_from_u64(seed),
        );

        if items.len() < 2 {
            prop_assert!(proposals.is_empty());
        } else {
            prop_assert!(proposals.len() <= 6.min(items.len() / 2 + 1));
        }
        for proposal in &proposals {
            prop_assert!(proposal.score() <= 100);
            prop_assert!(proposal.item_ids().len() >= 2);
        }
    }
}
