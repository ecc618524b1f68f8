use showcase_core::carousel::markup::{placeholder_html, DOT_CLASS};
use showcase_core::carousel::{ActionLabel, FixedMeasure, Post};
use showcase_core::{Carousel, CarouselConfig, LoadError, Phase, TrackContent};

const MEASURE: FixedMeasure = FixedMeasure {
    card_width: 300.0,
    gap: 20.0,
};

fn posts(n: usize) -> Vec<Post> {
    (0..n)
        .map(|i| Post {
            title: format!("Post {}", i),
            slug: format!("post-{}", i),
            date: "2024-03-05".to_string(),
            image: format!("img/{}.png", i),
            tags: vec!["Research".to_string()],
            author: None,
            description: None,
        })
        .collect()
}

fn ready(n: usize) -> Carousel {
    let mut carousel = Carousel::new(CarouselConfig::default());
    carousel.finish_loading(Ok(posts(n)));
    carousel
}

/// Tiny deterministic generator so the sequences below are reproducible
struct Lcg(u64);

impl Lcg {
    fn next_bool(&mut self) -> bool {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.0 >> 33) & 1 == 1
    }
}

#[test]
fn test_index_stays_in_range_for_any_navigation() {
    for n in 0..=6 {
        let mut carousel = ready(n);
        let mut rng = Lcg(n as u64 + 7);
        for _ in 0..200 {
            if rng.next_bool() {
                carousel.next();
            } else {
                carousel.prev();
            }
            let index = carousel.current_index().unwrap();
            assert!(index < n.max(1), "index {} with {} posts", index, n);
        }
    }
}

#[test]
fn test_bounds_are_idempotent() {
    let mut carousel = ready(4);
    for _ in 0..10 {
        carousel.next();
    }
    assert_eq!(carousel.current_index(), Some(3));
    assert!(!carousel.next());
    assert_eq!(carousel.current_index(), Some(3));

    for _ in 0..10 {
        carousel.prev();
    }
    assert_eq!(carousel.current_index(), Some(0));
    assert!(!carousel.prev());
    assert_eq!(carousel.current_index(), Some(0));
}

#[test]
fn test_jump_moves_index_and_active_dot() {
    let mut carousel = ready(6);
    for i in [4, 1, 5, 0] {
        carousel.jump(i);
        assert_eq!(carousel.current_index(), Some(i));
        let layout = carousel.layout(&MEASURE).unwrap();
        assert_eq!(layout.active_dot, i);
        assert!((0..6).all(|dot| layout.is_active(dot) == (dot == i)));
        assert_eq!(layout.offset_px, i as f64 * 320.0);
    }
}

#[test]
fn test_short_swipe_changes_nothing() {
    let mut carousel = ready(6);
    carousel.touch_start(300.0);
    assert!(!carousel.touch_move(260.0));
    assert!(!carousel.touch_move(250.0));
    carousel.touch_end();
    assert_eq!(carousel.current_index(), Some(0));
}

#[test]
fn test_long_left_swipe_advances_once() {
    let mut carousel = ready(6);
    carousel.touch_start(300.0);
    assert!(carousel.touch_move(240.0));
    assert!(!carousel.touch_move(100.0));
    assert!(!carousel.touch_move(0.0));
    carousel.touch_end();
    assert_eq!(carousel.current_index(), Some(1));
}

#[test]
fn test_left_swipe_on_last_slide_is_noop() {
    let mut carousel = ready(2);
    carousel.next();
    carousel.touch_start(300.0);
    assert!(!carousel.touch_move(100.0));
    assert_eq!(carousel.current_index(), Some(1));
}

#[test]
fn test_right_swipe_goes_back() {
    let mut carousel = ready(6);
    carousel.jump(3);
    carousel.touch_start(100.0);
    assert!(carousel.touch_move(151.0));
    assert_eq!(carousel.current_index(), Some(2));
}

#[test]
fn test_ten_posts_render_six_cards() {
    let mut carousel = Carousel::new(CarouselConfig::default());
    let content = carousel.finish_loading(Ok(posts(10)));

    let slugs: Vec<_> = carousel.cards().iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(
        slugs,
        ["post-0", "post-1", "post-2", "post-3", "post-4", "post-5"]
    );

    match content {
        TrackContent::Cards {
            cards_html,
            indicators_html,
            count,
        } => {
            assert_eq!(count, 6);
            assert_eq!(cards_html.matches(r#"class="research-card""#).count(), 6);
            assert_eq!(indicators_html.matches(DOT_CLASS).count(), 6);
            assert!(!cards_html.contains("post-6"));
        }
        other => panic!("expected cards, got {:?}", other),
    }

    let layout = carousel.layout(&MEASURE).unwrap();
    assert!(layout.prev_disabled);
    assert!(!layout.next_disabled);
}

#[test]
fn test_failed_load_shows_only_placeholder() {
    for err in [
        LoadError::Network("offline".to_string()),
        LoadError::Status(404),
        LoadError::Decode(serde_json::from_str::<Vec<Post>>("{").unwrap_err()),
    ] {
        let mut carousel = Carousel::new(CarouselConfig::default());
        let content = carousel.finish_loading(Err(err));

        assert_eq!(
            content,
            TrackContent::Placeholder(placeholder_html("Unable to load insights."))
        );
        assert_eq!(carousel.phase(), Phase::Failed);
        assert!(carousel.cards().is_empty());
        assert_eq!(carousel.layout(&MEASURE), None);
        assert!(!carousel.next());
    }
}

#[test]
fn test_cards_carry_presentation_fields() {
    let mut source = posts(3);
    source[0].tags = vec!["Podcast Episode".to_string()];
    source[1].tags = vec!["Demo Video".to_string()];
    source[2].tags = Vec::new();

    let mut carousel = Carousel::new(CarouselConfig::default());
    carousel.finish_loading(Ok(source));
    let cards = carousel.cards();

    assert_eq!(cards[0].action, ActionLabel::Listen);
    assert_eq!(cards[1].action, ActionLabel::Watch);
    assert_eq!(cards[2].action, ActionLabel::ReadMore);
    assert_eq!(cards[0].primary_tag, "Podcast Episode");
    assert_eq!(cards[2].primary_tag, "Insight");
    assert!(cards.iter().all(|c| c.date_label == "MARCH 5, 2024"));
}

#[test]
fn test_max_posts_override() {
    let config = CarouselConfig {
        max_posts: 2,
        ..CarouselConfig::default()
    };
    let mut carousel = Carousel::new(config);
    carousel.finish_loading(Ok(posts(5)));
    assert_eq!(carousel.cards().len(), 2);
}

#[test]
fn test_sparse_records_still_render() {
    let body = r#"[
        {"title": "Full", "slug": "full", "date": "March 5, 2024", "tags": ["AI"], "image": "a.png"},
        {"title": "Nulls", "slug": "nulls", "date": "2024-3-5", "tags": null, "image": null},
        {"title": "Undated", "slug": "undated"}
    ]"#;
    let loaded = showcase_core::carousel::post::decode_posts(body, 6);

    let mut carousel = Carousel::new(CarouselConfig::default());
    let content = carousel.finish_loading(loaded);
    assert!(matches!(content, TrackContent::Cards { count: 3, .. }));

    let cards = carousel.cards();
    assert_eq!(cards[0].date_label, "MARCH 5, 2024");
    assert_eq!(cards[1].date_label, "MARCH 5, 2024");
    assert_eq!(cards[1].primary_tag, "Insight");
    assert_eq!(cards[1].image, "");
    assert_eq!(cards[2].date_label, "INVALID DATE");
}
