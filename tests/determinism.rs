use chrono::{DateTime, Duration, TimeZone, Utc};
use frontpage_core::article::{Article, Category};
use frontpage_core::edition::Edition;
use frontpage_core::interest::{InterestMap, InterestTracker, MemoryStore};
use frontpage_core::organizer::{FrontPageOrganizer, LayoutCache};
use frontpage_core::types::{ArticleId, FrontPageLayout, ViewerId};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

fn make_article(id: &str, category: Category, age: Duration, likes: usize) -> Article {
    Article::new(id, category)
        .with_created_at(now() - age)
        .with_likes((0..likes).map(|i| format!("viewer-{i}")))
}

fn sample_articles() -> Vec<Article> {
    vec![
        make_article("lead", Category::Politics, Duration::days(1), 120),
        make_article("quiet", Category::Finance, Duration::hours(8), 1),
        make_article("busy", Category::Finance, Duration::hours(8), 6),
        make_article("fresh", Category::Tech, Duration::minutes(20), 0),
        make_article("old", Category::World, Duration::days(40), 3),
    ]
}

#[test]
fn identical_inputs_produce_identical_layouts_and_versions() {
    let articles = sample_articles();
    let interests: InterestMap = [(Category::Finance, 4)].into_iter().collect();
    let organizer = FrontPageOrganizer::default();

    let first = organizer.organize(&articles, &interests, now());
    let second = organizer.organize(&articles.clone(), &interests.clone(), now());

    assert_eq!(first, second);
    assert_eq!(first.version(), second.version());
    assert!(first.version().as_str().starts_with("sha256:"));
    assert_eq!(first.version().as_str().len(), "sha256:".len() + 64);
}

#[test]
fn version_distinguishes_partitions() {
    let a = FrontPageLayout {
        hero: vec![ArticleId::from("x")],
        trending: vec![ArticleId::from("y")],
        grid: vec![ArticleId::from("z")],
    };
    let b = FrontPageLayout {
        hero: vec![ArticleId::from("x")],
        trending: vec![ArticleId::from("y"), ArticleId::from("z")],
        grid: vec![],
    };
    assert_ne!(a.version(), b.version());
}

#[test]
fn tracked_interests_feed_the_organizer() {
    let articles = sample_articles();
    let organizer = FrontPageOrganizer::default();
    let tracker = InterestTracker::new(MemoryStore::new());

    let before = organizer.organize(&articles, &tracker.interests(), now());
    assert_eq!(before.trending[0].as_str(), "fresh");

    for _ in 0..999 {
        tracker.track(Category::Finance);
    }
    let after = organizer.organize(&articles, &tracker.interests(), now());

    assert_eq!(after.hero, before.hero);
    assert_eq!(after.trending[0].as_str(), "busy");
}

#[test]
fn later_now_ages_out_breaking_boost() {
    let articles = sample_articles();
    let organizer = FrontPageOrganizer::default();

    let at_publish = organizer.organize(&articles, &InterestMap::new(), now());
    let next_day = organizer.organize(&articles, &InterestMap::new(), now() + Duration::days(1));

    assert_eq!(at_publish.trending[0].as_str(), "fresh");
    assert_ne!(next_day.trending[0].as_str(), "fresh");
}

#[test]
fn layout_cache_ignores_likes_but_follows_count_and_edition() {
    let mut articles = sample_articles();
    let interests = InterestMap::new();
    let mut cache = LayoutCache::default();

    let initial = cache
        .refresh(&articles, Edition::TopOfDay, &interests, now())
        .clone();
    let initial_version = cache.version().unwrap();

    // A like that would reorder a fresh organize.
    let viewer = ViewerId::from("anon_abc");
    for i in 0..200 {
        articles[1].toggle_like(&ViewerId::from(format!("fan-{i}")));
    }
    assert!(articles[1].toggle_like(&viewer));
    let fresh = FrontPageOrganizer::default().organize(&articles, &interests, now());
    assert_ne!(fresh, initial);

    let held = cache.refresh(&articles, Edition::TopOfDay, &interests, now()).clone();
    assert_eq!(held, initial);
    assert_eq!(cache.version().unwrap(), initial_version);

    // Edition change re-organizes.
    let reedited = cache
        .refresh(&articles, Edition::AllTimeClassics, &interests, now())
        .clone();
    assert_eq!(reedited, fresh);

    // New article re-organizes.
    articles.push(make_article("late", Category::Sports, Duration::hours(30), 0));
    let grown = cache
        .refresh(&articles, Edition::AllTimeClassics, &interests, now())
        .clone();
    assert_eq!(grown.len(), articles.len());

    cache.invalidate();
    assert!(cache.current().is_none());
}

#[test]
fn toggle_like_adds_then_removes() {
    let mut article = Article::new("t", Category::Gossip);
    let viewer = ViewerId::from("u-1");

    assert!(article.toggle_like(&viewer));
    assert!(article.is_liked_by(&viewer));
    assert_eq!(article.like_count(), 1);

    assert!(!article.toggle_like(&viewer));
    assert!(!article.is_liked_by(&viewer));
    assert_eq!(article.like_count(), 0);
}
