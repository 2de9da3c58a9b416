use chrono::{DateTime, Duration, TimeZone, Utc};
use frontpage_core::article::{Article, Category};
use frontpage_core::config::CurationConfig;
use frontpage_core::interest::InterestMap;
use frontpage_core::organizer::{organize_front_page, FrontPageOrganizer, HeroSource};
use frontpage_core::types::{ArticleId, FrontPageLayout};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

fn make_article(id: &str, category: Category, age: Duration, likes: usize) -> Article {
    Article::new(id, category)
        .with_created_at(now() - age)
        .with_likes((0..likes).map(|i| format!("viewer-{i}")))
}

fn ids(raw: &[&str]) -> Vec<ArticleId> {
    raw.iter().map(|s| ArticleId::from(*s)).collect()
}

#[test]
fn empty_input_yields_empty_layout() {
    let layout = organize_front_page(&[], &InterestMap::new(), now());
    assert_eq!(layout, FrontPageLayout::empty());
    assert!(layout.hero.is_empty());
    assert!(layout.trending.is_empty());
    assert!(layout.grid.is_empty());
}

#[test]
fn mega_hit_leads_and_breaking_story_tops_trending() {
    let articles = vec![
        make_article("b", Category::Gossip, Duration::minutes(30), 5),
        make_article("a", Category::Gossip, Duration::days(2), 50),
        make_article("c", Category::Gossip, Duration::days(10), 500),
    ];

    let report =
        FrontPageOrganizer::default().organize_with_report(&articles, &InterestMap::new(), now());

    assert_eq!(report.hero_source, Some(HeroSource::AttentionVelocity));
    assert_eq!(report.layout.hero, ids(&["c"]));
    // b: 6 / 2.5^1.5 * 5 ~ 7.59; a: 51 / 50^1.5 ~ 0.144
    assert_eq!(report.layout.trending, ids(&["b", "a"]));
    assert!(report.layout.grid.is_empty());
}

#[test]
fn all_fresh_articles_fall_back_to_most_liked() {
    let articles = vec![
        make_article("first", Category::Tech, Duration::minutes(10), 3),
        make_article("second", Category::Tech, Duration::minutes(20), 9),
        make_article("third", Category::Tech, Duration::minutes(40), 9),
        make_article("fourth", Category::Tech, Duration::minutes(50), 1),
    ];

    let report =
        FrontPageOrganizer::default().organize_with_report(&articles, &InterestMap::new(), now());

    assert_eq!(report.hero_source, Some(HeroSource::MostLiked));
    // Tie on likes goes to the earlier article.
    assert_eq!(report.layout.hero, ids(&["second"]));
    assert!(!report.layout.trending.contains(&ArticleId::from("second")));
    assert_eq!(report.layout.trending.len(), 3);
    assert!(report.layout.grid.is_empty());
}

#[test]
fn single_article_becomes_hero_even_when_fresh() {
    let articles = vec![make_article("only", Category::Satire, Duration::minutes(1), 0)];
    let layout = organize_front_page(&articles, &InterestMap::new(), now());

    assert_eq!(layout.hero, ids(&["only"]));
    assert!(layout.trending.is_empty());
    assert!(layout.grid.is_empty());
}

#[test]
fn eligible_hero_wins_over_more_liked_fresh_article() {
    let articles = vec![
        make_article("viral-but-fresh", Category::World, Duration::minutes(15), 10_000),
        make_article("steady", Category::World, Duration::hours(6), 2),
    ];

    let layout = organize_front_page(&articles, &InterestMap::new(), now());
    assert_eq!(layout.hero, ids(&["steady"]));
    assert_eq!(layout.trending, ids(&["viral-but-fresh"]));
}

#[test]
fn equal_hero_scores_keep_input_order() {
    let articles = vec![
        make_article("x", Category::Finance, Duration::hours(10), 4),
        make_article("y", Category::Finance, Duration::hours(10), 4),
    ];
    let layout = organize_front_page(&articles, &InterestMap::new(), now());
    assert_eq!(layout.hero, ids(&["x"]));
}

#[test]
fn trending_takes_three_and_grid_takes_the_rest() {
    let articles: Vec<Article> = (0..8)
        .map(|i| {
            let likes = 10 - i as usize;
            make_article(&format!("art-{i}"), Category::Sports, Duration::hours(3 + i), likes)
        })
        .collect();

    let layout = organize_front_page(&articles, &InterestMap::new(), now());

    assert_eq!(layout.hero.len(), 1);
    assert_eq!(layout.trending.len(), 3);
    assert_eq!(layout.grid.len(), 4);
    assert_eq!(layout.len(), articles.len());
}

#[test]
fn interests_lift_matching_categories() {
    let articles = vec![
        make_article("lead", Category::Politics, Duration::days(1), 400),
        make_article("sports", Category::Sports, Duration::hours(6), 3),
        make_article("tech", Category::Tech, Duration::hours(6), 3),
    ];

    let neutral = organize_front_page(&articles, &InterestMap::new(), now());
    assert_eq!(neutral.trending, ids(&["sports", "tech"]));

    let tech_fan: InterestMap = [(Category::Tech, 9)].into_iter().collect();
    let personalized = organize_front_page(&articles, &tech_fan, now());
    assert_eq!(personalized.hero, ids(&["lead"]));
    assert_eq!(personalized.trending, ids(&["tech", "sports"]));
}

#[test]
fn interests_never_change_the_hero() {
    let articles = vec![
        make_article("lead", Category::Politics, Duration::days(1), 400),
        make_article("fan-favourite", Category::Celebrity, Duration::days(1), 300),
    ];
    let superfan: InterestMap = [(Category::Celebrity, 1_000_000)].into_iter().collect();

    let layout = organize_front_page(&articles, &superfan, now());
    assert_eq!(layout.hero, ids(&["lead"]));
}

#[test]
fn articles_past_the_cap_are_appended_untouched() {
    // Newest first, as the content store pages them.
    let articles: Vec<Article> = (0..600)
        .map(|i| {
            make_article(
                &format!("art-{i:03}"),
                Category::Gossip,
                Duration::minutes(90 + i as i64 * 30),
                (i * 7) % 13,
            )
        })
        .collect();

    let report =
        FrontPageOrganizer::default().organize_with_report(&articles, &InterestMap::new(), now());
    assert_eq!(report.candidates_considered, 500);
    assert_eq!(report.passed_through, 100);

    let layout = report.layout;
    let tail: Vec<ArticleId> = articles[500..].iter().map(|a| a.id.clone()).collect();
    assert_eq!(&layout.grid[layout.grid.len() - 100..], tail.as_slice());
    assert_eq!(layout.len(), 600);

    let hero = layout.hero_id().unwrap();
    let hero_index = articles.iter().position(|a| &a.id == hero).unwrap();
    assert!(hero_index < 500, "hero must come from the capped candidates");
}

#[test]
fn cap_and_trending_slots_are_configurable() {
    let mut config = CurationConfig::v0();
    config.limits.max_candidates = 4;
    config.limits.trending_slots = 2;

    let articles: Vec<Article> = (0..7)
        .map(|i| {
            let likes = 7 - i as usize;
            make_article(&format!("n{i}"), Category::Science, Duration::hours(2 + i), likes)
        })
        .collect();

    let layout = FrontPageOrganizer::new(config).organize(&articles, &InterestMap::new(), now());

    assert_eq!(layout.hero.len(), 1);
    assert_eq!(layout.trending.len(), 2);
    assert_eq!(layout.grid.len(), 1 + 3);
    assert_eq!(&layout.grid[1..], ids(&["n4", "n5", "n6"]).as_slice());
}

#[test]
fn resolve_maps_ids_back_and_skips_missing() {
    let articles = vec![
        make_article("lead", Category::Politics, Duration::days(1), 40),
        make_article("next", Category::Politics, Duration::hours(5), 2),
    ];
    let mut layout = organize_front_page(&articles, &InterestMap::new(), now());
    layout.grid.push(ArticleId::from("deleted"));

    let resolved = layout.resolve(&articles);
    assert_eq!(resolved.hero().map(|a| a.id.as_str()), Some("lead"));
    assert_eq!(resolved.trending.len(), 1);
    assert!(resolved.grid.is_empty());
}

#[test]
fn offset_less_created_at_competes_for_hero_on_its_real_age() {
    let mut veteran = Article::new("veteran", Category::World)
        .with_likes((0..50).map(|i| format!("viewer-{i}")));
    veteran.created_at = Some("2024-05-20T08:00:00".to_string());

    let articles = vec![
        make_article("rival-1", Category::World, Duration::days(1), 1),
        veteran,
        make_article("rival-2", Category::World, Duration::days(1), 1),
    ];

    let layout = organize_front_page(&articles, &InterestMap::new(), now());
    assert_eq!(layout.hero, ids(&["veteran"]));
}
