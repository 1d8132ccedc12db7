// crates/feed-builder/examples/build_feed.rs
//! Example of assembling a podcast feed

use chrono::{TimeZone, Utc};
use podfeed_builder::{Category, Duration, Enclosure, Episode, Language, MediaType, Podcast};

fn main() {
    println!("=== Podfeed Builder Demo ===\n");

    // Example 1: Minimal feed
    println!("Example 1: Minimal Channel");
    println!("{}", "=".repeat(60));
    minimal_example();

    println!("\n");

    // Example 2: Full feed with episodes
    println!("Example 2: Channel With Episodes");
    println!("{}", "=".repeat(60));
    full_example();
}

fn minimal_example() {
    let podcast = Podcast::new("Classic Audiobooks", "https://example.com/feed.rss");

    match podcast.feed() {
        Ok(feed) => print!("{}", feed),
        Err(e) => eprintln!("Error building feed: {}", e),
    }
}

fn full_example() {
    let chapter_one = Episode::new(
        "Pride and Prejudice - Chapter 1",
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        Enclosure::new(
            "https://example.com/audio/pride-ch1.mp3",
            15_000_000,
            MediaType::Mp3,
        ),
    )
    .with_author("Jane Austen")
    .with_short_summary("It is a truth universally acknowledged...")
    .with_duration(Duration::from_seconds(1_520));

    let chapter_two = Episode::new(
        "Pride and Prejudice - Chapter 2",
        Utc.with_ymd_and_hms(2024, 1, 2, 12, 0, 0).unwrap(),
        Enclosure::new(
            "https://example.com/audio/pride-ch2.m4a",
            14_500_000,
            MediaType::M4a,
        ),
    )
    .with_author("Jane Austen")
    .with_long_summary("<p>Mr. Bennet visits <b>Mr. Bingley</b>.</p>")
    .contains_explicit_material(Some(false));

    let podcast = Podcast::new("Classic Audiobooks", "https://example.com/feed.rss")
        .with_language(Language::English)
        .with_author("Volunteer Narrators")
        .with_owner("Feed Admin", "admin@example.com")
        .with_summary("Public domain audiobooks read by volunteers")
        .with_image("https://example.com/artwork.jpg")
        .with_category(Category::with_subcategory("Arts", "Books"))
        .with_category(Category::with_subcategory("Arts", "Performing Arts"))
        .with_episodes([chapter_one, chapter_two]);

    println!("Episodes (newest first):");
    for (i, episode) in podcast.episodes_newest_first().iter().enumerate() {
        print!("  {}. {}", i + 1, episode.title());
        if let Some(duration) = episode.duration() {
            print!(" [{}]", duration);
        }
        println!(" ({})", episode.publication_date().format("%b %d"));
    }
    println!("{}", "-".repeat(60));

    match podcast.feed() {
        Ok(feed) => print!("{}", feed),
        Err(e) => eprintln!("Error building feed: {}", e),
    }
}
