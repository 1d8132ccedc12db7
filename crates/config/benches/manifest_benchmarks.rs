//! Benchmarks for the manifest system
//!
//! Run with: cargo bench --package podfeed-config

use criterion::{criterion_group, criterion_main, Criterion};
use podfeed_config::{FeedManifest, ManifestManager};
use std::hint::black_box;
use std::path::Path;
use tempfile::TempDir;

fn large_manifest(episode_count: usize) -> FeedManifest {
    let mut manifest = FeedManifest::template();
    let base = manifest.episodes[0].clone();
    manifest.episodes = (0..episode_count)
        .map(|index| {
            let mut episode = base.clone();
            episode.title = format!("Episode {index}");
            episode.url = format!("https://example.com/episodes/{index}.mp3");
            episode.publication_date += chrono::Duration::days(index as i64);
            episode
        })
        .collect();
    manifest
}

fn bench_manifest_validation(c: &mut Criterion) {
    let manifest = large_manifest(200);

    c.bench_function("manifest_validate_200_episodes", |b| {
        b.iter(|| {
            let result = manifest.validate();
            black_box(result);
        });
    });
}

fn bench_manifest_parse(c: &mut Criterion) {
    let toml_string = toml::to_string(&large_manifest(200)).expect("Failed to serialize");

    c.bench_function("manifest_parse_200_episodes", |b| {
        b.iter(|| {
            let manifest: FeedManifest =
                toml::from_str(black_box(&toml_string)).expect("Failed to parse");
            black_box(manifest);
        });
    });
}

fn bench_manifest_render(c: &mut Criterion) {
    let manifest = large_manifest(200);

    c.bench_function("manifest_render_200_episodes", |b| {
        b.iter(|| {
            let feed = manifest.render(Path::new(".")).expect("Failed to render");
            black_box(feed);
        });
    });
}

fn bench_manifest_save_load(c: &mut Criterion) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let manager =
        ManifestManager::new(temp_dir.path().join("podcast.toml")).expect("Failed to create manager");
    let manifest = large_manifest(50);

    c.bench_function("manifest_save_load_50_episodes", |b| {
        b.iter(|| {
            manager.save(&manifest).expect("Failed to save");
            let loaded = manager.load().expect("Failed to load");
            black_box(loaded);
        });
    });
}

criterion_group!(
    benches,
    bench_manifest_validation,
    bench_manifest_parse,
    bench_manifest_render,
    bench_manifest_save_load
);
criterion_main!(benches);
