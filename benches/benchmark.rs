//! Performance benchmarks for rs-readability.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - A small synthetic article page for microbenchmarks
//! - A page with no article, which always runs all four attempts
//! - Local HTML files from `READABILITY_BENCH_DIR`, when set

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rs_readability::{extract, extract_with_options, Options};
use std::fs;

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Sample Article | Example News</title>
</head>
<body>
    <div id="header">
        <a href="/">Home</a>
        <a href="/about">About</a>
    </div>
    <div id="content" class="article">
        <h2>Sample Article Title</h2>
        <p>This is the first paragraph of the article. It contains some meaningful
        content, written in full sentences, that the extractor should keep.</p>
        <p>Here is a second paragraph with more content. The extraction should
        preserve the text, while removing navigation and other boilerplate.</p>
        <p>A third paragraph ensures we have enough content for meaningful
        benchmarking of the extraction performance, with a comma or two.</p>
        <div class="date">March 3, 2011</div>
    </div>
    <div class="sidebar">
        <h3>Related Articles</h3>
        <ul>
            <li><a href="/1">Related article 1</a></li>
            <li><a href="/2">Related article 2</a></li>
        </ul>
    </div>
    <div id="footer">
        <p>Copyright 2024</p>
    </div>
</body>
</html>
"#;

const NO_ARTICLE_HTML: &str = r#"
<html><body>
    <ul class="menu"><li><a href="/a">A</a></li><li><a href="/b">B</a></li></ul>
    <div class="comment">Nice post!</div>
</body></html>
"#;

fn bench_extract_default(c: &mut Criterion) {
    c.bench_function("extract_default", |b| {
        b.iter(|| extract(black_box(SAMPLE_HTML)));
    });
}

fn bench_extract_with_options(c: &mut Criterion) {
    let options = Options {
        clean_styles: true,
        kill_breaks: true,
        convert_links_to_footnotes: true,
        base_url: Some("https://example.com/news/sample".to_string()),
        ..Options::default()
    };

    c.bench_function("extract_with_options", |b| {
        b.iter(|| extract_with_options(black_box(SAMPLE_HTML), black_box(&options)));
    });
}

fn bench_all_attempts(c: &mut Criterion) {
    c.bench_function("extract_no_article", |b| {
        b.iter(|| extract(black_box(NO_ARTICLE_HTML)));
    });
}

/// Benchmark with real-world HTML files of varying sizes
fn bench_real_world_html(c: &mut Criterion) {
    let Ok(html_dir) = std::env::var("READABILITY_BENCH_DIR") else {
        return;
    };
    let Ok(entries) = fs::read_dir(&html_dir) else {
        return;
    };

    let mut group = c.benchmark_group("real_world");

    for entry in entries.flatten().take(10) {
        let path = entry.path();
        let Ok(html) = fs::read_to_string(&path) else {
            continue;
        };
        let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        let size_kb = html.len() / 1024;
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("extract", format!("{name} ({size_kb}KB)")),
            &html,
            |b, html| {
                b.iter(|| extract(black_box(html)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_extract_default,
    bench_extract_with_options,
    bench_all_attempts,
    bench_real_world_html
);
criterion_main!(benches);
