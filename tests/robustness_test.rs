use rs_readability::{extract, extract_with_options, Options};
use std::time::{Duration, Instant};

fn article_page() -> String {
    let p = "Snow fell early that year, and the roads, unplowed, closed for days. ".repeat(5);
    format!(r#"<html><body><div id="story"><p>{p}</p><p>{p}</p></div></body></html>"#)
}

#[test]
fn extract_does_not_panic_on_malformed_html_unclosed_tags() {
    let article = extract("<p>text<div>more");
    assert!(!article.is_found());
    assert_eq!(article.attempts.len(), 4);
}

#[test]
fn extract_does_not_panic_on_malformed_html_invalid_nesting() {
    let article = extract("<p><div></p></div><table><p>stray</table>");
    assert!(!article.is_found());
}

#[test]
fn extract_does_not_panic_on_malformed_html_broken_attributes() {
    let article = extract("<div class=\"test id=broken><p>text");
    assert!(!article.is_found());
}

#[test]
fn extract_returns_empty_article_for_empty_string() {
    let article = extract("");
    assert!(!article.is_found());
    assert!(article.title.is_empty());
    assert!(article.dates.is_empty());
    assert_eq!(article.footnotes, 0);
}

#[test]
fn extract_handles_missing_closing_tags_in_article() {
    let p = "Snow fell early that year, and the roads, unplowed, closed for days. ".repeat(5);
    let html = format!("<html><body><div id=\"story\"><p>{p}<p>{p}");

    let article = extract(&html);

    assert!(article.is_found());
    assert!(article.text().contains("roads, unplowed"));
}

#[test]
fn extraction_is_deterministic() {
    let html = article_page();

    let first = extract(&html);
    let second = extract(&html);

    assert_eq!(first, second);
}

#[test]
fn extracting_an_extracted_article_keeps_its_text() {
    let first = extract(&article_page());
    let html = first.html().unwrap();

    let second = extract(&html);

    assert!(second.is_found());
    assert_eq!(second.text(), first.text());
}

#[test]
fn deeply_nested_markup_completes() {
    let depth = 200;
    let p = "Nested text, with commas, repeated to make a long enough body. ".repeat(6);
    let html = format!("{}<p>{p}</p>{}", "<div>".repeat(depth), "</div>".repeat(depth));

    let start = Instant::now();
    let article = extract(&html);

    assert!(article.is_found());
    assert!(start.elapsed() < Duration::from_secs(10));
}

#[test]
fn independent_extractions_run_concurrently() {
    let html = article_page();
    let options = Options {
        clean_styles: true,
        ..Options::default()
    };

    std::thread::scope(|scope| {
        // Parsed trees stay on their thread; only plain results cross over.
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    let article = extract_with_options(&html, &options);
                    (article.attempts.len(), article.text())
                })
            })
            .collect();

        let expected = extract_with_options(&html, &options).text();
        for handle in handles {
            let (attempts, text) = handle.join().unwrap();
            assert_eq!(attempts, 1);
            assert_eq!(text, expected);
        }
    });
}
