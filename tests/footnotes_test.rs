use rs_readability::{extract, extract_with_options, Options};

fn linked_story() -> String {
    let p = "Most of the work happened offline, in notebooks, on trains, and in kitchens. ".repeat(4);
    format!(
        r#"<html><body><div id="story">
            <p>{p}</p>
            <p>{p} See <a href="/notes/2021">the field notes</a> and <a href="https://archive.example.org:8080/x" title="Archive copy">a mirror</a>.
               Also <a href="/wiki/x#edit">edit</a>.</p>
        </div></body></html>"#
    )
}

#[test]
fn footnotes_are_off_by_default() {
    let article = extract(&linked_story());

    assert_eq!(article.footnotes, 0);
    assert!(!article.html().unwrap().contains("readabilityFootnoteLink"));
}

#[test]
fn links_become_footnotes_with_hosts() {
    let options = Options {
        convert_links_to_footnotes: true,
        base_url: Some("https://news.example.com/2021/story".to_string()),
        ..Options::default()
    };

    let article = extract_with_options(&linked_story(), &options);

    assert_eq!(article.footnotes, 2);
    let content = article.content.unwrap();
    let doc = content.document();

    assert!(doc.select("a[name=readabilityLink-1]").exists());
    assert!(doc.select("a[name=readabilityLink-2]").exists());
    assert!(doc.select("a[name=readabilityLink-3]").is_empty());

    let notes = doc.select("ol > li");
    assert_eq!(notes.length(), 2);
    let text = notes.text();
    assert!(text.contains("the field notes"));
    assert!(text.contains("(news.example.com)"));
    assert!(text.contains("Archive copy"));
    assert!(text.contains("(archive.example.org:8080)"));
}

#[test]
fn article_without_links_gets_no_footnote_list() {
    let p = "Nothing here links anywhere, on purpose, for this particular test case. ".repeat(5);
    let html = format!(r#"<html><body><div id="story"><p>{p}</p></div></body></html>"#);
    let options = Options {
        convert_links_to_footnotes: true,
        ..Options::default()
    };

    let article = extract_with_options(&html, &options);

    assert!(article.is_found());
    assert_eq!(article.footnotes, 0);
    assert!(article.content.unwrap().document().select("ol").is_empty());
}
