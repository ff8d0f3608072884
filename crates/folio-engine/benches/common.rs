// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_paragraph(sentences: usize) -> String {
    let base = "Plain words with a [link](https://example.test/page) and **bold** text, \
                some *italic* and ~~struck~~ runs, then a citation [^ref1]. ";
    base.repeat(sentences)
}

#[allow(dead_code)]
pub fn generate_article_json(blocks: usize) -> String {
    let placements = ["left", "right", "full", "right", "left"];
    let mut items = Vec::with_capacity(blocks);

    for i in 0..blocks {
        let layout = placements[i % placements.len()];
        let item = if i % 4 == 3 {
            format!(
                r#"{{"id": "b{i}", "type": "image", "url": "img{i}.jpg", "caption": "See [^ref{}]", "position": "{layout}"}}"#,
                i % 7
            )
        } else {
            format!(
                r#"{{"id": "b{i}", "type": "text", "text": "Para [^ref{}] with **bold**\n- item one\n- item two", "layout": "{layout}"}}"#,
                i % 11
            )
        };
        items.push(item);
    }

    let references: Vec<String> = (0..11)
        .map(|i| format!(r#"{{"id": "ref{i}", "title": "Reference {i}"}}"#))
        .collect();

    format!(
        r#"{{"blocks": [{}], "references": [{}]}}"#,
        items.join(","),
        references.join(",")
    )
}
