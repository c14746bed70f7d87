//! Integration tests for Markdown post-processing.

use pdfreflow::postprocess::{QuoteExtractor, VolumeSplitter};

const COMMENTARY: &str = "\
# 大佛顶首楞严经义贯\n\n\
**【如是我聞：一時佛在室羅筏城】**\n\n\
**【注释】**\n\n\
「如是」：指这部经。\n\n\
**【义贯】**\n\n\
本节经文大意如下。\n\n\
**【祇桓精舍，與大比丘眾，\n\
千二百五十人俱】**\n\n\
正文继续。\n";

#[test]
fn quotes_extracted_without_apparatus_sections() {
    let extractor = QuoteExtractor::with_default_markers().unwrap();
    let blocks = extractor.extract(COMMENTARY);

    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0], "**【如是我聞：一時佛在室羅筏城】**");
    // The second block spans a line break in the source and is folded.
    assert_eq!(blocks[1], "**【祇桓精舍，與大比丘眾，千二百五十人俱】**");
}

#[test]
fn quotes_joined_with_blank_lines() {
    let extractor = QuoteExtractor::with_default_markers().unwrap();
    let joined = extractor.extract_joined(COMMENTARY);
    assert_eq!(joined.matches("\n\n").count(), 1);
    assert!(!joined.contains("注释"));
    assert!(!joined.contains("义贯】"));
}

#[test]
fn volumes_split_at_headings() {
    let content = "\
# 楞严经讲义\n\n\
## 大佛頂如來密因修證了義諸菩薩萬行首楞嚴經講義第一卷\n\n\
卷一正文。\n\n\
## 大佛頂如來密因修證了義諸菩薩萬行首楞嚴經講義第二卷\n\n\
卷二正文。\n\n\
## 大佛頂如來密因修證了義諸菩薩萬行首楞嚴經講義第三卷\n\n\
卷三正文。\n";

    let splitter =
        VolumeSplitter::new("## 大佛頂如來密因修證了義諸菩薩萬行首楞嚴經講義第(.+?)卷").unwrap();
    let volumes = splitter.split(content);

    assert_eq!(volumes.len(), 3);
    assert_eq!(
        volumes.iter().map(|v| v.label.as_str()).collect::<Vec<_>>(),
        vec!["一", "二", "三"]
    );
    assert!(volumes[0].content.contains("卷一正文"));
    assert!(!volumes[0].content.contains("卷二正文"));
    // The preamble before the first heading is not part of any volume.
    assert!(!volumes[0].content.contains("# 楞严经讲义"));
    assert!(volumes[2].content.ends_with("卷三正文。\n"));
}

#[test]
fn rendered_markdown_feeds_the_quote_extractor() {
    use pdfreflow::{extract, ExtractOptions, Glyph, JsonGlyphSource, MergePolicy, Passthrough};

    // Scripture in brackets at 16pt, commentary at 13pt, one column each.
    let mut page: Vec<Glyph> = "【照見五蘊皆空】"
        .chars()
        .enumerate()
        .map(|(i, c)| {
            Glyph::new(
                c.to_string(),
                200.0,
                216.0,
                i as f32 * 17.0,
                i as f32 * 17.0 + 16.0,
                16.0,
                "SimSun",
            )
        })
        .collect();
    page.extend("五蘊者色受想行識也".chars().enumerate().map(|(i, c)| {
        Glyph::new(
            c.to_string(),
            160.0,
            173.0,
            i as f32 * 14.0,
            i as f32 * 14.0 + 13.0,
            13.0,
            "SimSun",
        )
    }));

    let source = JsonGlyphSource::from_pages(vec![page]);
    let options = ExtractOptions::new().with_policy(MergePolicy::Sized);
    let doc = extract(&source, &Passthrough, &options).unwrap();
    let md = pdfreflow::render::to_markdown(&doc, &pdfreflow::RenderOptions::default()).unwrap();

    let extractor = QuoteExtractor::with_default_markers().unwrap();
    let blocks = extractor.extract(&md);
    assert_eq!(blocks, vec!["**【照見五蘊皆空】**"]);
}
