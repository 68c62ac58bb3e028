//! Input and output types for the report page.
//!
//! The page hands over the `wordCloud` section of the report as JSON and
//! gets back placed items plus the CSS-ready strings it binds to each label.

use serde::{Deserialize, Serialize};

use crate::error::CloudError;
use crate::layout::{layout_words, CloudConfig, PlacedItem, WordFrequency};

/// The `wordCloud` section of a generated report.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordCloudSection {
    pub words: Vec<WordFrequency>,
    #[serde(default)]
    pub total_words: u64,
    #[serde(default)]
    pub total_messages: u64,
}

/// Accepted input shapes: the report section, or just its word list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CloudInput {
    Section(WordCloudSection),
    Words(Vec<WordFrequency>),
}

impl CloudInput {
    pub fn into_section(self) -> WordCloudSection {
        match self {
            CloudInput::Section(s) => s,
            CloudInput::Words(words) => WordCloudSection {
                words,
                total_words: 0,
                total_messages: 0,
            },
        }
    }
}

/// A placed word ready for the renderer
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemOutput {
    #[serde(flatten)]
    pub item: PlacedItem,
    /// CSS `left`, e.g. "61.25%"
    pub left: String,
    /// CSS `top`
    pub top: String,
    /// CSS `animation-delay`, e.g. "0.12s"
    pub animation_delay: String,
    /// Hover text
    pub title: String,
}

impl From<PlacedItem> for ItemOutput {
    fn from(item: PlacedItem) -> Self {
        Self {
            left: format!("{:.2}%", item.x),
            top: format!("{:.2}%", item.y),
            animation_delay: format!("{:.2}s", item.delay),
            title: format!("{} (出现 {} 次)", item.phrase, item.count),
            item,
        }
    }
}

/// The combined output sent to the page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudOutput {
    pub items: Vec<ItemOutput>,
    pub total_words: u64,
    pub total_messages: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CloudOutput {
    pub fn from_error(err: &CloudError) -> Self {
        Self {
            items: vec![],
            total_words: 0,
            total_messages: 0,
            error: Some(err.to_string()),
        }
    }
}

/// Parse the page's JSON, lay out the cloud and build the output.
/// `config` is an optional partial [`CloudConfig`] in camelCase JSON; its
/// `limit` and `attempts` are capped by [`CloudConfig::clamped`].
pub fn layout_json(input: &str, config: Option<&str>) -> Result<CloudOutput, CloudError> {
    let section = serde_json::from_str::<CloudInput>(input)
        .map_err(CloudError::InvalidInput)?
        .into_section();

    let cfg = match config {
        Some(json) if !json.trim().is_empty() => {
            serde_json::from_str::<CloudConfig>(json)
                .map_err(CloudError::InvalidConfig)?
                .clamped()
        }
        _ => CloudConfig::default(),
    };

    let items = layout_words(&section.words, &cfg)?
        .into_iter()
        .map(ItemOutput::from)
        .collect();

    Ok(CloudOutput {
        items,
        total_words: section.total_words,
        total_messages: section.total_messages,
        error: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_layout_json_report_section() {
        let input = r#"{
            "words": [
                { "phrase": "晚安", "count": 10 },
                { "phrase": "你好", "count": 100 }
            ],
            "totalWords": 5120,
            "totalMessages": 880
        }"#;
        let out = layout_json(input, None).unwrap();

        assert_eq!(out.total_words, 5120);
        assert_eq!(out.total_messages, 880);
        assert_eq!(out.items.len(), 2);
        assert_eq!(out.items[0].item.phrase, "你好");
        assert_eq!(out.items[0].left, "50.00%");
        assert_eq!(out.items[0].top, "50.00%");
        assert_eq!(out.items[0].animation_delay, "0.00s");
        assert_eq!(out.items[1].animation_delay, "0.04s");
        assert_eq!(out.items[0].title, "你好 (出现 100 次)");
    }

    #[test]
    fn test_layout_json_bare_word_list() {
        let out = layout_json(r#"[{ "phrase": "ok", "count": 3 }]"#, None).unwrap();
        assert_eq!(out.items.len(), 1);
        assert_eq!(out.total_words, 0);
    }

    #[test]
    fn test_layout_json_empty_words() {
        let out = layout_json(r#"{ "words": [] }"#, None).unwrap();
        assert!(out.items.is_empty());
        assert!(out.error.is_none());
    }

    #[test]
    fn test_layout_json_with_config() {
        let input = r#"[{ "phrase": "a", "count": 3 }, { "phrase": "b", "count": 2 }]"#;
        let out = layout_json(input, Some(r#"{ "limit": 1 }"#)).unwrap();
        assert_eq!(out.items.len(), 1);

        let out = layout_json(input, Some("  ")).unwrap();
        assert_eq!(out.items.len(), 2);
    }

    #[test]
    fn test_layout_json_caps_oversized_budget() {
        let words: Vec<String> = (0..40).map(|i| format!(r#"{{ "phrase": "w{i}", "count": {} }}"#, 40 - i)).collect();
        let input = format!("[{}]", words.join(","));
        let out = layout_json(&input, Some(r#"{ "limit": 1000, "attempts": 1000000000000 }"#)).unwrap();
        assert!(out.items.len() <= 32);
    }

    #[test]
    fn test_layout_json_errors() {
        assert!(matches!(layout_json("not json", None), Err(CloudError::InvalidInput(_))));
        assert!(matches!(
            layout_json("[]", Some("{ \"limit\": -1 }")),
            Err(CloudError::InvalidConfig(_))
        ));
        assert!(matches!(
            layout_json(r#"[{ "phrase": "a", "count": 0 }]"#, None),
            Err(CloudError::AllZeroCounts)
        ));
    }

    #[test]
    fn test_output_serializes_camel_case_and_flattens_item() {
        let out = layout_json(r#"[{ "phrase": "hi", "count": 1 }]"#, None).unwrap();
        let v: Value = serde_json::to_value(&out).unwrap();

        let item = &v["items"][0];
        assert_eq!(item["phrase"], "hi");
        assert_eq!(item["fontSize"], 32);
        assert_eq!(item["x"], 50.0);
        assert!(item["widthPct"].is_number());
        assert_eq!(item["animationDelay"], "0.00s");
        assert!(v.get("error").is_none());
        assert_eq!(v["totalMessages"], 0);
    }

    #[test]
    fn test_error_output() {
        let out = CloudOutput::from_error(&CloudError::AllZeroCounts);
        let v: Value = serde_json::to_value(&out).unwrap();
        assert_eq!(v["error"], "all word counts are zero");
        assert_eq!(v["items"], Value::Array(vec![]));
    }
}
