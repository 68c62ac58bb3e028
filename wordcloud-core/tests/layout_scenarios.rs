use wordcloud_core::{layout_json, layout_words, CloudConfig, CloudError, WordFrequency, CENTER};

fn words(pairs: &[(&str, u64)]) -> Vec<WordFrequency> {
    pairs.iter().map(|&(p, c)| WordFrequency::new(p, c)).collect()
}

#[test]
fn four_greetings_all_fit() {
    let input = words(&[("你好", 100), ("哈哈哈", 80), ("在吗", 50), ("晚安", 10)]);
    let placed = layout_words(&input, &CloudConfig::default()).unwrap();

    assert_eq!(placed.len(), 4);
    assert_eq!(placed[0].phrase, "你好");
    assert_eq!((placed[0].x, placed[0].y), (CENTER, CENTER));

    let max_font = placed.iter().map(|p| p.font_size).max().unwrap();
    assert_eq!(placed[0].font_size, max_font);
    assert_eq!(placed[0].font_size, 32);
    assert_eq!(placed[3].font_size, 16);

    let cfg = CloudConfig::default();
    for (i, a) in placed.iter().enumerate() {
        for b in &placed[i + 1..] {
            assert!(!b.bounds().inflate(cfg.padding).overlaps(&a.bounds()));
        }
    }
}

#[test]
fn unsorted_input_is_ranked_first() {
    let input = words(&[("晚安", 10), ("在吗", 50), ("你好", 100)]);
    let placed = layout_words(&input, &CloudConfig::default()).unwrap();

    assert_eq!(placed[0].phrase, "你好");
    assert_eq!(placed[0].rank, 0);
    assert_eq!(placed[1].phrase, "在吗");
}

#[test]
fn empty_input_gives_empty_output() {
    let placed = layout_words(&[], &CloudConfig::default()).unwrap();
    assert!(placed.is_empty());
}

#[test]
fn fifty_words_are_cut_to_thirty_two() {
    let input: Vec<WordFrequency> = (0..50u64).map(|i| WordFrequency::new(format!("w{i}"), 1 + i)).collect();
    let placed = layout_words(&input, &CloudConfig::default()).unwrap();

    assert!(placed.len() <= 32);
    // Only the 32 largest counts (19..=50) are candidates
    assert!(placed.iter().all(|p| p.count >= 19));
}

#[test]
fn overflow_drops_later_words_and_keeps_the_top() {
    // At full size each of these spans over half the canvas, so only a few rows fit.
    let phrase = "十个字的一句长长话";
    let input: Vec<WordFrequency> = (0..32).map(|i| WordFrequency::new(format!("{phrase}{i}"), 50)).collect();
    let placed = layout_words(&input, &CloudConfig::default()).unwrap();

    assert!(!placed.is_empty());
    assert!(placed.len() < 32);
    assert_eq!((placed[0].x, placed[0].y), (CENTER, CENTER));

    // Kept words are the leading ranks; everything dropped ranks below them
    let ranks: Vec<usize> = placed.iter().map(|p| p.rank).collect();
    assert_eq!(ranks, (0..placed.len()).collect::<Vec<_>>());
}

#[test]
fn oversized_single_word_is_dropped_silently() {
    let long = "a".repeat(200);
    let placed = layout_words(&words(&[(&long, 5)]), &CloudConfig::default()).unwrap();
    assert!(placed.is_empty());
}

#[test]
fn all_zero_counts_are_rejected() {
    let err = layout_words(&words(&[("a", 0)]), &CloudConfig::default()).unwrap_err();
    assert!(matches!(err, CloudError::AllZeroCounts));
}

#[test]
fn json_output_is_identical_across_runs() {
    let input = r#"{"words":[{"phrase":"你好","count":100},{"phrase":"ok","count":60},{"phrase":"哈哈哈","count":80}],"totalWords":300,"totalMessages":40}"#;
    let a = serde_json::to_string(&layout_json(input, None).unwrap()).unwrap();
    let b = serde_json::to_string(&layout_json(input, None).unwrap()).unwrap();
    assert_eq!(a, b);
}
