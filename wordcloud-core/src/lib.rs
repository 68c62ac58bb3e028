mod error;
mod layout;
mod output;
mod wasm;

pub use error::CloudError;
pub use layout::{
    estimate, layout_words, place, rank_words, seeded_random, Bounds, CloudConfig, PlacedItem,
    RankedWord, ScriptClass, SizedWord, WordFrequency, WordShape, CENTER,
};
pub use output::{layout_json, CloudInput, CloudOutput, ItemOutput, WordCloudSection};
