//! Conversations → labeled per-position training examples.

use brccs_core::constants::RESPONSE_INDEX_FEATURE;
use brccs_core::errors::BrccsResult;
use brccs_core::models::{Conversation, FeatureValue, FeatureVector, Label, TrainingExample};
use brccs_features::FeatureExtractor;
use rayon::prelude::*;
use tracing::debug;

/// Labels for the response to a sentence: its space-separated words, then
/// `padding` terminators.
pub fn target_labels(next_sentence: &str, padding: usize) -> Vec<Label> {
    next_sentence
        .split(' ')
        .map(Label::word)
        .chain(std::iter::repeat(Label::Terminator).take(padding))
        .collect()
}

/// Build the flat training set for a snapshot's conversations.
///
/// Conversations are processed in parallel; the output order is the input
/// order (conversation, then sentence, then response position).
pub fn build_training_set(
    extractor: &FeatureExtractor,
    conversations: &[Conversation],
    terminator_padding: usize,
) -> BrccsResult<Vec<TrainingExample>> {
    let per_conversation = conversations
        .par_iter()
        .map(|conversation| conversation_examples(extractor, conversation, terminator_padding))
        .collect::<BrccsResult<Vec<_>>>()?;

    let examples: Vec<TrainingExample> = per_conversation.into_iter().flatten().collect();
    debug!(
        conversations = conversations.len(),
        examples = examples.len(),
        "training set built"
    );
    Ok(examples)
}

/// Examples for one conversation. The last sentence has no successor and yields nothing.
pub fn conversation_examples(
    extractor: &FeatureExtractor,
    conversation: &Conversation,
    terminator_padding: usize,
) -> BrccsResult<Vec<TrainingExample>> {
    let mut examples = Vec::new();

    for i in 0..conversation.len().saturating_sub(1) {
        // `response_index` is the only field that varies per position, so the
        // sentence and its context are extracted once and the index patched in.
        let base = extractor.extract(
            &conversation[i],
            &conversation[..i],
            true,
            &FeatureVector::new(),
        )?;

        for (index, label) in target_labels(&conversation[i + 1], terminator_padding)
            .into_iter()
            .enumerate()
        {
            let mut features = base.clone();
            features.insert(
                RESPONSE_INDEX_FEATURE.to_string(),
                FeatureValue::from(index),
            );
            examples.push(TrainingExample::new(features, label));
        }
    }

    Ok(examples)
}
