/// Tokenization, part-of-speech tagging, and stemming.
pub trait INlpToolkit: Send + Sync {
    /// Split text into ordered tokens. Tokens must never be empty.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Tag each token with a part-of-speech label, one pair per token, in order.
    fn tag(&self, tokens: &[String]) -> Vec<(String, String)>;

    /// Morphological stem of a token.
    fn stem(&self, token: &str) -> String;
}
