//! RegionResponder implementation.

use async_trait::async_trait;
use bot_core::{InboundMessage, OutboundReply, Responder, ResponderError};
use region_lookup::{lookup, Directory, MatchResult, ReverseIndex};
use tracing::debug;

const GREETING: &str =
    "Привет! Введите часть названия региона или код (например, 77 или мос) для поиска.";
const CODE_NOT_FOUND: &str = "Регион с таким кодом не найден.";
const NO_MATCHES: &str = "Совпадений не найдено.";
const MORE_RESULTS: &str = "... и другие";

/// A responder that resolves region names and codes against the directory.
///
/// The directory and its reverse index are built once at construction and
/// shared read-only across all lookups, so the responder is cheap to call
/// concurrently.
pub struct RegionResponder {
    directory: Directory,
    index: ReverseIndex,
}

impl RegionResponder {
    /// Create a responder over an explicit directory.
    pub fn new(directory: Directory) -> Self {
        let index = ReverseIndex::build(&directory);
        Self { directory, index }
    }

    /// Create a responder over the built-in region table.
    pub fn builtin() -> Self {
        Self::new(Directory::builtin())
    }

    /// Number of regions the responder can resolve.
    pub fn region_count(&self) -> usize {
        self.directory.len()
    }

    fn render(&self, raw: &str) -> String {
        let result = lookup(raw, &self.directory, &self.index);
        render_result(&result, raw)
    }
}

#[async_trait]
impl Responder for RegionResponder {
    async fn respond(&self, message: InboundMessage) -> Result<OutboundReply, ResponderError> {
        let text = message.text.trim();

        if text.is_empty() || text == "/start" {
            return Ok(OutboundReply::reply_to(&message, GREETING));
        }

        let reply = self.render(text);
        debug!(chat_id = message.chat_id, input = %text, "Rendered lookup reply");
        Ok(OutboundReply::reply_to(&message, reply))
    }

    fn name(&self) -> &str {
        "RegionResponder"
    }
}

/// Render a match result into the reply text.
fn render_result(result: &MatchResult, raw: &str) -> String {
    if result.exact_code() {
        if let Some(region) = result.single() {
            return format!("Код {} — это {}", region.code, region.name);
        }
    }

    if result.is_empty() {
        // All-digit input is a code query; a miss gets the dedicated
        // not-found message, not the generic one.
        if is_digits(raw.trim()) {
            return CODE_NOT_FOUND.to_string();
        }
        return NO_MATCHES.to_string();
    }

    if let Some(region) = result.single() {
        return format!("{} ({})", region.name, region.code);
    }

    let mut lines: Vec<String> = result
        .iter()
        .map(|region| format!("{} ({})", region.name, region.code))
        .collect();
    if result.truncated() {
        lines.push(MORE_RESULTS.to_string());
    }
    lines.join("\n")
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}
