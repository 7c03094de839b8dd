//! Prompt assembly.
//!
//! Pure and deterministic: identical persona, matches, and query always
//! produce byte-identical output. No I/O, no timestamps, no hidden state.

use crate::types::DocumentMatch;

/// Separator line between rendered snippets.
const SNIPPET_SEPARATOR: &str = "\n---\n";

/// Label rendered when a match carries no usable `kitab` metadata.
/// A malformed metadata row never fails the request.
const UNKNOWN_SOURCE: &str = "Sumber tidak diketahui";

/// Assembles the instruction string sent to the generation model.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    persona: String,
}

impl PromptBuilder {
    pub fn new(persona: impl Into<String>) -> Self {
        Self {
            persona: persona.into(),
        }
    }

    /// Build the full prompt from retrieved matches and the user's query.
    ///
    /// With matches, each snippet renders as `[Kitab: <label>]\n<content>`
    /// followed by the citation instruction. Without matches, the fallback
    /// disclaimer is used instead; the two branches are mutually
    /// exclusive. The literal query is appended last after a turn marker.
    pub fn build(&self, matches: &[DocumentMatch], query: &str) -> String {
        let mut prompt = self.persona.clone();

        if matches.is_empty() {
            prompt.push_str(
                "\n\nMaaf, belum ada data kitab spesifik di database. \
                 Jawablah secara umum dan sarankan tanya ke Guru.",
            );
        } else {
            let context = matches
                .iter()
                .map(render_snippet)
                .collect::<Vec<_>>()
                .join(SNIPPET_SEPARATOR);

            prompt.push_str("\n\nGunakan referensi kitab berikut untuk menjawab:\n");
            prompt.push_str(&context);
            prompt.push_str("\n\nSebutkan nama kitab rujukan di akhir jawaban.");
        }

        prompt.push_str("\n\nUser: ");
        prompt.push_str(query);
        prompt
    }
}

fn render_snippet(doc: &DocumentMatch) -> String {
    let kitab = doc
        .metadata
        .get("kitab")
        .and_then(|value| value.as_str())
        .unwrap_or(UNKNOWN_SOURCE);

    format!("[Kitab: {}]\n{}", kitab, doc.content)
}
