use crate::dict::Transcript;
use crate::g2p::{align, MappingTable};

/// A compound component with the part of the compound's transcript that
/// realizes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentTranscript {
    pub component: String,
    pub transcript: Transcript,
}

/// Split `transcript` over `components` using the alignment of `word`.
///
/// Alignment pairs are consumed left to right; a pair belongs to the current
/// component when its grapheme side continues that component. Pairs with an
/// empty grapheme side join the component being built. Returns `None` when a
/// component boundary falls inside a pair or a component ends up with no
/// phonemes.
pub fn component_transcripts(
    components: &[&str],
    word: &str,
    transcript: &Transcript,
    table: &MappingTable,
) -> Option<Vec<ComponentTranscript>> {
    let alignment = align(word, transcript, table).ok()?;
    let pairs = &alignment.pairs;
    let mut idx = 0;
    let mut out = Vec::with_capacity(components.len());

    for &component in components {
        let mut rest = component;
        let mut phonemes: Vec<&str> = Vec::new();
        while let Some(pair) = pairs.get(idx) {
            let Some(remaining) = rest.strip_prefix(pair.grapheme.as_str()) else {
                break;
            };
            if !pair.phonemes.is_empty() {
                phonemes.push(&pair.phonemes);
            }
            rest = remaining;
            idx += 1;
        }
        if !rest.is_empty() || phonemes.is_empty() {
            return None;
        }
        out.push(ComponentTranscript {
            component: component.to_string(),
            transcript: Transcript::parse(&phonemes.join(" ")),
        });
    }

    (idx == pairs.len()).then_some(out)
}
