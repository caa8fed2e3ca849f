use crate::models::Block;
use crate::parsing::MarkupGrammar;

/// Output of the region-extraction pass, in document order.
#[derive(Debug)]
pub enum Region<'a> {
    /// A fenced or directive region, already turned into a block.
    Extracted(Block),
    /// A separator that produces no block but ends accumulation.
    Break,
    /// A run of lines left for the line-scanning pass.
    Text(Vec<&'a str>),
}

/// Pass 1: cut every region the grammar recognises out of `lines`.
///
/// Openers are tried top to bottom, so a region that starts inside an
/// earlier region's body is never seen.
pub fn extract_regions<'a, G: MarkupGrammar + ?Sized>(
    grammar: &G,
    lines: &[&'a str],
) -> Vec<Region<'a>> {
    let mut regions = Vec::new();
    let mut pending: Vec<&'a str> = Vec::new();
    let mut at = 0;

    while at < lines.len() {
        match grammar.open_region(lines, at) {
            Some(extracted) => {
                if !pending.is_empty() {
                    regions.push(Region::Text(std::mem::take(&mut pending)));
                }
                regions.push(match extracted.block {
                    Some(block) => Region::Extracted(block),
                    None => Region::Break,
                });
                at += extracted.consumed.max(1);
            }
            None => {
                pending.push(lines[at]);
                at += 1;
            }
        }
    }

    if !pending.is_empty() {
        regions.push(Region::Text(pending));
    }
    regions
}
