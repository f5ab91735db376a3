/// ATX heading: 1 to 6 `#` followed by a space at the start of the block.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Heading level if `block` opens with a valid marker.
    pub fn level(block: &str) -> Option<usize> {
        let hashes = block.chars().take_while(|&c| c == Self::MARKER).count();
        let valid = (1..=Self::MAX_LEVEL).contains(&hashes) && block[hashes..].starts_with(' ');
        valid.then_some(hashes)
    }

    /// Block text after the hashes and the spaces that follow them.
    pub fn strip(block: &str) -> &str {
        block.trim_start_matches(Self::MARKER).trim_start_matches(' ')
    }
}
