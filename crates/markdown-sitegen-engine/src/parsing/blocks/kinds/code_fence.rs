/// Fenced code block delimited by triple backticks on both ends.
///
/// Fence content is a raw zone: no inline parsing happens inside.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// Opens and closes with a fence, and the two fences do not overlap.
    pub fn is_fenced(block: &str) -> bool {
        block.len() >= 2 * Self::FENCE.len()
            && block.starts_with(Self::FENCE)
            && block.ends_with(Self::FENCE)
    }

    /// Content between the fences, trimmed, with one trailing newline.
    pub fn literal(block: &str) -> String {
        let inner = block
            .strip_prefix(Self::FENCE)
            .and_then(|rest| rest.strip_suffix(Self::FENCE))
            .unwrap_or(block);
        format!("{}\n", inner.trim())
    }
}
