use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no message could be reconstructed")]
pub struct NoMessageFound;

/// Rebuilds a message from three redacted token sequences.
///
/// Sequences are right-aligned: shorter ones are padded with empty placeholders
/// at the start. At each position the first non-empty token wins, in the order
/// `a`, `b`, `c`. The tokens are space-joined and the result trimmed.
///
/// Fails with [`NoMessageFound`] when every position is empty, including when
/// all three sequences are empty.
pub fn merge<S: AsRef<str>>(a: &[S], b: &[S], c: &[S]) -> Result<String, NoMessageFound> {
    let max_len = a.len().max(b.len()).max(c.len());

    let a = left_pad(a, max_len);
    let b = left_pad(b, max_len);
    let c = left_pad(c, max_len);

    let tokens: Vec<&str> = (0..max_len)
        .map(|i| first_non_empty([a[i], b[i], c[i]]))
        .collect();

    if tokens.iter().all(|t| t.is_empty()) {
        return Err(NoMessageFound);
    }

    Ok(tokens.join(" ").trim().to_string())
}

/// First non-empty token of a position, or `""` when all three are empty.
fn first_non_empty(candidates: [&str; 3]) -> &str {
    candidates
        .into_iter()
        .find(|t| !t.is_empty())
        .unwrap_or("")
}

fn left_pad<S: AsRef<str>>(seq: &[S], len: usize) -> Vec<&str> {
    let padding = len.saturating_sub(seq.len());
    std::iter::repeat("")
        .take(padding)
        .chain(seq.iter().map(AsRef::as_ref))
        .collect()
}
