//! Reusable `String` builder handling for the sequence tier.

/// Run `fill` against either the caller's builder or a fresh `String`.
///
/// A supplied builder is cleared before `fill` runs and again after the
/// result has been copied out. `String::clear` keeps the allocation, so a
/// recycled builder retains its capacity for the next call.
pub(crate) fn render_with(
    builder: Option<&mut String>,
    capacity_hint: usize,
    fill: impl FnOnce(&mut String),
) -> String {
    match builder {
        Some(sb) => {
            sb.clear();
            fill(sb);
            let text = sb.as_str().to_owned();
            sb.clear();
            text
        }
        None => {
            let mut sb = String::with_capacity(capacity_hint);
            fill(&mut sb);
            sb
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_is_cleared_but_keeps_capacity() {
        let mut sb = String::with_capacity(64);
        sb.push_str("stale contents");
        let text = render_with(Some(&mut sb), 0, |s| s.push_str("fresh"));
        assert_eq!(text, "fresh");
        assert!(sb.is_empty());
        assert!(sb.capacity() >= 64);
    }

    #[test]
    fn without_builder_returns_filled_string() {
        let text = render_with(None, 8, |s| s.push_str("ok"));
        assert_eq!(text, "ok");
    }
}
