use crate::probe::constants::{DEFAULT_MESSAGE_TEXT, MESSAGE_SIZE};

/// Fit `text` to exactly `size` bytes: truncate when longer, right-pad with
/// ASCII spaces when shorter.
pub fn fit_to_size(text: &str, size: usize) -> Vec<u8> {
    let mut buf = text.as_bytes().to_vec();
    buf.truncate(size);
    buf.resize(size, b' ');
    buf
}

/// The built-in probe payload: the filler text fitted to [`MESSAGE_SIZE`]
pub fn default_payload() -> Vec<u8> {
    fit_to_size(DEFAULT_MESSAGE_TEXT, MESSAGE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_payload_exact_size() {
        assert_eq!(default_payload().len(), MESSAGE_SIZE);
    }

    #[test]
    fn test_short_text_padded_with_spaces() {
        let payload = fit_to_size("abc", 8);
        assert_eq!(payload, b"abc     ");
    }

    #[test]
    fn test_long_text_truncated() {
        let payload = fit_to_size("abcdefgh", 3);
        assert_eq!(payload, b"abc");
    }

    #[test]
    fn test_zero_size() {
        assert!(fit_to_size("abc", 0).is_empty());
    }

    #[test]
    fn test_exact_fit_unchanged() {
        let payload = fit_to_size("abcd", 4);
        assert_eq!(payload, b"abcd");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_fit_to_size_is_exact(text in "[ -~]{0,256}", size in 0usize..1024) {
            let payload = fit_to_size(&text, size);
            prop_assert_eq!(payload.len(), size);
        }

        #[test]
        fn test_fit_preserves_prefix_and_pads(text in "[ -~]{0,256}", size in 0usize..1024) {
            let payload = fit_to_size(&text, size);
            let keep = text.len().min(size);
            prop_assert_eq!(&payload[..keep], &text.as_bytes()[..keep]);
            prop_assert!(payload[keep..].iter().all(|&b| b == b' '));
        }
    }
}
