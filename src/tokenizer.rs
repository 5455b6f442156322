//! Byte-level text recovery.
//!
//! Every byte is decoded as the Latin-1 character of the same value, so no
//! input can fail to decode. Runs of printable characters become tokens.

/// Token length threshold for [`tokenize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenMode {
    /// Keep runs longer than 3 characters.
    #[default]
    Words,
    /// Keep runs longer than 2 characters, trimmed of surrounding spaces.
    Fragments,
}

impl TokenMode {
    /// A run is kept only when its character count is strictly greater than
    /// this value.
    pub fn min_exclusive_len(self) -> usize {
        match self {
            TokenMode::Words => 3,
            TokenMode::Fragments => 2,
        }
    }
}

/// Decode `bytes` one character per byte (ISO-8859-1).
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Returns `true` for characters that may appear inside a token.
///
/// C0 and C1 controls end a token, as do the no-break space (U+00A0) and
/// the soft hyphen (U+00AD). Plain space (U+0020) is the only separator
/// allowed inside a token.
pub fn is_printable(c: char) -> bool {
    !c.is_control() && c != '\u{A0}' && c != '\u{AD}'
}

/// Split `bytes` into runs of printable characters.
pub fn tokenize(bytes: &[u8], mode: TokenMode) -> Vec<String> {
    let min = mode.min_exclusive_len();
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for c in bytes.iter().map(|&b| char::from(b)) {
        if is_printable(c) {
            current.push(c);
            current_len += 1;
            continue;
        }

        if current_len > min {
            push_token(&mut tokens, std::mem::take(&mut current), mode);
        } else {
            current.clear();
        }
        current_len = 0;
    }

    if current_len > min {
        push_token(&mut tokens, current, mode);
    }

    tokens
}

fn push_token(tokens: &mut Vec<String>, token: String, mode: TokenMode) {
    match mode {
        TokenMode::Words => tokens.push(token),
        TokenMode::Fragments => {
            let trimmed = token.trim();
            if !trimmed.is_empty() {
                tokens.push(trimmed.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_byte_value_is_tolerated() {
        let all: Vec<u8> = (0..=255u8).collect();
        let tokens = tokenize(&all, TokenMode::Words);
        // 0x20..=0x7E is one contiguous printable run
        assert!(tokens.iter().any(|t| t.starts_with(" !\"#")));
        assert!(tokenize(&[], TokenMode::Words).is_empty());
    }

    #[test]
    fn token_between_control_bytes_is_verbatim() {
        let mut bytes = vec![0x01];
        bytes.extend_from_slice(b"HelloWorld");
        bytes.push(0x02);
        assert_eq!(tokenize(&bytes, TokenMode::Words), vec!["HelloWorld"]);
    }

    #[test]
    fn short_runs_are_dropped() {
        let bytes = b"abc\x00abcd\x00ab";
        assert_eq!(tokenize(bytes, TokenMode::Words), vec!["abcd"]);
        assert_eq!(tokenize(bytes, TokenMode::Fragments), vec!["abc", "abcd"]);
    }

    #[test]
    fn trailing_run_is_flushed() {
        assert_eq!(tokenize(b"\x05tail end", TokenMode::Words), vec!["tail end"]);
    }

    #[test]
    fn tab_and_newline_split_tokens() {
        assert_eq!(
            tokenize(b"first\tsecond\nthird", TokenMode::Words),
            vec!["first", "second", "third"]
        );
    }

    #[test]
    fn fragments_are_trimmed() {
        assert_eq!(tokenize(b"\x01  Elm  \x01", TokenMode::Fragments), vec!["Elm"]);
    }

    #[test]
    fn no_break_space_splits_tokens() {
        assert!(!is_printable('\u{A0}'));
        assert_eq!(tokenize(b"Main\xa0Street", TokenMode::Words), vec!["Main", "Street"]);
    }

    #[test]
    fn high_latin1_bytes_decode_to_letters() {
        // 0xE9 is 'é' in Latin-1, 0xAD is the soft hyphen
        assert_eq!(decode_latin1(&[0x43, 0x61, 0x66, 0xE9]), "Café");
        assert_eq!(tokenize(b"Caf\xE9s\xADmore", TokenMode::Words), vec!["Cafés", "more"]);
    }
}
