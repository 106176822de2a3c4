//! Phonetic Coder
//!
//! Soundex-style codes used to find sound-alike vocabulary tokens
//! independent of spelling distance.
//!
//! Vowels, `y`, `h` and `w` produce no digit and do not separate digits, so
//! equal digits on either side of them collapse into one (`tymczak` → `T520`).

/// Maps a word to its four-character phonetic code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PhoneticCoder {
    fold_silent_letters: bool,
}

/// Word-initial clusters whose first letter is not pronounced.
const SILENT_INITIAL_CLUSTERS: [&str; 7] = ["kn", "gn", "pn", "ps", "wr", "wh", "rh"];

const CODE_LENGTH: usize = 4;

impl PhoneticCoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Coder that drops silent letters before encoding, so that `knight`,
    /// `night` and `nite` share a code.
    pub fn with_silent_letter_folding(fold: bool) -> Self {
        Self {
            fold_silent_letters: fold,
        }
    }

    pub fn folds_silent_letters(&self) -> bool {
        self.fold_silent_letters
    }

    /// Compute the phonetic code of `word`.
    ///
    /// Leading characters before the first ASCII letter are skipped
    /// (`128gb` → `G100`). Returns an empty string when there is no ASCII
    /// letter; callers must treat that as a non-match.
    pub fn code(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        let word = if self.fold_silent_letters {
            fold_silent_letters(&lower)
        } else {
            lower
        };

        let mut chars = word.chars().skip_while(|c| !c.is_ascii_alphabetic());
        let first = match chars.next() {
            Some(c) => c,
            None => return String::new(),
        };

        let mut code = String::with_capacity(CODE_LENGTH);
        code.push(first.to_ascii_uppercase());

        let mut last_digit: Option<char> = None;
        for c in chars {
            if let Some(digit) = soundex_digit(c) {
                if last_digit != Some(digit) {
                    code.push(digit);
                }
                last_digit = Some(digit);
            }
        }

        let mut padded: String = code.chars().take(CODE_LENGTH).collect();
        while padded.chars().count() < CODE_LENGTH {
            padded.push('0');
        }
        padded
    }

    /// Whether two words share a (non-empty) phonetic code.
    pub fn sounds_alike(&self, a: &str, b: &str) -> bool {
        let code_a = self.code(a);
        !code_a.is_empty() && code_a == self.code(b)
    }
}

/// Phonetic code with the default coder.
pub fn soundex(word: &str) -> String {
    PhoneticCoder::default().code(word)
}

fn soundex_digit(c: char) -> Option<char> {
    match c {
        'b' | 'f' | 'p' | 'v' => Some('1'),
        'c' | 'g' | 'j' | 'k' | 'q' | 's' | 'x' | 'z' => Some('2'),
        'd' | 't' => Some('3'),
        'l' => Some('4'),
        'm' | 'n' => Some('5'),
        'r' => Some('6'),
        _ => None,
    }
}

/// Drop the silent letter of a word-initial cluster and every `gh`.
fn fold_silent_letters(word: &str) -> String {
    let trimmed = SILENT_INITIAL_CLUSTERS
        .iter()
        .find(|cluster| word.starts_with(*cluster))
        .map(|cluster| {
            let mut chars = cluster.chars();
            let silent = chars.next().map(char::len_utf8).unwrap_or(0);
            &word[silent..]
        })
        .unwrap_or(word);

    trimmed.replace("gh", "")
}
