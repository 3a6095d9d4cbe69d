use crate::error::{AppError, AppResult};

/// Character set for generating short codes.
pub const ALPHABET_CHARS: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
    'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Default length of generated short codes.
pub const DEFAULT_LENGTH: usize = 6;

/// Default number of draws before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Generator for random fixed-length short codes.
///
/// The generator holds no state between calls and reserves nothing: it only
/// proposes candidates and asks the caller whether each one is taken. The
/// caller is expected to hold whatever lock makes that answer stable until
/// the winning code is inserted.
#[derive(Debug, Clone)]
pub struct ShortCodeGenerator {
    length: usize,
    max_attempts: u32,
    alphabet: Vec<char>,
}

impl Default for ShortCodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH, DEFAULT_MAX_ATTEMPTS)
    }
}

impl ShortCodeGenerator {
    /// Create a generator over the 62-character alphanumeric alphabet.
    pub fn new(length: usize, max_attempts: u32) -> Self {
        Self {
            length,
            max_attempts,
            alphabet: ALPHABET_CHARS.to_vec(),
        }
    }

    /// Restrict the alphabet candidates are drawn from.
    ///
    /// Every character must be ASCII alphanumeric; anything else is dropped.
    pub fn with_alphabet(mut self, alphabet: &[char]) -> Self {
        self.alphabet = alphabet
            .iter()
            .copied()
            .filter(char::is_ascii_alphanumeric)
            .collect();
        self
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Draw a single candidate code.
    pub fn candidate(&self) -> String {
        let length = self.length;
        nanoid::nanoid!(length, &self.alphabet)
    }

    /// Generate a short code for which `is_taken` returns `false`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ShortCodeGenerationFailed` once `max_attempts`
    /// consecutive candidates have all been taken.
    pub fn generate<F>(&self, is_taken: F) -> AppResult<String>
    where
        F: Fn(&str) -> bool,
    {
        if self.alphabet.is_empty() || self.length == 0 {
            return Err(AppError::Internal(
                "short code generator has an empty alphabet or zero length".to_string(),
            ));
        }

        for attempt in 1..=self.max_attempts {
            let code = self.candidate();

            if !is_taken(&code) {
                return Ok(code);
            }

            tracing::debug!(attempt, code = %code, "Short code collision, retrying");
        }

        tracing::warn!(
            attempts = self.max_attempts,
            length = self.length,
            "Short code generation exhausted its retry budget"
        );

        Err(AppError::ShortCodeGenerationFailed {
            attempts: self.max_attempts,
        })
    }
}
