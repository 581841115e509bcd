//! Porter stemmer (M.F. Porter, "An algorithm for suffix stripping", 1980).
//!
//! Suffix rules are grouped into steps 1a, 1b, 1c, 2, 3, 4, 5a and 5b and
//! applied in that order. Inside a step only the longest matching suffix is
//! considered; if its measure condition fails the step leaves the word alone.
//!
//! Tokens are expected to be lowercased already. Anything else passes through
//! untouched unless one of the lowercase suffixes literally matches.

/// Something that maps a token to its stem.
pub trait Stemmer: Send + Sync {
    fn stem(&self, word: &str) -> String;
}

/// Stateless Porter stemmer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        stem(word)
    }
}

const STEP2_RULES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("abli", "able"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
];

const STEP3_RULES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

const STEP4_RULES: &[(&str, &str)] = &[
    ("al", ""),
    ("ance", ""),
    ("ence", ""),
    ("er", ""),
    ("ic", ""),
    ("able", ""),
    ("ible", ""),
    ("ant", ""),
    ("ement", ""),
    ("ment", ""),
    ("ent", ""),
    ("ion", ""),
    ("ou", ""),
    ("ism", ""),
    ("ate", ""),
    ("iti", ""),
    ("ous", ""),
    ("ive", ""),
    ("ize", ""),
];

/// Stem a single word.
///
/// Total over all strings: words of two characters or fewer (including the
/// empty string) come back unchanged, as does any word no rule applies to.
pub fn stem(word: &str) -> String {
    if word.chars().count() <= 2 {
        return word.to_string();
    }

    let mut word = Word::new(word);
    word.step1a();
    word.step1b();
    word.step1c();
    word.step2();
    word.step3();
    word.step4();
    word.step5a();
    word.step5b();
    word.into_string()
}

/// Working buffer for one word while the steps rewrite its suffix.
///
/// `consonant[i]` tracks whether `chars[i]` is a consonant. Both vectors only
/// change through [`Word::set_suffix`], which keeps them the same length.
struct Word {
    chars: Vec<char>,
    consonant: Vec<bool>,
}

impl Word {
    fn new(word: &str) -> Self {
        let mut w = Word {
            chars: Vec::with_capacity(word.len()),
            consonant: Vec::with_capacity(word.len()),
        };
        w.extend(word.chars());
        w
    }

    /// `y` counts as a consonant at the start of a word or after a vowel.
    fn extend(&mut self, chars: impl Iterator<Item = char>) {
        for c in chars {
            let consonant = match c {
                'a' | 'e' | 'i' | 'o' | 'u' => false,
                'y' => !self.consonant.last().copied().unwrap_or(false),
                _ => true,
            };
            self.chars.push(c);
            self.consonant.push(consonant);
        }
    }

    fn into_string(self) -> String {
        self.chars.into_iter().collect()
    }

    fn len(&self) -> usize {
        self.chars.len()
    }

    fn last(&self) -> Option<char> {
        self.chars.last().copied()
    }

    fn is_consonant(&self, i: usize) -> bool {
        self.consonant[i]
    }

    /// Number of vowel-consonant sequences in `chars[..len]`, i.e. `m` in
    /// `[C](VC){m}[V]`.
    fn measure(&self, len: usize) -> usize {
        let mut m = 0;
        let mut prev_vowel = false;
        for i in 0..len {
            let vowel = !self.is_consonant(i);
            if prev_vowel && !vowel {
                m += 1;
            }
            prev_vowel = vowel;
        }
        m
    }

    fn has_vowel(&self, len: usize) -> bool {
        (0..len).any(|i| !self.is_consonant(i))
    }

    fn ends_double_consonant(&self, len: usize) -> bool {
        len >= 2 && self.chars[len - 1] == self.chars[len - 2] && self.is_consonant(len - 1)
    }

    /// `*o`: consonant-vowel-consonant where the last consonant is not w, x or y.
    fn ends_cvc(&self, len: usize) -> bool {
        len >= 3
            && self.is_consonant(len - 3)
            && !self.is_consonant(len - 2)
            && self.is_consonant(len - 1)
            && !matches!(self.chars[len - 1], 'w' | 'x' | 'y')
    }

    /// Length of the stem left after removing `suffix`, if the word ends with it.
    fn stem_len(&self, suffix: &str) -> Option<usize> {
        let n = suffix.chars().count();
        let len = self.len();
        if len < n {
            return None;
        }
        self.chars[len - n..]
            .iter()
            .copied()
            .eq(suffix.chars())
            .then(|| len - n)
    }

    fn set_suffix(&mut self, stem_len: usize, replacement: &str) {
        self.chars.truncate(stem_len);
        self.consonant.truncate(stem_len);
        self.extend(replacement.chars());
    }

    /// The rule with the longest suffix the word ends with.
    fn longest_rule<'r>(&self, rules: &[(&'r str, &'r str)]) -> Option<(usize, &'r str, &'r str)> {
        rules
            .iter()
            .filter_map(|&(suffix, replacement)| {
                self.stem_len(suffix).map(|s| (s, suffix, replacement))
            })
            .min_by_key(|&(s, _, _)| s)
    }

    fn replace_longest(&mut self, rules: &[(&str, &str)], min_measure: usize) {
        if let Some((s, _, replacement)) = self.longest_rule(rules) {
            if self.measure(s) > min_measure {
                self.set_suffix(s, replacement);
            }
        }
    }

    fn step1a(&mut self) {
        if let Some(s) = self.stem_len("sses") {
            self.set_suffix(s, "ss");
        } else if let Some(s) = self.stem_len("ies") {
            self.set_suffix(s, "i");
        } else if self.stem_len("ss").is_none() {
            if let Some(s) = self.stem_len("s") {
                self.set_suffix(s, "");
            }
        }
    }

    fn step1b(&mut self) {
        if let Some(s) = self.stem_len("eed") {
            if self.measure(s) > 0 {
                self.set_suffix(s, "ee");
            }
            return;
        }

        let stripped = ["ed", "ing"]
            .iter()
            .find_map(|suffix| self.stem_len(suffix))
            .filter(|&s| self.has_vowel(s));

        if let Some(s) = stripped {
            self.set_suffix(s, "");
            self.restore_after_strip();
        }
    }

    /// Second half of step 1b, only run when `ed` or `ing` was removed.
    fn restore_after_strip(&mut self) {
        let len = self.len();
        if ["at", "bl", "iz"].iter().any(|s| self.stem_len(s).is_some()) {
            self.set_suffix(len, "e");
        } else if self.ends_double_consonant(len)
            && !matches!(self.last(), Some('l' | 's' | 'z'))
        {
            self.set_suffix(len - 1, "");
        } else if self.measure(len) == 1 && self.ends_cvc(len) {
            self.set_suffix(len, "e");
        }
    }

    fn step1c(&mut self) {
        if let Some(s) = self.stem_len("y") {
            if s >= 1 && self.is_consonant(s - 1) && self.has_vowel(s) {
                self.set_suffix(s, "i");
            }
        }
    }

    fn step2(&mut self) {
        self.replace_longest(STEP2_RULES, 0);
    }

    fn step3(&mut self) {
        self.replace_longest(STEP3_RULES, 0);
    }

    fn step4(&mut self) {
        if let Some((s, suffix, _)) = self.longest_rule(STEP4_RULES) {
            if suffix == "ion" && !(s >= 1 && matches!(self.chars[s - 1], 's' | 't')) {
                return;
            }
            if self.measure(s) > 1 {
                self.set_suffix(s, "");
            }
        }
    }

    fn step5a(&mut self) {
        if let Some(s) = self.stem_len("e") {
            let m = self.measure(s);
            if m > 1 || (m == 1 && !self.ends_cvc(s)) {
                self.set_suffix(s, "");
            }
        }
    }

    fn step5b(&mut self) {
        let len = self.len();
        if self.last() == Some('l') && self.ends_double_consonant(len) && self.measure(len) > 1 {
            self.set_suffix(len - 1, "");
        }
    }
}
