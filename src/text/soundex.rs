//! Soundex phonetic encoding.

enum Class {
    Digit(char),
    /// Vowels and `Y`: reset the adjacency state without emitting a digit.
    Vowel,
    /// `H`/`W`: transparent to adjacency — two equal-coded consonants
    /// separated only by `H` or `W` still collapse into one digit.
    Transparent,
}

fn classify(c: char) -> Class {
    match c.to_ascii_uppercase() {
        'B' | 'F' | 'P' | 'V' => Class::Digit('1'),
        'C' | 'G' | 'J' | 'K' | 'Q' | 'S' | 'X' | 'Z' => Class::Digit('2'),
        'D' | 'T' => Class::Digit('3'),
        'L' => Class::Digit('4'),
        'M' | 'N' => Class::Digit('5'),
        'R' => Class::Digit('6'),
        'H' | 'W' => Class::Transparent,
        _ => Class::Vowel,
    }
}

/// Computes the 4-character Soundex code for `token`.
///
/// Returns an empty string if `token` does not start with an alphabetic
/// character.
pub fn soundex(token: &str) -> String {
    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    if !first.is_alphabetic() {
        return String::new();
    }

    let mut code = String::with_capacity(4);
    code.push(first.to_ascii_uppercase());

    let mut last_digit = match classify(first) {
        Class::Digit(d) => Some(d),
        Class::Vowel | Class::Transparent => None,
    };
    for c in chars {
        match classify(c) {
            Class::Digit(d) => {
                if last_digit != Some(d) {
                    code.push(d);
                }
                last_digit = Some(d);
            }
            Class::Vowel => last_digit = None,
            Class::Transparent => {}
        }
    }

    while code.len() < 4 {
        code.push('0');
    }
    code.truncate(4);
    code
}
