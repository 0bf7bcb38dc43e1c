use rand::Rng;

const CONSONANTS: &[u8] = b"bcdfghjklmnpqrstvwxyz";
const VOWELS: &[u8] = b"aeiou";

pub const MAX_NAME_LEN: usize = 10;

/// Builds a name of 1 to `MAX_NAME_LEN` letters alternating consonant and
/// vowel, starting with an upper case consonant.
pub fn pronounceable_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let len = rng.random_range(1..=MAX_NAME_LEN);
    let mut name = String::with_capacity(len);

    for position in 0..len {
        let pool = if position % 2 == 0 { CONSONANTS } else { VOWELS };
        let letter = pool[rng.random_range(0..pool.len())] as char;
        if position == 0 {
            name.push(letter.to_ascii_uppercase());
        } else {
            name.push(letter);
        }
    }
    name
}
