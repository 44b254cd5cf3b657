use tracing::error;

pub const DEFAULT_ID_LENGTH: usize = 8;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

// the largest multiple of 36 that fits in a byte; anything above it would make
// the first few characters more likely than the rest
const UNBIASED_LIMIT: u8 = 252;

// maps random bytes onto the alphabet, skipping the biased ones
pub fn encode_id(bytes: &[u8]) -> String {
    bytes
        .iter()
        .filter(|b| **b < UNBIASED_LIMIT)
        .map(|b| ALPHABET[usize::from(*b) % ALPHABET.len()] as char)
        .collect()
}

// short random ids for dom keys and the like.  no uniqueness guarantee beyond
// what 36^len gives you
pub fn generate_id(len: usize) -> String {
    let mut id = String::with_capacity(len);

    while id.len() < len {
        let mut bytes = vec![0u8; len - id.len() + 4];

        if let Err(err) = getrandom::getrandom(&mut bytes) {
            error!({ error = %err }, "failed to get random bytes for id");
            // still fixed-length, just not random
            id.extend(std::iter::repeat_n('0', len - id.len()));
            break;
        }

        id.push_str(&encode_id(&bytes));
        id.truncate(len);
    }

    id
}
