use crate::error::Result;

/// Turns entry bodies into the ciphertext stored in `.txt.encrypted` files and back.
/// Ciphertext is raw bytes and need not be valid UTF-8.
///
/// No implementation ships with daybook. An [`EntryStore`](crate::EntryStore) without
/// a cipher refuses to read or produce encrypted entries instead of passing ciphertext
/// through as text.
pub trait Cipher {
    fn encrypt(&self, plaintext: &str) -> Result<Vec<u8>>;
    fn decrypt(&self, ciphertext: &[u8]) -> Result<String>;
}
