//! Password generator - draws characters from the usable pool.

use rand::Rng;
use secrecy::SecretString;

use crate::charset::usable_charset;
use crate::config::GeneratorConfig;

/// Generates a password for `config` using the thread-local RNG.
///
/// Each character is picked independently and uniformly from the usable
/// pool. The RNG is not meant to be cryptographically hardened.
pub fn generate_password(config: &GeneratorConfig) -> SecretString {
    generate_password_with(config, &mut rand::thread_rng())
}

/// Same as [`generate_password`] with a caller supplied randomness source.
pub fn generate_password_with<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> SecretString {
    let charset = usable_charset(config);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "generating password: length={} pool={}",
        config.length(),
        charset.len()
    );

    let password: String = (0..config.length())
        .map(|_| charset[rng.gen_range(0..charset.len())])
        .collect();

    SecretString::new(password.into())
}
