//! Secret generation.
//!
//! Produces every piece of secret material one instance needs: labelled hex
//! tokens for Postgres, Hasura and the hook, plus the RSA keypair Hlambda
//! signs JWTs with and Hasura verifies them with.

use rand::{CryptoRng, RngCore};
use rsa::pkcs8::{EncodePrivateKey, EncodePublicKey, LineEnding};
use rsa::RsaPrivateKey;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants;
use crate::core::types::{EscapedPem, SecretValue};
use crate::error::EntropyError;

/// `n_bytes` of secure randomness as `2 * n_bytes` lowercase hex characters.
///
/// # Errors
///
/// Returns `EntropyError` if the source cannot produce bytes.
pub fn random_hex<R: RngCore + CryptoRng>(
    rng: &mut R,
    n_bytes: usize,
) -> Result<SecretValue, EntropyError> {
    let mut bytes = Zeroizing::new(vec![0u8; n_bytes]);
    rng.try_fill_bytes(bytes.as_mut_slice())?;
    Ok(Zeroizing::new(hex::encode(bytes.as_slice())))
}

/// A hex secret behind a readability label such as `PG_`.
///
/// The label carries no entropy.
pub fn labeled<R: RngCore + CryptoRng>(
    rng: &mut R,
    label: &str,
) -> Result<SecretValue, EntropyError> {
    let token = random_hex(rng, constants::SECRET_BYTES)?;
    Ok(Zeroizing::new(format!("{}{}", label, token.as_str())))
}

/// Flatten a PEM document so it fits in a single `KEY="value"` line.
pub fn escape_newlines(pem: &str) -> String {
    pem.replace('\n', "\\n")
}

/// RSA keypair in escaped PEM form.
pub struct Keypair {
    /// PKCS#8 private key.
    pub private_pem: EscapedPem,
    /// SPKI public key.
    pub public_pem: EscapedPem,
}

impl Keypair {
    /// Generate a fresh 2048-bit keypair.
    ///
    /// # Errors
    ///
    /// Returns `EntropyError` if generation or PEM encoding fails.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, EntropyError> {
        debug!("Generating {}-bit RSA keypair", constants::RSA_BITS);

        let private_key = RsaPrivateKey::new(rng, constants::RSA_BITS)?;
        let private_pem = private_key.to_pkcs8_pem(LineEnding::LF)?;
        let public_pem = private_key
            .to_public_key()
            .to_public_key_pem(LineEnding::LF)?;

        Ok(Self {
            private_pem: Zeroizing::new(escape_newlines(&private_pem)),
            public_pem: Zeroizing::new(escape_newlines(&public_pem)),
        })
    }
}

/// All secrets for one instance.
///
/// Only constructible through [`SecretBundle::generate`], which either fills
/// every field or fails.
pub struct SecretBundle {
    postgres_password: SecretValue,
    hasura_admin_secret: SecretValue,
    hook_secret: SecretValue,
    hlambda_admin_secret: SecretValue,
    keypair: Keypair,
}

impl SecretBundle {
    /// Generate the complete bundle.
    ///
    /// # Errors
    ///
    /// Returns the first `EntropyError`; nothing generated so far escapes.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, EntropyError> {
        let postgres_password = labeled(rng, constants::POSTGRES_PASSWORD_LABEL)?;
        let hasura_admin_secret = labeled(rng, constants::HASURA_ADMIN_SECRET_LABEL)?;
        let hook_secret = labeled(rng, constants::HOOK_SECRET_LABEL)?;
        let keypair = Keypair::generate(rng)?;
        let hlambda_admin_secret = labeled(rng, constants::HLAMBDA_ADMIN_SECRET_LABEL)?;

        debug!("Secret bundle generated");

        Ok(Self {
            postgres_password,
            hasura_admin_secret,
            hook_secret,
            hlambda_admin_secret,
            keypair,
        })
    }

    pub fn postgres_password(&self) -> &str {
        &self.postgres_password
    }

    pub fn hasura_admin_secret(&self) -> &str {
        &self.hasura_admin_secret
    }

    pub fn hook_secret(&self) -> &str {
        &self.hook_secret
    }

    pub fn hlambda_admin_secret(&self) -> &str {
        &self.hlambda_admin_secret
    }

    /// Escaped PKCS#8 private key, used by Hlambda to sign JWTs.
    pub fn private_pem(&self) -> &str {
        &self.keypair.private_pem
    }

    /// Escaped SPKI public key, used by Hasura to verify JWTs.
    pub fn public_pem(&self) -> &str {
        &self.keypair.public_pem
    }
}
