//! API token formatting and parsing.

use std::{fmt, str::FromStr};

use rand::{RngCore, rngs::OsRng};
use thiserror::Error;
use uuid::Uuid;
use zeroize::Zeroize;

/// API token identifier prefix.
pub const API_TOKEN_PREFIX: &str = "kk";

/// Number of secret bytes encoded in a token.
pub const API_TOKEN_SECRET_BYTES: usize = 32;

/// Token format/hash version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiTokenVersion {
    V1,
}

impl ApiTokenVersion {
    #[must_use]
    pub const fn as_i16(self) -> i16 {
        match self {
            Self::V1 => 1,
        }
    }

    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::V1 => "v1",
        }
    }
}

impl TryFrom<i16> for ApiTokenVersion {
    type Error = ApiTokenError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::V1),
            _ => Err(ApiTokenError::UnsupportedVersion),
        }
    }
}

impl FromStr for ApiTokenVersion {
    type Err = ApiTokenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "v1" => Ok(Self::V1),
            _ => Err(ApiTokenError::UnsupportedVersion),
        }
    }
}

/// Random token secret material. Zeroed on drop, never printed.
#[derive(Clone)]
pub struct ApiTokenSecret {
    bytes: [u8; API_TOKEN_SECRET_BYTES],
}

impl ApiTokenSecret {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; API_TOKEN_SECRET_BYTES]) -> Self {
        Self { bytes }
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; API_TOKEN_SECRET_BYTES] {
        &self.bytes
    }

    /// Lowercase hex rendering of the secret.
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.bytes.iter().fold(
            String::with_capacity(API_TOKEN_SECRET_BYTES * 2),
            |mut acc, byte| {
                use fmt::Write as _;

                // Writing to a String cannot fail.
                let _ = write!(acc, "{byte:02x}");
                acc
            },
        )
    }
}

impl fmt::Debug for ApiTokenSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiTokenSecret(**redacted**)")
    }
}

impl Drop for ApiTokenSecret {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

/// The components of a presented bearer token.
#[derive(Debug, Clone)]
pub struct ParsedApiToken {
    pub token_uuid: Uuid,
    pub version: ApiTokenVersion,
    pub secret: ApiTokenSecret,
}

#[derive(Debug, Error)]
pub enum ApiTokenError {
    #[error("api token format is invalid")]
    InvalidFormat,

    #[error("api token uses an unsupported version")]
    UnsupportedVersion,

    #[error("api token secret encoding is invalid")]
    InvalidSecretEncoding,
}

/// Draw fresh secret material from the OS RNG.
#[must_use]
pub fn generate_api_token_secret() -> ApiTokenSecret {
    let mut secret = [0_u8; API_TOKEN_SECRET_BYTES];

    OsRng.fill_bytes(&mut secret);

    ApiTokenSecret::from_bytes(secret)
}

/// Render a raw bearer token: `kk_v1_<uuid>.<secret hex>`.
#[must_use]
pub fn format_api_token(
    token_uuid: Uuid,
    version: ApiTokenVersion,
    secret: &ApiTokenSecret,
) -> String {
    format!(
        "{API_TOKEN_PREFIX}_{}_{}.{}",
        version.segment(),
        token_uuid.simple(),
        secret.to_hex()
    )
}

/// Split a presented bearer token back into its components.
///
/// # Errors
///
/// Returns an [`ApiTokenError`] when the prefix, version, uuid or secret
/// segment does not match the expected shape.
pub fn parse_api_token(token: &str) -> Result<ParsedApiToken, ApiTokenError> {
    let (identifier, secret_hex) = token.split_once('.').ok_or(ApiTokenError::InvalidFormat)?;

    let mut segments = identifier.splitn(3, '_');

    let prefix = segments.next().ok_or(ApiTokenError::InvalidFormat)?;
    let version_segment = segments.next().ok_or(ApiTokenError::InvalidFormat)?;
    let uuid_segment = segments.next().ok_or(ApiTokenError::InvalidFormat)?;

    if prefix != API_TOKEN_PREFIX {
        return Err(ApiTokenError::InvalidFormat);
    }

    let version = version_segment.parse::<ApiTokenVersion>()?;

    let token_uuid = Uuid::try_parse(uuid_segment).map_err(|_e| ApiTokenError::InvalidFormat)?;

    Ok(ParsedApiToken {
        token_uuid,
        version,
        secret: decode_secret_hex(secret_hex)?,
    })
}

fn decode_secret_hex(secret_hex: &str) -> Result<ApiTokenSecret, ApiTokenError> {
    let raw = secret_hex.as_bytes();

    if raw.len() != API_TOKEN_SECRET_BYTES * 2 {
        return Err(ApiTokenError::InvalidSecretEncoding);
    }

    let mut secret = [0_u8; API_TOKEN_SECRET_BYTES];

    for (byte, pair) in secret.iter_mut().zip(raw.chunks_exact(2)) {
        let hi = hex_nibble(pair[0]).ok_or(ApiTokenError::InvalidSecretEncoding)?;
        let lo = hex_nibble(pair[1]).ok_or(ApiTokenError::InvalidSecretEncoding)?;

        *byte = (hi << 4) | lo;
    }

    Ok(ApiTokenSecret::from_bytes(secret))
}

fn hex_nibble(value: u8) -> Option<u8> {
    match value {
        b'0'..=b'9' => Some(value - b'0'),
        b'a'..=b'f' => Some(value - b'a' + 10),
        _ => None,
    }
}
