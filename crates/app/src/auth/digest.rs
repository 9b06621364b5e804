//! Token verifier digests.

use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::{
    auth::token::{ApiTokenSecret, ApiTokenVersion},
    domain::customers::models::CustomerUuid,
};

/// Compute the stored verifier for a token.
///
/// The digest input binds together the token uuid, format version, owning
/// customer and secret — so a secret replayed against a different token row
/// or customer never verifies.
///
/// Canonical input: `{token_uuid_hex}:{version_i16}:{customer_uuid_hex}:{secret_hex}`.
#[must_use]
pub fn verifier_digest(
    token_uuid: &Uuid,
    version: ApiTokenVersion,
    customer: &CustomerUuid,
    secret: &ApiTokenSecret,
) -> String {
    let input = format!(
        "{}:{}:{}:{}",
        token_uuid.simple(),
        version.as_i16(),
        customer.into_uuid().simple(),
        secret.to_hex(),
    );

    format!("{:x}", Sha256::digest(input.as_bytes()))
}
