use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

fn keyed_mac(secret: &str) -> HmacSha256 {
    // HMAC accepts keys of any length.
    HmacSha256::new_from_slice(secret.as_bytes())
        .unwrap_or_else(|error| panic!("hmac rejected key: {error}"))
}

/// Keyed password hash, hex encoded. The secret comes from configuration
/// (`HASH_SECRET`), never from the request.
pub fn hash_password(password: &str, secret: &str) -> String {
    let mut mac = keyed_mac(secret);
    mac.update(password.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

pub fn verify_password(password: &str, hash: &str, secret: &str) -> bool {
    let Ok(expected) = hex::decode(hash) else {
        return false;
    };
    let mut mac = keyed_mac(secret);
    mac.update(password.as_bytes());
    mac.verify_slice(&expected).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_verifies() {
        let hash = hash_password("hunter2!", "secret");
        assert!(verify_password("hunter2!", &hash, "secret"));
    }

    #[test]
    fn wrong_password_fails() {
        let hash = hash_password("hunter2!", "secret");
        assert!(!verify_password("hunter3!", &hash, "secret"));
    }

    #[test]
    fn wrong_secret_fails() {
        let hash = hash_password("hunter2!", "secret");
        assert!(!verify_password("hunter2!", &hash, "other-secret"));
    }

    #[test]
    fn garbage_hash_fails_instead_of_panicking() {
        assert!(!verify_password("hunter2!", "not-hex", "secret"));
    }
}
