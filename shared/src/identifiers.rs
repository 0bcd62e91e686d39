//! Certificate id and verification code generation
//!
//! Ids are `CERT-<unix millis>-<6 base36>` and verification codes are
//! `VER-<9 base36>`. Both draw from the caller's random source and need no
//! registry, so uniqueness is probabilistic; the generator checks for
//! collisions against known ids.

use chrono::{DateTime, Utc};
use rand::Rng;

pub const CERTIFICATE_ID_PREFIX: &str = "CERT-";
pub const VERIFICATION_CODE_PREFIX: &str = "VER-";

const ID_FRAGMENT_LEN: usize = 6;
const CODE_FRAGMENT_LEN: usize = 9;

const BASE36_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Uppercase base-36 string of exactly `len` characters
pub fn base36_fragment<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| BASE36_ALPHABET[rng.gen_range(0..BASE36_ALPHABET.len())] as char)
        .collect()
}

/// New certificate id stamped with the current wall-clock time
pub fn new_certificate_id() -> String {
    new_certificate_id_with(&mut rand::thread_rng(), Utc::now())
}

pub fn new_certificate_id_with<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> String {
    format!(
        "{}{}-{}",
        CERTIFICATE_ID_PREFIX,
        now.timestamp_millis(),
        base36_fragment(rng, ID_FRAGMENT_LEN)
    )
}

pub fn new_verification_code() -> String {
    new_verification_code_with(&mut rand::thread_rng())
}

pub fn new_verification_code_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{}{}",
        VERIFICATION_CODE_PREFIX,
        base36_fragment(rng, CODE_FRAGMENT_LEN)
    )
}

/// Whether `value` has the shape of a generated certificate id
pub fn is_certificate_id(value: &str) -> bool {
    let Some(rest) = value.strip_prefix(CERTIFICATE_ID_PREFIX) else {
        return false;
    };
    let Some((millis, fragment)) = rest.split_once('-') else {
        return false;
    };
    !millis.is_empty()
        && millis.chars().all(|c| c.is_ascii_digit())
        && is_base36_fragment(fragment, ID_FRAGMENT_LEN)
}

/// Whether `value` has the shape of a generated verification code
pub fn is_verification_code(value: &str) -> bool {
    value
        .strip_prefix(VERIFICATION_CODE_PREFIX)
        .map(|fragment| is_base36_fragment(fragment, CODE_FRAGMENT_LEN))
        .unwrap_or(false)
}

fn is_base36_fragment(fragment: &str, len: usize) -> bool {
    fragment.len() == len
        && fragment
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
}
