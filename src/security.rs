use subtle::ConstantTimeEq;

/// Whether two secrets are equal, in time independent of where they differ.
///
/// The password step compares the password against its confirmation on
/// every edit, and the result drives a visible hint. A short-circuiting
/// `==` would let the timing of that hint reveal how long a prefix of the
/// password had been typed correctly. Only the lengths are compared
/// eagerly; the length of a password is not treated as secret.
pub fn secrets_match(a: &str, b: &str) -> bool {
    a.len() == b.len() && bool::from(a.as_bytes().ct_eq(b.as_bytes()))
}
