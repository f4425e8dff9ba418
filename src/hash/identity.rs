//! Hash function identity: the descriptive fingerprint of a hash algorithm.
//!
//! A [`HashFunctionIdentity`] describes a hash algorithm (name, provider,
//! signedness, process type, signature) without needing the algorithm itself.
//! It is the currency of the compatibility boundary: every entry point that
//! accepts both a hasher and a [`Shape`](crate::Shape) checks that their
//! identities match before producing a single index, so hashers and shapes
//! built around incompatible algorithms can never be silently mixed.
//!
//! Two identities are compatible iff their names match case-insensitively and
//! their signedness and process type match exactly. The provider and the
//! signature are descriptive only: a reimplementation of `md5` by a different
//! provider is still `md5`.
//!
//! # Examples
//!
//! ```
//! use bloomhash::hash::{HashFunctionIdentity, Signedness, ProcessType, are_equal};
//!
//! let a = HashFunctionIdentity::new(
//!     "Acme", "MD5", Signedness::Signed, ProcessType::Cyclic, 0,
//! );
//! let b = HashFunctionIdentity::new(
//!     "OtherProvider", "md5", Signedness::Signed, ProcessType::Cyclic, 99,
//! );
//! assert!(are_equal(&a, &b)); // provider and signature are ignored
//! ```

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{BloomHashError, Result};

/// Whether a hash algorithm treats its 64-bit output as signed or unsigned.
///
/// Purely descriptive from this crate's point of view (all arithmetic here is
/// unsigned), but part of the compatibility contract: two algorithms that
/// agree on everything except signedness produce different index sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Signedness {
    /// Output is interpreted as a signed 64-bit value.
    Signed,
    /// Output is interpreted as an unsigned 64-bit value.
    Unsigned,
}

impl fmt::Display for Signedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signed => write!(f, "SIGNED"),
            Self::Unsigned => write!(f, "UNSIGNED"),
        }
    }
}

/// How a hash algorithm derives values for successive seeds of the same item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProcessType {
    /// The first invocation (seed 0) computes an expensive digest; later
    /// seeds for the same item are derived cheaply from cached state.
    Cyclic,
    /// Every invocation recomputes the digest in full; no state is reused.
    Iterative,
}

impl fmt::Display for ProcessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cyclic => write!(f, "CYCLIC"),
            Self::Iterative => write!(f, "ITERATIVE"),
        }
    }
}

/// Descriptive identity of a hash algorithm.
///
/// Attached permanently to a [`HashFunction`](crate::hash::HashFunction), or
/// synthesized standalone (e.g. reconstructed from a wire format without the
/// algorithm present).
///
/// # Equality
///
/// `PartialEq` and `Hash` follow the compatibility contract: case-insensitive
/// name, signedness and process type. Provider and signature are excluded, so
/// equal identities always hash identically and the type is safe to use as a
/// map or set key.
///
/// # Examples
///
/// ```
/// use bloomhash::hash::{HashFunctionIdentity, Signedness, ProcessType};
///
/// let identity = HashFunctionIdentity::new(
///     "bloomhash", "xx3-128", Signedness::Unsigned, ProcessType::Cyclic, 0,
/// );
/// assert_eq!(identity.common_string(), "xx3-128-UNSIGNED-CYCLIC");
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HashFunctionIdentity {
    provider: Cow<'static, str>,
    name: Cow<'static, str>,
    signedness: Signedness,
    process_type: ProcessType,
    signature: u64,
}

impl HashFunctionIdentity {
    /// Create a new identity.
    ///
    /// # Arguments
    ///
    /// * `provider` - Who supplies the implementation (descriptive only)
    /// * `name` - Algorithm name, compared case-insensitively
    /// * `signedness` - Signedness of the algorithm's 64-bit output
    /// * `process_type` - How successive seeds are derived
    /// * `signature` - 64-bit value produced by applying the algorithm to its
    ///   own [`prepare_signature_buffer`](Self::prepare_signature_buffer)
    ///   output with seed 0 (use 0 for synthesized identities)
    #[must_use]
    pub fn new(
        provider: impl Into<Cow<'static, str>>,
        name: impl Into<Cow<'static, str>>,
        signedness: Signedness,
        process_type: ProcessType,
        signature: u64,
    ) -> Self {
        Self {
            provider: provider.into(),
            name: name.into(),
            signedness,
            process_type,
            signature,
        }
    }

    /// Replace the signature, consuming and returning the identity.
    ///
    /// Used by concrete hash functions that must exist before they can hash
    /// their own canonical description.
    #[must_use]
    pub fn with_signature(mut self, signature: u64) -> Self {
        self.signature = signature;
        self
    }

    /// Algorithm name (case-insensitive for compatibility purposes).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Implementation provider (descriptive only).
    #[must_use]
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Signedness of the algorithm's output.
    #[must_use]
    pub const fn signedness(&self) -> Signedness {
        self.signedness
    }

    /// Process type of the algorithm.
    #[must_use]
    pub const fn process_type(&self) -> ProcessType {
        self.process_type
    }

    /// The algorithm's self-hash signature.
    #[must_use]
    pub const fn signature(&self) -> u64 {
        self.signature
    }

    /// Canonical `name-SIGNEDNESS-PROCESSTYPE` display string.
    ///
    /// This is the form carried in compatibility error messages.
    #[must_use]
    pub fn common_string(&self) -> String {
        format!("{}-{}-{}", self.name, self.signedness, self.process_type)
    }

    /// Canonical UTF-8 byte buffer for signature computation.
    ///
    /// The name is upper-cased so that signatures are stable across the
    /// case-insensitive name comparison. A function's signature is defined as
    /// the function applied to this buffer with seed 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomhash::hash::{HashFunctionIdentity, Signedness, ProcessType};
    ///
    /// let identity = HashFunctionIdentity::new(
    ///     "x", "md5", Signedness::Signed, ProcessType::Cyclic, 0,
    /// );
    /// assert_eq!(identity.prepare_signature_buffer(), b"MD5-SIGNED-CYCLIC");
    /// ```
    #[must_use]
    pub fn prepare_signature_buffer(&self) -> Vec<u8> {
        format!(
            "{}-{}-{}",
            self.name.to_uppercase(),
            self.signedness,
            self.process_type
        )
        .into_bytes()
    }
}

impl fmt::Display for HashFunctionIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.common_string())
    }
}

impl PartialEq for HashFunctionIdentity {
    fn eq(&self, other: &Self) -> bool {
        are_equal(self, other)
    }
}

impl Eq for HashFunctionIdentity {}

impl Hash for HashFunctionIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Lower-cased name keeps the Eq/Hash contract: identities equal
        // under case-insensitive comparison must hash identically.
        for c in self.name.chars().flat_map(char::to_lowercase) {
            c.hash(state);
        }
        self.signedness.hash(state);
        self.process_type.hash(state);
    }
}

/// Check whether two identities describe compatible hash algorithms.
///
/// Compatible means: signedness and process type match exactly, and names
/// match case-insensitively. Provider and signature are ignored.
#[must_use]
pub fn are_equal(a: &HashFunctionIdentity, b: &HashFunctionIdentity) -> bool {
    a.signedness == b.signedness
        && a.process_type == b.process_type
        && a.name.eq_ignore_ascii_case(&b.name)
}

/// Check compatibility, failing with both identities' common-string forms.
///
/// Invoked by every hasher before producing indices for a shape, so an
/// incompatible pairing fails fast with no partial index emission.
///
/// # Errors
///
/// [`BloomHashError::IncompatibleHashFunction`] when the identities do not
/// match per [`are_equal`].
pub fn check_are_equal(a: &HashFunctionIdentity, b: &HashFunctionIdentity) -> Result<()> {
    if are_equal(a, b) {
        Ok(())
    } else {
        Err(BloomHashError::incompatible_hash_function(
            a.common_string(),
            b.common_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn signed_cyclic(provider: &'static str, name: &'static str) -> HashFunctionIdentity {
        HashFunctionIdentity::new(provider, name, Signedness::Signed, ProcessType::Cyclic, 0)
    }

    fn std_hash(identity: &HashFunctionIdentity) -> u64 {
        let mut hasher = DefaultHasher::new();
        identity.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_accessors() {
        let identity = HashFunctionIdentity::new(
            "Acme",
            "MD5",
            Signedness::Signed,
            ProcessType::Cyclic,
            42,
        );
        assert_eq!(identity.provider(), "Acme");
        assert_eq!(identity.name(), "MD5");
        assert_eq!(identity.signedness(), Signedness::Signed);
        assert_eq!(identity.process_type(), ProcessType::Cyclic);
        assert_eq!(identity.signature(), 42);
    }

    #[test]
    fn test_are_equal_ignores_provider_and_case() {
        let a = signed_cyclic("Acme", "MD5");
        let b = signed_cyclic("OtherProvider", "md5");
        assert!(are_equal(&a, &b));
        assert_eq!(a, b);
    }

    #[test]
    fn test_are_equal_ignores_signature() {
        let a = signed_cyclic("Acme", "MD5");
        let b = signed_cyclic("Acme", "MD5").with_signature(0xdead_beef);
        assert!(are_equal(&a, &b));
    }

    #[test]
    fn test_are_equal_rejects_signedness_mismatch() {
        let a = signed_cyclic("Acme", "MD5");
        let b = HashFunctionIdentity::new(
            "Acme",
            "MD5",
            Signedness::Unsigned,
            ProcessType::Cyclic,
            0,
        );
        assert!(!are_equal(&a, &b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_are_equal_rejects_process_type_mismatch() {
        let a = signed_cyclic("Acme", "MD5");
        let b = HashFunctionIdentity::new(
            "Acme",
            "MD5",
            Signedness::Signed,
            ProcessType::Iterative,
            0,
        );
        assert!(!are_equal(&a, &b));
    }

    #[test]
    fn test_are_equal_rejects_name_mismatch() {
        let a = signed_cyclic("Acme", "MD5");
        let b = signed_cyclic("Acme", "SHA1");
        assert!(!are_equal(&a, &b));
    }

    #[test]
    fn test_check_are_equal_carries_both_common_strings() {
        let a = signed_cyclic("Acme", "MD5");
        let b = signed_cyclic("Acme", "SHA1");
        let err = check_are_equal(&a, &b).unwrap_err();
        let display = format!("{err}");
        assert!(display.contains("MD5-SIGNED-CYCLIC"));
        assert!(display.contains("SHA1-SIGNED-CYCLIC"));
    }

    #[test]
    fn test_check_are_equal_ok() {
        let a = signed_cyclic("Acme", "MD5");
        let b = signed_cyclic("Other", "md5");
        assert!(check_are_equal(&a, &b).is_ok());
    }

    #[test]
    fn test_equal_identities_hash_identically() {
        let a = signed_cyclic("Acme", "MD5");
        let b = signed_cyclic("OtherProvider", "md5").with_signature(7);
        assert_eq!(a, b);
        assert_eq!(std_hash(&a), std_hash(&b));
    }

    #[test]
    fn test_common_string() {
        let identity = HashFunctionIdentity::new(
            "x",
            "xx3-128",
            Signedness::Unsigned,
            ProcessType::Cyclic,
            0,
        );
        assert_eq!(identity.common_string(), "xx3-128-UNSIGNED-CYCLIC");
        assert_eq!(format!("{identity}"), "xx3-128-UNSIGNED-CYCLIC");
    }

    #[test]
    fn test_prepare_signature_buffer_uppercases_name() {
        let identity = HashFunctionIdentity::new(
            "x",
            "md5",
            Signedness::Signed,
            ProcessType::Iterative,
            0,
        );
        assert_eq!(identity.prepare_signature_buffer(), b"MD5-SIGNED-ITERATIVE");
    }

    #[test]
    fn test_display_tokens() {
        assert_eq!(format!("{}", Signedness::Signed), "SIGNED");
        assert_eq!(format!("{}", Signedness::Unsigned), "UNSIGNED");
        assert_eq!(format!("{}", ProcessType::Cyclic), "CYCLIC");
        assert_eq!(format!("{}", ProcessType::Iterative), "ITERATIVE");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_identity_serde_round_trip() {
        let identity = HashFunctionIdentity::new(
            "Acme",
            "MD5",
            Signedness::Signed,
            ProcessType::Cyclic,
            42,
        );
        let json = serde_json::to_string(&identity).unwrap();
        let restored: HashFunctionIdentity = serde_json::from_str(&json).unwrap();
        assert_eq!(identity, restored);
        assert_eq!(restored.provider(), "Acme");
        assert_eq!(restored.signature(), 42);
    }
}
