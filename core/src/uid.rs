//! Unique identifier (UID) validation and generation.
//!
//! A valid UID is a dot-separated sequence of numeric components,
//! at most 64 characters long,
//! in which no component is empty
//! and no component has a leading zero unless it is the literal `0`.

use once_cell::sync::Lazy;
use snafu::{ensure, Snafu};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// The maximum length of a UID, in characters.
pub const MAX_UID_LEN: usize = 64;

/// The UID root for identifiers derived from a UUID (ISO/IEC 9834-8).
pub const UUID_ROOT: &str = "2.25";

/// The reason why a string is not a valid UID.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[non_exhaustive]
pub enum InvalidUidError {
    /// The UID is empty
    #[snafu(display("UID is empty"))]
    Empty,
    /// The UID is longer than 64 characters
    #[snafu(display("UID has {} characters, maximum is 64", len))]
    TooLong { len: usize },
    /// A component between two dots is empty
    #[snafu(display("UID component #{} is empty", index))]
    EmptyComponent { index: usize },
    /// A component has a leading zero
    #[snafu(display("UID component #{} has a leading zero", index))]
    LeadingZero { index: usize },
    /// A character other than a digit or a dot was found
    #[snafu(display("UID contains invalid character {:?} at position {}", character, position))]
    InvalidCharacter { character: char, position: usize },
}

/// Check whether the given string is a valid UID.
///
/// Trailing NUL padding is not part of the UID
/// and must be removed beforehand.
///
/// # Example
///
/// ```
/// # use p10_core::uid::validate_uid;
/// assert!(validate_uid("1.2.840.10008.1.1").is_ok());
/// assert!(validate_uid("1.2..3").is_err());
/// assert!(validate_uid("1.02.3").is_err());
/// ```
pub fn validate_uid(uid: &str) -> Result<(), InvalidUidError> {
    ensure!(!uid.is_empty(), EmptySnafu);
    ensure!(uid.len() <= MAX_UID_LEN, TooLongSnafu { len: uid.len() });

    if let Some((position, character)) = uid
        .char_indices()
        .find(|(_, c)| *c != '.' && !c.is_ascii_digit())
    {
        return InvalidCharacterSnafu {
            character,
            position,
        }
        .fail();
    }

    for (index, component) in uid.split('.').enumerate() {
        ensure!(!component.is_empty(), EmptyComponentSnafu { index });
        ensure!(
            component == "0" || !component.starts_with('0'),
            LeadingZeroSnafu { index }
        );
    }
    Ok(())
}

/// Check whether the given string is a valid UID.
#[inline]
pub fn is_valid_uid(uid: &str) -> bool {
    validate_uid(uid).is_ok()
}

/// Process-wide seed, fixed on first use.
static PROCESS_SEED: Lazy<u64> = Lazy::new(|| {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let pid = u64::from(std::process::id());
    // keep it positive and free of a leading zero once printed
    (nanos ^ pid.rotate_left(32)) | 1
});

/// Process-wide counter of generated UIDs, never reset.
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// A generator of new, unique UIDs under a given root.
///
/// All generators in a process share one counter,
/// so UIDs generated concurrently from any number of threads
/// never collide.
///
/// With the default [`UUID_ROOT`],
/// the generated UID has the form `2.25.<n>`
/// where `n` is a single 128-bit integer
/// combining the process seed and the counter.
/// Under any other root, the form is `<root>.<seed>.<counter>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UidGenerator {
    root: String,
}

impl Default for UidGenerator {
    fn default() -> Self {
        UidGenerator {
            root: UUID_ROOT.to_string(),
        }
    }
}

impl UidGenerator {
    /// Create a UID generator under the given organization root.
    ///
    /// Fails if the root is not a valid UID
    /// or leaves no room for the generated suffix.
    pub fn new(root: impl Into<String>) -> Result<Self, InvalidUidError> {
        let root = root.into();
        validate_uid(&root)?;
        // a seed of up to 20 digits and a counter of up to 20 digits
        let max_len = root.len() + 2 + 20 + 20;
        ensure!(max_len <= MAX_UID_LEN, TooLongSnafu { len: max_len });
        Ok(UidGenerator { root })
    }

    /// The organization root of this generator.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Generate a new UID.
    pub fn generate(&self) -> String {
        let count = COUNTER.fetch_add(1, Ordering::Relaxed);
        let seed = *PROCESS_SEED;
        if self.root == UUID_ROOT {
            let n = (u128::from(seed) << 64) | u128::from(count);
            format!("{}.{}", UUID_ROOT, n)
        } else {
            format!("{}.{}.{}", self.root, seed, count)
        }
    }
}

/// Generate a new UID under the [`UUID_ROOT`].
pub fn new_uid() -> String {
    UidGenerator::default().generate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn accepts_valid_uids() {
        assert_eq!(validate_uid("1.2.840.10008.1.1"), Ok(()));
        assert_eq!(validate_uid("1.2.840.10008.1.2.1"), Ok(()));
        assert_eq!(validate_uid("0.0"), Ok(()));
        assert_eq!(validate_uid("2.25.329800735698586629295641978511506172918"), Ok(()));
    }

    #[test]
    fn rejects_empty_components() {
        assert_eq!(
            validate_uid("1.2..3"),
            Err(InvalidUidError::EmptyComponent { index: 2 })
        );
        assert_eq!(
            validate_uid("1.2.3."),
            Err(InvalidUidError::EmptyComponent { index: 3 })
        );
        assert_eq!(validate_uid(""), Err(InvalidUidError::Empty));
    }

    #[test]
    fn rejects_long_uids() {
        let uid = format!("1.{}", "2".repeat(63));
        assert_eq!(uid.len(), 65);
        assert_eq!(validate_uid(&uid), Err(InvalidUidError::TooLong { len: 65 }));
    }

    #[test]
    fn rejects_leading_zeros_and_letters() {
        assert_eq!(
            validate_uid("1.2.03"),
            Err(InvalidUidError::LeadingZero { index: 2 })
        );
        assert_eq!(
            validate_uid("1.2.a"),
            Err(InvalidUidError::InvalidCharacter {
                character: 'a',
                position: 4
            })
        );
        assert!(!is_valid_uid("1.2.3\0"));
    }

    #[test]
    fn generated_uids_are_valid_and_unique() {
        let gen = UidGenerator::default();
        let uids: HashSet<String> = (0..100).map(|_| gen.generate()).collect();
        assert_eq!(uids.len(), 100);
        for uid in &uids {
            assert!(uid.starts_with("2.25."));
            validate_uid(uid).unwrap();
        }
    }

    #[test]
    fn generated_uids_under_custom_root() {
        let gen = UidGenerator::new("1.2.826.0.1").unwrap();
        let a = gen.generate();
        let b = gen.generate();
        assert_ne!(a, b);
        assert!(a.starts_with("1.2.826.0.1."));
        validate_uid(&a).unwrap();
    }

    #[test]
    fn unique_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| (0..50).map(|_| new_uid()).collect::<Vec<_>>()))
            .collect();
        let mut all = HashSet::new();
        for h in handles {
            for uid in h.join().unwrap() {
                assert!(all.insert(uid));
            }
        }
        assert_eq!(all.len(), 200);
    }

    #[test]
    fn root_too_long() {
        let root = format!("1.{}", "2".repeat(30));
        assert!(matches!(
            UidGenerator::new(root),
            Err(InvalidUidError::TooLong { .. })
        ));
        assert!(UidGenerator::new("1..2").is_err());
    }
}
