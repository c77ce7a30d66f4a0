pub mod commit;
pub mod object_id;
pub mod snapshot;

use sha1::{Digest, Sha1};

pub const OBJECT_ID_LENGTH: usize = 40;

/// Hex-encoded SHA-1 over the concatenation of `parts`.
pub(crate) fn sha1_hex(parts: &[&[u8]]) -> String {
    let mut hasher = Sha1::new();
    for part in parts {
        hasher.update(part);
    }

    format!("{:x}", hasher.finalize())
}
