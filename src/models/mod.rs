pub mod club;
pub mod permission;
pub mod role;
pub mod snapshot;
pub mod user;

pub use club::*;
pub use permission::*;
pub use role::*;
pub use snapshot::*;
pub use user::*;

use std::sync::atomic::{AtomicU64, Ordering};

static ID_SEQ: AtomicU64 = AtomicU64::new(0);

/// Current time as an RFC 3339 string.
pub fn now_rfc3339() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap()
}

/// Timestamp-based record id (`<prefix>-<unix millis>-<seq>`). The sequence
/// suffix keeps ids unique when records are created within the same
/// millisecond.
pub fn generate_id(prefix: &str) -> String {
    let millis = time::OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    let seq = ID_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}-{}", prefix, millis, seq)
}
