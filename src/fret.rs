//! Fret positions for a target note across one or more open strings.

use indexmap::IndexMap;
use tracing::debug;

use crate::error::FretError;
use crate::note::lookup;

/// Fret (0-11) on an open `string` that sounds `target`. Fret 0 is the open string.
#[allow(dead_code)]
pub fn fret(target: &str, string: &str) -> Result<u8, FretError> {
    let target = lookup(target)?;
    let open = lookup(string)?;
    Ok(target.semitones_above(open))
}

/// Fret for `target` on each string, in input order.
///
/// Repeated string names each get their own entry. The first unknown note,
/// target or string, fails the whole call.
pub fn frets_for_strings<S: AsRef<str>>(
    target: &str,
    strings: &[S],
) -> Result<Vec<(String, u8)>, FretError> {
    let note = lookup(target)?;
    let mut result = Vec::with_capacity(strings.len());
    for string in strings {
        let string = string.as_ref();
        let position = note.semitones_above(lookup(string)?);
        debug!(note = %note, string, fret = position, "resolved fret");
        result.push((string.to_string(), position));
    }
    Ok(result)
}

/// Fret for `target` keyed by string name.
///
/// Entries keep the order each name was first seen; a repeated name
/// overwrites its earlier value.
pub fn frets_by_string<S: AsRef<str>>(
    target: &str,
    strings: &[S],
) -> Result<IndexMap<String, u8>, FretError> {
    let mut keyed = IndexMap::with_capacity(strings.len());
    for (string, position) in frets_for_strings(target, strings)? {
        keyed.insert(string, position);
    }
    Ok(keyed)
}
