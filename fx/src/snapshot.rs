//! JSON snapshot of the rate store.
//!
//! The file is a single JSON object mapping a pair key to its rate, for
//! example `{"USDINR": 82.87, "INRUSD": 0.012067}`. Pairs whose codes have
//! equal length are written concatenated; anything else is written as
//! `FROM/TO` so the split stays unambiguous on load.
//!
//! Loading is lenient per entry: a key or rate that cannot be decoded is
//! logged and skipped, the rest of the file still loads.

use fxgate_common::{CurrencyCode, CurrencyPair};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

use crate::error::{FxError, FxResult};
use crate::store::{is_valid_code, RateStore};

const KEY_SEPARATOR: char = '/';

/// Encode a pair as a snapshot key.
pub fn encode_key(pair: &CurrencyPair) -> String {
    if pair.from.len() == pair.to.len()
        && !pair.from.code().contains(KEY_SEPARATOR)
        && !pair.to.code().contains(KEY_SEPARATOR)
    {
        format!("{}{}", pair.from, pair.to)
    } else {
        format!("{}{}{}", pair.from, KEY_SEPARATOR, pair.to)
    }
}

/// Decode a snapshot key back into a pair.
pub fn decode_key(key: &str) -> FxResult<CurrencyPair> {
    let invalid = || FxError::Snapshot(format!("invalid pair key {key:?}"));

    let (from, to) = match key.split_once(KEY_SEPARATOR) {
        Some(split) => split,
        None => {
            let mid = key.len() / 2;
            if key.len() % 2 != 0 || !key.is_char_boundary(mid) {
                return Err(invalid());
            }
            key.split_at(mid)
        }
    };

    let pair = CurrencyPair::new(CurrencyCode::new(from), CurrencyCode::new(to));
    if !is_valid_code(&pair.from) || !is_valid_code(&pair.to) {
        return Err(invalid());
    }
    Ok(pair)
}

/// Parse a snapshot document into store entries.
///
/// Fails only when the document itself is not a JSON object of numbers.
/// Undecodable keys and non-positive or non-finite rates are skipped.
pub fn decode(json: &str) -> FxResult<Vec<(CurrencyPair, f64)>> {
    let raw: BTreeMap<String, f64> = serde_json::from_str(json)?;

    let mut entries = Vec::with_capacity(raw.len());
    for (key, rate) in raw {
        let pair = match decode_key(&key) {
            Ok(pair) => pair,
            Err(e) => {
                warn!(key = %key, error = %e, "Skipping snapshot entry");
                continue;
            }
        };
        if !rate.is_finite() || rate <= 0.0 {
            warn!(key = %key, rate, "Skipping snapshot entry with invalid rate");
            continue;
        }
        entries.push((pair, rate));
    }
    Ok(entries)
}

/// Render store entries as a snapshot document.
pub fn encode(entries: &[(CurrencyPair, f64)]) -> FxResult<String> {
    let raw: BTreeMap<String, f64> = entries
        .iter()
        .map(|(pair, rate)| (encode_key(pair), *rate))
        .collect();
    Ok(serde_json::to_string_pretty(&raw)?)
}

/// Replace the contents of `store` with the snapshot at `path`.
pub fn load_from_file(store: &RateStore, path: impl AsRef<Path>) -> FxResult<usize> {
    let path = path.as_ref();
    let entries = decode(&fs::read_to_string(path)?)?;
    let count = entries.len();

    store.load_snapshot(entries)?;

    info!(path = %path.display(), entries = count, "Loaded rate snapshot");
    Ok(count)
}

/// Write every entry of `store`, reciprocals included, to `path`.
pub fn save_to_file(store: &RateStore, path: impl AsRef<Path>) -> FxResult<usize> {
    let path = path.as_ref();
    let entries = store.snapshot();
    let document = encode(&entries)?;

    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(document.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    info!(path = %path.display(), entries = entries.len(), "Saved rate snapshot");
    Ok(entries.len())
}
