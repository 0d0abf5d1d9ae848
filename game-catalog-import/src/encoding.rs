//! Text encodings tried when reading an import CSV.
//!
//! Spreadsheets saved on Chinese-locale Windows machines come out as GBK or
//! GB18030 rather than UTF-8, so the reader walks a fixed candidate list
//! until one decodes. The list and its order are part of the tool's
//! behavior; there is no heuristic detection.

use std::borrow::Cow;

use encoding_rs::{DecoderResult, Encoding, GBK, UTF_8};

use crate::error::ImportError;

/// Encodings tried after the caller's preferred one, in order.
pub const FALLBACK_ENCODINGS: [&str; 5] = ["utf-8-sig", "utf-8", "gb18030", "cp936", "gbk"];

/// A resolved candidate encoding.
#[derive(Debug, Clone)]
pub struct TextEncoding {
    label: String,
    encoding: &'static Encoding,
    /// `utf-8-sig`: drop a leading byte-order mark from the first header cell.
    strip_bom: bool,
}

impl TextEncoding {
    /// Resolve a user-facing label.
    ///
    /// Accepts the WHATWG labels known to `encoding_rs` plus `utf-8-sig` and
    /// the Windows code page name `cp936`. Encodings that are not
    /// ASCII-compatible (UTF-16, ISO-2022-JP) are rejected because the CSV
    /// is split into cells before decoding.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        let key = label.to_ascii_lowercase().replace('_', "-");
        let (encoding, strip_bom) = match key.as_str() {
            "utf-8-sig" | "utf8-sig" => (UTF_8, true),
            "cp936" | "ms936" | "windows-936" => (GBK, false),
            other => (Encoding::for_label(other.as_bytes())?, false),
        };
        if !encoding.is_ascii_compatible() {
            return None;
        }
        Some(Self {
            label: label.to_string(),
            encoding,
            strip_bom,
        })
    }

    /// The label this candidate was requested under.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Decode a complete cell, failing on any malformed sequence.
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Option<Cow<'a, str>> {
        self.encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
    }

    /// Whether `bytes` decodes cleanly. With `last == false` an incomplete
    /// sequence at the very end is accepted, so a window cut from the middle
    /// of a file can be checked.
    pub fn decodes_prefix(&self, bytes: &[u8], last: bool) -> bool {
        let mut decoder = self.encoding.new_decoder_without_bom_handling();
        let capacity = decoder
            .max_utf8_buffer_length_without_replacement(bytes.len())
            .unwrap_or(bytes.len().saturating_mul(3));
        let mut out = String::with_capacity(capacity);
        let (result, _) = decoder.decode_to_string_without_replacement(bytes, &mut out, last);
        matches!(result, DecoderResult::InputEmpty)
    }

    /// Decode a header row. Returns `None` if any cell fails to decode.
    pub fn decode_header(&self, cells: &csv::ByteRecord) -> Option<Vec<String>> {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let cell = if i == 0 && self.strip_bom {
                    cell.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(cell)
                } else {
                    cell
                };
                self.decode(cell).map(Cow::into_owned)
            })
            .collect()
    }
}

/// Build the ordered candidate list: `preferred` first (if given and
/// non-blank), then [`FALLBACK_ENCODINGS`]. Labels already in the list are
/// not repeated.
pub fn candidates(preferred: Option<&str>) -> Result<Vec<TextEncoding>, ImportError> {
    let mut list: Vec<TextEncoding> = Vec::with_capacity(FALLBACK_ENCODINGS.len() + 1);

    if let Some(label) = preferred.map(str::trim).filter(|l| !l.is_empty()) {
        let enc = TextEncoding::from_label(label)
            .ok_or_else(|| ImportError::UnknownEncoding(label.to_string()))?;
        list.push(enc);
    }

    for label in FALLBACK_ENCODINGS {
        if list.iter().any(|c| c.label.eq_ignore_ascii_case(label)) {
            continue;
        }
        if let Some(enc) = TextEncoding::from_label(label) {
            list.push(enc);
        }
    }

    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(list: &[TextEncoding]) -> Vec<&str> {
        list.iter().map(|c| c.label()).collect()
    }

    #[test]
    fn test_default_candidates() {
        let list = candidates(None).unwrap();
        assert_eq!(labels(&list), FALLBACK_ENCODINGS.to_vec());
    }

    #[test]
    fn test_preferred_goes_first() {
        let list = candidates(Some("gbk")).unwrap();
        assert_eq!(
            labels(&list),
            vec!["gbk", "utf-8-sig", "utf-8", "gb18030", "cp936"]
        );
    }

    #[test]
    fn test_blank_preferred_ignored() {
        let list = candidates(Some("  ")).unwrap();
        assert_eq!(list.len(), FALLBACK_ENCODINGS.len());
    }

    #[test]
    fn test_unknown_label_rejected() {
        assert!(matches!(
            candidates(Some("klingon")),
            Err(ImportError::UnknownEncoding(ref l)) if l == "klingon"
        ));
        assert!(TextEncoding::from_label("utf-16le").is_none());
    }

    #[test]
    fn test_cp936_is_gbk() {
        let enc = TextEncoding::from_label("CP936").unwrap();
        // "中文" in GBK
        let decoded = enc.decode(&[0xD6, 0xD0, 0xCE, 0xC4]).unwrap();
        assert_eq!(decoded, "中文");
    }

    #[test]
    fn test_utf8_rejects_gbk_bytes() {
        let enc = TextEncoding::from_label("utf-8").unwrap();
        assert!(enc.decode(&[0xD6, 0xD0, 0xCE, 0xC4]).is_none());
    }

    #[test]
    fn test_prefix_with_cut_sequence() {
        let enc = TextEncoding::from_label("utf-8").unwrap();
        let bytes = "ab中".as_bytes();
        let cut = &bytes[..bytes.len() - 1];
        assert!(enc.decodes_prefix(cut, false));
        assert!(!enc.decodes_prefix(cut, true));
        assert!(!enc.decodes_prefix(&[b'a', 0xFF, b'b'], false));
    }

    #[test]
    fn test_bom_only_stripped_for_sig() {
        let header = csv::ByteRecord::from(vec![&b"\xEF\xBB\xBFname"[..], &b"url"[..]]);
        let sig = TextEncoding::from_label("utf-8-sig").unwrap();
        assert_eq!(sig.decode_header(&header).unwrap(), vec!["name", "url"]);

        let plain = TextEncoding::from_label("utf-8").unwrap();
        assert_eq!(
            plain.decode_header(&header).unwrap(),
            vec!["\u{FEFF}name", "url"]
        );
    }
}
