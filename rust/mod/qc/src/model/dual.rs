//! Length/width pairs recorded against a single checkpoint.
//!
//! The stored form is one string, `"<L> (L) X <W> (W)"`. Anything that does
//! not follow that template decodes to an empty pair; there is no partial
//! recovery of either side.

const LENGTH_MARK: &str = " (L) X ";
const WIDTH_MARK: &str = " (W)";

/// Which half of a dual value an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DualSide {
    Length,
    Width,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DualValue {
    pub length: String,
    pub width: String,
}

impl DualValue {
    pub fn new(length: impl Into<String>, width: impl Into<String>) -> Self {
        Self {
            length: length.into(),
            width: width.into(),
        }
    }

    /// Canonical display string.
    pub fn encode(&self) -> String {
        format!("{}{}{}{}", self.length, LENGTH_MARK, self.width, WIDTH_MARK)
    }

    /// Parse a canonical string. Returns None when `s` does not match the
    /// template. Line breaks never match.
    pub fn decode(s: &str) -> Option<Self> {
        if s.contains(['\n', '\r', '\u{2028}', '\u{2029}']) {
            return None;
        }
        let body = s.strip_suffix(WIDTH_MARK)?;
        let split = body.find(LENGTH_MARK)?;
        Some(Self {
            length: body[..split].to_string(),
            width: body[split + LENGTH_MARK.len()..].to_string(),
        })
    }

    /// Like [`decode`](Self::decode), but a non-conforming string yields an
    /// empty pair.
    pub fn decode_or_empty(s: &str) -> Self {
        Self::decode(s).unwrap_or_default()
    }

    pub fn get(&self, side: DualSide) -> &str {
        match side {
            DualSide::Length => &self.length,
            DualSide::Width => &self.width,
        }
    }

    pub fn set(&mut self, side: DualSide, value: impl Into<String>) {
        match side {
            DualSide::Length => self.length = value.into(),
            DualSide::Width => self.width = value.into(),
        }
    }

    /// Rewrite `current` with one side replaced. Non-conforming prior content
    /// is discarded.
    pub fn rewrite(current: &str, side: DualSide, value: impl Into<String>) -> String {
        let mut dual = Self::decode_or_empty(current);
        dual.set(side, value);
        dual.encode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_canonical() {
        assert_eq!(DualValue::new("380", "350").encode(), "380 (L) X 350 (W)");
        assert_eq!(DualValue::default().encode(), " (L) X  (W)");
    }

    #[test]
    fn decode_canonical() {
        let d = DualValue::decode("380 (L) X 350 (W)").unwrap();
        assert_eq!(d.get(DualSide::Length), "380");
        assert_eq!(d.get(DualSide::Width), "350");
    }

    #[test]
    fn decode_empty_sides() {
        assert_eq!(DualValue::decode(" (L) X  (W)"), Some(DualValue::default()));
        assert_eq!(
            DualValue::decode("12 (L) X  (W)"),
            Some(DualValue::new("12", ""))
        );
    }

    #[test]
    fn decode_splits_at_first_marker() {
        let d = DualValue::decode("a (L) X b (L) X c (W)").unwrap();
        assert_eq!(d.length, "a");
        assert_eq!(d.width, "b (L) X c");
    }

    #[test]
    fn non_conforming_decodes_empty() {
        for s in [
            "",
            "380 x 350",
            "380 (L) X 350",
            "380 (L)X 350 (W)",
            " (L) X (W)",
            "380 (L) X 350 (W) ",
            "38\n0 (L) X 350 (W)",
        ] {
            assert_eq!(DualValue::decode(s), None, "{:?}", s);
            assert_eq!(DualValue::decode_or_empty(s), DualValue::default());
        }
    }

    #[test]
    fn rewrite_one_side() {
        let s = DualValue::rewrite("", DualSide::Length, "20");
        assert_eq!(s, "20 (L) X  (W)");
        let s = DualValue::rewrite(&s, DualSide::Width, "22");
        assert_eq!(s, "20 (L) X 22 (W)");
        let s = DualValue::rewrite(&s, DualSide::Length, "21");
        assert_eq!(s, "21 (L) X 22 (W)");
    }

    #[test]
    fn rewrite_discards_legacy_text() {
        let s = DualValue::rewrite("about 20 by 22", DualSide::Width, "22");
        assert_eq!(s, " (L) X 22 (W)");
    }
}
