use std::str::FromStr;

pub const QUESTIONS_PER_PAGE: usize = 10;

/// 1-based page number over an ordered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(i64);

impl Page {
    pub fn new(number: i64) -> Self {
        Self(number)
    }

    pub fn number(self) -> i64 {
        self.0
    }

    /// Lenient parse used for the `page` query parameter: anything that is
    /// not an integer falls back to the first page.
    pub fn parse_or_first(raw: Option<&str>) -> Self {
        raw.and_then(|value| i64::from_str(value.trim()).ok())
            .map(Self)
            .unwrap_or_default()
    }

    /// Half-open index window `[start, end)` this page covers, or `None`
    /// for page numbers below 1.
    pub fn window(self) -> Option<(usize, usize)> {
        let index = usize::try_from(self.0.checked_sub(1)?).ok()?;
        let start = index.checked_mul(QUESTIONS_PER_PAGE)?;
        Some((start, start.saturating_add(QUESTIONS_PER_PAGE)))
    }

    /// Keeps only the items inside this page's window. Pages past the end
    /// yield an empty vector.
    pub fn slice<T>(self, items: Vec<T>) -> Vec<T> {
        let Some((start, end)) = self.window() else {
            return Vec::new();
        };

        items
            .into_iter()
            .skip(start)
            .take(end - start)
            .collect()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self(1)
    }
}
