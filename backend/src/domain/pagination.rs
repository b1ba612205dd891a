//! Page-based retrieval parameters for report listings.

/// Page size used when the request does not carry a usable one
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Page number used when the request does not carry a usable one
pub const DEFAULT_PAGE_NUMBER: u32 = 1;

/// Validated paging parameters; both values are always at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: u32,
    page_number: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_number: DEFAULT_PAGE_NUMBER,
        }
    }
}

impl Pagination {
    /// Build from already-numeric values, replacing zeros with defaults
    pub fn new(page_size: u32, page_number: u32) -> Self {
        Self {
            page_size: if page_size == 0 { DEFAULT_PAGE_SIZE } else { page_size },
            page_number: if page_number == 0 { DEFAULT_PAGE_NUMBER } else { page_number },
        }
    }

    /// Build from raw query-string values.
    ///
    /// Parsing is lenient: the leading integer is used ("12abc" is 12) and
    /// anything that does not yield a positive number falls back to the
    /// default.
    pub fn from_raw(raw_page_size: Option<&str>, raw_page_number: Option<&str>) -> Self {
        Self::new(
            raw_page_size.and_then(parse_positive).unwrap_or(DEFAULT_PAGE_SIZE),
            raw_page_number.and_then(parse_positive).unwrap_or(DEFAULT_PAGE_NUMBER),
        )
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    /// Number of records to skip before this page
    pub fn offset(&self) -> u64 {
        (self.page_number as u64 - 1) * self.page_size as u64
    }

    /// Pages needed to hold `total_count` records
    pub fn total_pages(&self, total_count: u64) -> u64 {
        total_count.div_ceil(self.page_size as u64)
    }
}

/// Leading optional sign followed by digits; positive results only
fn parse_positive(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    unsigned[..digits_end]
        .parse::<u32>()
        .ok()
        .filter(|value| *value > 0)
}
