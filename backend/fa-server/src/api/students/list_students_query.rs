use serde::Deserialize;

pub const DEFAULT_PAGE_SIZE: i64 = 100;
pub const MAX_PAGE_SIZE: i64 = 1000;

#[derive(Debug, Deserialize)]
pub struct ListStudentsQuery {
    #[serde(default)]
    pub skip: i64,

    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl ListStudentsQuery {
    /// Offset and page size clamped to sane bounds
    pub fn bounds(&self) -> (i64, i64) {
        (self.skip.max(0), self.limit.clamp(1, MAX_PAGE_SIZE))
    }
}
