use crate::error::TagCloudError;

pub const DEFAULT_MIN_FONT: u32 = 11;
pub const DEFAULT_MAX_FONT: u32 = 48;

/// A selected word with its count and the font size it is drawn with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub word: String,
    pub count: usize,
    pub font_size: u32,
}

/// Maps counts linearly onto the font range `min..=max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontScale {
    min: u32,
    max: u32,
}

impl Default for FontScale {
    fn default() -> Self {
        FontScale {
            min: DEFAULT_MIN_FONT,
            max: DEFAULT_MAX_FONT,
        }
    }
}

impl FontScale {
    pub fn new(min: u32, max: u32) -> Result<Self, TagCloudError> {
        if min > max {
            return Err(TagCloudError::InvalidFontRange { min, max });
        }
        Ok(FontScale { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Font size of `count` given the smallest and largest selected counts.
    ///
    /// Counts at `t_min` get 0 unless every count is the same, in which case
    /// all of them get the maximum size.
    pub fn font_size(&self, count: usize, t_min: usize, t_max: usize) -> u32 {
        if t_min == t_max {
            return self.max;
        }
        if count <= t_min {
            return 0;
        }
        let span = u128::from(self.max - self.min);
        let num = span * (count - t_min) as u128;
        let denom = (t_max - t_min) as u128;
        (num / denom) as u32 + self.min
    }

    /// Annotates each selected `(word, count)` with its font size, keeping the
    /// order of `selected`.
    pub fn assign(&self, selected: Vec<(String, usize)>) -> Vec<RankedEntry> {
        let t_max = selected.iter().map(|(_, c)| *c).max().unwrap_or(0);
        let t_min = selected.iter().map(|(_, c)| *c).min().unwrap_or(0);

        selected
            .into_iter()
            .map(|(word, count)| RankedEntry {
                font_size: self.font_size(count, t_min, t_max),
                word,
                count,
            })
            .collect()
    }
}
