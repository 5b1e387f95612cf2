//! Presentation-agnostic list rows.

use serde::{Deserialize, Serialize};

/// Price fragment of a row: a current value and its 24h change percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Price {
    /// Current value in the list's display currency.
    pub current: f64,
    /// Percent change over the last 24 hours.
    pub change_24h: f64,
}

/// One list row, shaped identically for every section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowData {
    /// Market-cap rank, when the source ranks its items.
    pub rank: Option<u32>,
    /// Thumbnail URL, when the source has one worth showing.
    pub image_url: Option<String>,
    /// Short display name (usually the ticker symbol).
    pub name: String,
    /// Full display name.
    pub fullname: String,
    /// Price fragment, when the source carries prices.
    pub price: Option<Price>,
}

/// A projected row: real data or the synthetic trailing "load more" row
/// appended to the collapsed trending coin list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Row {
    /// An ordinary data row.
    Data(RowData),
    /// The synthetic expand trigger.
    LoadMore,
}
