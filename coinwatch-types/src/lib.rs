//! Plain data shared across the coinwatch workspace: domain records,
//! presentation-agnostic rows, search payloads, recent-search items, and the
//! payloads handed to a presenter.
#![warn(missing_docs)]

mod category;
mod notify;
mod payloads;
mod recent;
mod records;
mod row;
mod section;

pub use category::{HighlightCategory, TrendingCategory};
pub use notify::{
    Destination, HighlightSection, InformationSnapshot, ListUpdate, SectionUpdate, TrendingSection,
};
pub use payloads::{HighlightPayload, SearchHit, SearchPayload, SearchQuery, TrendingPayload};
pub use recent::RecentSearch;
pub use records::{Category, Coin, Nft};
pub use row::{Price, Row, RowData};
pub use section::Section;
