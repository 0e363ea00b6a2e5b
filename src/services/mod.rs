//! Service layer
//!
//! Pure transformations over a holdings table: dropdown options, the filter
//! pipeline, organization links and area narratives.

pub mod filter;
pub mod links;
pub mod lookup;
pub mod narrative;

pub use filter::{filter_by_area, filter_by_category, filter_by_search, normalize, FilterQuery};
pub use links::{flagging_organizations, organization_links};
pub use lookup::{distinct_areas, distinct_categories};
pub use narrative::{narrative_for, AreaNarrator, JsonNarratives};
