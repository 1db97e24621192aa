//! Umbrella crate for the popview workspace; re-exports `popview-core` so the
//! demos can `use popview::prelude::*`.

pub use popview_core::*;
