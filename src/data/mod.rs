//! Static site content - portfolio gallery items and stories
//!
//! Read-only datasets consumed by the grid components; the animation core
//! never mutates them.

pub mod portfolio;
pub mod stories;
