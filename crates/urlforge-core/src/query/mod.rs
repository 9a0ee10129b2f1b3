//! Query-parameter normalization and merge engine.
//!
//! Caller input in any supported shape is normalized into an ordered pair
//! stream ([`QueryInput::normalize`]) and folded into a
//! [`QueryParamCollection`] under a [`NullValueHandling`] policy.

pub mod encode;
mod collection;
mod input;
mod json;
mod policy;
mod value;

pub use collection::{QueryParam, QueryParamCollection};
pub use input::{NormalizedQuery, PairRecord, PairStream, QueryInput, QueryMapping, ResolvedQuery};
pub use policy::NullValueHandling;
pub use value::QueryValue;
