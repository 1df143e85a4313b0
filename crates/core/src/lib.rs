// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! qdsl-core: typed query fragments for a search-engine query DSL
//!
//! Each fragment is built from its required inputs plus a sequence of
//! optional modifiers, then projected into an ordered [`Document`] for
//! serialization. Larger request assemblers consume fragments through the
//! [`Query`] trait.

pub mod document;
pub mod error;
pub mod prefix;
pub mod query;
pub mod rewrite;

pub use document::Document;
pub use error::{Error, Result};
pub use prefix::{
    prefix_query, with_case_insensitive, with_rewrite, PrefixOption, PrefixParams, PrefixQuery,
};
pub use query::Query;
pub use rewrite::Rewrite;
