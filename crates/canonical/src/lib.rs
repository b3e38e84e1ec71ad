//! highxbot canonical text layer.
//!
//! Every string that takes part in a knowledge lookup goes through this crate
//! first: stored questions at load time and user queries at lookup time. Both
//! sides use the very same [`normalize`] so a query typed with different case
//! or punctuation still lands on the stored key.
//!
//! ## What we do
//!
//! - Lower-casing (Unicode aware, locale free)
//! - Character filtering: only `a-z`, `0-9` and whitespace survive
//! - Edge trimming (interior whitespace is left alone)
//! - Whitespace tokenization into a de-duplicated set
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence, no error conditions. Any
//! `&str`, including the empty string, produces a (possibly empty) result.
//!
//! ## Invariants worth knowing
//!
//! - `normalize(normalize(x)) == normalize(x)`
//! - The output of [`normalize`] never starts or ends with whitespace
//! - [`token_set`] of normalized text only ever contains `[a-z0-9]+` tokens

mod normalize;
mod token;
mod whitespace;

pub use crate::normalize::{is_numeric, normalize};
pub use crate::token::token_set;
pub use crate::whitespace::collapse_whitespace;
