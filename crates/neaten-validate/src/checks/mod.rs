//! Rule checks.
//!
//! Each module exposes a `check` function that appends to [`Findings`].
//! [`check_token`] runs them for one word in a fixed order, which is also
//! the order diagnostics are printed in:
//!
//! 1. **inventory**: typo resolution, tag inventory, lemma blacklists
//! 2. **deps**: structural dependency rules
//! 3. **features**: morphological feature consistency
//! 4. **closed_class**: lexicon lookups for pronouns, determiners and adverbs
//! 5. **clause**: fixed expressions, relative clauses, enhanced graph
//!
//! Passive constructions are checked once per sentence by [`passive`].

pub mod clause;
pub mod closed_class;
pub mod deps;
pub mod features;
pub mod inventory;
pub mod passive;

use crate::context::{SentenceView, TokenContext};
use crate::findings::Findings;

/// A single word-level rule.
pub(crate) type Rule = fn(&TokenContext<'_>, &mut Findings);

/// Run every word-level check on `ctx`.
pub fn check_token(view: &SentenceView<'_>, ctx: &TokenContext<'_>, out: &mut Findings) {
    inventory::check(ctx, out);
    deps::check(ctx, out);
    features::check(ctx, out);
    if ctx.func != "goeswith" {
        closed_class::check(ctx, out);
    }
    clause::check(view, ctx, out);
}
