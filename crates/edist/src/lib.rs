//! # edist
//!
//! Dictionary-relative longest-common-subsequence matcher: given a
//! dictionary byte buffer and a source byte buffer, emits an ordered
//! list of `(offset, lit_length, match_length)` triples describing the
//! source as literals interleaved with back-references into the
//! dictionary.
//!
//! The matcher is Myers' O(ND) algorithm with a forward/backward
//! meet-in-the-middle bisection (`diag`), applied recursively with
//! common-prefix/suffix peeling (`recurse`), then coalesced into
//! maximal runs and converted to the output format (`emit`). It is
//! tuned to maximize long runs suitable as back-references, not to
//! minimize edit count — producing a *minimal* edit script is not a
//! goal here.
//!
//! This core is single-threaded and holds no locks; each call to
//! [`gen_sequences`] allocates its own scratch buffers, scoped to that
//! call.
//!
//! ## Quick start
//!
//! ```
//! use edist::gen_sequences;
//!
//! let dict = b"hello world";
//! let src = b"say hello world!";
//! let seqs = gen_sequences(dict, src);
//! assert_eq!(seqs.len(), 1);
//! assert_eq!(seqs[0].lit_length, 4); // "say "
//! assert_eq!(seqs[0].match_length, 11); // "hello world"
//! ```
//!
//! ## Modules
//!
//! - `sequence` - public `Sequence` output type and `MIN_MATCH`
//! - `diag` - forward/backward diagonal frontiers, middle-snake bisection
//! - `recurse` - divide-and-conquer prefix/suffix peeling and splitting
//! - `emit` - sort, coalesce, convert to sequences
//!
//! ## Non-goals
//!
//! Producing a minimal edit script, and anything about how a
//! downstream compressor consumes the emitted sequences.

mod diag;
mod emit;
mod recurse;
mod sequence;

pub use sequence::{Sequence, MIN_MATCH};

/// Generate the ordered sequence list describing `src` relative to
/// `dict`.
///
/// The returned `Vec` has at most `src.len()` entries. An empty `dict`
/// or `src` with nothing in common with `dict` yields an empty `Vec` —
/// the entire source is then implicitly one literal span, recovered by
/// the consumer from `src.len()` alone.
pub fn gen_sequences(dict: &[u8], src: &[u8]) -> Vec<Sequence> {
    let dict_size = dict.len();
    let src_size = src.len();

    let nb_diags = dict_size + src_size + 3;
    let zero_offset = src_size as i32 + 1;
    let mut fwd = diag::DiagBuf::new(nb_diags, zero_offset);
    let mut bwd = diag::DiagBuf::new(nb_diags, zero_offset);

    let mut matches = Vec::with_capacity(src_size);
    recurse::compare(dict, src, &mut fwd, &mut bwd, &mut matches, 0, dict_size as i32, 0, src_size as i32);

    let matches = emit::combine(matches);
    emit::convert_to_sequences(&matches, dict_size)
}
