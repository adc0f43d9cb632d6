//! Divide-and-conquer recursion over the two ranges: peel common
//! prefix/suffix, then bisect and recurse on what's left.

use crate::diag::{bisect, DiagBuf};
use crate::emit::Match;

/// Peel the common prefix and suffix of `[dict_lo, dict_hi) ×
/// [src_lo, src_hi)`, emitting a single-byte match record for each
/// peeled pair, then either terminate (one side exhausted — the rest
/// of the other side is literal coverage, nothing to emit) or bisect
/// and recurse on the two halves.
///
/// Matches are appended in source order *within* a single call, but
/// recursion interleaves subproblems, so the caller (`gen_sequences`)
/// must re-sort globally before coalescing — see `emit::combine`.
#[allow(clippy::too_many_arguments)]
pub(crate) fn compare(
    dict: &[u8],
    src: &[u8],
    fwd: &mut DiagBuf,
    bwd: &mut DiagBuf,
    matches: &mut Vec<Match>,
    mut dict_lo: i32,
    mut dict_hi: i32,
    mut src_lo: i32,
    mut src_hi: i32,
) {
    while dict_lo < dict_hi && src_lo < src_hi && dict[dict_lo as usize] == src[src_lo as usize] {
        matches.push(Match { dict_idx: dict_lo as u32, src_idx: src_lo as u32, length: 1 });
        dict_lo += 1;
        src_lo += 1;
    }

    while dict_lo < dict_hi && src_lo < src_hi && dict[(dict_hi - 1) as usize] == src[(src_hi - 1) as usize] {
        matches.push(Match { dict_idx: (dict_hi - 1) as u32, src_idx: (src_hi - 1) as u32, length: 1 });
        dict_hi -= 1;
        src_hi -= 1;
    }

    if dict_lo == dict_hi || src_lo == src_hi {
        // Whichever side still has bytes left is pure literal coverage
        // in this subproblem; nothing more to emit.
        return;
    }

    let partition = bisect(dict, src, fwd, bwd, dict_lo, dict_hi, src_lo, src_hi);
    compare(dict, src, fwd, bwd, matches, dict_lo, partition.dict_mid, src_lo, partition.src_mid);
    compare(dict, src, fwd, bwd, matches, partition.dict_mid, dict_hi, partition.src_mid, src_hi);
}
