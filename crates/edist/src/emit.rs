//! Sort, coalesce, and convert raw single-byte matches into sequences.

use crate::sequence::{Sequence, MIN_MATCH};

/// A single proven equal-byte pair, as produced by `recurse::compare`.
/// Starts at `length = 1`; `combine` grows `length` while coalescing
/// source-contiguous runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Match {
    pub(crate) dict_idx: u32,
    pub(crate) src_idx: u32,
    pub(crate) length: u32,
}

/// Stable-sort by ascending `src_idx`, coalesce adjacent runs, and drop
/// runs shorter than [`MIN_MATCH`].
///
/// Coalescing is keyed on source contiguity alone (`prev.src_idx +
/// prev.length == next.src_idx`) — `dict_idx` contiguity is not
/// required. This is safe because each coalesced run corresponds to a
/// contiguous equal-byte slide discovered by a single prefix/suffix
/// peel or snake in `recurse`/`diag`, so the offset computed afterward
/// in [`convert_to_sequences`] remains a valid back-reference distance
/// even if two adjacent single-byte matches happened to come from
/// different dictionary positions a few bytes apart — in practice they
/// never do, because the peel that emitted them walked both `dict_idx`
/// and `src_idx` in lockstep.
pub(crate) fn combine(mut matches: Vec<Match>) -> Vec<Match> {
    if matches.is_empty() {
        return matches;
    }
    matches.sort_by_key(|m| m.src_idx);

    let mut combined: Vec<Match> = Vec::with_capacity(matches.len());
    combined.push(matches[0]);

    for &m in &matches[1..] {
        let last = combined.len() - 1;
        if combined[last].src_idx + combined[last].length == m.src_idx {
            combined[last].length += 1;
        } else {
            if combined[last].length < MIN_MATCH {
                combined.pop();
            }
            combined.push(m);
        }
    }

    // The loop above only checks MIN_MATCH when a *new* run starts, so
    // the final accumulated run needs the same check applied once more
    // after the loop exits — every surviving run must be >= MIN_MATCH,
    // including the last one.
    if let Some(last) = combined.last() {
        if last.length < MIN_MATCH {
            combined.pop();
        }
    }

    combined
}

/// Convert coalesced matches into `(offset, lit_length, match_length)`
/// triples.
pub(crate) fn convert_to_sequences(matches: &[Match], dict_size: usize) -> Vec<Sequence> {
    let dict_size = dict_size as u32;
    let mut out = Vec::with_capacity(matches.len());
    let mut prev_end: u32 = 0;

    for (i, m) in matches.iter().enumerate() {
        let lit_length = if i == 0 { m.src_idx } else { m.src_idx - prev_end };
        let offset = (m.src_idx + dict_size) - m.dict_idx;
        out.push(Sequence { offset, lit_length, match_length: m.length });
        prev_end = m.src_idx + m.length;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_coalesces_contiguous_run() {
        let matches = vec![
            Match { dict_idx: 0, src_idx: 0, length: 1 },
            Match { dict_idx: 1, src_idx: 1, length: 1 },
            Match { dict_idx: 2, src_idx: 2, length: 1 },
        ];
        let combined = combine(matches);
        assert_eq!(combined, vec![Match { dict_idx: 0, src_idx: 0, length: 3 }]);
    }

    #[test]
    fn test_combine_drops_runs_shorter_than_min_match() {
        let matches = vec![
            Match { dict_idx: 0, src_idx: 0, length: 1 },
            Match { dict_idx: 1, src_idx: 1, length: 1 },
            // gap, then a 3-long run starting at src_idx 10
            Match { dict_idx: 10, src_idx: 10, length: 1 },
            Match { dict_idx: 11, src_idx: 11, length: 1 },
            Match { dict_idx: 12, src_idx: 12, length: 1 },
        ];
        let combined = combine(matches);
        assert_eq!(combined, vec![Match { dict_idx: 10, src_idx: 10, length: 3 }]);
    }

    #[test]
    fn test_combine_discards_short_terminal_run() {
        // A short run with nothing after it must still be discarded,
        // not just short runs that are followed by a later run.
        let matches = vec![
            Match { dict_idx: 0, src_idx: 0, length: 1 },
            Match { dict_idx: 1, src_idx: 1, length: 1 },
            Match { dict_idx: 2, src_idx: 2, length: 1 },
            Match { dict_idx: 20, src_idx: 20, length: 1 },
            Match { dict_idx: 21, src_idx: 21, length: 1 },
        ];
        let combined = combine(matches);
        assert_eq!(combined, vec![Match { dict_idx: 0, src_idx: 0, length: 3 }]);
    }

    #[test]
    fn test_combine_out_of_order_input_is_sorted_first() {
        let matches = vec![
            Match { dict_idx: 2, src_idx: 2, length: 1 },
            Match { dict_idx: 0, src_idx: 0, length: 1 },
            Match { dict_idx: 1, src_idx: 1, length: 1 },
        ];
        let combined = combine(matches);
        assert_eq!(combined, vec![Match { dict_idx: 0, src_idx: 0, length: 3 }]);
    }

    #[test]
    fn test_combine_empty_input() {
        assert!(combine(Vec::new()).is_empty());
    }

    #[test]
    fn test_convert_whole_string_match() {
        let matches = vec![Match { dict_idx: 0, src_idx: 0, length: 6 }];
        let seqs = convert_to_sequences(&matches, 6);
        assert_eq!(seqs, vec![Sequence { offset: 6, lit_length: 0, match_length: 6 }]);
    }

    #[test]
    fn test_convert_surrounded_by_literals() {
        // "say " (4 literal) + "hello world" (11 match) + "!" (1 trailing literal, implicit)
        let matches = vec![Match { dict_idx: 0, src_idx: 4, length: 11 }];
        let seqs = convert_to_sequences(&matches, 11);
        assert_eq!(seqs.len(), 1);
        assert_eq!(seqs[0].lit_length, 4);
        assert_eq!(seqs[0].match_length, 11);
        assert_eq!(seqs[0].offset, 4 + 11 - 0);
    }
}
