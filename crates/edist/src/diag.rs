//! Forward/backward diagonal frontiers and the middle-snake bisection
//! at the core of the Myers O(ND) matcher.

/// Sentinel for the backward frontier's just-activated border slots.
const DIAG_MAX: i32 = 1 << 30;

/// A single diagonal frontier, indexed by diagonal `k = dict_idx -
/// src_idx`, shifted by a constant `zero_offset` so negative diagonals
/// land at valid, non-negative `Vec` indices. This replaces the
/// original's raw pointer arithmetic (`forwardDiag = buffer + srcSize +
/// 1`) with ordinary checked indexing.
pub(crate) struct DiagBuf {
    data: Vec<i32>,
    zero_offset: i32,
}

impl DiagBuf {
    pub(crate) fn new(len: usize, zero_offset: i32) -> Self {
        DiagBuf { data: vec![0; len], zero_offset }
    }

    #[inline]
    fn idx(&self, k: i32) -> usize {
        (k + self.zero_offset) as usize
    }

    #[inline]
    pub(crate) fn get(&self, k: i32) -> i32 {
        self.data[self.idx(k)]
    }

    #[inline]
    pub(crate) fn set(&mut self, k: i32, v: i32) {
        let i = self.idx(k);
        self.data[i] = v;
    }
}

/// The midpoint of a snake found by the bisection, split point for the
/// two recursive subproblems.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Partition {
    pub(crate) dict_mid: i32,
    pub(crate) src_mid: i32,
}

/// Advance the forward and backward diagonal frontiers in lockstep
/// until they meet, and return the midpoint of the snake where they
/// do.
///
/// Preconditions (checked by the caller, `recurse::compare`): both
/// `[dict_lo, dict_hi)` and `[src_lo, src_hi)` are non-empty, and no
/// common prefix/suffix remains to be peeled.
///
/// Boundary-contraction note: when a frontier's min/max *contracts*
/// (`forward_min += 1` / `forward_max -= 1`), the diagonal that falls
/// out of range is not given a fresh sentinel — only an *expanding*
/// border writes one. This is safe because a contracted diagonal is,
/// by construction, outside `[forward_min, forward_max]` for every
/// following iteration of this call, so the inner loops never read it
/// again before it would be legitimately overwritten by a future
/// expansion on the same diagonal.
pub(crate) fn bisect(
    dict: &[u8],
    src: &[u8],
    fwd: &mut DiagBuf,
    bwd: &mut DiagBuf,
    dict_lo: i32,
    dict_hi: i32,
    src_lo: i32,
    src_hi: i32,
) -> Partition {
    let diag_min = dict_lo - src_hi;
    let diag_max = dict_hi - src_lo;
    let fwd_mid = dict_lo - src_lo;
    let bwd_mid = dict_hi - src_hi;

    let mut fwd_min = fwd_mid;
    let mut fwd_max = fwd_mid;
    let mut bwd_min = bwd_mid;
    let mut bwd_max = bwd_mid;
    let odd = (fwd_mid - bwd_mid) & 1 != 0;

    fwd.set(fwd_mid, dict_lo);
    bwd.set(bwd_mid, dict_hi);

    loop {
        if fwd_min > diag_min {
            fwd_min -= 1;
            fwd.set(fwd_min - 1, -1);
        } else {
            fwd_min += 1;
        }
        if fwd_max < diag_max {
            fwd_max += 1;
            fwd.set(fwd_max + 1, -1);
        } else {
            fwd_max -= 1;
        }

        let mut diag = fwd_max;
        while diag >= fwd_min {
            let low = fwd.get(diag - 1);
            let high = fwd.get(diag + 1);
            let mut d = if low < high { high } else { low + 1 };
            let mut s = d - diag;

            while d < dict_hi && s < src_hi && dict[d as usize] == src[s as usize] {
                d += 1;
                s += 1;
            }
            fwd.set(diag, d);

            if odd && bwd_min <= diag && diag <= bwd_max && bwd.get(diag) <= d {
                return Partition { dict_mid: d, src_mid: s };
            }
            diag -= 2;
        }

        if bwd_min > diag_min {
            bwd_min -= 1;
            bwd.set(bwd_min - 1, DIAG_MAX);
        } else {
            bwd_min += 1;
        }
        if bwd_max < diag_max {
            bwd_max += 1;
            bwd.set(bwd_max + 1, DIAG_MAX);
        } else {
            bwd_max -= 1;
        }

        let mut diag = bwd_max;
        while diag >= bwd_min {
            let low = bwd.get(diag - 1);
            let high = bwd.get(diag + 1);
            let mut d = if low < high { low } else { high - 1 };
            let mut s = d - diag;

            while dict_lo < d && src_lo < s && dict[(d - 1) as usize] == src[(s - 1) as usize] {
                d -= 1;
                s -= 1;
            }
            bwd.set(diag, d);

            if !odd && fwd_min <= diag && diag <= fwd_max && d <= fwd.get(diag) {
                return Partition { dict_mid: d, src_mid: s };
            }
            diag -= 2;
        }
    }
}
