/// Position of an item relative to the realized containers.
///
/// `index` is the ordinal of a realized container, or `-1` for "before the
/// first realized container". `offset` is the distance in items from that
/// container: `(k, 0)` is the `k`-th realized container itself, `(k, 2)` is
/// the second unrealized item after it, and `(-1, n)` is the `n`-th item from
/// the start (1-based) when it precedes every realized container.
///
/// Positions are only meaningful against the generator state they were
/// computed from; translate them with
/// [`RealizedContainers::position_from_index`](super::RealizedContainers::position_from_index)
/// and
/// [`RealizedContainers::index_from_position`](super::RealizedContainers::index_from_position).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GeneratorPosition {
    pub index: i32,
    pub offset: i32,
}

impl GeneratorPosition {
    pub const fn new(index: i32, offset: i32) -> Self {
        Self { index, offset }
    }

    /// Position of the `child`-th realized container.
    pub const fn child(child: usize) -> Self {
        Self::new(saturating_i32(child), 0)
    }

    /// Whether the position names a realized container rather than a gap.
    pub fn is_realized(&self) -> bool {
        self.index >= 0 && self.offset == 0
    }

    /// Child index a container generated at this position is inserted at.
    pub fn insertion_index(&self) -> usize {
        let at = if self.offset == 0 {
            self.index
        } else {
            self.index.saturating_add(1)
        };
        at.max(0) as usize
    }
}

/// Converts a count or index to a position component, saturating at
/// `i32::MAX`.
pub(super) const fn saturating_i32(value: usize) -> i32 {
    if value > i32::MAX as usize {
        i32::MAX
    } else {
        value as i32
    }
}
