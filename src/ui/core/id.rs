/// Identity of a node in the hit-test tree.
///
/// Built from domain keys, so the same card keeps its id across frames and reorders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Id(u64);

impl Id {
    #[cfg(test)]
    pub(crate) const fn raw(v: u64) -> Self {
        Self(v)
    }

    /// FNV-1a over `parts`, each followed by a `0xff` separator so `["ab", "c"]` and
    /// `["a", "bc"]` differ.
    pub fn from_parts(parts: &[&str]) -> Self {
        const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
        const PRIME: u64 = 0x0000_0100_0000_01b3;

        let hash = parts.iter().fold(OFFSET, |h, part| {
            part.bytes()
                .chain(std::iter::once(0xff))
                .fold(h, |h, b| (h ^ u64::from(b)).wrapping_mul(PRIME))
        });
        Self(hash)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/id.rs"]
mod tests;
