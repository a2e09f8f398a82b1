// src/ordering.rs
//
// Ordering generator: which team sequences get searched.
//
// Base orderings are order-preserving picks from the canonical list
// (C(n, k) per length, never k! permutations). Augmentation then adds,
// per base ordering, its reversal and, when both rivals are present,
// the rival-swapped variant and that variant's reversal.

use std::collections::HashSet;
use std::fmt;

/// How an ordering was produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    Base,
    Reversed,
    Swapped,
    SwappedReversed,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ordering {
    teams: Vec<String>,
    variant: Variant,
}

impl Ordering {
    pub fn new(teams: Vec<String>) -> Self {
        Self { teams, variant: Variant::Base }
    }

    pub fn teams(&self) -> &[String] { &self.teams }
    pub fn variant(&self) -> Variant { self.variant }
    pub fn len(&self) -> usize { self.teams.len() }
    pub fn is_empty(&self) -> bool { self.teams.is_empty() }

    pub fn contains(&self, team: &str) -> bool {
        self.teams.iter().any(|t| t == team)
    }

    pub fn contains_all(&self, teams: &[String]) -> bool {
        teams.iter().all(|t| self.contains(t))
    }

    /// Same teams, visited back to front.
    pub fn reversed(&self) -> Self {
        let variant = match self.variant {
            Variant::Base => Variant::Reversed,
            Variant::Reversed => Variant::Base,
            Variant::Swapped => Variant::SwappedReversed,
            Variant::SwappedReversed => Variant::Swapped,
        };
        Self { teams: self.teams.iter().rev().cloned().collect(), variant }
    }

    /// `a` and `b` trade places. `None` unless both are in the ordering.
    pub fn swapped(&self, a: &str, b: &str) -> Option<Self> {
        let ia = self.teams.iter().position(|t| t == a)?;
        let ib = self.teams.iter().position(|t| t == b)?;
        let mut teams = self.teams.clone();
        teams.swap(ia, ib);
        Some(Self { teams, variant: Variant::Swapped })
    }
}

impl std::ops::Deref for Ordering {
    type Target = [String];
    fn deref(&self) -> &[String] { &self.teams }
}

impl fmt::Display for Ordering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.teams.join(" → "))
    }
}

/// Every order-preserving pick of `len` names from `canonical`.
/// Lexicographic over canonical positions.
pub fn subsequences(canonical: &[String], len: usize) -> Vec<Ordering> {
    let n = canonical.len();
    if len == 0 || len > n {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut ix: Vec<usize> = (0..len).collect();
    loop {
        out.push(Ordering::new(ix.iter().map(|&i| canonical[i].clone()).collect()));

        // Rightmost index that can still move forward.
        let Some(pos) = (0..len).rev().find(|&p| ix[p] < n - len + p) else {
            break;
        };
        ix[pos] += 1;
        for p in pos + 1..len {
            ix[p] = ix[p - 1] + 1;
        }
    }
    out
}

/// Base orderings for every length in `min_len..=max_len`, keeping only
/// those that contain all of `required`. Unreachable lengths add nothing.
pub fn base_orderings(
    canonical: &[String],
    min_len: usize,
    max_len: usize,
    required: &[String],
) -> Vec<Ordering> {
    (min_len..=max_len)
        .flat_map(|len| subsequences(canonical, len))
        .filter(|o| o.contains_all(required))
        .collect()
}

/// Add reversed and rival-swapped variants after each base ordering.
/// Identical team sequences collapse to their first occurrence.
pub fn augment(bases: Vec<Ordering>, rivals: Option<(&str, &str)>) -> Vec<Ordering> {
    let mut seen: HashSet<Vec<String>> = HashSet::new();
    let mut out = Vec::with_capacity(bases.len() * 2);

    let mut push = |o: Ordering, out: &mut Vec<Ordering>| {
        if seen.insert(o.teams.clone()) {
            out.push(o);
        }
    };

    for base in bases {
        let reversed = base.reversed();
        let swapped = rivals.and_then(|(a, b)| base.swapped(a, b));
        push(base, &mut out);
        push(reversed, &mut out);
        if let Some(sw) = swapped {
            let sw_rev = sw.reversed();
            push(sw, &mut out);
            push(sw_rev, &mut out);
        }
    }
    out
}

/// Full set of orderings to search.
pub fn generate_orderings(
    canonical: &[String],
    min_len: usize,
    max_len: usize,
    required: &[String],
    rivals: Option<(&str, &str)>,
) -> Vec<Ordering> {
    let bases = base_orderings(canonical, min_len, max_len, required);
    let base_count = bases.len();
    let all = augment(bases, rivals);
    log::info!(
        "Orderings: {} base, {} after augmentation (lengths {}..={})",
        base_count, all.len(), min_len, max_len
    );
    all
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(v: &[&str]) -> Vec<String> { v.iter().map(|s| s!(*s)).collect() }

    fn seqs(os: &[Ordering]) -> Vec<String> {
        os.iter().map(|o| o.teams().concat()).collect()
    }

    fn choose(n: usize, k: usize) -> usize {
        (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
    }

    #[test]
    fn subsequences_are_order_preserving_combinations() {
        let canon = names(&["A", "B", "C", "D", "E"]);
        for k in 1..=5 {
            let subs = subsequences(&canon, k);
            assert_eq!(subs.len(), choose(5, k));
            for o in &subs {
                let pos: Vec<usize> = o.iter()
                    .map(|t| canon.iter().position(|c| c == t).unwrap())
                    .collect();
                assert!(pos.windows(2).all(|w| w[0] < w[1]));
            }
        }
        assert_eq!(seqs(&subsequences(&canon[..3], 2)), vec!["AB", "AC", "BC"]);
    }

    #[test]
    fn unreachable_lengths_are_empty() {
        let canon = names(&["A", "B", "C"]);
        assert!(base_orderings(&canon, 3, 2, &[]).is_empty());
        assert!(base_orderings(&canon, 4, 6, &[]).is_empty());
        assert_eq!(base_orderings(&canon, 2, 9, &[]).len(), 3 + 1);
        assert!(subsequences(&canon, 0).is_empty());
    }

    #[test]
    fn required_filter_then_reverse() {
        let canon = names(&["A", "B", "C"]);
        let bases = base_orderings(&canon, 2, 2, &names(&["B"]));
        assert_eq!(seqs(&bases), vec!["AB", "BC"]);

        let all = augment(bases, None);
        assert_eq!(seqs(&all), vec!["AB", "BA", "BC", "CB"]);
        assert_eq!(all[1].variant(), Variant::Reversed);
    }

    #[test]
    fn rival_swap_adds_variant_and_its_reversal() {
        let canon = names(&["A", "B", "C"]);
        let bases = base_orderings(&canon, 3, 3, &[]);
        let all = augment(bases, Some(("A", "C")));
        // ABC, CBA, swap(A,C)=CBA (dup), its reversal ABC (dup)
        assert_eq!(seqs(&all), vec!["ABC", "CBA"]);

        let all = augment(base_orderings(&canon, 3, 3, &[]), Some(("A", "B")));
        assert_eq!(seqs(&all), vec!["ABC", "CBA", "BAC", "CAB"]);
        assert_eq!(all[2].variant(), Variant::Swapped);
        assert_eq!(all[3].variant(), Variant::SwappedReversed);
    }

    #[test]
    fn swap_needs_both_rivals() {
        let o = Ordering::new(names(&["A", "C"]));
        assert!(o.swapped("A", "B").is_none());
        assert_eq!(o.reversed().reversed().teams(), o.teams());
    }

    #[test]
    fn reversing_twice_restores_the_variant() {
        let base = Ordering::new(names(&["A", "B", "C"]));
        assert_eq!(base.reversed().variant(), Variant::Reversed);
        assert_eq!(base.reversed().reversed(), base);

        let sw = base.swapped("A", "B").unwrap();
        assert_eq!(sw.reversed().variant(), Variant::SwappedReversed);
        assert_eq!(sw.reversed().reversed(), sw);
    }

    #[test]
    fn augmented_variants_skip_refiltering() {
        let canon = names(&["A", "B", "C", "D"]);
        let required = names(&["A", "D"]);
        let all = generate_orderings(&canon, 2, 3, &required, Some(("A", "B")));
        let bases: Vec<_> = all.iter().filter(|o| o.variant() == Variant::Base).collect();
        assert_eq!(bases.len(), 3); // AD, ABD, ACD
        assert!(bases.iter().all(|o| o.contains_all(&required)));
        assert!(all.iter().any(|o| o.teams() == names(&["B", "A", "D"]).as_slice()));
    }
}
