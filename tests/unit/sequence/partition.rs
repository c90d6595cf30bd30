//! Partition balancing of the packed collection

use proptest::prelude::*;
use seedcull::sequence::SequenceCollection;

fn collection(lengths: &[usize]) -> SequenceCollection {
    SequenceCollection::from_sequences(lengths.iter().map(|&l| vec![1u8; l]))
}

#[test]
fn test_partition_single() {
    let set = collection(&[5, 7, 9]);
    assert_eq!(set.partition(1), vec![0, 3]);
    assert_eq!(set.partition(0), vec![0, 3]);
}

#[test]
fn test_partition_more_parts_than_sequences() {
    let set = collection(&[5, 5]);
    assert_eq!(set.partition(4), vec![0, 1, 2, 2, 2]);
}

#[test]
fn test_partition_zero_length_tail() {
    let set = collection(&[5, 0]);
    assert_eq!(set.partition(1), vec![0, 2]);
}

proptest! {
    #[test]
    fn prop_partition_balanced(lengths in prop::collection::vec(0usize..200, 0..60), n in 1usize..16) {
        let set = collection(&lengths);
        let bounds = set.partition(n);

        prop_assert_eq!(bounds.len(), n + 1);
        prop_assert_eq!(bounds[0], 0);
        prop_assert_eq!(bounds[n], lengths.len());
        prop_assert!(bounds.windows(2).all(|w| w[0] <= w[1]));

        let letters: usize = lengths.iter().sum();
        let target = letters.div_ceil(n).max(1);
        let longest = lengths.iter().copied().max().unwrap_or(0);
        for w in bounds.windows(2) {
            let part: usize = lengths[w[0]..w[1]].iter().sum();
            prop_assert!(part < target + longest.max(1));
        }
    }
}
