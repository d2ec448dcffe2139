//! Property-based tests for the bit-vector layer.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{BitWord, Nat};

    fn bits(len: usize) -> impl Strategy<Value = BitWord> {
        proptest::collection::vec(any::<bool>(), len).prop_map(|v| {
            let mut w = BitWord::zeros(v.len());
            for (i, b) in v.iter().enumerate() {
                w.set(i, *b);
            }
            w
        })
    }

    proptest! {
        #[test]
        fn reverse_is_an_involution(w in bits(97)) {
            let mut r = w.clone();
            r.reverse();
            r.reverse();
            prop_assert_eq!(r, w);
        }

        #[test]
        fn pack_unpack_agrees_on_mask(w in bits(70), mask in bits(70)) {
            let mut p = w.clone();
            p.pack(&mask);
            p.unpack(&mask);
            for pos in 0..70 {
                prop_assert_eq!(p.get(pos), mask.get(pos) && w.get(pos));
            }
        }

        #[test]
        fn next_then_prev_round_trips(w in bits(67)) {
            let mut v = w.clone();
            v.next(false);
            v.prev(false);
            prop_assert_eq!(v, w);
        }

        #[test]
        fn weight_survives_save_weight_next(w in bits(40)) {
            let mut v = w.clone();
            let weight = v.weight();
            v.next(true);
            prop_assert_eq!(v.weight(), weight);
        }

        #[test]
        fn text_round_trip(w in bits(127)) {
            let back: BitWord = w.to_string().parse().unwrap();
            prop_assert_eq!(back, w);
        }

        #[test]
        fn concat_splits_back(a in bits(33), b in bits(71)) {
            let c = a.concat(&b);
            prop_assert_eq!(c.lo(33), a);
            prop_assert_eq!(c.hi(71), b);
        }

        #[test]
        fn nat_decimal_round_trip(v in any::<u64>()) {
            let n = Nat::from_u64(64, v);
            let back: Nat = n.to_string().parse().unwrap();
            prop_assert_eq!(back.to_u64(), Some(v));
        }

        #[test]
        fn nat_hex_round_trip(v in any::<u64>()) {
            let n = Nat::from_u64(64, v);
            let back: Nat = format!("{n:#x}").parse().unwrap();
            prop_assert_eq!(back.to_u64(), Some(v));
        }

        #[test]
        fn nat_add_then_sub(a in any::<u64>(), b in any::<u64>()) {
            let mut n = Nat::from_u64(80, a);
            n += &Nat::from_u64(80, b);
            n -= &Nat::from_u64(80, b);
            prop_assert_eq!(n.to_u64(), Some(a));
        }
    }
}
