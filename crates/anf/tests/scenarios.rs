//! End-to-end scenarios exercising the whole stack on fixed inputs.

use anf::prelude::*;

/// grlex coincides with the graded refinement of lex on every pair of
/// monomials over six variables.
#[test]
fn order_equivalence_grlex_graded_lex() {
    let grlex = Grlex;
    let graded = Graded(Lex);
    let mut a = Monom::one(6);
    loop {
        let mut b = Monom::one(6);
        loop {
            assert_eq!(grlex.compare(&a, &b), graded.compare(&a, &b));
            if !Lex.next(&mut b) {
                break;
            }
        }
        if !Lex.next(&mut a) {
            break;
        }
    }
}

/// The Maiorana–McFarland function x0 x6 + … + x5 x11 is bent.
#[test]
fn maiorana_mcfarland_is_bent() {
    let poly = Poly::parse(
        12,
        Lex,
        "x0 x6 + x1 x7 + x2 x8 + x3 x9 + x4 x10 + x5 x11",
    )
    .unwrap();
    let f = BoolFunc::from_poly(&poly);
    assert!(f.is_bent());
    assert_eq!(f.max_walsh(), 1 << 6);
    // a bent function is never balanced
    assert!(!f.is_balanced());
}

/// The ideal of the 3-bit bash substitution: its reduced basis has 14
/// polynomials and the quotient algebra has dimension 8.
#[test]
fn bash_substitution_ideal() {
    let sbox = Subst::from_table(&[1, 2, 3, 4, 6, 7, 5, 0]);
    assert!(sbox.is_bijection());
    let ideal = sbox.ideal(Grevlex);
    let mut engine = Buchberger::new(6, Grevlex);
    engine.update_ideal(&ideal);
    engine.process();
    let basis = engine.done();
    assert_eq!(basis.len(), 14);
    assert!(basis.is_groebner());
    assert_eq!(basis.quotient_basis_dim().to_u64(), Some(8));
    assert_eq!(basis.quotient_basis().len(), 8);
}

/// Commuting invertible 2×2 binary matrices: the computed basis passes
/// the Gröbner test and the quotient dimension counts the 18 pairs.
#[test]
fn commuting_binary_matrices() {
    let system = Ideal::parse(
        8,
        Grevlex,
        "{ x0 x3 + x1 x2 + 1,
           x1 x6 + x2 x5,
           x1 x7 + x3 x5 + x0 x5 + x1 x4,
           x2 x7 + x3 x6 + x0 x6 + x2 x4,
           x4 x7 + x5 x6 + 1 }",
    )
    .unwrap();
    let mut engine = Buchberger::new(8, Grevlex);
    engine.update_ideal(&system);
    engine.process();
    let basis = engine.done();
    assert!(basis.is_groebner());
    assert_eq!(basis.quotient_basis_dim().to_u64(), Some(18));
    assert_eq!(basis.quotient_basis().len(), 18);

    // normal forms modulo a Gröbner basis are canonical: adding a basis
    // element never changes the normal form
    let mut probe = Poly::parse(8, Grevlex, "x0 x5 x7 + x1 x4 + x2").unwrap();
    let mut shifted = probe.clone();
    shifted.sym_diff_poly(basis.get(0));
    basis.reduce(&mut probe).unwrap();
    basis.reduce(&mut shifted).unwrap();
    assert_eq!(probe, shifted);
}

/// Two-round Even–Mansour on 3-bit blocks: four chosen plaintexts pin
/// the key K1‖K2‖K3 to 101‖110‖010.
#[test]
fn even_mansour_key_recovery() {
    const NKEY: usize = 9;
    let sbox = Subst::from_table(&[2, 4, 0, 7, 5, 1, 6, 3]);
    let (k1, k2, k3) = (0b101u64, 0b011u64, 0b010u64); // 101, 110, 010 little-endian

    let encrypt = |p: u64| -> u64 {
        let u = sbox.get((p ^ k1) as usize);
        sbox.get((u ^ k2) as usize) ^ k3
    };

    // ANF of every S-box coordinate, exponents over the 3 input bits
    let anf: Vec<Vec<u64>> = (0..3).map(|j| sbox.coordinate(j).anf_support()).collect();

    // s_j applied to three polynomial inputs over the key variables
    let compose = |j: usize, inputs: &[Poly<Grevlex>; 3]| -> Poly<Grevlex> {
        let mut acc = Poly::zero(NKEY, Grevlex);
        for &m in &anf[j] {
            let mut term = Poly::one(NKEY, Grevlex);
            for (i, input) in inputs.iter().enumerate() {
                if m >> i & 1 == 1 {
                    term.mul(input);
                }
            }
            acc.sym_diff_poly(&term);
        }
        acc
    };

    let mut system = Ideal::new(NKEY, Grevlex);
    for p in 0..4u64 {
        let c = encrypt(p);
        // u_i = p_i + k_i
        let u: [Poly<Grevlex>; 3] = std::array::from_fn(|i| {
            let mut poly = Poly::from_monom(NKEY, Grevlex, &Monom::var(NKEY, i));
            if p >> i & 1 == 1 {
                poly.sym_diff(&Monom::one(NKEY));
            }
            poly
        });
        // w_j = s_j(u) + k_{3+j}
        let w: [Poly<Grevlex>; 3] = std::array::from_fn(|j| {
            let mut poly = compose(j, &u);
            poly.sym_diff(&Monom::var(NKEY, 3 + j));
            poly
        });
        // c_j = s_j(w) + k_{6+j}
        for j in 0..3 {
            let mut gen = compose(j, &w);
            gen.sym_diff(&Monom::var(NKEY, 6 + j));
            if c >> j & 1 == 1 {
                gen.sym_diff(&Monom::one(NKEY));
            }
            if !gen.is_empty() {
                system.insert(&gen);
            }
        }
    }

    let mut engine = Buchberger::new(NKEY, Grevlex);
    engine.update_ideal(&system);
    engine.process();
    let basis = engine.done();

    assert!(basis.is_groebner());
    assert_eq!(basis.quotient_basis_dim().to_u64(), Some(1));
    assert_eq!(basis.len(), NKEY);
    // the basis is exactly {k_i + key_i}: K1‖K2‖K3 = 101‖110‖010
    let key_bits = [1, 0, 1, 1, 1, 0, 0, 1, 0];
    for (i, bit) in key_bits.iter().enumerate() {
        let text = if *bit == 1 {
            format!("x{i} + 1")
        } else {
            format!("x{i}")
        };
        let poly = Poly::parse(NKEY, Grevlex, &text).unwrap();
        assert!(basis.contains(&poly), "expected {text} in the basis");
    }
}

/// Serialising a random 127-bit word and parsing it back is lossless.
#[test]
fn bitword_text_round_trip() {
    anf::bits::env::seed(2026);
    for _ in 0..10 {
        let mut w = BitWord::zeros(127);
        w.randomize();
        let text = w.to_string();
        assert_eq!(text.len(), 127);
        let back: BitWord = text.parse().unwrap();
        assert_eq!(back, w);
    }
}

/// The quotient-basis enumeration and the split-based counter agree on
/// Gröbner bases of various shapes.
#[test]
fn quotient_basis_enumeration_matches_counter() {
    for source in [
        "{ x0 x1 + x0 }",
        "{ x0, x1 x2 }",
        "{ x0 x1 x2 + x0 x1 }",
        "{ x1 + x0, x2 }",
    ] {
        let ideal = Ideal::parse(3, Grevlex, source).unwrap();
        let mut engine = Buchberger::new(3, Grevlex);
        engine.update_ideal(&ideal);
        engine.process();
        let basis = engine.done();
        assert!(basis.is_groebner(), "{source}");
        assert_eq!(
            basis.quotient_basis().len() as u64,
            basis.quotient_basis_dim().to_u64().unwrap(),
            "{source}"
        );
    }
}
