//! Fixed-input self-test: exercises the engine end to end and exits
//! nonzero if any invariant fails.

use anf::prelude::*;

fn run(name: &str, test: fn() -> bool, failures: &mut u32) {
    let start = anf::bits::env::now_ms();
    let ok = test();
    let elapsed = anf::bits::env::now_ms() - start;
    println!("{name}: {} ({elapsed} ms)", if ok { "ok" } else { "FAILED" });
    if !ok {
        *failures += 1;
    }
}

fn words() -> bool {
    anf::bits::env::seed(2026);
    let mut w = BitWord::zeros(127);
    w.randomize();
    let save = w.clone();
    w.next(false);
    w.prev(false);
    if w != save {
        return false;
    }
    let text = w.to_string();
    text.parse::<BitWord>().map(|back| back == w).unwrap_or(false)
}

fn orders() -> bool {
    let graded = Graded(Lex);
    let mut a = Monom::one(6);
    loop {
        let mut b = Monom::one(6);
        loop {
            if Grlex.compare(&a, &b) != graded.compare(&a, &b) {
                return false;
            }
            if !Lex.next(&mut b) {
                break;
            }
        }
        if !Lex.next(&mut a) {
            break;
        }
    }
    true
}

fn bent() -> bool {
    let poly = match Poly::parse(
        12,
        Lex,
        "x0 x6 + x1 x7 + x2 x8 + x3 x9 + x4 x10 + x5 x11",
    ) {
        Ok(p) => p,
        Err(_) => return false,
    };
    BoolFunc::from_poly(&poly).is_bent()
}

fn bash() -> bool {
    let sbox = Subst::from_table(&[1, 2, 3, 4, 6, 7, 5, 0]);
    let mut engine = Buchberger::new(6, Grevlex);
    engine.update_ideal(&sbox.ideal(Grevlex));
    engine.process();
    let basis = engine.done();
    basis.len() == 14 && basis.is_groebner() && basis.quotient_basis_dim().to_u64() == Some(8)
}

fn commute() -> bool {
    let system = match Ideal::parse(
        8,
        Grevlex,
        "{ x0 x3 + x1 x2 + 1,
           x1 x6 + x2 x5,
           x1 x7 + x3 x5 + x0 x5 + x1 x4,
           x2 x7 + x3 x6 + x0 x6 + x2 x4,
           x4 x7 + x5 x6 + 1 }",
    ) {
        Ok(i) => i,
        Err(_) => return false,
    };
    let mut engine = Buchberger::new(8, Grevlex);
    engine.update_ideal(&system);
    engine.process();
    let basis = engine.done();
    basis.is_groebner() && basis.quotient_basis_dim().to_u64() == Some(18)
}

fn main() {
    let mut failures = 0;
    run("words", words, &mut failures);
    run("orders", orders, &mut failures);
    run("bent", bent, &mut failures);
    run("bash", bash, &mut failures);
    run("commute", commute, &mut failures);
    std::process::exit(i32::from(failures > 0));
}
