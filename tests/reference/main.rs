//! This test suite compares results with high precision reference values.

mod common;
mod fixtures;

use bigfloat_fn::{pi, Consts, Context, Error, Float, RoundingMode, Sign};
use common::{assert_ulp_eq, PRECISIONS};

macro_rules! test_fn {
    ($fname:ident, $table:ident) => {
        let mut cc = Consts::new();
        for (arg, expected) in fixtures::$table {
            for p in PRECISIONS {
                let x = Float::parse(arg, p, RoundingMode::ToEven).unwrap();
                let n = x.$fname(RoundingMode::ToEven, &mut cc).unwrap();
                assert_eq!(n.precision(), p);
                assert_ulp_eq(&n, expected, stringify!($fname), arg);
            }
        }
    };
}

#[test]
fn sqrt_reference() {
    for (arg, expected) in fixtures::SQRT {
        for p in PRECISIONS {
            let x = Float::parse(arg, p, RoundingMode::ToEven).unwrap();
            let n = x.sqrt(RoundingMode::ToEven).unwrap();
            assert_ulp_eq(&n, expected, "sqrt", arg);
        }
    }
}

#[test]
fn ln_reference() {
    test_fn!(ln, LN);
}

#[test]
fn exp_reference() {
    test_fn!(exp, EXP);
}

#[test]
fn sin_reference() {
    test_fn!(sin, SIN);
}

#[test]
fn cos_reference() {
    test_fn!(cos, COS);
}

#[test]
fn tan_reference() {
    test_fn!(tan, TAN);
}

#[test]
fn atan_reference() {
    test_fn!(atan, ATAN);
}

#[test]
fn pow_reference() {
    let mut cc = Consts::new();
    for (z, w, expected) in fixtures::POW {
        for p in PRECISIONS {
            let x = Float::parse(z, p, RoundingMode::ToEven).unwrap();
            let y = Float::parse(w, p, RoundingMode::ToEven).unwrap();
            let n = x.pow(&y, RoundingMode::ToEven, &mut cc).unwrap();
            assert_ulp_eq(&n, expected, "pow", z);
        }
    }
}

#[test]
fn pi_reference() {
    for p in PRECISIONS {
        let n = pi(p, RoundingMode::ToEven).unwrap();
        assert_ulp_eq(&n, fixtures::PI, "pi", "");
    }

    let mut ctx = Context::default();
    for p in PRECISIONS {
        ctx.set_precision(p);
        let n = ctx.const_pi().unwrap();
        assert_ulp_eq(&n, fixtures::PI, "const_pi", "");
    }

    // truncated to 15 decimal digits
    let n = pi(50, RoundingMode::ToEven).unwrap();
    assert_eq!(format!("{}", n)[..16].replace('.', ""), "314159265358979");
}

#[test]
fn agm_reference() {
    for p in PRECISIONS {
        let a = Float::from_word(1, p).unwrap();
        let b = Float::from_word(2, p).unwrap();
        let n = a.agm(&b).unwrap();
        assert_ulp_eq(&n, fixtures::AGM_1_2, "agm", "1, 2");
    }
}

#[test]
fn integer_powers() {
    let rm = RoundingMode::ToEven;
    let mut cc = Consts::new();

    for (z, n, expected) in [
        ("1", 2, "1"),
        ("2", 8, "256"),
        ("2.5", 8, "1525.87890625"),
        ("300000", 4, "8.1e21"),
        ("0.125", 4, "0.000244140625"),
        ("-1.5", 3, "-3.375"),
    ] {
        for p in PRECISIONS {
            let x = Float::parse(z, p, rm).unwrap();
            let e = Float::parse(expected, p, rm).unwrap();
            assert_eq!(x.powi(n, rm).unwrap(), e);
            let w = Float::from_word(n, p).unwrap();
            assert_eq!(x.pow(&w, rm, &mut cc).unwrap(), e);
        }
    }
}

#[test]
fn special_values() {
    let rm = RoundingMode::ToEven;
    let mut cc = Consts::new();
    let p = 128;

    let zero = Float::new(p).unwrap();
    let one = Float::from_word(1, p).unwrap();
    let inf = Float::inf(p, Sign::Pos).unwrap();

    assert!(zero.sqrt(rm).unwrap().is_zero());
    assert!(inf.sqrt(rm).unwrap().is_inf_pos());
    assert!(one.ln(rm, &mut cc).unwrap().is_zero());
    assert!(zero.ln(rm, &mut cc).unwrap().is_inf_neg());
    assert!(inf.ln(rm, &mut cc).unwrap().is_inf_pos());
    assert_eq!(zero.exp(rm, &mut cc).unwrap(), one);
    assert!(inf.exp(rm, &mut cc).unwrap().is_inf_pos());
    assert!(inf.neg().exp(rm, &mut cc).unwrap().is_zero());
    assert_eq!(zero.cos(rm, &mut cc).unwrap(), one);
    assert!(zero.sin(rm, &mut cc).unwrap().is_zero());
    assert!(zero.atan(rm, &mut cc).unwrap().is_zero());

    let pi = cc.pi(p, rm).unwrap();
    assert_eq!(pi.cos(rm, &mut cc).unwrap(), one.neg());

    // domain errors
    let m1 = one.neg();
    assert_eq!(m1.sqrt(rm).unwrap_err(), Error::NegativeArgument);
    assert_eq!(m1.ln(rm, &mut cc).unwrap_err(), Error::NegativeArgument);
    let half = Float::parse("0.5", p, rm).unwrap();
    assert_eq!(m1.pow(&half, rm, &mut cc).unwrap_err(), Error::NegativeBase);
    assert_eq!(one.agm(&Float::from_word(1, 64).unwrap()).unwrap_err(), Error::PrecisionMismatch);
    assert_eq!(m1.agm(&one).unwrap_err(), Error::InvalidArgument);
    assert_eq!(inf.sin(rm, &mut cc).unwrap_err(), Error::InvalidArgument);

    // errors describe the violated precondition
    assert!(!format!("{}", Error::NegativeArgument).is_empty());
}
