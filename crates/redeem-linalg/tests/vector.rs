//! Integration tests for the Vector type.

use redeem_linalg::{LinAlgError, Shape, Vector};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn vec_of(values: &[f64]) -> Vector {
    Vector::from_vec(values.to_vec()).unwrap()
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn new_is_zero_filled() {
    for dim in 1..8 {
        let v = Vector::new(dim).unwrap();
        assert_eq!(v.dimension(), dim);
        for i in 0..dim {
            assert_eq!(v.get(i).unwrap(), 0.0);
        }
    }
}

#[test]
fn new_rejects_zero_dimension() {
    assert_eq!(
        Vector::new(0),
        Err(LinAlgError::InvalidDimension(Shape::Vector(0)))
    );
    assert!(matches!(
        Vector::from_vec(vec![]),
        Err(LinAlgError::InvalidDimension(_))
    ));
}

#[test]
fn clone_is_independent() {
    let original = vec_of(&[1.0, 2.0, 3.0]);
    let mut copy = original.clone();
    assert_eq!(copy, original);

    copy.set(0, 99.0).unwrap();
    copy.resize(5).unwrap();
    assert_eq!(original.as_slice(), &[1.0, 2.0, 3.0]);
    assert_ne!(copy, original);
}

// ---------------------------------------------------------------------------
// Literal parsing
// ---------------------------------------------------------------------------

#[test]
fn parse_well_formed_literal() {
    init_logger();
    let v = Vector::parse("[ 1.0 2.0 3.0 ]").unwrap();
    assert_eq!(v.dimension(), 3);
    assert_eq!(v.to_vec(), vec![1.0, 2.0, 3.0]);

    let v: Vector = "[ -1.2 2.0 3.1 5.8 ]".parse().unwrap();
    assert_eq!(v.to_vec(), vec![-1.2, 2.0, 3.1, 5.8]);
}

#[test]
fn parse_tolerates_extra_whitespace() {
    let v = Vector::parse("  [\t1e2   -0.5\n]  ").unwrap();
    assert_eq!(v.to_vec(), vec![100.0, -0.5]);
}

#[test]
fn parse_missing_brackets() {
    for literal in ["1.0 2.0 ]", "[ 1.0 2.0", "", "   ", "[", "]", "[1.0 2.0]"] {
        match Vector::parse(literal) {
            Err(LinAlgError::MalformedLiteral { token: None, .. }) => {}
            other => panic!("expected missing bracket for {:?}, got {:?}", literal, other),
        }
    }
}

#[test]
fn parse_bad_number_names_the_token() {
    match Vector::parse("[ 1.0 x 3.0 ]") {
        Err(LinAlgError::MalformedLiteral { literal, token }) => {
            assert_eq!(literal, "[ 1.0 x 3.0 ]");
            assert_eq!(token.as_deref(), Some("x"));
        }
        other => panic!("expected malformed literal, got {:?}", other),
    }
}

#[test]
fn parse_empty_literal_has_no_dimension() {
    assert!(matches!(
        Vector::parse("[ ]"),
        Err(LinAlgError::InvalidDimension(Shape::Vector(0)))
    ));
}

// ---------------------------------------------------------------------------
// Element access and resizing
// ---------------------------------------------------------------------------

#[test]
fn get_and_set_are_bounds_checked() {
    let mut v = Vector::new(3).unwrap();
    v.set(2, 4.5).unwrap();
    assert_eq!(v.get(2).unwrap(), 4.5);
    assert_eq!(v[2], 4.5);

    assert_eq!(
        v.get(3),
        Err(LinAlgError::IndexOutOfBounds {
            index: Shape::Vector(3),
            bounds: Shape::Vector(3),
        })
    );
    assert!(matches!(
        v.set(10, 1.0),
        Err(LinAlgError::IndexOutOfBounds { .. })
    ));
    assert_eq!(v.to_vec(), vec![0.0, 0.0, 4.5]);
}

#[test]
fn resize_grows_with_zeros_and_truncates() {
    init_logger();
    let mut v = vec_of(&[1.0, 2.0, 3.0]);

    v.resize(5).unwrap();
    assert_eq!(v.to_vec(), vec![1.0, 2.0, 3.0, 0.0, 0.0]);

    v.resize(2).unwrap();
    assert_eq!(v.to_vec(), vec![1.0, 2.0]);

    v.resize(2).unwrap();
    assert_eq!(v.to_vec(), vec![1.0, 2.0]);

    assert!(matches!(
        v.resize(0),
        Err(LinAlgError::InvalidDimension(Shape::Vector(0)))
    ));
    assert_eq!(v.dimension(), 2);
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

#[test]
fn scalar_add_leaves_receiver_unchanged() {
    let v1 = vec_of(&[1.0, -2.0, 3.5]);
    let v2 = v1.scalar_add(5.0);
    assert_eq!(v1.to_vec(), vec![1.0, -2.0, 3.5]);
    for i in 0..v1.dimension() {
        assert_eq!(v2[i], v1[i] + 5.0);
    }

    let mut v3 = v1.clone();
    v3.scalar_add_in_place(5.0);
    assert_eq!(v3, v2);
}

#[test]
fn scalar_mult_pairs() {
    let v1 = vec_of(&[1.0, -2.0, 3.5]);
    let v2 = v1.scalar_mult(2.0);
    assert_eq!(v2.to_vec(), vec![2.0, -4.0, 7.0]);
    assert_eq!(v1.to_vec(), vec![1.0, -2.0, 3.5]);

    let mut v3 = v1.clone();
    v3.scalar_mult_in_place(2.0);
    assert_eq!(v3, v2);
}

#[test]
fn elementwise_ops() {
    let a = vec_of(&[1.0, 2.0, 3.0]);
    let b = vec_of(&[4.0, 5.0, 6.0]);

    let sum = a.elementwise_add(&b).unwrap();
    assert_eq!(sum.to_vec(), vec![5.0, 7.0, 9.0]);
    let product = a.elementwise_mult(&b).unwrap();
    assert_eq!(product.to_vec(), vec![4.0, 10.0, 18.0]);
    assert_eq!(a.to_vec(), vec![1.0, 2.0, 3.0]);
    assert_eq!(b.to_vec(), vec![4.0, 5.0, 6.0]);

    let mut c = a.clone();
    c.elementwise_add_in_place(&b).unwrap();
    assert_eq!(c, sum);
    let mut d = a.clone();
    d.elementwise_mult_in_place(&b).unwrap();
    assert_eq!(d, product);
}

#[test]
fn elementwise_ops_reject_mismatched_dimensions() {
    let mut a = vec_of(&[1.0, 2.0]);
    let b = vec_of(&[1.0, 2.0, 3.0]);

    let mismatch = |r: redeem_linalg::Result<Vector>| {
        matches!(
            r,
            Err(LinAlgError::DimensionMismatch {
                lhs: Shape::Vector(2),
                rhs: Shape::Vector(3),
                ..
            })
        )
    };
    assert!(mismatch(a.elementwise_add(&b)));
    assert!(mismatch(a.elementwise_mult(&b)));
    assert!(a.elementwise_add_in_place(&b).is_err());
    assert!(a.elementwise_mult_in_place(&b).is_err());
    assert_eq!(a.to_vec(), vec![1.0, 2.0]);
}

#[test]
fn inner_product() {
    let a = vec_of(&[1.0, 2.0, 3.0]);
    let b = vec_of(&[4.0, 5.0, 6.0]);
    assert_eq!(Vector::inner_product(&a, &b).unwrap(), 32.0);
    assert!(matches!(
        Vector::inner_product(&a, &vec_of(&[1.0])),
        Err(LinAlgError::DimensionMismatch { .. })
    ));
}

// ---------------------------------------------------------------------------
// Equality and rendering
// ---------------------------------------------------------------------------

#[test]
fn equality_is_exact() {
    assert_eq!(vec_of(&[0.1 + 0.2]), vec_of(&[0.1 + 0.2]));
    assert_ne!(vec_of(&[0.1 + 0.2]), vec_of(&[0.3]));
    assert_ne!(vec_of(&[1.0]), vec_of(&[1.0, 0.0]));
    assert_ne!(vec_of(&[f64::NAN]), vec_of(&[f64::NAN]));
}

#[test]
fn display_uses_fixed_width() {
    let v = vec_of(&[1.0, -2.5, 10.0]);
    assert_eq!(v.to_string(), "[  1.000  -2.500  10.000  ]");
}
