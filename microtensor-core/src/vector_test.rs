use super::*;
use crate::error::MicroTensorError;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_construction_modes() {
    assert_eq!(Vector::filled(3, 2.5).as_slice(), &[2.5, 2.5, 2.5]);
    assert_eq!(Vector::zeros(2).as_slice(), &[0.0, 0.0]);

    let mut rng = StdRng::seed_from_u64(7);
    let random = Vector::rand_uniform(64, &mut rng);
    assert_eq!(random.len(), 64);
    assert!(random.as_slice().iter().all(|&x| (0.0..1.0).contains(&x)));

    // Same seed, same samples.
    let mut rng_again = StdRng::seed_from_u64(7);
    assert_eq!(Vector::rand_uniform(64, &mut rng_again), random);
}

#[test]
fn test_elementwise_ops() -> Result<(), MicroTensorError> {
    let a = Vector::new(vec![1.0, 2.0, 3.0]);
    let b = Vector::new(vec![4.0, 5.0, 6.0]);

    assert_eq!(a.add(&b)?.as_slice(), &[5.0, 7.0, 9.0]);
    assert_eq!(a.sub(&b)?.as_slice(), &[-3.0, -3.0, -3.0]);
    assert_eq!(a.mul(&b)?.as_slice(), &[4.0, 10.0, 18.0]);
    assert_eq!(b.div(&a)?.as_slice(), &[4.0, 2.5, 2.0]);
    assert_eq!(a.pow(2.0)?.as_slice(), &[1.0, 4.0, 9.0]);
    assert_eq!(a.neg().as_slice(), &[-1.0, -2.0, -3.0]);

    // Operands are left untouched.
    assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0]);
    assert_eq!(b.as_slice(), &[4.0, 5.0, 6.0]);
    Ok(())
}

#[test]
fn test_scalar_broadcast() -> Result<(), MicroTensorError> {
    let a = Vector::new(vec![1.0, 2.0, 3.0]);
    let one = Vector::new(vec![10.0]);

    assert_eq!(a.add(&one)?.as_slice(), &[11.0, 12.0, 13.0]);
    assert_eq!(a.mul(0.5)?.as_slice(), &[0.5, 1.0, 1.5]);
    Ok(())
}

#[test]
fn test_length_mismatch() {
    let a = Vector::new(vec![1.0, 2.0, 3.0]);
    let b = Vector::new(vec![1.0, 2.0]);
    match a.add(&b) {
        Err(MicroTensorError::LengthMismatch {
            expected,
            actual,
            operation,
        }) => {
            assert_eq!(expected, 3);
            assert_eq!(actual, 2);
            assert_eq!(operation, "add");
        }
        other => panic!("Expected LengthMismatch, got {:?}", other),
    }

    // A scalar left operand does not stretch to the right operand.
    let scalar = Vector::new(vec![1.0]);
    assert!(scalar.add(&a).is_err());
}

#[test]
fn test_reductions() {
    let a = Vector::new(vec![1.0, -4.0, 3.5]);
    assert_eq!(a.sum().as_slice(), &[0.5]);
    assert_relative_eq!(a.mean(), 0.5 / 3.0);
    assert_eq!(a.max(), 3.5);
    assert_relative_eq!(a.cosh().as_slice()[0], 1.0f64.cosh());
    assert_eq!(Vector::zeros(0).sum().as_slice(), &[0.0]);
}

#[test]
fn test_scalar_access() {
    assert_eq!(Vector::new(vec![4.0]).scalar(), Ok(4.0));
    assert!(matches!(
        Vector::new(vec![4.0, 5.0]).scalar(),
        Err(MicroTensorError::NotScalar { len: 2, .. })
    ));
}

#[test]
fn test_reshape_validates_element_count() {
    let a = Vector::zeros(6);
    assert_eq!(a.reshape(&[2, 3]).map(|v| v.len()), Ok(6));
    assert_eq!(a.flatten(), a);
    assert!(matches!(
        a.reshape(&[4, 2]),
        Err(MicroTensorError::InvalidReshape { len: 6, .. })
    ));
}
