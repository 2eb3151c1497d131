use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_uniform_range() {
    let mut rng = StdRng::seed_from_u64(3);
    let t = WeightInit::Uniform.tensor(100, &mut rng);
    assert_eq!(t.len(), 100);
    assert!(t.is_leaf());
    assert!(t.values().iter().all(|&x| (0.0..1.0).contains(&x)));
}

#[test]
fn test_normal_is_seeded() {
    let a = WeightInit::Normal.tensor(16, &mut StdRng::seed_from_u64(11));
    let b = WeightInit::Normal.tensor(16, &mut StdRng::seed_from_u64(11));
    assert_eq!(a.values(), b.values());
    assert!(a.values().iter().any(|&x| x < 0.0));
}

#[test]
fn test_zeros() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(WeightInit::Zeros.tensor(3, &mut rng).values(), vec![0.0; 3]);
}
