// Host-side tests for the particle field generator and its distribution.

use parallax_backdrop::config::BackdropConfig;
use parallax_backdrop::core::{rand_range, FieldParams, Geometry, Material, ParticleField};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::rc::Rc;

fn field(seed: u64, count: usize, spread: f32) -> ParticleField {
    let mut rng = StdRng::seed_from_u64(seed);
    ParticleField::generate(
        &mut rng,
        &FieldParams {
            count,
            spread,
            rotation_spread: 8.0,
        },
        Rc::new(Geometry::circle(0.3, 3)),
        Rc::new(Material::phong(parallax_backdrop::core::Color::WHITE, 1.0, 0.5)),
    )
}

#[test]
fn rand_range_is_bounded_with_zero_mean() {
    let mut rng = StdRng::seed_from_u64(7);
    let n = 15.0;
    let samples: Vec<f32> = (0..200_000).map(|_| rand_range(&mut rng, n)).collect();
    assert!(samples.iter().all(|v| *v > -n && *v < n));
    let mean = samples.iter().map(|v| *v as f64).sum::<f64>() / samples.len() as f64;
    assert!(mean.abs() < 0.1, "mean {mean}");
}

#[test]
fn rand_range_is_triangular_not_uniform() {
    let mut rng = StdRng::seed_from_u64(11);
    let n = 1.0;
    let total = 200_000;
    let mut inner = 0usize; // |v| < 0.5
    let mut outer = 0usize; // |v| > 0.9
    for _ in 0..total {
        let v = rand_range(&mut rng, n).abs();
        if v < 0.5 {
            inner += 1;
        }
        if v > 0.9 {
            outer += 1;
        }
    }
    // Triangular on (-1, 1): P(|v| < 0.5) = 0.75, P(|v| > 0.9) = 0.01.
    // A uniform draw would give 0.5 and 0.1.
    let p_inner = inner as f64 / total as f64;
    let p_outer = outer as f64 / total as f64;
    assert!((p_inner - 0.75).abs() < 0.01, "p_inner {p_inner}");
    assert!((p_outer - 0.01).abs() < 0.005, "p_outer {p_outer}");
}

#[test]
fn generates_exact_count_within_spread() {
    let f = field(3, 400, 15.0);
    assert_eq!(f.len(), 400);
    for p in &f.particles {
        for c in p.position.to_array() {
            assert!(c > -15.0 && c < 15.0);
        }
        for c in p.rotation.to_array() {
            assert!(c > -8.0 && c < 8.0);
        }
    }
}

#[test]
fn zero_count_is_empty() {
    let f = field(3, 0, 15.0);
    assert!(f.is_empty());
}

#[test]
fn same_seed_same_field() {
    let a = field(99, 50, 15.0);
    let b = field(99, 50, 15.0);
    assert_eq!(a.particles, b.particles);
    let c = field(100, 50, 15.0);
    assert_ne!(a.particles, c.particles);
}

#[test]
fn spin_advances_only_y_rotation() {
    let mut f = field(5, 10, 15.0);
    let before = f.particles.clone();
    f.spin(0.005);
    f.spin(0.005);
    for (b, a) in before.iter().zip(&f.particles) {
        assert_eq!(a.position, b.position);
        assert_eq!(a.rotation.x, b.rotation.x);
        assert_eq!(a.rotation.z, b.rotation.z);
        assert!((a.rotation.y - (b.rotation.y + 0.01)).abs() < 1e-5);
    }
}

#[test]
fn default_scene_shares_one_geometry_and_material() {
    let config = BackdropConfig::default();
    let mut rng = StdRng::seed_from_u64(1);
    let scene = config.build_scene(&mut rng);
    assert_eq!(scene.particles.len(), 400);
    assert_eq!(Rc::strong_count(&scene.particles.geometry), 1);
    assert_eq!(scene.particles.geometry.triangle_count(), 3);
    assert_eq!(scene.particles.material.shininess, 1.0);
    assert_eq!(scene.lights.len(), 2);
    assert!(scene.objects.is_empty());
}
