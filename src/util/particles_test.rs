use super::*;

fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
    Particle { x, y, vx, vy, radius: 1.0, color: "red" }
}

fn field(particles: Vec<Particle>) -> ParticleField {
    ParticleField { width: 100.0, height: 50.0, particles }
}

#[test]
fn seeded_field_stays_inside_bounds() {
    let mut n = 0u32;
    let random = move || {
        n = (n * 7 + 3) % 10;
        f64::from(n) / 10.0
    };
    let f = ParticleField::seeded(PARTICLE_COUNT, 800.0, 600.0, random);
    assert_eq!(f.particles.len(), PARTICLE_COUNT);
    for p in &f.particles {
        assert!((0.0..800.0).contains(&p.x));
        assert!((0.0..600.0).contains(&p.y));
        assert!(p.vx.abs() <= 0.25 && p.vy.abs() <= 0.25);
        assert!((1.0..3.0).contains(&p.radius));
    }
}

#[test]
fn step_moves_by_velocity() {
    let mut f = field(vec![particle(10.0, 10.0, 0.5, -0.25)]);
    f.step();
    assert_eq!((f.particles[0].x, f.particles[0].y), (10.5, 9.75));
}

#[test]
fn step_wraps_at_edges() {
    let mut f = field(vec![particle(99.9, 0.1, 0.5, -0.5), particle(0.1, 49.9, -0.5, 0.5)]);
    f.step();
    assert_eq!((f.particles[0].x, f.particles[0].y), (0.0, 50.0));
    assert_eq!((f.particles[1].x, f.particles[1].y), (100.0, 0.0));
}

#[test]
fn links_only_join_nearby_pairs() {
    let f = field(vec![particle(0.0, 0.0, 0.0, 0.0), particle(30.0, 40.0, 0.0, 0.0), particle(400.0, 0.0, 0.0, 0.0)]);
    let links = f.links();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].to, (30.0, 40.0));
    assert!((links[0].alpha - 0.15 * (1.0 - 50.0 / 150.0)).abs() < 1e-12);
}

#[test]
fn link_alpha_fades_to_nothing() {
    assert_eq!(link_alpha(0.0), Some(0.15));
    assert_eq!(link_alpha(150.0), None);
    assert!(link_alpha(149.0).is_some_and(|a| a > 0.0 && a < 0.01));
}

#[test]
fn stroke_style_formats_alpha() {
    let link = Link { from: (0.0, 0.0), to: (1.0, 1.0), alpha: 0.1 };
    assert_eq!(link.stroke_style(), "rgba(0,212,255,0.100)");
}
