/*
oxcoil, a generator of supercoiled DNA duplexes for oxDNA simulations.
    Copyright (C) 2026  The oxcoil developers

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/
use super::*;
use std::f64::consts::TAU;

fn circle(n: usize, radius: f64) -> Vec<DVec3> {
    (0..n)
        .map(|i| {
            let theta = TAU * i as f64 / n as f64;
            DVec3::new(radius * theta.cos(), radius * theta.sin(), 0.)
        })
        .collect()
}

/// A closed curve leaving the plane gently, with two incommensurate
/// harmonics so that no symmetry forces its writhe to vanish.
fn nonplanar_loop(n: usize, amplitude: f64) -> Vec<DVec3> {
    (0..n)
        .map(|i| {
            let theta = TAU * i as f64 / n as f64;
            let z = amplitude * ((2. * theta).sin() + 0.8 * (3. * theta).sin());
            DVec3::new(theta.cos(), theta.sin(), z)
        })
        .collect()
}

/// A left-handed trefoil, whose writhe is close to -3.4.
fn trefoil(n: usize) -> Vec<DVec3> {
    (0..n)
        .map(|i| {
            let t = TAU * i as f64 / n as f64;
            DVec3::new(
                t.sin() + 2. * (2. * t).sin(),
                t.cos() - 2. * (2. * t).cos(),
                -(3. * t).sin(),
            )
        })
        .collect()
}

/// An unknotted ring whose tube coils `coils` times around a torus, like a
/// looped telephone cord. Wide enough that the wound strands stay clear of
/// the opposite side of each coil.
fn coiled_ring(n: usize, coils: f64) -> Vec<DVec3> {
    (0..n)
        .map(|i| {
            let theta = TAU * i as f64 / n as f64;
            let radial = 6. + 1.5 * (coils * theta).cos();
            DVec3::new(
                radial * theta.cos(),
                radial * theta.sin(),
                1.5 * (coils * theta).sin(),
            )
        })
        .collect()
}

fn scaled_centerline(points: Vec<DVec3>, closed: bool) -> Centerline {
    let mut curve = Centerline::from_points(points, closed).unwrap();
    curve.scale_to_rise(&Parameters::DEFAULT).unwrap();
    curve
}

fn seeded_options() -> AssemblyOptions {
    AssemblyOptions {
        seed: Some(42),
        ..Default::default()
    }
}

/// Gauss linking number of two disjoint closed polylines, from the midpoint
/// double sum. Segments as long as the gap between the curves are too coarse
/// for the midpoint rule, so both polylines are refined first.
fn gauss_linking(first: &[DVec3], second: &[DVec3]) -> f64 {
    fn refine(points: &[DVec3]) -> Vec<DVec3> {
        let n = points.len();
        let mut refined = Vec::with_capacity(4 * n);
        for i in 0..n {
            let here = points[i];
            let step = (points[(i + 1) % n] - here) * 0.25;
            for k in 0..4 {
                refined.push(here + step * k as f64);
            }
        }
        refined
    }
    let first = refine(first);
    let second = refine(second);
    let (n, m) = (first.len(), second.len());
    let mut sum = 0.;
    for i in 0..n {
        let a = first[(i + 1) % n] - first[i];
        let middle = (first[(i + 1) % n] + first[i]) * 0.5;
        for j in 0..m {
            let b = second[(j + 1) % m] - second[j];
            let r = middle - (second[(j + 1) % m] + second[j]) * 0.5;
            sum += a.cross(b).dot(r) / r.mag().powi(3);
        }
    }
    sum / (2. * TAU)
}

#[test]
fn planar_curves_have_no_writhe() {
    let curve = scaled_centerline(circle(60, 3.), true);
    assert_eq!(topology::writhe(&curve), 0.);

    // any planar shape, not only circles
    let wavy: Vec<DVec3> = (0..90)
        .map(|i| {
            let theta = TAU * i as f64 / 90.;
            let r = 2. + 0.5 * (5. * theta).cos();
            DVec3::new(r * theta.cos(), r * theta.sin(), 0.)
        })
        .collect();
    let curve = scaled_centerline(wavy, true);
    assert_eq!(topology::writhe(&curve), 0.);
}

#[test]
fn writhe_is_chiral_and_orientation_independent() {
    let points = trefoil(140);
    let writhe = topology::writhe(&scaled_centerline(points.clone(), true));
    assert!(writhe.abs() > 1.);

    let mirrored = points
        .iter()
        .map(|p| DVec3::new(p.x, p.y, -p.z))
        .collect();
    let mirror_writhe = topology::writhe(&scaled_centerline(mirrored, true));
    assert!((mirror_writhe + writhe).abs() < 1e-12);

    let mut reversed = points;
    reversed.reverse();
    let reversed_writhe = topology::writhe(&scaled_centerline(reversed, true));
    assert!((reversed_writhe - writhe).abs() < 1e-9);
}

#[test]
fn a_left_handed_trefoil_has_negative_writhe() {
    // the midpoint sum over the 140-gon evaluates to -3.3603
    let writhe = topology::writhe(&scaled_centerline(trefoil(140), true));
    assert!((writhe + 3.3603).abs() < 1e-3);
}

#[test]
fn coiled_rings_realize_the_chosen_linking_number() {
    let parameters = Parameters::DEFAULT;
    let curve = scaled_centerline(coiled_ring(252, 4.), true);
    let writhe = topology::writhe(&curve);
    // the four coils writhe about -1.16 turns
    assert!(writhe < -1.);

    let topology = topology::solve_linking(252, writhe, 0., 0., &parameters);
    assert_eq!(topology.linking_number, 24);

    let frames = FrameField::new(&curve).unwrap();
    let helix = wind_duplex(&curve, &frames, &topology, &parameters).unwrap();
    let realized = gauss_linking(curve.points(), &helix.positions_forward);
    assert!((realized - topology.linking_number as f64).abs() < 0.25);
}

#[test]
fn relaxed_circle_of_84_points() {
    let parameters = Parameters::DEFAULT;
    let curve = scaled_centerline(circle(84, 2.), true);
    let writhe = topology::writhe(&curve);
    assert_eq!(writhe, 0.);

    let topology = topology::solve_linking(84, writhe, 0., 0., &parameters);
    assert_eq!(topology.linking_number, 8);
    assert_eq!(topology.twist, 8.);
    assert!((topology.twist_per_base - 0.5984).abs() < 1e-4);

    let frames = FrameField::new(&curve).unwrap();
    let helix = wind_duplex(&curve, &frames, &topology, &parameters).unwrap();
    assert!((helix.measured_twist - 8.).abs() < 1e-3 * 84. / TAU);
}

#[test]
fn realized_twist_matches_the_chosen_topology() {
    let parameters = Parameters::DEFAULT;
    let curve = scaled_centerline(nonplanar_loop(210, 0.05), true);
    let writhe = topology::writhe(&curve);
    let topology = topology::solve_linking(210, writhe, -0.05, 0., &parameters);
    // 210 / 10.5 * 0.95 = 19 turns
    assert_eq!(topology.linking_number, 19);
    assert!(
        (topology.twist + topology.writhe - topology.linking_number as f64).abs() < 1e-12
    );

    let frames = FrameField::new(&curve).unwrap();
    let helix = wind_duplex(&curve, &frames, &topology, &parameters).unwrap();
    assert!((helix.measured_twist - topology.twist).abs() < 1e-3 * 210. / TAU);
}

#[test]
fn complementary_strand_mirrors_the_forward_one() {
    let parameters = Parameters::DEFAULT;
    let system = generate(circle(40, 2.), &seeded_options(), &parameters).unwrap();
    assert_eq!(system.strands().len(), 2);
    let forward = &system.strands()[0];
    let backward = &system.strands()[1];
    assert_eq!(forward.len(), 40);
    assert_eq!(backward.len(), 40);
    assert!(forward.cyclic && backward.cyclic);

    for i in 0..40 {
        let partner = &forward.nucleotides[39 - i];
        let nucl = &backward.nucleotides[i];
        assert_eq!(nucl.base, partner.base.complement());
        assert!((nucl.normal + partner.normal).mag() < 1e-12);
        assert!((nucl.backbone_base + partner.backbone_base).mag() < 1e-12);
        // paired nucleotides face each other through the axis
        let separation = (nucl.position - partner.position).mag();
        assert!((separation - 2. * parameters.center_offset).abs() < 1e-9);
    }
}

#[test]
fn a_nick_leaves_the_complementary_strand_linear() {
    let options = AssemblyOptions {
        nicked: true,
        ..seeded_options()
    };
    let system = generate(circle(40, 2.), &options, &Parameters::DEFAULT).unwrap();
    assert!(system.strands()[0].cyclic);
    assert!(!system.strands()[1].cyclic);
}

#[test]
fn open_curves_yield_linear_strands() {
    let arc: Vec<DVec3> = (0..50)
        .map(|i| {
            let t = 3. * i as f64 / 50.;
            DVec3::new(t.cos(), t.sin(), 0.1 * t)
        })
        .collect();
    let options = AssemblyOptions {
        closed: false,
        ..seeded_options()
    };
    let system = generate(arc, &options, &Parameters::DEFAULT).unwrap();
    assert_eq!(system.strands().len(), 2);
    assert!(!system.strands()[0].cyclic);
    assert!(!system.strands()[1].cyclic);
}

#[test]
fn single_stranded_structures_have_one_strand() {
    let parameters = Parameters::DEFAULT;
    let options = AssemblyOptions {
        double: false,
        ..seeded_options()
    };
    let system = generate(circle(40, 2.), &options, &parameters).unwrap();
    assert_eq!(system.strands().len(), 1);
    assert!(system.strands()[0].cyclic);
    assert_eq!(system.nb_nucleotides(), 40);
}

#[test]
fn a_supplied_sequence_is_used_verbatim() {
    let sequence = "ACGT".repeat(10);
    let options = AssemblyOptions {
        sequence: Some(sequence),
        ..seeded_options()
    };
    let system = generate(circle(40, 2.), &options, &Parameters::DEFAULT).unwrap();
    let forward = &system.strands()[0];
    let expected = [Base::A, Base::C, Base::G, Base::T];
    for (i, nucl) in forward.nucleotides.iter().enumerate() {
        assert_eq!(nucl.base, expected[i % 4]);
    }
    // the complementary strand starts with the complement of the last base
    assert_eq!(system.strands()[1].nucleotides[0].base, Base::A);
}

#[test]
fn sequence_errors_surface_from_generate() {
    let options = AssemblyOptions {
        sequence: Some(String::from("ACGT")),
        ..seeded_options()
    };
    let result = generate(circle(40, 2.), &options, &Parameters::DEFAULT);
    assert!(matches!(
        result,
        Err(BuildError::SequenceLengthMismatch {
            expected: 40,
            actual: 4
        })
    ));
}

#[test]
fn incompatible_options_are_rejected() {
    let single_nicked = AssemblyOptions {
        double: false,
        nicked: true,
        ..Default::default()
    };
    assert!(matches!(
        generate(circle(40, 2.), &single_nicked, &Parameters::DEFAULT),
        Err(BuildError::IncompatibleOptions(_))
    ));

    let open_nicked = AssemblyOptions {
        closed: false,
        nicked: true,
        ..Default::default()
    };
    assert!(matches!(
        generate(circle(40, 2.), &open_nicked, &Parameters::DEFAULT),
        Err(BuildError::IncompatibleOptions(_))
    ));
}

#[test]
fn colinear_centerlines_are_rejected() {
    let mut points = circle(40, 2.);
    // flatten three points onto a straight segment
    let direction = (points[6] - points[4]) * 0.5;
    points[5] = points[4] + direction;
    let result = generate(points, &seeded_options(), &Parameters::DEFAULT);
    assert!(matches!(
        result,
        Err(BuildError::DegenerateCurve { index: 5, .. })
    ));
}

#[test]
fn seeded_generation_is_reproducible_and_scale_invariant() {
    let parameters = Parameters::DEFAULT;
    let options = AssemblyOptions {
        seed: Some(7),
        ..Default::default()
    };
    let small = generate(nonplanar_loop(63, 0.1), &options, &parameters).unwrap();
    let large: Vec<DVec3> = nonplanar_loop(63, 0.1)
        .iter()
        .map(|p| *p * 1000.)
        .collect();
    let large = generate(large, &options, &parameters).unwrap();

    for (a, b) in small.strands().iter().zip(large.strands().iter()) {
        assert_eq!(a.len(), b.len());
        for (x, y) in a.nucleotides.iter().zip(b.nucleotides.iter()) {
            assert_eq!(x.base, y.base);
            assert!((x.position - y.position).mag() < 1e-9);
        }
    }
    assert!((small.box_size - large.box_size).mag() < 1e-9);
}

#[test]
fn the_box_covers_the_scaled_extent() {
    let parameters = Parameters::DEFAULT;
    let curve = scaled_centerline(circle(84, 2.), true);
    let extent = curve.extent();
    let expected = extent.x.max(extent.y).max(extent.z) + 2. * parameters.rise;

    let system = generate(circle(84, 2.), &seeded_options(), &parameters).unwrap();
    assert!((system.box_size.x - expected).abs() < 1e-12);
    assert_eq!(system.box_size.x, system.box_size.y);
    assert_eq!(system.box_size.x, system.box_size.z);
}
