mod test_utils;

use approx::*;
use flexy::test_utils::*;
use flexy::*;
use test_utils::*;

fn one_triangle_shell(material: Material) -> TriShell {
    let (verts, tris) = make_one_triangle();
    TriShellBuilder::new(material)
        .rest_positions(verts)
        .elements(tris)
        .build()
        .expect("Failed to build a one triangle shell.")
}

#[test]
fn rest_state_produces_zero_force() {
    init_logger();
    let (rest, _) = make_one_triangle();
    let mut shell = one_triangle_shell(SOLID_MATERIAL);
    let sink = step_shell(&mut shell, &rest, &rest, 0.01);
    assert!(sink.qfrc.iter().all(|&f| f == 0.0));
}

/// Membrane strain is purely in-plane: stretching a flat triangle inside its
/// own plane produces no out-of-plane force.
#[test]
fn in_plane_stretch_stays_in_plane() {
    init_logger();
    let (rest, _) = make_one_triangle();
    let mut shell = one_triangle_shell(SOLID_MATERIAL);

    let mut xpos = rest.clone();
    xpos[1] = [1.1, 0.0, 0.0];
    xpos[2] = [-0.03, 0.95, 0.0];
    let sink = step_shell(&mut shell, &rest, &xpos, 0.01);

    for v in 0..3 {
        let f = sink.vertex_force(v);
        assert_eq!(f[2], 0.0);
    }
}

/// Stretching along x pulls the displaced vertex back.
#[test]
fn stretch_is_resisted() {
    init_logger();
    let (rest, _) = make_one_triangle();
    let mut shell = one_triangle_shell(SOLID_MATERIAL);

    let mut xpos = rest.clone();
    xpos[1] = [1.05, 0.0, 0.0];
    let sink = step_shell(&mut shell, &rest, &xpos, 0.01);

    assert!(sink.vertex_force(1)[0] < 0.0);
    let net = net_force(&sink, 3);
    for c in net.iter() {
        assert_abs_diff_eq!(*c, 0.0, epsilon = 1e-9);
    }
}

/// Dilating an equilateral triangle in its plane pulls all three vertices
/// back toward the centroid with equal magnitude.
#[test]
fn dilation_forces_are_symmetric() {
    init_logger();
    let h = 3.0f64.sqrt() / 2.0;
    // Equilateral triangle with unit edges centered on the origin.
    let rest = vec![
        [-0.5, -h / 3.0, 0.0],
        [0.5, -h / 3.0, 0.0],
        [0.0, 2.0 * h / 3.0, 0.0],
    ];
    let mut shell = TriShellBuilder::new(SOLID_MATERIAL)
        .rest_positions(rest.clone())
        .elements(vec![[0, 1, 2]])
        .build()
        .unwrap();

    let xpos = scaled(&rest, 1.01);
    let sink = step_shell(&mut shell, &rest, &xpos, 0.01);

    let magnitudes: Vec<f64> = (0..3)
        .map(|v| {
            let f = sink.vertex_force(v);
            (f[0] * f[0] + f[1] * f[1] + f[2] * f[2]).sqrt()
        })
        .collect();
    assert!(magnitudes[0] > 0.0);
    for m in magnitudes.iter().skip(1) {
        assert_relative_eq!(*m, magnitudes[0], max_relative = 1e-10);
    }
    for v in 0..3 {
        let f = sink.vertex_force(v);
        let p = xpos[v];
        let dot = f[0] * p[0] + f[1] * p[1] + f[2] * p[2];
        let pm = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
        assert_relative_eq!(dot / (magnitudes[v] * pm), -1.0, max_relative = 1e-10);
    }
}
