#![allow(dead_code)]

use flexy::test_utils::ForceRecorder;
use flexy::{edge_lengths, StepInput, TetSolid, TriShell};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Step a solid once against the given rest and current configurations,
/// computing the edge-length inputs the way a host would.
pub fn step_solid(
    solid: &mut TetSolid,
    rest: &[[f64; 3]],
    xpos: &[[f64; 3]],
    dt: f64,
) -> ForceRecorder {
    let reference = edge_lengths(rest, solid.edges());
    let deformed = edge_lengths(xpos, solid.edges());
    let mut sink = ForceRecorder::new(3 * solid.num_vertices());
    solid.step(
        StepInput {
            xpos,
            deformed: &deformed,
            reference: &reference,
            dt,
        },
        &mut sink,
    );
    sink
}

pub fn step_shell(
    shell: &mut TriShell,
    rest: &[[f64; 3]],
    xpos: &[[f64; 3]],
    dt: f64,
) -> ForceRecorder {
    let reference = edge_lengths(rest, shell.edges());
    let deformed = edge_lengths(xpos, shell.edges());
    let mut sink = ForceRecorder::new(3 * shell.num_vertices());
    shell.step(
        StepInput {
            xpos,
            deformed: &deformed,
            reference: &reference,
            dt,
        },
        &mut sink,
    );
    sink
}

/// Uniformly scale positions about the origin.
pub fn scaled(x: &[[f64; 3]], factor: f64) -> Vec<[f64; 3]> {
    x.iter()
        .map(|p| [p[0] * factor, p[1] * factor, p[2] * factor])
        .collect()
}

pub fn net_force(sink: &ForceRecorder, num_verts: usize) -> [f64; 3] {
    let mut net = [0.0; 3];
    for v in 0..num_verts {
        let f = sink.vertex_force(v);
        net[0] += f[0];
        net[1] += f[1];
        net[2] += f[2];
    }
    net
}
