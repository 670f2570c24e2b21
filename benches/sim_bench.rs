use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use orrery::{euler_cromer_step, Body, NewtonianGravity, Parameters, System, Vec3};

/// Deterministic cloud of `n` bodies; no rand needed.
fn make_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);
    for i in 0..n {
        let i_f = i as f64;
        let position = Vec3::new([
            (i_f * 0.37).sin() * 5.0e10,
            (i_f * 0.13).cos() * 5.0e10,
            (i_f * 0.07).sin() * 5.0e10,
        ]);
        bodies.push(Body::new(format!("body-{i}"), 1.0e24, position, Vec3::zeros()));
    }
    System::new(bodies)
}

/// Full O(n^2) step cost across a range of system sizes.
fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("euler_cromer_step");
    group.sample_size(10);

    for n in [200, 400, 800, 1600] {
        let params = Parameters {
            t_end: 100.0,
            h0: 0.001,
        };
        let mut sys = make_system(n);

        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| euler_cromer_step(&mut sys, &NewtonianGravity, &params));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
