use criterion::Criterion;
use msun::msun;

mod bench_util;
use bench_util::{
    bench_inputs, configure_criterion, gen_range, glibc_cospi, glibc_sinpi, glibc_tanpi,
};

fn bench_half_cycle(c: &mut Criterion) {
    let inputs = [0.0, 1e-300, 0.25, 0.5, 0.75, 1.0, 1.5, -2.25, 1e10 + 0.5, 1e17];
    let common = gen_range(2048, -4.0, 4.0, 0x5151);
    let large = gen_range(2048, -1e15, 1e15, 0x1e15);

    let cases: [(&str, fn(f64) -> f64, fn(f64) -> f64); 3] = [
        ("sinpi", msun::sinpi, glibc_sinpi),
        ("cospi", msun::cospi, glibc_cospi),
        ("tanpi", msun::tanpi, glibc_tanpi),
    ];
    for (name, ours, glibc) in cases {
        let mut group = c.benchmark_group(format!("{name}/smoke"));
        bench_inputs(&mut group, &inputs, ours, glibc);
        group.finish();

        let mut group = c.benchmark_group(format!("{name}/common"));
        bench_inputs(&mut group, &common, ours, glibc);
        group.finish();

        let mut group = c.benchmark_group(format!("{name}/large"));
        bench_inputs(&mut group, &large, ours, glibc);
        group.finish();
    }
}

fn main() {
    let mut c = configure_criterion();
    bench_half_cycle(&mut c);
    c.final_summary();
}
