use criterion::Criterion;
use msun::msun;

mod bench_util;
use bench_util::{bench_inputs, configure_criterion, gen_range, glibc_exp, glibc_expm1};

fn bench_exp(c: &mut Criterion) {
    let inputs = [
        -745.133_219_101_941_1,
        -100.0,
        -20.0,
        -1.0,
        -1e-6,
        0.0,
        1e-6,
        0.5,
        1.0,
        2.0,
        10.0,
        100.0,
        700.0,
    ];
    let common = gen_range(2048, -20.0, 20.0, 0xe4e4);
    let near_zero = gen_range(2048, -0.35, 0.35, 0x0e0e);

    let mut group = c.benchmark_group("exp/smoke");
    bench_inputs(&mut group, &inputs, msun::exp, glibc_exp);
    group.finish();

    let mut group = c.benchmark_group("exp/common");
    bench_inputs(&mut group, &common, msun::exp, glibc_exp);
    group.finish();

    let mut group = c.benchmark_group("expm1/smoke");
    bench_inputs(&mut group, &inputs, msun::expm1, glibc_expm1);
    group.finish();

    let mut group = c.benchmark_group("expm1/near_zero");
    bench_inputs(&mut group, &near_zero, msun::expm1, glibc_expm1);
    group.finish();
}

fn main() {
    let mut c = configure_criterion();
    bench_exp(&mut c);
    c.final_summary();
}
