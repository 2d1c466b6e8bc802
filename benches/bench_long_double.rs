use criterion::{Criterion, black_box};
use msun::msun::{self, Ld80, Ld128, LongDouble};

mod bench_util;
use bench_util::{configure_criterion, gen_range};

fn bench_width<T: LongDouble + From<f64>>(c: &mut Criterion, width: &str, xs: &[f64]) {
    let inputs: Vec<T> = xs.iter().map(|&x| T::from(x)).collect();
    let cases: [(&str, fn(T) -> T); 6] = [
        ("sinl", msun::sinl),
        ("cosl", msun::cosl),
        ("sinpil", msun::sinpil),
        ("expl", msun::expl),
        ("expm1l", msun::expm1l),
        ("tgammal", msun::tgammal),
    ];
    for (name, f) in cases {
        let mut group = c.benchmark_group(format!("{name}/{width}"));
        group.bench_function("msun", |b| {
            b.iter(|| {
                for &x in &inputs {
                    black_box(f(black_box(x)));
                }
            })
        });
        group.finish();
    }
}

fn main() {
    let mut c = configure_criterion();
    let xs = gen_range(256, 0.1, 30.0, 0x1d1d);
    bench_width::<Ld80>(&mut c, "ld80", &xs);
    bench_width::<Ld128>(&mut c, "ld128", &xs);
    c.final_summary();
}
