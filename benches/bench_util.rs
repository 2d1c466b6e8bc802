#![allow(dead_code)]

use criterion::{BenchmarkGroup, Criterion, black_box};
use std::sync::OnceLock;
use std::time::Duration;

const RNG_A: u64 = 6364136223846793005;
const RNG_C: u64 = 1442695040888963407;
const RNG_DENOM: f64 = (1u64 << 53) as f64;

pub fn lcg_next(state: &mut u64) -> u64 {
    *state = state.wrapping_mul(RNG_A).wrapping_add(RNG_C);
    *state
}

pub fn uniform_f64(state: &mut u64) -> f64 {
    let bits = lcg_next(state) >> 11;
    (bits as f64) / RNG_DENOM
}

pub fn gen_range(count: usize, min: f64, max: f64, seed: u64) -> Vec<f64> {
    let mut state = seed;
    let span = max - min;
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        values.push(min + uniform_f64(&mut state) * span);
    }
    values
}

pub fn bench_inputs<F, G>(
    group: &mut BenchmarkGroup<'_, criterion::measurement::WallTime>,
    inputs: &[f64],
    ours: F,
    glibc: G,
) where
    F: Fn(f64) -> f64 + Copy,
    G: Fn(f64) -> f64 + Copy,
{
    group.bench_function("msun", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in inputs {
                acc += ours(black_box(x));
            }
            black_box(acc)
        })
    });
    group.bench_function("glibc", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in inputs {
                acc += glibc(black_box(x));
            }
            black_box(acc)
        })
    });
}

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(200)
        .measurement_time(Duration::from_secs(10))
        .warm_up_time(Duration::from_secs(5))
}

type UnaryFn = unsafe extern "C" fn(f64) -> f64;

struct LibmFns {
    sin: UnaryFn,
    cos: UnaryFn,
    tan: UnaryFn,
    exp: UnaryFn,
    expm1: UnaryFn,
    tgamma: UnaryFn,
    // sinpi and friends only exist in glibc 2.41 and later
    sinpi: Option<UnaryFn>,
    cospi: Option<UnaryFn>,
    tanpi: Option<UnaryFn>,
}

static LIBM_FNS: OnceLock<LibmFns> = OnceLock::new();

fn libm_path() -> String {
    if let Ok(value) = std::env::var("MSUN_GLIBC_LIBM") {
        let value = value.trim().to_string();
        if !value.is_empty() {
            return value;
        }
    }
    let default = "/lib/x86_64-linux-gnu/libm.so.6";
    if std::path::Path::new(default).exists() {
        return default.to_string();
    }
    panic!("glibc libm not found; set MSUN_GLIBC_LIBM");
}

fn load_libm() -> LibmFns {
    let path = libm_path();
    let lib = unsafe { libloading::Library::new(&path).expect("load glibc libm") };
    let lib = Box::leak(Box::new(lib));
    unsafe {
        let sin: libloading::Symbol<UnaryFn> = lib.get(b"sin").expect("load sin");
        let cos: libloading::Symbol<UnaryFn> = lib.get(b"cos").expect("load cos");
        let tan: libloading::Symbol<UnaryFn> = lib.get(b"tan").expect("load tan");
        let exp: libloading::Symbol<UnaryFn> = lib.get(b"exp").expect("load exp");
        let expm1: libloading::Symbol<UnaryFn> = lib.get(b"expm1").expect("load expm1");
        let tgamma: libloading::Symbol<UnaryFn> = lib.get(b"tgamma").expect("load tgamma");
        let sinpi = lib.get::<UnaryFn>(b"sinpi").ok().map(|s| *s);
        let cospi = lib.get::<UnaryFn>(b"cospi").ok().map(|s| *s);
        let tanpi = lib.get::<UnaryFn>(b"tanpi").ok().map(|s| *s);
        eprintln!("Using libm from {path}");
        if sinpi.is_none() {
            eprintln!("libm has no sinpi; half-cycle baselines use sin(pi * x)");
        }
        LibmFns {
            sin: *sin,
            cos: *cos,
            tan: *tan,
            exp: *exp,
            expm1: *expm1,
            tgamma: *tgamma,
            sinpi,
            cospi,
            tanpi,
        }
    }
}

fn libm() -> &'static LibmFns {
    LIBM_FNS.get_or_init(load_libm)
}

#[inline(never)]
pub fn glibc_sin(x: f64) -> f64 {
    unsafe { (libm().sin)(x) }
}

#[inline(never)]
pub fn glibc_cos(x: f64) -> f64 {
    unsafe { (libm().cos)(x) }
}

#[inline(never)]
pub fn glibc_tan(x: f64) -> f64 {
    unsafe { (libm().tan)(x) }
}

#[inline(never)]
pub fn glibc_exp(x: f64) -> f64 {
    unsafe { (libm().exp)(x) }
}

#[inline(never)]
pub fn glibc_expm1(x: f64) -> f64 {
    unsafe { (libm().expm1)(x) }
}

#[inline(never)]
pub fn glibc_tgamma(x: f64) -> f64 {
    unsafe { (libm().tgamma)(x) }
}

#[inline(never)]
pub fn glibc_sinpi(x: f64) -> f64 {
    match libm().sinpi {
        Some(f) => unsafe { f(x) },
        None => unsafe { (libm().sin)(std::f64::consts::PI * x) },
    }
}

#[inline(never)]
pub fn glibc_cospi(x: f64) -> f64 {
    match libm().cospi {
        Some(f) => unsafe { f(x) },
        None => unsafe { (libm().cos)(std::f64::consts::PI * x) },
    }
}

#[inline(never)]
pub fn glibc_tanpi(x: f64) -> f64 {
    match libm().tanpi {
        Some(f) => unsafe { f(x) },
        None => unsafe { (libm().tan)(std::f64::consts::PI * x) },
    }
}
