use core::ffi::{c_char, c_int, c_long};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use stutils::conversion::{parse_int, parse_long};

unsafe extern "C" {
    #[link_name = "strtol"]
    fn libc_strtol(s: *const c_char, endptr: *mut *mut c_char, base: c_int) -> c_long;
}

fn parse_benches(c: &mut Criterion) {
    let cases: [(&str, &[u8], u32); 5] = [
        ("dec_short", b"42\0", 10),
        ("dec_max", b"2147483647\0", 10),
        ("dec_negative_long", b"-9223372036854775807\0", 10),
        ("hex", b"-7fffffff\0", 16),
        ("base36", b"zik0zj\0", 36),
    ];

    let mut group = c.benchmark_group("parse_int");
    for (label, text, base) in cases {
        group.bench_with_input(BenchmarkId::new("libc_strtol", label), &text, |b, text| {
            b.iter(|| unsafe {
                let mut end: *mut c_char = core::ptr::null_mut();
                black_box(libc_strtol(
                    black_box(text.as_ptr() as *const c_char),
                    &mut end,
                    base as c_int,
                ))
            });
        });

        group.bench_with_input(BenchmarkId::new("stutils_int", label), &text, |b, text| {
            b.iter(|| black_box(parse_int(black_box(text), base).is_ok()));
        });

        group.bench_with_input(BenchmarkId::new("stutils_long", label), &text, |b, text| {
            b.iter(|| black_box(parse_long(black_box(text), base).is_ok()));
        });
    }
    group.finish();
}

criterion_group!(benches, parse_benches);
criterion_main!(benches);
