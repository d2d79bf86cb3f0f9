use core::ffi::c_char;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use std::time::Duration;
use stutils::str::string_length;

unsafe extern "C" {
    #[link_name = "strlen"]
    fn libc_strlen(s: *const c_char) -> usize;
}

fn configure_group_for_len(
    group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>,
    len: usize,
) {
    if len >= 1 << 16 {
        group.sample_size(30);
        group.warm_up_time(Duration::from_millis(250));
        group.measurement_time(Duration::from_millis(700));
    } else {
        group.sample_size(40);
        group.warm_up_time(Duration::from_millis(200));
        group.measurement_time(Duration::from_millis(500));
    }
}

fn string_length_benches(c: &mut Criterion) {
    let sizes = [31usize, 256, 1024, 4096, 65536];

    let mut group = c.benchmark_group("string_length");
    for len in sizes {
        for (label, nul_pos) in [("nul_mid", len / 2), ("nul_tail", len)] {
            let mut buf: Vec<u8> = (0..=len)
                .map(|i| ((i * 37 + len * 11 + 3) % 251) as u8)
                .map(|v| v.max(1))
                .collect();
            buf[nul_pos] = 0;
            let s = buf.as_slice();
            let case = format!("size_{len}_{label}");

            configure_group_for_len(&mut group, len);
            group.throughput(Throughput::Bytes((nul_pos + 1) as u64));

            group.bench_with_input(BenchmarkId::new("libc", &case), &len, |b, _| {
                b.iter(|| unsafe {
                    black_box(libc_strlen(black_box(s.as_ptr() as *const c_char)));
                });
            });

            group.bench_with_input(BenchmarkId::new("stutils", &case), &len, |b, _| {
                b.iter(|| black_box(string_length(black_box(s))));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, string_length_benches);
criterion_main!(benches);
