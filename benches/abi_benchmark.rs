use criterion::{black_box, criterion_group, criterion_main, Criterion};
use genip::abi;
use genip::models;

pub fn bench_command_encoding(c: &mut Criterion) {
    c.bench_function("encode_reg_access_commands", |b| {
        b.iter(|| {
            let ty = black_box(abi::GENIP_IOCTL_TYPE);
            (
                abi::iow::<abi::GenipRegAccess>(ty, abi::GENIP_IOCTL_NR_REG_WRITE),
                abi::iowr::<abi::GenipRegAccess>(ty, abi::GENIP_IOCTL_NR_REG_READ),
            )
        })
    });
}

pub fn bench_model_lookup(c: &mut Criterion) {
    c.bench_function("find_by_compatible", |b| {
        b.iter(|| models::find_by_compatible(black_box("tes,d2d-1.0")))
    });
}

pub fn bench_device_scan(c: &mut Criterion) {
    c.bench_function("find_devices", |b| b.iter(|| genip::find_devices()));
}

criterion_group!(
    benches,
    bench_command_encoding,
    bench_model_lookup,
    bench_device_scan
);
criterion_main!(benches);
