use criterion::{Criterion, criterion_group, criterion_main};
use hid_powera_protocol::{ControllerState, parse_input_report};

fn benchmark_decode(c: &mut Criterion) {
    let valid = [0x3Fu8, 0x5A, 0x21, 0x03, 0x34, 0x12, 0xCD, 0xAB, 0x00, 0x80, 0xFF, 0x7F];
    let wrong_tag = [0x21u8; 12];
    let short = [0x3Fu8; 8];

    c.bench_function("parse_input_report valid", |b| {
        b.iter(|| std::hint::black_box(parse_input_report(std::hint::black_box(&valid)).ok()));
    });

    c.bench_function("parse_input_report wrong tag", |b| {
        b.iter(|| std::hint::black_box(parse_input_report(std::hint::black_box(&wrong_tag)).ok()));
    });

    c.bench_function("parse_input_report short", |b| {
        b.iter(|| std::hint::black_box(parse_input_report(std::hint::black_box(&short)).ok()));
    });
}

fn benchmark_state_walk(c: &mut Criterion) {
    let state = ControllerState::default();
    c.bench_function("ControllerState pressed_count", |b| {
        b.iter(|| std::hint::black_box(state.pressed_count()));
    });
}

criterion_group!(benches, benchmark_decode, benchmark_state_walk);
criterion_main!(benches);
