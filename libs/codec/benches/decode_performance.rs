//! Decode throughput for realistic activity-trace messages
//!
//! Compares full verbose render, terse summary lines, the render-free skip
//! and the structured tree over the same buffer. Output goes to a sink so
//! only decoding and formatting are measured.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pcf_codec::fields::params::*;
use pcf_codec::{
    decode_message, parse_message_tree, skip, Cursor, PcfBuilder, RenderMode, RenderOptions,
    RenderState, DEFAULT_MAX_DEPTH,
};
use pcf_types::{Encoding, MessageType, PcfHeader};

/// Activity trace message with `operations` MQI operation groups
fn trace_message(operations: i32) -> Vec<u8> {
    let mut builder = PcfBuilder::new(Encoding::Little)
        .string(MQCA_Q_MGR_NAME, "QM1")
        .string(MQCACF_APPL_NAME, "amqsput")
        .integer(MQIA_PLATFORM, 3);

    for op in 0..operations {
        builder = builder.nested(MQGACF_ACTIVITY_TRACE, |g| {
            g.integer(MQIACF_OPERATION_ID, 8 + op % 4)
                .integer(MQIACF_THREAD_ID, 1)
                .string(MQCACF_OPERATION_DATE, "2024-03-01")
                .string(MQCACF_OPERATION_TIME, "10:15:00")
                .integer(MQIACF_COMP_CODE, 0)
                .integer(MQIACF_REASON_CODE, 0)
                .integer(MQIACF_HOBJ, op)
                .string(MQCACF_OBJECT_NAME, "APP.QUEUE")
                .nested(MQGACF_MQMD, |m| {
                    m.byte_string(MQBACF_MSG_ID, &[0x5A; 24])
                        .byte_string(MQBACF_CORREL_ID, &[0; 24])
                        .integer(MQIACF_PERSISTENCE, 1)
                })
        });
    }

    builder
        .build_message(PcfHeader::new(MessageType::AppActivity, 209))
        .expect("benchmark message builds")
}

fn bench_render_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_modes");

    for operations in [1, 16, 256] {
        let message = trace_message(operations);
        group.throughput(Throughput::Bytes(message.len() as u64));

        let verbose = RenderOptions::default();
        group.bench_with_input(
            BenchmarkId::new("verbose", operations),
            &message,
            |b, message| {
                b.iter(|| {
                    let mut state = RenderState::new();
                    decode_message(
                        black_box(message),
                        Encoding::Little,
                        &verbose,
                        &mut state,
                        &mut std::io::sink(),
                    )
                    .unwrap()
                })
            },
        );

        let terse = RenderOptions::default().with_mode(RenderMode::Terse);
        group.bench_with_input(BenchmarkId::new("terse", operations), &message, |b, message| {
            b.iter(|| {
                let mut state = RenderState::new();
                decode_message(
                    black_box(message),
                    Encoding::Little,
                    &terse,
                    &mut state,
                    &mut std::io::sink(),
                )
                .unwrap()
            })
        });

        group.bench_with_input(BenchmarkId::new("skip", operations), &message, |b, message| {
            b.iter(|| {
                let body = black_box(&message[PcfHeader::SIZE..]);
                let mut cursor = Cursor::new(body, Encoding::Little);
                skip(&mut cursor, 3 + operations as u32).unwrap()
            })
        });

        group.bench_with_input(BenchmarkId::new("tree", operations), &message, |b, message| {
            b.iter(|| {
                parse_message_tree(black_box(message), Encoding::Little, DEFAULT_MAX_DEPTH).unwrap()
            })
        });
    }

    group.finish();
}

fn bench_object_filter(c: &mut Criterion) {
    let message = trace_message(64);
    let miss = RenderOptions::default().with_object_filter("NOMATCH*");

    c.bench_function("object_filter_bypass", |b| {
        b.iter(|| {
            decode_message(
                black_box(&message),
                Encoding::Little,
                &miss,
                &mut RenderState::new(),
                &mut std::io::sink(),
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, bench_render_modes, bench_object_filter);
criterion_main!(benches);
