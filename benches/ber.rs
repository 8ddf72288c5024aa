//! BER decoding benchmarks.
//!
//! Trap receivers decode every datagram they see, so the decoder is on the
//! hot path.

use bytes::Bytes;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use snmp_trapv1::ber::Decoder;
use snmp_trapv1::{DecodeOptions, TrapMessage};
use std::hint::black_box;

/// Encode a length the way agents do.
fn length(len: usize) -> Vec<u8> {
    match len {
        0..=0x7F => vec![len as u8],
        0x80..=0xFF => vec![0x81, len as u8],
        _ => vec![0x82, (len >> 8) as u8, len as u8],
    }
}

fn tlv(tag: u8, content: &[u8]) -> Vec<u8> {
    let mut out = vec![tag];
    out.extend(length(content.len()));
    out.extend_from_slice(content);
    out
}

/// A linkDown-style trap carrying `n` ifDescr varbinds.
fn trap_with_varbinds(n: usize) -> Bytes {
    let mut list = Vec::new();
    for i in 0..n {
        let oid = [0x2B, 6, 1, 2, 1, 2, 2, 1, 2, (i % 128) as u8];
        let mut vb = tlv(0x06, &oid);
        vb.extend(tlv(0x04, format!("GigabitEthernet0/{}", i).as_bytes()));
        list.extend(tlv(0x30, &vb));
    }

    let mut pdu = tlv(0x06, &[0x2B, 6, 1, 4, 1, 9, 1, 0x84, 0x3A]);
    pdu.extend(tlv(0x40, &[192, 168, 1, 1]));
    pdu.extend(tlv(0x02, &[2]));
    pdu.extend(tlv(0x02, &[0]));
    pdu.extend(tlv(0x43, &[0x12, 0x34, 0x56, 0x78]));
    pdu.extend(tlv(0x30, &list));

    let mut msg = tlv(0x02, &[0]);
    msg.extend(tlv(0x04, b"public"));
    msg.extend(tlv(0xA4, &pdu));
    Bytes::from(tlv(0x30, &msg))
}

/// Benchmark OID content decoding
fn bench_oid_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("oid_decode");

    let cases: [(&str, &[u8]); 3] = [
        ("sysUpTime", &[0x06, 0x08, 0x2B, 6, 1, 2, 1, 1, 3, 0]),
        ("enterprise", &[0x06, 0x06, 0x2B, 6, 1, 4, 1, 9]),
        (
            "multibyte",
            &[0x06, 0x0B, 0x2B, 6, 1, 4, 1, 0x82, 0x37, 0x8F, 0xFF, 0xFF, 0x7F],
        ),
    ];

    for (name, encoded) in cases {
        let data = Bytes::copy_from_slice(encoded);
        group.bench_with_input(BenchmarkId::new("read_oid", name), &data, |b, data| {
            b.iter(|| {
                let mut dec = Decoder::new(data.clone());
                black_box(dec.read_oid().unwrap())
            })
        });
    }

    group.finish();
}

/// Benchmark full message decoding by varbind count
fn bench_trap_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("trap_decode");

    for n in [0, 1, 10, 50] {
        let data = trap_with_varbinds(n);
        group.throughput(Throughput::Bytes(data.len() as u64));

        group.bench_with_input(BenchmarkId::new("default", n), &data, |b, data| {
            b.iter(|| black_box(TrapMessage::decode(data.clone()).unwrap()))
        });

        let strict = DecodeOptions::strict();
        group.bench_with_input(BenchmarkId::new("strict", n), &data, |b, data| {
            b.iter(|| black_box(TrapMessage::decode_with(data.clone(), &strict).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_oid_decode, bench_trap_decode);
criterion_main!(benches);
