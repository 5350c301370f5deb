use criterion::{Criterion, criterion_group, criterion_main};
use fixconv::{Fixed64, Fixed128};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::{hint::black_box, str::FromStr};

type Price = Fixed64<18, 8>;
type Wei = Fixed128<38, 18>;

// ============================================================================
// JSON Serialization/Deserialization
// ============================================================================

fn bench_fixed64_serialize_json(c: &mut Criterion) {
    c.bench_function("fixed64_serialize_json", |b| {
        let d = Price::from_str("123.456789").unwrap();
        b.iter(|| black_box(serde_json::to_string(&black_box(d)).unwrap()));
    });
}

fn bench_fixed64_deserialize_json(c: &mut Criterion) {
    c.bench_function("fixed64_deserialize_json", |b| {
        let json = r#""123.456789""#;
        b.iter(|| black_box(serde_json::from_str::<Price>(black_box(json)).unwrap()));
    });
}

fn bench_fixed128_roundtrip_json(c: &mut Criterion) {
    c.bench_function("fixed128_roundtrip_json", |b| {
        let d = Wei::from_str("2500.123456789012").unwrap();
        b.iter(|| {
            let json = serde_json::to_string(&black_box(d)).unwrap();
            black_box(serde_json::from_str::<Wei>(&json).unwrap())
        });
    });
}

fn bench_rust_decimal_serialize_json(c: &mut Criterion) {
    c.bench_function("rust_decimal_serialize_json", |b| {
        let d = Decimal::from_str_exact("123.456789").unwrap();
        b.iter(|| black_box(serde_json::to_string(&black_box(d)).unwrap()));
    });
}

fn bench_rust_decimal_deserialize_json(c: &mut Criterion) {
    c.bench_function("rust_decimal_deserialize_json", |b| {
        let json = r#""123.456789""#;
        b.iter(|| black_box(serde_json::from_str::<Decimal>(black_box(json)).unwrap()));
    });
}

// ============================================================================
// Struct with Multiple Fields
// ============================================================================

#[derive(Serialize, Deserialize, Clone, Copy)]
struct Order {
    price: Price,
    quantity: Price,
    fee: Price,
}

fn bench_struct_serialize_json(c: &mut Criterion) {
    c.bench_function("fixed64_struct_serialize_json", |b| {
        let order = Order {
            price: Price::from_str("1234.56").unwrap(),
            quantity: Price::from_str("100").unwrap(),
            fee: Price::from_str("0.25").unwrap(),
        };
        b.iter(|| black_box(serde_json::to_string(&black_box(order)).unwrap()));
    });
}

fn bench_struct_deserialize_json(c: &mut Criterion) {
    c.bench_function("fixed64_struct_deserialize_json", |b| {
        let json = r#"{"price":"1234.56","quantity":"100","fee":"0.25"}"#;
        b.iter(|| black_box(serde_json::from_str::<Order>(black_box(json)).unwrap()));
    });
}

// ============================================================================
// Binary Serialization (raw integers)
// ============================================================================

fn bench_fixed64_serialize_bincode(c: &mut Criterion) {
    c.bench_function("fixed64_serialize_bincode", |b| {
        let d = Price::from_str("123.456789").unwrap();
        b.iter(|| black_box(bincode::serialize(&black_box(d)).unwrap()));
    });
}

fn bench_fixed64_deserialize_bincode(c: &mut Criterion) {
    c.bench_function("fixed64_deserialize_bincode", |b| {
        let d = Price::from_str("123.456789").unwrap();
        let bytes = bincode::serialize(&d).unwrap();
        b.iter(|| black_box(bincode::deserialize::<Price>(black_box(&bytes)).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_fixed64_serialize_json,
    bench_fixed64_deserialize_json,
    bench_fixed128_roundtrip_json,
    bench_rust_decimal_serialize_json,
    bench_rust_decimal_deserialize_json,
    bench_struct_serialize_json,
    bench_struct_deserialize_json,
    bench_fixed64_serialize_bincode,
    bench_fixed64_deserialize_bincode,
);

criterion_main!(benches);
