//! alt-bn128 base field element benchmarks

use altbn128::Fq;
use criterion::{criterion_group, criterion_main};
use hex_literal::hex;

fn test_field_element_x() -> Fq {
    Fq::from_bytes(&hex!(
        "1c76476f4def4bb94541d57ebba1193381ffa7aa76ada664dd31c16024c43f59"
    ))
    .unwrap()
}

fn test_field_element_y() -> Fq {
    Fq::from_bytes(&hex!(
        "3034dd2920f673e204fee2811c678745fc819b55d3e9d294e45c9b03a76aef41"
    ))
    .unwrap()
}

altbn128::bench_field!(
    bench_field_element,
    "field element operations",
    test_field_element_x(),
    test_field_element_y()
);

criterion_group!(benches, bench_field_element);
criterion_main!(benches);
