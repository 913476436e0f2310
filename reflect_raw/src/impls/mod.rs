mod collections;
mod other;
mod primitives;
mod ptrs;
mod records;

#[cfg(feature = "num_bigint")]
mod bigint;
