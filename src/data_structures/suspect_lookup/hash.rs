// Copyright (c) 2025 Detective Quest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Bucket hash for the suspect lookup table.
//!
//! A polynomial rolling hash with multiplier 31, reduced modulo the bucket
//! count after every byte so the running value never exceeds
//! `31 * bucket_count + 255`.

/// Multiplier of the rolling hash.
const HASH_MULTIPLIER: usize = 31;

/// Computes the bucket index of `text`.
///
/// # Arguments
///
/// * `text` - The key to hash. Its UTF-8 bytes are folded as unsigned values.
/// * `bucket_count` - Number of buckets; must be non-zero.
///
/// # Returns
///
/// An index in `[0, bucket_count)`.
pub(crate) fn bucket_index(text: &str, bucket_count: usize) -> usize {
    debug_assert!(bucket_count > 0, "bucket_count must be non-zero");
    text.bytes().fold(0, |index, byte| {
        (index * HASH_MULTIPLIER + usize::from(byte)) % bucket_count
    })
}
