mod mixed_radix_enumerator;

pub use mixed_radix_enumerator::MixedRadixEnumerator;
