use rand::Rng;

const REFERENCE_PREFIX: &str = "ITECH-";
const REFERENCE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const REFERENCE_LEN: usize = 6;

/// Customer-facing booking reference, e.g. `ITECH-7K2Q9A`.
pub fn generate_booking_reference() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..REFERENCE_LEN)
        .map(|_| REFERENCE_CHARSET[rng.gen_range(0..REFERENCE_CHARSET.len())] as char)
        .collect();
    format!("{REFERENCE_PREFIX}{suffix}")
}
