//! National identity number check-digit validation.
//!
//! Shared by every checksum-class field in the rule table (`Teudat_Zehut`
//! and `current_owner`).

/// Check a submitted national ID number.
///
/// The value is trimmed, rejected unless it is 1-9 ASCII digits, left-padded
/// with zeros to 9 digits, and verified with the alternating 1/2-weight
/// check-digit scheme: each digit is multiplied by its weight, two-digit
/// products are folded to their digit sum, and the total must be divisible
/// by 10.
///
/// # Examples
///
/// ```
/// use fourd_core::validation::israeli_id;
///
/// assert!(israeli_id::is_valid("123456782"));
/// assert!(!israeli_id::is_valid("123456789"));
/// ```
pub fn is_valid(id_number: &str) -> bool {
    let id_number = id_number.trim();
    if id_number.is_empty() || id_number.len() > 9 {
        return false;
    }
    if !id_number.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    // Left-pad to exactly 9 digits; the 9th is the check digit.
    let mut digits = [0u32; 9];
    let offset = 9 - id_number.len();
    for (i, b) in id_number.bytes().enumerate() {
        digits[offset + i] = u32::from(b - b'0');
    }

    let mut total = 0;
    let mut weight = 1;
    for digit in digits {
        let product = digit * weight;
        total += if product < 10 {
            product
        } else {
            product / 10 + product % 10
        };
        weight = if weight == 1 { 2 } else { 1 };
    }
    total % 10 == 0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
