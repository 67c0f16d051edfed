//! # Shared Utility Functions
//!
//! ## Account Formatting
//!
//! Functions for formatting account identifiers (principals) for display:
//! - [`format_address`] - Format an identifier with ellipsis (first N and last M characters)
//! - [`truncate_address`] - `format_address` with the badge defaults (5 and 5)
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let principal = "rwlgt-iiaaa-aaaaa-aaaaa-cai";
//! assert_eq!(format_address(principal, 4, 4), "rwlg...-cai");
//! ```

/// Characters kept at each end by [`truncate_address`]
pub const BADGE_EDGE_LEN: usize = 5;

/// Format an account identifier by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the identifier is not longer than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let principal = "rwlgt-iiaaa-aaaaa-aaaaa-cai";
/// assert_eq!(format_address(principal, 5, 5), "rwlgt...a-cai");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let chars: Vec<char> = address.chars().collect();

    if chars.len() <= prefix_len + suffix_len {
        return address.to_string();
    }

    // Slice on chars: identifiers come from browser extensions and are not guaranteed ASCII
    let prefix: String = chars[..prefix_len].iter().collect();
    let suffix: String = chars[chars.len() - suffix_len..].iter().collect();

    format!("{}...{}", prefix, suffix)
}

/// Format an account identifier with the connected-badge defaults.
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// assert_eq!(truncate_address("rwlgt-iiaaa-aaaaa-aaaaa-cai"), "rwlgt...a-cai");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, BADGE_EDGE_LEN, BADGE_EDGE_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        let principal = "d2ws6-6dxfc-ktmgz-2ejai-rlvvs-s6loc-ldtpv-kbsx5-v6m3p-jvnbj-eqe";
        assert_eq!(format_address(principal, 5, 5), "d2ws6...j-eqe");
        assert_eq!(format_address(principal, 2, 3), "d2...eqe");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("2vxsx-fae", 5, 5), "2vxsx-fae");
        assert_eq!(format_address("abcdefghij", 5, 5), "abcdefghij");
        assert_eq!(format_address("", 5, 5), "");
    }

    #[test]
    fn test_format_address_non_ascii() {
        assert_eq!(format_address("ääääää-bbbbbb", 2, 2), "ää...bb");
    }

    #[test]
    fn test_truncate_address() {
        assert_eq!(truncate_address("rwlgt-iiaaa-aaaaa-aaaaa-cai"), "rwlgt...a-cai");
    }
}
