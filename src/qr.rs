//! # WiFi QR Codes
//!
//! Builds the standard WiFi provisioning payload and encodes it as a square
//! black-on-white matrix with no quiet zone, scaled to a fixed pixel size.
//!
//! ```
//! use cardpress::qr::wifi_payload;
//!
//! assert_eq!(wifi_payload("Guest", "abc00000"), "WIFI:T:WPA;S:Guest;P:abc00000;;");
//! ```

use image::{GrayImage, Luma, imageops::{self, FilterType}};
use qrcode::{Color, EcLevel, QrCode};

use crate::error::CardError;

/// WiFi provisioning string for a WPA network.
///
/// Fields are inserted verbatim; sanitized input never contains the
/// reserved `;`, `,`, `"` or `\` characters.
pub fn wifi_payload(ssid: &str, password: &str) -> String {
    format!("WIFI:T:WPA;S:{};P:{};;", ssid, password)
}

/// Encode `payload` at error level L, smallest fitting version, no border,
/// resized to `size` x `size` pixels with nearest-neighbour sampling.
pub fn encode(payload: &str, size: u32) -> Result<GrayImage, CardError> {
    let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::L)
        .map_err(|e| CardError::Qr(format!("QR code generation failed: {}", e)))?;

    let modules = code.width() as u32;
    let colors = code.to_colors();
    let matrix = GrayImage::from_fn(modules, modules, |x, y| {
        let is_dark = colors[(y * modules + x) as usize] == Color::Dark;
        Luma([if is_dark { 0u8 } else { 255u8 }])
    });

    Ok(imageops::resize(&matrix, size, size, FilterType::Nearest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::normalize_credentials;

    #[test]
    fn test_payload_after_padding() {
        let (ssid, password) = normalize_credentials("Guest".into(), "abc".into());
        assert_eq!(wifi_payload(&ssid, &password), "WIFI:T:WPA;S:Guest;P:abc00000;;");
    }

    #[test]
    fn test_encode_fixed_size() {
        let img = encode("WIFI:T:WPA;S:NetA;P:pw100000;;", 110).unwrap();
        assert_eq!(img.dimensions(), (110, 110));
    }

    #[test]
    fn test_encode_is_black_and_white() {
        let img = encode("WIFI:T:WPA;S:NetB;P:longpassword;;", 110).unwrap();
        assert!(img.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
        assert!(img.pixels().any(|p| p.0[0] == 0));
        assert!(img.pixels().any(|p| p.0[0] == 255));
    }

    #[test]
    fn test_no_quiet_zone() {
        // Finder patterns start at the very corner when there is no border.
        let img = encode("WIFI:T:WPA;S:x;P:12345678;;", 110).unwrap();
        assert_eq!(img.get_pixel(0, 0).0[0], 0);
        assert_eq!(img.get_pixel(109, 0).0[0], 0);
        assert_eq!(img.get_pixel(0, 109).0[0], 0);
    }

    #[test]
    fn test_minimal_version() {
        let code = QrCode::with_error_correction_level(
            wifi_payload("Guest", "abc00000").as_bytes(),
            EcLevel::L,
        )
        .unwrap();
        // 31 bytes fit version 2 at level L (21 + 4 modules).
        assert_eq!(code.width(), 25);
    }

    #[test]
    fn test_oversized_payload_fails() {
        let payload = "x".repeat(4000);
        assert!(matches!(encode(&payload, 110), Err(CardError::Qr(_))));
    }
}
