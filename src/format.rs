//! pt-BR display helpers for listing cards and share links.

use crate::config::SiteConfig;
use crate::models::{AreaUnit, PropertyRecord, PropertyType, Status};
use crate::search::digits_only;
use serde::Serialize;

/// Price without cents: 1250000.0 → "R$ 1.250.000"
pub fn format_price(price: f64) -> String {
    format!("R$ {}", group_thousands(price.max(0.0).round() as u64))
}

/// Price as shown inside a masked input, with cents; empty for an unset bound
pub fn format_currency_input(value: Option<f64>) -> String {
    match value {
        Some(v) if v > 0.0 => {
            let cents = (v * 100.0).round() as u64;
            format!("R$ {},{:02}", group_thousands(cents / 100), cents % 100)
        }
        _ => String::new(),
    }
}

/// Area with its unit: "3.000 m²", "2,5 ha" (at most three decimals)
pub fn format_area(area: f64, unit: AreaUnit) -> String {
    let millis = (area.max(0.0) * 1000.0).round() as u64;
    let whole = group_thousands(millis / 1000);
    let fraction = format!("{:03}", millis % 1000);
    let fraction = fraction.trim_end_matches('0');

    if fraction.is_empty() {
        format!("{} {}", whole, unit.as_str())
    } else {
        format!("{},{} {}", whole, fraction, unit.as_str())
    }
}

/// Text after the price: the stored suffix, or "/mês" for plain rentals
pub fn price_suffix_label(record: &PropertyRecord) -> Option<String> {
    let suffix = record.price_suffix.trim();
    if !suffix.is_empty() {
        Some(format!("/ {}", suffix.to_lowercase()))
    } else if record.property_type == PropertyType::Rent {
        Some("/mês".to_string())
    } else {
        None
    }
}

/// Badge text on the card
pub fn status_label(record: &PropertyRecord) -> &'static str {
    match (record.status, record.property_type) {
        (Status::Sold, _) => "Vendido",
        (Status::Rented, _) => "Alugado",
        (Status::Available, PropertyType::Sale) => "Venda",
        (Status::Available, PropertyType::Rent) => "Aluguel",
    }
}

pub fn listing_url(site_url: &str, id: &str) -> String {
    format!("{}/imovel/{}", site_url.trim_end_matches('/'), id)
}

/// Payload for the native share sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareData {
    pub title: String,
    pub text: String,
    pub url: String,
}

pub fn share_data(record: &PropertyRecord, site: &SiteConfig) -> ShareData {
    ShareData {
        title: format!("Imóvel em {}", record.city),
        text: format!(
            "Confira este imóvel: {} - {}",
            record.location,
            format_price(record.price)
        ),
        url: listing_url(&site.url, &record.id),
    }
}

/// Message pre-filled in the WhatsApp chat with the agency
pub fn whatsapp_message(record: &PropertyRecord, site: &SiteConfig) -> String {
    let mut lines = vec![
        "Olá! Tenho interesse neste imóvel:".to_string(),
        format!("📍 {}", record.location),
    ];
    if !record.neighborhood.is_empty() {
        lines.push(format!("Bairro: {}", record.neighborhood));
    }
    lines.push(format!("💰 {}", format_price(record.price)));
    lines.push(String::new());
    lines.push(format!("Link: {}", listing_url(&site.url, &record.id)));
    lines.join("\n")
}

pub fn whatsapp_link(record: &PropertyRecord, site: &SiteConfig) -> String {
    format!(
        "https://wa.me/{}?text={}",
        digits_only(&site.whatsapp),
        urlencoding::encode(&whatsapp_message(record, site))
    )
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn site() -> SiteConfig {
        SiteConfig {
            name: "Imobiliária".to_string(),
            url: "https://catalogo.example.com/".to_string(),
            whatsapp: "+55 (38) 99999-0000".to_string(),
        }
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.0), "R$ 0");
        assert_eq!(format_price(950.0), "R$ 950");
        assert_eq!(format_price(1_250_000.0), "R$ 1.250.000");
        assert_eq!(format_price(99_999.6), "R$ 100.000");
    }

    #[test]
    fn test_format_currency_input() {
        assert_eq!(format_currency_input(Some(1250.5)), "R$ 1.250,50");
        assert_eq!(format_currency_input(Some(0.0)), "");
        assert_eq!(format_currency_input(None), "");
    }

    #[test]
    fn test_format_area() {
        assert_eq!(format_area(3000.0, AreaUnit::SquareMeters), "3.000 m²");
        assert_eq!(format_area(2.5, AreaUnit::Hectares), "2,5 ha");
        assert_eq!(format_area(0.1234, AreaUnit::Hectares), "0,123 ha");
    }

    #[test]
    fn test_suffix_and_status_labels() {
        let mut record = PropertyRecord::new("1", Utc::now());
        assert_eq!(price_suffix_label(&record), None);
        assert_eq!(status_label(&record), "Venda");

        record.property_type = PropertyType::Rent;
        assert_eq!(price_suffix_label(&record).as_deref(), Some("/mês"));
        assert_eq!(status_label(&record), "Aluguel");

        record.price_suffix = "Cada".to_string();
        assert_eq!(price_suffix_label(&record).as_deref(), Some("/ cada"));

        record.status = Status::Rented;
        assert_eq!(status_label(&record), "Alugado");
    }

    #[test]
    fn test_share_data() {
        let mut record = PropertyRecord::new("abc", Utc::now());
        record.city = "Porteirinha".to_string();
        record.location = "Rua A, 10".to_string();
        record.price = 200_000.0;

        let share = share_data(&record, &site());
        assert_eq!(share.title, "Imóvel em Porteirinha");
        assert_eq!(share.text, "Confira este imóvel: Rua A, 10 - R$ 200.000");
        assert_eq!(share.url, "https://catalogo.example.com/imovel/abc");
    }

    #[test]
    fn test_whatsapp_link() {
        let mut record = PropertyRecord::new("abc", Utc::now());
        record.location = "Rua A".to_string();
        record.neighborhood = "Centro".to_string();
        record.price = 1000.0;

        let message = whatsapp_message(&record, &site());
        assert!(message.contains("Bairro: Centro"));
        assert!(message.ends_with("Link: https://catalogo.example.com/imovel/abc"));

        let link = whatsapp_link(&record, &site());
        assert!(link.starts_with("https://wa.me/5538999990000?text=Ol%C3%A1%21"));
        assert!(!link.contains(' '));
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(123), "123");
        assert_eq!(group_thousands(1234), "1.234");
        assert_eq!(group_thousands(1_234_567), "1.234.567");
    }
}
