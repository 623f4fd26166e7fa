use crate::models::Listing;
use crate::polish::Polisher;
use std::sync::Arc;
use tracing::{debug, warn};

/// Render a number with comma thousands separators, keeping two decimals
/// only when there is a fractional part
pub fn group_thousands(value: f64) -> String {
    let rendered = if value.fract() == 0.0 {
        format!("{:.0}", value.abs())
    } else {
        format!("{:.2}", value.abs())
    };
    let (whole, fraction) = match rendered.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (rendered.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    match fraction {
        Some(fraction) => format!("{}{}.{}", sign, grouped, fraction),
        None => format!("{}{}", sign, grouped),
    }
}

fn plain_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

fn bedrooms_label(bedrooms: u32) -> String {
    if bedrooms > 0 {
        format!("{} BHK", bedrooms)
    } else {
        "Studio".to_string()
    }
}

/// Fixed plain-text description of a listing
pub fn render_template(listing: &Listing) -> String {
    format!(
        "{} - {} ({} sqft) in {}.\nPrice: {} {}.\nStatus: {}.\nDescription: {}\nContact: {}",
        listing.name,
        bedrooms_label(listing.bedrooms),
        plain_number(listing.area),
        listing.city,
        group_thousands(listing.price),
        listing.currency,
        listing.availability,
        listing.description,
        listing.contact,
    )
}

/// Turns listings into replies, optionally polished by an external service
#[derive(Clone)]
pub struct ResponseFormatter {
    polisher: Arc<dyn Polisher>,
}

impl ResponseFormatter {
    pub fn new(polisher: Arc<dyn Polisher>) -> Self {
        Self { polisher }
    }

    /// Polished description, or the raw template when polishing fails
    pub async fn format(&self, listing: &Listing) -> String {
        let template = render_template(listing);
        match self.polisher.polish(&template).await {
            Ok(polished) => {
                debug!("Polished listing {} with {}", listing.id, self.polisher.name());
                polished
            }
            Err(e) => {
                warn!(
                    "Polish via {} failed for {}, using template: {}",
                    self.polisher.name(),
                    listing.id,
                    e
                );
                template
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::fixtures::sample_catalog;
    use crate::error::PolishError;
    use async_trait::async_trait;

    struct FailingPolisher;

    #[async_trait]
    impl Polisher for FailingPolisher {
        async fn polish(&self, _text: &str) -> Result<String, PolishError> {
            Err(PolishError::Timeout)
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    struct ShoutingPolisher;

    #[async_trait]
    impl Polisher for ShoutingPolisher {
        async fn polish(&self, text: &str) -> Result<String, PolishError> {
            Ok(text.to_uppercase())
        }

        fn name(&self) -> &'static str {
            "shouting"
        }
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1000.0), "1,000");
        assert_eq!(group_thousands(8_500_000.0), "8,500,000");
        assert_eq!(group_thousands(1234567.5), "1,234,567.50");
        assert_eq!(group_thousands(-2500.0), "-2,500");
    }

    #[test]
    fn test_render_template_bhk_and_studio() {
        let catalog = sample_catalog();

        let sunrise = render_template(catalog.lookup_by_id("P001").unwrap());
        assert_eq!(
            sunrise,
            "Sunrise Apartments - 2 BHK (950 sqft) in Mumbai.\n\
             Price: 8,500,000 INR.\n\
             Status: Available.\n\
             Description: Sunrise Apartments in Mumbai.\n\
             Contact: p001@zorever.com"
        );

        let marina = render_template(catalog.lookup_by_id("P003").unwrap());
        assert!(marina.starts_with("Marina Studio - Studio (420 sqft) in Goa."));
    }

    #[tokio::test]
    async fn test_polish_failure_returns_exact_template() {
        let catalog = sample_catalog();
        let listing = catalog.lookup_by_id("P002").unwrap();
        let formatter = ResponseFormatter::new(Arc::new(FailingPolisher));

        assert_eq!(formatter.format(listing).await, render_template(listing));
    }

    #[tokio::test]
    async fn test_polish_success_replaces_template() {
        let catalog = sample_catalog();
        let listing = catalog.lookup_by_id("P004").unwrap();
        let formatter = ResponseFormatter::new(Arc::new(ShoutingPolisher));

        assert_eq!(
            formatter.format(listing).await,
            render_template(listing).to_uppercase()
        );
    }
}
